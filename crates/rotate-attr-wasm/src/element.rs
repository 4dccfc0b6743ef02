//! Live DOM elements as rotation targets.

use rotate_attr_core::RotationTarget;
use std::fmt;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// Error text from a failed DOM call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomError(String);

impl DomError {
    pub(crate) fn from_js(value: &JsValue) -> Self {
        Self(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An entry of a decoration pass over the page.
///
/// Entries that are not `HTMLElement`s have no inline style. They are kept
/// in the pass, and skipped before any read or write, so reported positions
/// match the caller's collection.
pub enum DomTarget {
    Html(HtmlElement),
    Unsupported,
}

impl DomTarget {
    /// Wrap an arbitrary JS value.
    pub fn from_js(value: JsValue) -> Self {
        match value.dyn_into::<HtmlElement>() {
            Ok(el) => DomTarget::Html(el),
            Err(_) => DomTarget::Unsupported,
        }
    }
}

impl RotationTarget for DomTarget {
    type Error = DomError;

    fn data_attribute(&self, name: &str) -> Option<String> {
        match self {
            DomTarget::Html(el) => el.get_attribute(name),
            DomTarget::Unsupported => None,
        }
    }

    fn set_style_property(&mut self, property: &str, value: &str) -> Result<(), Self::Error> {
        match self {
            DomTarget::Html(el) => el
                .style()
                .set_property(property, value)
                .map_err(|e| DomError::from_js(&e)),
            DomTarget::Unsupported => Err(DomError("not an HTMLElement".to_string())),
        }
    }

    fn unsupported_reason(&self) -> Option<String> {
        match self {
            DomTarget::Html(_) => None,
            DomTarget::Unsupported => Some("not an HTMLElement".to_string()),
        }
    }
}
