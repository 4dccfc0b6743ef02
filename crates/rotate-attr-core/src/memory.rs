//! In-memory element for hosting the decorator outside a browser.

use crate::decorator::RotationTarget;
use std::collections::HashMap;
use std::convert::Infallible;

/// A detached element: markup attributes plus inline style declarations.
///
/// Style declarations keep their first-insertion order, like a
/// `CSSStyleDeclaration`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    attributes: HashMap<String, String>,
    style: Vec<(String, String)>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Value of an inline style property, if set.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Number of inline style declarations.
    pub fn style_len(&self) -> usize {
        self.style.len()
    }

    /// Serialize the inline style as a `style` attribute value.
    pub fn style_text(&self) -> String {
        self.style
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl RotationTarget for MemoryElement {
    type Error = Infallible;

    fn data_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_style_property(&mut self, property: &str, value: &str) -> Result<(), Self::Error> {
        match self.style.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.style.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }
}
