//! Decoration entry points for page scripts.
//!
//! # Functions
//!
//! - [`rotate_images`] - Decorate every `img` in the current document
//! - [`rotate_elements`] - Decorate a caller-supplied array of elements
//! - [`rotate_images_on_ready`] - Run [`rotate_images`] once the document is parsed
//!
//! # Example
//!
//! ```typescript
//! import init, { rotate_images_on_ready, rotate_elements } from '@rotate-attr/wasm';
//!
//! await init();
//! rotate_images_on_ready();
//!
//! // Later, for images added by the app:
//! const report = rotate_elements(Array.from(gallery.querySelectorAll('img')), { policy: 'strict' });
//! console.log(`${report.rotated} rotated, ${report.rejected} rejected`);
//! ```

use crate::element::DomTarget;
use crate::types::JsRotationReport;
use rotate_attr_core::{decorate, DecorationReport, DecoratorConfig, IMAGE_SELECTOR};
use wasm_bindgen::prelude::*;
use web_sys::{console, AddEventListenerOptions, Document};

/// Decorate every `img` element in the current document.
///
/// # Arguments
///
/// * `config` - Optional `{ policy: "permissive" | "strict" }` object
///
/// # Errors
///
/// Returns an error if the config cannot be decoded or there is no document.
#[wasm_bindgen]
pub fn rotate_images(config: JsValue) -> Result<JsRotationReport, JsValue> {
    let config = config_from_js(config)?;
    let document = current_document()?;
    run_on_document(&document, &config)
}

/// Decorate the given elements, in array order.
///
/// Entries that are not HTML elements are skipped and reported.
///
/// # Errors
///
/// Returns an error if the config cannot be decoded.
#[wasm_bindgen]
pub fn rotate_elements(
    elements: js_sys::Array,
    config: JsValue,
) -> Result<JsRotationReport, JsValue> {
    let config = config_from_js(config)?;
    let targets = elements.iter().map(DomTarget::from_js);
    Ok(run(targets, &config))
}

/// Decorate the document's images as soon as it has been parsed.
///
/// Runs immediately when `document.readyState` is past `loading`; otherwise
/// registers a one-shot `DOMContentLoaded` listener.
///
/// # Errors
///
/// Returns an error if the config cannot be decoded, there is no document,
/// or the listener cannot be registered.
#[wasm_bindgen]
pub fn rotate_images_on_ready(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(config)?;
    let document = current_document()?;

    if is_parsing(&document.ready_state()) {
        defer_until_parsed(&document, config)
    } else {
        run_on_document(&document, &config).map(|_| ())
    }
}

/// Decode an optional JS config object. `undefined` and `null` give defaults.
pub(crate) fn config_from_js(value: JsValue) -> Result<DecoratorConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(DecoratorConfig::default());
    }

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid decorator config: {}", e)))
}

fn is_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Register a one-shot `DOMContentLoaded` listener that decorates `document`.
fn defer_until_parsed(document: &Document, config: DecoratorConfig) -> Result<(), JsValue> {
    let target = document.clone();
    let callback = Closure::once_into_js(move || {
        if let Err(e) = run_on_document(&target, &config) {
            console::error_1(&e);
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &options,
    )
}

fn current_document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

fn run_on_document(
    document: &Document,
    config: &DecoratorConfig,
) -> Result<JsRotationReport, JsValue> {
    let nodes = document.query_selector_all(IMAGE_SELECTOR)?;
    let targets = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .map(|node| DomTarget::from_js(node.into()));
    Ok(run(targets, config))
}

fn run<I>(targets: I, config: &DecoratorConfig) -> JsRotationReport
where
    I: IntoIterator<Item = DomTarget>,
{
    let report = decorate(targets, config);
    log_report(&report);
    JsRotationReport::from_report(&report)
}

fn log_report(report: &DecorationReport) {
    for rejected in &report.rejected {
        console::warn_1(&JsValue::from_str(&format!(
            "rotate-attr: element {} defaulted to 0deg: {}",
            rejected.index, rejected.reason
        )));
    }
    for skipped in &report.skipped {
        console::warn_1(&JsValue::from_str(&format!(
            "rotate-attr: element {} skipped: {}",
            skipped.index, skipped.reason
        )));
    }
    console::debug_1(&JsValue::from_str(&format!(
        "rotate-attr: {} rotated, {} defaulted, {} skipped",
        report.rotated,
        report.defaulted,
        report.skipped.len()
    )));
}
