//! Rotate Attr WASM - WebAssembly bindings for Rotate Attr
//!
//! This crate exposes the rotate-attr-core decorator to page scripts,
//! applying `data-rotate` annotations to live DOM elements.
//!
//! # Module Structure
//!
//! - `element` - Adapts `web-sys` elements to the core `RotationTarget` trait
//! - `rotate` - Exported decoration entry points
//! - `types` - WASM-compatible wrapper for the pass report
//!
//! # Usage
//!
//! ```typescript
//! import init, { rotate_images } from '@rotate-attr/wasm';
//!
//! await init();
//!
//! // <img src="logo.png" data-rotate="45">
//! const report = rotate_images();
//! console.log(`Rotated ${report.rotated} of ${report.total} images`);
//! ```

use wasm_bindgen::prelude::*;

mod element;
mod rotate;
mod types;

pub use element::{DomError, DomTarget};
pub use rotate::{rotate_elements, rotate_images, rotate_images_on_ready};
pub use types::JsRotationReport;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
