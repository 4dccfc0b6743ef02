//! Rotate Attr Core - data-attribute driven CSS rotation
//!
//! This crate reads a per-element rotation annotation (`data-rotate`) and
//! writes the matching `rotate(<deg>deg)` transform to the element's inline
//! style, across the vendor-prefixed and standard transform properties.
//!
//! Elements are injected through the [`RotationTarget`] trait, so the same
//! pass runs against a live DOM (see `rotate-attr-wasm`) or against
//! [`MemoryElement`]s.

pub mod annotation;
pub mod config;
pub mod decorator;
pub mod error;
pub mod memory;
pub mod transform;

pub use annotation::{resolve_annotation, AnnotationPolicy, Rotation};
pub use config::{DecoratorConfig, IMAGE_SELECTOR, ROTATE_ATTRIBUTE};
pub use decorator::{decorate, DecorationReport, ElementIssue, RotationTarget};
pub use error::RotationError;
pub use memory::MemoryElement;
pub use transform::{TransformValue, TRANSFORM_PROPERTIES};
