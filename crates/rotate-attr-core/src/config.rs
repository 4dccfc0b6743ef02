//! Decorator configuration.
//!
//! The only setting is how annotation text is validated. Which elements are
//! decorated, which attribute is read and which properties are written are
//! fixed.

use crate::annotation::AnnotationPolicy;
use serde::{Deserialize, Serialize};

/// CSS selector for the elements a document pass decorates.
pub const IMAGE_SELECTOR: &str = "img";

/// Markup attribute holding the rotation in degrees.
pub const ROTATE_ATTRIBUTE: &str = "data-rotate";

/// Settings for a decoration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoratorConfig {
    /// Annotation validation policy.
    pub policy: AnnotationPolicy,
}

impl DecoratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config using the given policy.
    pub fn with_policy(policy: AnnotationPolicy) -> Self {
        Self { policy }
    }
}
