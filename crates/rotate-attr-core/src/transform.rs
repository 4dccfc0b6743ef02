//! CSS transform text and the style properties it is written to.

use crate::annotation::Rotation;
use std::fmt;

/// The four vendor-prefixed transform properties followed by the standard one.
///
/// Every decorated element receives the same value on all of them.
pub const TRANSFORM_PROPERTIES: [&str; 5] = [
    "-webkit-transform",
    "-moz-transform",
    "-o-transform",
    "-ms-transform",
    "transform",
];

/// A `rotate(<deg>deg)` transform expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformValue(String);

impl TransformValue {
    /// Build the transform expression for a resolved rotation.
    pub fn from_rotation(rotation: &Rotation) -> Self {
        Self(format!("rotate({}deg)", rotation.degrees_text()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransformValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rotation_value() {
        let value = TransformValue::from_rotation(&Rotation::Default);
        assert_eq!(value.as_str(), "rotate(0deg)");
    }

    #[test]
    fn test_degrees_value() {
        let value = TransformValue::from_rotation(&Rotation::Degrees("45".into()));
        assert_eq!(value.to_string(), "rotate(45deg)");
    }

    #[test]
    fn test_standard_property_written_last() {
        assert_eq!(TRANSFORM_PROPERTIES.len(), 5);
        assert_eq!(TRANSFORM_PROPERTIES.last(), Some(&"transform"));
    }
}
