//! Error types for rotation decoration.

use thiserror::Error;

/// Errors recorded against individual elements during a decoration pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    /// The annotation is not a finite number (strict policy only).
    #[error("Invalid rotation angle: {value:?}")]
    InvalidAngle {
        /// The raw attribute text as read from the element.
        value: String,
    },

    /// Writing a style property on the element failed.
    #[error("Failed to set style property {property}: {message}")]
    StyleWrite {
        /// The CSS property being written.
        property: String,
        /// Host-provided failure description.
        message: String,
    },

    /// The element has no inline style to write to.
    #[error("Unsupported element: {0}")]
    UnsupportedElement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_angle_message_quotes_value() {
        let err = RotationError::InvalidAngle {
            value: "left".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid rotation angle: \"left\"");
    }

    #[test]
    fn test_style_write_message() {
        let err = RotationError::StyleWrite {
            property: "transform".to_string(),
            message: "read-only".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to set style property transform: read-only"
        );
    }

    #[test]
    fn test_unsupported_element_message() {
        let err = RotationError::UnsupportedElement("not an HTMLElement".to_string());
        assert_eq!(err.to_string(), "Unsupported element: not an HTMLElement");
    }
}
