//! Resolution of the per-element rotation annotation.
//!
//! An element carries its rotation as attribute text (`data-rotate="45"`).
//! Resolution turns that text into the value written between `rotate(` and
//! `deg)` in the generated transform.
//!
//! # Falsy values
//!
//! The following all resolve to [`Rotation::Default`] (0 degrees):
//!
//! - a missing attribute
//! - the empty string
//! - `false`, `null`, `NaN`
//! - anything that parses as a number equal to zero (`0`, `-0`, `0.0`)
//!
//! # Policies
//!
//! - [`AnnotationPolicy::Permissive`] uses every other value verbatim. A
//!   value such as `"abc"` produces `rotate(abcdeg)`, which browsers ignore.
//!   JSON-shaped text (`[30]`) is not evaluated either.
//! - [`AnnotationPolicy::Strict`] requires a finite number and rewrites it
//!   in canonical form.

use crate::error::RotationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How non-falsy annotation text is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationPolicy {
    /// Use the text as-is, without parsing.
    #[default]
    Permissive,
    /// Require a finite number of degrees.
    Strict,
}

/// A resolved rotation.
#[derive(Debug, Clone, PartialEq)]
pub enum Rotation {
    /// No usable annotation; rendered as `0`.
    Default,
    /// Degrees text to place inside `rotate(...deg)`.
    Degrees(String),
}

impl Rotation {
    /// Text placed between `rotate(` and `deg)`.
    pub fn degrees_text(&self) -> &str {
        match self {
            Rotation::Default => "0",
            Rotation::Degrees(text) => text,
        }
    }

    /// True when the annotation was absent or falsy.
    pub fn is_default(&self) -> bool {
        matches!(self, Rotation::Default)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.degrees_text())
    }
}

/// Resolve raw attribute text into a [`Rotation`].
///
/// # Errors
///
/// Returns [`RotationError::InvalidAngle`] under the strict policy when the
/// text is not a finite number. The permissive policy never fails.
pub fn resolve_annotation(
    raw: Option<&str>,
    policy: AnnotationPolicy,
) -> Result<Rotation, RotationError> {
    let Some(text) = raw else {
        return Ok(Rotation::Default);
    };

    if is_falsy(text) {
        return Ok(Rotation::Default);
    }

    match policy {
        AnnotationPolicy::Permissive => Ok(Rotation::Degrees(text.to_string())),
        AnnotationPolicy::Strict => {
            let degrees = parse_degrees(text).ok_or_else(|| RotationError::InvalidAngle {
                value: text.to_string(),
            })?;
            Ok(Rotation::Degrees(degrees.to_string()))
        }
    }
}

fn is_falsy(text: &str) -> bool {
    match text {
        "" | "false" | "null" | "NaN" => true,
        _ => text.trim().parse::<f64>().map(|v| v == 0.0).unwrap_or(false),
    }
}

fn parse_degrees(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permissive(raw: Option<&str>) -> Rotation {
        resolve_annotation(raw, AnnotationPolicy::Permissive).unwrap()
    }

    #[test]
    fn test_missing_is_default() {
        assert_eq!(permissive(None), Rotation::Default);
        assert_eq!(permissive(None).degrees_text(), "0");
    }

    #[test]
    fn test_falsy_values_default() {
        for raw in ["", "0", "-0", "0.0", "false", "null", "NaN"] {
            let rotation = permissive(Some(raw));
            assert!(rotation.is_default(), "{raw:?} should default");
        }
    }

    #[test]
    fn test_numeric_value_verbatim() {
        assert_eq!(permissive(Some("45")).degrees_text(), "45");
        assert_eq!(permissive(Some("-90")).degrees_text(), "-90");
        assert_eq!(permissive(Some("12.50")).degrees_text(), "12.50");
    }

    #[test]
    fn test_permissive_keeps_non_numeric() {
        assert_eq!(permissive(Some("abc")).degrees_text(), "abc");
        assert_eq!(permissive(Some(" 45")).degrees_text(), " 45");
        assert_eq!(permissive(Some("true")).degrees_text(), "true");
    }

    #[test]
    fn test_json_shaped_text_not_evaluated() {
        assert_eq!(permissive(Some("[30]")).degrees_text(), "[30]");
        assert_eq!(permissive(Some("{\"deg\":30}")).degrees_text(), "{\"deg\":30}");
        assert!(resolve_annotation(Some("[30]"), AnnotationPolicy::Strict).is_err());
    }

    #[test]
    fn test_no_clamping() {
        assert_eq!(permissive(Some("720")).degrees_text(), "720");
    }

    #[test]
    fn test_strict_canonicalizes() {
        let r = resolve_annotation(Some(" 12.50 "), AnnotationPolicy::Strict).unwrap();
        assert_eq!(r.degrees_text(), "12.5");

        let r = resolve_annotation(Some("45"), AnnotationPolicy::Strict).unwrap();
        assert_eq!(r.degrees_text(), "45");
    }

    #[test]
    fn test_strict_rejects_non_numeric() {
        let err = resolve_annotation(Some("abc"), AnnotationPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            RotationError::InvalidAngle {
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_strict_rejects_infinity() {
        assert!(resolve_annotation(Some("inf"), AnnotationPolicy::Strict).is_err());
    }

    #[test]
    fn test_strict_still_defaults_falsy() {
        let r = resolve_annotation(Some("false"), AnnotationPolicy::Strict).unwrap();
        assert!(r.is_default());
    }

    #[test]
    fn test_policy_deserializes_lowercase() {
        let policy: AnnotationPolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(policy, AnnotationPolicy::Strict);
    }
}
