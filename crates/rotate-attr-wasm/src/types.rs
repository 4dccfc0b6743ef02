//! WASM-compatible wrapper types.

use rotate_attr_core::{DecorationReport, ElementIssue};
use wasm_bindgen::prelude::*;

/// Summary of a decoration pass, returned to JavaScript.
#[wasm_bindgen]
pub struct JsRotationReport {
    rotated: u32,
    defaulted: u32,
    rejected_indices: Vec<u32>,
    skipped_indices: Vec<u32>,
    messages: Vec<String>,
}

#[wasm_bindgen]
impl JsRotationReport {
    /// Elements rotated by their own annotation
    #[wasm_bindgen(getter)]
    pub fn rotated(&self) -> u32 {
        self.rotated
    }

    /// Elements that got 0 degrees, including rejected annotations
    #[wasm_bindgen(getter)]
    pub fn defaulted(&self) -> u32 {
        self.defaulted
    }

    /// Annotations replaced by the default under the strict policy
    #[wasm_bindgen(getter)]
    pub fn rejected(&self) -> u32 {
        self.rejected_indices.len() as u32
    }

    /// Elements left unstyled
    #[wasm_bindgen(getter)]
    pub fn skipped(&self) -> u32 {
        self.skipped_indices.len() as u32
    }

    /// Number of elements visited
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> u32 {
        self.rotated + self.defaulted + self.skipped()
    }

    /// Positions of rejected annotations in the input collection.
    pub fn rejected_indices(&self) -> Vec<u32> {
        self.rejected_indices.clone()
    }

    /// Positions of skipped elements in the input collection.
    pub fn skipped_indices(&self) -> Vec<u32> {
        self.skipped_indices.clone()
    }

    /// One message per rejected element, then one per skipped element.
    pub fn messages(&self) -> Vec<String> {
        self.messages.clone()
    }
}

impl JsRotationReport {
    pub(crate) fn from_report(report: &DecorationReport) -> Self {
        let indices = |issues: &[ElementIssue]| -> Vec<u32> {
            issues.iter().map(|i| i.index as u32).collect()
        };
        Self {
            rotated: report.rotated as u32,
            defaulted: report.defaulted as u32,
            rejected_indices: indices(&report.rejected),
            skipped_indices: indices(&report.skipped),
            messages: report
                .rejected
                .iter()
                .chain(&report.skipped)
                .map(|i| i.reason.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotate_attr_core::RotationError;

    #[test]
    fn test_from_report_counts() {
        let report = DecorationReport {
            rotated: 3,
            defaulted: 2,
            rejected: vec![ElementIssue {
                index: 1,
                reason: RotationError::InvalidAngle {
                    value: "up".to_string(),
                },
            }],
            skipped: vec![ElementIssue {
                index: 5,
                reason: RotationError::UnsupportedElement("not an HTMLElement".to_string()),
            }],
        };
        let js = JsRotationReport::from_report(&report);

        assert_eq!(js.rotated(), 3);
        assert_eq!(js.defaulted(), 2);
        assert_eq!(js.rejected(), 1);
        assert_eq!(js.skipped(), 1);
        assert_eq!(js.total(), 6);
        assert_eq!(js.rejected_indices(), vec![1]);
        assert_eq!(js.skipped_indices(), vec![5]);
        assert_eq!(
            js.messages(),
            vec![
                "Invalid rotation angle: \"up\"".to_string(),
                "Unsupported element: not an HTMLElement".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_report() {
        let js = JsRotationReport::from_report(&DecorationReport::default());
        assert_eq!(js.total(), 0);
        assert!(js.skipped_indices().is_empty());
        assert!(js.messages().is_empty());
    }
}
