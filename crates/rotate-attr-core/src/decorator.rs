//! The decoration pass.
//!
//! Elements are supplied by the caller through [`RotationTarget`], so the
//! pass never touches a global document. Each element is handled on its own:
//! one bad annotation or failed style write does not stop the others.
//!
//! Every element that can be styled ends the pass with the same
//! `rotate(<deg>deg)` value on all of [`TRANSFORM_PROPERTIES`]. An annotation
//! rejected by the strict policy falls back to `rotate(0deg)`.

use crate::annotation::{resolve_annotation, Rotation};
use crate::config::{DecoratorConfig, ROTATE_ATTRIBUTE};
use crate::error::RotationError;
use crate::transform::{TransformValue, TRANSFORM_PROPERTIES};
use std::fmt;

/// An element whose rotation annotation can be read and whose inline style
/// can be written.
pub trait RotationTarget {
    /// Error returned by the host when a style write fails.
    type Error: fmt::Display;

    /// Read a markup attribute (e.g. `data-rotate`). `None` when absent.
    fn data_attribute(&self, name: &str) -> Option<String>;

    /// Set one inline style property.
    fn set_style_property(&mut self, property: &str, value: &str) -> Result<(), Self::Error>;

    /// Why this element cannot carry an inline style, if it cannot.
    ///
    /// Checked before the annotation is read.
    fn unsupported_reason(&self) -> Option<String> {
        None
    }
}

impl<T: RotationTarget + ?Sized> RotationTarget for &mut T {
    type Error = T::Error;

    fn data_attribute(&self, name: &str) -> Option<String> {
        (**self).data_attribute(name)
    }

    fn set_style_property(&mut self, property: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set_style_property(property, value)
    }

    fn unsupported_reason(&self) -> Option<String> {
        (**self).unsupported_reason()
    }
}

/// A problem recorded against one element of the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementIssue {
    /// Position in the input collection.
    pub index: usize,
    pub reason: RotationError,
}

/// Outcome of a decoration pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecorationReport {
    /// Elements written with their own annotation.
    pub rotated: usize,
    /// Elements written with the 0 degree default, including rejected ones.
    pub defaulted: usize,
    /// Annotations the strict policy replaced with the default.
    pub rejected: Vec<ElementIssue>,
    /// Elements left unstyled or partially styled.
    pub skipped: Vec<ElementIssue>,
}

impl DecorationReport {
    /// Number of elements visited.
    pub fn total(&self) -> usize {
        self.rotated + self.defaulted + self.skipped.len()
    }

    /// True when nothing was rejected or skipped.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.skipped.is_empty()
    }
}

enum Outcome {
    Rotated,
    Defaulted,
    Rejected(RotationError),
}

/// Run one decoration pass over `targets` in iteration order.
///
/// For every element the annotation is resolved and the resulting
/// `rotate(<deg>deg)` value is written to each of [`TRANSFORM_PROPERTIES`].
/// Per-element problems are collected in the returned report.
pub fn decorate<I, T>(targets: I, config: &DecoratorConfig) -> DecorationReport
where
    I: IntoIterator<Item = T>,
    T: RotationTarget,
{
    let mut report = DecorationReport::default();

    for (index, mut target) in targets.into_iter().enumerate() {
        match decorate_one(&mut target, config) {
            Ok(Outcome::Rotated) => report.rotated += 1,
            Ok(Outcome::Defaulted) => report.defaulted += 1,
            Ok(Outcome::Rejected(reason)) => {
                report.defaulted += 1;
                report.rejected.push(ElementIssue { index, reason });
            }
            Err(reason) => report.skipped.push(ElementIssue { index, reason }),
        }
    }

    report
}

fn decorate_one<T: RotationTarget>(
    target: &mut T,
    config: &DecoratorConfig,
) -> Result<Outcome, RotationError> {
    if let Some(reason) = target.unsupported_reason() {
        return Err(RotationError::UnsupportedElement(reason));
    }

    let raw = target.data_attribute(ROTATE_ATTRIBUTE);
    let (rotation, outcome) = match resolve_annotation(raw.as_deref(), config.policy) {
        Ok(Rotation::Default) => (Rotation::Default, Outcome::Defaulted),
        Ok(rotation) => (rotation, Outcome::Rotated),
        Err(reason) => (Rotation::Default, Outcome::Rejected(reason)),
    };
    let value = TransformValue::from_rotation(&rotation);

    for property in TRANSFORM_PROPERTIES {
        target
            .set_style_property(property, value.as_str())
            .map_err(|e| RotationError::StyleWrite {
                property: property.to_string(),
                message: e.to_string(),
            })?;
    }

    Ok(outcome)
}
