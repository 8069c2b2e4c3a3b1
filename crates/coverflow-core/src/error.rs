//! Error taxonomy for the slider core.

use std::fmt;

/// Errors reported through the slider's public API.
///
/// The taxonomy is deliberately small: everything else is either clamped
/// (out-of-range indices, malformed viewport widths) or ignored by policy
/// (a second concurrent pointer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderError {
    /// The slider was asked to open with an empty catalog.
    InvalidCatalog,
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderError::InvalidCatalog => write!(f, "cannot open slider with an empty catalog"),
        }
    }
}

impl std::error::Error for SliderError {}
