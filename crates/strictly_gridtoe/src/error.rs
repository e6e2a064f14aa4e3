//! Boundary validation errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// A board dimension outside the supported 3..=9 range.
///
/// Raised only at the edge of the crate (staging a dimension, deserializing one).
/// Everything past that edge works with an already validated [`crate::Dimension`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Dimension {} is not between 3 and 9 at {}:{}", requested, file, line)]
pub struct DimensionError {
    /// The rejected value.
    pub requested: usize,
    /// Line number where the value was rejected.
    pub line: u32,
    /// Source file where the value was rejected.
    pub file: &'static str,
}

impl DimensionError {
    /// Creates a new dimension error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(requested: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            requested,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
