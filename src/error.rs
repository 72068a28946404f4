use thiserror::Error;

/// Returned when a non-empty sequence is requested from a collection with no elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot build a non-empty sequence from an empty collection")]
pub struct EmptyError;

/// Returned when an index-based edit targets a position outside the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of bounds for a sequence of length {len}")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}
