//error.rs
//! Error types for slotset containers

use thiserror::Error;

/// Result type alias for slotset operations
pub type Result<T> = std::result::Result<T, SparseSetError>;

/// Main error type for sparse set operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SparseSetError {
    #[error("Index {index} is outside the domain [0, {capacity})")]
    IndexOutOfBounds { index: usize, capacity: usize },

    #[error("No element stored at index {index}")]
    MissingElement { index: usize },

    #[error("Set is full: capacity {capacity} exhausted")]
    CapacityExhausted { capacity: usize },

    #[error("Consistency check failed: {details}")]
    ConsistencyViolation { details: String },
}

impl SparseSetError {
    pub fn index_out_of_bounds(index: usize, capacity: usize) -> Self {
        Self::IndexOutOfBounds { index, capacity }
    }

    pub fn missing_element(index: usize) -> Self {
        Self::MissingElement { index }
    }

    pub fn capacity_exhausted(capacity: usize) -> Self {
        Self::CapacityExhausted { capacity }
    }

    pub fn consistency_violation(details: impl Into<String>) -> Self {
        Self::ConsistencyViolation {
            details: details.into(),
        }
    }
}
