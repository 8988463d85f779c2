// lib.rs - Main library file
//!
//! Fixed-capacity sparse set: an associative container over a bounded
//! integer index domain with O(1) insert, remove, and lookup, and dense
//! cache-friendly iteration over the occupied elements. The primitive
//! behind entity-component storages and similar slot-based designs.

// Declare all public modules of the crate.
pub mod error;
pub mod sparse_set;

// Re-export core types for easier access from outside the crate.
pub use error::{Result, SparseSetError};
pub use sparse_set::SparseSet;

/// A macro for asserting that a set's sparse/dense translation tables are
/// mutually consistent during debug builds.
#[macro_export]
macro_rules! debug_assert_consistent {
    ($set:expr) => {
        #[cfg(debug_assertions)]
        if let Err(e) = $set.check_consistency() {
            panic!("Sparse set corrupted: {}", e);
        }
    };
}

/// A "prelude" module for easily importing the most commonly used types.
pub mod prelude {
    pub use crate::{Result, SparseSet, SparseSetError};
}
