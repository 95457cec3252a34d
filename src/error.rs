//! Error types for the counter cells and the global store.

use thiserror::Error;

/// Errors surfaced by a cell when an action is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    /// The reducer cell received a tag outside `{"+", "-"}`.
    #[error("Unknown action '{tag}'")]
    UnknownAction { tag: String },
}

/// Errors that can occur while assembling the global store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Two slices were registered under the same key.
    #[error("Slice '{name}' is already registered")]
    DuplicateSlice { name: &'static str },

    /// A store was built without any slice.
    #[error("A store needs at least one slice")]
    NoSlices,
}
