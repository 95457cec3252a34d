//! The counter cells, one per state-propagation strategy.
//!
//! [`LocalCell`] and [`ReducerCell`] are plain values owned by a single
//! view. [`Atom`] and [`CounterStore`] are shared handles whose clones all
//! point at the same state; the global action store lives in
//! [`crate::store`].

mod atom;
mod external;
mod local;
mod reducer;

pub use atom::{Atom, AtomId};
pub use external::{CounterActions, CounterState, CounterStore, ExternalStore};
pub use local::LocalCell;
pub use reducer::{ReducerCell, StepAction, StepReducer};
