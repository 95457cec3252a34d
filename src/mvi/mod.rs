//! Model-View-Intent (MVI) architecture primitives.
//!
//! These traits are shared by every state container in the crate: the
//! reducer-backed counter, the slices of the global store and the focus
//! state of the terminal front end.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a piece of state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, TryReducer};
pub use state::UiState;
