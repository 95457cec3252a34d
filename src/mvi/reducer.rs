//! Reducer traits for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State;
}

/// Reducer whose transition may reject an intent.
///
/// On `Err` the caller keeps the state it passed in; a rejected intent
/// never produces a partial update.
pub trait TryReducer {
    type State: UiState;
    type Intent: Intent;
    type Error: std::error::Error + Send + Sync + 'static;

    fn try_reduce(state: &Self::State, intent: &Self::Intent) -> Result<Self::State, Self::Error>;
}
