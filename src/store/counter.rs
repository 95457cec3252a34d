//! The `counter` slice and the global store's action type.

use crate::mvi::{Intent, Reducer, UiState};

/// Key of the counter slice in the root state.
pub const COUNTER_SLICE: &str = "counter";

/// Action message accepted by the global store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    Increment,
    Decrement,
    /// Any other `type`; passes through every slice unchanged.
    Unrecognized(String),
}

impl Intent for StoreAction {}

impl StoreAction {
    pub const INCREMENT: &'static str = "INCREMENT";
    pub const DECREMENT: &'static str = "DECREMENT";

    pub fn from_type(action_type: &str) -> Self {
        match action_type {
            Self::INCREMENT => StoreAction::Increment,
            Self::DECREMENT => StoreAction::Decrement,
            other => StoreAction::Unrecognized(other.to_string()),
        }
    }

    pub fn action_type(&self) -> &str {
        match self {
            StoreAction::Increment => Self::INCREMENT,
            StoreAction::Decrement => Self::DECREMENT,
            StoreAction::Unrecognized(other) => other,
        }
    }
}

/// Action creator for `{type: "INCREMENT"}`.
pub fn increment() -> StoreAction {
    StoreAction::Increment
}

/// Action creator for `{type: "DECREMENT"}`.
pub fn decrement() -> StoreAction {
    StoreAction::Decrement
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSliceState {
    pub counter: i64,
}

impl UiState for CounterSliceState {}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterSliceState;
    type Intent = StoreAction;

    fn reduce(state: CounterSliceState, action: &StoreAction) -> CounterSliceState {
        match action {
            StoreAction::Increment => CounterSliceState {
                counter: state.counter.saturating_add(1),
            },
            StoreAction::Decrement => CounterSliceState {
                counter: state.counter.saturating_sub(1),
            },
            StoreAction::Unrecognized(_) => state,
        }
    }
}

/// Selector for `state.counter.counter`.
pub fn select_counter(state: &super::RootState) -> i64 {
    state
        .slice::<CounterSliceState>(COUNTER_SLICE)
        .map(|slice| slice.counter)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_type_round_trips_known_types() {
        assert_eq!(StoreAction::from_type("INCREMENT"), increment());
        assert_eq!(StoreAction::from_type("DECREMENT"), decrement());
        assert_eq!(StoreAction::from_type("RESET").action_type(), "RESET");
    }

    #[test]
    fn reducer_ignores_unrecognized() {
        let state = CounterSliceState { counter: 7 };
        let next = CounterReducer::reduce(state, &StoreAction::from_type("increment"));
        assert_eq!(next, state);
    }
}
