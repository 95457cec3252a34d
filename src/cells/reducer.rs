//! Reducer-backed counter owned by a single view.
//!
//! Mutation goes through a pure transition function over tagged actions.
//! Unlike the global store, an unrecognised tag is an error.

use crate::error::CellError;
use crate::mvi::{Intent, TryReducer};
use std::marker::PhantomData;

/// Tagged action message for the reducer cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Tag `"+"`.
    Add { step: i64 },
    /// Tag `"-"`.
    Subtract { step: i64 },
    /// Any other tag; always rejected.
    Unknown { tag: String },
}

impl Intent for StepAction {}

impl StepAction {
    pub fn tagged(tag: &str, step: i64) -> Self {
        match tag {
            "+" => StepAction::Add { step },
            "-" => StepAction::Subtract { step },
            other => StepAction::Unknown {
                tag: other.to_string(),
            },
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            StepAction::Add { .. } => "+",
            StepAction::Subtract { .. } => "-",
            StepAction::Unknown { tag } => tag,
        }
    }
}

/// Transition function: `"+"` adds the step, `"-"` subtracts it.
pub struct StepReducer;

impl TryReducer for StepReducer {
    type State = i64;
    type Intent = StepAction;
    type Error = CellError;

    fn try_reduce(state: &i64, action: &StepAction) -> Result<i64, CellError> {
        match action {
            StepAction::Add { step } => Ok(state.saturating_add(*step)),
            StepAction::Subtract { step } => Ok(state.saturating_sub(*step)),
            StepAction::Unknown { tag } => Err(CellError::UnknownAction { tag: tag.clone() }),
        }
    }
}

/// Value plus the reducer that is allowed to change it.
pub struct ReducerCell<R = StepReducer>
where
    R: TryReducer,
{
    state: R::State,
    _reducer: PhantomData<R>,
}

impl<R: TryReducer> Default for ReducerCell<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: TryReducer> ReducerCell<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            _reducer: PhantomData,
        }
    }

    pub fn read(&self) -> R::State {
        self.state.clone()
    }

    /// Apply one action. On error the previous state is kept.
    pub fn dispatch(&mut self, action: R::Intent) -> Result<R::State, R::Error> {
        let next = R::try_reduce(&self.state, &action)?;
        self.state = next;
        Ok(self.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_maps_known_tags() {
        assert_eq!(StepAction::tagged("+", 2), StepAction::Add { step: 2 });
        assert_eq!(StepAction::tagged("-", 1), StepAction::Subtract { step: 1 });
        assert_eq!(
            StepAction::tagged("*", 1),
            StepAction::Unknown {
                tag: "*".to_string()
            }
        );
        assert_eq!(StepAction::tagged("?", 1).tag(), "?");
    }

    #[test]
    fn step_of_any_sign_is_applied() {
        let mut cell: ReducerCell = ReducerCell::default();
        assert_eq!(cell.dispatch(StepAction::Add { step: 5 }), Ok(5));
        assert_eq!(cell.dispatch(StepAction::Add { step: -7 }), Ok(-2));
        assert_eq!(cell.dispatch(StepAction::Subtract { step: -2 }), Ok(0));
    }

    #[test]
    fn unknown_tag_fails_and_keeps_value() {
        let mut cell: ReducerCell = ReducerCell::new(3);
        let err = cell.dispatch(StepAction::tagged("?", 1)).unwrap_err();
        assert_eq!(
            err,
            CellError::UnknownAction {
                tag: "?".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unknown action '?'");
        assert_eq!(cell.read(), 3);
    }

    #[test]
    fn reducer_is_pure() {
        let first = StepReducer::try_reduce(&10, &StepAction::Subtract { step: 4 });
        let second = StepReducer::try_reduce(&10, &StepAction::Subtract { step: 4 });
        assert_eq!(first, second);
        assert_eq!(first, Ok(6));
    }
}
