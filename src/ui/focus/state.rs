use crate::mvi::UiState;
use crate::view::{Button, Strategy};

/// Which section and which control keyboard activation goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusState {
    pub section: Strategy,
    pub button: Button,
}

impl Default for FocusState {
    fn default() -> Self {
        Self {
            section: Strategy::Local,
            button: Button::Plus,
        }
    }
}

impl UiState for FocusState {}
