use crate::mvi::Reducer;
use crate::ui::focus::intent::FocusIntent;
use crate::ui::focus::state::FocusState;
use crate::view::{Button, Strategy};

pub struct FocusReducer;

impl Reducer for FocusReducer {
    type State = FocusState;
    type Intent = FocusIntent;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        let len = Strategy::ALL.len();
        let current = state.section.index();
        match intent {
            FocusIntent::Next => FocusState {
                section: Strategy::ALL[(current + 1) % len],
                ..state
            },
            FocusIntent::Previous => {
                let previous = if current == 0 { len - 1 } else { current - 1 };
                FocusState {
                    section: Strategy::ALL[previous],
                    ..state
                }
            }
            FocusIntent::Select(section) => FocusState {
                section: *section,
                ..state
            },
            FocusIntent::SelectButton(button) => FocusState {
                button: *button,
                ..state
            },
            FocusIntent::ToggleButton => FocusState {
                button: match state.button {
                    Button::Plus => Button::Minus,
                    Button::Minus => Button::Plus,
                },
                ..state
            },
        }
    }
}
