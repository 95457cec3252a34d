use crate::mvi::Intent;
use crate::view::{Button, Strategy};

#[derive(Debug, Clone, Copy)]
pub enum FocusIntent {
    /// Move to the next section, wrapping after the last one.
    Next,
    /// Move to the previous section, wrapping before the first one.
    Previous,
    Select(Strategy),
    /// Focus a control within the current section.
    SelectButton(Button),
    /// Switch between `+` and `-`.
    ToggleButton,
}

impl Intent for FocusIntent {}
