use super::{Button, CounterView, Strategy};
use crate::cells::{LocalCell, ReducerCell, StepAction};
use crate::error::CellError;

/// View owning a [`LocalCell`].
pub struct LocalView {
    cell: LocalCell,
    renders: u64,
}

impl LocalView {
    pub fn new(initial: i64) -> Self {
        Self {
            cell: LocalCell::new(initial),
            renders: 0,
        }
    }
}

impl CounterView for LocalView {
    fn strategy(&self) -> Strategy {
        Strategy::Local
    }

    fn value(&self) -> i64 {
        self.cell.read()
    }

    fn renders(&self) -> u64 {
        self.renders
    }

    fn press(&mut self, button: Button) -> Result<(), CellError> {
        let before = self.cell.read();
        match button {
            Button::Plus => self.cell.increment(),
            Button::Minus => self.cell.decrement(),
        }
        if self.cell.read() != before {
            self.renders += 1;
        }
        Ok(())
    }
}

/// View owning a [`ReducerCell`]; its controls dispatch tagged actions.
pub struct ReducerView {
    cell: ReducerCell,
    step: i64,
    renders: u64,
}

impl ReducerView {
    pub fn new(initial: i64, step: i64) -> Self {
        Self {
            cell: ReducerCell::new(initial),
            step,
            renders: 0,
        }
    }

    /// Dispatch a raw tagged action, as a control would.
    pub fn dispatch(&mut self, action: StepAction) -> Result<i64, CellError> {
        let before = self.cell.read();
        let result = self.cell.dispatch(action);
        match &result {
            Ok(value) if *value != before => self.renders += 1,
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "reducer cell rejected action"),
        }
        result
    }
}

impl CounterView for ReducerView {
    fn strategy(&self) -> Strategy {
        Strategy::Reducer
    }

    fn value(&self) -> i64 {
        self.cell.read()
    }

    fn renders(&self) -> u64 {
        self.renders
    }

    fn press(&mut self, button: Button) -> Result<(), CellError> {
        self.dispatch_tag(button.label())
    }

    fn dispatch_tag(&mut self, tag: &str) -> Result<(), CellError> {
        self.dispatch(StepAction::tagged(tag, self.step)).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_view_renders_on_change() {
        let mut view = LocalView::new(0);
        view.press(Button::Plus).unwrap();
        view.press(Button::Minus).unwrap();
        view.press(Button::Minus).unwrap();
        assert_eq!(view.value(), -1);
        assert_eq!(view.renders(), 3);
    }

    #[test]
    fn reducer_view_uses_configured_step() {
        let mut view = ReducerView::new(0, 5);
        view.press(Button::Plus).unwrap();
        assert_eq!(view.value(), 5);
        view.press(Button::Minus).unwrap();
        view.press(Button::Minus).unwrap();
        assert_eq!(view.value(), -5);
    }

    #[test]
    fn rejected_action_does_not_render() {
        let mut view = ReducerView::new(2, 1);
        let err = view.dispatch(StepAction::tagged("?", 1));
        assert!(matches!(err, Err(CellError::UnknownAction { .. })));
        assert_eq!(view.value(), 2);
        assert_eq!(view.renders(), 0);
    }

    #[test]
    fn local_view_rejects_unknown_tag() {
        let mut view = LocalView::new(0);
        assert!(view.dispatch_tag("+").is_ok());
        assert_eq!(
            view.dispatch_tag("reset"),
            Err(CellError::UnknownAction {
                tag: "reset".to_string()
            })
        );
        assert_eq!(view.value(), 1);
    }
}
