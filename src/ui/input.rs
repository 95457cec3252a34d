use crate::ui::app::App;
use crate::ui::focus::FocusIntent;
use crate::view::{Button, Strategy};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Right | KeyCode::Tab => app.dispatch_focus(FocusIntent::Next),
        KeyCode::Left | KeyCode::BackTab => app.dispatch_focus(FocusIntent::Previous),
        KeyCode::Up | KeyCode::Down => app.dispatch_focus(FocusIntent::ToggleButton),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.press_focused(Button::Plus),
        KeyCode::Char('-') | KeyCode::Char('_') => app.press_focused(Button::Minus),
        KeyCode::Char(ch) => {
            if let Some(strategy) = section_for_digit(ch) {
                app.dispatch_focus(FocusIntent::Select(strategy));
            }
        }
        _ => {}
    }
}

fn section_for_digit(ch: char) -> Option<Strategy> {
    let digit = ch.to_digit(10)? as usize;
    digit
        .checked_sub(1)
        .and_then(|index| Strategy::ALL.get(index).copied())
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_sections() {
        assert_eq!(section_for_digit('1'), Some(Strategy::Local));
        assert_eq!(section_for_digit('5'), Some(Strategy::ExternalStore));
        assert_eq!(section_for_digit('0'), None);
        assert_eq!(section_for_digit('6'), None);
        assert_eq!(section_for_digit('x'), None);
    }
}
