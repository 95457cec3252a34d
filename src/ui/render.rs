use crate::board::Reading;
use crate::ui::app::App;
use crate::ui::footer::footer;
use crate::ui::header::header;
use crate::ui::layout::{layout_regions, section_columns};
use crate::ui::theme::{section_accent, BORDER, TEXT};
use crate::view::Button;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (top, body, bottom) = layout_regions(area);

    frame.render_widget(header(app.status()), top);
    frame.render_widget(Clear, body);

    let focus = app.focus();
    for (reading, column) in app.board().readings().into_iter().zip(section_columns(body)) {
        let focused_button = (reading.strategy == focus.section).then_some(focus.button);
        frame.render_widget(section_widget(reading, focused_button), column);
    }

    frame.render_widget(footer(focus), bottom);
}

/// One section: title, current value, and the two controls.
fn section_widget(reading: Reading, focused_button: Option<Button>) -> Paragraph<'static> {
    let accent = section_accent(reading.strategy);
    let border_color = if focused_button.is_some() { accent } else { BORDER };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", reading.strategy.title()),
            Style::default().fg(accent),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let value_style = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(reading.value.to_string(), value_style)),
        Line::from(""),
        Line::from(vec![
            control(Button::Plus, focused_button),
            Span::raw("  "),
            control(Button::Minus, focused_button),
        ]),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
}

fn control(button: Button, focused: Option<Button>) -> Span<'static> {
    let style = if focused == Some(button) {
        Style::default().fg(TEXT).add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(TEXT)
    };
    Span::styled(format!("[ {} ]", button.label()), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CountersConfig;
    use crate::context::AppContext;
    use crate::view::Strategy;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn make_app() -> App {
        let counters = CountersConfig::default();
        let ctx = AppContext::new(&counters).unwrap();
        App::new(&ctx, &counters)
    }

    #[test]
    fn draws_all_five_sections() {
        let text = screen_text(&make_app());
        for strategy in Strategy::ALL {
            assert!(text.contains(strategy.title()), "missing {strategy}");
        }
        assert_eq!(text.matches("[ + ]").count(), 5);
        assert_eq!(text.matches("[ - ]").count(), 5);
    }

    #[test]
    fn draws_updated_value() {
        let mut app = make_app();
        app.press(Strategy::Reducer, Button::Minus);
        app.press(Strategy::Reducer, Button::Minus);
        let text = screen_text(&app);
        assert!(text.contains("-2"));
    }

    #[test]
    fn draws_rejected_tag_in_header() {
        let mut app = make_app();
        app.dispatch_tag(Strategy::Reducer, "?");
        let text = screen_text(&app);
        assert!(text.contains("Unknown action '?'"));
        assert!(!text.contains("ready"));
    }
}
