//! Bottom bar: where the focus is and which keys do what.

use crate::ui::focus::FocusState;
use crate::ui::theme::{section_accent, BORDER, MUTED, TEXT};
use crate::view::Strategy;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn footer(focus: FocusState) -> Paragraph<'static> {
    let hint = Style::default().fg(MUTED);
    let separator = || Span::styled(" │ ", hint);

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            focus.section.title(),
            Style::default()
                .fg(section_accent(focus.section))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", focus.button.label()), Style::default().fg(TEXT)),
        separator(),
    ];
    for strategy in Strategy::ALL {
        spans.push(Span::styled(
            format!("{} {} ", strategy.index() + 1, strategy.key()),
            hint,
        ));
    }
    spans.extend([
        separator(),
        Span::styled("←/→ Tab  ↑/↓ Enter  +/-", hint),
        separator(),
        Span::styled("q Quit", hint),
    ]);

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER))
            .title_bottom(Line::styled(format!(" v{VERSION} "), hint).right_aligned()),
    )
}
