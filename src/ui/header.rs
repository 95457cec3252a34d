use crate::ui::theme::{BORDER, MUTED, READY, REJECTED, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with the status field: "ready" or the last rejected press.
pub fn header(status: Option<&str>) -> Paragraph<'static> {
    let text_style = Style::default().fg(TEXT);
    let separator_style = Style::default().fg(MUTED);
    let (status_text, status_style) = match status {
        Some(message) => (message.to_string(), Style::default().fg(REJECTED)),
        None => ("ready".to_string(), Style::default().fg(READY)),
    };
    let line = Line::from(vec![
        Span::styled("  ", text_style),
        Span::styled("Countercraft", text_style.add_modifier(Modifier::BOLD)),
        Span::styled("  │  ", separator_style),
        Span::styled("five counters, five state strategies", text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(status_text, status_style),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(BORDER)),
    )
}
