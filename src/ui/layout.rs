use crate::view::Strategy;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// One equal-width column per section, in [`Strategy::ALL`] order.
pub fn section_columns(body: Rect) -> Vec<Rect> {
    let count = Strategy::ALL.len() as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Strategy::ALL.map(|_| Constraint::Ratio(1, count)))
        .split(body)
        .to_vec()
}
