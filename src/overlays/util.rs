use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

use crate::util::KeyHint;

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

pub fn hint_line(hint: &KeyHint) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("[{}]", hint.key), Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", hint.description)),
    ])
}
