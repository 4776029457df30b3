use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::util::{centered_rect, hint_line};
use crate::command::CommandSet;
use crate::util::KeyHint;

/// Help overlay listing the focused panel's keys and the live command
/// bindings. Bindings are read from the command set, so rebound
/// shortcuts show up here immediately.
pub fn render_help_overlay(
    frame: &mut Frame,
    panel_name: &str,
    panel_keys: &[KeyHint],
    commands: &CommandSet,
) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("  {panel_name} Panel"),
        Style::default().fg(Color::White),
    )));

    for hint in panel_keys {
        lines.push(hint_line(hint));
    }

    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Commands",
        Style::default().fg(Color::White),
    )));
    for command in commands.commands() {
        let key: &str = if command.shortcut.is_empty() {
            "unbound"
        } else {
            &command.shortcut
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("[{key}]"), Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {}", command.label)),
        ]));
    }

    lines.push(Line::from(""));

    let content_height = lines.len() as u16 + 2;
    let overlay_width = 42u16;
    let overlay_height = content_height.min(frame.area().height.saturating_sub(4));

    let overlay_area = centered_rect(frame.area(), overlay_width, overlay_height);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}
