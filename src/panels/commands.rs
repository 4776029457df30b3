use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::util::{panel_block, KeyHandleResult};
use crate::command::CommandSet;
use crate::util::{pad_right, KeyHint};

const ID_COLUMN_WIDTH: usize = 16;

/// Main-screen table of commands with their current bindings. Enter
/// invokes the command under the cursor, bypassing its shortcut.
pub struct CommandsPanel {
    cursor: usize,
    /// Visible rows, updated during render.
    page_size: usize,
}

impl Default for CommandsPanel {
    fn default() -> Self {
        Self {
            cursor: 0,
            page_size: 10,
        }
    }
}

impl CommandsPanel {
    pub fn handle_key(&mut self, key: KeyEvent, command_count: usize) -> KeyHandleResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if command_count > 0 && self.cursor + 1 < command_count {
                    self.cursor += 1;
                }
                KeyHandleResult::Consumed
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                KeyHandleResult::Consumed
            }
            KeyCode::Char(',') => {
                if command_count > 0 {
                    self.cursor = (self.cursor + self.page_size).min(command_count - 1);
                }
                KeyHandleResult::Consumed
            }
            KeyCode::Char('.') => {
                self.cursor = self.cursor.saturating_sub(self.page_size);
                KeyHandleResult::Consumed
            }
            KeyCode::Enter => {
                if command_count > 0 {
                    KeyHandleResult::InvokeCommand(self.cursor)
                } else {
                    KeyHandleResult::Consumed
                }
            }
            _ => KeyHandleResult::Ignored,
        }
    }

    pub fn key_hints(&self) -> Vec<KeyHint> {
        vec![
            KeyHint {
                key: "j/k",
                description: "Navigate",
            },
            KeyHint {
                key: "Enter",
                description: "Run Command",
            },
        ]
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, commands: &CommandSet) {
        let block = panel_block(" Commands ", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.page_size = (inner.height as usize).saturating_sub(2).max(1);

        if commands.is_empty() {
            let placeholder = Paragraph::new("(no commands)")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(placeholder, inner);
            return;
        }

        let visible_height = (inner.height as usize).saturating_sub(1);
        let cursor = if focused { Some(self.cursor) } else { None };
        let offset = scroll_offset(commands.len(), visible_height, cursor);
        let has_more_below = offset + visible_height < commands.len();

        let label_width = (inner.width as usize)
            .saturating_sub(2 + ID_COLUMN_WIDTH + 2 + 14)
            .max(8);

        let mut items: Vec<ListItem> = commands
            .commands()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_height)
            .map(|(i, command)| {
                let is_selected = cursor == Some(i);

                let label_style = if is_selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let shortcut_style = if command.shortcut.is_empty() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Green)
                };
                let shortcut_text = if command.shortcut.is_empty() {
                    "(unbound)".to_string()
                } else {
                    command.shortcut.clone()
                };

                let content = Line::from(vec![
                    if is_selected {
                        Span::styled("> ", Style::default().fg(Color::Cyan))
                    } else {
                        Span::raw("  ")
                    },
                    Span::styled(
                        pad_right(command.id, ID_COLUMN_WIDTH),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw("  "),
                    Span::styled(pad_right(command.label, label_width), label_style),
                    Span::styled(shortcut_text, shortcut_style),
                ]);

                ListItem::new(content)
            })
            .collect();

        items.push(if has_more_below {
            ListItem::new(Line::from(Span::styled(
                "  ...",
                Style::default().fg(Color::DarkGray),
            )))
        } else {
            ListItem::new(Line::from(""))
        });

        frame.render_widget(List::new(items), inner);
    }
}

fn scroll_offset(total: usize, visible: usize, cursor: Option<usize>) -> usize {
    let Some(cursor) = cursor else { return 0 };
    if visible == 0 {
        return 0;
    }
    let max_offset = total.saturating_sub(visible);
    // Keep the cursor on screen, scrolling only when it would fall off.
    let min_offset = cursor.saturating_sub(visible.saturating_sub(1));
    min_offset.min(max_offset)
}
