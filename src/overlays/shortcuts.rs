use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::util::centered_rect;
use crate::command::CommandSet;
use crate::keys::{self, Capture};
use crate::util::pad_right;

const ID_COLUMN_WIDTH: usize = 16;
const LABEL_COLUMN_WIDTH: usize = 24;

/// One row of the shortcut table: a command plus its pending binding.
#[derive(Debug, Clone)]
struct ShortcutEntry {
    id: String,
    label: String,
    /// The shortcut text displayed for this command; both the table row
    /// and the edit field render from this one value.
    pending: String,
    /// The command's shortcut when the overlay opened.
    saved: String,
    default: String,
}

/// Binding written back to a command when the overlay is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub id: String,
    pub shortcut: String,
}

pub enum ShortcutsAction {
    Consumed,
    Dismiss,
    Apply(Vec<Binding>),
}

/// Modal overlay for viewing and rebinding command shortcuts.
///
/// Edits are staged against a snapshot of the commands; nothing is
/// written back until the overlay is accepted with Enter.
pub struct ShortcutsOverlay {
    entries: Vec<ShortcutEntry>,
    selected: usize,
    recording: bool,
}

impl ShortcutsOverlay {
    pub fn new(commands: &CommandSet) -> Self {
        let entries = commands
            .commands()
            .iter()
            .map(|command| ShortcutEntry {
                id: command.id.to_string(),
                label: command.label.to_string(),
                pending: command.shortcut.clone(),
                saved: command.shortcut.clone(),
                default: command.default_shortcut.to_string(),
            })
            .collect();

        Self {
            entries,
            selected: 0,
            recording: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ShortcutsAction {
        // While recording, every key goes to the recorder, Esc and Enter
        // included. A bare modifier leaves the recorder armed.
        if self.recording {
            match keys::capture(&key) {
                Capture::Ignored => {}
                Capture::Cleared => {
                    self.set_shortcut(String::new());
                    self.recording = false;
                }
                Capture::Shortcut(shortcut) => {
                    self.set_shortcut(shortcut);
                    self.recording = false;
                }
            }
            return ShortcutsAction::Consumed;
        }

        match key.code {
            KeyCode::Esc => ShortcutsAction::Dismiss,
            KeyCode::Enter => {
                let bindings = self
                    .entries
                    .iter()
                    .map(|entry| Binding {
                        id: entry.id.clone(),
                        shortcut: entry.pending.clone(),
                    })
                    .collect();
                ShortcutsAction::Apply(bindings)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.entries.is_empty() && self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
                ShortcutsAction::Consumed
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                ShortcutsAction::Consumed
            }
            KeyCode::Char('e') => {
                if !self.entries.is_empty() {
                    self.recording = true;
                }
                ShortcutsAction::Consumed
            }
            KeyCode::Backspace => {
                self.set_shortcut(String::new());
                ShortcutsAction::Consumed
            }
            KeyCode::Char('r') => {
                self.reset_to_saved();
                ShortcutsAction::Consumed
            }
            KeyCode::Char('d') => {
                self.reset_to_default();
                ShortcutsAction::Consumed
            }
            _ => ShortcutsAction::Consumed,
        }
    }

    fn set_shortcut(&mut self, shortcut: String) {
        if let Some(entry) = self.entries.get_mut(self.selected) {
            entry.pending = shortcut;
        }
    }

    /// Restore the selected command's pre-overlay shortcut.
    fn reset_to_saved(&mut self) {
        if let Some(entry) = self.entries.get_mut(self.selected) {
            entry.pending = entry.saved.clone();
        }
    }

    /// Restore the selected command's default shortcut.
    fn reset_to_default(&mut self) {
        if let Some(entry) = self.entries.get_mut(self.selected) {
            entry.pending = entry.default.clone();
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(""));

        for (i, entry) in self.entries.iter().enumerate() {
            let is_selected = i == self.selected;

            let prefix = if is_selected { "> " } else { "  " };
            let prefix_style = if is_selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };

            let label_style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let (shortcut_text, shortcut_color) = if entry.pending.is_empty() {
                ("(unbound)".to_string(), Color::DarkGray)
            } else {
                (entry.pending.clone(), Color::Green)
            };

            lines.push(Line::from(vec![
                Span::raw(" "),
                Span::styled(prefix, prefix_style),
                Span::styled(
                    pad_right(&entry.id, ID_COLUMN_WIDTH),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(pad_right(&entry.label, LABEL_COLUMN_WIDTH), label_style),
                Span::raw(" "),
                Span::styled(shortcut_text, Style::default().fg(shortcut_color)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(self.edit_field_line());
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled("[e]", Style::default().fg(Color::Green)),
            Span::raw(" Record "),
            Span::styled("[Backspace]", Style::default().fg(Color::Green)),
            Span::raw(" Clear "),
            Span::styled("[r]", Style::default().fg(Color::Blue)),
            Span::raw(" Reset "),
            Span::styled("[d]", Style::default().fg(Color::Blue)),
            Span::raw(" Default"),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
            Span::raw(" Navigate "),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Apply "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]));
        lines.push(Line::from(""));

        let content_height = lines.len() as u16 + 2;
        let overlay_width = 64u16;
        let overlay_height = content_height.min(frame.area().height.saturating_sub(4));

        let overlay_area = centered_rect(frame.area(), overlay_width, overlay_height);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, overlay_area);
    }

    /// The edit field mirrors the selected row's pending shortcut, or
    /// prompts for a key while recording.
    fn edit_field_line(&self) -> Line<'static> {
        if self.recording {
            return Line::from(vec![
                Span::raw("   "),
                Span::styled("Shortcut: ", Style::default().fg(Color::White)),
                Span::styled(
                    "press a key... (Backspace clears)",
                    Style::default().fg(Color::Yellow),
                ),
            ]);
        }

        let pending = self
            .entries
            .get(self.selected)
            .map(|entry| entry.pending.clone())
            .unwrap_or_default();
        let (text, color) = if pending.is_empty() {
            ("(unbound)".to_string(), Color::DarkGray)
        } else {
            (pending, Color::Green)
        };

        Line::from(vec![
            Span::raw("   "),
            Span::styled("Shortcut: ", Style::default().fg(Color::White)),
            Span::styled(text, Style::default().fg(color)),
        ])
    }
}
