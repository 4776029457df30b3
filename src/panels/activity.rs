use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::util::{panel_block, KeyHandleResult};
use crate::activity::ActivityLog;
use crate::util::KeyHint;

/// Scrollable log of dispatched commands.
pub struct ActivityPanel {
    /// Rows scrolled up from the bottom of the log.
    scroll_back: usize,
}

impl Default for ActivityPanel {
    fn default() -> Self {
        Self { scroll_back: 0 }
    }
}

impl ActivityPanel {
    pub fn handle_key(&mut self, key: KeyEvent, entry_count: usize) -> KeyHandleResult {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => {
                if self.scroll_back + 1 < entry_count {
                    self.scroll_back += 1;
                }
                KeyHandleResult::Consumed
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_back = self.scroll_back.saturating_sub(1);
                KeyHandleResult::Consumed
            }
            KeyCode::Char('G') => {
                self.scroll_back = 0;
                KeyHandleResult::Consumed
            }
            _ => KeyHandleResult::Ignored,
        }
    }

    /// Called when the log shrinks so the view cannot point past it.
    pub fn clamp_scroll(&mut self, entry_count: usize) {
        if self.scroll_back >= entry_count {
            self.scroll_back = entry_count.saturating_sub(1);
        }
    }

    pub fn key_hints(&self) -> Vec<KeyHint> {
        vec![
            KeyHint {
                key: "j/k",
                description: "Scroll",
            },
            KeyHint {
                key: "G",
                description: "Latest",
            },
        ]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, log: &ActivityLog) {
        let block = panel_block(" Activity ", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if log.is_empty() {
            let placeholder = Paragraph::new("(no activity)")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, inner);
            return;
        }

        let visible_height = (inner.height as usize).max(1);
        let entries = log.entries();

        // Latest entries at the bottom, minus however far we scrolled back.
        let end = entries.len().saturating_sub(self.scroll_back);
        let start = end.saturating_sub(visible_height);

        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .map(|entry| {
                let stamp = format!(
                    "[{:02}:{:02}] ",
                    entry.elapsed_secs / 60,
                    entry.elapsed_secs % 60
                );
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(stamp, Style::default().fg(Color::DarkGray)),
                    Span::styled(entry.text.clone(), Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items), inner);
    }
}
