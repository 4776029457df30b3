use crossterm::event::KeyEvent;

use crate::activity::ActivityLog;
use crate::command::{CommandAction, CommandSet};
use crate::keys;
use crate::overlays::{ShortcutsAction, ShortcutsOverlay};
use crate::panels::{ActivityPanel, CommandsPanel, KeyHandleResult, PanelId};

pub struct App {
    pub should_quit: bool,
    pub commands: CommandSet,
    pub activity: ActivityLog,
    pub commands_panel: CommandsPanel,
    pub activity_panel: ActivityPanel,
    pub focused_panel: PanelId,
    pub shortcuts_overlay: Option<ShortcutsOverlay>,
    pub help_visible: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            should_quit: false,
            commands: CommandSet::standard(),
            activity: ActivityLog::new(),
            commands_panel: CommandsPanel::default(),
            activity_panel: ActivityPanel::default(),
            focused_panel: PanelId::Commands,
            shortcuts_overlay: None,
            help_visible: false,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // The shortcuts overlay is modal and swallows every key while open.
        if let Some(overlay) = self.shortcuts_overlay.as_mut() {
            match overlay.handle_key(key) {
                ShortcutsAction::Consumed => {}
                ShortcutsAction::Dismiss => {
                    self.shortcuts_overlay = None;
                    self.activity.record("Shortcut changes discarded");
                }
                ShortcutsAction::Apply(bindings) => {
                    self.commands.apply_bindings(&bindings);
                    self.shortcuts_overlay = None;
                    self.activity.record("Shortcuts updated");
                }
            }
            return;
        }

        if self.help_visible {
            self.help_visible = false;
            return;
        }

        // Shortcut-driven dispatch through the command set.
        if let Some(shortcut) = keys::shortcut_for(&key) {
            if let Some(command) = self.commands.find_by_shortcut(&shortcut) {
                let action = command.action;
                let label = command.label;
                self.run_command(action, label);
                return;
            }
        }

        // Panel-local keys.
        let result = match self.focused_panel {
            PanelId::Commands => self.commands_panel.handle_key(key, self.commands.len()),
            PanelId::Activity => self.activity_panel.handle_key(key, self.activity.len()),
        };

        if let KeyHandleResult::InvokeCommand(index) = result {
            if let Some(command) = self.commands.get(index) {
                let action = command.action;
                let label = command.label;
                self.run_command(action, label);
            }
        }
    }

    fn run_command(&mut self, action: CommandAction, label: &'static str) {
        self.activity.record(label);

        match action {
            CommandAction::Quit => self.should_quit = true,
            CommandAction::ToggleHelp => self.help_visible = !self.help_visible,
            CommandAction::OpenShortcutSettings => {
                self.shortcuts_overlay = Some(ShortcutsOverlay::new(&self.commands));
            }
            CommandAction::ClearActivity => {
                self.activity.clear();
                self.activity_panel.clamp_scroll(self.activity.len());
            }
            CommandAction::SwitchPanel => {
                self.focused_panel = self.focused_panel.other();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        press(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_shortcut_dispatches() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_switches_the_focused_panel() {
        let mut app = App::new();
        assert_eq!(app.focused_panel, PanelId::Commands);
        app.handle_key(plain(KeyCode::Tab));
        assert_eq!(app.focused_panel, PanelId::Activity);
    }

    #[test]
    fn enter_runs_the_selected_command() {
        let mut app = App::new();
        // First command in id order is activity.clear.
        app.handle_key(plain(KeyCode::Enter));
        // Clearing wipes its own log entry.
        assert!(app.activity.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn help_opens_and_any_key_closes_it() {
        let mut app = App::new();
        app.handle_key(plain(KeyCode::F(1)));
        assert!(app.help_visible);

        app.handle_key(plain(KeyCode::Char('x')));
        assert!(!app.help_visible);
    }

    #[test]
    fn settings_overlay_is_modal() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert!(app.shortcuts_overlay.is_some());

        // Ctrl+Q must not dispatch while the overlay is open.
        app.handle_key(press(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(!app.should_quit);
        assert!(app.shortcuts_overlay.is_some());
    }

    #[test]
    fn accepted_overlay_rebinds_commands() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('k'), KeyModifiers::CONTROL));

        // Record Ctrl+P for the first entry (activity.clear), then apply.
        app.handle_key(plain(KeyCode::Char('e')));
        app.handle_key(press(KeyCode::Char('p'), KeyModifiers::CONTROL));
        app.handle_key(plain(KeyCode::Enter));
        assert!(app.shortcuts_overlay.is_none());

        assert_eq!(
            app.commands
                .find_by_id("activity.clear")
                .map(|c| c.shortcut.as_str()),
            Some("Ctrl+P")
        );

        // The new binding dispatches and the old one is gone.
        app.activity.record("marker");
        app.handle_key(press(KeyCode::Char('p'), KeyModifiers::CONTROL));
        assert!(app.activity.is_empty());

        app.activity.record("marker");
        app.handle_key(press(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(!app.activity.is_empty());
    }

    #[test]
    fn cancelled_overlay_mutates_nothing() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('k'), KeyModifiers::CONTROL));

        app.handle_key(plain(KeyCode::Char('e')));
        app.handle_key(plain(KeyCode::F(9)));
        app.handle_key(plain(KeyCode::Esc));
        assert!(app.shortcuts_overlay.is_none());

        assert_eq!(
            app.commands
                .find_by_id("activity.clear")
                .map(|c| c.shortcut.as_str()),
            Some("Ctrl+L")
        );
    }

    #[test]
    fn unbound_keys_fall_through_to_the_panel() {
        let mut app = App::new();
        app.handle_key(plain(KeyCode::Char('j')));
        // Cursor moved, no command ran.
        assert!(app.activity.is_empty());
    }
}
