use crate::overlays::Binding;

/// Effect a command has on the application when dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Quit,
    ToggleHelp,
    OpenShortcutSettings,
    ClearActivity,
    SwitchPanel,
}

/// An application action with a stable id, a human-readable label and a
/// rebindable keyboard shortcut. An empty shortcut means unbound.
#[derive(Debug, Clone)]
pub struct Command {
    pub id: &'static str,
    pub label: &'static str,
    pub shortcut: String,
    pub default_shortcut: &'static str,
    pub action: CommandAction,
}

impl Command {
    fn new(
        id: &'static str,
        label: &'static str,
        default_shortcut: &'static str,
        action: CommandAction,
    ) -> Self {
        Self {
            id,
            label,
            shortcut: default_shortcut.to_string(),
            default_shortcut,
            action,
        }
    }
}

/// The application's commands, kept sorted by id for display and lookup.
pub struct CommandSet {
    commands: Vec<Command>,
}

impl CommandSet {
    pub fn standard() -> Self {
        Self::from_commands(vec![
            Command::new(
                "activity.clear",
                "Clear Activity Log",
                "Ctrl+L",
                CommandAction::ClearActivity,
            ),
            Command::new("app.help", "Toggle Help", "F1", CommandAction::ToggleHelp),
            Command::new("app.quit", "Quit", "Ctrl+Q", CommandAction::Quit),
            Command::new(
                "app.shortcuts",
                "Edit Keyboard Shortcuts",
                "Ctrl+K",
                CommandAction::OpenShortcutSettings,
            ),
            Command::new(
                "panel.switch",
                "Switch Panel",
                "Tab",
                CommandAction::SwitchPanel,
            ),
        ])
    }

    pub fn from_commands(mut commands: Vec<Command>) -> Self {
        commands.sort_by(|a, b| a.id.cmp(b.id));
        Self { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.id == id)
    }

    /// First command bound to `shortcut`. Duplicate bindings are legal;
    /// the earliest command in id order wins.
    pub fn find_by_shortcut(&self, shortcut: &str) -> Option<&Command> {
        if shortcut.is_empty() {
            return None;
        }
        self.commands
            .iter()
            .find(|command| command.shortcut == shortcut)
    }

    /// Overwrite command shortcuts with the values displayed in the
    /// settings overlay. Invoked only when the overlay is accepted.
    pub fn apply_bindings(&mut self, bindings: &[Binding]) {
        for binding in bindings {
            if let Some(command) = self
                .commands
                .iter_mut()
                .find(|command| command.id == binding.id)
            {
                command.shortcut = binding.shortcut.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_commands_are_sorted_by_id() {
        let commands = CommandSet::standard();
        let ids: Vec<&str> = commands.commands().iter().map(|c| c.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert!(!commands.is_empty());
    }

    #[test]
    fn construction_sorts_by_id() {
        let commands = CommandSet::from_commands(vec![
            Command::new("b.second", "Second", "F2", CommandAction::ToggleHelp),
            Command::new("a.first", "First", "F1", CommandAction::Quit),
        ]);
        assert_eq!(commands.get(0).map(|c| c.id), Some("a.first"));
        assert_eq!(commands.get(1).map(|c| c.id), Some("b.second"));
    }

    #[test]
    fn lookup_by_shortcut() {
        let commands = CommandSet::standard();
        let quit = commands.find_by_shortcut("Ctrl+Q");
        assert_eq!(quit.map(|c| c.action), Some(CommandAction::Quit));
        assert!(commands.find_by_shortcut("Ctrl+Z").is_none());
    }

    #[test]
    fn empty_shortcut_never_matches() {
        let mut commands = CommandSet::standard();
        commands.apply_bindings(&[Binding {
            id: "app.quit".to_string(),
            shortcut: String::new(),
        }]);
        assert!(commands.find_by_shortcut("").is_none());
    }

    #[test]
    fn apply_bindings_overwrites_shortcuts() {
        let mut commands = CommandSet::standard();
        commands.apply_bindings(&[
            Binding {
                id: "app.quit".to_string(),
                shortcut: "Ctrl+X".to_string(),
            },
            Binding {
                id: "app.help".to_string(),
                shortcut: "F10".to_string(),
            },
        ]);

        assert_eq!(
            commands.find_by_id("app.quit").map(|c| c.shortcut.as_str()),
            Some("Ctrl+X")
        );
        assert_eq!(
            commands.find_by_id("app.help").map(|c| c.shortcut.as_str()),
            Some("F10")
        );
        // The old binding no longer dispatches.
        assert!(commands.find_by_shortcut("Ctrl+Q").is_none());
        // Defaults are untouched.
        assert_eq!(
            commands
                .find_by_id("app.quit")
                .map(|c| c.default_shortcut),
            Some("Ctrl+Q")
        );
    }

    #[test]
    fn unknown_binding_ids_are_skipped() {
        let mut commands = CommandSet::standard();
        commands.apply_bindings(&[Binding {
            id: "does.not.exist".to_string(),
            shortcut: "F9".to_string(),
        }]);
        assert!(commands.find_by_shortcut("F9").is_none());
    }
}
