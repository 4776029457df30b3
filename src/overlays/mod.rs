mod help;
mod shortcuts;
mod util;

pub use help::render_help_overlay;
pub use shortcuts::{Binding, ShortcutsAction, ShortcutsOverlay};
