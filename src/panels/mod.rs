mod activity;
mod commands;
mod util;

pub use activity::ActivityPanel;
pub use commands::CommandsPanel;
pub use util::{KeyHandleResult, PanelId};
