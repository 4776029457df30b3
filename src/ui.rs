use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use crate::overlays::render_help_overlay;
use crate::panels::PanelId;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Split horizontally: commands (left) and activity log (right).
    let chunks =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(frame.area());

    app.commands_panel.render(
        frame,
        chunks[0],
        app.focused_panel == PanelId::Commands,
        &app.commands,
    );

    app.activity_panel.render(
        frame,
        chunks[1],
        app.focused_panel == PanelId::Activity,
        &app.activity,
    );

    // Render overlays
    if let Some(ref overlay) = app.shortcuts_overlay {
        overlay.render(frame);
    } else if app.help_visible {
        let (panel_name, panel_keys) = match app.focused_panel {
            PanelId::Commands => ("Commands", app.commands_panel.key_hints()),
            PanelId::Activity => ("Activity", app.activity_panel.key_hints()),
        };
        render_help_overlay(frame, panel_name, &panel_keys, &app.commands);
    }
}
