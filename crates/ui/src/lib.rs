use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod control_panel;
pub mod controls;
pub mod message_overlay;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                (
                    controls::command_keybinds,
                    control_panel::control_panel_ui,
                    message_overlay::message_overlay_ui,
                ),
            );
    }
}
