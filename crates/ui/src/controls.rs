//! Keyboard shortcuts, routed through the same command events as the
//! buttons. Suppressed while egui wants keyboard focus.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::commands::GameCommand;
use simulation::keybindings::KeyBindings;

pub fn command_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut contexts: EguiContexts,
    mut commands: EventWriter<GameCommand>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    if bindings.toggle_pause.just_pressed(&keyboard) {
        commands.send(GameCommand::TogglePause);
    }
    if bindings.speed_up.just_pressed(&keyboard) {
        commands.send(GameCommand::SpeedUp);
    }
    if bindings.speed_down.just_pressed(&keyboard) {
        commands.send(GameCommand::SlowDown);
    }
    if bindings.reset.just_pressed(&keyboard) {
        commands.send(GameCommand::Reset);
    }
    if bindings.announce.just_pressed(&keyboard) {
        commands.send(GameCommand::Announce);
    }
    if bindings.horn.just_pressed(&keyboard) {
        commands.send(GameCommand::Horn);
    }
}
