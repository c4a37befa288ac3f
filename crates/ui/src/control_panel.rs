//! The button row along the bottom of the window.
//!
//! Buttons are enumerated in one table; the system iterates it, draws each
//! button, and emits the matching [`GameCommand`] on click. The Start/Pause
//! button's label is derived from the running flag, everything else is
//! static configuration.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::commands::GameCommand;
use simulation::keybindings::{KeyBinding, KeyBindings};
use simulation::train::TrainState;

struct PanelButton {
    label: &'static str,
    fill: egui::Color32,
    command: GameCommand,
}

/// Button order and colors follow the original control frame.
const PANEL_BUTTONS: [PanelButton; 6] = [
    PanelButton {
        label: "Start/Pause",
        fill: egui::Color32::from_rgb(144, 238, 144),
        command: GameCommand::TogglePause,
    },
    PanelButton {
        label: "Speed \u{25b2}",
        fill: egui::Color32::from_rgb(255, 165, 0),
        command: GameCommand::SpeedUp,
    },
    PanelButton {
        label: "Slow \u{25bc}",
        fill: egui::Color32::from_rgb(173, 216, 230),
        command: GameCommand::SlowDown,
    },
    PanelButton {
        label: "Reset",
        fill: egui::Color32::from_rgb(255, 192, 203),
        command: GameCommand::Reset,
    },
    PanelButton {
        label: "Announce",
        fill: egui::Color32::from_rgb(255, 235, 100),
        command: GameCommand::Announce,
    },
    PanelButton {
        label: "Horn",
        fill: egui::Color32::from_rgb(230, 70, 70),
        command: GameCommand::Horn,
    },
];

fn binding_for(bindings: &KeyBindings, command: GameCommand) -> KeyBinding {
    match command {
        GameCommand::TogglePause => bindings.toggle_pause,
        GameCommand::SpeedUp => bindings.speed_up,
        GameCommand::SlowDown => bindings.speed_down,
        GameCommand::Reset => bindings.reset,
        GameCommand::Announce => bindings.announce,
        GameCommand::Horn => bindings.horn,
    }
}

pub fn control_panel_ui(
    mut contexts: EguiContexts,
    train: Res<TrainState>,
    bindings: Res<KeyBindings>,
    mut commands: EventWriter<GameCommand>,
) {
    egui::TopBottomPanel::bottom("control_panel")
        .exact_height(52.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;

                for button in &PANEL_BUTTONS {
                    let label = match button.command {
                        // Label tracks the running flag, like the original
                        // button text swap.
                        GameCommand::TogglePause => {
                            if train.running {
                                "Pause"
                            } else {
                                "Start"
                            }
                        }
                        _ => button.label,
                    };
                    let widget = egui::Button::new(
                        egui::RichText::new(label)
                            .strong()
                            .color(egui::Color32::BLACK),
                    )
                    .fill(button.fill)
                    .min_size(egui::vec2(110.0, 30.0));

                    let hint = binding_for(&bindings, button.command).display_label();
                    if ui.add(widget).on_hover_text(hint).clicked() {
                        commands.send(button.command);
                    }
                }

                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Speed: {}", train.speed)).strong(),
                );
            });
        });
}
