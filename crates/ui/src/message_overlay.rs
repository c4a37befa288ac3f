//! Transient message overlay ("Next Stop: ...", "Train is Moving!").
//!
//! Draws the active [`StatusMessage`] as big red text near the top-left of
//! the canvas, at the spot the original put it. The countdown lives in the
//! simulation crate; this system only draws.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::messages::StatusMessage;

const MESSAGE_POS: egui::Pos2 = egui::pos2(280.0, 38.0);
const MESSAGE_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

pub fn message_overlay_ui(mut contexts: EguiContexts, status: Res<StatusMessage>) {
    if !status.active() {
        return;
    }
    egui::Area::new(egui::Id::new("status_message"))
        .fixed_pos(MESSAGE_POS)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(
                egui::RichText::new(&status.text)
                    .size(24.0)
                    .strong()
                    .color(MESSAGE_COLOR),
            );
        });
}
