//! Game commands: the single funnel for every button and key press.
//!
//! Buttons and keybindings emit [`GameCommand`] events; one system applies
//! them to [`TrainState`] and the [`AnimationLoop`]. Keeping mutation in one
//! place means the UI layers stay pure emitters and the command set reads
//! as a table.

use bevy::prelude::*;

use crate::animation::AnimationLoop;
use crate::audio::{PlaySfxEvent, SfxCue};
use crate::messages::StatusMessage;
use crate::train::TrainState;

/// Everything a button or key can ask the game to do.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Flip between moving and paused.
    TogglePause,
    SpeedUp,
    SlowDown,
    /// Back to the start: paused, default speed, start position. The loop is
    /// always stopped and restarted, never left running through the reset.
    Reset,
    /// Announce the next station and advance the station cursor.
    Announce,
    Horn,
}

/// Applies queued commands to the game state, in arrival order.
pub fn apply_game_commands(
    mut commands: EventReader<GameCommand>,
    mut train: ResMut<TrainState>,
    mut ticker: ResMut<AnimationLoop>,
    mut sfx: EventWriter<PlaySfxEvent>,
    mut status: ResMut<StatusMessage>,
) {
    for command in commands.read() {
        match command {
            GameCommand::TogglePause => train.toggle_running(),
            GameCommand::SpeedUp => train.adjust_speed(1),
            GameCommand::SlowDown => train.adjust_speed(-1),
            GameCommand::Reset => {
                // Cancel-then-restart, unconditionally; the loop must never
                // be left running through a reset.
                ticker.stop();
                train.reset();
                ticker.start();
            }
            GameCommand::Announce => {
                let station = train.current_station;
                let name = train.next_station();
                sfx.send(PlaySfxEvent::new(SfxCue::Station(station)));
                status.set(format!("Next Stop: {name}"));
            }
            GameCommand::Horn => {
                sfx.send(PlaySfxEvent::new(SfxCue::Horn));
                status.set("Train is Moving!");
            }
        }
    }
}
