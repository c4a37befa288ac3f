//! Game logic for the little train line: state, the fixed-period animation
//! loop, commands, and the audio/message data layers. Everything here runs
//! headless; rendering and UI live in their own crates and only read (or
//! send events into) these resources.

use bevy::prelude::*;

pub mod animation;
pub mod audio;
pub mod commands;
pub mod config;
pub mod keybindings;
pub mod messages;
pub mod stations;
pub mod train;

#[cfg(test)]
pub mod test_harness;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // The animation timer: one FixedUpdate firing per TICK_PERIOD.
        app.insert_resource(Time::<Fixed>::from_duration(config::TICK_PERIOD))
            .init_resource::<train::TrainState>()
            .init_resource::<animation::AnimationLoop>()
            .init_resource::<audio::AudioSettings>()
            .init_resource::<keybindings::KeyBindings>()
            .init_resource::<messages::StatusMessage>()
            .add_event::<commands::GameCommand>()
            .add_event::<audio::PlaySfxEvent>()
            .add_systems(FixedUpdate, animation::animation_tick)
            .add_systems(
                Update,
                (commands::apply_game_commands, messages::tick_status_message),
            );
    }
}
