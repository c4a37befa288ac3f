//! Headless test harness: a `bevy::app::App` wrapping `SimulationPlugin`
//! with no window, renderer, or audio device.
//!
//! Time is driven manually via `TimeUpdateStrategy::ManualDuration`, set to
//! exactly one tick period, so every `App::update` fires the `FixedUpdate`
//! tick exactly once. That makes the animation loop fully deterministic:
//! N updates are N periods are (while the loop is running) N ticks.

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::animation::AnimationLoop;
use crate::audio::{PlaySfxEvent, SfxCue};
use crate::commands::GameCommand;
use crate::config;
use crate::messages::StatusMessage;
use crate::train::TrainState;
use crate::SimulationPlugin;

/// A headless game for integration tests. One `update` = one tick period.
pub struct TestGame {
    app: App,
}

impl TestGame {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        // Each update advances the clock by exactly one tick period.
        app.insert_resource(TimeUpdateStrategy::ManualDuration(config::TICK_PERIOD));
        // Bevy's first-ever update has a zero delta and so never fires
        // `FixedUpdate`; absorb it here so "one update = one tick period"
        // holds for every update the tests perform.
        app.update();
        Self { app }
    }

    /// Advance the game by `n` tick periods.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Queue a command and run one frame so it is applied. Note this also
    /// advances time by one tick period.
    pub fn send(&mut self, command: GameCommand) {
        self.app.world_mut().send_event(command);
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn train(&self) -> &TrainState {
        self.app.world().resource::<TrainState>()
    }

    pub fn status(&self) -> &StatusMessage {
        self.app.world().resource::<StatusMessage>()
    }

    /// Total animation ticks fired so far.
    pub fn ticks(&self) -> u64 {
        self.app.world().resource::<AnimationLoop>().ticks()
    }

    /// Cues of all sound events still buffered (events live for two frames).
    pub fn sent_sfx(&self) -> Vec<SfxCue> {
        let events = self.app.world().resource::<Events<PlaySfxEvent>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).map(|event| event.cue).collect()
    }
}
