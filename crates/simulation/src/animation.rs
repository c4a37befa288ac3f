//! The fixed-period animation loop.
//!
//! [`AnimationLoop`] is a pure scheduling shim: a Stopped/Running gate plus a
//! tick counter. The actual timer is Bevy's `FixedUpdate` schedule, whose
//! timestep is set to [`config::TICK_PERIOD`] by the `SimulationPlugin`. Each
//! firing advances the train (when the gate is open) -- rendering reads the
//! resulting state every frame.
//!
//! The loop starts in `Running` at construction, independent of
//! `TrainState::running`: the gate controls whether ticks *happen*, the
//! running flag controls whether the train *moves* on a tick. Reset always
//! performs stop-then-start so repeated resets can never stack timers; the
//! tick counter exists so tests can assert exactly that.

use bevy::prelude::*;

use crate::train::TrainState;

/// State machine for the loop. Firing while `Running` stays in `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    Stopped,
    #[default]
    Running,
}

/// Gate and counter for the animation tick.
#[derive(Resource, Debug, Default)]
pub struct AnimationLoop {
    state: LoopState,
    ticks: u64,
}

impl AnimationLoop {
    /// Open the gate. Idempotent: starting a running loop changes nothing,
    /// and in particular does not add a second timer.
    pub fn start(&mut self) {
        self.state = LoopState::Running;
    }

    /// Close the gate. After this returns no further tick runs until
    /// `start()`. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Total ticks fired since startup. Monotonic; used by tests to verify
    /// the one-timer property (N periods -> N ticks).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// The tick itself, scheduled on `FixedUpdate`. Holds no game logic beyond
/// delegating to [`TrainState::advance`].
pub fn animation_tick(mut ticker: ResMut<AnimationLoop>, mut train: ResMut<TrainState>) {
    if !ticker.is_running() {
        return;
    }
    ticker.ticks += 1;
    train.advance();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_runs_from_construction() {
        assert!(AnimationLoop::default().is_running());
    }

    #[test]
    fn start_is_idempotent() {
        let mut ticker = AnimationLoop::default();
        ticker.start();
        ticker.start();
        assert!(ticker.is_running());
        assert_eq!(ticker.ticks(), 0);
    }

    #[test]
    fn stop_is_safe_when_already_stopped() {
        let mut ticker = AnimationLoop::default();
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }
}
