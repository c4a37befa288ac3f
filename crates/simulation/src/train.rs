//! Core train state: the running flag, speed, position, and station cursor.
//!
//! This is pure data plus mutation rules; nothing here touches rendering,
//! audio, or timers. The [`AnimationLoop`](crate::animation::AnimationLoop)
//! calls [`TrainState::advance`] each tick, and command handlers call the
//! rest.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::stations::STATIONS;

/// The whole game state. Created once at startup and mutated in place;
/// `reset()` re-initializes fields rather than recreating the resource.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct TrainState {
    /// Whether the train moves on each animation tick.
    pub running: bool,
    /// Pixels advanced per tick. Always within `[SPEED_MIN, SPEED_MAX]`.
    pub speed: i32,
    /// Canvas x of the train sprite's center.
    pub position: f32,
    /// Index of the next station to announce. Advances mod `STATIONS.len()`.
    pub current_station: usize,
}

impl Default for TrainState {
    fn default() -> Self {
        Self {
            running: false,
            speed: config::DEFAULT_SPEED,
            position: config::TRAIN_START_X,
            current_station: 0,
        }
    }
}

impl TrainState {
    /// Adjust speed by `delta`, clamped to the valid range. Total: never
    /// fails, any delta is acceptable.
    pub fn adjust_speed(&mut self, delta: i32) {
        self.speed = (self.speed + delta).clamp(config::SPEED_MIN, config::SPEED_MAX);
    }

    /// Flip the running flag. The UI derives its Start/Pause label from it.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Return to the initial state. The station cursor is deliberately
    /// left alone so announcements resume where they left off.
    pub fn reset(&mut self) {
        self.running = false;
        self.position = config::TRAIN_START_X;
        self.speed = config::DEFAULT_SPEED;
    }

    /// One animation step: move by `speed`, wrapping past the right edge to
    /// just off-screen-left. No-op while paused.
    pub fn advance(&mut self) {
        if !self.running {
            return;
        }
        self.position += self.speed as f32;
        if self.position > config::CANVAS_WIDTH {
            self.position = -config::TRAIN_WIDTH;
        }
    }

    /// Name of the station being announced now; advances the cursor to the
    /// next stop. The caller plays the clip for the pre-advance index.
    pub fn next_station(&mut self) -> &'static str {
        let name = STATIONS[self.current_station].name;
        self.current_station = (self.current_station + 1) % STATIONS.len();
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_stays_in_range_for_any_delta() {
        for delta in [-100, -3, -1, 0, 1, 2, 7, 100] {
            for start in config::SPEED_MIN..=config::SPEED_MAX {
                let mut train = TrainState {
                    speed: start,
                    ..Default::default()
                };
                train.adjust_speed(delta);
                assert!((config::SPEED_MIN..=config::SPEED_MAX).contains(&train.speed));
            }
        }
    }

    #[test]
    fn speed_saturates_at_bounds() {
        let mut train = TrainState::default();
        train.adjust_speed(100);
        assert_eq!(train.speed, config::SPEED_MAX);
        train.adjust_speed(-100);
        assert_eq!(train.speed, config::SPEED_MIN);
    }

    #[test]
    fn advance_wraps_past_right_edge() {
        let mut train = TrainState {
            running: true,
            speed: 3,
            position: 1598.0,
            ..Default::default()
        };
        train.advance();
        assert_eq!(train.position, -config::TRAIN_WIDTH);
    }

    #[test]
    fn advance_at_exactly_the_edge_does_not_wrap() {
        // 1597 + 3 = 1600 is not strictly greater than the canvas width.
        let mut train = TrainState {
            running: true,
            speed: 3,
            position: 1597.0,
            ..Default::default()
        };
        train.advance();
        assert_eq!(train.position, config::CANVAS_WIDTH);
    }

    #[test]
    fn advance_is_a_noop_while_paused() {
        let mut train = TrainState::default();
        for _ in 0..50 {
            train.advance();
        }
        assert_eq!(train.position, config::TRAIN_START_X);
    }

    #[test]
    fn stations_cycle_in_order() {
        let mut train = TrainState::default();
        let mut names = Vec::new();
        for _ in 0..STATIONS.len() {
            names.push(train.next_station());
        }
        // Each station announced exactly once...
        for station in &STATIONS {
            assert_eq!(names.iter().filter(|n| **n == station.name).count(), 1);
        }
        // ...and the sixth call wraps back to the first.
        assert_eq!(train.next_station(), names[0]);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_station() {
        let mut train = TrainState::default();
        train.toggle_running();
        train.adjust_speed(5);
        train.next_station();
        train.next_station();
        for _ in 0..10 {
            train.advance();
        }
        train.reset();
        assert!(!train.running);
        assert_eq!(train.speed, config::DEFAULT_SPEED);
        assert_eq!(train.position, config::TRAIN_START_X);
        assert_eq!(train.current_station, 2);
    }

    #[test]
    fn toggle_running_flips_both_ways() {
        let mut train = TrainState::default();
        train.toggle_running();
        assert!(train.running);
        train.toggle_running();
        assert!(!train.running);
    }
}
