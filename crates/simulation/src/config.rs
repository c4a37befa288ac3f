//! World constants for the train line.
//!
//! The canvas uses the original layout: a 1600x600 play area with the track
//! bed near the bottom and the train riding just above it. Positions are in
//! canvas coordinates (origin top-left, y grows downward); the rendering
//! crate maps them into world space.

use std::time::Duration;

/// Width of the play area in pixels. The train wraps once its center
/// passes this value.
pub const CANVAS_WIDTH: f32 = 1600.0;
/// Height of the play area in pixels.
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Canvas x where the train starts (and returns to on reset).
pub const TRAIN_START_X: f32 = 100.0;
/// Canvas y of the train sprite's center.
pub const TRAIN_Y: f32 = 308.0;
/// Train sprite width. Wrap-around respawns the train at `-TRAIN_WIDTH`
/// so it slides in from off-screen-left.
pub const TRAIN_WIDTH: f32 = 100.0;
pub const TRAIN_HEIGHT: f32 = 50.0;

/// Canvas y of the top edge of the track bed.
pub const TRACK_TOP: f32 = 450.0;
pub const TRACK_HEIGHT: f32 = 50.0;
/// Horizontal spacing between crossties.
pub const TIE_SPACING: f32 = 50.0;
pub const TIE_WIDTH: f32 = 2.0;
pub const TIE_HEIGHT: f32 = 20.0;

/// Period of the animation tick. One tick advances the train by `speed`
/// pixels when the game is running.
pub const TICK_PERIOD: Duration = Duration::from_millis(30);

pub const SPEED_MIN: i32 = 1;
pub const SPEED_MAX: i32 = 10;
pub const DEFAULT_SPEED: i32 = 3;

/// How long a transient status message stays on screen.
pub const MESSAGE_SECS: f32 = 4.0;
