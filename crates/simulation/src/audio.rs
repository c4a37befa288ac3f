//! Audio data layer: settings plus the sound-effect event.
//!
//! Gameplay systems emit [`PlaySfxEvent`]; actual playback happens
//! downstream in the rendering crate, which maps each cue to a preloaded
//! clip. This module owns only the data.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// The sounds the game can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfxCue {
    /// The choo-choo horn.
    Horn,
    /// Announcement clip for the station at this index.
    Station(usize),
}

/// Event sent to request fire-and-forget sound playback.
#[derive(Event, Debug, Clone)]
pub struct PlaySfxEvent {
    pub cue: SfxCue,
    /// Volume multiplier on top of the channel volume (0.0-1.0).
    pub volume_scale: f32,
}

impl PlaySfxEvent {
    /// An event at full channel volume.
    pub fn new(cue: SfxCue) -> Self {
        Self {
            cue,
            volume_scale: 1.0,
        }
    }
}

/// Central audio configuration. Volumes are `0.0` (silent) to `1.0` (full);
/// `muted` overrides all channels to zero without losing the stored levels.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    pub master_volume: f32,
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.7,
            sfx_volume: 0.7,
            muted: false,
        }
    }
}

impl AudioSettings {
    /// Effective SFX volume: 0 when muted, otherwise `master * sfx`.
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            return 0.0;
        }
        self.master_volume * self.sfx_volume
    }
}
