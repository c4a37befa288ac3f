//! Transient on-screen status messages ("Next Stop: ...", horn banner).
//!
//! The resource lives here (not in `ui`) so both command handlers and the
//! overlay can touch it without circular crate dependencies. The UI reads
//! the text while `active()`; a plain countdown makes the message vanish
//! after [`config::MESSAGE_SECS`].

use bevy::prelude::*;

use crate::config;

/// Status message shown briefly over the canvas.
#[derive(Resource, Default)]
pub struct StatusMessage {
    pub text: String,
    pub timer: f32,
}

impl StatusMessage {
    /// Replace whatever is showing and restart the countdown.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.timer = config::MESSAGE_SECS;
    }

    pub fn active(&self) -> bool {
        self.timer > 0.0
    }
}

pub fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.timer > 0.0 {
        status.timer -= time.delta_secs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_makes_message_active() {
        let mut status = StatusMessage::default();
        assert!(!status.active());
        status.set("Next Stop: Cleveland Circle");
        assert!(status.active());
        assert_eq!(status.timer, config::MESSAGE_SECS);
    }

    #[test]
    fn setting_again_restarts_the_countdown() {
        let mut status = StatusMessage::default();
        status.set("first");
        status.timer = 0.5;
        status.set("second");
        assert_eq!(status.text, "second");
        assert_eq!(status.timer, config::MESSAGE_SECS);
    }

    #[test]
    fn expired_message_is_inactive() {
        let mut status = StatusMessage::default();
        status.set("gone soon");
        status.timer = 0.0;
        assert!(!status.active());
    }
}
