//! Keyboard bindings resource.
//!
//! Systems read bindings from [`KeyBindings`] instead of hardcoding
//! `KeyCode` values, so the defaults live in exactly one place. Defaults
//! follow the original controls (arrows for speed, space for pause) plus
//! single-letter keys for the remaining buttons.

use bevy::prelude::*;

/// A single key binding: a key code plus optional modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    /// A binding with no modifiers.
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// True on the frame the key goes down with the required modifier state.
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.just_pressed(self.key) {
            return false;
        }
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        ctrl_held == self.ctrl && shift_held == self.shift
    }

    /// Human-readable label, e.g. "Space" or "Ctrl+R". Used for button
    /// tooltips.
    pub fn display_label(self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.shift {
            parts.push("Shift".to_string());
        }
        parts.push(keycode_label(self.key));
        parts.join("+")
    }
}

fn keycode_label(key: KeyCode) -> String {
    match key {
        KeyCode::ArrowLeft => "Left".into(),
        KeyCode::ArrowRight => "Right".into(),
        KeyCode::ArrowUp => "Up".into(),
        KeyCode::ArrowDown => "Down".into(),
        KeyCode::Space => "Space".into(),
        KeyCode::KeyA => "A".into(),
        KeyCode::KeyH => "H".into(),
        KeyCode::KeyR => "R".into(),
        other => format!("{other:?}"),
    }
}

/// All configured shortcuts.
#[derive(Resource, Debug, Clone, Copy)]
pub struct KeyBindings {
    pub speed_up: KeyBinding,
    pub speed_down: KeyBinding,
    pub toggle_pause: KeyBinding,
    pub reset: KeyBinding,
    pub announce: KeyBinding,
    pub horn: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            speed_up: KeyBinding::simple(KeyCode::ArrowRight),
            speed_down: KeyBinding::simple(KeyCode::ArrowLeft),
            toggle_pause: KeyBinding::simple(KeyCode::Space),
            reset: KeyBinding::simple(KeyCode::KeyR),
            announce: KeyBinding::simple(KeyCode::KeyA),
            horn: KeyBinding::simple(KeyCode::KeyH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_controls() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.speed_up.key, KeyCode::ArrowRight);
        assert_eq!(bindings.speed_down.key, KeyCode::ArrowLeft);
        assert_eq!(bindings.toggle_pause.key, KeyCode::Space);
    }

    #[test]
    fn display_label_names_plain_keys() {
        assert_eq!(
            KeyBinding::simple(KeyCode::Space).display_label(),
            "Space"
        );
        assert_eq!(
            KeyBinding::simple(KeyCode::ArrowLeft).display_label(),
            "Left"
        );
    }
}
