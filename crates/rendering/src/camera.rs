//! 2D camera and the canvas-to-world coordinate mapping.
//!
//! Simulation positions are canvas coordinates (origin top-left, y down,
//! matching the original layout constants); Bevy's world space has the
//! origin in the middle with y up. All sprite placement goes through
//! [`canvas_to_world`].

use bevy::prelude::*;

use simulation::config;

pub fn setup_camera(mut commands: Commands) {
    // Default 2D camera at the origin: world origin = canvas center.
    commands.spawn(Camera2d);
}

/// Map a canvas-space point (plus a z layer) into world space.
pub fn canvas_to_world(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(
        x - config::CANVAS_WIDTH / 2.0,
        config::CANVAS_HEIGHT / 2.0 - y,
        z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_center_maps_to_origin() {
        let world = canvas_to_world(
            config::CANVAS_WIDTH / 2.0,
            config::CANVAS_HEIGHT / 2.0,
            0.0,
        );
        assert_eq!(world, Vec3::ZERO);
    }

    #[test]
    fn canvas_y_grows_downward() {
        // A point near the bottom of the canvas lands below the origin.
        let world = canvas_to_world(0.0, config::TRACK_TOP, 0.0);
        assert!(world.y < 0.0);
        assert!(world.x < 0.0);
    }
}
