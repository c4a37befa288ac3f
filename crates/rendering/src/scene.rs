//! Static scenery: the track bed and its crossties.
//!
//! Spawned once at startup; nothing here changes afterwards. Geometry comes
//! from the layout constants (bed at canvas y 450-500, white ties every
//! 50 px), colors from the original scene.

use bevy::prelude::*;

use simulation::config;

use crate::camera::canvas_to_world;

const TRACK_COLOR: Color = Color::srgb(0.1, 0.25, 0.8);
const TIE_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);

pub fn spawn_track(mut commands: Commands) {
    // Track bed: a single long rectangle across the full canvas.
    commands.spawn((
        Sprite::from_color(
            TRACK_COLOR,
            Vec2::new(config::CANVAS_WIDTH, config::TRACK_HEIGHT),
        ),
        Transform::from_translation(canvas_to_world(
            config::CANVAS_WIDTH / 2.0,
            config::TRACK_TOP + config::TRACK_HEIGHT / 2.0,
            0.0,
        )),
    ));

    // Crossties along the upper half of the bed.
    let tie_y = config::TRACK_TOP + config::TIE_HEIGHT / 2.0;
    let mut x = 0.0;
    while x < config::CANVAS_WIDTH {
        commands.spawn((
            Sprite::from_color(TIE_COLOR, Vec2::new(config::TIE_WIDTH, config::TIE_HEIGHT)),
            Transform::from_translation(canvas_to_world(x, tie_y, 0.5)),
        ));
        x += config::TIE_SPACING;
    }
}
