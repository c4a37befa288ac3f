//! The train sprite, synced from `TrainState` every frame.

use bevy::prelude::*;

use simulation::config;
use simulation::train::TrainState;

use crate::camera::canvas_to_world;

const TRAIN_COLOR: Color = Color::srgb(0.85, 0.1, 0.1);

/// Marker for the train entity.
#[derive(Component)]
pub struct TrainSprite;

pub fn spawn_train(mut commands: Commands) {
    commands.spawn((
        TrainSprite,
        Sprite::from_color(
            TRAIN_COLOR,
            Vec2::new(config::TRAIN_WIDTH, config::TRAIN_HEIGHT),
        ),
        Transform::from_translation(canvas_to_world(
            config::TRAIN_START_X,
            config::TRAIN_Y,
            1.0,
        )),
    ));
}

/// Copies the simulation position onto the sprite transform. Runs every
/// render frame; the position only changes on animation ticks.
pub fn sync_train_sprite(
    train: Res<TrainState>,
    mut sprites: Query<&mut Transform, With<TrainSprite>>,
) {
    for mut transform in &mut sprites {
        transform.translation.x = canvas_to_world(train.position, config::TRAIN_Y, 1.0).x;
    }
}
