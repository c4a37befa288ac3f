use bevy::prelude::*;

pub mod audio_playback;
pub mod camera;
pub mod scene;
pub mod train_render;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (camera::setup_camera, scene::spawn_track, train_render::spawn_train),
        )
        .add_systems(Update, train_render::sync_train_sprite)
        .add_plugins(audio_playback::AudioPlaybackPlugin);
    }
}
