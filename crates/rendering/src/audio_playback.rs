//! Audio playback system that consumes `PlaySfxEvent` events.
//!
//! Clip handles are loaded once at startup; each event spawns a
//! fire-and-forget `AudioPlayer` entity that despawns when the clip ends.
//! Respects `AudioSettings`: events are discarded while muted, and the
//! effective volume is `event.volume_scale * settings.effective_sfx_volume()`.

use bevy::audio::Volume;
use bevy::prelude::*;

use simulation::audio::{AudioSettings, PlaySfxEvent, SfxCue};
use simulation::stations::{HORN_SOUND, STATIONS};

/// Preloaded clip handles, one per cue.
#[derive(Resource)]
pub struct SoundAssets {
    pub horn: Handle<AudioSource>,
    pub stations: Vec<Handle<AudioSource>>,
}

pub fn load_sound_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundAssets {
        horn: asset_server.load(HORN_SOUND),
        stations: STATIONS
            .iter()
            .map(|station| asset_server.load(station.sound))
            .collect(),
    });
}

fn consume_sfx_events(
    mut events: EventReader<PlaySfxEvent>,
    settings: Res<AudioSettings>,
    sounds: Res<SoundAssets>,
    mut commands: Commands,
) {
    for event in events.read() {
        let channel_volume = settings.effective_sfx_volume();
        if channel_volume == 0.0 {
            // Muted or zero volume -- discard the event silently.
            continue;
        }
        let handle = match event.cue {
            SfxCue::Horn => sounds.horn.clone(),
            SfxCue::Station(index) => match sounds.stations.get(index) {
                Some(handle) => handle.clone(),
                None => continue,
            },
        };
        let volume = event.volume_scale * channel_volume;
        debug!("SFX: {:?} vol={:.2}", event.cue, volume);
        commands.spawn((
            AudioPlayer(handle),
            PlaybackSettings::DESPAWN.with_volume(Volume::new(volume)),
        ));
    }
}

/// Plugin that wires up asset loading and the SFX event consumer.
pub struct AudioPlaybackPlugin;

impl Plugin for AudioPlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sound_assets)
            .add_systems(PostUpdate, consume_sfx_events);
    }
}
