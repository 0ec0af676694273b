//! One-shot sound playback
//!
//! Scenes only see the [`SoundPlayer`] trait. Playback is fire-and-forget:
//! nothing about a played sound is ever read back.
//!
//! The SDL2_mixer backend is compiled with the `sound` feature. Without it,
//! or when no audio device can be opened, [`SilentPlayer`] is used.

use crate::assets::SoundCue;

pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Player that drops every cue
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("(silent) {:?}", cue);
    }
}

#[cfg(feature = "sound")]
mod mixer {
    use super::SoundPlayer;
    use crate::assets::SoundCue;
    use crate::config::AssetConfig;
    use crate::error::GameError;
    use sdl2::mixer::{Channel, Chunk, InitFlag, Sdl2MixerContext};
    use std::collections::HashMap;
    use std::path::Path;

    const MIX_CHANNELS: i32 = 8;
    const CHUNK_SIZE: i32 = 1024;

    /// SDL2_mixer backed player with every cue decoded at startup
    pub struct MixerPlayer {
        chunks: HashMap<SoundCue, Chunk>,
        _mixer: Sdl2MixerContext,
        _audio: sdl2::AudioSubsystem,
    }

    impl MixerPlayer {
        /// Opens the audio device and loads every cue.
        ///
        /// Device errors come back as `GameError::Sdl`; a missing sound file
        /// is `GameError::AssetLoad`.
        pub fn new(sdl: &sdl2::Sdl, config: &AssetConfig) -> Result<Self, GameError> {
            let audio = sdl.audio()?;
            sdl2::mixer::open_audio(
                sdl2::mixer::DEFAULT_FREQUENCY,
                sdl2::mixer::DEFAULT_FORMAT,
                sdl2::mixer::DEFAULT_CHANNELS,
                CHUNK_SIZE,
            )?;
            let mixer = sdl2::mixer::init(InitFlag::MP3)?;
            sdl2::mixer::allocate_channels(MIX_CHANNELS);

            let mut chunks = HashMap::new();
            for cue in SoundCue::ALL {
                let path = Path::new(&config.sound_dir).join(cue.file_name());
                let chunk = Chunk::from_file(&path).map_err(|e| GameError::AssetLoad {
                    path: path.display().to_string(),
                    reason: e,
                })?;
                chunks.insert(cue, chunk);
            }

            Ok(MixerPlayer {
                chunks,
                _mixer: mixer,
                _audio: audio,
            })
        }
    }

    impl SoundPlayer for MixerPlayer {
        fn play(&mut self, cue: SoundCue) {
            if let Some(chunk) = self.chunks.get(&cue) {
                if let Err(e) = Channel::all().play(chunk, 0) {
                    log::warn!("Could not play {:?}: {}", cue, e);
                }
            }
        }
    }

    impl Drop for MixerPlayer {
        fn drop(&mut self) {
            // Chunks must be freed while the device is still open
            self.chunks.clear();
            sdl2::mixer::close_audio();
        }
    }
}

#[cfg(feature = "sound")]
pub use mixer::MixerPlayer;

/// Test double that remembers what was played
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    pub played: Vec<SoundCue>,
}

#[cfg(test)]
impl SoundPlayer for RecordingPlayer {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}
