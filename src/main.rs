use rand::SeedableRng;
use rand::rngs::StdRng;

mod assets;
mod audio;
mod clock;
mod config;
mod entity;
mod error;
mod gui;
mod hit_region;
mod input_system;
mod scenes;
mod text;

use assets::AssetRegistry;
use audio::{SilentPlayer, SoundPlayer};
use clock::FrameClock;
use config::{AssetConfig, GameConfig, DEFAULT_CONFIG_PATH};
use error::GameError;
use input_system::InputSystem;
use scenes::{LoopControl, SceneEnv, SceneKind, SceneManager};

/// Largest integer window scale that fits the desktop, between 1x and 3x
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, width: u32, height: u32) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let scale = (usable_w / width.max(1) as i32).min(usable_h / height.max(1) as i32);
            scale.clamp(1, 3) as u32
        }
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Picks the sound backend.
///
/// No audio device means a silent game; a device with missing sound files is
/// an asset error like any other.
#[cfg(feature = "sound")]
fn open_sound(sdl: &sdl2::Sdl, config: &AssetConfig) -> Result<Box<dyn SoundPlayer>, GameError> {
    match audio::MixerPlayer::new(sdl, config) {
        Ok(player) => Ok(Box::new(player)),
        Err(GameError::Sdl(e)) => {
            log::warn!("Audio unavailable, running silent: {}", e);
            Ok(Box::new(SilentPlayer))
        }
        Err(e) => Err(e),
    }
}

#[cfg(not(feature = "sound"))]
fn open_sound(_sdl: &sdl2::Sdl, _config: &AssetConfig) -> Result<Box<dyn SoundPlayer>, GameError> {
    log::info!("Built without the `sound` feature, running silent");
    Ok(Box::new(SilentPlayer))
}

fn main() -> Result<(), String> {
    init_logging();

    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH)?;
    let (width, height) = (config.window.width, config.window.height);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem, width, height);
    log::info!(
        "Window scale {}x ({}x{})",
        window_scale,
        width * window_scale,
        height * window_scale
    );

    let window = video_subsystem
        .window(&config.window.title, width * window_scale, height * window_scale)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Game coordinates (and mouse events) stay in the logical resolution
    canvas.set_logical_size(width, height).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let assets = AssetRegistry::load(&texture_creator, &config.assets)?;
    let mut audio = open_sound(&sdl_context, &config.assets)?;

    let input = InputSystem::new();
    let mut clock = FrameClock::new(config.window.target_fps);
    let env = SceneEnv::new(config, assets.sizes(), StdRng::from_entropy());
    let mut manager = SceneManager::new(SceneKind::Menu, env)?;

    'running: loop {
        let dt = clock.tick();

        for event in input.poll_events(&mut event_pump) {
            if manager.handle_event(&event)? == LoopControl::Exit {
                break 'running;
            }
        }

        if manager.update(dt, audio.as_mut())? == LoopControl::Exit {
            break 'running;
        }

        manager.draw(&mut canvas, &assets)?;
        canvas.present();
    }

    manager.shutdown();
    log::info!("Bye");
    Ok(())
}
