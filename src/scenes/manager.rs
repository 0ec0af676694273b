//! Scene manager
//!
//! Owns the one current [`Scene`] and performs transitions:
//! stop the outgoing scene, build the incoming one, start it. Failures in
//! `start`/`stop` are logged and ignored so a misbehaving scene cannot wedge
//! the state machine; failures while *building* a scene are asset errors and
//! are returned to the caller.

use super::{Scene, SceneEnv, SceneError, SceneKind, Transition};
use crate::assets::AssetRegistry;
use crate::audio::SoundPlayer;
use crate::error::GameError;
use crate::input_system::GameEvent;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Whether the game loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct SceneManager {
    current: Scene,
    env: SceneEnv,
}

impl SceneManager {
    /// Builds and starts the initial scene
    pub fn new(initial: SceneKind, mut env: SceneEnv) -> Result<Self, GameError> {
        let mut current = Scene::build(initial, &mut env)?;
        if let Err(e) = current.start(&mut env) {
            report_lifecycle_failure("start", initial, &e);
        }
        log::info!("Initial scene: {:?}", initial);

        Ok(SceneManager { current, env })
    }

    #[cfg(test)]
    pub fn current(&self) -> &Scene {
        &self.current
    }

    /// Replaces the current scene with a fresh `kind` scene.
    ///
    /// The outgoing scene is stopped before the new one is constructed and
    /// started. Returns the retired scene.
    pub fn change_scene(&mut self, kind: SceneKind) -> Result<Scene, GameError> {
        let outgoing = self.current.kind();
        log::info!("Scene change: {:?} -> {:?}", outgoing, kind);

        if let Err(e) = self.current.stop() {
            report_lifecycle_failure("stop", outgoing, &e);
        }

        let mut next = Scene::build(kind, &mut self.env)?;
        if let Err(e) = next.start(&mut self.env) {
            report_lifecycle_failure("start", kind, &e);
        }

        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Dispatches one input event to the current scene.
    ///
    /// A transition takes effect immediately, so later events from the
    /// same frame reach the new scene.
    pub fn handle_event(&mut self, event: &GameEvent) -> Result<LoopControl, GameError> {
        if *event == GameEvent::Quit {
            return Ok(LoopControl::Exit);
        }
        let transition = self.current.handle_event(event);
        self.apply(transition)
    }

    pub fn update(&mut self, dt: f32, audio: &mut dyn SoundPlayer) -> Result<LoopControl, GameError> {
        let transition = self.current.update(dt, audio);
        self.apply(transition)
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, assets: &AssetRegistry<'_>) -> Result<(), String> {
        self.current.draw(canvas, assets)
    }

    /// Stops the current scene when the game exits
    pub fn shutdown(&mut self) {
        let kind = self.current.kind();
        if let Err(e) = self.current.stop() {
            report_lifecycle_failure("stop", kind, &e);
        }
        log::info!("Scene manager shut down in {:?}", kind);
    }

    fn apply(&mut self, transition: Transition) -> Result<LoopControl, GameError> {
        match transition {
            Transition::Stay => Ok(LoopControl::Continue),
            Transition::Switch(kind) => {
                self.change_scene(kind)?;
                Ok(LoopControl::Continue)
            }
            Transition::Quit => {
                log::info!("Quit requested from {:?}", self.current.kind());
                Ok(LoopControl::Exit)
            }
        }
    }
}

fn report_lifecycle_failure(hook: &str, kind: SceneKind, error: &SceneError) {
    if error.is_programming_error() {
        log::error!("{:?}.{}() misuse ignored: {}", kind, hook, error);
    } else {
        log::warn!("{:?}.{}() failed, continuing: {}", kind, hook, error);
    }
}
