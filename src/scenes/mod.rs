//! Scenes and the scene state machine
//!
//! A scene is one full screen of the game. The [`SceneManager`] owns exactly
//! one [`Scene`] at a time; scenes never touch each other, they only return a
//! [`Transition`] request from `handle_event` / `update` and the manager
//! carries it out.
//!
//! # Flow
//!
//! ```text
//! Menu --Play--> PlayField(Swarm) --target clicked--> Win  --Play Again--> PlayField(Swarm)
//!   |  --Return-> PlayField(Basic) --timer expired--> Fail --Try Again---> PlayField(Swarm)
//!   |--How to Play--> Instructions --any input--> Menu      Win/Fail --Main Menu--> Menu
//!   |--Credits------> Credits      --any input--> Menu
//!   '--Quit--> (loop exits)
//! ```

pub mod info;
pub mod manager;
pub mod menu;
pub mod playfield;
pub mod result;

pub use info::{CreditsScene, InstructionsScene};
pub use manager::{LoopControl, SceneManager};
pub use menu::MenuScene;
pub use playfield::PlayField;
pub use result::ResultScreen;

use crate::assets::{AssetRegistry, SpriteSizes};
use crate::audio::SoundPlayer;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::input_system::GameEvent;
use rand::rngs::StdRng;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Entity generation policy for a play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLayout {
    /// Three entities at fixed positions
    Basic,
    /// Hundreds of random decoys with the target and jars mixed in
    Swarm,
}

/// Which scene to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Menu,
    Instructions,
    Credits,
    PlayField(FieldLayout),
    Win,
    Fail,
}

/// What a scene asks the manager to do after an event or update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Switch(SceneKind),
    /// Leave the game loop
    Quit,
}

/// Failures inside `start` / `stop`
///
/// The manager logs these and carries on; they never abort a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// `start` on a scene that is already running
    AlreadyRunning(SceneKind),
    /// `stop` on a scene that is not running
    NotRunning(SceneKind),
    /// The play field could not be populated
    Populate(GameError),
}

impl SceneError {
    /// True for lifecycle misuse, as opposed to a failure of the scene's own work
    pub fn is_programming_error(&self) -> bool {
        matches!(self, SceneError::AlreadyRunning(_) | SceneError::NotRunning(_))
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SceneError::AlreadyRunning(kind) => write!(f, "{:?} started twice", kind),
            SceneError::NotRunning(kind) => write!(f, "{:?} stopped while not running", kind),
            SceneError::Populate(e) => write!(f, "Could not populate field: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Running,
    Stopped,
}

/// Start/stop bookkeeping shared by every scene
#[derive(Debug, Clone)]
pub struct Lifecycle {
    state: LifecycleState,
    /// Number of successful stops
    #[cfg(test)]
    stop_count: u32,
}

impl Lifecycle {
    pub fn new() -> Self {
        Lifecycle {
            state: LifecycleState::Created,
            #[cfg(test)]
            stop_count: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.state == LifecycleState::Running
    }

    #[cfg(test)]
    pub fn stop_count(&self) -> u32 {
        self.stop_count
    }

    pub fn start(&mut self, kind: SceneKind) -> Result<(), SceneError> {
        if self.state == LifecycleState::Running {
            return Err(SceneError::AlreadyRunning(kind));
        }
        self.state = LifecycleState::Running;
        Ok(())
    }

    pub fn stop(&mut self, kind: SceneKind) -> Result<(), SceneError> {
        if self.state != LifecycleState::Running {
            return Err(SceneError::NotRunning(kind));
        }
        self.state = LifecycleState::Stopped;
        #[cfg(test)]
        {
            self.stop_count += 1;
        }
        Ok(())
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything scenes need from outside to build and start themselves
pub struct SceneEnv {
    pub config: GameConfig,
    pub sizes: SpriteSizes,
    pub rng: StdRng,
}

impl SceneEnv {
    pub fn new(config: GameConfig, sizes: SpriteSizes, rng: StdRng) -> Self {
        SceneEnv { config, sizes, rng }
    }
}

/// Slot a button callback writes its transition into
///
/// Buttons fire callbacks without knowing about scenes; the owning scene
/// takes the request out after dispatching the event.
#[derive(Clone, Default)]
pub struct TransitionRequest(Rc<Cell<Option<Transition>>>);

impl TransitionRequest {
    pub fn new() -> Self {
        TransitionRequest(Rc::new(Cell::new(None)))
    }

    /// Callback that requests `transition` when fired
    pub fn binder(&self, transition: Transition) -> impl FnMut() + use<> {
        let slot = Rc::clone(&self.0);
        move || slot.set(Some(transition))
    }

    /// Removes the pending request, `Stay` if none
    pub fn take(&self) -> Transition {
        self.0.take().unwrap_or(Transition::Stay)
    }
}

/// Behaviour every scene implements
///
/// Only `kind`, the lifecycle accessors and `draw` are required; the rest
/// default to doing nothing.
pub trait SceneBehavior {
    fn kind(&self) -> SceneKind;

    fn lifecycle(&self) -> &Lifecycle;

    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    /// Called once when the scene becomes current
    fn start(&mut self, _env: &mut SceneEnv) -> Result<(), SceneError> {
        let kind = self.kind();
        self.lifecycle_mut().start(kind)
    }

    /// Called once when the scene is replaced or the game exits
    fn stop(&mut self) -> Result<(), SceneError> {
        let kind = self.kind();
        self.lifecycle_mut().stop(kind)
    }

    fn handle_event(&mut self, _event: &GameEvent) -> Transition {
        Transition::Stay
    }

    /// `dt` is seconds since the previous frame
    fn update(&mut self, _dt: f32, _audio: &mut dyn SoundPlayer) -> Transition {
        Transition::Stay
    }

    fn draw(&self, canvas: &mut Canvas<Window>, assets: &AssetRegistry<'_>) -> Result<(), String>;
}

/// The single live screen, as a closed set of variants
pub enum Scene {
    Menu(MenuScene),
    Instructions(InstructionsScene),
    Credits(CreditsScene),
    PlayField(PlayField),
    Win(ResultScreen),
    Fail(ResultScreen),
}

impl Scene {
    /// Constructs (but does not start) the scene for `kind`.
    ///
    /// Construction failures are asset problems and are fatal.
    pub fn build(kind: SceneKind, env: &mut SceneEnv) -> Result<Scene, GameError> {
        let scene = match kind {
            SceneKind::Menu => Scene::Menu(MenuScene::new(&env.config)),
            SceneKind::Instructions => {
                Scene::Instructions(InstructionsScene::new(&env.config, &env.sizes)?)
            }
            SceneKind::Credits => Scene::Credits(CreditsScene::new(&env.config)),
            SceneKind::PlayField(layout) => Scene::PlayField(PlayField::new(layout, &env.config)),
            SceneKind::Win => Scene::Win(ResultScreen::won(&env.config)),
            SceneKind::Fail => Scene::Fail(ResultScreen::failed(&env.config, &mut env.rng)),
        };
        Ok(scene)
    }

    pub fn behavior(&self) -> &dyn SceneBehavior {
        match self {
            Scene::Menu(scene) => scene,
            Scene::Instructions(scene) => scene,
            Scene::Credits(scene) => scene,
            Scene::PlayField(scene) => scene,
            Scene::Win(scene) | Scene::Fail(scene) => scene,
        }
    }

    pub fn behavior_mut(&mut self) -> &mut dyn SceneBehavior {
        match self {
            Scene::Menu(scene) => scene,
            Scene::Instructions(scene) => scene,
            Scene::Credits(scene) => scene,
            Scene::PlayField(scene) => scene,
            Scene::Win(scene) | Scene::Fail(scene) => scene,
        }
    }

    pub fn kind(&self) -> SceneKind {
        self.behavior().kind()
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.behavior().lifecycle().is_running()
    }

    #[cfg(test)]
    pub fn lifecycle(&self) -> &Lifecycle {
        self.behavior().lifecycle()
    }

    pub fn start(&mut self, env: &mut SceneEnv) -> Result<(), SceneError> {
        self.behavior_mut().start(env)
    }

    pub fn stop(&mut self) -> Result<(), SceneError> {
        self.behavior_mut().stop()
    }

    pub fn handle_event(&mut self, event: &GameEvent) -> Transition {
        self.behavior_mut().handle_event(event)
    }

    pub fn update(&mut self, dt: f32, audio: &mut dyn SoundPlayer) -> Transition {
        self.behavior_mut().update(dt, audio)
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, assets: &AssetRegistry<'_>) -> Result<(), String> {
        self.behavior().draw(canvas, assets)
    }
}
