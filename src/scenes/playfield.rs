//! The play field: find the target before the timer runs out
//!
//! A round starts at `round.duration_secs`. Every frame drains `dt` from the
//! timer; bonuses add time, decoys take it away, and clicking the target ends
//! the round as a win on the following update.

use super::{FieldLayout, Lifecycle, SceneBehavior, SceneEnv, SceneError, SceneKind, Transition};
use crate::assets::{AssetRegistry, SoundCue, SpriteSizes};
use crate::audio::SoundPlayer;
use crate::config::{GameConfig, RoundConfig, SwarmConfig};
use crate::entity::{ClickOutcome, Entity};
use crate::error::GameError;
use crate::gui::{Label, LabelStyle, ProgressBar};
use crate::hit_region::first_hit;
use crate::input_system::GameEvent;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const MSG_TARGET: &str = "WELL DONE, U FOUND BALDO";
const MSG_SMALL_BONUS: &str = "+10 seconds";
const MSG_LARGE_BONUS: &str = "+15 seconds";
const MSG_DECOY: &str = "One less Waldo";
const MSG_MISS: &str = "The aim is to find Baldo, Not Waldo";
const MSG_START: &str = "Find Baldo!";

/// Anything below this many seconds counts as an expired timer
const TIMER_EPSILON: f64 = 1e-4;

pub struct PlayField {
    lifecycle: Lifecycle,
    layout: FieldLayout,
    round: RoundConfig,
    swarm: SwarmConfig,
    entities: Vec<Entity>,
    /// Seconds left in the round, never negative
    remaining: f64,
    won: bool,
    cue_played: bool,
    timer_bar: ProgressBar,
    timer_label: Label,
    status_label: Label,
}

impl PlayField {
    /// Creates an empty field; entities are generated in `start`
    pub fn new(layout: FieldLayout, config: &GameConfig) -> Self {
        let round = config.round.clone();
        let timer_bar = ProgressBar::new(10, 10, 200, 20, round.duration_secs);
        let bar_rect = timer_bar.rect();

        let timer_label = Label::new(
            bar_rect.x() + bar_rect.width() as i32 + 5,
            bar_rect.y(),
            &timer_text(round.duration_secs as f64),
            LabelStyle {
                text_color: Color::RGB(255, 255, 255),
                background_color: Color::RGB(0, 0, 0),
                text_scale: 2,
            },
        )
        .with_height(bar_rect.height());

        let status_label = Label::new(10, config.window.height as i32 - 30, MSG_START, LabelStyle::default())
            .with_height(20);

        PlayField {
            lifecycle: Lifecycle::new(),
            layout,
            remaining: round.duration_secs as f64,
            round,
            swarm: config.swarm.clone(),
            entities: Vec::new(),
            won: false,
            cue_played: false,
            timer_bar,
            timer_label,
            status_label,
        }
    }

    #[cfg(test)]
    pub fn remaining(&self) -> f32 {
        self.remaining as f32
    }

    #[cfg(test)]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Entities in hit-test order
    #[cfg(test)]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Latest status message
    #[cfg(test)]
    pub fn message(&self) -> &str {
        self.status_label.text()
    }

    /// Replaces the field's entities, keeping their order
    #[cfg(test)]
    pub fn set_entities(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
    }

    /// Resolves a press at `(x, y)` and applies its effect to the round.
    ///
    /// The first entity in insertion order that contains the point wins. Once
    /// the target has been found further presses are ignored.
    pub fn click(&mut self, x: i32, y: i32) -> ClickOutcome {
        if self.won {
            return ClickOutcome::None;
        }

        let hit = first_hit(&self.entities, x, y);
        let outcome = match hit {
            Some(index) => self.entities[index].classify_click(&GameEvent::Press { x, y }),
            None => ClickOutcome::None,
        };

        match outcome {
            ClickOutcome::Target => {
                self.won = true;
                self.remaining = 0.0;
                self.set_message(MSG_TARGET);
            }
            ClickOutcome::SmallBonus => {
                self.remaining += self.round.small_bonus_secs as f64;
                self.set_message(MSG_SMALL_BONUS);
            }
            ClickOutcome::LargeBonus => {
                self.remaining += self.round.large_bonus_secs as f64;
                self.set_message(MSG_LARGE_BONUS);
            }
            ClickOutcome::Decoy => {
                self.remaining = (self.remaining - self.round.decoy_penalty_secs as f64).max(0.0);
                self.set_message(MSG_DECOY);
            }
            ClickOutcome::None => self.set_message(MSG_MISS),
        }

        if let (Some(index), ClickOutcome::SmallBonus | ClickOutcome::LargeBonus | ClickOutcome::Decoy) =
            (hit, outcome)
        {
            self.entities.remove(index);
        }

        log::debug!("Press at ({}, {}): {:?}, {:.1}s left", x, y, outcome, self.remaining);
        outcome
    }

    fn set_message(&mut self, text: &str) {
        self.status_label.set_text(text);
    }

    fn reset(&mut self) {
        self.remaining = self.round.duration_secs as f64;
        self.won = false;
        self.cue_played = false;
        self.entities.clear();
        self.set_message(MSG_START);
        self.refresh_timer();
    }

    fn refresh_timer(&mut self) {
        self.timer_bar.set_value(self.remaining as f32);
        self.timer_label.set_text(&timer_text(self.remaining));
    }

    fn populate(&self, sizes: &SpriteSizes, rng: &mut impl Rng) -> Result<Vec<Entity>, GameError> {
        let scale = self.round.entity_scale;
        match self.layout {
            FieldLayout::Basic => Ok(vec![
                Entity::target(100, 100, scale, sizes)?,
                Entity::small_bonus(200, 200, scale, sizes)?,
                Entity::large_bonus(300, 300, scale, sizes)?,
            ]),
            FieldLayout::Swarm => {
                let swarm = &self.swarm;
                let decoys = rng.gen_range(swarm.min_decoys..=swarm.max_decoys);
                let total = decoys
                    .saturating_add(swarm.small_bonus_count)
                    .saturating_add(2);
                let mut entities = Vec::with_capacity(total as usize);

                for _ in 0..decoys {
                    let (x, y) = random_position(swarm, rng);
                    entities.push(Entity::decoy(x, y, scale, sizes, rng)?);
                }
                for _ in 0..swarm.small_bonus_count {
                    let (x, y) = random_position(swarm, rng);
                    entities.push(Entity::small_bonus(x, y, scale, sizes)?);
                }
                let (x, y) = random_position(swarm, rng);
                entities.push(Entity::large_bonus(x, y, scale, sizes)?);
                let (x, y) = random_position(swarm, rng);
                entities.push(Entity::target(x, y, scale, sizes)?);

                Ok(entities)
            }
        }
    }

    /// True when the interval swept this frame touches the cue band
    fn crosses_cue_band(&self, previous: f64) -> bool {
        self.remaining <= self.round.cue_band_high as f64
            && previous >= self.round.cue_band_low as f64
    }
}

fn random_position(swarm: &SwarmConfig, rng: &mut impl Rng) -> (i32, i32) {
    (
        rng.gen_range(swarm.min_x..=swarm.max_x),
        rng.gen_range(swarm.min_y..=swarm.max_y),
    )
}

fn timer_text(remaining: f64) -> String {
    (remaining as i32).to_string()
}

impl SceneBehavior for PlayField {
    fn kind(&self) -> SceneKind {
        SceneKind::PlayField(self.layout)
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    /// Resets the round and generates a fresh set of entities.
    ///
    /// On a population failure the field stays running but empty.
    fn start(&mut self, env: &mut SceneEnv) -> Result<(), SceneError> {
        let kind = self.kind();
        self.lifecycle.start(kind)?;
        self.reset();

        let entities = self
            .populate(&env.sizes, &mut env.rng)
            .map_err(SceneError::Populate)?;
        log::info!("{:?} field populated with {} entities", self.layout, entities.len());
        self.entities = entities;
        Ok(())
    }

    fn handle_event(&mut self, event: &GameEvent) -> Transition {
        if let Some((x, y)) = event.press_point() {
            self.click(x, y);
        }
        Transition::Stay
    }

    fn update(&mut self, dt: f32, audio: &mut dyn SoundPlayer) -> Transition {
        let previous = self.remaining;
        self.remaining = (self.remaining - dt as f64).max(0.0);
        if self.remaining < TIMER_EPSILON {
            self.remaining = 0.0;
        }

        if !self.cue_played && self.crosses_cue_band(previous) {
            self.cue_played = true;
            audio.play(SoundCue::Countdown);
        }

        if self.remaining <= 0.0 {
            return if self.won {
                audio.play(SoundCue::Win);
                Transition::Switch(SceneKind::Win)
            } else {
                log::info!("Round lost on {:?} field", self.layout);
                audio.play(SoundCue::Fail);
                Transition::Switch(SceneKind::Fail)
            };
        }

        self.refresh_timer();
        Transition::Stay
    }

    fn draw(&self, canvas: &mut Canvas<Window>, assets: &AssetRegistry<'_>) -> Result<(), String> {
        let background = match self.layout {
            FieldLayout::Basic => Color::RGB(10, 80, 40),
            FieldLayout::Swarm => Color::RGB(128, 64, 0),
        };
        canvas.set_draw_color(background);
        canvas.clear();

        for entity in &self.entities {
            entity.draw(canvas, assets)?;
        }

        self.timer_bar.draw(canvas)?;
        self.timer_label.draw(canvas)?;
        self.status_label.draw(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingPlayer;
    use crate::entity::EntityKind;
    use crate::scenes::test_support::test_env;

    fn started(layout: FieldLayout) -> PlayField {
        let mut env = test_env();
        let mut field = PlayField::new(layout, &env.config);
        field.start(&mut env).unwrap();
        field
    }

    fn started_with(config: GameConfig) -> PlayField {
        let mut env = test_env();
        env.config = config;
        let mut field = PlayField::new(FieldLayout::Basic, &env.config);
        field.start(&mut env).unwrap();
        field
    }

    #[test]
    fn test_timer_drains_and_floors_at_zero() {
        let mut field = started(FieldLayout::Basic);
        let mut audio = RecordingPlayer::default();

        for n in 1..=59 {
            assert_eq!(field.update(0.5, &mut audio), Transition::Stay);
            let expected = (30.0 - n as f32 * 0.5).max(0.0);
            assert!((field.remaining() - expected).abs() < 1e-4);
        }

        assert_eq!(field.update(0.5, &mut audio), Transition::Switch(SceneKind::Fail));
        assert_eq!(field.remaining(), 0.0);
    }

    #[test]
    fn test_sixty_hz_round_lasts_exactly_its_duration() {
        let mut field = started(FieldLayout::Basic);
        let mut audio = RecordingPlayer::default();
        let dt = 1.0 / 60.0;

        let mut frames = 0;
        loop {
            frames += 1;
            if field.update(dt, &mut audio) != Transition::Stay {
                break;
            }
            assert!(frames < 2000);
        }

        assert_eq!(frames, 1800);
        assert_eq!(audio.played, vec![SoundCue::Fail]);
    }

    #[test]
    fn test_timer_widgets_follow_remaining() {
        let mut field = started(FieldLayout::Basic);
        let mut audio = RecordingPlayer::default();

        field.update(2.5, &mut audio);

        assert_eq!(field.timer_bar.current_value(), 27.5);
        assert_eq!(field.timer_label.text(), "27");
    }

    #[test]
    fn test_target_forces_zero_and_win() {
        let mut field = started(FieldLayout::Basic);
        let mut audio = RecordingPlayer::default();

        // Basic target at (100, 100), 64x64
        assert_eq!(field.click(120, 120), ClickOutcome::Target);
        assert_eq!(field.remaining(), 0.0);
        assert!(field.has_won());
        assert_eq!(field.message(), "WELL DONE, U FOUND BALDO");

        assert_eq!(field.update(1.0 / 60.0, &mut audio), Transition::Switch(SceneKind::Win));
        assert_eq!(audio.played, vec![SoundCue::Win]);
    }

    #[test]
    fn test_end_to_end_target_and_miss() {
        let mut env = test_env();
        let mut field = PlayField::new(FieldLayout::Basic, &env.config);
        field.start(&mut env).unwrap();
        let target = Entity::target(300, 300, 2, &env.sizes).unwrap();
        field.set_entities(vec![target]);
        let mut audio = RecordingPlayer::default();

        let before = field.remaining();
        assert_eq!(field.click(0, 0), ClickOutcome::None);
        assert_eq!(field.remaining(), before);
        assert_eq!(field.message(), "The aim is to find Baldo, Not Waldo");
        assert_eq!(field.entities().len(), 1);

        assert_eq!(field.click(332, 332), ClickOutcome::Target);
        assert_eq!(field.update(0.016, &mut audio), Transition::Switch(SceneKind::Win));
    }

    #[test]
    fn test_presses_after_win_are_ignored() {
        let mut field = started(FieldLayout::Basic);
        field.click(100, 100);

        // Small bonus at (200, 200)
        assert_eq!(field.click(210, 210), ClickOutcome::None);
        assert_eq!(field.remaining(), 0.0);
        assert_eq!(field.entities().len(), 3);
    }

    #[test]
    fn test_small_bonus_adds_time_and_disappears() {
        let mut env = test_env();
        let mut field = PlayField::new(FieldLayout::Basic, &env.config);
        field.start(&mut env).unwrap();
        field.set_entities(vec![Entity::small_bonus(0, 0, 2, &env.sizes).unwrap()]);
        field.remaining = 5.0;

        assert_eq!(field.click(10, 10), ClickOutcome::SmallBonus);
        assert_eq!(field.remaining(), 15.0);
        assert!(field.entities().is_empty());
        assert_eq!(field.message(), "+10 seconds");

        assert_eq!(field.click(10, 10), ClickOutcome::None);
        assert_eq!(field.remaining(), 15.0);
    }

    #[test]
    fn test_large_bonus_adds_fifteen() {
        let mut field = started(FieldLayout::Basic);
        assert_eq!(field.click(300, 300), ClickOutcome::LargeBonus);
        assert_eq!(field.remaining(), 45.0);
        assert_eq!(field.message(), "+15 seconds");
        assert_eq!(field.entities().len(), 2);
    }

    #[test]
    fn test_decoy_penalty_floors_at_zero() {
        let mut env = test_env();
        let mut field = PlayField::new(FieldLayout::Basic, &env.config);
        field.start(&mut env).unwrap();
        let decoy = Entity::decoy(0, 0, 2, &env.sizes, &mut env.rng).unwrap();
        field.set_entities(vec![decoy]);
        field.remaining = 3.0;
        let mut audio = RecordingPlayer::default();

        assert_eq!(field.click(1, 1), ClickOutcome::Decoy);
        assert_eq!(field.remaining(), 0.0);
        assert_eq!(field.message(), "One less Waldo");
        assert!(field.entities().is_empty());

        assert_eq!(field.update(0.016, &mut audio), Transition::Switch(SceneKind::Fail));
        assert_eq!(audio.played, vec![SoundCue::Fail]);
    }

    #[test]
    fn test_overlap_resolves_to_first_inserted() {
        let mut env = test_env();
        let mut field = PlayField::new(FieldLayout::Basic, &env.config);
        field.start(&mut env).unwrap();
        let decoy = Entity::decoy(0, 0, 2, &env.sizes, &mut env.rng).unwrap();
        let target = Entity::target(32, 32, 2, &env.sizes).unwrap();
        field.set_entities(vec![decoy, target]);

        assert_eq!(field.click(40, 40), ClickOutcome::Decoy);
        assert!(!field.has_won());
        // The decoy is gone, so the same point now reaches the target
        assert_eq!(field.click(40, 40), ClickOutcome::Target);
    }

    #[test]
    fn test_swarm_population() {
        let field = started(FieldLayout::Swarm);
        let swarm = SwarmConfig::default();
        let entities = field.entities();

        let count = |kind: EntityKind| entities.iter().filter(|e| e.kind() == kind).count();
        let decoys = count(EntityKind::Decoy);
        assert!((120..=1800).contains(&decoys));
        assert_eq!(count(EntityKind::SmallBonus), 5);
        assert_eq!(count(EntityKind::LargeBonus), 1);
        assert_eq!(count(EntityKind::Target), 1);

        assert_eq!(entities.last().map(|e| e.kind()), Some(EntityKind::Target));
        assert_eq!(entities[entities.len() - 2].kind(), EntityKind::LargeBonus);
        assert!(entities[..decoys].iter().all(|e| e.kind() == EntityKind::Decoy));

        for entity in entities {
            let (x, y) = entity.position();
            assert!(swarm.min_x <= x && x <= swarm.max_x);
            assert!(swarm.min_y <= y && y <= swarm.max_y);
        }
    }

    #[test]
    fn test_restart_resets_round() {
        let mut env = test_env();
        let mut field = PlayField::new(FieldLayout::Basic, &env.config);
        field.start(&mut env).unwrap();
        field.click(100, 100);
        field.stop().unwrap();

        field.start(&mut env).unwrap();
        assert!(!field.has_won());
        assert_eq!(field.remaining(), 30.0);
        assert_eq!(field.entities().len(), 3);
    }

    #[test]
    fn test_cue_plays_once_per_round() {
        let mut config = GameConfig::default();
        config.round.duration_secs = 70.0;
        let mut field = started_with(config);
        let mut audio = RecordingPlayer::default();

        for _ in 0..10 {
            field.update(0.5, &mut audio);
        }

        let cues = audio.played.iter().filter(|c| **c == SoundCue::Countdown).count();
        assert_eq!(cues, 1);
    }

    #[test]
    fn test_cue_plays_when_frame_skips_band() {
        let mut config = GameConfig::default();
        config.round.duration_secs = 70.0;
        let mut field = started_with(config);
        let mut audio = RecordingPlayer::default();

        field.update(5.0, &mut audio);

        assert_eq!(audio.played, vec![SoundCue::Countdown]);
    }

    #[test]
    fn test_no_cue_below_band() {
        let mut field = started(FieldLayout::Basic);
        let mut audio = RecordingPlayer::default();

        field.update(1.0, &mut audio);
        assert!(audio.played.is_empty());
    }

    #[test]
    fn test_populate_failure_leaves_field_empty() {
        let mut env = test_env();
        env.sizes = SpriteSizes::new();
        let mut field = PlayField::new(FieldLayout::Swarm, &env.config);

        let err = field.start(&mut env).unwrap_err();
        assert!(matches!(err, SceneError::Populate(_)));
        assert!(field.lifecycle().is_running());
        assert!(field.entities().is_empty());
    }

    #[test]
    fn test_key_presses_do_nothing() {
        let mut field = started(FieldLayout::Basic);
        let before = field.message().to_string();
        let event = GameEvent::KeyDown(sdl2::keyboard::Keycode::Space);

        assert_eq!(field.handle_event(&event), Transition::Stay);
        assert_eq!(field.message(), before);
    }
}
