//! Static information screens: instructions and credits
//!
//! Both return to the menu on any key or press.

use super::{Lifecycle, SceneBehavior, SceneKind, Transition};
use crate::assets::{AssetRegistry, DecoyBody, Sprite, SpriteSizes};
use crate::config::GameConfig;
use crate::entity::{Entity, EntityKind};
use crate::error::GameError;
use crate::input_system::GameEvent;
use crate::text::{render_text, TextImage};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BACKGROUND: Color = Color::RGB(20, 20, 20);
const TEXT_COLOR: Color = Color::RGB(200, 200, 200);
const TEXT_SCALE: u32 = 2;
const LINE_STEP: i32 = 40;
/// Scale of the two example characters on the instructions screen
const EXAMPLE_SCALE: u32 = 12;
const EXAMPLE_MARGIN: i32 = 30;

const INSTRUCTION_LINES: [&str; 11] = [
    "How to Play",
    "",
    "~~~~~~~~~~~",
    "",
    "",
    "<<< That is Baldo,",
    " you have to find him.",
    "",
    "That is Waldo >>>",
    "He's there to prevent you from finding Baldo",
    "(Click anywhere to continue)",
];

const CREDIT_LINES: [&str; 6] = [
    "Credits",
    "Game Jam Team:",
    "- Dev: Spectral_o6 (Felix Galle)",
    "- Art: Also Spectral_o6",
    " (press any key or click to return ",
    "to the war crime that is this game)",
];

fn is_dismiss(event: &GameEvent) -> bool {
    matches!(event, GameEvent::KeyDown(_) | GameEvent::Press { .. })
}

/// Centred block of text lines
struct TextBlock {
    lines: Vec<TextImage>,
    center_x: i32,
    top: i32,
}

impl TextBlock {
    fn new(lines: &[&str], center_x: i32, top: i32) -> Self {
        TextBlock {
            lines: lines
                .iter()
                .map(|line| render_text(line, TEXT_SCALE, TEXT_COLOR))
                .collect(),
            center_x,
            top,
        }
    }

    fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        for (i, line) in self.lines.iter().enumerate() {
            line.draw_centered(canvas, self.center_x, self.top + i as i32 * LINE_STEP)?;
        }
        Ok(())
    }
}

pub struct InstructionsScene {
    lifecycle: Lifecycle,
    text: TextBlock,
    examples: Vec<Entity>,
}

impl InstructionsScene {
    /// Fails when the example sprites have no known size
    pub fn new(config: &GameConfig, sizes: &SpriteSizes) -> Result<Self, GameError> {
        let width = config.window.width as i32;
        let mid_y = config.window.height as i32 / 2;

        let baldo = Sprite::Baldo;
        let (_, baldo_h) = sizes.get(baldo)?;
        let target = Entity::new(
            EXAMPLE_MARGIN,
            mid_y - (baldo_h * EXAMPLE_SCALE) as i32 / 2,
            EntityKind::Target,
            baldo,
            None,
            EXAMPLE_SCALE,
            sizes,
        )?;

        let waldo = Sprite::Body(DecoyBody::Five);
        let (waldo_w, waldo_h) = sizes.get(waldo)?;
        let decoy = Entity::new(
            width - EXAMPLE_MARGIN - (waldo_w * EXAMPLE_SCALE) as i32,
            mid_y - (waldo_h * EXAMPLE_SCALE) as i32 / 2,
            EntityKind::Decoy,
            waldo,
            None,
            EXAMPLE_SCALE,
            sizes,
        )?;

        Ok(InstructionsScene {
            lifecycle: Lifecycle::new(),
            text: TextBlock::new(&INSTRUCTION_LINES, width / 2, 100),
            examples: vec![target, decoy],
        })
    }

    #[cfg(test)]
    pub fn examples(&self) -> &[Entity] {
        &self.examples
    }
}

impl SceneBehavior for InstructionsScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Instructions
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn handle_event(&mut self, event: &GameEvent) -> Transition {
        if is_dismiss(event) {
            Transition::Switch(SceneKind::Menu)
        } else {
            Transition::Stay
        }
    }

    fn draw(&self, canvas: &mut Canvas<Window>, assets: &AssetRegistry<'_>) -> Result<(), String> {
        canvas.set_draw_color(BACKGROUND);
        canvas.clear();

        self.text.draw(canvas)?;
        for example in &self.examples {
            example.draw(canvas, assets)?;
        }
        Ok(())
    }
}

pub struct CreditsScene {
    lifecycle: Lifecycle,
    text: TextBlock,
}

impl CreditsScene {
    pub fn new(config: &GameConfig) -> Self {
        CreditsScene {
            lifecycle: Lifecycle::new(),
            text: TextBlock::new(&CREDIT_LINES, config.window.width as i32 / 2, 60),
        }
    }
}

impl SceneBehavior for CreditsScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Credits
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn handle_event(&mut self, event: &GameEvent) -> Transition {
        if is_dismiss(event) {
            Transition::Switch(SceneKind::Menu)
        } else {
            Transition::Stay
        }
    }

    fn draw(&self, canvas: &mut Canvas<Window>, _assets: &AssetRegistry<'_>) -> Result<(), String> {
        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        self.text.draw(canvas)
    }
}
