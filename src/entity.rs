//! Clickable field entities
//!
//! An entity is a sprite at a fixed position with a hit region and a fixed
//! [`EntityKind`]. Decoys also carry a cosmetic mask overlay.

use crate::assets::{AssetRegistry, DecoyBody, DecoyMask, Sprite, SpriteSizes};
use crate::error::GameError;
use crate::hit_region::Clickable;
use crate::input_system::GameEvent;
use rand::Rng;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Baldo: clicking him wins the round
    Target,
    /// Waldo lookalike, costs time when clicked
    Decoy,
    /// Jam jar
    SmallBonus,
    /// Marmalade jar
    LargeBonus,
}

/// Result of pressing somewhere on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Target,
    Decoy,
    SmallBonus,
    LargeBonus,
    None,
}

impl From<EntityKind> for ClickOutcome {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Target => ClickOutcome::Target,
            EntityKind::Decoy => ClickOutcome::Decoy,
            EntityKind::SmallBonus => ClickOutcome::SmallBonus,
            EntityKind::LargeBonus => ClickOutcome::LargeBonus,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Entity {
    kind: EntityKind,
    base: Sprite,
    overlay: Option<Sprite>,
    rect: Rect,
    overlay_rect: Option<Rect>,
}

impl Entity {
    /// Builds an entity at `(x, y)` (top-left).
    ///
    /// The hit region is the base sprite's size times `scale`. Fails only
    /// when a sprite's size is unknown.
    pub fn new(
        x: i32,
        y: i32,
        kind: EntityKind,
        base: Sprite,
        overlay: Option<Sprite>,
        scale: u32,
        sizes: &SpriteSizes,
    ) -> Result<Self, GameError> {
        let scale = scale.max(1);
        let (w, h) = sizes.get(base)?;
        let overlay_rect = match overlay {
            Some(sprite) => {
                let (ow, oh) = sizes.get(sprite)?;
                Some(Rect::new(x, y, ow * scale, oh * scale))
            }
            None => None,
        };

        Ok(Entity {
            kind,
            base,
            overlay,
            rect: Rect::new(x, y, w * scale, h * scale),
            overlay_rect,
        })
    }

    pub fn target(x: i32, y: i32, scale: u32, sizes: &SpriteSizes) -> Result<Self, GameError> {
        Self::new(x, y, EntityKind::Target, Sprite::Baldo, None, scale, sizes)
    }

    pub fn small_bonus(x: i32, y: i32, scale: u32, sizes: &SpriteSizes) -> Result<Self, GameError> {
        Self::new(x, y, EntityKind::SmallBonus, Sprite::Jam, None, scale, sizes)
    }

    pub fn large_bonus(x: i32, y: i32, scale: u32, sizes: &SpriteSizes) -> Result<Self, GameError> {
        Self::new(x, y, EntityKind::LargeBonus, Sprite::Marmalade, None, scale, sizes)
    }

    /// Decoy with a randomly chosen body and mask
    pub fn decoy(
        x: i32,
        y: i32,
        scale: u32,
        sizes: &SpriteSizes,
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        let body = DecoyBody::random(rng);
        let mask = DecoyMask::random(rng);
        Self::new(
            x,
            y,
            EntityKind::Decoy,
            Sprite::Body(body),
            Some(Sprite::Mask(mask)),
            scale,
            sizes,
        )
    }

    #[cfg(test)]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    #[cfg(test)]
    pub fn base(&self) -> Sprite {
        self.base
    }

    #[cfg(test)]
    pub fn overlay(&self) -> Option<Sprite> {
        self.overlay
    }

    #[cfg(test)]
    pub fn position(&self) -> (i32, i32) {
        (self.rect.x(), self.rect.y())
    }

    /// The entity's kind if `event` is a press inside its region
    pub fn classify_click(&self, event: &GameEvent) -> ClickOutcome {
        match event.press_point() {
            Some((x, y)) if self.hit_test(x, y) => self.kind.into(),
            _ => ClickOutcome::None,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, assets: &AssetRegistry) -> Result<(), String> {
        canvas.copy(assets.texture(self.base)?, None, self.rect)?;
        if let (Some(sprite), Some(rect)) = (self.overlay, self.overlay_rect) {
            canvas.copy(assets.texture(sprite)?, None, rect)?;
        }
        Ok(())
    }
}

impl Clickable for Entity {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
