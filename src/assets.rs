//! Typed asset registry
//!
//! Every image and sound the game uses is named by an enum variant, so a
//! sprite that does not exist cannot be asked for. File names are resolved
//! here and nowhere else.

use crate::config::AssetConfig;
use crate::error::GameError;
use rand::Rng;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::Path;

/// Body sprites a decoy can be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoyBody {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl DecoyBody {
    pub const ALL: [DecoyBody; 6] = [
        DecoyBody::One,
        DecoyBody::Two,
        DecoyBody::Three,
        DecoyBody::Four,
        DecoyBody::Five,
        DecoyBody::Six,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Mask overlays drawn on top of a decoy body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoyMask {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl DecoyMask {
    pub const ALL: [DecoyMask; 9] = [
        DecoyMask::One,
        DecoyMask::Two,
        DecoyMask::Three,
        DecoyMask::Four,
        DecoyMask::Five,
        DecoyMask::Six,
        DecoyMask::Seven,
        DecoyMask::Eight,
        DecoyMask::Nine,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Baldo,
    Jam,
    Marmalade,
    Body(DecoyBody),
    Mask(DecoyMask),
}

impl Sprite {
    /// Every sprite the registry loads at startup
    pub fn all() -> Vec<Sprite> {
        let mut sprites = vec![Sprite::Baldo, Sprite::Jam, Sprite::Marmalade];
        sprites.extend(DecoyBody::ALL.iter().map(|b| Sprite::Body(*b)));
        sprites.extend(DecoyMask::ALL.iter().map(|m| Sprite::Mask(*m)));
        sprites
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Sprite::Baldo => "baldo_01.png",
            Sprite::Jam => "jam.png",
            Sprite::Marmalade => "marmelade.png",
            Sprite::Body(body) => match body {
                DecoyBody::One => "base_1.png",
                DecoyBody::Two => "base_2.png",
                DecoyBody::Three => "base_3.png",
                DecoyBody::Four => "base_4.png",
                DecoyBody::Five => "base_5.png",
                DecoyBody::Six => "base_6.png",
            },
            Sprite::Mask(mask) => match mask {
                DecoyMask::One => "mask_1.png",
                DecoyMask::Two => "mask_2.png",
                DecoyMask::Three => "mask_3.png",
                DecoyMask::Four => "mask_4.png",
                DecoyMask::Five => "mask_5.png",
                DecoyMask::Six => "mask_6.png",
                DecoyMask::Seven => "mask_7.png",
                DecoyMask::Eight => "mask_8.png",
                DecoyMask::Nine => "mask_9.png",
            },
        }
    }
}

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Plays once when the timer sweeps through the cue band
    Countdown,
    Win,
    Fail,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Countdown, SoundCue::Win, SoundCue::Fail];

    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::Countdown => "gato.mp3",
            SoundCue::Win => "win.mp3",
            SoundCue::Fail => "bruh.mp3",
        }
    }
}

/// Unscaled pixel size of every loaded sprite
///
/// Entities only need sizes to build their hit regions, so scene logic
/// depends on this table rather than on SDL textures.
#[derive(Debug, Clone, Default)]
pub struct SpriteSizes {
    sizes: HashMap<Sprite, (u32, u32)>,
}

impl SpriteSizes {
    pub fn new() -> Self {
        SpriteSizes {
            sizes: HashMap::new(),
        }
    }

    pub fn insert(&mut self, sprite: Sprite, width: u32, height: u32) {
        self.sizes.insert(sprite, (width, height));
    }

    pub fn get(&self, sprite: Sprite) -> Result<(u32, u32), GameError> {
        self.sizes
            .get(&sprite)
            .copied()
            .ok_or(GameError::MissingSprite(sprite))
    }

    /// Table where every sprite has the same size
    #[cfg(test)]
    pub fn uniform(width: u32, height: u32) -> Self {
        let mut sizes = SpriteSizes::new();
        for sprite in Sprite::all() {
            sizes.insert(sprite, width, height);
        }
        sizes
    }
}

/// Loaded textures for every [`Sprite`]
pub struct AssetRegistry<'a> {
    textures: HashMap<Sprite, Texture<'a>>,
}

impl<'a> AssetRegistry<'a> {
    /// Loads every sprite up front; a missing or corrupt file is fatal.
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        config: &AssetConfig,
    ) -> Result<Self, GameError> {
        let mut textures = HashMap::new();
        for sprite in Sprite::all() {
            let path = Path::new(&config.sprite_dir).join(sprite.file_name());
            let texture = load_texture(texture_creator, &path)?;
            textures.insert(sprite, texture);
        }
        log::info!("Loaded {} sprites from {}", textures.len(), config.sprite_dir);
        Ok(AssetRegistry { textures })
    }

    pub fn texture(&self, sprite: Sprite) -> Result<&Texture<'a>, GameError> {
        self.textures
            .get(&sprite)
            .ok_or(GameError::MissingSprite(sprite))
    }

    pub fn sizes(&self) -> SpriteSizes {
        let mut sizes = SpriteSizes::new();
        for (sprite, texture) in &self.textures {
            let query = texture.query();
            sizes.insert(*sprite, query.width, query.height);
        }
        sizes
    }
}

fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>, GameError> {
    texture_creator
        .load_texture(path)
        .map_err(|e| GameError::AssetLoad {
            path: path.display().to_string(),
            reason: e,
        })
}
