use std::fmt;

use crate::assets::Sprite;

/// Errors that stop the game from building a scene or starting at all
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// An image or sound file could not be loaded
    AssetLoad { path: String, reason: String },

    /// A sprite was requested that the registry never loaded
    MissingSprite(Sprite),

    /// The configuration file exists but could not be parsed
    Config(String),

    /// SDL2 subsystem failure (window, canvas, event pump)
    Sdl(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::AssetLoad { path, reason } => {
                write!(f, "Failed to load {}: {}", path, reason)
            }
            GameError::MissingSprite(sprite) => {
                write!(f, "Sprite not loaded: {}", sprite.file_name())
            }
            GameError::Config(msg) => {
                write!(f, "Invalid config: {}", msg)
            }
            GameError::Sdl(msg) => {
                write!(f, "SDL error: {}", msg)
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}

impl From<String> for GameError {
    fn from(msg: String) -> Self {
        GameError::Sdl(msg)
    }
}
