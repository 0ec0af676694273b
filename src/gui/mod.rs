//! Screen-Space GUI Widgets
//!
//! Widgets used by the menu and result screens, plus the timer HUD on the
//! play field. All of them render procedurally with SDL2 rectangles and the
//! bitmap font, at fixed logical-screen positions.
//!
//! # Available Components
//!
//! - [`Button`] - Labelled rectangle with an optional click callback
//! - [`Label`] - Cached text on a background box
//! - [`ProgressBar`] - Clamped fill bar (round timer)

pub mod button;
pub mod label;
pub mod progress_bar;

pub use button::Button;
pub use label::{Label, LabelStyle};
pub use progress_bar::ProgressBar;
