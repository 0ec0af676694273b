//! Text label with a background box

use crate::text::{render_text, TextImage};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct LabelStyle {
    pub text_color: Color,
    pub background_color: Color,
    pub text_scale: u32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            text_color: Color::RGB(0, 0, 0),
            background_color: Color::RGB(255, 255, 255),
            text_scale: 2,
        }
    }
}

/// A label caches its rendered text and only re-renders when the text changes.
///
/// The box is sized to the text unless a width or height is fixed.
pub struct Label {
    rect: Rect,
    fixed_width: Option<u32>,
    fixed_height: Option<u32>,
    rendered: Rc<TextImage>,
    style: LabelStyle,
}

impl Label {
    pub fn new(x: i32, y: i32, text: &str, style: LabelStyle) -> Self {
        let rendered = Rc::new(render_text(text, style.text_scale, style.text_color));
        let mut label = Label {
            rect: Rect::new(x, y, 1, 1),
            fixed_width: None,
            fixed_height: None,
            rendered,
            style,
        };
        label.resize();
        label
    }

    #[cfg(test)]
    pub fn with_width(mut self, width: u32) -> Self {
        self.fixed_width = Some(width);
        self.resize();
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.fixed_height = Some(height);
        self.resize();
        self
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        self.rendered.text()
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The cached rendered text
    #[cfg(test)]
    pub fn rendered(&self) -> &Rc<TextImage> {
        &self.rendered
    }

    /// Replaces the text; identical text keeps the cached render.
    pub fn set_text(&mut self, text: &str) {
        if text == self.rendered.text() {
            return;
        }
        self.rendered = Rc::new(render_text(text, self.style.text_scale, self.style.text_color));
        self.resize();
    }

    fn resize(&mut self) {
        let width = self.fixed_width.unwrap_or(self.rendered.width());
        let height = self.fixed_height.unwrap_or(self.rendered.height());
        self.rect.set_width(width.max(1));
        self.rect.set_height(height.max(1));
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(self.rect)?;

        let center = self.rect.center();
        self.rendered.draw_centered(canvas, center.x(), center.y())
    }
}
