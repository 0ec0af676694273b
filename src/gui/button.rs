//! Clickable button with a centred text label

use crate::hit_region::Clickable;
use crate::input_system::GameEvent;
use crate::text::{render_text, TextImage};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Label and border color
    pub text_color: Color,

    pub background_color: Color,

    /// Bitmap font pixel size for the label
    pub text_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            text_color: Color::RGB(255, 255, 255),
            background_color: Color::RGB(0, 0, 0),
            text_scale: 3,
        }
    }
}

/// A rectangle with a label that reacts to presses
///
/// An optional callback fires on every accepted press, before
/// [`Button::on_click`] returns.
///
/// # Example
///
/// ```rust
/// let mut play = Button::new(320, 210, 320, 60, "Play")
///     .with_callback(requests.binder(Transition::Switch(SceneKind::Menu)));
///
/// if play.on_click(&event) {
///     // press landed on the button
/// }
/// ```
pub struct Button {
    rect: Rect,
    label: TextImage,
    style: ButtonStyle,
    callback: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(x: i32, y: i32, width: u32, height: u32, text: &str) -> Self {
        Self::with_style(x, y, width, height, text, ButtonStyle::default())
    }

    pub fn with_style(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        text: &str,
        style: ButtonStyle,
    ) -> Self {
        Button {
            rect: Rect::new(x, y, width, height),
            label: render_text(text, style.text_scale, style.text_color),
            style,
            callback: None,
        }
    }

    pub fn with_callback(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// True when `event` is a press inside the button
    pub fn on_click(&mut self, event: &GameEvent) -> bool {
        let hit = match event.press_point() {
            Some((x, y)) => self.hit_test(x, y),
            None => false,
        };

        if hit {
            if let Some(callback) = self.callback.as_mut() {
                callback();
            }
        }
        hit
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(self.rect)?;

        // Two-pixel border
        canvas.set_draw_color(self.style.text_color);
        canvas.draw_rect(self.rect)?;
        canvas.draw_rect(Rect::new(
            self.rect.x() + 1,
            self.rect.y() + 1,
            self.rect.width().saturating_sub(2),
            self.rect.height().saturating_sub(2),
        ))?;

        let center = self.rect.center();
        self.label.draw_centered(canvas, center.x(), center.y())
    }
}

impl Clickable for Button {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Keycode;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_press_inside_fires_callback() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let mut button = Button::new(10, 10, 100, 40, "Play").with_callback(move || {
            counter.set(counter.get() + 1);
        });

        assert!(button.on_click(&GameEvent::Press { x: 50, y: 30 }));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_press_outside_does_not_fire() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let mut button = Button::new(10, 10, 100, 40, "Play").with_callback(move || {
            counter.set(counter.get() + 1);
        });

        // Right edge is outside
        assert!(!button.on_click(&GameEvent::Press { x: 110, y: 30 }));
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_key_events_are_not_clicks() {
        let mut button = Button::new(0, 0, 100, 40, "Quit");
        assert!(!button.on_click(&GameEvent::KeyDown(Keycode::Return)));
    }

    #[test]
    fn test_button_without_callback_still_reports_hit() {
        let mut button = Button::new(0, 0, 100, 40, "Credits");
        assert!(button.on_click(&GameEvent::Press { x: 0, y: 0 }));
        assert_eq!(button.text(), "Credits");
    }
}
