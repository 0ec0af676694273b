//! Horizontal progress bar
//!
//! Used as the round timer: the fill shrinks as the remaining time drops.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for progress bar appearance
#[derive(Debug, Clone)]
pub struct ProgressBarStyle {
    pub fill_color: Color,

    /// Shown where the bar is empty
    pub background_color: Color,

    pub border_color: Color,
}

impl Default for ProgressBarStyle {
    fn default() -> Self {
        ProgressBarStyle {
            fill_color: Color::RGB(0, 255, 0),
            background_color: Color::RGB(100, 100, 100),
            border_color: Color::RGB(10, 10, 10),
        }
    }
}

pub struct ProgressBar {
    rect: Rect,
    max_value: f32,
    current_value: f32,
    style: ProgressBarStyle,
}

impl ProgressBar {
    /// Creates a full bar
    pub fn new(x: i32, y: i32, width: u32, height: u32, max_value: f32) -> Self {
        ProgressBar {
            rect: Rect::new(x, y, width, height),
            max_value,
            current_value: max_value.max(0.0),
            style: ProgressBarStyle::default(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[cfg(test)]
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    #[cfg(test)]
    pub fn current_value(&self) -> f32 {
        self.current_value
    }

    /// Sets the value, clamped into `[0, max]`
    pub fn set_value(&mut self, value: f32) {
        self.current_value = value.min(self.max_value).max(0.0);
    }

    /// Filled width in pixels; zero when the maximum is not positive
    pub fn fill_width(&self) -> u32 {
        if self.max_value <= 0.0 {
            return 0;
        }
        let ratio = self.current_value / self.max_value;
        (ratio * self.rect.width() as f32).round() as u32
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(self.rect)?;

        let fill = self.fill_width();
        if fill > 0 {
            canvas.set_draw_color(self.style.fill_color);
            canvas.fill_rect(Rect::new(self.rect.x(), self.rect.y(), fill, self.rect.height()))?;
        }

        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(self.rect)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_full() {
        let bar = ProgressBar::new(10, 10, 200, 20, 30.0);
        assert_eq!(bar.current_value(), 30.0);
        assert_eq!(bar.fill_width(), 200);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut bar = ProgressBar::new(10, 10, 200, 20, 30.0);

        bar.set_value(45.0);
        assert_eq!(bar.current_value(), 30.0);

        bar.set_value(-3.0);
        assert_eq!(bar.current_value(), 0.0);
        assert_eq!(bar.fill_width(), 0);
    }

    #[test]
    fn test_set_value_is_idempotent() {
        let mut bar = ProgressBar::new(0, 0, 200, 20, 30.0);
        for value in [-10.0, 0.0, 12.5, 30.0, 99.0] {
            bar.set_value(value);
            let first = bar.current_value();
            bar.set_value(value);
            assert_eq!(bar.current_value(), first);
            assert!(bar.current_value() >= 0.0 && bar.current_value() <= bar.max_value());
        }
    }

    #[test]
    fn test_fill_width_rounds() {
        let mut bar = ProgressBar::new(0, 0, 200, 20, 30.0);
        // 200 * 14.9 / 30 = 99.33
        bar.set_value(14.9);
        assert_eq!(bar.fill_width(), 99);
        // 200 * 14.95 / 30 = 99.67
        bar.set_value(14.95);
        assert_eq!(bar.fill_width(), 100);
    }

    #[test]
    fn test_zero_max_has_no_fill() {
        let mut bar = ProgressBar::new(0, 0, 200, 20, 0.0);
        bar.set_value(5.0);
        assert_eq!(bar.current_value(), 0.0);
        assert_eq!(bar.fill_width(), 0);
    }
}
