//! Bitmap Text Rendering
//!
//! Text is rendered once into a [`TextImage`]: the lit pixels of a 5x7 bitmap
//! font, merged into horizontal runs and stored as rectangles relative to the
//! text's top-left corner. Drawing is then a handful of `fill_rect` calls.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Glyph plus one column of spacing
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Pre-rendered text, ready to be drawn anywhere
#[derive(Debug, Clone, PartialEq)]
pub struct TextImage {
    text: String,
    color: Color,
    runs: Vec<Rect>,
    width: u32,
    height: u32,
}

impl TextImage {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, x: i32, y: i32) -> Result<(), String> {
        canvas.set_draw_color(self.color);
        for run in &self.runs {
            canvas.fill_rect(Rect::new(x + run.x(), y + run.y(), run.width(), run.height()))?;
        }
        Ok(())
    }

    /// Draws the text with its centre at `(cx, cy)`
    pub fn draw_centered(&self, canvas: &mut Canvas<Window>, cx: i32, cy: i32) -> Result<(), String> {
        self.draw(
            canvas,
            cx - self.width as i32 / 2,
            cy - self.height as i32 / 2,
        )
    }
}

/// Renders `text` with the bitmap font.
///
/// `scale` is the size of one font pixel: scale 1 gives 5x7 characters,
/// scale 4 gives 20x28. Lowercase letters render as uppercase.
pub fn render_text(text: &str, scale: u32, color: Color) -> TextImage {
    let scale = scale.max(1);
    let mut runs = Vec::new();
    let char_count = text.chars().count() as u32;

    for (i, c) in text.chars().enumerate() {
        let char_x = (i as u32 * GLYPH_ADVANCE * scale) as i32;
        let pattern = glyph(c);

        for (row, &bits) in pattern.iter().enumerate() {
            let y = (row as u32 * scale) as i32;
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if !is_lit(bits, col) {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_WIDTH && is_lit(bits, col) {
                    col += 1;
                }
                runs.push(Rect::new(
                    char_x + (start * scale) as i32,
                    y,
                    (col - start) * scale,
                    scale,
                ));
            }
        }
    }

    let width = if char_count == 0 {
        0
    } else {
        (char_count * GLYPH_ADVANCE - 1) * scale
    };

    TextImage {
        text: text.to_string(),
        color,
        runs,
        width,
        height: GLYPH_HEIGHT * scale,
    }
}

fn is_lit(bits: u8, col: u32) -> bool {
    (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1
}

/// 5x7 patterns, one byte per row, high bit on the left
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '~' => [0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000],
        '_' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        ' ' => [0b00000; 7],
        _ => [0b11111; 7], // Full block for unknown
    }
}
