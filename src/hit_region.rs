/// Hit testing for anything the player can click
///
/// Entities on the play field and GUI widgets both own an axis-aligned
/// rectangle. A point is inside when `x0 <= px < x0 + w` and
/// `y0 <= py < y0 + h`, so the right and bottom edges are excluded.
use sdl2::rect::Rect;

/// Trait for things with a rectangular click region
///
/// # Example
///
/// ```rust
/// impl Clickable for Button {
///     fn bounds(&self) -> Rect {
///         self.rect
///     }
/// }
///
/// if button.hit_test(x, y) { /* ... */ }
/// ```
pub trait Clickable {
    /// Returns the rectangle used for click containment, in screen pixels
    fn bounds(&self) -> Rect;

    fn hit_test(&self, x: i32, y: i32) -> bool {
        contains_point(&self.bounds(), x, y)
    }
}

/// Half-open rectangle containment
pub fn contains_point(rect: &Rect, x: i32, y: i32) -> bool {
    let right = rect.x() + rect.width() as i32;
    let bottom = rect.y() + rect.height() as i32;

    rect.x() <= x && x < right && rect.y() <= y && y < bottom
}

/// Index of the first item whose region contains the point
///
/// Items are scanned in slice order and the scan stops at the first match,
/// so when regions overlap the earliest item wins.
pub fn first_hit<T: Clickable>(items: &[T], x: i32, y: i32) -> Option<usize> {
    items.iter().position(|item| item.hit_test(x, y))
}
