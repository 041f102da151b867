//! Axis-aligned rectangle geometry underpinning every widget.
//!
//! A [`Frame`] stores both corners and the size. The redundancy is kept in
//! sync by [`Frame::set_position`] and [`Frame::set_size`]; the corner
//! fields are never mutated independently, which is why they are private.
//!
//! # Example
//! ```rust,ignore
//! use anvil_gui::Frame;
//! use glam::Vec2;
//!
//! let mut f = Frame::new(10.0, 20.0, 100.0, 30.0);
//! assert!(f.contains(Vec2::new(10.0, 20.0)));
//! f.set_position(0.0, 0.0);
//! assert_eq!(f.size(), Vec2::new(100.0, 30.0));
//! ```

use glam::Vec2;

use crate::canvas::Canvas;

/// Rectangle with position, opposite corner and size kept consistent.
///
/// Coordinates follow the window convention: x grows right, y grows down.
/// Negative sizes are a caller precondition violation and are not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    width: f32,
    height: f32,
}

impl Frame {
    /// Rectangle with its top-left corner at `(x, y)`.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
            width,
            height,
        }
    }

    // ── Mutation ────────────────────────────────────────────────────────────

    /// Move the top-left corner; the far corner follows the stored size.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x0 = x;
        self.y0 = y;
        self.x1 = x + self.width;
        self.y1 = y + self.height;
    }

    /// Resize in place; the far corner follows the stored position.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.x1 = self.x0 + width;
        self.y1 = self.y0 + height;
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn x0(&self) -> f32 {
        self.x0
    }

    #[inline]
    pub fn y0(&self) -> f32 {
        self.y0
    }

    #[inline]
    pub fn x1(&self) -> f32 {
        self.x1
    }

    #[inline]
    pub fn y1(&self) -> f32 {
        self.y1
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Top-left corner.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x0, self.y0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Centre point, used by circular widgets.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x0 + self.width * 0.5,
            self.y0 + self.height * 0.5,
        )
    }

    /// Point-in-rectangle test with the half-open convention:
    /// `[x0, x1) × [y0, y1)`. The top-left edge is inside, the bottom-right
    /// edge is not, so adjacent frames never both claim a shared border.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
    }

    // ── Drawing ─────────────────────────────────────────────────────────────

    /// Issue the bounding-box outline in the canvas's current colour.
    ///
    /// This is the debug baseline; widgets draw their own visuals on top.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_rectangle(self.x0, self.y0, self.x1, self.y1, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_position() {
        let mut f = Frame::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(f.x1(), 110.0);
        assert_eq!(f.y1(), 70.0);
        f.set_position(0.0, 5.0);
        assert_eq!(f.x1(), 100.0);
        assert_eq!(f.y1(), 55.0);
        assert_eq!(f.size(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn corners_follow_size() {
        let mut f = Frame::new(10.0, 20.0, 100.0, 50.0);
        f.set_size(30.0, 40.0);
        assert_eq!(f.x1(), 40.0);
        assert_eq!(f.y1(), 60.0);
        assert_eq!(f.position(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn contains_is_half_open() {
        let f = Frame::new(0.0, 0.0, 10.0, 10.0);
        assert!(f.contains(Vec2::new(0.0, 0.0)));
        assert!(f.contains(Vec2::new(9.999, 9.999)));
        assert!(!f.contains(Vec2::new(10.0, 5.0)));
        assert!(!f.contains(Vec2::new(5.0, 10.0)));
        assert!(!f.contains(Vec2::new(-0.001, 5.0)));
    }
}
