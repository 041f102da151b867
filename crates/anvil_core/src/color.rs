//! RGBA colour type shared by the widget and rendering layers.
//!
//! Components are `f32` in linear light, nominally 0.0 – 1.0. The palette
//! constants cover the handful of colours the stock widgets reach for so
//! call sites stay free of magic float literals.
//!
//! # Example
//! ```rust,ignore
//! use anvil_core::Color;
//!
//! let frame  = Color::WHITE;
//! let fill   = Color::rgb(0.0, 0.55, 0.25);
//! let shade  = Color::rgba(0.0, 0.0, 0.0, 0.35);
//! let accent = Color::from_hex(0xE8B04BFF);
//! ```

/// Linear-space RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    // ── Constructors ────────────────────────────────────────────────────────

    /// Opaque colour from red, green, blue components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Colour from all four components.
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Construct from a packed `0xRRGGBBAA` hexadecimal value.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self { r, g, b, a }
    }

    /// Construct from 8-bit components, opaque.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    // ── Conversions ─────────────────────────────────────────────────────────

    /// Returns `[r, g, b, a]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // ── Modifiers ───────────────────────────────────────────────────────────

    /// Return a new colour with the alpha channel replaced.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linearly interpolate towards `other` by factor `t` (0 = self, 1 = other).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Return a brighter version by multiplying RGB by `factor`, clamped to 1.
    pub fn brighten(self, factor: f32) -> Self {
        Self {
            r: (self.r * factor).min(1.0),
            g: (self.g * factor).min(1.0),
            b: (self.b * factor).min(1.0),
            a: self.a,
        }
    }

    /// Return a dimmer version by multiplying RGB by `factor`, floored at 0.
    ///
    /// Widgets use this to grey out their disabled state.
    pub fn darken(self, factor: f32) -> Self {
        Self {
            r: (self.r * factor).max(0.0),
            g: (self.g * factor).max(0.0),
            b: (self.b * factor).max(0.0),
            a: self.a,
        }
    }

    // ── Palette ─────────────────────────────────────────────────────────────

    pub const WHITE:       Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK:       Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const RED:         Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN:       Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE:        Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW:      Self = Self::rgb(1.0, 1.0, 0.0);

    pub const DARK_GRAY:   Self = Self::rgb(0.25, 0.25, 0.25);
    pub const GRAY:        Self = Self::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY:  Self = Self::rgb(0.75, 0.75, 0.75);
}

impl From<[f32; 4]> for Color {
    fn from(a: [f32; 4]) -> Self {
        Self::rgba(a[0], a[1], a[2], a[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        let c = Color::from_hex(0x80FF0040);
        assert!((c.r - 0.502).abs() < 0.01);
        assert!((c.g - 1.0).abs() < 0.01);
        assert!((c.b - 0.0).abs() < 0.01);
        assert!((c.a - 0.251).abs() < 0.01);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert!((a.lerp(b, 0.5).g - 0.5).abs() < 1e-6);
    }

    #[test]
    fn darken_keeps_alpha() {
        let c = Color::rgba(0.8, 0.4, 0.2, 0.9).darken(0.5);
        assert!((c.r - 0.4).abs() < 1e-6);
        assert!((c.a - 0.9).abs() < 1e-6);
    }
}
