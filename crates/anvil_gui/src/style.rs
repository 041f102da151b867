//! Per-widget visual theme.

use anvil_core::Color;

use crate::canvas::ImageHandle;

/// Colours and optional state bitmaps for one widget.
///
/// The image slots follow the widget's interaction state: `normal` when
/// idle, `active` while held, `disabled` when input is off. Any slot left
/// `None` falls back to flat-colour drawing for that state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Outline, cross and bar colour.
    pub foreground: Color,
    /// Fill colour while idle.
    pub background: Color,
    pub normal: Option<ImageHandle>,
    pub active: Option<ImageHandle>,
    pub disabled: Option<ImageHandle>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::GREEN,
            normal: None,
            active: None,
            disabled: None,
        }
    }
}

impl Style {
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            ..Default::default()
        }
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Bitmap shown while idle.
    pub fn with_normal_image(mut self, image: ImageHandle) -> Self {
        self.normal = Some(image);
        self
    }

    /// Bitmap shown while held.
    pub fn with_active_image(mut self, image: ImageHandle) -> Self {
        self.active = Some(image);
        self
    }

    /// Bitmap shown while input is off.
    pub fn with_disabled_image(mut self, image: ImageHandle) -> Self {
        self.disabled = Some(image);
        self
    }
}
