//! Drawing surface consumed by the widget draw pass.
//!
//! The toolkit never talks to a GPU or a pixel buffer directly. Widgets draw
//! through the [`Canvas`] trait, and hosts either implement it over their
//! own backend or use [`CommandCanvas`], which records every call as a
//! [`DrawCmd`] for later translation. The command list preserves call order,
//! so painter's-algorithm compositing falls out of replaying it front to
//! back.

use anvil_core::Color;

/// Identifier for a bitmap owned by the host.
///
/// The toolkit never loads or stores image data; a handle is an opaque id
/// into whatever texture storage the host keeps. Handles the host no longer
/// backs simply draw nothing on its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageHandle(pub u32);

/// The five drawing operations widgets are written against.
///
/// `set_draw_color` is sticky: it applies to every shape issued until the
/// next call. Rectangles take opposite corners, not origin plus size.
pub trait Canvas {
    fn set_draw_color(&mut self, color: Color);
    fn draw_rectangle(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, filled: bool);
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32);
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, filled: bool);
    fn draw_image(&mut self, x: f32, y: f32, image: ImageHandle);
}

// ─── Recorded commands ──────────────────────────────────────────────────────

/// One recorded drawing call, with the colour that was current at the time.
///
/// Hosts translate these to their backend; the variants map one-to-one onto
/// the [`Canvas`] shape operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        filled: bool,
        color: Color,
    },
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        color: Color,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        filled: bool,
        color: Color,
    },
    Image {
        x: f32,
        y: f32,
        image: ImageHandle,
    },
}

/// A [`Canvas`] that records calls instead of rasterising them.
///
/// Create one per frame (or call [`CommandCanvas::clear`] between frames),
/// run the draw pass, then hand [`CommandCanvas::commands`] to the backend.
#[derive(Debug, Default)]
pub struct CommandCanvas {
    color: Color,
    commands: Vec<DrawCmd>,
}

impl CommandCanvas {
    pub fn new() -> Self {
        Self {
            color: Color::WHITE,
            commands: Vec::new(),
        }
    }

    /// The recorded calls, in issue order.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Drop all recorded commands, keeping the current colour.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Take ownership of the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for CommandCanvas {
    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_rectangle(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, filled: bool) {
        self.commands.push(DrawCmd::Rect {
            x0,
            y0,
            x1,
            y1,
            filled,
            color: self.color,
        });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.commands.push(DrawCmd::Line {
            x0,
            y0,
            x1,
            y1,
            color: self.color,
        });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, filled: bool) {
        self.commands.push(DrawCmd::Circle {
            cx,
            cy,
            radius,
            filled,
            color: self.color,
        });
    }

    fn draw_image(&mut self, x: f32, y: f32, image: ImageHandle) {
        self.commands.push(DrawCmd::Image { x, y, image });
    }
}
