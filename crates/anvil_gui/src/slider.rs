//! Draggable continuous-value control.

use crate::canvas::Canvas;
use crate::element::{Callbacks, PRIMARY_BUTTON};
use crate::frame::Frame;
use crate::style::Style;

/// Direction the slider's bar grows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Slider tracking a normalized value along one axis.
///
/// `value` is the pointer position as a proportion of the frame size,
/// nominally in `[0, 1]`. It is deliberately not clamped: dragging past
/// the bounds while the button is held runs the value past the nominal
/// range, and hosts that care clamp on their side.
///
/// `min` and `max` describe the host-facing range but do not participate
/// in tracking; [`Slider::mapped_value`] applies them on read.
#[derive(Debug, Clone, Copy)]
pub struct Slider {
    pub orientation: Orientation,
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub active: bool,
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            value: 0.0,
            min: 0.0,
            max: 1.0,
            active: false,
        }
    }
}

impl Slider {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Default::default()
        }
    }

    /// `value` projected onto the `min..max` range.
    pub fn mapped_value(&self) -> f32 {
        self.min + self.value * (self.max - self.min)
    }

    pub(crate) fn press(&mut self, button: usize, cb: &Callbacks) {
        if button != PRIMARY_BUTTON {
            return;
        }
        self.active = true;
        cb.fire_state_changed(true);
    }

    pub(crate) fn release(&mut self, button: usize, cb: &Callbacks) {
        if button != PRIMARY_BUTTON {
            return;
        }
        self.active = false;
        cb.fire_state_changed(false);
        cb.fire_editing_finished(true);
    }

    /// Pointer left the widget mid-drag: report the edit as finished, then
    /// drop the visual press.
    pub(crate) fn exit(&mut self, cb: &Callbacks) {
        if self.active {
            cb.fire_editing_finished(true);
            self.active = false;
        }
    }

    /// Follow the pointer while held. The proportion is taken against the
    /// frame size along the orientation axis, without clamping.
    pub(crate) fn track(&mut self, local_x: f32, local_y: f32, frame: &Frame) {
        self.value = match self.orientation {
            Orientation::Horizontal => local_x / frame.width(),
            Orientation::Vertical => local_y / frame.height(),
        };
    }

    pub(crate) fn draw(
        &self,
        rect: [f32; 4],
        style: &Style,
        enabled: bool,
        canvas: &mut dyn Canvas,
    ) {
        let [x0, y0, x1, y1] = rect;
        let dim = if enabled { 1.0 } else { 0.5 };

        canvas.set_draw_color(style.background.darken(dim));
        canvas.draw_rectangle(x0, y0, x1, y1, true);

        // The bar itself is clamped for display; the stored value is not.
        let t = self.value.clamp(0.0, 1.0);
        canvas.set_draw_color(style.foreground.darken(dim));
        match self.orientation {
            Orientation::Horizontal => {
                canvas.draw_rectangle(x0, y0, x0 + (x1 - x0) * t, y1, true);
            }
            Orientation::Vertical => {
                canvas.draw_rectangle(x0, y0, x1, y0 + (y1 - y0) * t, true);
            }
        }

        canvas.draw_rectangle(x0, y0, x1, y1, false);
    }
}
