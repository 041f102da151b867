//! Round momentary selector.

use crate::canvas::Canvas;
use crate::element::{Callbacks, PRIMARY_BUTTON};
use crate::style::Style;

/// Radio button with push-button semantics.
///
/// `active` follows the primary press exactly like
/// [`Button`](crate::button::Button). Mutual exclusion across a set of
/// radio buttons is not handled here: register state-changed callbacks and
/// coordinate the set on the host side, typically over a
/// [`Group`](crate::group::Group).
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioButton {
    pub active: bool,
}

impl RadioButton {
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
    }

    /// Pointer left the widget; drop the visual press without a callback.
    pub(crate) fn exit(&mut self) {
        self.active = false;
    }

    pub(crate) fn draw(
        &self,
        rect: [f32; 4],
        style: &Style,
        enabled: bool,
        canvas: &mut dyn Canvas,
    ) {
        let [x0, y0, x1, y1] = rect;
        let cx = (x0 + x1) * 0.5;
        let cy = (y0 + y1) * 0.5;
        let radius = ((x1 - x0).min(y1 - y0)) * 0.5;
        let dim = if enabled { 1.0 } else { 0.5 };

        canvas.set_draw_color(style.foreground.darken(dim));
        canvas.draw_circle(cx, cy, radius, false);

        if self.active {
            canvas.draw_circle(cx, cy, radius * 0.5, true);
        }
    }
}
