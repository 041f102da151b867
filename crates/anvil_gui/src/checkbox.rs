//! Latching two-state box.

use crate::canvas::Canvas;
use crate::element::{Callbacks, PRIMARY_BUTTON};
use crate::style::Style;

/// Toggle that flips on every primary press.
///
/// Unlike [`Button`](crate::button::Button), the stored state persists:
/// releases and pointer exits never touch it, so pressing twice restores
/// the original value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkbox {
    pub checked: bool,
}

impl Checkbox {
    pub(crate) fn press(&mut self, button: usize, cb: &Callbacks) {
        if button != PRIMARY_BUTTON {
            return;
        }
        self.checked = !self.checked;
        cb.fire_state_changed(self.checked);
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

        canvas.set_draw_color(style.foreground.darken(dim));
        canvas.draw_rectangle(x0, y0, x1, y1, false);

        // Checked state shows as a diagonal cross over the box.
        if self.checked {
            canvas.draw_line(x0, y0, x1, y1);
            canvas.draw_line(x0, y1, x1, y0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CommandCanvas, DrawCmd};

    const RECT: [f32; 4] = [0.0, 0.0, 16.0, 16.0];

    #[test]
    fn unchecked_draws_box_only() {
        let mut canvas = CommandCanvas::new();
        Checkbox { checked: false }.draw(RECT, &Style::default(), true, &mut canvas);
        assert_eq!(canvas.commands().len(), 2);
        assert!(!canvas
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCmd::Line { .. })));
    }

    #[test]
    fn checked_adds_both_diagonals() {
        let mut canvas = CommandCanvas::new();
        Checkbox { checked: true }.draw(RECT, &Style::default(), true, &mut canvas);
        let lines: Vec<_> = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .collect();
        assert_eq!(lines.len(), 2);
    }
}
