//! Momentary push button.

use anvil_core::Color;

use crate::canvas::Canvas;
use crate::element::{Callbacks, PRIMARY_BUTTON};
use crate::style::Style;

/// Held-down state of a push button.
///
/// `active` is true only while the primary button is down on the widget;
/// it is display state, not a latch. Hosts that want a toggle listen to
/// the state-changed callback instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Button {
    pub active: bool,
}

impl Button {
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

        // Pick the bitmap for the current state; fall back to flat colour
        // when that particular slot is empty.
        let image = if !enabled {
            style.disabled
        } else if self.active {
            style.active
        } else {
            style.normal
        };

        if let Some(image) = image {
            canvas.draw_image(x0, y0, image);
        } else {
            let fill = if !enabled {
                style.background.darken(0.5)
            } else if self.active {
                Color::YELLOW
            } else {
                style.background
            };
            canvas.set_draw_color(fill);
            canvas.draw_rectangle(x0, y0, x1, y1, true);
        }

        canvas.set_draw_color(if enabled {
            style.foreground
        } else {
            style.foreground.darken(0.5)
        });
        canvas.draw_rectangle(x0, y0, x1, y1, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CommandCanvas, DrawCmd, ImageHandle};

    const RECT: [f32; 4] = [0.0, 0.0, 20.0, 10.0];

    #[test]
    fn idle_fill_uses_background_active_uses_yellow() {
        let style = Style::default();
        let mut canvas = CommandCanvas::new();
        Button { active: false }.draw(RECT, &style, true, &mut canvas);
        assert!(matches!(
            canvas.commands()[0],
            DrawCmd::Rect { filled: true, color, .. } if color == style.background
        ));

        canvas.clear();
        Button { active: true }.draw(RECT, &style, true, &mut canvas);
        assert!(matches!(
            canvas.commands()[0],
            DrawCmd::Rect { filled: true, color, .. } if color == Color::YELLOW
        ));
    }

    #[test]
    fn state_image_replaces_fill_but_not_outline() {
        let style = Style::default().with_active_image(ImageHandle(3));
        let mut canvas = CommandCanvas::new();
        Button { active: true }.draw(RECT, &style, true, &mut canvas);

        let cmds = canvas.commands();
        assert_eq!(cmds.len(), 2);
        assert!(matches!(cmds[0], DrawCmd::Image { image: ImageHandle(3), .. }));
        assert!(matches!(cmds[1], DrawCmd::Rect { filled: false, .. }));
    }

    #[test]
    fn missing_state_image_falls_back_to_flat_colour() {
        // only the normal slot is set; the active state has no bitmap
        let style = Style::default().with_normal_image(ImageHandle(1));
        let mut canvas = CommandCanvas::new();
        Button { active: true }.draw(RECT, &style, true, &mut canvas);
        assert!(matches!(canvas.commands()[0], DrawCmd::Rect { filled: true, .. }));
    }

    #[test]
    fn disabled_dims_the_fill() {
        let style = Style::default();
        let mut canvas = CommandCanvas::new();
        Button { active: false }.draw(RECT, &style, false, &mut canvas);
        assert!(matches!(
            canvas.commands()[0],
            DrawCmd::Rect { filled: true, color, .. } if color == style.background.darken(0.5)
        ));
    }
}
