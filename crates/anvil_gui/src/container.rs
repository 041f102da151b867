//! Composite that positions and routes input to a set of widgets.

use anvil_core::{Color, PointerState};

use crate::canvas::Canvas;
use crate::frame::Frame;
use crate::registry::{WidgetKey, Widgets};

/// Ordered collection of widgets sharing one coordinate origin.
///
/// The container stamps its own origin onto each child as the child's
/// offset at [`Container::add`] time. The stamp happens exactly once:
/// moving the container afterwards moves the container's own bounds but
/// not the already-added children.
///
/// The child list is append-only; there is no removal or re-parenting.
/// Despawning a widget from the arena is the way to retire it, after which
/// its key simply stops resolving and the container skips it.
pub struct Container {
    /// Bounds in window coordinates.
    pub frame: Frame,
    /// Optional fill drawn behind the children. `None` means transparent.
    pub background: Option<Color>,
    /// Colour of the bounding-box outline.
    pub outline: Color,
    children: Vec<WidgetKey>,
}

impl Container {
    /// Create an empty container with the given bounds and no background.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            frame: Frame::new(x, y, width, height),
            background: None,
            outline: Color::WHITE,
            children: Vec::new(),
        }
    }

    /// Set a solid background fill.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_outline(mut self, color: Color) -> Self {
        self.outline = color;
        self
    }

    // ── Children ───────────────────────────────────────────────────────────

    /// Register a child, stamping the container's current origin as the
    /// child's offset.
    ///
    /// A key that no longer resolves is not registered.
    pub fn add(&mut self, widgets: &mut Widgets, key: WidgetKey) {
        let origin = self.frame.position();
        match widgets.get_mut(key) {
            Some(child) => {
                child.offset = origin;
                log::debug!(
                    "container: added '{}' with offset ({}, {})",
                    child.name,
                    origin.x,
                    origin.y
                );
                self.children.push(key);
            }
            None => log::warn!("container: ignoring stale widget key at add"),
        }
    }

    /// Keys of the registered children, in insertion order.
    pub fn children(&self) -> &[WidgetKey] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    // ── Passes ─────────────────────────────────────────────────────────────

    /// Route one pointer sample to the children.
    ///
    /// The container gates on its own bounds: when the pointer is outside,
    /// children are not updated at all, so their hover and press state is
    /// simply frozen until the pointer comes back. When inside, every child
    /// receives the unmodified sample and re-tests against its own
    /// offset-adjusted bounds.
    ///
    /// Returns whether the pointer is inside the container's own bounds.
    pub fn update(&mut self, widgets: &mut Widgets, pointer: &PointerState) -> bool {
        let inside = self.frame.contains(pointer.position());
        if inside {
            for &key in &self.children {
                if let Some(child) = widgets.get_mut(key) {
                    child.update(pointer);
                }
            }
        }
        inside
    }

    /// Draw the background, the container's outline, then every child in
    /// insertion order. Later children paint over earlier ones.
    pub fn draw(&self, widgets: &Widgets, canvas: &mut dyn Canvas) {
        if let Some(color) = self.background {
            canvas.set_draw_color(color);
            canvas.draw_rectangle(
                self.frame.x0(),
                self.frame.y0(),
                self.frame.x1(),
                self.frame.y1(),
                true,
            );
        }
        canvas.set_draw_color(self.outline);
        self.frame.draw(canvas);

        for &key in &self.children {
            if let Some(child) = widgets.get(key) {
                child.draw(canvas);
            }
        }
    }

    // ── Geometry passthrough ───────────────────────────────────────────────

    /// Move the container. Children added before the move keep the offset
    /// stamped at their add time.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.frame.set_position(x, y);
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.frame.set_size(width, height);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CommandCanvas, DrawCmd};
    use glam::Vec2;

    fn pointer(x: f32, y: f32, primary: bool) -> PointerState {
        let mut p = PointerState::new();
        p.set_position(Vec2::new(x, y));
        p.set_button(0, primary);
        p
    }

    #[test]
    fn add_stamps_offset_from_current_origin() {
        let mut widgets = Widgets::new();
        let mut cont = Container::new(100.0, 200.0, 50.0, 50.0);
        let k = widgets.spawn_button("A", 0.0, 0.0, 10.0, 10.0);
        cont.add(&mut widgets, k);
        assert_eq!(widgets.get(k).map(|e| e.offset), Some(Vec2::new(100.0, 200.0)));
    }

    #[test]
    fn moving_container_leaves_added_children_in_place() {
        let mut widgets = Widgets::new();
        let mut cont = Container::new(100.0, 100.0, 50.0, 50.0);
        let k = widgets.spawn_button("A", 0.0, 0.0, 10.0, 10.0);
        cont.add(&mut widgets, k);
        cont.set_position(0.0, 0.0);
        let child = widgets.get(k).unwrap();
        assert_eq!(child.offset, Vec2::new(100.0, 100.0));
        assert_eq!(child.window_rect(), [100.0, 100.0, 110.0, 110.0]);
    }

    #[test]
    fn update_gates_on_own_bounds() {
        let mut widgets = Widgets::new();
        let mut cont = Container::new(0.0, 0.0, 100.0, 100.0);
        let k = widgets.spawn_button("A", 10.0, 10.0, 10.0, 10.0);
        cont.add(&mut widgets, k);

        assert!(cont.update(&mut widgets, &pointer(15.0, 15.0, false)));
        assert!(widgets.get(k).unwrap().is_hovered());

        // outside the container nothing is routed: the child's hover state
        // stays frozen at its last value
        assert!(!cont.update(&mut widgets, &pointer(150.0, 15.0, false)));
        assert!(widgets.get(k).unwrap().is_hovered());
    }

    #[test]
    fn children_gate_themselves_inside_the_container() {
        let mut widgets = Widgets::new();
        let mut cont = Container::new(0.0, 0.0, 100.0, 100.0);
        let k = widgets.spawn_button("A", 10.0, 10.0, 10.0, 10.0);
        cont.add(&mut widgets, k);

        cont.update(&mut widgets, &pointer(50.0, 50.0, true));
        let child = widgets.get(k).unwrap();
        assert!(!child.is_hovered());
        assert!(!child.is_pressed(0));
    }

    #[test]
    fn draw_orders_children_after_outline_in_insertion_order() {
        let mut widgets = Widgets::new();
        let mut cont = Container::new(0.0, 0.0, 100.0, 100.0).with_background(Color::DARK_GRAY);
        // two overlapping buttons; B added second paints over A
        let a = widgets.spawn_button("A", 10.0, 10.0, 20.0, 20.0);
        let b = widgets.spawn_button("B", 15.0, 15.0, 20.0, 20.0);
        cont.add(&mut widgets, a);
        cont.add(&mut widgets, b);

        let mut canvas = CommandCanvas::new();
        cont.draw(&widgets, &mut canvas);
        let cmds = canvas.commands();

        // background fill, container outline, then 2 commands per button
        assert_eq!(cmds.len(), 6);
        assert!(matches!(cmds[0], DrawCmd::Rect { filled: true, .. }));
        assert!(matches!(cmds[1], DrawCmd::Rect { filled: false, .. }));
        let a_fill = &cmds[2];
        let b_fill = &cmds[4];
        assert!(matches!(a_fill, DrawCmd::Rect { x0, filled: true, .. } if *x0 == 10.0));
        assert!(matches!(b_fill, DrawCmd::Rect { x0, filled: true, .. } if *x0 == 15.0));
    }

    #[test]
    fn stale_children_are_skipped() {
        let mut widgets = Widgets::new();
        let mut cont = Container::new(0.0, 0.0, 100.0, 100.0);
        let k = widgets.spawn_button("A", 10.0, 10.0, 10.0, 10.0);
        cont.add(&mut widgets, k);
        widgets.despawn(k);

        assert!(cont.update(&mut widgets, &pointer(15.0, 15.0, true)));
        let mut canvas = CommandCanvas::new();
        cont.draw(&widgets, &mut canvas);
        // only the container's own outline remains
        assert_eq!(canvas.commands().len(), 1);
        assert_eq!(cont.len(), 1);
    }

    #[test]
    fn stale_key_is_not_registered() {
        let mut widgets = Widgets::new();
        let mut cont = Container::new(0.0, 0.0, 100.0, 100.0);
        let k = widgets.spawn_button("A", 0.0, 0.0, 10.0, 10.0);
        widgets.despawn(k);
        cont.add(&mut widgets, k);
        assert!(cont.is_empty());
    }
}
