//! Event-loop glue for `winit` hosts.

use anvil_core::PointerState;
use winit::event::WindowEvent;

use crate::canvas::Canvas;
use crate::container::Container;
use crate::registry::Widgets;

/// Higher-level UI object intended to be held by applications.
///
/// It owns the widget arena, the top-level containers and the pointer
/// sample, so hosts write very little boilerplate: feed every window event
/// to [`Ui::handle_window_event`], call [`Ui::update`] once per tick and
/// [`Ui::draw`] when rendering. Containers are drawn and updated in the
/// order they were added.
///
/// Hosts that need their own event plumbing can skip this type entirely
/// and drive [`Widgets`]/[`Container`] directly; nothing here is special.
pub struct Ui {
    widgets: Widgets,
    containers: Vec<Container>,
    pointer: PointerState,
}

impl Ui {
    pub fn new() -> Self {
        Self {
            widgets: Widgets::new(),
            containers: Vec::new(),
            pointer: PointerState::new(),
        }
    }

    // ── Structure ──────────────────────────────────────────────────────────

    pub fn widgets(&self) -> &Widgets {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut Widgets {
        &mut self.widgets
    }

    /// Add a top-level container; returns its index for later access.
    pub fn add_container(&mut self, container: Container) -> usize {
        self.containers.push(container);
        self.containers.len() - 1
    }

    pub fn container_mut(&mut self, index: usize) -> Option<&mut Container> {
        self.containers.get_mut(index)
    }

    /// The last pointer sample folded from window events.
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    // ── Event loop hooks ───────────────────────────────────────────────────

    /// Fold a winit window event into the pointer sample.
    ///
    /// Only cursor and mouse-button events are consumed; everything else
    /// passes through untouched for the host to handle.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        self.pointer.apply_window_event(event);
    }

    /// Run the update pass over every container with the current sample.
    pub fn update(&mut self) {
        for container in &mut self.containers {
            container.update(&mut self.widgets, &self.pointer);
        }
    }

    /// Run the draw pass over every container in order.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for container in &self.containers {
            container.draw(&self.widgets, canvas);
        }
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn update_routes_pointer_through_containers() {
        let mut ui = Ui::new();
        let key = ui
            .widgets_mut()
            .spawn_button("A", 10.0, 10.0, 10.0, 10.0);
        let mut cont = Container::new(0.0, 0.0, 100.0, 100.0);
        cont.add(ui.widgets_mut(), key);
        ui.add_container(cont);

        ui.pointer_mut().set_position(Vec2::new(15.0, 15.0));
        ui.update();
        assert!(ui.widgets().get(key).unwrap().is_hovered());
    }
}
