use glam::Vec2;

/// Re-exported mouse button enum from `winit` for convenience.
#[cfg(feature = "winit")]
pub use winit::event::MouseButton;

/// Number of pointer buttons the toolkit tracks (left, right, middle).
pub const BUTTON_COUNT: usize = 3;

/// Snapshot of the pointer at a given moment.
///
/// The host is responsible for driving this structure: feed it cursor and
/// button events as they arrive, then hand it to the widget layer once per
/// tick. Widgets only ever read it, so a single instance can serve any
/// number of containers.
///
/// Buttons are addressed by index; indices at or above [`BUTTON_COUNT`]
/// read as released and writes to them are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pos: Vec2,
    buttons: [bool; BUTTON_COUNT],
}

impl PointerState {
    /// Creates a fresh state: pointer at the origin, no buttons held.
    pub fn new() -> Self {
        Default::default()
    }

    /// Update the current pointer position (window coordinates).
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Retrieve the last recorded pointer position.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Called by the event loop when a button event arrives.
    pub fn set_button(&mut self, index: usize, down: bool) {
        if let Some(slot) = self.buttons.get_mut(index) {
            *slot = down;
        }
    }

    /// Returns true if the given button is currently held.
    pub fn button(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    /// Returns true if any tracked button is currently held.
    pub fn any_button(&self) -> bool {
        self.buttons.iter().any(|&b| b)
    }
}

// ─── winit bridge ───────────────────────────────────────────────────────────

#[cfg(feature = "winit")]
impl PointerState {
    /// Fold a window event into the pointer state.
    ///
    /// Only cursor and mouse-button events are consumed; everything else is
    /// left for the host to handle.
    pub fn apply_window_event(&mut self, event: &winit::event::WindowEvent) {
        use winit::event::WindowEvent;
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_position(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(index) = button_index(*button) {
                    self.set_button(index, state.is_pressed());
                }
            }
            _ => {}
        }
    }
}

/// Map a `winit` mouse button onto the toolkit's button indices.
///
/// Returns `None` for buttons the toolkit does not track.
#[cfg(feature = "winit")]
pub fn button_index(button: MouseButton) -> Option<usize> {
    match button {
        MouseButton::Left => Some(0),
        MouseButton::Right => Some(1),
        MouseButton::Middle => Some(2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_tracking() {
        let mut state = PointerState::new();
        assert!(!state.button(0));
        state.set_button(0, true);
        assert!(state.button(0));
        assert!(state.any_button());
        state.set_button(0, false);
        assert!(!state.button(0));
        assert!(!state.any_button());
    }

    #[test]
    fn out_of_range_buttons_read_released() {
        let mut state = PointerState::new();
        state.set_button(7, true);
        assert!(!state.button(7));
        assert!(!state.any_button());
    }

    #[test]
    fn position_updates() {
        let mut state = PointerState::new();
        state.set_position(Vec2::new(10.0, 20.0));
        assert_eq!(state.position(), Vec2::new(10.0, 20.0));
    }

    #[cfg(feature = "winit")]
    #[test]
    fn winit_button_mapping() {
        assert_eq!(button_index(MouseButton::Left), Some(0));
        assert_eq!(button_index(MouseButton::Right), Some(1));
        assert_eq!(button_index(MouseButton::Middle), Some(2));
        assert_eq!(button_index(MouseButton::Back), None);
    }
}
