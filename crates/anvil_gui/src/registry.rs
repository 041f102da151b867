//! Owning widget storage.
//!
//! All widgets live in one [`Widgets`] arena; containers and groups hold
//! [`WidgetKey`] handles, never references. Keys are generational: after a
//! despawn the old key reads `None` instead of aliasing whatever reuses the
//! slot, so composition structures can simply skip entries that no longer
//! resolve.
//!
//! # Quick start
//! ```rust,ignore
//! use anvil_gui::{Widgets, WidgetKind, Checkbox};
//!
//! let mut widgets = Widgets::new();
//!
//! let key = widgets.spawn("mute")
//!     .with_kind(WidgetKind::Checkbox(Checkbox::default()))
//!     .with_position(10.0, 10.0)
//!     .with_size(16.0, 16.0)
//!     .build();
//!
//! widgets.set_checked(key, true);
//! widgets.despawn(key);
//! ```

use slotmap::{new_key_type, SlotMap};

use crate::element::{Element, WidgetKind};
use crate::style::Style;

new_key_type! {
    /// Stable, copyable handle to a widget inside a [`Widgets`] arena.
    ///
    /// A key outlives despawn safely: lookups return `None` once the widget
    /// is gone, even if the underlying slot has been reused.
    pub struct WidgetKey;
}

// ─── Widget builder ─────────────────────────────────────────────────────────

/// Fluent builder returned by [`Widgets::spawn`].
///
/// Call `.build()` to insert the widget and receive its [`WidgetKey`].
pub struct WidgetBuilder<'a> {
    widgets: &'a mut Widgets,
    element: Element,
}

impl<'a> WidgetBuilder<'a> {
    pub fn with_kind(mut self, kind: WidgetKind) -> Self {
        self.element.kind = kind;
        self
    }

    /// Top-left corner in container-local coordinates.
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.element.frame.set_position(x, y);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.element.frame.set_size(width, height);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.element.style = style;
        self
    }

    /// Start with input off.
    pub fn disabled(mut self) -> Self {
        self.element.enabled = false;
        self
    }

    /// Start hidden.
    pub fn invisible(mut self) -> Self {
        self.element.visible = false;
        self
    }

    pub fn on_button_pressed<F>(mut self, button: usize, f: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        self.element.on_button_pressed(button, f);
        self
    }

    pub fn on_button_released<F>(mut self, button: usize, f: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        self.element.on_button_released(button, f);
        self
    }

    pub fn on_state_changed<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        self.element.on_state_changed(f);
        self
    }

    pub fn on_editing_finished<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        self.element.on_editing_finished(f);
        self
    }

    /// Finalise the builder, insert the widget, and return its key.
    pub fn build(self) -> WidgetKey {
        self.widgets.elements.insert(self.element)
    }
}

// ─── Widgets ────────────────────────────────────────────────────────────────

/// The arena every widget lives in.
///
/// Store one `Widgets` on your application state; containers and groups
/// borrow it during the update and draw passes.
#[derive(Default)]
pub struct Widgets {
    elements: SlotMap<WidgetKey, Element>,
}

impl Widgets {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
        }
    }

    // ── Spawning ───────────────────────────────────────────────────────────

    /// Begin building a new widget with the given name.
    ///
    /// The default kind is a [`Button`](crate::button::Button); set another
    /// with [`WidgetBuilder::with_kind`].
    pub fn spawn(&mut self, name: impl Into<String>) -> WidgetBuilder<'_> {
        WidgetBuilder {
            element: Element::new(name, WidgetKind::default()),
            widgets: self,
        }
    }

    /// Convenience: spawn a push button with the given bounds.
    pub fn spawn_button(
        &mut self,
        name: impl Into<String>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> WidgetKey {
        self.spawn(name)
            .with_position(x, y)
            .with_size(width, height)
            .build()
    }

    // ── Despawn ────────────────────────────────────────────────────────────

    /// Remove the widget from the arena. Returns `true` if it existed.
    ///
    /// Keys held by containers or groups are not cleaned up; they resolve
    /// to `None` from now on and those structures skip them.
    pub fn despawn(&mut self, key: WidgetKey) -> bool {
        self.elements.remove(key).is_some()
    }

    // ── Access ─────────────────────────────────────────────────────────────

    /// Immutable reference to a widget.
    pub fn get(&self, key: WidgetKey) -> Option<&Element> {
        self.elements.get(key)
    }

    /// Mutable reference to a widget — use this for multi-field updates.
    pub fn get_mut(&mut self, key: WidgetKey) -> Option<&mut Element> {
        self.elements.get_mut(key)
    }

    /// Returns `true` if the arena still contains this key.
    pub fn contains(&self, key: WidgetKey) -> bool {
        self.elements.contains_key(key)
    }

    /// Key of the first widget with the given name, if any.
    pub fn find(&self, name: &str) -> Option<WidgetKey> {
        self.elements
            .iter()
            .find(|(_, e)| e.name == name)
            .map(|(k, _)| k)
    }

    // ── Field helpers ──────────────────────────────────────────────────────
    // Stale keys are silently ignored, matching the composition layer.

    pub fn set_position(&mut self, key: WidgetKey, x: f32, y: f32) {
        if let Some(e) = self.elements.get_mut(key) {
            e.set_position(x, y);
        }
    }

    pub fn set_enabled(&mut self, key: WidgetKey, enabled: bool) {
        if let Some(e) = self.elements.get_mut(key) {
            e.set_enabled(enabled);
        }
    }

    pub fn set_visible(&mut self, key: WidgetKey, visible: bool) {
        if let Some(e) = self.elements.get_mut(key) {
            e.set_visible(visible);
        }
    }

    /// Set a checkbox's latch without firing callbacks.
    pub fn set_checked(&mut self, key: WidgetKey, checked: bool) {
        if let Some(e) = self.elements.get_mut(key) {
            e.set_checked(checked);
        }
    }

    /// Set a slider's value without firing callbacks.
    pub fn set_value(&mut self, key: WidgetKey, value: f32) {
        if let Some(e) = self.elements.get_mut(key) {
            e.set_value(value);
        }
    }

    // ── Iteration ──────────────────────────────────────────────────────────

    /// Iterate over all widgets.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Mutably iterate over all widgets.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.values_mut()
    }

    /// Iterate over `(WidgetKey, &Element)` pairs.
    pub fn iter_with_keys(&self) -> impl Iterator<Item = (WidgetKey, &Element)> {
        self.elements.iter()
    }

    /// Total number of widgets currently alive.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_despawn() {
        let mut w = Widgets::new();
        let k = w.spawn_button("A", 0.0, 0.0, 10.0, 10.0);
        assert!(w.contains(k));
        assert_eq!(w.len(), 1);
        assert!(w.despawn(k));
        assert!(!w.contains(k));
        assert_eq!(w.len(), 0);
        assert!(!w.despawn(k));
    }

    #[test]
    fn stale_key_reads_none_after_slot_reuse() {
        let mut w = Widgets::new();
        let k1 = w.spawn_button("A", 0.0, 0.0, 10.0, 10.0);
        w.despawn(k1);
        let k2 = w.spawn_button("B", 0.0, 0.0, 10.0, 10.0);
        assert!(w.get(k1).is_none());
        assert_eq!(w.get(k2).map(|e| e.name.as_str()), Some("B"));
    }

    #[test]
    fn keys_are_stable_after_other_despawn() {
        let mut w = Widgets::new();
        let k1 = w.spawn_button("X", 0.0, 0.0, 10.0, 10.0);
        let k2 = w.spawn_button("Y", 5.0, 5.0, 10.0, 10.0);
        w.despawn(k1);
        assert!(w.contains(k2));
        assert_eq!(w.get(k2).map(|e| e.frame.position().x), Some(5.0));
    }

    #[test]
    fn builder_applies_fields() {
        let mut w = Widgets::new();
        let k = w
            .spawn("slider")
            .with_kind(WidgetKind::Slider(Default::default()))
            .with_position(10.0, 20.0)
            .with_size(100.0, 10.0)
            .disabled()
            .build();
        let e = w.get(k).unwrap();
        assert_eq!(e.frame.position().x, 10.0);
        assert_eq!(e.frame.size().y, 10.0);
        assert!(!e.enabled);
        assert!(e.as_slider().is_some());
    }

    #[test]
    fn find_by_name() {
        let mut w = Widgets::new();
        let k = w.spawn_button("ok", 0.0, 0.0, 10.0, 10.0);
        assert_eq!(w.find("ok"), Some(k));
        assert_eq!(w.find("missing"), None);
    }

    #[test]
    fn field_helpers_ignore_stale_keys() {
        let mut w = Widgets::new();
        let k = w.spawn_button("A", 0.0, 0.0, 10.0, 10.0);
        w.despawn(k);
        w.set_position(k, 1.0, 1.0);
        w.set_checked(k, true);
        w.set_value(k, 0.5);
        assert!(w.is_empty());
    }
}
