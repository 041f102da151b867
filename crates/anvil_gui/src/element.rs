//! The interactive widget core: frame geometry plus the pointer state
//! machine every variant shares.
//!
//! An [`Element`] owns its [`Frame`], hover and per-button press state, the
//! offset stamped by its container, a [`Style`], the host-facing callback
//! slots and a [`WidgetKind`] that supplies variant behaviour. One
//! [`Element::update`] call per tick consumes the pointer sample and fires
//! transitions; one [`Element::draw`] call renders the current state.
//!
//! # Quick start
//! ```rust,ignore
//! use anvil_gui::{Element, WidgetKind, Checkbox};
//! use anvil_core::PointerState;
//!
//! let mut el = Element::new("mute", WidgetKind::Checkbox(Checkbox::default()));
//! el.frame.set_position(10.0, 10.0);
//! el.frame.set_size(16.0, 16.0);
//! el.on_state_changed(|on| println!("mute: {on}"));
//!
//! let pointer = PointerState::new();
//! el.update(&pointer);
//! ```

use std::sync::Arc;

use anvil_core::{PointerState, BUTTON_COUNT};
use glam::Vec2;

use crate::button::Button;
use crate::canvas::Canvas;
use crate::checkbox::Checkbox;
use crate::custom::CustomHooks;
use crate::frame::Frame;
use crate::radio_button::RadioButton;
use crate::slider::Slider;
use crate::style::Style;

/// Index of the button the built-in variants react to.
pub const PRIMARY_BUTTON: usize = 0;

// ─── Callback slots ─────────────────────────────────────────────────────────

/// Host-registered callback slots.
///
/// Every slot is optional and skipped when unset. The per-button slots
/// receive the new down-state (`true` on press, `false` on release);
/// `on_state_changed` and `on_editing_finished` are fired by the variant
/// behaviours as described on each variant type.
#[derive(Clone, Default)]
pub struct Callbacks {
    pub on_button_pressed: [Option<Arc<dyn Fn(bool)>>; BUTTON_COUNT],
    pub on_button_released: [Option<Arc<dyn Fn(bool)>>; BUTTON_COUNT],
    pub on_state_changed: Option<Arc<dyn Fn(bool)>>,
    pub on_editing_finished: Option<Arc<dyn Fn(bool)>>,
}

impl Callbacks {
    pub(crate) fn fire_pressed(&self, button: usize) {
        if let Some(cb) = self.on_button_pressed.get(button).and_then(|s| s.as_ref()) {
            cb(true);
        }
    }

    pub(crate) fn fire_released(&self, button: usize) {
        if let Some(cb) = self.on_button_released.get(button).and_then(|s| s.as_ref()) {
            cb(false);
        }
    }

    pub(crate) fn fire_state_changed(&self, state: bool) {
        if let Some(cb) = &self.on_state_changed {
            cb(state);
        }
    }

    pub(crate) fn fire_editing_finished(&self, done: bool) {
        if let Some(cb) = &self.on_editing_finished {
            cb(done);
        }
    }
}

// ─── Widget kinds ───────────────────────────────────────────────────────────

/// The closed set of widget behaviours.
///
/// Variant-specific logic lives on the variant types and is routed here by
/// `match`; extension happens through [`WidgetKind::Custom`] rather than by
/// widening this enum.
#[derive(Clone)]
pub enum WidgetKind {
    Button(Button),
    Checkbox(Checkbox),
    RadioButton(RadioButton),
    Slider(Slider),
    Custom(CustomHooks),
}

impl Default for WidgetKind {
    fn default() -> Self {
        WidgetKind::Button(Button::default())
    }
}

// ─── Element ────────────────────────────────────────────────────────────────

/// One interactive widget.
///
/// Geometry, style, offset and callbacks are public for direct host access;
/// hover and press state are owned by [`Element::update`] and only readable,
/// so the state machine cannot be desynchronised from outside.
#[derive(Clone)]
pub struct Element {
    /// Human-readable label, used in trace logging and name lookups.
    pub name: String,
    /// Bounds in container-local coordinates (window coordinates when the
    /// widget is not inside a container).
    pub frame: Frame,
    /// Disabled widgets ignore input but still draw, dimmed.
    pub enabled: bool,
    /// Hidden widgets ignore input and draw nothing.
    pub visible: bool,
    /// Translation stamped by the owning container at add time.
    pub offset: Vec2,
    pub style: Style,
    pub callbacks: Callbacks,
    pub kind: WidgetKind,
    hovered: bool,
    pressed: [bool; BUTTON_COUNT],
}

impl Element {
    pub fn new(name: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            name: name.into(),
            frame: Frame::new(0.0, 0.0, 0.0, 0.0),
            enabled: true,
            visible: true,
            offset: Vec2::ZERO,
            style: Style::default(),
            callbacks: Callbacks::default(),
            kind,
            hovered: false,
            pressed: [false; BUTTON_COUNT],
        }
    }

    // ── Update ──────────────────────────────────────────────────────────────

    /// Advance the state machine by one pointer sample.
    ///
    /// Returns whether the pointer is inside the widget's bounds. Disabled
    /// or hidden widgets return `false` immediately without touching state
    /// or firing anything.
    ///
    /// Transition rules:
    /// - hover is computed once from position, independent of buttons;
    /// - a press lands only while the pointer is inside (a button already
    ///   held when the pointer enters lands on the entry tick);
    /// - a release fires on the falling edge regardless of position, so
    ///   dragging off the widget never swallows it;
    /// - while any button is held the variant's tracking hook runs each
    ///   tick with the local pointer position.
    pub fn update(&mut self, pointer: &PointerState) -> bool {
        if !self.enabled || !self.visible {
            return false;
        }

        let local = pointer.position() - self.offset;
        let inside = self.frame.contains(local);

        if inside != self.hovered {
            self.hovered = inside;
            if inside {
                log::trace!("{}: pointer entered", self.name);
                if let WidgetKind::Custom(hooks) = &self.kind {
                    if let Some(f) = &hooks.on_enter {
                        f();
                    }
                }
            } else {
                log::trace!("{}: pointer left", self.name);
                match &mut self.kind {
                    WidgetKind::Button(b) => b.exit(),
                    WidgetKind::Checkbox(_) => {}
                    WidgetKind::RadioButton(r) => r.exit(),
                    WidgetKind::Slider(s) => s.exit(&self.callbacks),
                    WidgetKind::Custom(hooks) => {
                        if let Some(f) = &hooks.on_exit {
                            f();
                        }
                    }
                }
            }
        }

        for button in 0..BUTTON_COUNT {
            let down = pointer.button(button);
            if down && !self.pressed[button] {
                if inside {
                    self.pressed[button] = true;
                    log::trace!("{}: button {} pressed", self.name, button);
                    self.callbacks.fire_pressed(button);
                    match &mut self.kind {
                        WidgetKind::Button(b) => b.press(button, &self.callbacks),
                        WidgetKind::Checkbox(c) => c.press(button, &self.callbacks),
                        WidgetKind::RadioButton(r) => r.press(button, &self.callbacks),
                        WidgetKind::Slider(s) => s.press(button, &self.callbacks),
                        WidgetKind::Custom(hooks) => {
                            if let Some(f) = &hooks.on_pressed {
                                f(button);
                            }
                        }
                    }
                }
            } else if !down && self.pressed[button] {
                self.pressed[button] = false;
                log::trace!("{}: button {} released", self.name, button);
                self.callbacks.fire_released(button);
                match &mut self.kind {
                    WidgetKind::Button(b) => b.release(button, &self.callbacks),
                    WidgetKind::Checkbox(_) => {}
                    WidgetKind::RadioButton(r) => r.release(button, &self.callbacks),
                    WidgetKind::Slider(s) => s.release(button, &self.callbacks),
                    WidgetKind::Custom(hooks) => {
                        if let Some(f) = &hooks.on_released {
                            f(button);
                        }
                    }
                }
            }
        }

        if self.pressed.iter().any(|&p| p) {
            match &mut self.kind {
                WidgetKind::Slider(s) => s.track(local.x, local.y, &self.frame),
                WidgetKind::Custom(hooks) => {
                    if let Some(f) = &hooks.track {
                        f(local.x, local.y);
                    }
                }
                _ => {}
            }
        }

        inside
    }

    // ── Drawing ─────────────────────────────────────────────────────────────

    /// Render the widget's current state. Hidden widgets draw nothing.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.visible {
            return;
        }
        let rect = self.window_rect();
        match &self.kind {
            WidgetKind::Button(b) => b.draw(rect, &self.style, self.enabled, canvas),
            WidgetKind::Checkbox(c) => c.draw(rect, &self.style, self.enabled, canvas),
            WidgetKind::RadioButton(r) => r.draw(rect, &self.style, self.enabled, canvas),
            WidgetKind::Slider(s) => s.draw(rect, &self.style, self.enabled, canvas),
            WidgetKind::Custom(hooks) => {
                if let Some(f) = &hooks.draw {
                    f(self, canvas);
                } else {
                    canvas.set_draw_color(self.style.foreground);
                    canvas.draw_rectangle(rect[0], rect[1], rect[2], rect[3], false);
                }
            }
        }
    }

    /// Frame corners translated by the stamped offset: `[x0, y0, x1, y1]`
    /// in window coordinates. What [`Element::draw`] renders against.
    pub fn window_rect(&self) -> [f32; 4] {
        [
            self.frame.x0() + self.offset.x,
            self.frame.y0() + self.offset.y,
            self.frame.x1() + self.offset.x,
            self.frame.y1() + self.offset.y,
        ]
    }

    // ── Geometry passthrough ────────────────────────────────────────────────

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.frame.set_position(x, y);
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.frame.set_size(width, height);
    }

    // ── State queries ───────────────────────────────────────────────────────

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Down-state of one button on this widget; out-of-range reads false.
    pub fn is_pressed(&self, button: usize) -> bool {
        self.pressed.get(button).copied().unwrap_or(false)
    }

    /// The momentary held flag of Button, RadioButton and Slider variants.
    pub fn is_active(&self) -> bool {
        match &self.kind {
            WidgetKind::Button(b) => b.active,
            WidgetKind::RadioButton(r) => r.active,
            WidgetKind::Slider(s) => s.active,
            WidgetKind::Checkbox(_) | WidgetKind::Custom(_) => false,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(&self.kind, WidgetKind::Checkbox(c) if c.checked)
    }

    /// Slider value; `0.0` for other kinds.
    pub fn value(&self) -> f32 {
        self.as_slider().map(|s| s.value).unwrap_or(0.0)
    }

    // ── Programmatic state ──────────────────────────────────────────────────
    // Setters never fire callbacks: callbacks report user interaction, not
    // host writes.

    pub fn set_checked(&mut self, checked: bool) {
        if let WidgetKind::Checkbox(c) = &mut self.kind {
            c.checked = checked;
        }
    }

    pub fn set_value(&mut self, value: f32) {
        if let WidgetKind::Slider(s) = &mut self.kind {
            s.value = value;
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    // ── Kind access ─────────────────────────────────────────────────────────

    pub fn as_button(&self) -> Option<&Button> {
        match &self.kind {
            WidgetKind::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_checkbox(&self) -> Option<&Checkbox> {
        match &self.kind {
            WidgetKind::Checkbox(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_radio_button(&self) -> Option<&RadioButton> {
        match &self.kind {
            WidgetKind::RadioButton(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_slider(&self) -> Option<&Slider> {
        match &self.kind {
            WidgetKind::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_slider_mut(&mut self) -> Option<&mut Slider> {
        match &mut self.kind {
            WidgetKind::Slider(s) => Some(s),
            _ => None,
        }
    }

    // ── Callback registration ───────────────────────────────────────────────

    /// Register the per-button press slot; receives `true` when fired.
    pub fn on_button_pressed<F>(&mut self, button: usize, f: F)
    where
        F: Fn(bool) + 'static,
    {
        if let Some(slot) = self.callbacks.on_button_pressed.get_mut(button) {
            *slot = Some(Arc::new(f));
        }
    }

    /// Register the per-button release slot; receives `false` when fired.
    pub fn on_button_released<F>(&mut self, button: usize, f: F)
    where
        F: Fn(bool) + 'static,
    {
        if let Some(slot) = self.callbacks.on_button_released.get_mut(button) {
            *slot = Some(Arc::new(f));
        }
    }

    /// Register the state-changed slot (press/toggle transitions).
    pub fn on_state_changed<F>(&mut self, f: F)
    where
        F: Fn(bool) + 'static,
    {
        self.callbacks.on_state_changed = Some(Arc::new(f));
    }

    /// Register the editing-finished slot (Slider drag end).
    pub fn on_editing_finished<F>(&mut self, f: F)
    where
        F: Fn(bool) + 'static,
    {
        self.callbacks.on_editing_finished = Some(Arc::new(f));
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
