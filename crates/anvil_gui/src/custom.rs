//! Caller-defined widget behaviour.

use std::sync::Arc;

use crate::canvas::Canvas;
use crate::element::Element;

/// Handler set for a custom widget.
///
/// Covers the full capability surface of the built-in variants; every slot
/// is optional and unset slots are skipped. Handlers that need state
/// capture it in the closure (an `Rc<RefCell<..>>` works well), the same
/// way hosts wire the plain callback slots.
///
/// The draw handler receives the widget itself so it can read geometry,
/// style and interaction state; without one the widget falls back to the
/// bounding-box outline.
#[derive(Clone, Default)]
pub struct CustomHooks {
    pub on_enter: Option<Arc<dyn Fn()>>,
    pub on_exit: Option<Arc<dyn Fn()>>,
    pub on_pressed: Option<Arc<dyn Fn(usize)>>,
    pub on_released: Option<Arc<dyn Fn(usize)>>,
    pub track: Option<Arc<dyn Fn(f32, f32)>>,
    pub draw: Option<Arc<dyn Fn(&Element, &mut dyn Canvas)>>,
}

impl CustomHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on the pointer's Outside to Inside transition.
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_enter = Some(Arc::new(f));
        self
    }

    /// Called on the pointer's Inside to Outside transition.
    pub fn on_exit<F>(mut self, f: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_exit = Some(Arc::new(f));
        self
    }

    /// Called with the button index on a press that lands on the widget.
    pub fn on_pressed<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + 'static,
    {
        self.on_pressed = Some(Arc::new(f));
        self
    }

    /// Called with the button index on every release of a held button.
    pub fn on_released<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + 'static,
    {
        self.on_released = Some(Arc::new(f));
        self
    }

    /// Called with local pointer coordinates each tick a button is held.
    pub fn track<F>(mut self, f: F) -> Self
    where
        F: Fn(f32, f32) + 'static,
    {
        self.track = Some(Arc::new(f));
        self
    }

    /// Replaces the widget's drawing entirely.
    pub fn draw<F>(mut self, f: F) -> Self
    where
        F: Fn(&Element, &mut dyn Canvas) + 'static,
    {
        self.draw = Some(Arc::new(f));
        self
    }
}
