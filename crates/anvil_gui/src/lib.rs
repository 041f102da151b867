//! Retained-mode widget toolkit: frames, a per-widget pointer state
//! machine, offset-composed containers and callback dispatch.
//!
//! The crate is backend-agnostic. Hosts sample the pointer into an
//! [`anvil_core::PointerState`] once per tick, call [`Container::update`]
//! on their top-level containers, and replay the draw pass through any
//! [`Canvas`] implementation ([`CommandCanvas`] records the calls for
//! translation). The `winit-backend` feature adds [`Ui`], a thin adapter
//! over a winit event loop.

pub mod button;
pub mod canvas;
pub mod checkbox;
pub mod container;
pub mod custom;
pub mod element;
pub mod frame;
pub mod group;
pub mod radio_button;
pub mod registry;
pub mod slider;
pub mod style;

#[cfg(feature = "winit-backend")]
pub mod ui;

pub use button::Button;
pub use canvas::{Canvas, CommandCanvas, DrawCmd, ImageHandle};
pub use checkbox::Checkbox;
pub use container::Container;
pub use custom::CustomHooks;
pub use element::{Callbacks, Element, WidgetKind, PRIMARY_BUTTON};
pub use frame::Frame;
pub use group::Group;
pub use radio_button::RadioButton;
pub use registry::{WidgetBuilder, WidgetKey, Widgets};
pub use slider::{Orientation, Slider};
pub use style::Style;

#[cfg(feature = "winit-backend")]
pub use ui::Ui;

// the pointer sample and colour types come from the core crate; re-export
// so most hosts need a single `use`
pub use anvil_core::{Color, PointerState};
