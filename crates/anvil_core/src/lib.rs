//! Foundation types shared by the Anvil UI toolkit and its hosts.
//!
//! This crate deliberately stays small: an RGBA [`Color`] and the per-tick
//! pointer sample ([`PointerState`]) that the widget layer consumes. Hosts
//! that run under `winit` can enable the `winit` feature and feed window
//! events straight into the pointer state; everything else works headless.

pub mod color;
pub mod input;

pub use color::Color;
pub use input::{PointerState, BUTTON_COUNT};

// Re-export the button enum when the winit bridge is enabled so callers
// don't need their own winit dependency just to name a button.
#[cfg(feature = "winit")]
pub use input::MouseButton;

// glam is the workspace math crate; re-exported for convenience.
pub use glam;
