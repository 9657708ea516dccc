//! # spark-widgets
//!
//! Retained-mode widget toolkit core for Rust.
//!
//! A tree of [`Control`]s with docking layout, anchored resize propagation,
//! hit-testing and a root input state machine. Drawing and platform input are
//! left to the host: it feeds pointer and key events into a [`Root`], ticks it
//! once per frame and hands it a [`Canvas`] to paint on.
//!
//! ## Architecture
//!
//! ```text
//! host input ─▶ Root (mouse / keyboard / focus / exclusive)
//!                 │ events
//!                 ▼
//!               Control tree ─▶ layout (docking, resize) ─▶ renderer::traverse ─▶ Canvas
//! ```
//!
//! Root state that hosts commonly observe (pointer mode, cursor hint,
//! text-input requirement) is exposed as
//! [spark-signals](https://github.com/RLabs-Inc/spark-signals) signals.
//!
//! ## Modules
//!
//! - [`types`] - Geometry, colors, flag sets
//! - [`engine`] - Control handles and the widget trait
//! - [`layout`] - Docking layout, resize propagation, hit-testing
//! - [`state`] - Events and the root state machine
//! - [`renderer`] - Canvas trait and paint traversal
//! - [`theme`] - Shared styles and geometry metrics
//! - [`primitives`] - Window, panel and button presets

#[macro_use]
extern crate tracing;

pub mod engine;
pub mod layout;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{BaseWidget, Control, RootRequest, TreeError, WeakControl, Widget};

pub use layout::{HitTest, MAX_ARRANGE_PASSES};

pub use renderer::{traverse, Canvas, DrawContext};

pub use state::{
    // Events
    Event, EventKind, EventType,
    // Root
    Root,
    // Mouse
    cursor_for_edges, MouseMode, MouseState,
    // Keyboard
    Key, KeyboardState, ModKeys,
};

pub use theme::{Metrics, Style};

pub use primitives::{button, panel, window};
