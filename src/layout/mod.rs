//! Layout Module
//!
//! Docking layout, resize propagation and hit-testing for the control tree.
//!
//! # Architecture
//!
//! All three are methods on [`Control`](crate::engine::Control) and work in
//! the receiver's local coordinate space:
//!
//! 1. **Docking** (`docking`): content size, then arrangement of docked children
//! 2. **Resize** (`resize`): clamp a size delta against the subtree, then commit it
//! 3. **Hit-test** (`hit_test`): point to deepest control plus resize edges
//!
//! Layout is lazy: geometry setters mark controls dirty, and
//! [`Control::update_layout`](crate::engine::Control::update_layout) (run by
//! the root every tick and before every draw) brings dirty subtrees up to date.
//!
//! # Example
//!
//! ```ignore
//! use spark_widgets::{Control, types::Docking};
//!
//! let window = Control::new(None);
//! window.set_size(400, 300);
//!
//! let toolbar = Control::new(Some(&window));
//! toolbar.set_docking(Docking::Top);
//!
//! let body = Control::new(Some(&window));
//! body.set_docking(Docking::Client);
//!
//! window.update_layout();
//! let hit = window.control_at_point(200, 150);
//! ```

mod docking;
mod resize;

pub use docking::MAX_ARRANGE_PASSES;
pub use hit_test::HitTest;
