//! Control tree engine.
//!
//! - [`Control`]: shared handle to a tree node (geometry, flags, state, children)
//! - [`WeakControl`]: non-owning back-reference
//! - [`Widget`]: per-control drawing and event behavior
//! - [`RootRequest`]: focus or exclusivity change queued by a widget for its root
//!
//! # Architecture
//!
//! Nodes are reference-counted. A parent owns its children; parent links and
//! the root's interaction references are weak, so dropping a subtree's last
//! strong handle frees it.
//!
//! ```text
//! Root control
//! ├── Window (docking=None, title=22)
//! │   ├── Toolbar (docking=Top)
//! │   └── Body    (docking=Client)
//! └── Popup (docking=None, parent-clip)
//! ```

mod control;
mod widget;

pub use control::*;
pub use widget::*;

/// Structural request that would break the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("cannot reparent control {child} under {parent}: it is the control itself or one of its descendants")]
    Cycle { child: u64, parent: u64 },
}
