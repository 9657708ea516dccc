//! State Module - Events and the root interaction state machine
//!
//! - **Events** - Typed event payloads routed through the control tree
//! - **Root** - Owner of the tree's interaction state, per-frame tick and draw
//! - **Mouse** - Pointer mode state machine, hot and grabbed controls
//! - **Keyboard** - Held keys, modifiers, key dispatch to the focused control
//! - **Focus** - Focus and deep focus
//! - **Exclusive** - Popup protocol (temporary reparenting to the root)

mod events;
mod exclusive;
mod focus;
mod keyboard;
mod mouse;
mod root;

pub use events::*;
pub use keyboard::*;
pub use mouse::*;
pub use root::*;
