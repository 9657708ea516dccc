//! Focus System - Keyboard focus and deep focus
//!
//! One control at a time holds focus and receives key events. Every ancestor
//! of the focused control carries the DeepFocused state, so containers can
//! render "contains focus" highlights.
//!
//! A control flagged preserve-deep-focus refuses focus while one of its
//! descendants holds it: clicking a window's frame must not steal focus from
//! the text box inside.
//!
//! # Example
//!
//! ```ignore
//! use spark_widgets::{state::Root, Control, types::ControlFlags};
//!
//! let mut root = Root::new(800, 600);
//! let input = Control::new(Some(root.control()));
//! input.add_flags(ControlFlags::CAN_FOCUS);
//!
//! assert!(root.set_focused_control(Some(&input)));
//! root.blur();
//! ```

use crate::engine::Control;
use crate::types::{ControlFlags, ControlState};

use super::events::EventKind;
use super::root::Root;

impl Root {
    /// Focus `control`, or clear focus with `None`.
    ///
    /// Returns false when the request is refused: the target cannot focus, or
    /// it preserves deep focus and a descendant currently holds focus.
    pub fn set_focused_control(&mut self, control: Option<&Control>) -> bool {
        if let Some(target) = control {
            if !target.has_flags(ControlFlags::CAN_FOCUS) {
                return false;
            }

            if target.has_flags(ControlFlags::PRESERVE_DEEP_FOCUS)
                && target.has_state(ControlState::DEEP_FOCUSED)
            {
                return false;
            }
        }

        let old = self.focused.upgrade();
        if old.as_ref() == control {
            return true;
        }

        if let Some(old) = &old {
            old.remove_state(ControlState::FOCUSED);
            old.set_dirty(true);
            old.send_event(EventKind::FocusChanged);

            let mut ancestor = old.parent();
            while let Some(c) = ancestor {
                if c.has_state(ControlState::DEEP_FOCUSED) {
                    c.remove_state(ControlState::DEEP_FOCUSED);
                    c.set_dirty(true);
                }
                ancestor = c.parent();
            }
        }

        self.focused = control.map(Control::downgrade).unwrap_or_default();

        if let Some(new) = control {
            new.add_state(ControlState::FOCUSED);
            new.set_dirty(true);
            new.send_event(EventKind::FocusChanged);

            let mut ancestor = new.parent();
            while let Some(c) = ancestor {
                if !c.has_state(ControlState::DEEP_FOCUSED) {
                    c.add_state(ControlState::DEEP_FOCUSED);
                    c.set_dirty(true);
                }
                ancestor = c.parent();
            }
        }

        debug!(
            old = old.as_ref().map(Control::id),
            new = control.map(Control::id),
            "focus changed"
        );

        self.text_input.set(self.is_text_input_required());
        true
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.set_focused_control(None);
    }

    pub fn focused_control(&self) -> Option<Control> {
        self.focused.upgrade()
    }
}

// =============================================================================
// TESTS
// =============================================================================
