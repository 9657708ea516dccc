//! Exclusive control - popup protocol.
//!
//! An exclusive control (an open menu, a dropdown list) is temporarily moved
//! to the root so it paints above everything and is not clipped by its
//! logical owner. Pressing a button anywhere outside its subtree releases it,
//! which puts it back under its original parent at its original position.

use crate::engine::{Control, WeakControl};
use crate::types::{ControlFlags, ControlState, Vec2};

use super::events::EventKind;
use super::root::Root;

/// What to restore when the exclusive control is released.
#[derive(Debug)]
pub(crate) struct ExclusiveEntry {
    control: WeakControl,
    /// Parent before activation; empty when the control was detached.
    old_parent: WeakControl,
    old_position: Vec2,
    had_parent_clip: bool,
}

impl Root {
    pub fn exclusive_control(&self) -> Option<Control> {
        self.exclusive.as_ref().and_then(|entry| entry.control.upgrade())
    }

    /// Make `control` exclusive, or release the current one with `None`.
    ///
    /// The root itself can never be exclusive.
    pub fn set_exclusive_control(&mut self, control: Option<&Control>) {
        if control == Some(&self.control) {
            warn!(control = self.control.id(), "root cannot be the exclusive control");
            return;
        }

        if self.exclusive_control().as_ref() == control {
            return;
        }

        if let Some(entry) = self.exclusive.take() {
            Self::release_exclusive(entry);
        }

        let Some(control) = control else {
            return;
        };

        let entry = ExclusiveEntry {
            control: control.downgrade(),
            old_parent: control.parent().map(|p| p.downgrade()).unwrap_or_default(),
            old_position: control.position(),
            had_parent_clip: control.has_flags(ControlFlags::PARENT_CLIP),
        };

        // Keep the control where it is on screen once it sits in the root's
        // padded space.
        let absolute = control.absolute_position();
        let origin = {
            let padding = self.control.padding();
            self.control.position()
                + Vec2::new(padding.left, padding.top + self.control.title_height())
        };
        let position = absolute - origin;

        control.set_position(position.x, position.y);
        control.add_state(ControlState::EXCLUSIVE);
        control.add_flags(ControlFlags::PARENT_CLIP);

        if let Err(err) = control.set_parent(Some(&self.control)) {
            warn!(%err, "exclusive control could not be moved to the root");
        }

        debug!(control = control.id(), ?position, "exclusive control activated");

        self.exclusive = Some(entry);
        control.send_event(EventKind::ExclusivityChanged);
    }

    fn release_exclusive(entry: ExclusiveEntry) {
        let Some(control) = entry.control.upgrade() else {
            return;
        };

        let old_parent = entry.old_parent.upgrade();
        if let Err(err) = control.set_parent(old_parent.as_ref()) {
            warn!(%err, "exclusive control could not return to its parent");
        }

        control.set_position(entry.old_position.x, entry.old_position.y);
        control.remove_state(ControlState::EXCLUSIVE);
        if !entry.had_parent_clip {
            control.remove_flags(ControlFlags::PARENT_CLIP);
        }

        debug!(control = control.id(), "exclusive control released");
        control.send_event(EventKind::ExclusivityChanged);
    }
}

// =============================================================================
// TESTS
// =============================================================================
