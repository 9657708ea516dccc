//! Mouse Module - Pointer state machine
//!
//! The root is always in exactly one [`MouseMode`]:
//!
//! ```text
//! Normal --(left down, move region)--> Moving
//! Normal --(left down, resize edges)--> Resizing
//! Normal --(left down, no edges)-----> Down
//! Down | Moving | Resizing --(button up)--> Normal
//! ```
//!
//! Every mode accepts pointer motion and reports it to the grabbed control,
//! or to the hot one when nothing is grabbed.
//!
//! # API
//!
//! - `Root::event_mouse_motion(x, y)` - Feed a pointer position (root space)
//! - `Root::event_mouse_button_down(button)` - Feed a button press
//! - `Root::event_mouse_button_up(button)` - Feed a button release
//! - `Root::hot_control()` / `Root::grabbed_control()` - Current targets
//!
//! # Example
//!
//! ```ignore
//! use spark_widgets::{state::Root, types::MouseButton};
//!
//! let mut root = Root::new(800, 600);
//! root.event_mouse_motion(120, 40);
//! root.event_mouse_button_down(MouseButton::Left);
//! root.event_mouse_button_up(MouseButton::Left);
//! ```

use crate::engine::Control;
use crate::types::{ControlFlags, ControlState, Docking, Edges, MouseButton, MouseButtons, MouseCursor, Vec2};

use super::events::EventKind;
use super::root::Root;

// =============================================================================
// TYPES
// =============================================================================

/// Pointer interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseMode {
    #[default]
    Normal,
    /// A control is pressed and waiting for release.
    Down,
    /// A control is being dragged by its move region.
    Moving,
    /// A control is being resized by one or two edges.
    Resizing,
}

/// Snapshot of the pointer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseState {
    pub mode: MouseMode,
    pub position: Vec2,
    pub buttons: MouseButtons,
    pub cursor: MouseCursor,
}

/// Cursor hint for hovering the given hit-test edges.
pub fn cursor_for_edges(edges: Edges) -> MouseCursor {
    let edges = edges.resize_edges();

    if edges == Edges::TOP || edges == Edges::BOTTOM {
        MouseCursor::ResizeV
    } else if edges == Edges::LEFT || edges == Edges::RIGHT {
        MouseCursor::ResizeH
    } else if edges == Edges::TOP_LEFT || edges == Edges::BOTTOM_RIGHT {
        MouseCursor::ResizeLR
    } else if edges == Edges::TOP_RIGHT || edges == Edges::BOTTOM_LEFT {
        MouseCursor::ResizeRL
    } else {
        MouseCursor::Default
    }
}

// =============================================================================
// EVENT HANDLERS
// =============================================================================

impl Root {
    /// Feed a pointer position in root coordinates.
    pub fn event_mouse_motion(&mut self, x: i32, y: i32) {
        let position = Vec2::new(x, y);
        let mut delta = position - self.position;

        let origin = self.control.position();
        let hit = self
            .control
            .control_at_point_with(x - origin.x, y - origin.y, &self.metrics);

        match self.mode.get() {
            MouseMode::Normal => {
                self.set_hot_control(Some(&hit.control), hit.edges);
                self.cursor.set(cursor_for_edges(hit.edges));
            }
            MouseMode::Down => {
                if let Some(grabbed) = self.grabbed.upgrade() {
                    let pressed = grabbed.has_state(ControlState::DOWN);
                    if hit.control != grabbed && pressed {
                        grabbed.remove_state(ControlState::DOWN);
                        grabbed.set_dirty(true);
                    } else if hit.control == grabbed && !pressed {
                        grabbed.add_state(ControlState::DOWN);
                        grabbed.set_dirty(true);
                    }
                }
            }
            MouseMode::Moving => {
                if let Some(grabbed) = self.grabbed.upgrade() {
                    grabbed.set_position(grabbed.x() + delta.x, grabbed.y() + delta.y);
                    self.cursor.set(MouseCursor::Move);
                    grabbed.send_event(EventKind::Moving { delta });
                }
            }
            MouseMode::Resizing => {
                if let Some(grabbed) = self.grabbed.upgrade() {
                    delta = self.resize_grabbed(&grabbed, delta);
                    grabbed.send_event(EventKind::Resizing {
                        delta,
                        edges: self.grabbed_edges,
                    });
                }
            }
        }

        if let Some(sender) = self.event_target() {
            let absolute = sender.absolute_position();
            sender.send_event(EventKind::MouseMotion {
                position: position - absolute,
                grabbed: self.grabbed_position - absolute,
                delta,
                buttons: self.buttons,
            });
        }

        self.position = position;
        self.process_requests();
    }

    /// Feed a button press. Resets the text cursor blink phase.
    pub fn event_mouse_button_down(&mut self, button: MouseButton) {
        self.cursor_blinker = 0.0;
        self.buttons |= button.flag();

        // Interacting outside the exclusive control's subtree dismisses it
        if let Some(exclusive) = self.exclusive_control() {
            let inside = self
                .hot
                .upgrade()
                .is_some_and(|hot| hot == exclusive || hot.has_ancestor(&exclusive));

            if !inside {
                self.set_exclusive_control(None);
            }
        }

        if self.mode.get() == MouseMode::Normal && button == MouseButton::Left {
            if let Some(hot) = self.hot.upgrade() {
                if hot.has_flags(ControlFlags::CAN_FOCUS) {
                    self.set_focused_control(Some(&hot));
                }

                let edges = self.hot_edges;
                if edges.is_move() {
                    self.set_grabbed_control(Some(&hot), edges);
                    self.set_mode(MouseMode::Moving);
                } else if !edges.resize_edges().is_empty() {
                    self.set_grabbed_control(Some(&hot), edges.resize_edges());
                    self.set_mode(MouseMode::Resizing);
                } else {
                    self.set_grabbed_control(Some(&hot), Edges::empty());
                    hot.add_state(ControlState::DOWN);
                    self.set_mode(MouseMode::Down);
                }
            }
        }

        self.send_button_event(true, button);
        self.process_requests();
    }

    /// Feed a button release. Ends any grab and refreshes the hot control.
    pub fn event_mouse_button_up(&mut self, button: MouseButton) {
        self.buttons.remove(button.flag());

        if self.mode.get() == MouseMode::Down {
            if let Some(grabbed) = self.grabbed.upgrade() {
                let clicked = self.hot.is(&grabbed) && grabbed.has_state(ControlState::DOWN);
                grabbed.remove_state(ControlState::DOWN);

                if clicked {
                    trace!(control = grabbed.id(), "click");
                    grabbed.send_event(EventKind::Click);
                }
            }
        }

        self.send_button_event(false, button);

        self.set_grabbed_control(None, Edges::empty());
        self.set_mode(MouseMode::Normal);

        let position = self.position;
        self.event_mouse_motion(position.x, position.y);
    }

    pub fn hot_control(&self) -> Option<Control> {
        self.hot.upgrade()
    }

    pub fn grabbed_control(&self) -> Option<Control> {
        self.grabbed.upgrade()
    }

    fn event_target(&self) -> Option<Control> {
        self.grabbed.upgrade().or_else(|| self.hot.upgrade())
    }

    fn send_button_event(&self, down: bool, button: MouseButton) {
        if let Some(sender) = self.event_target() {
            let absolute = sender.absolute_position();
            sender.send_event(EventKind::MouseButton {
                down,
                position: self.position - absolute,
                button,
                buttons: self.buttons,
            });
        }
    }

    fn set_mode(&self, mode: MouseMode) {
        if self.mode.get() != mode {
            trace!(?mode, "mouse mode");
            self.mode.set(mode);
        }
    }

    /// Apply a resize drag to the grabbed control. Returns the committed delta.
    ///
    /// A docked control also resizes its parent's docking borders, so the
    /// parent clamps the mirrored delta too.
    fn resize_grabbed(&self, grabbed: &Control, mut delta: Vec2) -> Vec2 {
        let edges = self.grabbed_edges;

        if !edges.intersects(Edges::TOP_OR_BOTTOM) {
            delta.y = 0;
        }
        if !edges.intersects(Edges::LEFT_OR_RIGHT) {
            delta.x = 0;
        }
        if edges.contains(Edges::LEFT) {
            delta.x = -delta.x;
        }
        if edges.contains(Edges::TOP) {
            delta.y = -delta.y;
        }

        delta = grabbed.clamp_resize_step(delta);

        let docked_parent = match grabbed.docking() {
            Docking::None => None,
            _ => grabbed.parent(),
        };

        if let Some(parent) = &docked_parent {
            delta = -parent.clamp_resize_step(-delta);
        }

        // Dragging a near edge keeps the far edge in place
        let shift = Vec2::new(
            if edges.contains(Edges::LEFT) { -delta.x } else { 0 },
            if edges.contains(Edges::TOP) { -delta.y } else { 0 },
        );
        grabbed.offset_position(shift.x, shift.y);
        grabbed.resize_step(delta);
        grabbed.set_dirty(true);

        if let Some(parent) = &docked_parent {
            parent.resize_step_children(-delta);
            parent.layout();
        }

        delta
    }

    // =========================================================================
    // Hot and grabbed controls
    // =========================================================================

    /// Change the hot control, notifying the outgoing and incoming controls.
    pub(super) fn set_hot_control(&mut self, control: Option<&Control>, edges: Edges) {
        let old = self.hot.upgrade();

        if old.as_ref() != control {
            if let Some(old) = &old {
                old.remove_state(ControlState::HOT);
                old.set_dirty(true);
                old.send_event(EventKind::HotChanged);
            }

            self.hot = control.map(Control::downgrade).unwrap_or_default();

            if let Some(new) = control {
                trace!(control = new.id(), "hot");
                new.add_state(ControlState::HOT);
                new.set_dirty(true);
                new.send_event(EventKind::HotChanged);
            }
        }

        self.hot_edges = edges;
    }

    /// Start or end a grab.
    ///
    /// The move sentinel adds the Moving state, resize edges add Resizing, a
    /// plain press adds neither. Every always-bring-to-front control from the
    /// grabbed one up to the root is raised within its parent.
    pub(super) fn set_grabbed_control(&mut self, control: Option<&Control>, edges: Edges) {
        let old = self.grabbed.upgrade();
        if old.as_ref() == control {
            return;
        }

        if let Some(old) = &old {
            old.remove_state(
                ControlState::MOVING | ControlState::RESIZING | ControlState::DOWN | ControlState::GRABBED,
            );
            old.set_dirty(true);
        }

        self.grabbed = control.map(Control::downgrade).unwrap_or_default();
        self.grabbed_edges = edges;

        let Some(control) = control else {
            return;
        };

        trace!(control = control.id(), ?edges, "grab");

        if edges.is_move() {
            control.add_state(ControlState::MOVING);
        } else if !edges.resize_edges().is_empty() {
            control.add_state(ControlState::RESIZING);
        }

        self.grabbed_rect = control.rect();
        self.grabbed_position = self.position;

        control.add_state(ControlState::GRABBED);
        control.set_dirty(true);

        let mut current = Some(control.clone());
        while let Some(c) = current {
            if c.has_flags(ControlFlags::ALWAYS_BRING_TO_FRONT) {
                c.bring_to_front();
            }
            current = c.parent();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
