//! Events - Typed notifications routed through the control tree.
//!
//! An [`Event`] carries the control that originated it and an [`EventKind`]
//! payload. Events are delivered with [`Control::process_event`] and keep
//! moving through [`Control::propagate_event`]:
//!
//! - **up**: from the sender through every ancestor (the default for
//!   notifications sent with [`Control::send_event`])
//! - **down**: from a control into all its descendants
//!
//! Coordinates in pointer events are relative to the receiving control's
//! absolute position.

use crate::engine::Control;
use crate::types::{Edges, MouseButton, MouseButtons, Vec2};

use super::keyboard::{Key, ModKeys};

/// Event payload, one variant per event type.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    MouseMotion {
        position: Vec2,
        /// Pointer position when the current grab started.
        grabbed: Vec2,
        delta: Vec2,
        buttons: MouseButtons,
    },
    MouseButton {
        down: bool,
        position: Vec2,
        button: MouseButton,
        /// Buttons held after this press or release.
        buttons: MouseButtons,
    },
    Key {
        down: bool,
        key: Key,
        character: Option<char>,
        mod_keys: ModKeys,
    },
    Resizing {
        delta: Vec2,
        edges: Edges,
    },
    SizeChanged,
    Moving {
        delta: Vec2,
    },
    FocusChanged,
    HotChanged,
    Click,
    TextChanged,
    ValueChanged,
    ParentChanged {
        old_parent: Option<Control>,
    },
    ExclusivityChanged,
}

/// Payload-free tag of an [`EventKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    MouseMotion,
    MouseButton,
    Key,
    Resizing,
    SizeChanged,
    Moving,
    FocusChanged,
    HotChanged,
    Click,
    TextChanged,
    ValueChanged,
    ParentChanged,
    ExclusivityChanged,
}

/// An event and the control that sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub sender: Control,
    pub kind: EventKind,
}

impl Event {
    pub fn new(sender: Control, kind: EventKind) -> Self {
        Self { sender, kind }
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::MouseMotion { .. } => EventType::MouseMotion,
            EventKind::MouseButton { .. } => EventType::MouseButton,
            EventKind::Key { .. } => EventType::Key,
            EventKind::Resizing { .. } => EventType::Resizing,
            EventKind::SizeChanged => EventType::SizeChanged,
            EventKind::Moving { .. } => EventType::Moving,
            EventKind::FocusChanged => EventType::FocusChanged,
            EventKind::HotChanged => EventType::HotChanged,
            EventKind::Click => EventType::Click,
            EventKind::TextChanged => EventType::TextChanged,
            EventKind::ValueChanged => EventType::ValueChanged,
            EventKind::ParentChanged { .. } => EventType::ParentChanged,
            EventKind::ExclusivityChanged => EventType::ExclusivityChanged,
        }
    }
}
