//! Widget - per-control drawing and event behavior.
//!
//! A [`Control`] holds geometry, flags and topology; what it looks like and
//! how it reacts to events is delegated to its widget. Every method has a
//! default, so a widget only overrides what it needs.
//!
//! # Event routing
//!
//! [`Widget::process_event`] receives every event routed through its control.
//! An override that reacts to an event must call
//! [`Control::propagate_event`] afterward, otherwise routing stops there.
//!
//! ```ignore
//! struct Counter { clicks: Cell<u32> }
//!
//! impl Widget for Counter {
//!     fn type_name(&self) -> &'static str { "Counter" }
//!
//!     fn process_event(&self, control: &Control, event: &Event, up: bool, down: bool) {
//!         if event.sender == *control && event.event_type() == EventType::Click {
//!             self.clicks.set(self.clicks.get() + 1);
//!         }
//!         control.propagate_event(event, up, down);
//!     }
//! }
//! ```

use crate::renderer::DrawContext;
use crate::state::Event;

use super::Control;

/// Drawing and event behavior attached to a control.
///
/// Callbacks receive the owning control; they may mutate the tree.
pub trait Widget {
    fn type_name(&self) -> &'static str {
        "Control"
    }

    /// Called before the control clips to its rect. Only with the PreDraw flag.
    fn pre_draw(&self, _control: &Control, _ctx: &mut DrawContext<'_>) {}

    /// Called clipped to the control rect. Only with the Draw flag.
    fn draw(&self, _control: &Control, _ctx: &mut DrawContext<'_>) {}

    /// Called after all children painted. Only with the PostDraw flag.
    fn post_draw(&self, _control: &Control, _ctx: &mut DrawContext<'_>) {}

    /// Per-frame hook, after the control's layout is current.
    fn tick(&self, _control: &Control, _time: f64, _delta: f64) {}

    fn process_event(&self, control: &Control, event: &Event, propagate_up: bool, propagate_down: bool) {
        control.propagate_event(event, propagate_up, propagate_down);
    }
}

/// Widget with no behavior of its own: draws nothing, routes events.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaseWidget;

impl Widget for BaseWidget {}
