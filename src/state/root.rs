//! Root - Top of the control tree and owner of all interaction state.
//!
//! The root wraps the topmost [`Control`] and holds everything that is global
//! to one UI: pointer mode and position, the hot/grabbed/focused/exclusive
//! controls, keyboard state, and the text cursor blink phase.
//!
//! Interaction references are weak: dropping a control from the tree never
//! leaves the root holding it alive.
//!
//! # API
//!
//! - `Root::new(width, height)` / `Root::with_metrics(width, height, metrics)`
//! - `tick(time, delta)` - Per-frame update (blink phase, dirty layout, widget ticks)
//! - `draw(canvas)` - Bring layout up to date and paint the tree
//! - `process_requests()` - Apply focus/exclusivity requests queued by widgets
//! - `mode_signal()`, `cursor_signal()`, `text_input_signal()` - Observable state
//!
//! Input entry points live next to the state they drive: `mouse`, `keyboard`,
//! `focus` and `exclusive`.

use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::engine::{Control, RootRequest, WeakControl};
use crate::renderer::{self, Canvas, DrawContext};
use crate::theme::{Metrics, Style};
use crate::types::{Borders, ControlFlags, Edges, MouseButtons, MouseCursor, Rect, Vec2};

use super::exclusive::ExclusiveEntry;
use super::keyboard::KeyboardState;
use super::mouse::{MouseMode, MouseState};

/// Root of a control tree.
pub struct Root {
    pub(super) control: Control,
    pub(super) metrics: Metrics,

    pub(super) position: Vec2,
    pub(super) buttons: MouseButtons,
    pub(super) mode: Signal<MouseMode>,
    pub(super) cursor: Signal<MouseCursor>,

    pub(super) keyboard: KeyboardState,
    pub(super) text_input: Signal<bool>,

    pub(super) hot: WeakControl,
    pub(super) hot_edges: Edges,

    pub(super) grabbed: WeakControl,
    pub(super) grabbed_edges: Edges,
    pub(super) grabbed_rect: Rect,
    pub(super) grabbed_position: Vec2,

    pub(super) focused: WeakControl,
    pub(super) exclusive: Option<ExclusiveEntry>,

    /// Text cursor phase in `[0, 2)`; visible while below 1.
    pub(super) cursor_blinker: f64,
}

impl Root {
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_metrics(width, height, Metrics::DEFAULT)
    }

    /// Root using `metrics` for hit-testing thresholds.
    pub fn with_metrics(width: i32, height: i32, metrics: Metrics) -> Self {
        let control = Control::new(None);
        control.accept_requests();
        control.add_flags(ControlFlags::CAN_DOCK_CHILDREN);
        control.set_margins(Borders::all(0));
        control.set_padding(Borders::all(0));
        control.set_style(Some(Rc::new(Style::default())));
        control.set_size(width, height);

        Self {
            control,
            metrics,
            position: Vec2::ZERO,
            buttons: MouseButtons::empty(),
            mode: signal(MouseMode::Normal),
            cursor: signal(MouseCursor::Default),
            keyboard: KeyboardState::default(),
            text_input: signal(false),
            hot: WeakControl::new(),
            hot_edges: Edges::empty(),
            grabbed: WeakControl::new(),
            grabbed_edges: Edges::empty(),
            grabbed_rect: Rect::default(),
            grabbed_position: Vec2::ZERO,
            focused: WeakControl::new(),
            exclusive: None,
            cursor_blinker: 0.0,
        }
    }

    /// The root control; attach top-level controls to it.
    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Resize the root control (e.g. when the host window resizes).
    pub fn set_size(&self, width: i32, height: i32) {
        self.control.set_size(width, height);
    }

    pub fn mode(&self) -> MouseMode {
        self.mode.get()
    }

    pub fn cursor(&self) -> MouseCursor {
        self.cursor.get()
    }

    /// Observable pointer mode.
    pub fn mode_signal(&self) -> Signal<MouseMode> {
        self.mode.clone()
    }

    /// Observable cursor hint, for driving the platform cursor.
    pub fn cursor_signal(&self) -> Signal<MouseCursor> {
        self.cursor.clone()
    }

    /// Observable text-input requirement, for showing an on-screen keyboard.
    pub fn text_input_signal(&self) -> Signal<bool> {
        self.text_input.clone()
    }

    pub fn cursor_blinker(&self) -> f64 {
        self.cursor_blinker
    }

    /// Snapshot of the pointer state.
    pub fn mouse_state(&self) -> MouseState {
        MouseState {
            mode: self.mode.get(),
            position: self.position,
            buttons: self.buttons,
            cursor: self.cursor.get(),
        }
    }

    /// Rect of the grabbed control when the current grab started.
    pub fn grabbed_rect(&self) -> Rect {
        self.grabbed_rect
    }

    /// Advance one frame: blink phase, then dirty layout and widget ticks,
    /// then any requests the widgets queued.
    pub fn tick(&mut self, time: f64, delta: f64) {
        self.cursor_blinker = (self.cursor_blinker + 2.0 * delta).rem_euclid(2.0);
        self.control.tick(time, delta);
        self.process_requests();
    }

    /// Apply the focus and exclusivity requests queued by widgets, in order,
    /// then refresh the text-input signal.
    ///
    /// Every input entry point and [`Root::tick`] call this before returning.
    pub fn process_requests(&mut self) {
        while let Some(request) = self.control.pop_request() {
            trace!(?request, "root request");
            match request {
                RootRequest::Focus(target) => {
                    self.set_focused_control(target.as_ref());
                }
                RootRequest::Exclusive(target) => self.set_exclusive_control(target.as_ref()),
            }
        }

        // Flags of the focused control may have changed since focus was set
        let required = self.is_text_input_required();
        if self.text_input.get() != required {
            self.text_input.set(required);
        }
    }

    /// Bring layout up to date and paint the whole tree onto `canvas`.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.control.update_layout();

        let style = self.control.get_style(false).unwrap_or_default();
        let mut ctx = DrawContext::new(canvas, style, self.cursor_blinker);
        renderer::traverse(&mut ctx, &self.control);
    }
}

impl Control {
    /// Per-frame update of this subtree: layout if dirty, then the widget's
    /// tick, then the children.
    pub fn tick(&self, time: f64, delta: f64) {
        if self.is_dirty() {
            self.layout();
            self.clear_dirty();
        }

        self.widget().tick(self, time, delta);

        for child in self.children() {
            child.tick(time, delta);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
