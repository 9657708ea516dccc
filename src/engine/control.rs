//! Control Node - The fundamental tree element.
//!
//! A [`Control`] is a cheap, clonable handle to one node of the control tree.
//! Parents own their children (`Vec<Control>`, strong); every back-link
//! (parent, and the root's hot/grabbed/focused/exclusive references) is a
//! [`WeakControl`], so the tree never forms a reference cycle.
//!
//! # Ownership
//!
//! ```text
//! Root ──strong──▶ Control ──strong──▶ child Control
//!                     ▲                    │
//!                     └──────weak──────────┘ (parent)
//! ```
//!
//! A node is destroyed when the last strong handle goes away: its parent's
//! children list, or any handle held by the application.
//!
//! # Borrowing
//!
//! Node data sits behind a `RefCell`. Methods borrow it only for the
//! duration of a field read or write and never across calls into other
//! nodes or widget callbacks, so widgets may freely mutate the tree while
//! handling events.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::state::{Event, EventKind};
use crate::theme::{Metrics, Style};
use crate::types::{Borders, ControlFlags, ControlState, Docking, Edges, Rect, Vec2};

use super::widget::{BaseWidget, Widget};
use super::TreeError;

// =============================================================================
// Node data
// =============================================================================

thread_local! {
    /// Counter for generating unique control ids.
    static ID_COUNTER: Cell<u64> = const { Cell::new(0) };
}

fn next_id() -> u64 {
    ID_COUNTER.with(|counter| {
        let id = counter.get();
        counter.set(id + 1);
        id
    })
}

pub(crate) struct ControlData {
    pub(crate) id: u64,
    /// Geometry or flags changed and layout has not run since.
    pub(crate) dirty: bool,
    pub(crate) flags: ControlFlags,
    pub(crate) state: ControlState,
    pub(crate) text: String,
    pub(crate) parent: Weak<RefCell<ControlData>>,
    /// Z-order: paint order and iteration order.
    pub(crate) children: Vec<Control>,
    pub(crate) title_height: i32,
    /// Position and size in the parent's local space.
    pub(crate) rect: Rect,
    pub(crate) minimum_size: Vec2,
    pub(crate) maximum_size: Vec2,
    /// Area required to fit all children, after padding, title and docking.
    pub(crate) content_rect: Rect,
    /// Translation applied to undocked children (the left/top docking borders).
    pub(crate) undocked_offset: Vec2,
    pub(crate) margins: Borders,
    pub(crate) padding: Borders,
    pub(crate) docking: Docking,
    pub(crate) anchors: Edges,
    pub(crate) style: Option<Rc<Style>>,
    pub(crate) alpha: f32,
    pub(crate) widget: Rc<dyn Widget>,
    /// Pending root requests; only the control owned by a `Root` has a queue.
    pub(crate) requests: Option<VecDeque<RootRequest>>,
}

impl ControlData {
    fn new(widget: Rc<dyn Widget>) -> Self {
        let metrics = Metrics::DEFAULT;
        Self {
            id: next_id(),
            dirty: true,
            flags: ControlFlags::VISIBLE | ControlFlags::ENABLED | ControlFlags::DRAW,
            state: ControlState::empty(),
            text: String::new(),
            parent: Weak::new(),
            children: Vec::new(),
            title_height: 0,
            rect: Rect::new(0, 0, metrics.default_control_size.x, metrics.default_control_size.y),
            minimum_size: Vec2::ZERO,
            maximum_size: Vec2::ZERO,
            content_rect: Rect::default(),
            undocked_offset: Vec2::ZERO,
            margins: Borders::all(metrics.default_margin),
            padding: Borders::all(metrics.default_padding),
            docking: Docking::None,
            anchors: Edges::TOP_LEFT,
            style: None,
            alpha: 1.0,
            widget,
            requests: None,
        }
    }
}

// =============================================================================
// Handles
// =============================================================================

/// Shared handle to a control. Cloning shares the node.
///
/// Equality is identity: two handles are equal when they point at the same node.
#[derive(Clone)]
pub struct Control {
    node: Rc<RefCell<ControlData>>,
}

/// Non-owning handle to a control.
#[derive(Clone, Default)]
pub struct WeakControl {
    node: Weak<RefCell<ControlData>>,
}

impl WeakControl {
    /// A weak handle that never upgrades.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upgrade(&self) -> Option<Control> {
        self.node.upgrade().map(|node| Control { node })
    }

    /// True when this handle refers to `control`.
    pub fn is(&self, control: &Control) -> bool {
        Weak::ptr_eq(&self.node, &Rc::downgrade(&control.node))
    }
}

impl fmt::Debug for WeakControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(control) => write!(f, "WeakControl({})", control.id()),
            None => f.write_str("WeakControl(None)"),
        }
    }
}

impl PartialEq for Control {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Control {}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.node.borrow();
        f.debug_struct("Control")
            .field("id", &d.id)
            .field("type", &d.widget.type_name())
            .field("rect", &d.rect)
            .field("docking", &d.docking)
            .field("children", &d.children.len())
            .finish()
    }
}

// =============================================================================
// Construction and identity
// =============================================================================

impl Control {
    /// Create a plain control, attached to `parent` if given.
    pub fn new(parent: Option<&Control>) -> Control {
        Self::with_widget(parent, BaseWidget)
    }

    /// Create a control whose drawing and event handling is done by `widget`.
    ///
    /// The widget is installed before the control is attached, so it receives
    /// the initial ParentChanged event.
    pub fn with_widget(parent: Option<&Control>, widget: impl Widget + 'static) -> Control {
        let control = Control {
            node: Rc::new(RefCell::new(ControlData::new(Rc::new(widget)))),
        };

        if let Some(parent) = parent {
            // A fresh node has no descendants, so this cannot form a cycle.
            let _ = control.set_parent(Some(parent));
        }

        control
    }

    pub fn id(&self) -> u64 {
        self.data().id
    }

    pub fn downgrade(&self) -> WeakControl {
        WeakControl {
            node: Rc::downgrade(&self.node),
        }
    }

    pub(crate) fn data(&self) -> Ref<'_, ControlData> {
        self.node.borrow()
    }

    pub(crate) fn data_mut(&self) -> RefMut<'_, ControlData> {
        self.node.borrow_mut()
    }

    /// The widget handling this control's drawing and events.
    pub fn widget(&self) -> Rc<dyn Widget> {
        self.data().widget.clone()
    }

    /// Type name reported by the widget.
    pub fn type_name(&self) -> &'static str {
        self.data().widget.type_name()
    }
}

// =============================================================================
// Flags, state, dirty propagation
// =============================================================================

impl Control {
    pub fn flags(&self) -> ControlFlags {
        self.data().flags
    }

    pub fn set_flags(&self, flags: ControlFlags) {
        let changed = {
            let mut d = self.data_mut();
            let changed = d.flags != flags;
            d.flags = flags;
            changed
        };

        if changed {
            self.set_dirty(true);
        }
    }

    pub fn add_flags(&self, flags: ControlFlags) {
        self.set_flags(self.flags() | flags);
    }

    pub fn remove_flags(&self, flags: ControlFlags) {
        self.set_flags(self.flags() - flags);
    }

    /// True when every bit in `flags` is set.
    pub fn has_flags(&self, flags: ControlFlags) -> bool {
        self.data().flags.contains(flags)
    }

    pub fn state(&self) -> ControlState {
        self.data().state
    }

    /// True when every bit in `state` is set.
    pub fn has_state(&self, state: ControlState) -> bool {
        self.data().state.contains(state)
    }

    pub(crate) fn add_state(&self, state: ControlState) {
        self.data_mut().state.insert(state);
    }

    pub(crate) fn remove_state(&self, state: ControlState) {
        self.data_mut().state.remove(state);
    }

    pub fn is_dirty(&self) -> bool {
        self.data().dirty
    }

    /// Mark (or clear) the dirty flag.
    ///
    /// Marking walks up the ancestors until one is already dirty, then down
    /// into every descendant. Recursion stops at nodes already holding `set`.
    pub fn set_dirty(&self, set: bool) {
        {
            let mut d = self.data_mut();
            if d.dirty == set {
                return;
            }
            d.dirty = set;
        }

        if set {
            let mut ancestor = self.parent();
            while let Some(control) = ancestor {
                {
                    let mut d = control.data_mut();
                    if d.dirty {
                        break;
                    }
                    d.dirty = true;
                }
                ancestor = control.parent();
            }
        }

        for child in self.children() {
            child.set_dirty(set);
        }
    }

    /// Clear only this node's dirty flag, after its layout ran.
    pub(crate) fn clear_dirty(&self) {
        self.data_mut().dirty = false;
    }

    /// Show or hide the control.
    pub fn show(&self, visible: bool) {
        if visible {
            self.add_flags(ControlFlags::VISIBLE);
        } else {
            self.remove_flags(ControlFlags::VISIBLE);
        }
    }

    /// Visible flag of this control; with `recursive`, of the whole ancestor chain.
    pub fn is_visible(&self, recursive: bool) -> bool {
        let own = self.has_flags(ControlFlags::VISIBLE);
        if !recursive || !own {
            return own;
        }

        match self.parent() {
            Some(parent) => parent.is_visible(true),
            None => own,
        }
    }

    /// Enable or disable; mirrors the Enabled flag into the Disabled state bit.
    pub fn enable(&self, enabled: bool) {
        if enabled {
            self.remove_state(ControlState::DISABLED);
            self.add_flags(ControlFlags::ENABLED);
        } else {
            self.add_state(ControlState::DISABLED);
            self.remove_flags(ControlFlags::ENABLED);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.has_flags(ControlFlags::ENABLED)
    }
}

// =============================================================================
// Topology
// =============================================================================

impl Control {
    pub fn parent(&self) -> Option<Control> {
        self.data().parent.upgrade().map(|node| Control { node })
    }

    /// Move this control under `parent` (or detach it with `None`).
    ///
    /// Appends to the new parent's children, removes from the old parent's,
    /// marks dirty, and fires ParentChanged carrying the previous parent.
    pub fn set_parent(&self, parent: Option<&Control>) -> Result<(), TreeError> {
        let old_parent = self.parent();
        if old_parent.as_ref() == parent {
            return Ok(());
        }

        if let Some(parent) = parent {
            if parent == self || parent.has_ancestor(self) {
                warn!(control = self.id(), parent = parent.id(), "rejected reparent into own subtree");
                return Err(TreeError::Cycle {
                    child: self.id(),
                    parent: parent.id(),
                });
            }
        }

        self.data_mut().parent = parent.map_or_else(Weak::new, |p| Rc::downgrade(&p.node));
        self.set_dirty(true);

        if let Some(parent) = parent {
            parent.add_child(self);
        }
        if let Some(old) = &old_parent {
            old.remove_child(self);
        }

        debug!(
            control = self.id(),
            old_parent = old_parent.as_ref().map(Control::id),
            new_parent = parent.map(Control::id),
            "parent changed"
        );

        self.send_event(EventKind::ParentChanged { old_parent });
        Ok(())
    }

    /// True when `ancestor` appears anywhere above this control.
    pub fn has_ancestor(&self, ancestor: &Control) -> bool {
        let mut current = self.parent();
        while let Some(control) = current {
            if &control == ancestor {
                return true;
            }
            current = control.parent();
        }
        false
    }

    /// The topmost ancestor (this control if it has no parent).
    pub fn root(&self) -> Control {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Number of ancestors.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(control) = current {
            depth += 1;
            current = control.parent();
        }
        depth
    }

    /// Snapshot of the children, in z-order.
    pub fn children(&self) -> Vec<Control> {
        self.data().children.clone()
    }

    pub fn child(&self, index: usize) -> Option<Control> {
        self.data().children.get(index).cloned()
    }

    pub fn child_count(&self) -> usize {
        self.data().children.len()
    }

    /// Detach every child. Each receives ParentChanged.
    pub fn clear(&self) {
        for child in self.children() {
            // Detaching can never form a cycle.
            let _ = child.set_parent(None);
        }
    }

    fn add_child(&self, child: &Control) {
        self.data_mut().children.push(child.clone());
        self.set_dirty(true);
    }

    fn remove_child(&self, child: &Control) {
        let removed = {
            let mut d = self.data_mut();
            match d.children.iter().position(|c| c == child) {
                Some(index) => {
                    d.children.remove(index);
                    true
                }
                None => false,
            }
        };

        if removed {
            self.set_dirty(true);
        }
    }

    /// Move this control to the end of its parent's children (painted last, hit first).
    pub fn bring_to_front(&self) {
        let Some(parent) = self.parent() else {
            return;
        };

        let mut d = parent.data_mut();
        if let Some(index) = d.children.iter().position(|c| c == self) {
            let control = d.children.remove(index);
            d.children.push(control);
        }
    }
}

// =============================================================================
// Geometry accessors
// =============================================================================

impl Control {
    pub fn rect(&self) -> Rect {
        self.data().rect
    }

    pub fn position(&self) -> Vec2 {
        self.data().rect.position()
    }

    pub fn size(&self) -> Vec2 {
        self.data().rect.size()
    }

    pub fn x(&self) -> i32 {
        self.data().rect.x
    }

    pub fn y(&self) -> i32 {
        self.data().rect.y
    }

    pub fn width(&self) -> i32 {
        self.data().rect.width
    }

    pub fn height(&self) -> i32 {
        self.data().rect.height
    }

    pub fn set_position(&self, x: i32, y: i32) {
        let changed = {
            let mut d = self.data_mut();
            let mut position = d.rect.position();
            let changed = position.set(x, y);
            d.rect.x = position.x;
            d.rect.y = position.y;
            changed
        };

        if changed {
            self.set_dirty(true);
        }
    }

    /// Move without marking dirty; used while a resize is being committed.
    pub(crate) fn offset_position(&self, dx: i32, dy: i32) {
        let mut d = self.data_mut();
        d.rect.x += dx;
        d.rect.y += dy;
    }

    /// Position in the root's coordinate space.
    pub fn absolute_position(&self) -> Vec2 {
        let mut position = self.position();
        let mut child = self.clone();

        while let Some(parent) = child.parent() {
            {
                let p = parent.data();
                position.x += p.rect.x + p.padding.left;
                position.y += p.rect.y + p.padding.top + p.title_height;
            }

            if child.child_group() == ChildGroup::Undocked {
                position += parent.undocked_offset();
            }

            child = parent;
        }

        position
    }

    pub fn minimum_size(&self) -> Vec2 {
        self.data().minimum_size
    }

    pub fn maximum_size(&self) -> Vec2 {
        self.data().maximum_size
    }

    pub fn title_height(&self) -> i32 {
        self.data().title_height
    }

    pub fn set_title_height(&self, height: i32) {
        let changed = {
            let mut d = self.data_mut();
            let changed = d.title_height != height;
            d.title_height = height;
            changed
        };

        if changed {
            self.set_dirty(true);
        }
    }

    pub fn margins(&self) -> Borders {
        self.data().margins
    }

    pub fn set_margins(&self, margins: Borders) {
        let changed = self.data_mut().margins.set(margins);
        if changed {
            self.set_dirty(true);
        }
    }

    pub fn padding(&self) -> Borders {
        self.data().padding
    }

    pub fn set_padding(&self, padding: Borders) {
        let changed = self.data_mut().padding.set(padding);
        if changed {
            self.set_dirty(true);
        }
    }

    pub fn docking(&self) -> Docking {
        self.data().docking
    }

    pub fn set_docking(&self, docking: Docking) {
        let changed = {
            let mut d = self.data_mut();
            let changed = d.docking != docking;
            d.docking = docking;
            changed
        };

        if changed {
            self.set_dirty(true);
        }
    }

    pub fn anchors(&self) -> Edges {
        self.data().anchors
    }

    pub fn set_anchors(&self, anchors: Edges) {
        self.data_mut().anchors = anchors.resize_edges();
    }

    /// Content rect computed by the last layout pass.
    pub fn content_rect(&self) -> Rect {
        self.data().content_rect
    }

    /// Undocked-children offset computed by the last layout pass.
    pub fn undocked_offset(&self) -> Vec2 {
        self.data().undocked_offset
    }

    /// Which painting/hit-testing group this control belongs to in its parent.
    pub(crate) fn child_group(&self) -> ChildGroup {
        let d = self.data();
        ChildGroup::of(d.docking, d.flags)
    }
}

/// Painting and hit-testing group of a child within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChildGroup {
    /// Edge-docked: placed directly in the padded content space.
    Docked,
    /// Undocked or Client: translated by the parent's undocked offset.
    Undocked,
    /// Undocked with parent-clip: padded content space, no undocked offset.
    Clipped,
}

impl ChildGroup {
    pub(crate) fn of(docking: Docking, flags: ControlFlags) -> ChildGroup {
        if docking.is_edge() {
            ChildGroup::Docked
        } else if docking == Docking::None && flags.contains(ControlFlags::PARENT_CLIP) {
            ChildGroup::Clipped
        } else {
            ChildGroup::Undocked
        }
    }
}

// =============================================================================
// Text, style, alpha
// =============================================================================

impl Control {
    pub fn text(&self) -> String {
        self.data().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        let changed = {
            let mut d = self.data_mut();
            let changed = d.text != text;
            d.text = text;
            changed
        };

        if changed {
            self.set_dirty(true);
        }
    }

    pub fn set_style(&self, style: Option<Rc<Style>>) {
        self.data_mut().style = style;
    }

    /// Own style, or with `recursive` the nearest ancestor's when unset.
    pub fn get_style(&self, recursive: bool) -> Option<Rc<Style>> {
        let own = self.data().style.clone();
        if own.is_some() || !recursive {
            return own;
        }

        self.parent().and_then(|parent| parent.get_style(true))
    }

    pub fn alpha(&self) -> f32 {
        self.data().alpha
    }

    pub fn set_alpha(&self, alpha: f32) {
        let changed = {
            let mut d = self.data_mut();
            let changed = d.alpha != alpha;
            d.alpha = alpha;
            changed
        };

        if changed {
            self.set_dirty(true);
        }
    }
}

// =============================================================================
// Events
// =============================================================================

impl Control {
    /// Route an event through this control's widget.
    ///
    /// The widget decides how to react and is expected to call
    /// [`Control::propagate_event`] afterward to keep routing.
    pub fn process_event(&self, event: &Event, propagate_up: bool, propagate_down: bool) {
        let widget = self.widget();
        widget.process_event(self, event, propagate_up, propagate_down);
    }

    /// Base routing: down into every child (which only route further down),
    /// then up to the parent (which only routes further up).
    pub fn propagate_event(&self, event: &Event, propagate_up: bool, propagate_down: bool) {
        if propagate_down {
            for child in self.children() {
                child.process_event(event, false, true);
            }
        }

        if propagate_up {
            if let Some(parent) = self.parent() {
                parent.process_event(event, true, false);
            }
        }
    }

    /// Build an event with this control as sender and route it upward.
    pub fn send_event(&self, kind: EventKind) {
        let event = Event::new(self.clone(), kind);
        self.process_event(&event, true, false);
    }
}

// =============================================================================
// Root requests
// =============================================================================

/// Interaction change a widget asks the tree's root to make.
///
/// Widgets run inside the root's input dispatch, so they cannot reach the
/// root directly. Requests are queued on the root control and applied once
/// the current dispatch returns.
#[derive(Debug, Clone, PartialEq)]
pub enum RootRequest {
    /// Focus the control, or clear focus with `None`.
    Focus(Option<Control>),
    /// Make the control exclusive, or release the exclusive one with `None`.
    Exclusive(Option<Control>),
}

impl Control {
    /// Queue a focus change for the root of this control's tree.
    ///
    /// Returns false when the tree has no root to apply it.
    pub fn request_focus(&self, target: Option<&Control>) -> bool {
        self.post_request(RootRequest::Focus(target.cloned()))
    }

    /// Queue an exclusivity change (open or dismiss a popup) for the root of
    /// this control's tree.
    ///
    /// Returns false when the tree has no root to apply it.
    pub fn request_exclusive(&self, target: Option<&Control>) -> bool {
        self.post_request(RootRequest::Exclusive(target.cloned()))
    }

    fn post_request(&self, request: RootRequest) -> bool {
        let root = self.root();
        let mut d = root.data_mut();

        match d.requests.as_mut() {
            Some(queue) => {
                queue.push_back(request);
                true
            }
            None => {
                debug!(control = self.id(), "request dropped, tree has no root");
                false
            }
        }
    }

    /// Give this control a request queue. Called for the control a `Root` owns.
    pub(crate) fn accept_requests(&self) {
        self.data_mut().requests.get_or_insert_with(VecDeque::new);
    }

    pub(crate) fn pop_request(&self) -> Option<RootRequest> {
        self.data_mut().requests.as_mut().and_then(VecDeque::pop_front)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EventType;

    struct Recorder {
        log: Rc<RefCell<Vec<(EventType, u64)>>>,
    }

    impl Widget for Recorder {
        fn process_event(&self, control: &Control, event: &Event, up: bool, down: bool) {
            self.log.borrow_mut().push((event.event_type(), event.sender.id()));
            control.propagate_event(event, up, down);
        }
    }

    fn recorder() -> (Recorder, Rc<RefCell<Vec<(EventType, u64)>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Recorder { log: log.clone() }, log)
    }

    #[test]
    fn test_new_with_parent_registers_child() {
        let parent = Control::new(None);
        let child = Control::new(Some(&parent));

        assert_eq!(parent.child_count(), 1);
        assert_eq!(parent.child(0), Some(child.clone()));
        assert_eq!(child.parent(), Some(parent.clone()));
        assert!(parent.is_dirty());
        assert!(child.is_dirty());
        assert_eq!(child.depth(), 1);
        assert_eq!(child.root(), parent);
    }

    #[test]
    fn test_reparent_fires_parent_changed_with_old_parent() {
        let a = Control::new(None);
        let b = Control::new(None);
        let (widget, log) = recorder();
        let child = Control::with_widget(Some(&a), widget);

        log.borrow_mut().clear();
        child.set_parent(Some(&b)).unwrap();

        assert_eq!(a.child_count(), 0);
        assert_eq!(b.child_count(), 1);
        assert_eq!(log.borrow().as_slice(), &[(EventType::ParentChanged, child.id())]);
    }

    #[test]
    fn test_reparent_into_descendant_is_rejected() {
        let a = Control::new(None);
        let b = Control::new(Some(&a));
        let c = Control::new(Some(&b));

        assert_eq!(
            a.set_parent(Some(&c)),
            Err(TreeError::Cycle { child: a.id(), parent: c.id() })
        );
        assert!(a.set_parent(Some(&a)).is_err());
        assert_eq!(a.parent(), None);
        assert_eq!(c.parent(), Some(b));
    }

    #[test]
    fn test_dirty_propagates_down_and_stops_at_dirty_ancestor() {
        let root = Control::new(None);
        let mid = Control::new(Some(&root));
        let leaf = Control::new(Some(&mid));
        let grandchild = Control::new(Some(&leaf));

        for c in [&root, &mid, &leaf, &grandchild] {
            c.clear_dirty();
        }

        leaf.set_dirty(true);
        assert!(root.is_dirty());
        assert!(mid.is_dirty());
        assert!(grandchild.is_dirty());

        // Already-dirty ancestor halts the upward walk
        for c in [&root, &leaf, &grandchild] {
            c.clear_dirty();
        }
        leaf.set_dirty(true);
        assert!(mid.is_dirty());
        assert!(!root.is_dirty());
    }

    #[test]
    fn test_bring_to_front() {
        let parent = Control::new(None);
        let a = Control::new(Some(&parent));
        let b = Control::new(Some(&parent));
        let c = Control::new(Some(&parent));

        a.bring_to_front();
        assert_eq!(parent.children(), vec![b, c, a]);
    }

    #[test]
    fn test_clear_detaches_children() {
        let parent = Control::new(None);
        let a = Control::new(Some(&parent));
        let b = Control::new(Some(&parent));

        parent.clear();
        assert_eq!(parent.child_count(), 0);
        assert_eq!(a.parent(), None);
        assert_eq!(b.parent(), None);
    }

    #[test]
    fn test_dropping_parent_releases_children() {
        let parent = Control::new(None);
        let child = Control::new(Some(&parent));
        let weak = child.downgrade();
        drop(child);
        assert!(weak.upgrade().is_some());

        drop(parent);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_style_inheritance() {
        let root = Control::new(None);
        let style = Rc::new(Style::default());
        root.set_style(Some(style.clone()));
        let child = Control::new(Some(&root));

        assert!(child.get_style(false).is_none());
        assert!(Rc::ptr_eq(&child.get_style(true).unwrap(), &style));
    }

    #[test]
    fn test_visibility_recursive() {
        let root = Control::new(None);
        let child = Control::new(Some(&root));
        root.show(false);

        assert!(child.is_visible(false));
        assert!(!child.is_visible(true));
    }

    #[test]
    fn test_enable_mirrors_disabled_state() {
        let control = Control::new(None);
        control.enable(false);
        assert!(!control.is_enabled());
        assert!(control.has_state(ControlState::DISABLED));

        control.enable(true);
        assert!(control.is_enabled());
        assert!(!control.has_state(ControlState::DISABLED));
    }

    #[test]
    fn test_event_propagates_up_to_ancestors() {
        let (root_widget, root_log) = recorder();
        let root = Control::with_widget(None, root_widget);
        let mid = Control::new(Some(&root));
        let leaf = Control::new(Some(&mid));

        root_log.borrow_mut().clear();
        leaf.send_event(EventKind::Click);
        assert_eq!(root_log.borrow().as_slice(), &[(EventType::Click, leaf.id())]);
    }

    #[test]
    fn test_event_propagates_down_without_bouncing_up() {
        let (root_widget, root_log) = recorder();
        let root = Control::with_widget(None, root_widget);
        let (a_widget, a_log) = recorder();
        let a = Control::with_widget(Some(&root), a_widget);
        let (b_widget, b_log) = recorder();
        let _b = Control::with_widget(Some(&a), b_widget);

        root_log.borrow_mut().clear();
        a_log.borrow_mut().clear();
        b_log.borrow_mut().clear();

        let event = Event::new(root.clone(), EventKind::ValueChanged);
        root.process_event(&event, false, true);

        assert_eq!(root_log.borrow().len(), 1);
        assert_eq!(a_log.borrow().len(), 1);
        assert_eq!(b_log.borrow().len(), 1);
    }

    #[test]
    fn test_absolute_position_includes_padding_and_title() {
        let root = Control::new(None);
        root.set_padding(Borders::all(0));
        root.set_position(10, 20);

        let window = Control::new(Some(&root));
        window.set_padding(Borders::all(4));
        window.set_title_height(22);
        window.set_position(100, 50);

        let child = Control::new(Some(&window));
        child.set_position(5, 6);

        assert_eq!(child.absolute_position(), Vec2::new(10 + 100 + 4 + 5, 20 + 50 + 4 + 22 + 6));
    }
}
