//! End-to-end scenarios driving a Root the way a host application would.

use std::cell::RefCell;
use std::rc::Rc;

use spark_widgets::{
    Borders, Control, ControlFlags, ControlState, Docking, Edges, Event, EventType, MouseButton, MouseMode,
    Rect, Root, Vec2, Widget, button, panel, window,
};

// =============================================================================
// Helpers
// =============================================================================

type Log = Rc<RefCell<Vec<(EventType, u64)>>>;

/// Records every event whose sender is the control itself.
struct Recorder(Log);

impl Widget for Recorder {
    fn process_event(&self, control: &Control, event: &Event, up: bool, down: bool) {
        if event.sender == *control {
            self.0.borrow_mut().push((event.event_type(), control.id()));
        }
        control.propagate_event(event, up, down);
    }
}

fn recorded(parent: &Control, log: &Log) -> Control {
    Control::with_widget(Some(parent), Recorder(log.clone()))
}

fn count(log: &Log, event_type: EventType) -> usize {
    log.borrow().iter().filter(|(t, _)| *t == event_type).count()
}

fn setup() -> (Root, Log) {
    (Root::new(800, 600), Rc::new(RefCell::new(Vec::new())))
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_window_with_top_and_client() {
    let (mut root, _) = setup();
    let w = Control::new(Some(root.control()));
    w.set_padding(Borders::all(0));
    w.set_size(400, 300);

    let top = Control::new(Some(&w));
    top.set_margins(Borders::all(0));
    top.set_size(10, 30);
    top.set_docking(Docking::Top);

    let client = Control::new(Some(&w));
    client.set_docking(Docking::Client);

    root.tick(0.0, 0.016);

    assert_eq!(top.rect(), Rect::new(0, 0, 400, 30));
    assert_eq!(client.height(), 270);
    assert_eq!(client.width(), 400);
}

#[test]
fn test_resize_clamped_by_maximum() {
    let (root, _) = setup();
    let c = Control::new(Some(root.control()));
    c.set_size(480, 480);
    c.set_maximum_size(500, 500);

    assert_eq!(c.clamp_resize_step(Vec2::new(20, 20)), Vec2::new(20, 20));
    assert_eq!(c.clamp_resize_step(Vec2::new(40, 40)), Vec2::new(20, 20));
}

#[test]
fn test_drag_bottom_right_handle_respects_maximum() {
    let (mut root, _) = setup();
    let w = window(Some(root.control()), "Editor");
    w.set_rect(Rect::new(10, 10, 480, 480));
    w.set_maximum_size(500, 500);
    root.tick(0.0, 0.016);

    // Bottom-right corner of the window
    root.event_mouse_motion(10 + 479, 10 + 479);
    assert_eq!(root.mouse_state().cursor, spark_widgets::MouseCursor::ResizeLR);
    root.event_mouse_button_down(MouseButton::Left);
    assert_eq!(root.mode(), MouseMode::Resizing);

    root.event_mouse_motion(10 + 479 + 40, 10 + 479 + 40);
    root.event_mouse_button_up(MouseButton::Left);

    assert_eq!(w.size(), Vec2::new(500, 500));
}

// =============================================================================
// Input
// =============================================================================

#[test]
fn test_click_emits_exactly_one_click() {
    let (mut root, log) = setup();
    let b = recorded(root.control(), &log);
    b.add_flags(ControlFlags::CAN_FOCUS);
    b.set_rect(Rect::new(50, 50, 100, 30));
    root.tick(0.0, 0.016);

    root.event_mouse_motion(60, 60);
    root.event_mouse_button_down(MouseButton::Left);
    assert_eq!(root.mode(), MouseMode::Down);
    assert!(b.has_state(ControlState::DOWN));
    assert!(b.has_state(ControlState::FOCUSED));

    root.event_mouse_button_up(MouseButton::Left);

    assert_eq!(count(&log, EventType::Click), 1);
    assert_eq!(count(&log, EventType::MouseButton), 2);
    assert!(!b.has_state(ControlState::DOWN));
    assert_eq!(root.mode(), MouseMode::Normal);
}

#[test]
fn test_release_outside_does_not_click() {
    let (mut root, log) = setup();
    let b = recorded(root.control(), &log);
    b.set_rect(Rect::new(50, 50, 100, 30));
    root.tick(0.0, 0.016);

    root.event_mouse_motion(60, 60);
    root.event_mouse_button_down(MouseButton::Left);
    root.event_mouse_motion(400, 400);
    root.event_mouse_button_up(MouseButton::Left);

    assert_eq!(count(&log, EventType::Click), 0);
}

#[test]
fn test_hot_change_fires_two_events() {
    let (mut root, log) = setup();
    let a = recorded(root.control(), &log);
    a.set_rect(Rect::new(0, 0, 100, 100));
    let b = recorded(root.control(), &log);
    b.set_rect(Rect::new(200, 0, 100, 100));
    root.tick(0.0, 0.016);

    root.event_mouse_motion(50, 50);
    log.borrow_mut().clear();

    root.event_mouse_motion(250, 50);
    let hot: Vec<u64> = log
        .borrow()
        .iter()
        .filter(|(t, _)| *t == EventType::HotChanged)
        .map(|(_, id)| *id)
        .collect();
    assert_eq!(hot, vec![a.id(), b.id()]);

    // Moving within the same control: no HotChanged
    log.borrow_mut().clear();
    root.event_mouse_motion(260, 60);
    assert_eq!(count(&log, EventType::HotChanged), 0);
    assert_eq!(count(&log, EventType::MouseMotion), 1);
}

#[test]
fn test_motion_reports_local_coordinates() {
    let (mut root, _) = setup();
    let positions = Rc::new(RefCell::new(Vec::new()));

    struct Positions(Rc<RefCell<Vec<Vec2>>>);
    impl Widget for Positions {
        fn process_event(&self, control: &Control, event: &Event, up: bool, down: bool) {
            if let spark_widgets::EventKind::MouseMotion { position, .. } = event.kind {
                if event.sender == *control {
                    self.0.borrow_mut().push(position);
                }
            }
            control.propagate_event(event, up, down);
        }
    }

    let c = Control::with_widget(Some(root.control()), Positions(positions.clone()));
    c.set_rect(Rect::new(100, 200, 50, 50));
    root.tick(0.0, 0.016);

    root.event_mouse_motion(110, 230);
    assert_eq!(positions.borrow().last(), Some(&Vec2::new(10, 30)));
}

#[test]
fn test_move_window_by_title() {
    let (mut root, _) = setup();
    let w = window(Some(root.control()), "Drag me");
    w.set_rect(Rect::new(100, 100, 300, 200));
    root.tick(0.0, 0.016);

    root.event_mouse_motion(200, 110);
    root.event_mouse_button_down(MouseButton::Left);
    assert_eq!(root.mode(), MouseMode::Moving);

    root.event_mouse_motion(230, 140);
    root.event_mouse_button_up(MouseButton::Left);

    assert_eq!(w.position(), Vec2::new(130, 130));
    assert_eq!(root.focused_control(), Some(w));
}

#[test]
fn test_clicking_window_body_keeps_inner_focus() {
    let (mut root, _) = setup();
    let w = window(Some(root.control()), "Form");
    w.set_rect(Rect::new(0, 0, 300, 200));
    let body = panel(Some(&w), Docking::Client);
    let ok = button(Some(&body), "OK", Docking::None);
    ok.set_rect(Rect::new(10, 10, 80, 24));
    root.tick(0.0, 0.016);

    // Button at window (4 + 10, 4 + 22 + 10)
    root.event_mouse_motion(20, 40);
    assert_eq!(root.hot_control(), Some(ok.clone()));
    root.event_mouse_button_down(MouseButton::Left);
    root.event_mouse_button_up(MouseButton::Left);
    assert_eq!(root.focused_control(), Some(ok.clone()));
    assert!(w.has_state(ControlState::DEEP_FOCUSED));

    // Title strip: window is hot with the move sentinel, but refuses focus
    root.event_mouse_motion(150, 10);
    root.event_mouse_button_down(MouseButton::Left);
    assert_eq!(root.mode(), MouseMode::Moving);
    root.event_mouse_button_up(MouseButton::Left);
    assert_eq!(root.focused_control(), Some(ok));
}

#[test]
fn test_grabbing_raises_window() {
    let (mut root, _) = setup();
    let back = window(Some(root.control()), "Back");
    back.set_rect(Rect::new(0, 0, 300, 200));
    let front = window(Some(root.control()), "Front");
    front.set_rect(Rect::new(400, 0, 300, 200));
    root.tick(0.0, 0.016);

    root.event_mouse_motion(150, 100);
    root.event_mouse_button_down(MouseButton::Left);
    root.event_mouse_button_up(MouseButton::Left);

    assert_eq!(root.control().children(), vec![front, back]);
}

// =============================================================================
// Exclusivity
// =============================================================================

#[test]
fn test_exclusive_round_trip() {
    let (mut root, log) = setup();
    let w = window(Some(root.control()), "Owner");
    w.set_rect(Rect::new(100, 100, 300, 200));
    let menu = recorded(&w, &log);
    menu.set_rect(Rect::new(20, 30, 120, 80));
    root.tick(0.0, 0.016);

    let absolute = menu.absolute_position();
    root.set_exclusive_control(Some(&menu));
    assert_eq!(menu.parent().as_ref(), Some(root.control()));
    assert_eq!(menu.absolute_position(), absolute);

    root.set_exclusive_control(None);
    assert_eq!(menu.parent(), Some(w));
    assert_eq!(menu.position(), Vec2::new(20, 30));
    assert_eq!(count(&log, EventType::ExclusivityChanged), 2);
}

#[test]
fn test_click_outside_clears_exclusivity() {
    let (mut root, log) = setup();
    let menu = recorded(root.control(), &log);
    menu.set_rect(Rect::new(100, 100, 120, 80));
    let item = Control::new(Some(&menu));
    item.set_rect(Rect::new(0, 0, 50, 20));
    root.set_exclusive_control(Some(&menu));
    root.tick(0.0, 0.016);

    // Inside the popup subtree: stays exclusive
    root.event_mouse_motion(110, 110);
    assert_eq!(root.hot_control(), Some(item));
    root.event_mouse_button_down(MouseButton::Left);
    root.event_mouse_button_up(MouseButton::Left);
    assert_eq!(root.exclusive_control(), Some(menu.clone()));

    // Outside: cleared before the press is processed
    root.event_mouse_motion(500, 500);
    root.event_mouse_button_down(MouseButton::Left);
    assert_eq!(root.exclusive_control(), None);
    assert!(!menu.has_state(ControlState::EXCLUSIVE));
    assert_eq!(root.mode(), MouseMode::Down);
    root.event_mouse_button_up(MouseButton::Left);
}

/// Opens its popup when clicked.
struct MenuButton {
    popup: Control,
}

impl Widget for MenuButton {
    fn process_event(&self, control: &Control, event: &Event, up: bool, down: bool) {
        if event.sender == *control && event.event_type() == EventType::Click {
            control.request_exclusive(Some(&self.popup));
        }
        control.propagate_event(event, up, down);
    }
}

#[test]
fn test_click_handler_opens_popup() {
    let (mut root, _) = setup();
    let w = window(Some(root.control()), "Menu bar");
    w.set_rect(Rect::new(0, 0, 300, 200));
    let popup = panel(Some(&w), Docking::None);
    popup.set_rect(Rect::new(150, 100, 80, 60));
    let opener = Control::with_widget(Some(&w), MenuButton { popup: popup.clone() });
    opener.set_rect(Rect::new(10, 10, 80, 24));
    root.tick(0.0, 0.016);

    // Opener at window (4 + 10, 4 + 22 + 10)
    root.event_mouse_motion(20, 40);
    assert_eq!(root.hot_control(), Some(opener.clone()));
    root.event_mouse_button_down(MouseButton::Left);
    root.event_mouse_button_up(MouseButton::Left);

    assert_eq!(root.exclusive_control(), Some(popup.clone()));
    assert_eq!(popup.parent().as_ref(), Some(root.control()));
    assert_eq!(popup.position(), Vec2::new(4 + 150, 4 + 22 + 100));

    // Pressing elsewhere dismisses it back into the window
    root.event_mouse_motion(500, 500);
    root.event_mouse_button_down(MouseButton::Left);
    root.event_mouse_button_up(MouseButton::Left);

    assert_eq!(root.exclusive_control(), None);
    assert_eq!(popup.parent(), Some(w));
    assert_eq!(popup.position(), Vec2::new(150, 100));
}

// =============================================================================
// Tree
// =============================================================================

#[test]
fn test_reparent_cycle_rejected() {
    let (root, _) = setup();
    let outer = panel(Some(root.control()), Docking::Client);
    let inner = panel(Some(&outer), Docking::Client);

    assert!(outer.set_parent(Some(&inner)).is_err());
    assert_eq!(inner.parent(), Some(outer.clone()));
    assert_eq!(outer.parent().as_ref(), Some(root.control()));
}

#[test]
fn test_hit_test_reports_resize_corner() {
    let (root, _) = setup();
    let w = window(Some(root.control()), "Corner");
    w.set_rect(Rect::new(0, 0, 300, 200));
    root.control().update_layout();

    let hit = root.control().control_at_point(299, 199);
    assert_eq!(hit.control, w);
    assert_eq!(hit.edges, Edges::BOTTOM_RIGHT);
}
