//! End-to-end editor workflows: mode switching, node placement, dragging,
//! panning, zooming, and editing hooks, all through input dispatch.

use crate::helpers::*;
use graphboard::input::{Key, PointerButton};
use graphboard::types::{InteractionMode, Point};
use graphboard::GraphEditor;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn shift_click_places_a_node() {
    graphboard::logging::init_logging();
    let mut editor = GraphEditor::new();

    // Clicking in Move mode places nothing.
    editor.dispatch(click_at(10.0, 20.0));
    assert_counts(&editor, 0, 0);

    editor.dispatch(key_down(Key::Shift));
    assert_eq!(editor.mode(), InteractionMode::Add);
    editor.dispatch(click_at(10.0, 20.0));
    assert_counts(&editor, 1, 0);

    let id = editor.node_at_point(Point::new(10.0, 20.0)).unwrap();
    assert_eq!(editor.graph().node(id).unwrap().position(), Point::new(10.0, 20.0));

    editor.dispatch(key_up(Key::Shift));
    assert_eq!(editor.mode(), InteractionMode::Move);
}

#[test]
fn secondary_click_does_not_place_a_node() {
    let mut editor = GraphEditor::new();
    editor.dispatch(key_down(Key::Shift));
    editor.dispatch(
        graphboard::input::InputEvent::Click(
            graphboard::input::PointerEvent::click(Point::ZERO)
                .with_button(PointerButton::Secondary),
        ),
    );
    assert_counts(&editor, 0, 0);
}

#[test]
fn dragging_empty_canvas_pans_the_view() {
    let (mut editor, _) = TestEditorBuilder::new().with_node(0.0, 0.0).build();

    editor.dispatch(drag(PointerButton::Primary, (500.0, 500.0), (10.0, -6.0)));
    editor.dispatch(pointer_up());

    // center -= movement / zoom, zoom is 1.
    assert_eq!(editor.scene().view().center(), Point::new(-10.0, 6.0));
    // The node itself did not move.
    assert_eq!(editor.graph().nodes().next().unwrap().position(), Point::ZERO);
}

#[test]
fn dragging_a_node_moves_it_and_not_the_camera() {
    let (mut editor, ids) = TestEditorBuilder::new().with_node(0.0, 0.0).build();

    editor.dispatch(drag(PointerButton::Primary, (0.0, 0.0), (15.0, 5.0)));
    editor.dispatch(drag(PointerButton::Primary, (15.0, 5.0), (5.0, 5.0)));
    editor.dispatch(pointer_up());

    assert_eq!(
        editor.graph().node(ids[0]).unwrap().position(),
        Point::new(20.0, 10.0)
    );
    assert_eq!(editor.scene().view().center(), Point::ZERO);

    // The visual moved with the node: it is now hit at its new position.
    assert_eq!(editor.node_at_point(Point::new(20.0, 10.0)), Some(ids[0]));
}

#[test]
fn node_drag_scales_with_zoom() {
    let (mut editor, ids) = TestEditorBuilder::new().with_node(0.0, 0.0).build();
    editor.dispatch(wheel(-120.0));
    let zoom = editor.zoom();
    assert!(zoom > 1.0);

    editor.dispatch(drag(PointerButton::Primary, (0.0, 0.0), (11.0, 0.0)));
    editor.dispatch(pointer_up());

    let moved = editor.graph().node(ids[0]).unwrap().position();
    assert!((moved.x - 11.0 / zoom).abs() < 1e-4);
}

#[test]
fn middle_button_pans_in_every_mode() {
    let mut editor = GraphEditor::new();
    editor.dispatch(key_down(Key::Shift));
    assert_eq!(editor.mode(), InteractionMode::Add);

    assert!(editor.dispatch(drag(PointerButton::Middle, (0.0, 0.0), (8.0, 0.0))));
    editor.dispatch(pointer_up());
    assert_eq!(editor.scene().view().center(), Point::new(-8.0, 0.0));
}

#[test]
fn mode_switch_is_suppressed_while_panning() {
    let mut editor = GraphEditor::new();
    editor.dispatch(drag(PointerButton::Middle, (0.0, 0.0), (1.0, 0.0)));
    editor.dispatch(key_down(Key::Shift));
    assert_eq!(editor.mode(), InteractionMode::Move);

    editor.dispatch(pointer_up());
    editor.dispatch(key_up(Key::Shift));
    // The next full press transitions normally.
    editor.dispatch(key_down(Key::Shift));
    assert_eq!(editor.mode(), InteractionMode::Add);
}

#[test]
fn mode_switch_is_suppressed_while_dragging() {
    let (mut editor, _) = TestEditorBuilder::new().with_node(0.0, 0.0).build();
    editor.dispatch(drag(PointerButton::Primary, (500.0, 500.0), (1.0, 1.0)));

    editor.dispatch(key_down(Key::Control));
    assert_eq!(editor.mode(), InteractionMode::Move);

    editor.dispatch(pointer_up());
    editor.dispatch(key_up(Key::Control));
    editor.dispatch(key_down(Key::Control));
    assert_eq!(editor.mode(), InteractionMode::Connect);
}

#[test]
fn wheel_zoom_is_consumed_and_clamped() {
    let mut editor = GraphEditor::new();

    assert!(editor.dispatch(wheel(-120.0)), "wheel must be consumed");
    assert!((editor.zoom() - 1.1).abs() < 1e-5);

    for _ in 0..100 {
        editor.dispatch(wheel(-600.0));
    }
    assert_eq!(editor.zoom(), 4.0);

    for _ in 0..100 {
        editor.dispatch(wheel(600.0));
    }
    assert_eq!(editor.zoom(), 0.25);

    editor.reset_zoom();
    assert_eq!(editor.zoom(), 1.0);
}

#[test]
fn zoom_snaps_back_to_one() {
    let mut editor = GraphEditor::new();
    // One detent up then one down lands within the snap band of 1.0.
    editor.dispatch(wheel(-120.0));
    editor.dispatch(wheel(120.0));
    assert_eq!(editor.zoom(), 1.0);
}

#[test]
fn double_click_on_node_requests_editing() {
    let (mut editor, ids) = TestEditorBuilder::new().with_node(0.0, 0.0).build();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    editor
        .session()
        .edit_requests()
        .subscribe(move |e| sink.borrow_mut().push(*e));

    assert!(editor.dispatch(double_click_at(0.0, 0.0)));
    assert_eq!(*seen.borrow(), vec![graphboard::EntityRef::node(ids[0])]);

    // Double-click on empty canvas requests nothing.
    assert!(!editor.dispatch(double_click_at(900.0, 900.0)));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn pointer_move_tracks_the_hovered_node() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_node(0.0, 0.0)
        .with_node(400.0, 0.0)
        .build();

    editor.dispatch(pointer_move_to(0.0, 0.0));
    assert_eq!(editor.session().hovered_node(), Some(ids[0]));

    editor.dispatch(pointer_move_to(400.0, 0.0));
    assert_eq!(editor.session().hovered_node(), Some(ids[1]));

    editor.dispatch(pointer_move_to(200.0, 200.0));
    assert_eq!(editor.session().hovered_node(), None);
}

#[test]
fn cursor_follows_the_active_mode() {
    use graphboard::types::CursorStyle;
    let mut editor = GraphEditor::new();
    assert_eq!(editor.cursor(), CursorStyle::Pointer);

    editor.dispatch(key_down(Key::Shift));
    assert_eq!(editor.cursor(), CursorStyle::Cell);
    editor.dispatch(key_up(Key::Shift));

    editor.dispatch(key_down(Key::Control));
    assert_eq!(editor.cursor(), CursorStyle::Crosshair);
    editor.dispatch(key_up(Key::Control));
    assert_eq!(editor.cursor(), CursorStyle::Pointer);
}
