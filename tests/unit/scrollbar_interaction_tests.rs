// Scrollbar interaction tests
// Pointer fixtures for jump direction, drag lifecycle and option routing

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::geometry::{along, scrollbar, scrollbar_with, HANDLE_OFFSET, HANDLE_SIZE};
use pretty_assertions::assert_eq;
use schedule_widgets::models::scrollbar::{
    Point, PointerEvent, PointerTarget, ScrollbarEvent, ScrollbarOptions, ScrollbarState,
};
use test_case::test_case;

#[test_case(true ; "horizontal")]
#[test_case(false ; "vertical")]
fn test_offset_and_size_routed(horizontal: bool) {
    let bar = scrollbar(horizontal);
    assert_eq!(bar.handle().offset, HANDLE_OFFSET);
    assert_eq!(bar.handle().size, HANDLE_SIZE);
    assert_eq!(bar.options().horizontal, horizontal);
}

#[test_case(true, 9.0, true ; "horizontal left of handle")]
#[test_case(true, 30.0, false ; "horizontal right of handle")]
#[test_case(false, 2.0, true ; "vertical above handle")]
#[test_case(false, 30.0, false ; "vertical below handle")]
fn test_track_click_reports_direction(horizontal: bool, delta: f32, towards_anchor: bool) {
    let mut bar = scrollbar(horizontal);
    let mut events = Vec::new();

    bar.handle_pointer_with(
        PointerEvent::Down {
            position: along(horizontal, delta),
            target: PointerTarget::Track,
        },
        &mut events,
    );

    assert_eq!(events, vec![ScrollbarEvent::JumpTo { towards_anchor }]);
}

#[test]
fn test_handle_click_starts_drag_but_not_jump() {
    let mut bar = scrollbar(true);
    let mut events = Vec::new();
    let position = along(true, 20.0);

    bar.handle_pointer_with(
        PointerEvent::Down {
            position,
            target: PointerTarget::Handle,
        },
        &mut events,
    );

    assert_eq!(events, vec![ScrollbarEvent::DragStart]);
    assert_eq!(bar.state(), ScrollbarState::Dragging);
}

#[test]
fn test_bar_click_jumps_but_does_not_drag() {
    let mut bar = scrollbar(true);
    let mut events = Vec::new();

    bar.handle_pointer_with(
        PointerEvent::Down {
            position: along(true, 5.0),
            target: PointerTarget::Track,
        },
        &mut events,
    );

    assert!(!events.contains(&ScrollbarEvent::DragStart));
    assert_eq!(events.len(), 1);
    assert_eq!(bar.state(), ScrollbarState::Idle);
}

#[test]
fn test_mouseup_on_handle_triggers_drag_end() {
    let mut bar = scrollbar(true);
    let mut events = Vec::new();

    bar.handle_pointer_with(
        PointerEvent::Up {
            position: along(true, 20.0),
            target: PointerTarget::Handle,
        },
        &mut events,
    );

    assert_eq!(events, vec![ScrollbarEvent::DragEnd]);
}

#[test]
fn test_full_drag_lifecycle() {
    let mut bar = scrollbar(false);
    let mut events = Vec::new();

    let steps = [
        PointerEvent::Down {
            position: along(false, 15.0),
            target: PointerTarget::Handle,
        },
        PointerEvent::Move {
            position: along(false, 13.0),
        },
        // Pointer far outside the track still drives the drag
        PointerEvent::Move {
            position: Point::new(900.0, 900.0),
        },
        PointerEvent::Move {
            position: Point::new(900.0, 950.0),
        },
        PointerEvent::Up {
            position: Point::new(900.0, 950.0),
            target: PointerTarget::Outside,
        },
    ];
    for step in steps {
        bar.handle_pointer_with(step, &mut events);
    }

    assert_eq!(
        events,
        vec![
            ScrollbarEvent::DragStart,
            ScrollbarEvent::Drag { offset: 8.0 },
            ScrollbarEvent::Drag { offset: 10.0 },
            ScrollbarEvent::DragEnd,
        ]
    );
    assert_eq!(bar.state(), ScrollbarState::Idle);
}

#[test_case(true ; "horizontal")]
#[test_case(false ; "vertical")]
fn test_on_drag_only_while_dragging(horizontal: bool) {
    let mut bar = scrollbar_with(ScrollbarOptions {
        handle_offset: HANDLE_OFFSET,
        handle_size: HANDLE_SIZE,
        horizontal,
        show_handle: true,
        is_dragging: false,
        drag_offset: 30.0,
    });
    let moved = PointerEvent::Move {
        position: Point::new(0.0, 0.0),
    };

    assert_eq!(bar.handle_pointer(moved), None);

    bar.set_dragging(true);
    assert!(matches!(bar.handle_pointer(moved), Some(ScrollbarEvent::Drag { .. })));
}

#[test]
fn test_drag_fraction_stays_in_unit_range() {
    let mut bar = scrollbar(true);
    bar.set_dragging(true);
    bar.set_drag_offset(0.0);

    for x in [-100.0, 0.0, 8.0, 12.0, 18.0, 500.0] {
        bar.handle_pointer(PointerEvent::Move {
            position: Point::new(x, 0.0),
        });
        let fraction = bar.drag_fraction();
        assert!((0.0..=1.0).contains(&fraction), "fraction {} out of range", fraction);
    }
}
