mod common;

use std::thread;

use common::color;
use tiledit::canvas::{Color, Direction};
use tiledit::input::{Buttons, ControllerEvent, InputReducer, IntentMailbox, PendingIntents, Port};
use tiledit::ui::mvi::Reducer;

fn press(buttons: Buttons) -> ControllerEvent {
    ControllerEvent::press(Port::One, buttons)
}

fn staged(brush: u8) -> PendingIntents {
    PendingIntents::with_brush(color(brush))
}

#[test]
fn second_port_is_ignored() {
    let state = staged(5);
    let event = ControllerEvent::press(Port::Two, Buttons::LEFT | Buttons::A);
    assert_eq!(InputReducer::reduce(state, event), state);
}

#[test]
fn direction_stages_a_move_and_marks_dirty() {
    let new = InputReducer::reduce(staged(2), press(Buttons::DOWN));
    assert_eq!(new.move_dir, Some(Direction::Down));
    assert!(!new.paint);
    assert!(new.dirty);
    assert_eq!(new.brush, color(2));
}

#[test]
fn directions_resolve_left_right_up_down() {
    let cases = [
        (Buttons::LEFT | Buttons::RIGHT, Direction::Left),
        (Buttons::RIGHT | Buttons::UP, Direction::Right),
        (Buttons::UP | Buttons::DOWN, Direction::Up),
        (Buttons::LEFT | Buttons::UP | Buttons::DOWN, Direction::Left),
    ];
    for (held, expected) in cases {
        let new = InputReducer::reduce(staged(2), press(held));
        assert_eq!(new.move_dir, Some(expected), "{held:?}");
    }
}

#[test]
fn last_direction_before_the_frame_wins() {
    let state = InputReducer::reduce(staged(2), press(Buttons::LEFT));
    let state = InputReducer::reduce(state, press(Buttons::UP));
    assert_eq!(state.move_dir, Some(Direction::Up));
}

#[test]
fn c_turns_left_right_into_brush_changes() {
    let down = InputReducer::reduce(staged(7), press(Buttons::C | Buttons::LEFT));
    assert_eq!(down.brush, color(6));
    assert_eq!(down.move_dir, None);
    assert!(down.dirty);

    let up = InputReducer::reduce(staged(7), press(Buttons::C | Buttons::RIGHT));
    assert_eq!(up.brush, color(8));
    assert_eq!(up.move_dir, None);
}

#[test]
fn c_with_up_down_does_nothing_but_redraw() {
    let new = InputReducer::reduce(staged(7), press(Buttons::C | Buttons::UP));
    assert_eq!(new.brush, color(7));
    assert_eq!(new.move_dir, None);
    assert!(new.dirty);
}

#[test]
fn brush_saturates_at_both_ends() {
    let mut state = staged(1);
    for _ in 0..5 {
        state = InputReducer::reduce(state, press(Buttons::C | Buttons::LEFT));
    }
    assert_eq!(state.brush, Color::MIN);

    let mut state = staged(14);
    for _ in 0..5 {
        state = InputReducer::reduce(state, press(Buttons::C | Buttons::RIGHT));
    }
    assert_eq!(state.brush, Color::MAX);
}

#[test]
fn a_stages_paint_idempotently() {
    let once = InputReducer::reduce(staged(2), press(Buttons::A));
    let twice = InputReducer::reduce(once, press(Buttons::A));
    assert!(once.paint);
    assert_eq!(once, twice);
}

#[test]
fn paint_combines_with_move_and_brush_change() {
    let moved = InputReducer::reduce(staged(2), press(Buttons::A | Buttons::RIGHT));
    assert!(moved.paint);
    assert_eq!(moved.move_dir, Some(Direction::Right));

    let recolored =
        InputReducer::reduce(staged(2), press(Buttons::A | Buttons::C | Buttons::RIGHT));
    assert!(recolored.paint);
    assert_eq!(recolored.brush, color(3));
}

#[test]
fn release_still_marks_dirty_without_intents() {
    let release = ControllerEvent {
        port: Port::One,
        changed: Buttons::LEFT,
        state: Buttons::empty(),
    };
    let new = InputReducer::reduce(staged(2), release);
    assert!(new.dirty);
    assert_eq!(new.move_dir, None);
    assert!(!new.paint);
}

#[test]
fn mailbox_drain_consumes_once_and_keeps_brush() {
    let mailbox = IntentMailbox::new(color(4));
    mailbox.dispatch(press(Buttons::RIGHT));
    mailbox.dispatch(press(Buttons::A));
    mailbox.dispatch(press(Buttons::C | Buttons::RIGHT));

    let first = mailbox.drain();
    assert_eq!(first.move_dir, Some(Direction::Right));
    assert!(first.paint);
    assert!(first.dirty);
    assert_eq!(first.brush, color(5));

    let second = mailbox.drain();
    assert_eq!(second.move_dir, None);
    assert!(!second.paint);
    assert!(!second.dirty);
    assert_eq!(second.brush, color(5));
    assert_eq!(mailbox.brush(), color(5));
}

#[test]
fn mailbox_coalesces_events_from_another_thread() {
    let mailbox = IntentMailbox::new(color(2));
    let producer = mailbox.clone();
    thread::spawn(move || {
        for _ in 0..100 {
            producer.dispatch(press(Buttons::DOWN));
            producer.dispatch(press(Buttons::A));
        }
        producer.dispatch(press(Buttons::LEFT));
    })
    .join()
    .unwrap();

    let pending = mailbox.pending();
    assert_eq!(pending.move_dir, Some(Direction::Left));
    assert!(pending.paint);

    let drained = mailbox.drain();
    assert_eq!(drained.move_dir, Some(Direction::Left));
    assert_eq!(mailbox.drain().move_dir, None);
}
