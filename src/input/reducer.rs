use crate::canvas::{Color, Direction};
use crate::input::controller::{Buttons, ControllerEvent, Port};
use crate::input::intent::PendingIntents;
use crate::ui::mvi::Reducer;

/// Folds controller events into the staged intents.
///
/// Only port one is listened to. Holding C turns left/right into brush
/// changes; otherwise the d-pad stages a move. Simultaneous directions
/// resolve left, then right, then up, then down.
pub struct InputReducer;

impl Reducer for InputReducer {
    type State = PendingIntents;
    type Intent = ControllerEvent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if intent.port != Port::One {
            return state;
        }

        let held = intent.state;
        let mut next = state;

        if held.contains(Buttons::C) {
            if held.contains(Buttons::LEFT) && next.brush > Color::MIN {
                next.brush = next.brush.saturating_dec();
            } else if held.contains(Buttons::RIGHT) && next.brush < Color::MAX {
                next.brush = next.brush.saturating_inc();
            }
        } else if let Some(dir) = direction(held) {
            next.move_dir = Some(dir);
        }

        if held.contains(Buttons::A) {
            next.paint = true;
        }

        next.dirty = true;
        next
    }
}

fn direction(held: Buttons) -> Option<Direction> {
    if held.contains(Buttons::LEFT) {
        Some(Direction::Left)
    } else if held.contains(Buttons::RIGHT) {
        Some(Direction::Right)
    } else if held.contains(Buttons::UP) {
        Some(Direction::Up)
    } else if held.contains(Buttons::DOWN) {
        Some(Direction::Down)
    } else {
        None
    }
}
