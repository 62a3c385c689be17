use std::sync::Arc;

use parking_lot::Mutex;

use crate::canvas::Color;
use crate::input::controller::ControllerEvent;
use crate::input::intent::{FrameIntents, PendingIntents};
use crate::input::reducer::InputReducer;
use crate::ui::mvi::Reducer;

/// Single-slot, coalescing hand-off from the input thread to the frame loop.
///
/// Events arriving faster than frames collapse into one pending move and one
/// paint flag. Cloning yields another handle to the same slot.
#[derive(Clone, Default)]
pub struct IntentMailbox {
    slot: Arc<Mutex<PendingIntents>>,
}

impl IntentMailbox {
    pub fn new(brush: Color) -> Self {
        Self {
            slot: Arc::new(Mutex::new(PendingIntents::with_brush(brush))),
        }
    }

    /// Reduce one controller event into the slot. Called from the input thread.
    pub fn dispatch(&self, event: ControllerEvent) {
        let mut slot = self.slot.lock();
        *slot = InputReducer::reduce(std::mem::take(&mut *slot), event);
    }

    /// Consume the pending move, paint and dirty marks; the brush stays.
    pub fn drain(&self) -> FrameIntents {
        let mut slot = self.slot.lock();
        FrameIntents {
            move_dir: slot.move_dir.take(),
            paint: std::mem::take(&mut slot.paint),
            brush: slot.brush,
            dirty: std::mem::take(&mut slot.dirty),
        }
    }

    pub fn brush(&self) -> Color {
        self.slot.lock().brush
    }

    pub fn pending(&self) -> PendingIntents {
        *self.slot.lock()
    }
}
