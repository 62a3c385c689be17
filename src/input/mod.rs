//! Controller input staging.
//!
//! ```text
//! input thread ──ControllerEvent──→ IntentMailbox (InputReducer) ──drain──→ Editor
//! ```
//!
//! The reducer never touches the canvas or cursor; it only stages intents
//! for the frame loop, which stays the single writer of editor state.

mod controller;
mod intent;
mod mailbox;
mod reducer;

pub use controller::{Buttons, ControllerEvent, Port};
pub use intent::{FrameIntents, PendingIntents, DEFAULT_BRUSH};
pub use mailbox::IntentMailbox;
pub use reducer::InputReducer;
