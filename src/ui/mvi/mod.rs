//! Model-View-Intent primitives.
//!
//! Input handling is a unidirectional flow: controller events are intents,
//! a reducer folds them into staged state, the frame loop renders it.
//!
//! ```text
//! ControllerEvent ──→ InputReducer ──→ PendingIntents ──→ Editor::frame
//!        ↑                                                     │
//!        └──────────────────── next input ─────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
