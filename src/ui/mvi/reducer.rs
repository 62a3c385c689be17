use super::intent::Intent;
use super::state::UiState;

/// Folds an intent into state.
///
/// Must be pure: `(State, Intent) -> State`, no I/O and no access to state
/// owned by anyone else.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
