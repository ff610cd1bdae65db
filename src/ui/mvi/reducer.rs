//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
///
/// Implementations must be pure: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and return its replacement.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
