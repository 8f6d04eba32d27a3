//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place component state transitions happen.
///
/// `reduce` must stay pure: `(State, Intent) -> State`. Callers compare the
/// old and new state to decide which effects to run.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
