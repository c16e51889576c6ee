//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;
use super::task::Task;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: `(State, Intent) -> (State, Task)`.
/// Side effects are never performed here; they are described by the
/// returned [`Task`] and run by the [`Store`](super::Store) after the new
/// state has been committed.
pub trait Reducer: Send + 'static {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state plus the follow-up work.
    ///
    /// Return `Task::none()` for transitions without side effects.
    fn reduce(&self, state: Self::State, intent: Self::Intent) -> (Self::State, Task<Self::Intent>);
}
