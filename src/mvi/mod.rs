//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits and the [`Store`] for implementing
//! unidirectional data flow. Nothing here depends on the rendering layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │                   │
//!    │          └──→ Task ──┐       │
//!    └──────────────────────┴───────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Task**: Deferred async work yielding at most one follow-up intent
//! - **Store**: Owns the state, runs the reducer, feeds task results back

mod intent;
mod reducer;
mod state;
mod store;
mod task;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, StoreHandle};
pub use task::Task;
