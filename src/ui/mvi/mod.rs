//! Model-View-Intent (MVI) primitives.
//!
//! Stateful components keep their transitions in a pure reducer and run
//! side effects (subscriptions, focus moves, scroll locks) around it.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── input events ────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
