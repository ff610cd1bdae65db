//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of screen state in the clicker moves in one direction:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced wholesale on each intent
//! - **Intent**: a user action (a sale, a share) or a timer tick
//! - **Reducer**: pure function from (State, Intent) to the next State

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
