//! Unidirectional data flow primitives for the console views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                              │
//!    └──── key / API outcome ───────┘
//! ```
//!
//! Reducers are pure. Anything that touches the network or a timer is done by
//! the caller around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
