//! Reactor primitives: the per-screen state container.
//!
//! This module provides the traits and the runtime for unidirectional
//! data flow between the presentation layer and the application core.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ mutate ──→ Mutation* ──→ reduce ──→ State ──→ observers
//!    ↑                                                        │
//!    └────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Action**: user intent dispatched by the view
//! - **Mutation**: atomic state delta, produced by `mutate` (which may await collaborators)
//! - **State**: immutable snapshot of everything a screen renders
//! - **Store**: owns one reactor, serializes actions and publishes states

mod action;
mod logic;
mod reducer;
mod state;
mod store;
mod stream;
mod teardown;

pub use action::{Action, Mutation};
pub use logic::Reactor;
pub use reducer::Reducer;
pub use state::ReactorState;
pub use store::Store;
pub use stream::StateStream;
pub use teardown::Teardown;
