//! Screen reactors.
//!
//! Each screen has an `Action` enum (from the view), a `Mutation` enum
//! (internal), a `State` struct and a reactor holding the injected
//! [`ServiceProvider`](crate::services::ServiceProvider). Run one with
//! [`Store::new`](crate::reactor::Store::new).

pub mod group;
pub mod settings;
pub mod sign_up;
pub mod timer;
pub mod write;
