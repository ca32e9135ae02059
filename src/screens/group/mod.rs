//! The "my study group" tab: club details and member list.

mod action;
mod reactor;
mod state;

pub use action::{GroupAction, GroupMutation};
pub use reactor::GroupReactor;
pub use state::GroupState;
