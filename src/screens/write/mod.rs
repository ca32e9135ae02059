//! Club recruitment post composer.

mod action;
mod reactor;
mod state;

pub use action::{MemberCountChoice, WriteAction, WriteMutation};
pub use reactor::WriteReactor;
pub use state::WriteState;
