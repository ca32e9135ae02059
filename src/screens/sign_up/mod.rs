//! Email sign-up form: live field validation and registration.

mod action;
mod reactor;
mod state;

pub use action::{SignUpAction, SignUpMutation};
pub use reactor::SignUpReactor;
pub use state::SignUpState;
