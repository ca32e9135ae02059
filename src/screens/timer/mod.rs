//! Home/timer tab: today's study time, the running timer and the goal.

mod action;
mod reactor;
mod state;

pub use action::{TimerAction, TimerMutation};
pub use reactor::TimerReactor;
pub use state::TimerState;
