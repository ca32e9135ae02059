use crate::reactor::{Action, Mutation};

#[derive(Debug, Clone)]
pub enum TimerAction {
    ViewWillAppear,
    Start,
    /// Stop the running timer and record the elapsed time.
    Stop { elapsed_seconds: u64 },
    SaveGoal(String),
    DismissError,
}

impl Action for TimerAction {}

#[derive(Debug, Clone)]
pub enum TimerMutation {
    SetTodayTime(u64),
    SetRunning(bool),
    SetGoal(Option<String>),
    SetError(String),
    ClearError,
}

impl Mutation for TimerMutation {}
