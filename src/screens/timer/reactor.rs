use async_trait::async_trait;

use super::action::{TimerAction, TimerMutation};
use super::state::TimerState;
use crate::api::SaveGoalRequest;
use crate::reactor::{Reactor, Reducer};
use crate::services::ServiceProvider;

pub struct TimerReactor {
    provider: ServiceProvider,
}

impl TimerReactor {
    pub fn new(provider: ServiceProvider) -> Self {
        Self { provider }
    }

    async fn load(&self) -> Vec<TimerMutation> {
        let goal = self
            .provider
            .users
            .get_user()
            .and_then(|user| user.user_info.goal);

        match self.provider.api.get_today_time().await {
            Ok(today) => vec![
                TimerMutation::SetGoal(goal),
                TimerMutation::SetTodayTime(today.time),
            ],
            Err(e) => {
                tracing::warn!(error = %e, kind = e.kind(), "Failed to load today's time");
                vec![TimerMutation::SetGoal(goal), TimerMutation::SetError(e.to_string())]
            }
        }
    }

    async fn stop(&self, elapsed_seconds: u64) -> Vec<TimerMutation> {
        match self.provider.api.post_time(elapsed_seconds).await {
            Ok(today) => {
                tracing::debug!(elapsed_seconds, total = today.time, "Study time recorded");
                vec![
                    TimerMutation::SetRunning(false),
                    TimerMutation::SetTodayTime(today.time),
                ]
            }
            Err(e) => {
                tracing::warn!(elapsed_seconds, error = %e, kind = e.kind(), "Failed to record study time");
                vec![
                    TimerMutation::SetRunning(false),
                    TimerMutation::SetError(e.to_string()),
                ]
            }
        }
    }

    async fn save_goal(&self, goal: String) -> Vec<TimerMutation> {
        let request = SaveGoalRequest { goal: goal.clone() };
        match self.provider.api.save_goal(request).await {
            Ok(()) => {
                self.provider
                    .users
                    .update_user(&mut |user| user.user_info.goal = Some(goal.clone()));
                vec![TimerMutation::SetGoal(Some(goal))]
            }
            Err(e) => {
                tracing::warn!(error = %e, kind = e.kind(), "Failed to save goal");
                vec![TimerMutation::SetError(e.to_string())]
            }
        }
    }
}

impl Reducer for TimerReactor {
    type State = TimerState;
    type Mutation = TimerMutation;

    fn reduce(mut state: TimerState, mutation: TimerMutation) -> TimerState {
        match mutation {
            TimerMutation::SetTodayTime(seconds) => state.today_seconds = seconds,
            TimerMutation::SetRunning(running) => state.is_running = running,
            TimerMutation::SetGoal(goal) => state.goal = goal,
            TimerMutation::SetError(message) => state.error = Some(message),
            TimerMutation::ClearError => state.error = None,
        }
        state
    }
}

#[async_trait]
impl Reactor for TimerReactor {
    type Action = TimerAction;

    fn initial_state(&self) -> TimerState {
        TimerState::default()
    }

    async fn mutate(&self, action: TimerAction, state: &TimerState) -> Vec<TimerMutation> {
        match action {
            TimerAction::ViewWillAppear => self.load().await,
            TimerAction::Start => {
                if state.is_running {
                    return Vec::new();
                }
                vec![TimerMutation::SetRunning(true)]
            }
            TimerAction::Stop { elapsed_seconds } => {
                if !state.is_running {
                    return Vec::new();
                }
                self.stop(elapsed_seconds).await
            }
            TimerAction::SaveGoal(goal) => {
                let goal = goal.trim().to_string();
                if goal.is_empty() {
                    return Vec::new();
                }
                self.save_goal(goal).await
            }
            TimerAction::DismissError => vec![TimerMutation::ClearError],
        }
    }
}
