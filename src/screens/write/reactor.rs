use async_trait::async_trait;

use super::action::{MemberCountChoice, WriteAction, WriteMutation};
use super::state::WriteState;
use crate::api::CreateClubRequest;
use crate::reactor::{Reactor, Reducer};
use crate::services::{present, AlertStyle, ServiceProvider};

const SELECT_NUMBER_MESSAGE: &str = "Choose the maximum number of members.";

pub struct WriteReactor {
    provider: ServiceProvider,
}

impl WriteReactor {
    pub fn new(provider: ServiceProvider) -> Self {
        Self { provider }
    }

    async fn select_number(&self) -> Vec<WriteMutation> {
        let choice = present(
            self.provider.alerts.as_ref(),
            None,
            Some(SELECT_NUMBER_MESSAGE),
            AlertStyle::ActionSheet,
            &MemberCountChoice::SHEET,
        )
        .await;

        match choice.and_then(MemberCountChoice::count) {
            Some(count) => vec![
                WriteMutation::SelectNumber(count),
                WriteMutation::ValidateCanSubmit,
            ],
            None => vec![WriteMutation::ValidateCanSubmit],
        }
    }

    async fn submit(&self, state: &WriteState) -> Vec<WriteMutation> {
        if !state.can_submit || self.provider.users.get_user().is_none() {
            return Vec::new();
        }

        let request = CreateClubRequest {
            club_name: state.title.clone(),
            num_of_member: state.select_number,
            club_info: state.content.clone().unwrap_or_default(),
        };

        match self.provider.api.create_club(request).await {
            Ok(created) => {
                tracing::info!(club_id = created.id, "Club created");
                self.provider
                    .users
                    .update_user(&mut |user| user.user_info.club_id = Some(created.id));
                vec![WriteMutation::Dismiss]
            }
            Err(e) => {
                tracing::warn!(error = %e, kind = e.kind(), "Failed to create club");
                vec![WriteMutation::SubmitFailed(e.to_string())]
            }
        }
    }
}

impl Reducer for WriteReactor {
    type State = WriteState;
    type Mutation = WriteMutation;

    fn reduce(mut state: WriteState, mutation: WriteMutation) -> WriteState {
        match mutation {
            WriteMutation::Dismiss => {
                state.is_dismissed = true;
            }
            WriteMutation::SelectNumber(count) => {
                state.select_number = count;
            }
            WriteMutation::ValidateCanSubmit => {
                state.can_submit =
                    !state.title.is_empty() && state.select_number != 0 && state.content.is_some();
            }
            WriteMutation::UpdateText { title, content } => {
                state.title = title;
                state.content = (!content.is_empty()).then_some(content);
            }
            WriteMutation::SubmitFailed(message) => {
                state.submit_error = Some(message);
            }
        }
        state
    }
}

#[async_trait]
impl Reactor for WriteReactor {
    type Action = WriteAction;

    fn initial_state(&self) -> WriteState {
        WriteState::default()
    }

    async fn mutate(&self, action: WriteAction, state: &WriteState) -> Vec<WriteMutation> {
        match action {
            WriteAction::Close => vec![WriteMutation::Dismiss],
            WriteAction::SelectNumber => self.select_number().await,
            WriteAction::UpdateText { title, content } => vec![
                WriteMutation::UpdateText { title, content },
                WriteMutation::ValidateCanSubmit,
            ],
            WriteAction::Submit => self.submit(state).await,
        }
    }
}
