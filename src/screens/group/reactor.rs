use async_trait::async_trait;

use super::action::{GroupAction, GroupMutation};
use super::state::GroupState;
use crate::reactor::{Reactor, Reducer};
use crate::services::ServiceProvider;

pub struct GroupReactor {
    provider: ServiceProvider,
}

impl GroupReactor {
    pub fn new(provider: ServiceProvider) -> Self {
        Self { provider }
    }

    fn clear_club_id(&self) -> bool {
        self.provider
            .users
            .update_user(&mut |user| user.user_info.club_id = None)
            .is_some()
    }

    async fn load_club(&self) -> Vec<GroupMutation> {
        let club_id = self
            .provider
            .users
            .get_user()
            .and_then(|user| user.user_info.club_id);
        let Some(club_id) = club_id else {
            return vec![GroupMutation::NoGroup];
        };

        match self.provider.api.get_club(club_id).await {
            Ok(club) => match club.members.clone() {
                Some(list) => vec![GroupMutation::SetSections {
                    group_id: Some(club_id),
                    club: Some(club),
                    members: list.data,
                }],
                None => vec![GroupMutation::SetSections {
                    group_id: None,
                    club: None,
                    members: Vec::new(),
                }],
            },
            Err(e) => {
                // The stored club is stale (deleted or left): fall back to no group.
                tracing::warn!(club_id, error = %e, kind = e.kind(), "Failed to load club");
                self.clear_club_id();
                vec![GroupMutation::NoGroup]
            }
        }
    }
}

impl Reducer for GroupReactor {
    type State = GroupState;
    type Mutation = GroupMutation;

    fn reduce(mut state: GroupState, mutation: GroupMutation) -> GroupState {
        match mutation {
            GroupMutation::NoGroup => {
                state.group_id = None;
                state.is_group = false;
                state.club = None;
                state.members = Vec::new();
            }
            GroupMutation::SetSections {
                group_id,
                club,
                members,
            } => {
                state.group_id = group_id;
                state.is_group = true;
                state.club = club;
                state.members = members;
            }
        }
        state
    }
}

#[async_trait]
impl Reactor for GroupReactor {
    type Action = GroupAction;

    fn initial_state(&self) -> GroupState {
        GroupState::default()
    }

    async fn mutate(&self, action: GroupAction, _state: &GroupState) -> Vec<GroupMutation> {
        match action {
            GroupAction::ViewWillAppear => self.load_club().await,
            GroupAction::DeleteGroup => {
                if !self.clear_club_id() {
                    return Vec::new();
                }
                vec![GroupMutation::NoGroup]
            }
        }
    }
}
