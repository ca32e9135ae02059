use async_trait::async_trait;

use super::action::{LogOutChoice, SettingsAction, SettingsMutation};
use super::state::SettingsState;
use crate::reactor::{Reactor, Reducer};
use crate::services::{present, AlertStyle, ServiceProvider};

pub struct SettingsReactor {
    provider: ServiceProvider,
}

impl SettingsReactor {
    pub fn new(provider: ServiceProvider) -> Self {
        Self { provider }
    }

    async fn log_out(&self) -> Vec<SettingsMutation> {
        let choice = present(
            self.provider.alerts.as_ref(),
            Some("Log Out"),
            Some("Do you want to log out?"),
            AlertStyle::ActionSheet,
            &[LogOutChoice::Cancel, LogOutChoice::LogOut],
        )
        .await;
        if choice != Some(LogOutChoice::LogOut) {
            return Vec::new();
        }

        let kind = self.provider.users.login_kind().unwrap_or_default();
        // The local session ends even if the provider call fails.
        if let Err(e) = self.provider.auth.logout(kind).await {
            tracing::warn!(?kind, error = %e, "Provider logout failed");
        }
        self.provider.users.logout_user();
        vec![SettingsMutation::LoggedOut]
    }
}

impl Reducer for SettingsReactor {
    type State = SettingsState;
    type Mutation = SettingsMutation;

    fn reduce(mut state: SettingsState, mutation: SettingsMutation) -> SettingsState {
        match mutation {
            SettingsMutation::SetLoginKind(kind) => state.login_kind = kind,
            SettingsMutation::LoggedOut => {
                state.login_kind = None;
                state.is_logged_out = true;
            }
        }
        state
    }
}

#[async_trait]
impl Reactor for SettingsReactor {
    type Action = SettingsAction;

    fn initial_state(&self) -> SettingsState {
        SettingsState::default()
    }

    async fn mutate(&self, action: SettingsAction, state: &SettingsState) -> Vec<SettingsMutation> {
        match action {
            SettingsAction::ViewWillAppear => {
                vec![SettingsMutation::SetLoginKind(self.provider.users.login_kind())]
            }
            SettingsAction::LogOut => {
                if state.is_logged_out {
                    return Vec::new();
                }
                self.log_out().await
            }
        }
    }
}
