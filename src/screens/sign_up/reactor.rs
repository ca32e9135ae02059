use async_trait::async_trait;

use super::action::{SignUpAction, SignUpMutation};
use super::state::SignUpState;
use crate::reactor::{Reactor, Reducer};
use crate::services::{AuthCredentials, ServiceProvider};
use crate::session::{LoginKind, SecureString};
use crate::validation;

pub struct SignUpReactor {
    provider: ServiceProvider,
}

impl SignUpReactor {
    pub fn new(provider: ServiceProvider) -> Self {
        Self { provider }
    }

    async fn register(&self, state: &SignUpState) -> Vec<SignUpMutation> {
        let credentials = AuthCredentials {
            email: state.email.clone(),
            username: state.nickname.clone(),
            password: state.password.clone(),
        };

        match self.provider.auth.register_with_email(credentials).await {
            Ok(user) => {
                tracing::info!(user_id = user.id(), "Email registration succeeded");
                self.provider.users.set_user(user.clone());
                self.provider.users.set_login_kind(LoginKind::Email);
                vec![SignUpMutation::Registered(user)]
            }
            Err(e) => {
                tracing::warn!(error = %e, "Email registration failed");
                vec![SignUpMutation::RegistrationFailed(e.to_string())]
            }
        }
    }
}

impl Reducer for SignUpReactor {
    type State = SignUpState;
    type Mutation = SignUpMutation;

    fn reduce(mut state: SignUpState, mutation: SignUpMutation) -> SignUpState {
        match mutation {
            SignUpMutation::ValidateEmail(input) => {
                let result = validation::email(&input);
                state.email = input;
                state.email_message = result.message;
                state.is_valid_email = result.is_valid;
            }
            SignUpMutation::ValidateNickname(input) => {
                let result = validation::nickname(&input);
                state.nickname = input;
                state.nickname_message = result.message;
                state.is_valid_nickname = result.is_valid;
            }
            SignUpMutation::ValidatePassword(input) => {
                let result = validation::password(&input);
                state.password = SecureString::new(input);
                state.password_message = result.message;
                state.is_valid_password = result.is_valid;
            }
            SignUpMutation::ValidatePasswordCheck(input) => {
                // Compared against the password already folded into state.
                let result = validation::password_check(&input, state.password.expose());
                state.password_check = SecureString::new(input);
                state.password_check_message = result.message;
                state.is_valid_password_check = result.is_valid;
            }
            SignUpMutation::UpdateRegisterEnabled => {
                state.register_enabled = state.all_fields_valid();
            }
            SignUpMutation::Registered(user) => {
                state.registered_user = Some(user);
                state.registration_error = None;
            }
            SignUpMutation::RegistrationFailed(message) => {
                state.registration_error = Some(message);
            }
            SignUpMutation::ClearError => {
                state.registration_error = None;
            }
        }
        state
    }
}

#[async_trait]
impl Reactor for SignUpReactor {
    type Action = SignUpAction;

    fn initial_state(&self) -> SignUpState {
        SignUpState::default()
    }

    async fn mutate(&self, action: SignUpAction, state: &SignUpState) -> Vec<SignUpMutation> {
        match action {
            SignUpAction::EmailInput(input) => vec![
                SignUpMutation::ValidateEmail(input),
                SignUpMutation::UpdateRegisterEnabled,
            ],
            SignUpAction::NicknameInput(input) => vec![
                SignUpMutation::ValidateNickname(input),
                SignUpMutation::UpdateRegisterEnabled,
            ],
            SignUpAction::PasswordInput(input) => vec![
                SignUpMutation::ValidatePassword(input),
                // A confirmation typed first must be re-checked against the new password.
                SignUpMutation::ValidatePasswordCheck(state.password_check.expose().to_string()),
                SignUpMutation::UpdateRegisterEnabled,
            ],
            SignUpAction::PasswordCheckInput(input) => vec![
                SignUpMutation::ValidatePasswordCheck(input),
                SignUpMutation::UpdateRegisterEnabled,
            ],
            SignUpAction::Register => {
                if !state.register_enabled || state.registered_user.is_some() {
                    return Vec::new();
                }
                self.register(state).await
            }
            SignUpAction::DismissError => {
                if state.registration_error.is_none() {
                    return Vec::new();
                }
                vec![SignUpMutation::ClearError]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Advisory;

    fn fold(mutations: Vec<SignUpMutation>) -> SignUpState {
        mutations
            .into_iter()
            .fold(SignUpState::default(), SignUpReactor::reduce)
    }

    #[test]
    fn reduce_is_deterministic() {
        let a = fold(vec![SignUpMutation::ValidateEmail("x@y.com".into())]);
        let b = fold(vec![SignUpMutation::ValidateEmail("x@y.com".into())]);
        assert_eq!(a, b);
        assert!(a.is_valid_email);
        assert_eq!(a.email, "x@y.com");
    }

    #[test]
    fn register_enabled_requires_every_field() {
        let mut mutations = vec![
            SignUpMutation::ValidateEmail("x@y.com".into()),
            SignUpMutation::ValidateNickname("tester".into()),
            SignUpMutation::ValidatePassword("secret1".into()),
            SignUpMutation::UpdateRegisterEnabled,
        ];
        assert!(!fold(mutations.clone()).register_enabled);

        mutations.push(SignUpMutation::ValidatePasswordCheck("secret1".into()));
        mutations.push(SignUpMutation::UpdateRegisterEnabled);
        assert!(fold(mutations).register_enabled);
    }

    #[test]
    fn flag_is_only_recomputed_on_update() {
        let state = fold(vec![
            SignUpMutation::ValidateEmail("x@y.com".into()),
            SignUpMutation::ValidateNickname("tester".into()),
            SignUpMutation::ValidatePassword("secret1".into()),
            SignUpMutation::ValidatePasswordCheck("secret1".into()),
            SignUpMutation::UpdateRegisterEnabled,
            SignUpMutation::ValidateEmail("broken".into()),
        ]);
        assert!(state.register_enabled);
        let state = SignUpReactor::reduce(state, SignUpMutation::UpdateRegisterEnabled);
        assert!(!state.register_enabled);
    }

    #[test]
    fn registration_failure_then_clear() {
        let state = fold(vec![SignUpMutation::RegistrationFailed("taken".into())]);
        assert_eq!(state.registration_error.as_deref(), Some("taken"));
        let state = SignUpReactor::reduce(state, SignUpMutation::ClearError);
        assert!(state.registration_error.is_none());
        assert_eq!(state.email_message, Advisory::None);
    }
}
