use crate::reactor::{Action, Mutation};
use crate::session::User;

#[derive(Debug, Clone)]
pub enum SignUpAction {
    EmailInput(String),
    NicknameInput(String),
    PasswordInput(String),
    PasswordCheckInput(String),
    /// Submit the form. Ignored unless every field is valid.
    Register,
    DismissError,
}

impl Action for SignUpAction {}

#[derive(Debug, Clone)]
pub enum SignUpMutation {
    ValidateEmail(String),
    ValidateNickname(String),
    ValidatePassword(String),
    ValidatePasswordCheck(String),
    /// Recompute `register_enabled` from the per-field flags.
    UpdateRegisterEnabled,
    Registered(User),
    RegistrationFailed(String),
    ClearError,
}

impl Mutation for SignUpMutation {}
