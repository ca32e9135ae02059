use crate::reactor::ReactorState;
use crate::session::{SecureString, User};
use crate::validation::Advisory;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignUpState {
    pub email: String,
    pub nickname: String,
    pub password: SecureString,
    pub password_check: SecureString,

    pub email_message: Advisory,
    pub nickname_message: Advisory,
    pub password_message: Advisory,
    pub password_check_message: Advisory,

    pub is_valid_email: bool,
    pub is_valid_nickname: bool,
    pub is_valid_password: bool,
    pub is_valid_password_check: bool,

    pub register_enabled: bool,

    /// Set once the account exists; the view moves on to the main tabs.
    pub registered_user: Option<User>,
    /// Shown as a toast.
    pub registration_error: Option<String>,
}

impl ReactorState for SignUpState {}

impl SignUpState {
    pub fn all_fields_valid(&self) -> bool {
        self.is_valid_email
            && self.is_valid_nickname
            && self.is_valid_password
            && self.is_valid_password_check
    }
}
