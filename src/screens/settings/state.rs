use crate::reactor::ReactorState;
use crate::session::LoginKind;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    pub login_kind: Option<LoginKind>,
    /// Set after logout; the view returns to the register screen.
    pub is_logged_out: bool,
}

impl ReactorState for SettingsState {}
