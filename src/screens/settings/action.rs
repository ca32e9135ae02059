use crate::reactor::{Action, Mutation};
use crate::services::{ActionStyle, AlertAction};
use crate::session::LoginKind;

#[derive(Debug, Clone)]
pub enum SettingsAction {
    ViewWillAppear,
    /// Ask for confirmation, then log out of the current provider.
    LogOut,
}

impl Action for SettingsAction {}

#[derive(Debug, Clone)]
pub enum SettingsMutation {
    SetLoginKind(Option<LoginKind>),
    LoggedOut,
}

impl Mutation for SettingsMutation {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutChoice {
    Cancel,
    LogOut,
}

impl AlertAction for LogOutChoice {
    fn title(&self) -> String {
        match self {
            LogOutChoice::Cancel => "Cancel".to_string(),
            LogOutChoice::LogOut => "Log out".to_string(),
        }
    }

    fn style(&self) -> ActionStyle {
        match self {
            LogOutChoice::Cancel => ActionStyle::Cancel,
            LogOutChoice::LogOut => ActionStyle::Destructive,
        }
    }
}
