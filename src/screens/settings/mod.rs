//! Settings screen: login kind display and logout.

mod action;
mod reactor;
mod state;

pub use action::{LogOutChoice, SettingsAction, SettingsMutation};
pub use reactor::SettingsReactor;
pub use state::SettingsState;
