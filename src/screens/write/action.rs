use crate::reactor::{Action, Mutation};
use crate::services::{ActionStyle, AlertAction};

#[derive(Debug, Clone)]
pub enum WriteAction {
    Close,
    /// Ask for the maximum member count with an action sheet.
    SelectNumber,
    UpdateText { title: String, content: String },
    Submit,
}

impl Action for WriteAction {}

#[derive(Debug, Clone)]
pub enum WriteMutation {
    Dismiss,
    SelectNumber(u8),
    ValidateCanSubmit,
    UpdateText { title: String, content: String },
    SubmitFailed(String),
}

impl Mutation for WriteMutation {}

/// Buttons of the member count action sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberCountChoice {
    Close,
    Two,
    Three,
    Four,
}

impl MemberCountChoice {
    /// Order shown in the sheet.
    pub const SHEET: [MemberCountChoice; 4] = [
        MemberCountChoice::Close,
        MemberCountChoice::Four,
        MemberCountChoice::Three,
        MemberCountChoice::Two,
    ];

    pub fn count(self) -> Option<u8> {
        match self {
            MemberCountChoice::Close => None,
            MemberCountChoice::Two => Some(2),
            MemberCountChoice::Three => Some(3),
            MemberCountChoice::Four => Some(4),
        }
    }
}

impl AlertAction for MemberCountChoice {
    fn title(&self) -> String {
        match self.count() {
            Some(count) => format!("{} members", count),
            None => "Close".to_string(),
        }
    }

    fn style(&self) -> ActionStyle {
        match self {
            MemberCountChoice::Close => ActionStyle::Cancel,
            _ => ActionStyle::Default,
        }
    }
}
