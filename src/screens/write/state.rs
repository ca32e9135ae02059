use crate::reactor::ReactorState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WriteState {
    pub is_dismissed: bool,
    pub can_submit: bool,

    pub title: String,
    /// Maximum member count, 0 until chosen.
    pub select_number: u8,
    /// `None` while the content view still shows its placeholder.
    pub content: Option<String>,

    pub submit_error: Option<String>,
}

impl ReactorState for WriteState {}
