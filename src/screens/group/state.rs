use crate::api::{GetClubResponse, Member};
use crate::reactor::ReactorState;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupState {
    pub group_id: Option<i64>,
    /// False renders the "join or create a group" placeholder.
    pub is_group: bool,
    pub club: Option<GetClubResponse>,
    pub members: Vec<Member>,
}

impl ReactorState for GroupState {}

impl Default for GroupState {
    fn default() -> Self {
        Self {
            group_id: None,
            is_group: true,
            club: None,
            members: Vec::new(),
        }
    }
}
