use crate::api::{GetClubResponse, Member};
use crate::reactor::{Action, Mutation};

#[derive(Debug, Clone)]
pub enum GroupAction {
    ViewWillAppear,
    /// Forget the current club locally.
    DeleteGroup,
}

impl Action for GroupAction {}

#[derive(Debug, Clone)]
pub enum GroupMutation {
    NoGroup,
    SetSections {
        group_id: Option<i64>,
        club: Option<GetClubResponse>,
        members: Vec<Member>,
    },
}

impl Mutation for GroupMutation {}
