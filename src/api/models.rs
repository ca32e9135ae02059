//! Request and response payloads.

use serde::{Deserialize, Serialize};

use crate::session::SecureString;

/// Body of the home screen goal update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGoalRequest {
    pub goal: String,
}

/// Body of a club (study group) recruitment post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubRequest {
    pub club_name: String,
    pub num_of_member: u8,
    pub club_info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub username: String,
    pub password: SecureString,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubCreated {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub username: String,
    /// Seconds studied today.
    #[serde(default)]
    pub today_time: u64,
    #[serde(default)]
    pub goal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberList {
    pub data: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClubResponse {
    pub id: i64,
    pub club_name: String,
    pub num_of_member: u8,
    #[serde(default)]
    pub club_info: Option<String>,
    #[serde(default)]
    pub members: Option<MemberList>,
}

/// Today's accumulated study time, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerResponse {
    pub time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn club_response_tolerates_missing_members() {
        let club: GetClubResponse =
            serde_json::from_str(r#"{"id":1,"clubName":"rust","numOfMember":4}"#).unwrap();
        assert_eq!(club.club_name, "rust");
        assert!(club.members.is_none());
        assert!(club.club_info.is_none());
    }

    #[test]
    fn create_club_uses_camel_case_keys() {
        let body = serde_json::to_value(CreateClubRequest {
            club_name: "algo".to_string(),
            num_of_member: 3,
            club_info: "daily".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"clubName": "algo", "numOfMember": 3, "clubInfo": "daily"})
        );
    }
}
