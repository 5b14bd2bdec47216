use crate::models::user::User;
use serde::Serialize;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub author: &'static str,
}

#[derive(Serialize)]
pub struct UserListResponse {
    pub total: usize,
    pub users: Vec<User>,
}

/// Envelope returned by create and delete
#[derive(Serialize)]
pub struct UserMessageResponse {
    pub message: String,
    pub user: User,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "erro")]
    pub error: String,
    /// Outer `None` omits the field; `Some(None)` renders `"id": null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Option<i64>>,
}
