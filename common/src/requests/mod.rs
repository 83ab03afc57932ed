use serde::{Deserialize, Serialize};

/// Request payload for creating an auth token (login).
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAuthTokenRequest {
    pub username: String,
    pub password: String,
}

/// Request payload for the unauthenticated token verification endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyAuthTokenRequest {
    pub auth_token: String,
}

/// Request payload for changing the signed-in rater's password.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Envelope for creating or renaming a member.
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberPayload {
    pub member: MemberFields,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemberFields {
    pub name: String,
}

/// Envelope for adding a rating or editing a rating's remark.
#[derive(Debug, Serialize, Deserialize)]
pub struct RatingPayload {
    pub rating: RatingFields,
}

/// Rating fields supplied by the client. Level must lie in 1..=6; the
/// boundary rejects anything else before the domain re-checks it.
#[derive(Debug, Serialize, Deserialize)]
pub struct RatingFields {
    pub level: i64,
    pub remark: Option<String>,
}
