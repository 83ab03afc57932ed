use serde::{Deserialize, Serialize};

/// A trainee whose skill progress is tracked.
///
/// The share token is deliberately absent: it is a read-only capability and
/// is only ever handed out through the dedicated share-token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
}

/// Member list row, annotated with the rater who wrote the member's most
/// recent rating (if any).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberListEntry {
    pub id: i64,
    pub name: String,
    pub rater_id: Option<i64>,
    pub rater_name: Option<String>,
}
