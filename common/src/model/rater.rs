use serde::{Deserialize, Serialize};

/// Public view of a rater. The password digest and superuser flag stay
/// server-side and are never serialised here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rater {
    pub id: i64,
    pub name: String,
}
