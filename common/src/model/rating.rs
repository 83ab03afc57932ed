use serde::{Deserialize, Serialize};

/// The most recent rating a member received for one criterion.
///
/// `rater_id` and `rater_name` are `None` when the rater account has since
/// been deleted; the rating itself survives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestRating {
    pub criterion_id: i64,
    pub level: i64,
    pub remark: Option<String>,
    pub timestamp: i64,
    pub rater_id: Option<i64>,
    pub rater_name: Option<String>,
}

/// One entry of a member's rating history for a single criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionRating {
    pub id: i64,
    pub level: i64,
    pub remark: Option<String>,
    pub timestamp: i64,
    pub rater_id: Option<i64>,
    pub rater_name: Option<String>,
}
