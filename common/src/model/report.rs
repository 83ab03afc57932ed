use serde::{Deserialize, Serialize};

use crate::model::criteria::CriteriaCaption;
use crate::model::member::Member;
use crate::model::rating::LatestRating;

/// Everything the shareable progress report page needs in one payload:
/// the member, the full criteria catalogue and the member's latest rating
/// per criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberReport {
    pub member: Member,
    pub criteria_captions: Vec<CriteriaCaption>,
    pub latest_ratings: Vec<LatestRating>,
}
