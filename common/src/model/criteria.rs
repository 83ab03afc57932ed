use serde::{Deserialize, Serialize};

/// A single skill being rated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    pub id: i64,
    pub criterion: String,
}

/// A caption grouping related criteria, with its criteria inlined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaCaption {
    pub id: i64,
    pub caption: String,
    pub criteria: Vec<Criterion>,
}
