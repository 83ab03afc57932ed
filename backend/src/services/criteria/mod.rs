//! # Criteria service
//!
//! Read-only access to the static criteria catalogue: captions with their
//! criteria inlined, and single-criterion lookup. The catalogue is seeded
//! once and small, so the tree fetch runs one query per caption without
//! pagination.

pub mod captions;
pub mod get;

use actix_web::{web, Scope};

const API_PATH: &str = "/api/criteria";

/// Routes under `/api/criteria`.
pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("/captions", web::get().to(captions::process))
        .route("/{criterion_id}", web::get().to(get::process))
}
