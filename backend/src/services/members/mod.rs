//! # Member service
//!
//! Member CRUD, the lazily minted share token and the combined progress
//! report. Rating routes are member-scoped, so this module also mounts the
//! handlers from [`super::ratings`].
//!
//! Everything here requires rater authentication except the report fetched
//! through a share token, which is the one read-only capability handed to
//! members themselves.
//!
//! ## Routes under `/api/members`
//! - `GET ""` — members with the rater of their most recent rating.
//! - `PUT ""` — add a member.
//! - `GET /report/{share_token}` — report via capability, no rater auth.
//! - `GET | POST | DELETE /{id}` — fetch / rename / remove one member.
//! - `GET /{id}/share_token` — mint-or-fetch the stable share token.
//! - `GET /{id}/report` — full report for an authenticated rater.
//! - `GET /{id}/latest_ratings` — latest rating per criterion.
//! - `GET | PUT /{id}/ratings_for_criterion/{criterion_id}` — history / add.
//! - `POST | DELETE /{id}/ratings/{rating_id}` — edit remark / delete.

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod report;
pub mod share_token;
pub mod update;

use actix_web::{web, Scope};

use super::ratings;

const API_PATH: &str = "/api/members";

/// Routes under `/api/members`. The share-token report route is registered
/// before `/{id}` so the literal `report` segment wins the match.
pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("", web::put().to(add::process))
        .route(
            "/report/{share_token}",
            web::get().to(report::process_by_share_token),
        )
        .route("/{id}", web::get().to(get::process))
        .route("/{id}", web::post().to(update::process))
        .route("/{id}", web::delete().to(delete::process))
        .route("/{id}/share_token", web::get().to(share_token::process))
        .route("/{id}/report", web::get().to(report::process))
        .route(
            "/{id}/latest_ratings",
            web::get().to(ratings::latest::process),
        )
        .route(
            "/{id}/ratings_for_criterion/{criterion_id}",
            web::get().to(ratings::for_criterion::process),
        )
        .route(
            "/{id}/ratings_for_criterion/{criterion_id}",
            web::put().to(ratings::add::process),
        )
        .route(
            "/{id}/ratings/{rating_id}",
            web::post().to(ratings::update_remark::process),
        )
        .route(
            "/{id}/ratings/{rating_id}",
            web::delete().to(ratings::delete::process),
        )
}
