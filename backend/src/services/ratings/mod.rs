//! # Rating services
//!
//! Query side: the latest rating per (member, criterion) and the full
//! history for one criterion. Mutation side: appending ratings and the
//! ownership-gated remark edit and delete — a rating may only be touched
//! by the rater who wrote it, checked against the stored `rater_id` at the
//! time of the request.
//!
//! Rating routes live under the member they belong to, so they are wired
//! into the `/api/members` scope by [`super::members::configure_routes`].

pub mod add;
pub mod delete;
pub mod for_criterion;
pub mod latest;
pub mod update_remark;
