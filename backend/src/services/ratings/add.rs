use actix_web::{web, Responder};
use common::requests::RatingPayload;
use log::error;
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::auth::RaterIdentity;
use crate::clock;
use crate::db::Db;

/// Skill levels run from 1 (novice) to 6 (mastered).
pub const LEVEL_MIN: i64 = 1;
pub const LEVEL_MAX: i64 = 6;

#[derive(Debug, Error)]
pub enum AddRatingError {
    #[error("level {0} outside 1..=6")]
    LevelOutOfRange(i64),
    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

pub async fn process(
    path: web::Path<(i64, i64)>,
    payload: web::Json<RatingPayload>,
    db: web::Data<Db>,
    identity: RaterIdentity,
) -> impl Responder {
    let (member_id, criterion_id) = path.into_inner();
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match add_rating(
        &conn,
        member_id,
        criterion_id,
        identity.rater_id,
        payload.rating.level,
        payload.rating.remark.as_deref(),
        clock::now(),
    ) {
        Ok(()) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(AddRatingError::LevelOutOfRange(_)) => actix_web::HttpResponse::BadRequest().finish(),
        Err(AddRatingError::Db(err)) => {
            error!("adding rating: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// Append a rating stamped with `now`.
///
/// The level range is a domain invariant and is re-checked here even though
/// the boundary already validates the payload. There is no uniqueness
/// constraint: repeated ratings for the same pair accumulate as history.
pub fn add_rating(
    conn: &Connection,
    member_id: i64,
    criterion_id: i64,
    rater_id: i64,
    level: i64,
    remark: Option<&str>,
    now: i64,
) -> Result<(), AddRatingError> {
    if !(LEVEL_MIN..=LEVEL_MAX).contains(&level) {
        return Err(AddRatingError::LevelOutOfRange(level));
    }

    conn.execute(
        "INSERT INTO ratings (member_id, criterion_id, rater_id, level, remark, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![member_id, criterion_id, rater_id, level, remark, now],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ratings::for_criterion::ratings_for_criterion;
    use crate::services::testing::{insert_member, insert_rater, test_conn};
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(-3)]
    #[case(100)]
    fn out_of_range_level_is_rejected(#[case] level: i64) {
        let conn = test_conn();
        let member = insert_member(&conn, "Trainee");
        let rater = insert_rater(&conn, "Skipper", "skipper", "hunter2!");

        let err = add_rating(&conn, member, 7, rater, level, None, 100)
            .expect_err("level outside 1..=6 must fail");
        assert!(matches!(err, AddRatingError::LevelOutOfRange(l) if l == level));
        assert!(ratings_for_criterion(&conn, member, 7).expect("query").is_empty());
    }

    #[rstest]
    #[case(1)]
    #[case(6)]
    fn boundary_levels_are_accepted(#[case] level: i64) {
        let conn = test_conn();
        let member = insert_member(&conn, "Trainee");
        let rater = insert_rater(&conn, "Skipper", "skipper", "hunter2!");

        add_rating(&conn, member, 7, rater, level, Some("ok"), 100).expect("valid level");
        let history = ratings_for_criterion(&conn, member, 7).expect("query");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].level, level);
        assert_eq!(history[0].timestamp, 100);
    }

    #[test]
    fn repeated_ratings_accumulate_as_history() {
        let conn = test_conn();
        let member = insert_member(&conn, "Trainee");
        let rater = insert_rater(&conn, "Skipper", "skipper", "hunter2!");

        add_rating(&conn, member, 7, rater, 2, None, 100).expect("first");
        add_rating(&conn, member, 7, rater, 3, Some("improving"), 200).expect("second");

        let history = ratings_for_criterion(&conn, member, 7).expect("query");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].level, 3);
        assert_eq!(history[1].level, 2);
    }
}
