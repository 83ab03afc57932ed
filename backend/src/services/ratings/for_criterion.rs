use actix_web::{web, Responder};
use common::model::rating::CriterionRating;
use log::error;
use rusqlite::{params, Connection};

use crate::auth::RaterIdentity;
use crate::db::Db;

pub async fn process(
    path: web::Path<(i64, i64)>,
    db: web::Data<Db>,
    _identity: RaterIdentity,
) -> impl Responder {
    let (member_id, criterion_id) = path.into_inner();
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match ratings_for_criterion(&conn, member_id, criterion_id) {
        Ok(ratings) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "ratings": ratings })),
        Err(err) => {
            error!("fetching ratings for criterion: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// Full rating history for one (member, criterion) pair, most recent first.
pub fn ratings_for_criterion(
    conn: &Connection,
    member_id: i64,
    criterion_id: i64,
) -> Result<Vec<CriterionRating>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT
            ratings.id,
            ratings.level,
            ratings.remark,
            ratings.timestamp,
            ratings.rater_id,
            raters.name
        FROM ratings
        LEFT JOIN raters ON raters.id = ratings.rater_id
        WHERE ratings.member_id = ?1
          AND ratings.criterion_id = ?2
        ORDER BY ratings.timestamp DESC, ratings.id DESC",
    )?;

    let ratings = stmt
        .query_map(params![member_id, criterion_id], |row| {
            Ok(CriterionRating {
                id: row.get(0)?,
                level: row.get(1)?,
                remark: row.get(2)?,
                timestamp: row.get(3)?,
                rater_id: row.get(4)?,
                rater_name: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ratings)
}
