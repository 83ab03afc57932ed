use actix_web::{web, Responder};
use common::model::rating::LatestRating;
use log::error;
use rusqlite::{params, Connection};

use crate::auth::RaterIdentity;
use crate::db::Db;

pub async fn process(
    member_id: web::Path<i64>,
    db: web::Data<Db>,
    _identity: RaterIdentity,
) -> impl Responder {
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match latest_ratings(&conn, member_id.into_inner()) {
        Ok(ratings) => {
            actix_web::HttpResponse::Ok().json(serde_json::json!({ "latest_ratings": ratings }))
        }
        Err(err) => {
            error!("fetching latest ratings: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// One row per criterion the member has been rated on: the rating with the
/// highest timestamp, equal timestamps broken by the highest id. The rater
/// name is left-joined and `None` when the rater was deleted. Row order is
/// unspecified; callers index by `criterion_id`.
pub fn latest_ratings(
    conn: &Connection,
    member_id: i64,
) -> Result<Vec<LatestRating>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT
            r.criterion_id,
            r.level,
            r.remark,
            r.timestamp,
            r.rater_id,
            raters.name
        FROM ratings r
        LEFT JOIN raters ON raters.id = r.rater_id
        WHERE r.member_id = ?1
          AND r.id = (
            SELECT r2.id
            FROM ratings r2
            WHERE r2.member_id = r.member_id
              AND r2.criterion_id = r.criterion_id
            ORDER BY r2.timestamp DESC, r2.id DESC
            LIMIT 1
          )",
    )?;

    let ratings = stmt
        .query_map(params![member_id], |row| {
            Ok(LatestRating {
                criterion_id: row.get(0)?,
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
