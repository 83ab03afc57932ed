use actix_web::{web, Responder};
use log::error;
use rusqlite::{params, Connection};

use crate::auth::RaterIdentity;
use crate::db::Db;

pub async fn process(
    path: web::Path<(i64, i64)>,
    db: web::Data<Db>,
    identity: RaterIdentity,
) -> impl Responder {
    let (member_id, rating_id) = path.into_inner();
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match delete_rating(&conn, member_id, rating_id, identity.rater_id) {
        Ok(success) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "success": success })),
        Err(err) => {
            error!("deleting rating: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// Delete a rating owned by the acting rater.
///
/// Uses the same ownership predicate as the remark update and, like it,
/// reports `false` when zero rows matched instead of claiming success for
/// a no-op.
pub fn delete_rating(
    conn: &Connection,
    member_id: i64,
    rating_id: i64,
    acting_rater_id: i64,
) -> Result<bool, rusqlite::Error> {
    let affected = conn.execute(
        "DELETE FROM ratings WHERE id = ?1 AND member_id = ?2 AND rater_id = ?3",
        params![rating_id, member_id, acting_rater_id],
    )?;
    Ok(affected > 0)
}
