use actix_web::{web, Responder};
use common::requests::RatingPayload;
use log::error;
use rusqlite::{params, Connection};

use crate::auth::RaterIdentity;
use crate::db::Db;

pub async fn process(
    path: web::Path<(i64, i64)>,
    payload: web::Json<RatingPayload>,
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

    match update_rating_remark(
        &conn,
        member_id,
        rating_id,
        identity.rater_id,
        payload.rating.remark.as_deref(),
    ) {
        Ok(success) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "success": success })),
        Err(err) => {
            error!("updating rating remark: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// Replace the remark of a rating owned by the acting rater.
///
/// The ownership predicate lives in the statement itself: id, member and
/// the stored `rater_id` must all match, so the check always runs against
/// current data. Zero affected rows — whether the rating does not exist or
/// belongs to someone else — comes back as `false`; the two cases are
/// deliberately indistinguishable. Level and timestamp are immutable.
pub fn update_rating_remark(
    conn: &Connection,
    member_id: i64,
    rating_id: i64,
    acting_rater_id: i64,
    remark: Option<&str>,
) -> Result<bool, rusqlite::Error> {
    let affected = conn.execute(
        "UPDATE ratings SET remark = ?1 WHERE id = ?2 AND member_id = ?3 AND rater_id = ?4",
        params![remark, rating_id, member_id, acting_rater_id],
    )?;
    Ok(affected > 0)
}
