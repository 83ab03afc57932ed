use actix_web::{web, Responder};
use common::model::rater::Rater;
use log::error;
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::RaterIdentity;
use crate::db::Db;

/// The signed-in rater's public record, used by the client header bar.
pub async fn process(db: web::Data<Db>, identity: RaterIdentity) -> impl Responder {
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match get_rater(&conn, identity.rater_id) {
        Ok(rater) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "rater": rater })),
        Err(err) => {
            error!("fetching rater: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn get_rater(conn: &Connection, rater_id: i64) -> Result<Option<Rater>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, name FROM raters WHERE id = ?1",
        params![rater_id],
        |row| {
            Ok(Rater {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        },
    )
    .optional()
}
