use actix_web::{web, Responder};
use common::model::member::MemberListEntry;
use log::error;
use rusqlite::Connection;

use crate::auth::RaterIdentity;
use crate::db::Db;

pub async fn process(db: web::Data<Db>, _identity: RaterIdentity) -> impl Responder {
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match get_members(&conn) {
        Ok(members) => actix_web::HttpResponse::Ok().json(serde_json::json!({ "members": members })),
        Err(err) => {
            error!("listing members: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// All members, each annotated with the rater who wrote their most recent
/// rating across all criteria. Members without ratings get `None` for both
/// rater fields.
pub fn get_members(conn: &Connection) -> Result<Vec<MemberListEntry>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT
            m.id,
            m.name,
            last.rater_id,
            raters.name
        FROM members m
        LEFT JOIN ratings last ON last.id = (
            SELECT r.id
            FROM ratings r
            WHERE r.member_id = m.id
            ORDER BY r.timestamp DESC, r.id DESC
            LIMIT 1
        )
        LEFT JOIN raters ON raters.id = last.rater_id",
    )?;

    let members = stmt
        .query_map([], |row| {
            Ok(MemberListEntry {
                id: row.get(0)?,
                name: row.get(1)?,
                rater_id: row.get(2)?,
                rater_name: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(members)
}
