use actix_web::{web, Responder};
use common::model::criteria::{CriteriaCaption, Criterion};
use log::error;
use rusqlite::{params, Connection};

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

    match captions_with_criteria(&conn) {
        Ok(captions) => actix_web::HttpResponse::Ok()
            .json(serde_json::json!({ "criteria_captions": captions })),
        Err(err) => {
            error!("fetching criteria captions: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// The full catalogue tree. All captions are fetched first, then each
/// caption's criteria in turn; the response is only assembled once every
/// branch is complete.
pub fn captions_with_criteria(
    conn: &Connection,
) -> Result<Vec<CriteriaCaption>, rusqlite::Error> {
    let mut captions_stmt = conn.prepare("SELECT id, caption FROM criteria_captions")?;
    let captions = captions_stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut criteria_stmt =
        conn.prepare("SELECT id, criterion FROM criteria WHERE criteria_caption_id = ?1")?;

    let mut tree = Vec::with_capacity(captions.len());
    for (id, caption) in captions {
        let criteria = criteria_stmt
            .query_map(params![id], |row| {
                Ok(Criterion {
                    id: row.get(0)?,
                    criterion: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        tree.push(CriteriaCaption {
            id,
            caption,
            criteria,
        });
    }

    Ok(tree)
}
