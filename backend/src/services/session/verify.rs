use actix_web::{web, Responder};
use common::requests::VerifyAuthTokenRequest;
use log::error;
use rusqlite::{params, Connection, OptionalExtension};

use crate::clock;
use crate::db::Db;

pub async fn process(
    payload: web::Json<VerifyAuthTokenRequest>,
    db: web::Data<Db>,
) -> impl Responder {
    let conn = match db.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("opening database: {}", err);
            return actix_web::HttpResponse::InternalServerError().finish();
        }
    };

    match check_and_renew(&conn, &payload.auth_token, clock::now()) {
        Ok(rater_id) => actix_web::HttpResponse::Ok()
            .json(serde_json::json!({ "is_valid": rater_id.is_some() })),
        Err(err) => {
            error!("verifying auth token: {}", err);
            actix_web::HttpResponse::InternalServerError().finish()
        }
    }
}

/// Resolve a token to its rater and push the expiry forward to
/// `now + 60 days`.
///
/// Returns `None` for an unknown token and for one whose expiry is at or
/// before `now`. Expired rows are left in place; the periodic sweep removes
/// them. Renewal only ever happens on a row that is still live at `now`, so
/// interleaving with the sweep cannot resurrect a swept token.
pub fn check_and_renew(
    conn: &Connection,
    auth_token: &str,
    now: i64,
) -> Result<Option<i64>, rusqlite::Error> {
    let row: Option<(i64, i64, i64)> = conn
        .query_row(
            "SELECT id, rater_id, expiry_timestamp FROM auth_tokens WHERE auth_token = ?1",
            params![auth_token],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    let Some((id, rater_id, expiry)) = row else {
        return Ok(None);
    };

    if expiry <= now {
        return Ok(None);
    }

    conn.execute(
        "UPDATE auth_tokens SET expiry_timestamp = ?1 WHERE id = ?2",
        params![clock::new_expiry(now), id],
    )?;

    Ok(Some(rater_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TOKEN_TTL_SECS;
    use crate::services::testing::{insert_rater, insert_token, test_conn};

    const DAY: i64 = 3600 * 24;

    fn stored_expiry(conn: &Connection, token: &str) -> i64 {
        conn.query_row(
            "SELECT expiry_timestamp FROM auth_tokens WHERE auth_token = ?1",
            params![token],
            |row| row.get(0),
        )
        .expect("token row")
    }

    #[test]
    fn unknown_token_is_rejected() {
        let conn = test_conn();
        assert_eq!(check_and_renew(&conn, "no-such-token", 0).expect("query"), None);
    }

    #[test]
    fn expired_token_is_rejected_but_kept() {
        let conn = test_conn();
        let rater_id = insert_rater(&conn, "Skipper", "skipper", "hunter2!");
        insert_token(&conn, rater_id, "tok", 1_000);

        assert_eq!(check_and_renew(&conn, "tok", 1_000).expect("query"), None);
        assert_eq!(check_and_renew(&conn, "tok", 2_000).expect("query"), None);
        // Logical expiry only; the row stays until the sweep removes it.
        assert_eq!(stored_expiry(&conn, "tok"), 1_000);
    }

    #[test]
    fn each_verification_strictly_extends_expiry() {
        let conn = test_conn();
        let rater_id = insert_rater(&conn, "Skipper", "skipper", "hunter2!");
        insert_token(&conn, rater_id, "tok", TOKEN_TTL_SECS);

        let mut previous = stored_expiry(&conn, "tok");
        for now in [10, 500, 40_000] {
            assert_eq!(
                check_and_renew(&conn, "tok", now).expect("query"),
                Some(rater_id)
            );
            let renewed = stored_expiry(&conn, "tok");
            assert!(renewed > previous);
            assert_eq!(renewed, now + TOKEN_TTL_SECS);
            previous = renewed;
        }
    }

    #[test]
    fn sliding_window_scenario() {
        // Token issued at t=0 expiring at t+60d: a verify at day 59 renews
        // it to day 119, but day 130 is past that and fails.
        let conn = test_conn();
        let rater_id = insert_rater(&conn, "Skipper", "skipper", "hunter2!");
        insert_token(&conn, rater_id, "tok", 60 * DAY);

        assert_eq!(
            check_and_renew(&conn, "tok", 59 * DAY).expect("query"),
            Some(rater_id)
        );
        assert_eq!(stored_expiry(&conn, "tok"), 119 * DAY);

        assert_eq!(check_and_renew(&conn, "tok", 130 * DAY).expect("query"), None);
    }
}
