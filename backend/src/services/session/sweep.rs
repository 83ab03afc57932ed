//! Periodic garbage collection for expired auth tokens.
//!
//! Expiry is enforced logically at verification time; this sweep is the
//! only thing that physically deletes rows. It targets rows already past
//! expiry at the moment it runs, so it can interleave freely with
//! verification and renewal.

use std::time::Duration;

use log::{debug, error};
use rusqlite::{params, Connection};

use crate::clock;
use crate::db::Db;

const SWEEP_INTERVAL: Duration = Duration::from_secs(3600);

/// Delete all tokens whose expiry lies strictly before `now`. Returns the
/// number of rows removed.
pub fn delete_expired(conn: &Connection, now: i64) -> Result<usize, rusqlite::Error> {
    conn.execute(
        "DELETE FROM auth_tokens WHERE expiry_timestamp < ?1",
        params![now],
    )
}

/// Hourly sweep loop, spawned once at startup. A failed pass is logged and
/// retried on the next tick; it never takes the server down.
pub async fn run(db: Db) {
    let mut interval = tokio::time::interval(SWEEP_INTERVAL);
    loop {
        interval.tick().await;
        match db.open().and_then(|conn| delete_expired(&conn, clock::now())) {
            Ok(0) => {}
            Ok(swept) => debug!("swept {} expired auth tokens", swept),
            Err(err) => error!("auth token sweep failed: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::verify::check_and_renew;
    use crate::services::testing::{insert_rater, insert_token, test_conn};

    fn token_count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM auth_tokens", [], |row| row.get(0))
            .expect("count")
    }

    #[test]
    fn removes_only_rows_past_expiry() {
        let conn = test_conn();
        let rater_id = insert_rater(&conn, "Skipper", "skipper", "hunter2!");
        insert_token(&conn, rater_id, "stale", 500);
        insert_token(&conn, rater_id, "live", 5_000);

        let swept = delete_expired(&conn, 1_000).expect("sweep");
        assert_eq!(swept, 1);
        assert_eq!(token_count(&conn), 1);
        assert_eq!(
            check_and_renew(&conn, "live", 1_000).expect("verify"),
            Some(rater_id)
        );
    }

    #[test]
    fn row_expiring_exactly_now_is_kept_but_already_invalid() {
        let conn = test_conn();
        let rater_id = insert_rater(&conn, "Skipper", "skipper", "hunter2!");
        insert_token(&conn, rater_id, "edge", 1_000);

        assert_eq!(delete_expired(&conn, 1_000).expect("sweep"), 0);
        assert_eq!(token_count(&conn), 1);
        assert_eq!(check_and_renew(&conn, "edge", 1_000).expect("verify"), None);
    }

    #[test]
    fn empty_table_sweeps_nothing() {
        let conn = test_conn();
        assert_eq!(delete_expired(&conn, i64::MAX).expect("sweep"), 0);
    }
}
