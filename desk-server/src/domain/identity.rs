//! Identity Resolution
//!
//! Matching a waiver submission to an existing customer record. Matching
//! is exact and case-sensitive; near-duplicates are tolerated rather than
//! merged. For adults the email is tried first, then the full name. For
//! minors the email is skipped entirely: a guardian's email is commonly
//! shared across several dependents and would collapse siblings into one
//! record.

use sqlx::SqliteConnection;

use crate::db::repository::{RepoResult, customer};
use shared::models::WaiverSubmit;

/// Resolve a waiver submission to a customer id, creating the customer
/// when no exact match exists.
///
/// On a match, contact fields are refreshed last-write-wins from the
/// submission. Runs on the caller's transaction so the waiver insert and
/// any customer write commit together.
pub async fn resolve_customer(
    conn: &mut SqliteConnection,
    submit: &WaiverSubmit,
) -> RepoResult<i64> {
    let email = submit
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());

    let matched = if submit.waiver_type.is_minor() {
        customer::find_id_by_name(conn, &submit.first_name, &submit.last_name).await?
    } else {
        let by_email = match email {
            Some(e) => customer::find_id_by_email(conn, e).await?,
            None => None,
        };
        match by_email {
            Some(id) => Some(id),
            None => customer::find_id_by_name(conn, &submit.first_name, &submit.last_name).await?,
        }
    };

    match matched {
        Some(id) => {
            customer::refresh_contact(
                conn,
                id,
                email,
                submit.phone.as_deref(),
                submit.date_of_birth.as_deref(),
            )
            .await?;
            Ok(id)
        }
        None => {
            customer::create(
                conn,
                &submit.first_name,
                &submit.last_name,
                email,
                submit.phone.as_deref(),
                submit.date_of_birth.as_deref(),
            )
            .await
        }
    }
}
