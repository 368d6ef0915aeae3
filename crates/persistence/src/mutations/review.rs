// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transactional status transition persistence.
//!
//! A review writes two things or nothing: the guarded declaration update
//! and its audit ledger row share one transaction. The update is guarded
//! on the expected previous status, so two administrators racing on the
//! same declaration cannot both win; the loser gets `TransitionConflict`
//! and no ledger row.

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, warn};
use wds::ReviewOutcome;
use wds_audit::StatusAuditRecord;

use crate::backend::PersistenceBackend;
use crate::data_models::{format_optional_timestamp, format_timestamp};
use crate::diesel_schema::{declarations, status_audit};
use crate::error::PersistenceError;

backend_fn! {

/// Persists a review outcome: the status transition plus its audit row.
///
/// The declaration row is updated only if its current status still equals
/// the status the review was computed against. Zero updated rows means
/// either the declaration vanished or a concurrent review got there
/// first; both cases roll the transaction back.
///
/// # Returns
///
/// The audit ID assigned to the inserted ledger row.
///
/// # Errors
///
/// Returns `DeclarationNotFound`, `TransitionConflict`, or a database
/// error. On any error nothing is written.
pub fn persist_review(
    conn: &mut _,
    outcome: &ReviewOutcome,
) -> Result<i64, PersistenceError> {
    let record: &StatusAuditRecord = &outcome.audit_record;
    let declaration_id: i64 = record.declaration_id;
    let approved_at: Option<String> =
        format_optional_timestamp(outcome.new_declaration.approved_at)?;
    let changed_at: String = format_timestamp(record.changed_at)?;

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let updated: usize = diesel::update(
            declarations::table
                .filter(declarations::declaration_id.eq(declaration_id))
                .filter(declarations::status.eq(record.previous_status.as_str())),
        )
        .set((
            declarations::status.eq(record.new_status.as_str()),
            declarations::correction_message.eq(record.new_correction_message.as_deref()),
            declarations::approved_at.eq(approved_at.as_deref()),
        ))
        .execute(conn)?;

        if updated == 0 {
            let existing: i64 = declarations::table
                .filter(declarations::declaration_id.eq(declaration_id))
                .select(count_star())
                .first(conn)?;
            if existing == 0 {
                return Err(PersistenceError::DeclarationNotFound(declaration_id));
            }
            warn!(
                declaration_id,
                expected_status = record.previous_status.as_str(),
                "Guarded status update matched no rows"
            );
            return Err(PersistenceError::TransitionConflict {
                declaration_id,
                expected_status: record.previous_status.as_str().to_string(),
            });
        }

        diesel::insert_into(status_audit::table)
            .values((
                status_audit::declaration_id.eq(declaration_id),
                status_audit::previous_status.eq(record.previous_status.as_str()),
                status_audit::new_status.eq(record.new_status.as_str()),
                status_audit::previous_correction_message
                    .eq(record.previous_correction_message.as_deref()),
                status_audit::new_correction_message
                    .eq(record.new_correction_message.as_deref()),
                status_audit::acting_admin_id.eq(record.acting_admin_id),
                status_audit::changed_at.eq(&changed_at),
            ))
            .execute(conn)?;

        let audit_id: i64 = conn.get_last_insert_rowid()?;
        debug!(
            declaration_id,
            audit_id,
            new_status = record.new_status.as_str(),
            acting_admin_id = record.acting_admin_id,
            "Persisted status transition"
        );
        Ok(audit_id)
    })
}

}
