// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status audit ledger queries.
//!
//! The ledger is append-only; reads never mutate it. Trails come back in
//! ascending transition order so the caller can replay the declaration's
//! history top to bottom.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use wds_audit::StatusAuditRecord;

use crate::data_models::{parse_status, parse_timestamp};
use crate::diesel_schema::status_audit;
use crate::error::PersistenceError;

/// Diesel Queryable struct for audit ledger rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = status_audit)]
struct AuditRow {
    audit_id: i64,
    declaration_id: i64,
    previous_status: String,
    new_status: String,
    previous_correction_message: Option<String>,
    new_correction_message: Option<String>,
    acting_admin_id: i64,
    changed_at: String,
}

fn row_to_record(row: AuditRow) -> Result<StatusAuditRecord, PersistenceError> {
    let mut record: StatusAuditRecord = StatusAuditRecord::new(
        row.declaration_id,
        parse_status(&row.previous_status)?,
        parse_status(&row.new_status)?,
        row.previous_correction_message,
        row.new_correction_message,
        row.acting_admin_id,
        parse_timestamp(&row.changed_at)?,
    );
    record.audit_id = Some(row.audit_id);
    Ok(record)
}

backend_fn! {

/// Retrieves the full audit trail for a declaration, oldest first.
///
/// Returns an empty trail for a declaration that has never been
/// reviewed; existence of the declaration itself is not checked here.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored row
/// cannot be reconstructed.
pub fn get_audit_trail(
    conn: &mut _,
    declaration_id: i64,
) -> Result<Vec<StatusAuditRecord>, PersistenceError> {
    let rows: Vec<AuditRow> = status_audit::table
        .filter(status_audit::declaration_id.eq(declaration_id))
        .order(status_audit::audit_id.asc())
        .select(AuditRow::as_select())
        .load::<AuditRow>(conn)?;

    rows.into_iter().map(row_to_record).collect()
}

}
