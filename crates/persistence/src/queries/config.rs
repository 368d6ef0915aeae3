// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lock flag, declaration window, and edit override queries.
//!
//! Windows and overrides are returned in creation order (ascending ID),
//! which is the order the access resolver expects: among simultaneously
//! applicable overrides it treats the last one as decisive.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use wds_domain::{DeclarationWindow, EditOverride, LockFlags};

use crate::data_models::{parse_date, parse_timestamp};
use crate::diesel_schema::{declaration_edit_overrides, declaration_windows, lock_flags};
use crate::error::PersistenceError;

/// Diesel Queryable struct for the lock flag singleton row.
#[derive(Queryable, Selectable)]
#[diesel(table_name = lock_flags)]
struct LockFlagsRow {
    #[allow(dead_code)]
    lock_id: i64,
    first_locked: i32,
    biennial_locked: i32,
    final_locked: i32,
    #[allow(dead_code)]
    updated_by: Option<i64>,
    #[allow(dead_code)]
    updated_at: Option<String>,
}

/// Diesel Queryable struct for declaration window rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = declaration_windows)]
struct WindowRow {
    window_id: i64,
    year: Option<i32>,
    start_date: String,
    end_date: String,
    is_active: i32,
    notes: Option<String>,
    #[allow(dead_code)]
    created_by: i64,
}

/// Diesel Queryable struct for edit override rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = declaration_edit_overrides)]
struct OverrideRow {
    override_id: i64,
    user_id: Option<i64>,
    declaration_id: Option<i64>,
    allow_from: String,
    allow_until: String,
    allow_access: i32,
    is_active: i32,
    reason: String,
    #[allow(dead_code)]
    created_by: i64,
}

fn row_to_window(row: WindowRow) -> Result<DeclarationWindow, PersistenceError> {
    Ok(DeclarationWindow {
        window_id: Some(row.window_id),
        year: row.year,
        start_date: parse_date(&row.start_date)?,
        end_date: parse_date(&row.end_date)?,
        active: row.is_active != 0,
        notes: row.notes,
    })
}

fn row_to_override(row: OverrideRow) -> Result<EditOverride, PersistenceError> {
    Ok(EditOverride {
        override_id: Some(row.override_id),
        user_id: row.user_id,
        declaration_id: row.declaration_id,
        allow_from: parse_timestamp(&row.allow_from)?,
        allow_until: parse_timestamp(&row.allow_until)?,
        allow: row.allow_access != 0,
        active: row.is_active != 0,
        reason: row.reason,
    })
}

backend_fn! {

/// Loads the per-type lock flags from the singleton row.
///
/// # Errors
///
/// Returns an error if the singleton row is missing or the query fails.
pub fn load_lock_flags(conn: &mut _) -> Result<LockFlags, PersistenceError> {
    let row: LockFlagsRow = lock_flags::table
        .filter(lock_flags::lock_id.eq(1))
        .select(LockFlagsRow::as_select())
        .first::<LockFlagsRow>(conn)?;

    Ok(LockFlags {
        first_declaration_locked: row.first_locked != 0,
        biennial_declaration_locked: row.biennial_locked != 0,
        final_declaration_locked: row.final_locked != 0,
    })
}

}

backend_fn! {

/// Lists all declaration windows in creation order.
///
/// Inactive windows are included; the resolver skips them itself.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored row
/// cannot be reconstructed.
pub fn list_windows(conn: &mut _) -> Result<Vec<DeclarationWindow>, PersistenceError> {
    let rows: Vec<WindowRow> = declaration_windows::table
        .order(declaration_windows::window_id.asc())
        .select(WindowRow::as_select())
        .load::<WindowRow>(conn)?;

    rows.into_iter().map(row_to_window).collect()
}

}

backend_fn! {

/// Lists all edit overrides in creation order.
///
/// Inactive and expired overrides are included; the resolver skips them
/// itself.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored row
/// cannot be reconstructed.
pub fn list_overrides(conn: &mut _) -> Result<Vec<EditOverride>, PersistenceError> {
    let rows: Vec<OverrideRow> = declaration_edit_overrides::table
        .order(declaration_edit_overrides::override_id.asc())
        .select(OverrideRow::as_select())
        .load::<OverrideRow>(conn)?;

    rows.into_iter().map(row_to_override).collect()
}

}
