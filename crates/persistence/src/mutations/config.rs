// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lock flag, declaration window, and edit override mutations.
//!
//! All three are administrator-controlled configuration. Lock flags live
//! in a singleton row; windows and overrides are append-style rows that
//! are deactivated rather than deleted so history stays inspectable.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};
use wds_domain::{DeclarationWindow, EditOverride, LockFlags};

use crate::backend::PersistenceBackend;
use crate::data_models::{format_date, format_timestamp};
use crate::diesel_schema::{declaration_edit_overrides, declaration_windows, lock_flags};
use crate::error::PersistenceError;

backend_fn! {

/// Writes the per-type lock flags to the singleton row.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn save_lock_flags(
    conn: &mut _,
    flags: &LockFlags,
    updated_by: i64,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    diesel::update(lock_flags::table.filter(lock_flags::lock_id.eq(1)))
        .set((
            lock_flags::first_locked.eq(i32::from(flags.first_declaration_locked)),
            lock_flags::biennial_locked.eq(i32::from(flags.biennial_declaration_locked)),
            lock_flags::final_locked.eq(i32::from(flags.final_declaration_locked)),
            lock_flags::updated_by.eq(Some(updated_by)),
            lock_flags::updated_at.eq(Some(updated_at)),
        ))
        .execute(conn)?;

    info!(
        updated_by,
        first_locked = flags.first_declaration_locked,
        biennial_locked = flags.biennial_declaration_locked,
        final_locked = flags.final_declaration_locked,
        "Saved lock flags"
    );
    Ok(())
}

}

backend_fn! {

/// Inserts a declaration window.
///
/// # Returns
///
/// The window ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_window(
    conn: &mut _,
    window: &DeclarationWindow,
    created_by: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(declaration_windows::table)
        .values((
            declaration_windows::year.eq(window.year),
            declaration_windows::start_date.eq(format_date(window.start_date)),
            declaration_windows::end_date.eq(format_date(window.end_date)),
            declaration_windows::is_active.eq(i32::from(window.active)),
            declaration_windows::notes.eq(window.notes.as_deref()),
            declaration_windows::created_by.eq(created_by),
        ))
        .execute(conn)?;

    let window_id: i64 = conn.get_last_insert_rowid()?;
    debug!(window_id, year = ?window.year, created_by, "Inserted declaration window");
    Ok(window_id)
}

}

backend_fn! {

/// Activates or deactivates a declaration window.
///
/// # Errors
///
/// Returns `NotFound` if no window matches.
pub fn set_window_active(
    conn: &mut _,
    window_id: i64,
    active: bool,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        declaration_windows::table.filter(declaration_windows::window_id.eq(window_id)),
    )
    .set(declaration_windows::is_active.eq(i32::from(active)))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Declaration window {window_id}"
        )));
    }
    Ok(())
}

}

backend_fn! {

/// Inserts an edit override.
///
/// Insertion order is creation order; the resolver treats later rows as
/// more recent when several overrides apply at once.
///
/// # Returns
///
/// The override ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_override(
    conn: &mut _,
    edit_override: &EditOverride,
    created_by: i64,
) -> Result<i64, PersistenceError> {
    let allow_from: String = format_timestamp(edit_override.allow_from)?;
    let allow_until: String = format_timestamp(edit_override.allow_until)?;

    diesel::insert_into(declaration_edit_overrides::table)
        .values((
            declaration_edit_overrides::user_id.eq(edit_override.user_id),
            declaration_edit_overrides::declaration_id.eq(edit_override.declaration_id),
            declaration_edit_overrides::allow_from.eq(&allow_from),
            declaration_edit_overrides::allow_until.eq(&allow_until),
            declaration_edit_overrides::allow_access.eq(i32::from(edit_override.allow)),
            declaration_edit_overrides::is_active.eq(i32::from(edit_override.active)),
            declaration_edit_overrides::reason.eq(&edit_override.reason),
            declaration_edit_overrides::created_by.eq(created_by),
        ))
        .execute(conn)?;

    let override_id: i64 = conn.get_last_insert_rowid()?;
    debug!(
        override_id,
        user_id = ?edit_override.user_id,
        declaration_id = ?edit_override.declaration_id,
        allow = edit_override.allow,
        created_by,
        "Inserted edit override"
    );
    Ok(override_id)
}

}

backend_fn! {

/// Activates or deactivates an edit override.
///
/// # Errors
///
/// Returns `NotFound` if no override matches.
pub fn set_override_active(
    conn: &mut _,
    override_id: i64,
    active: bool,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        declaration_edit_overrides::table
            .filter(declaration_edit_overrides::override_id.eq(override_id)),
    )
    .set(declaration_edit_overrides::is_active.eq(i32::from(active)))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Edit override {override_id}"
        )));
    }
    Ok(())
}

}
