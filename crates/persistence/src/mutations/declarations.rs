// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Declaration and family member mutations.
//!
//! Declarations and their family members are written atomically: a
//! declaration row plus its member rows either all land or none do.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;
use wds_domain::Declaration;

use crate::backend::PersistenceBackend;
use crate::data_models::{encode_profile, format_date, format_optional_timestamp};
use crate::diesel_schema::{declarations, family_members};
use crate::error::PersistenceError;

backend_fn! {

/// Inserts a declaration together with its family members.
///
/// # Backend-agnostic
///
/// This function uses Diesel DSL exclusively and works with both `SQLite`
/// and `MySQL`.
///
/// # Returns
///
/// The declaration ID assigned by the database.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn insert_declaration(
    conn: &mut _,
    declaration: &Declaration,
) -> Result<i64, PersistenceError> {
    let (income_json, assets_json, liabilities_json) = encode_profile(&declaration.profile)?;
    let submitted_at: Option<String> = format_optional_timestamp(declaration.submitted_at)?;
    let approved_at: Option<String> = format_optional_timestamp(declaration.approved_at)?;

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(declarations::table)
            .values((
                declarations::user_id.eq(declaration.user_id),
                declarations::declaration_type.eq(declaration.declaration_type.as_str()),
                declarations::status.eq(declaration.status.as_str()),
                declarations::correction_message.eq(declaration.correction_message.as_deref()),
                declarations::submitted_at.eq(submitted_at.as_deref()),
                declarations::approved_at.eq(approved_at.as_deref()),
                declarations::period_start.eq(format_date(declaration.period_start)),
                declarations::period_end.eq(format_date(declaration.period_end)),
                declarations::income_json.eq(&income_json),
                declarations::assets_json.eq(&assets_json),
                declarations::liabilities_json.eq(&liabilities_json),
                declarations::other_financial_info.eq(&declaration.profile.other_financial_info),
            ))
            .execute(conn)?;

        let declaration_id: i64 = conn.get_last_insert_rowid()?;

        for member in &declaration.family_members {
            let (member_income, member_assets, member_liabilities) =
                encode_profile(&member.profile)?;
            diesel::insert_into(family_members::table)
                .values((
                    family_members::declaration_id.eq(declaration_id),
                    family_members::relation.eq(member.relation.as_str()),
                    family_members::full_name.eq(member.full_name.as_str()),
                    family_members::income_json.eq(&member_income),
                    family_members::assets_json.eq(&member_assets),
                    family_members::liabilities_json.eq(&member_liabilities),
                    family_members::other_financial_info
                        .eq(member.profile.other_financial_info.as_str()),
                ))
                .execute(conn)?;
        }

        debug!(
            declaration_id,
            user_id = declaration.user_id,
            declaration_type = declaration.declaration_type.as_str(),
            family_members = declaration.family_members.len(),
            "Inserted declaration"
        );
        Ok(declaration_id)
    })
}

}

backend_fn! {

/// Rewrites an existing declaration's editable content.
///
/// Status, correction message, timestamps, reporting period, financial
/// arrays, and free text are replaced with the values on the passed
/// declaration; the family member set is replaced wholesale. The
/// declaration type and filing user never change after creation.
///
/// # Errors
///
/// Returns `DeclarationNotFound` if no row matches, or an error if
/// serialization or a write fails.
pub fn update_declaration(
    conn: &mut _,
    declaration_id: i64,
    declaration: &Declaration,
) -> Result<(), PersistenceError> {
    let (income_json, assets_json, liabilities_json) = encode_profile(&declaration.profile)?;
    let submitted_at: Option<String> = format_optional_timestamp(declaration.submitted_at)?;
    let approved_at: Option<String> = format_optional_timestamp(declaration.approved_at)?;

    conn.transaction::<(), PersistenceError, _>(|conn| {
        let updated: usize = diesel::update(
            declarations::table.filter(declarations::declaration_id.eq(declaration_id)),
        )
        .set((
            declarations::status.eq(declaration.status.as_str()),
            declarations::correction_message.eq(declaration.correction_message.as_deref()),
            declarations::submitted_at.eq(submitted_at.as_deref()),
            declarations::approved_at.eq(approved_at.as_deref()),
            declarations::period_start.eq(format_date(declaration.period_start)),
            declarations::period_end.eq(format_date(declaration.period_end)),
            declarations::income_json.eq(&income_json),
            declarations::assets_json.eq(&assets_json),
            declarations::liabilities_json.eq(&liabilities_json),
            declarations::other_financial_info.eq(&declaration.profile.other_financial_info),
        ))
        .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::DeclarationNotFound(declaration_id));
        }

        diesel::delete(
            family_members::table.filter(family_members::declaration_id.eq(declaration_id)),
        )
        .execute(conn)?;

        for member in &declaration.family_members {
            let (member_income, member_assets, member_liabilities) =
                encode_profile(&member.profile)?;
            diesel::insert_into(family_members::table)
                .values((
                    family_members::declaration_id.eq(declaration_id),
                    family_members::relation.eq(member.relation.as_str()),
                    family_members::full_name.eq(member.full_name.as_str()),
                    family_members::income_json.eq(&member_income),
                    family_members::assets_json.eq(&member_assets),
                    family_members::liabilities_json.eq(&member_liabilities),
                    family_members::other_financial_info
                        .eq(member.profile.other_financial_info.as_str()),
                ))
                .execute(conn)?;
        }

        debug!(declaration_id, "Updated declaration");
        Ok(())
    })
}

}
