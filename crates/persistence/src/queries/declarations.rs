// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Declaration queries.
//!
//! Declarations are always read whole: the row plus its family member
//! rows, reassembled into a normalized domain `Declaration`.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use wds_domain::{Declaration, FamilyMember};

use crate::data_models::{
    decode_profile, parse_date, parse_declaration_type, parse_optional_timestamp, parse_relation,
    parse_status,
};
use crate::diesel_schema::{declarations, family_members};
use crate::error::PersistenceError;

/// Diesel Queryable struct for declaration rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = declarations)]
struct DeclarationRow {
    declaration_id: i64,
    user_id: i64,
    declaration_type: String,
    status: String,
    correction_message: Option<String>,
    submitted_at: Option<String>,
    approved_at: Option<String>,
    period_start: String,
    period_end: String,
    income_json: String,
    assets_json: String,
    liabilities_json: String,
    other_financial_info: String,
}

/// Diesel Queryable struct for family member rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = family_members)]
struct FamilyMemberRow {
    family_member_id: i64,
    #[allow(dead_code)]
    declaration_id: i64,
    relation: String,
    full_name: String,
    income_json: String,
    assets_json: String,
    liabilities_json: String,
    other_financial_info: String,
}

fn row_to_member(row: FamilyMemberRow) -> Result<FamilyMember, PersistenceError> {
    Ok(FamilyMember::with_id(
        row.family_member_id,
        parse_relation(&row.relation)?,
        row.full_name,
        decode_profile(
            &row.income_json,
            &row.assets_json,
            &row.liabilities_json,
            row.other_financial_info,
        ),
    ))
}

fn row_to_declaration(
    row: DeclarationRow,
    members: Vec<FamilyMemberRow>,
) -> Result<Declaration, PersistenceError> {
    let family_members: Vec<FamilyMember> = members
        .into_iter()
        .map(row_to_member)
        .collect::<Result<_, _>>()?;

    let mut declaration: Declaration = Declaration::new(
        row.user_id,
        parse_declaration_type(&row.declaration_type)?,
        parse_date(&row.period_start)?,
        parse_date(&row.period_end)?,
        decode_profile(
            &row.income_json,
            &row.assets_json,
            &row.liabilities_json,
            row.other_financial_info,
        ),
        family_members,
    )
    .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;

    declaration.declaration_id = Some(row.declaration_id);
    declaration.status = parse_status(&row.status)?;
    declaration.correction_message = row.correction_message;
    declaration.submitted_at = parse_optional_timestamp(row.submitted_at)?;
    declaration.approved_at = parse_optional_timestamp(row.approved_at)?;
    Ok(declaration)
}

backend_fn! {

/// Retrieves a declaration by ID, family members included.
///
/// Family members come back in creation order.
///
/// # Errors
///
/// Returns `DeclarationNotFound` if no row matches, or an error if a
/// stored row cannot be reconstructed.
pub fn get_declaration(
    conn: &mut _,
    declaration_id: i64,
) -> Result<Declaration, PersistenceError> {
    let result = declarations::table
        .filter(declarations::declaration_id.eq(declaration_id))
        .select(DeclarationRow::as_select())
        .first::<DeclarationRow>(conn);

    let row: DeclarationRow = match result {
        Ok(r) => r,
        Err(diesel::result::Error::NotFound) => {
            return Err(PersistenceError::DeclarationNotFound(declaration_id));
        }
        Err(e) => return Err(PersistenceError::from(e)),
    };

    let members: Vec<FamilyMemberRow> = family_members::table
        .filter(family_members::declaration_id.eq(declaration_id))
        .order(family_members::family_member_id.asc())
        .select(FamilyMemberRow::as_select())
        .load::<FamilyMemberRow>(conn)?;

    row_to_declaration(row, members)
}

}

backend_fn! {

/// Lists all declarations filed by a user, newest first.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored row
/// cannot be reconstructed.
pub fn list_declarations_for_user(
    conn: &mut _,
    user_id: i64,
) -> Result<Vec<Declaration>, PersistenceError> {
    let rows: Vec<DeclarationRow> = declarations::table
        .filter(declarations::user_id.eq(user_id))
        .order(declarations::declaration_id.desc())
        .select(DeclarationRow::as_select())
        .load::<DeclarationRow>(conn)?;

    let mut result: Vec<Declaration> = Vec::with_capacity(rows.len());
    for row in rows {
        let members: Vec<FamilyMemberRow> = family_members::table
            .filter(family_members::declaration_id.eq(row.declaration_id))
            .order(family_members::family_member_id.asc())
            .select(FamilyMemberRow::as_select())
            .load::<FamilyMemberRow>(conn)?;
        result.push(row_to_declaration(row, members)?);
    }
    Ok(result)
}

}
