// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions between stored column formats and domain values.
//!
//! Financial arrays are stored as `JSON` text, dates as `ISO 8601` dates,
//! and timestamps as `RFC 3339` strings. Decoding financial columns is
//! deliberately lenient: historical rows written by earlier systems may
//! hold plain numbers or doubly-encoded `JSON`, and those normalize through
//! `FinancialField::from_value` instead of failing the whole read.

use std::str::FromStr;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, OffsetDateTime};
use wds_domain::{
    DeclarationStatus, DeclarationType, FinancialField, FinancialProfile, Relation,
};

use crate::error::PersistenceError;

/// Encodes a financial field as its canonical `JSON` column value.
pub(crate) fn encode_financial_field(
    field: &FinancialField,
) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(field)?)
}

/// Decodes a financial column back into a normalized field.
///
/// Never fails: malformed content decodes as `FinancialField::Empty`.
pub(crate) fn decode_financial_field(raw: &str) -> FinancialField {
    serde_json::from_str::<serde_json::Value>(raw)
        .map_or(FinancialField::Empty, |value| {
            FinancialField::from_value(&value)
        })
}

/// Encodes a financial profile into its three `JSON` columns.
pub(crate) fn encode_profile(
    profile: &FinancialProfile,
) -> Result<(String, String, String), PersistenceError> {
    Ok((
        encode_financial_field(&profile.income)?,
        encode_financial_field(&profile.assets)?,
        encode_financial_field(&profile.liabilities)?,
    ))
}

/// Reassembles a financial profile from its stored columns.
pub(crate) fn decode_profile(
    income_json: &str,
    assets_json: &str,
    liabilities_json: &str,
    other_financial_info: String,
) -> FinancialProfile {
    FinancialProfile::new(
        decode_financial_field(income_json),
        decode_financial_field(assets_json),
        decode_financial_field(liabilities_json),
        other_financial_info,
    )
}

pub(crate) fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

pub(crate) fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map_err(|e| PersistenceError::ReconstructionError(format!("Bad timestamp '{value}': {e}")))
}

pub(crate) fn format_optional_timestamp(
    value: Option<OffsetDateTime>,
) -> Result<Option<String>, PersistenceError> {
    value.map(format_timestamp).transpose()
}

pub(crate) fn parse_optional_timestamp(
    value: Option<String>,
) -> Result<Option<OffsetDateTime>, PersistenceError> {
    value.as_deref().map(parse_timestamp).transpose()
}

pub(crate) fn format_date(value: Date) -> String {
    value.to_string()
}

pub(crate) fn parse_date(value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, &Iso8601::DEFAULT)
        .map_err(|e| PersistenceError::ReconstructionError(format!("Bad date '{value}': {e}")))
}

pub(crate) fn parse_declaration_type(value: &str) -> Result<DeclarationType, PersistenceError> {
    DeclarationType::from_str(value).map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

pub(crate) fn parse_status(value: &str) -> Result<DeclarationStatus, PersistenceError> {
    DeclarationStatus::from_str(value)
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

pub(crate) fn parse_relation(value: &str) -> Result<Relation, PersistenceError> {
    Relation::from_str(value).map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}
