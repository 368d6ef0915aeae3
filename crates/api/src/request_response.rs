// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Financial fields deserialize leniently: a native item array,
//! a JSON-encoded string of one, or a legacy bare scalar are all accepted,
//! exactly as stored records may carry them.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use wds_audit::StatusAuditRecord;
use wds_domain::{
    DecidingRule, DeclarationWindow, EditOverride, FamilyTotals, FinancialField, LockFlags,
};

/// The declaration content submitted by an employee.
///
/// Used both for creating a new declaration and for resubmitting an
/// existing one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeclarationPayload {
    /// The filing employee's identifier.
    pub user_id: i64,
    /// The declaration occasion (`first`, `biennial`, or `final`).
    pub declaration_type: String,
    /// Start of the reporting period the figures cover.
    pub period_start: Date,
    /// End of the reporting period the figures cover.
    pub period_end: Date,
    /// The declarant's income rows.
    #[serde(default)]
    pub income: FinancialField,
    /// The declarant's asset rows.
    #[serde(default)]
    pub assets: FinancialField,
    /// The declarant's liability rows.
    #[serde(default)]
    pub liabilities: FinancialField,
    /// Free-text other financial information.
    #[serde(default)]
    pub other_financial_info: String,
    /// Spouses and children covered by this declaration.
    #[serde(default)]
    pub family_members: Vec<FamilyMemberPayload>,
}

/// One family member within a declaration payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FamilyMemberPayload {
    /// Relation to the declarant (`spouse` or `child`).
    pub relation: String,
    /// The family member's full name.
    pub full_name: String,
    /// The family member's income rows.
    #[serde(default)]
    pub income: FinancialField,
    /// The family member's asset rows.
    #[serde(default)]
    pub assets: FinancialField,
    /// The family member's liability rows.
    #[serde(default)]
    pub liabilities: FinancialField,
    /// Free-text other financial information.
    #[serde(default)]
    pub other_financial_info: String,
}

/// API response for a successful declaration submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitDeclarationResponse {
    /// The canonical identifier assigned by the database.
    pub declaration_id: i64,
    /// The declaration's review status (`pending` at submission).
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API response for a successful declaration update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDeclarationResponse {
    /// The updated declaration's identifier.
    pub declaration_id: i64,
    /// The review status after the update (`pending`; a resubmission
    /// returns the declaration to review).
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API response for an access check.
///
/// A denial is not an error; the verdict and its reason are the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCheckResponse {
    /// Whether creating or editing is currently permitted.
    pub allowed: bool,
    /// Which rule decided the verdict.
    pub rule: DecidingRule,
    /// Human-readable reason, surfaced verbatim to the end user.
    pub reason: String,
}

/// API request to review a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewDeclarationRequest {
    /// The review action (`approve` or `reject`).
    pub action: String,
    /// The correction message; required for rejections, forbidden for
    /// approvals.
    #[serde(default)]
    pub correction_message: Option<String>,
}

/// API response for a successful review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDeclarationResponse {
    /// The reviewed declaration's identifier.
    pub declaration_id: i64,
    /// The status after the transition.
    pub status: String,
    /// The correction message after the transition.
    pub correction_message: Option<String>,
    /// When the transition was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub approved_at: OffsetDateTime,
    /// The identifier of the audit ledger row written by this review.
    pub audit_id: i64,
    /// A success message.
    pub message: String,
}

/// API response carrying a declaration's status audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusAuditResponse {
    /// The declaration the trail belongs to.
    pub declaration_id: i64,
    /// All transitions in ascending order; possibly redacted.
    pub records: Vec<StatusAuditRecord>,
}

/// API response carrying a family's aggregated financial totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationTotalsResponse {
    /// The declaration the totals were computed from.
    pub declaration_id: i64,
    /// Aggregated totals across declarant plus all family members.
    pub totals: FamilyTotals,
}

/// API request to set the per-type lock flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SetLockFlagsRequest {
    pub first_declaration_locked: bool,
    pub biennial_declaration_locked: bool,
    pub final_declaration_locked: bool,
}

/// API response for a successful lock flag update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetLockFlagsResponse {
    /// The flags now in effect.
    pub flags: LockFlags,
    /// A success message.
    pub message: String,
}

/// API request to create a declaration window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateWindowRequest {
    /// The year this window applies to; `None` applies to all years.
    pub year: Option<i32>,
    /// First day of the window (inclusive).
    pub start_date: Date,
    /// Last day of the window (inclusive).
    pub end_date: Date,
    /// Free-text administrator notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// API response for a successful window creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWindowResponse {
    /// The canonical identifier assigned by the database.
    pub window_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to create an edit override.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateOverrideRequest {
    /// The user this override is scoped to; `None` matches any user.
    pub user_id: Option<i64>,
    /// The declaration this override is scoped to; `None` matches any.
    pub declaration_id: Option<i64>,
    /// Start of the override's validity (inclusive).
    #[serde(with = "time::serde::rfc3339")]
    pub allow_from: OffsetDateTime,
    /// End of the override's validity (inclusive).
    #[serde(with = "time::serde::rfc3339")]
    pub allow_until: OffsetDateTime,
    /// Whether this override grants (`true`) or revokes (`false`) access.
    pub allow: bool,
    /// Why the override was granted. Required.
    pub reason: String,
}

/// API response for a successful override creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOverrideResponse {
    /// The canonical identifier assigned by the database.
    pub override_id: i64,
    /// A success message.
    pub message: String,
}

/// API response listing all declaration windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListWindowsResponse {
    /// All windows in creation order, inactive ones included.
    pub windows: Vec<DeclarationWindow>,
}

/// API response listing all edit overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOverridesResponse {
    /// All overrides in creation order, inactive ones included.
    pub overrides: Vec<EditOverride>,
}
