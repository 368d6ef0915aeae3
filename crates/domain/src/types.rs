// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// The literal type label for an explicit "nothing to declare" row.
///
/// A row carrying this label is always valid and is never checked against
/// the financial taxonomy.
pub const NIL_TYPE: &str = "Nil";

/// The three declaration occasions.
///
/// Only `Biennial` declarations are gated by dated declaration windows;
/// `First` and `Final` are gated solely by the administrator lock flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationType {
    /// Filed once on entering public service.
    First,
    /// Filed every two years while in service.
    Biennial,
    /// Filed on leaving public service.
    Final,
}

impl DeclarationType {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Biennial => "biennial",
            Self::Final => "final",
        }
    }
}

impl FromStr for DeclarationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "biennial" => Ok(Self::Biennial),
            "final" => Ok(Self::Final),
            _ => Err(DomainError::InvalidDeclarationType(s.to_string())),
        }
    }
}

impl std::fmt::Display for DeclarationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review status of a declaration.
///
/// Every declaration is created `Pending`. Ordinary administrators move it
/// to `Approved` or `Rejected` exactly once; changing an already-reviewed
/// declaration (a revision) is reserved for super-administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationStatus {
    /// Awaiting administrative review. Initial state at creation.
    #[default]
    Pending,
    /// Accepted by an administrator.
    Approved,
    /// Returned to the employee with a correction message.
    Rejected,
}

impl DeclarationStatus {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true if a transition away from this status is a revision.
    ///
    /// Revisions (`Approved` -> `Rejected`, `Rejected` -> `Approved`, or a
    /// repeated review of the same terminal state) require super-admin
    /// authority.
    #[must_use]
    pub const fn is_reviewed(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl FromStr for DeclarationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidDeclarationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for DeclarationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relation of a family member to the declarant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Spouse,
    Child,
}

impl Relation {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spouse => "spouse",
            Self::Child => "child",
        }
    }
}

impl FromStr for Relation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spouse" => Ok(Self::Spouse),
            "child" => Ok(Self::Child),
            _ => Err(DomainError::InvalidRelation(s.to_string())),
        }
    }
}

/// One categorized income, asset, or liability row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialItem {
    /// The category label, checked against the financial taxonomy.
    /// An empty label marks an incomplete row and is skipped, not rejected.
    #[serde(rename = "type", default)]
    pub item_type: String,
    /// Free-text description of the row.
    #[serde(default)]
    pub description: String,
    /// Monetary value. Non-negative by invariant.
    #[serde(default, deserialize_with = "deserialize_lenient_value")]
    pub value: f64,
}

impl FinancialItem {
    /// Creates a new `FinancialItem`.
    #[must_use]
    pub const fn new(item_type: String, description: String, value: f64) -> Self {
        Self {
            item_type,
            description,
            value,
        }
    }

    /// Builds a `FinancialItem` from a loose JSON value.
    ///
    /// Returns `None` if the value is not a JSON object. Missing or
    /// malformed members default to an empty label, an empty description,
    /// and a zero value; old records frequently carry such rows and they
    /// must not hard-fail ingestion.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let obj = value.as_object()?;
        let item_type: String = obj
            .get("type")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();
        let description: String = obj
            .get("description")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();
        let amount: f64 = obj.get("value").map_or(0.0, lenient_number);
        Some(Self::new(item_type, description, amount))
    }
}

/// Parses a JSON value as a number, accepting numeric strings.
///
/// Anything unparseable contributes zero.
fn lenient_number(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn deserialize_lenient_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
    Ok(lenient_number(&value))
}

/// A financial field as submitted or stored.
///
/// The field's representation changed over the system's lifetime and old
/// records persist in the old shapes:
///
/// - modern records hold a native array of [`FinancialItem`]s
/// - older records hold a JSON-encoded string of the same array
/// - the oldest records hold a bare numeric total (possibly as a string)
///
/// The shape is sniffed once at ingestion via [`FinancialField::from_value`];
/// every consumer downstream works with this normalized representation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FinancialField {
    /// Structured rows of categorized financial items.
    Items(Vec<FinancialItem>),
    /// Legacy bare numeric total.
    Scalar(f64),
    /// Nothing usable: absent, malformed JSON, or an unparseable scalar.
    #[default]
    Empty,
}

impl FinancialField {
    /// Normalizes a loose JSON value into a `FinancialField`.
    ///
    /// - a JSON array becomes [`FinancialField::Items`], skipping elements
    ///   that are not objects
    /// - a string is first re-parsed as a JSON array; failing that it is
    ///   parsed as a plain number
    /// - a bare number becomes [`FinancialField::Scalar`]
    /// - everything else becomes [`FinancialField::Empty`]
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(elements) => Self::Items(
                elements
                    .iter()
                    .filter_map(FinancialItem::from_value)
                    .collect(),
            ),
            serde_json::Value::String(s) => {
                if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(s) {
                    if parsed.is_array() {
                        return Self::from_value(&parsed);
                    }
                }
                s.trim().parse::<f64>().map_or(Self::Empty, Self::Scalar)
            }
            serde_json::Value::Number(n) => Self::Scalar(n.as_f64().unwrap_or(0.0)),
            _ => Self::Empty,
        }
    }

    /// Returns the structured rows, or an empty slice for legacy shapes.
    #[must_use]
    pub fn items(&self) -> &[FinancialItem] {
        match self {
            Self::Items(items) => items,
            Self::Scalar(_) | Self::Empty => &[],
        }
    }

    /// Sums the field's monetary value across all representations.
    #[must_use]
    pub fn total(&self) -> f64 {
        match self {
            Self::Items(items) => items.iter().map(|item| item.value).sum(),
            Self::Scalar(value) => *value,
            Self::Empty => 0.0,
        }
    }
}

impl Serialize for FinancialField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Items(items) => items.serialize(serializer),
            Self::Scalar(value) => serializer.serialize_f64(*value),
            Self::Empty => serializer.serialize_seq(Some(0))?.end(),
        }
    }
}

impl<'de> Deserialize<'de> for FinancialField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// The three financial arrays plus free text shared by the declarant and
/// every family member.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialProfile {
    #[serde(default)]
    pub income: FinancialField,
    #[serde(default)]
    pub assets: FinancialField,
    #[serde(default)]
    pub liabilities: FinancialField,
    #[serde(default)]
    pub other_financial_info: String,
}

impl FinancialProfile {
    /// Creates a new `FinancialProfile`.
    #[must_use]
    pub const fn new(
        income: FinancialField,
        assets: FinancialField,
        liabilities: FinancialField,
        other_financial_info: String,
    ) -> Self {
        Self {
            income,
            assets,
            liabilities,
            other_financial_info,
        }
    }
}

/// A spouse or child attached to a declaration.
///
/// A family member's financial arrays have the same shape and validation
/// rules as the declaration's own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the record has not been persisted yet.
    pub family_member_id: Option<i64>,
    /// Relation to the declarant.
    pub relation: Relation,
    /// The family member's full name (informational, not unique).
    pub full_name: String,
    /// The family member's financial profile.
    #[serde(flatten)]
    pub profile: FinancialProfile,
}

impl FamilyMember {
    /// Creates a new `FamilyMember` without a persisted ID.
    #[must_use]
    pub const fn new(relation: Relation, full_name: String, profile: FinancialProfile) -> Self {
        Self {
            family_member_id: None,
            relation,
            full_name,
            profile,
        }
    }

    /// Creates a `FamilyMember` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        family_member_id: i64,
        relation: Relation,
        full_name: String,
        profile: FinancialProfile,
    ) -> Self {
        Self {
            family_member_id: Some(family_member_id),
            relation,
            full_name,
            profile,
        }
    }

    /// Validates the family member's field constraints.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFullName` if the full name is blank.
    pub fn validate_fields(&self) -> Result<(), DomainError> {
        if self.full_name.trim().is_empty() {
            return Err(DomainError::InvalidFullName(String::from(
                "Full name cannot be empty",
            )));
        }
        Ok(())
    }
}

/// One wealth declaration filed by one employee for one declaration type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Canonical identifier assigned by the database (opaque, immutable).
    /// `None` indicates the declaration has not been persisted yet.
    pub declaration_id: Option<i64>,
    /// The filing employee's identifier.
    pub user_id: i64,
    /// The declaration occasion.
    pub declaration_type: DeclarationType,
    /// Current review status.
    pub status: DeclarationStatus,
    /// Present iff `status` is `Rejected`.
    pub correction_message: Option<String>,
    /// When the declaration was submitted. `None` until submission.
    #[serde(with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    /// The last admin action time. Set on every status transition, not
    /// only approvals. `None` until the first review.
    #[serde(with = "time::serde::rfc3339::option")]
    pub approved_at: Option<OffsetDateTime>,
    /// Start of the reporting period the figures cover.
    pub period_start: Date,
    /// End of the reporting period the figures cover.
    pub period_end: Date,
    /// The declarant's own financial profile.
    #[serde(flatten)]
    pub profile: FinancialProfile,
    /// Spouses and children attached to this declaration.
    #[serde(default)]
    pub family_members: Vec<FamilyMember>,
}

impl Declaration {
    /// Creates a new pending `Declaration` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReportingPeriod` if `period_end`
    /// precedes `period_start`.
    pub fn new(
        user_id: i64,
        declaration_type: DeclarationType,
        period_start: Date,
        period_end: Date,
        profile: FinancialProfile,
        family_members: Vec<FamilyMember>,
    ) -> Result<Self, DomainError> {
        if period_end < period_start {
            return Err(DomainError::InvalidReportingPeriod {
                start: period_start.to_string(),
                end: period_end.to_string(),
            });
        }
        Ok(Self {
            declaration_id: None,
            user_id,
            declaration_type,
            status: DeclarationStatus::Pending,
            correction_message: None,
            submitted_at: None,
            approved_at: None,
            period_start,
            period_end,
            profile,
            family_members,
        })
    }

    /// Iterates the attached spouses in declaration order.
    pub fn spouses(&self) -> impl Iterator<Item = &FamilyMember> {
        self.family_members
            .iter()
            .filter(|member| member.relation == Relation::Spouse)
    }

    /// Iterates the attached children in declaration order.
    pub fn children(&self) -> impl Iterator<Item = &FamilyMember> {
        self.family_members
            .iter()
            .filter(|member| member.relation == Relation::Child)
    }
}

/// The administrator performing a review action.
///
/// Roles apply only to reviewing administrators, never to the filing
/// employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminActor {
    /// The administrator's identifier, recorded on every audit row.
    pub admin_id: i64,
    /// Whether this administrator may revise already-reviewed declarations.
    pub is_super_admin: bool,
}

impl AdminActor {
    /// Creates a new `AdminActor`.
    #[must_use]
    pub const fn new(admin_id: i64, is_super_admin: bool) -> Self {
        Self {
            admin_id,
            is_super_admin,
        }
    }
}
