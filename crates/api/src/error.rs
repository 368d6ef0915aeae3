// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Domain, core, and persistence errors never leak to callers directly;
//! each is translated into an `ApiError` here. Every `ApiError` renders to
//! a structured envelope (`success`, `code`, `message`, `details`) for the
//! out-of-scope HTTP layer to serialize verbatim.

use serde::{Deserialize, Serialize};
use wds::CoreError;
use wds_domain::{DomainError, ValidationIssue};
use wds_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent
/// the API contract. All four spec-level failure classes appear here:
/// validation, forbidden, not found, and conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or more financial rows failed taxonomy validation.
    ///
    /// Always carries the complete list of findings, never just the first.
    Validation {
        /// Every offending row, positioned by field path and index.
        details: Vec<ValidationIssue>,
    },
    /// The actor may not perform this action. Never silently downgraded.
    Forbidden {
        /// Human-readable reason, surfaced verbatim to the end user.
        reason: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A concurrent transition won the race; nothing was written.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_FINANCIAL_TYPES",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::ResourceNotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::Internal { .. } => "INTERNAL",
        }
    }

    /// Renders this error as the structured envelope returned to callers.
    #[must_use]
    pub fn to_envelope(&self) -> ErrorEnvelope {
        let details: Vec<ValidationIssue> = match self {
            Self::Validation { details } => details.clone(),
            _ => Vec::new(),
        };
        ErrorEnvelope {
            success: false,
            code: String::from(self.code()),
            message: self.to_string(),
            details,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { details } => {
                write!(f, "Validation failed with {} finding(s)", details.len())
            }
            Self::Forbidden { reason } => write!(f, "Forbidden: {reason}"),
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The structured error body returned by every failing operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `false` for an error envelope.
    pub success: bool,
    /// Stable machine-readable error code.
    pub code: String,
    /// Human-readable summary.
    pub message: String,
    /// Per-row validation findings; empty for non-validation errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ValidationIssue>,
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDeclarationType(msg) => ApiError::InvalidInput {
            field: String::from("declaration_type"),
            message: format!("Invalid declaration type: {msg}"),
        },
        DomainError::InvalidDeclarationStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid declaration status: {msg}"),
        },
        DomainError::InvalidRelation(msg) => ApiError::InvalidInput {
            field: String::from("relation"),
            message: format!("Invalid family relation: {msg}"),
        },
        DomainError::InvalidFinancialCategory(msg) => ApiError::InvalidInput {
            field: String::from("type"),
            message: format!("Invalid financial category: {msg}"),
        },
        DomainError::MissingCorrectionMessage => ApiError::InvalidInput {
            field: String::from("correction_message"),
            message: String::from("A rejection requires a non-empty correction message"),
        },
        DomainError::UnexpectedCorrectionMessage => ApiError::InvalidInput {
            field: String::from("correction_message"),
            message: String::from("An approval must not carry a correction message"),
        },
        DomainError::InvalidReportingPeriod { start, end } => ApiError::InvalidInput {
            field: String::from("period_end"),
            message: format!("Reporting period end {end} precedes start {start}"),
        },
        DomainError::InvalidWindowRange { start, end } => ApiError::InvalidInput {
            field: String::from("end_date"),
            message: format!("Declaration window end {end} precedes start {start}"),
        },
        DomainError::InvalidOverrideRange { from, until } => ApiError::InvalidInput {
            field: String::from("allow_until"),
            message: format!("Edit override end {until} precedes start {from}"),
        },
        DomainError::MissingOverrideReason => ApiError::InvalidInput {
            field: String::from("reason"),
            message: String::from("An edit override requires a non-empty reason"),
        },
        DomainError::InvalidFullName(msg) => ApiError::InvalidInput {
            field: String::from("full_name"),
            message: msg,
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// Authorization failures stay `Forbidden`; they are never downgraded.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::RevisionRequiresSuperAdmin { admin_id } => ApiError::Forbidden {
            reason: format!(
                "Admin {admin_id} may not revise a reviewed declaration; super administrator required"
            ),
        },
        CoreError::UnpersistedDeclaration => ApiError::InvalidInput {
            field: String::from("declaration_id"),
            message: String::from("Declaration has no identifier and cannot be reviewed"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Not-found and conflict cases keep their identity; everything else is an
/// internal error, with the original message preserved for logs.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DeclarationNotFound(declaration_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Declaration"),
            message: format!("Declaration {declaration_id} does not exist"),
        },
        PersistenceError::TransitionConflict {
            declaration_id,
            expected_status,
        } => ApiError::Conflict {
            message: format!(
                "Declaration {declaration_id} is no longer in status '{expected_status}'; another review won the race"
            ),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
