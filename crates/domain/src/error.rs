// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Declaration type string is not recognized.
    InvalidDeclarationType(String),
    /// Declaration status string is not recognized.
    InvalidDeclarationStatus(String),
    /// Family relation string is not recognized.
    InvalidRelation(String),
    /// Financial category string is not recognized.
    InvalidFinancialCategory(String),
    /// A rejection was attempted without a correction message.
    MissingCorrectionMessage,
    /// An approval was attempted with a correction message attached.
    UnexpectedCorrectionMessage,
    /// Reporting period end precedes the start.
    InvalidReportingPeriod {
        /// The period start date (ISO 8601).
        start: String,
        /// The period end date (ISO 8601).
        end: String,
    },
    /// Declaration window end date precedes the start date.
    InvalidWindowRange {
        /// The window start date (ISO 8601).
        start: String,
        /// The window end date (ISO 8601).
        end: String,
    },
    /// Edit override end datetime precedes the start datetime.
    InvalidOverrideRange {
        /// The override start datetime (ISO 8601).
        from: String,
        /// The override end datetime (ISO 8601).
        until: String,
    },
    /// Edit override reason is empty.
    MissingOverrideReason,
    /// A family member's full name is empty.
    InvalidFullName(String),
    /// Failed to parse a date or datetime from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDeclarationType(s) => write!(f, "Invalid declaration type: {s}"),
            Self::InvalidDeclarationStatus(s) => write!(f, "Invalid declaration status: {s}"),
            Self::InvalidRelation(s) => write!(f, "Invalid family relation: {s}"),
            Self::InvalidFinancialCategory(s) => write!(f, "Invalid financial category: {s}"),
            Self::MissingCorrectionMessage => {
                write!(f, "A rejection requires a non-empty correction message")
            }
            Self::UnexpectedCorrectionMessage => {
                write!(f, "An approval must not carry a correction message")
            }
            Self::InvalidReportingPeriod { start, end } => {
                write!(f, "Reporting period end {end} precedes start {start}")
            }
            Self::InvalidWindowRange { start, end } => {
                write!(f, "Declaration window end {end} precedes start {start}")
            }
            Self::InvalidOverrideRange { from, until } => {
                write!(f, "Edit override end {until} precedes start {from}")
            }
            Self::MissingOverrideReason => {
                write!(f, "An edit override requires a non-empty reason")
            }
            Self::InvalidFullName(msg) => write!(f, "Invalid full name: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
