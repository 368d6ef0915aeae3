// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod error;
mod taxonomy;
mod types;
mod validation;
mod window;

#[cfg(test)]
mod tests;

pub use aggregate::{FamilyTotals, aggregate_family_totals};
pub use error::DomainError;
pub use taxonomy::{ASSET_TYPES, FinancialCategory, INCOME_TYPES, LIABILITY_TYPES};
pub use validation::{ValidationIssue, validate_declaration_financials};
pub use window::{
    AccessDecision, AccessRequest, DecidingRule, DeclarationWindow, EditOverride, LockFlags,
    governing_window, resolve_access,
};

// Re-export public types
pub use types::{
    AdminActor, Declaration, DeclarationStatus, DeclarationType, FamilyMember, FinancialField,
    FinancialItem, FinancialProfile, NIL_TYPE, Relation,
};
