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

mod apply;
mod command;
mod error;

#[cfg(test)]
mod tests;

use wds_domain::{Declaration, ValidationIssue, validate_declaration_financials};

// Re-export public types and functions
pub use apply::{ReviewOutcome, apply_review};
pub use command::{ReviewAction, ReviewCommand};
pub use error::CoreError;

/// Validates a declaration's financial rows before it is accepted.
///
/// This is a read-only validation that does not create audit records. The
/// whole declaration is walked so a filer sees every problem at once rather
/// than fixing rows one resubmission at a time.
///
/// # Arguments
///
/// * `declaration` - The declaration to validate
///
/// # Returns
///
/// * `Ok(())` if every financial row carries an allowed type label
/// * `Err(issues)` listing every offending row across declarant, spouses,
///   and children
///
/// # Errors
///
/// Returns the full list of validation issues if any row fails.
pub fn validate_for_submission(declaration: &Declaration) -> Result<(), Vec<ValidationIssue>> {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    for (index, member) in declaration.family_members.iter().enumerate() {
        if let Err(err) = member.validate_fields() {
            issues.push(ValidationIssue::new(
                String::from("family_members"),
                index,
                err.to_string(),
            ));
        }
    }

    issues.extend(validate_declaration_financials(declaration));

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
