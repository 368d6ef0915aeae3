// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Financial payload validation.
//!
//! Walks a declaration's financial arrays (root plus every spouse and every
//! child) and flags rows whose category label is not in the taxonomy. The
//! walk never short-circuits: a single submission reports every invalid row
//! at once so the filer can fix them all in one round trip.
//!
//! Rows are tolerated, not rejected, when they are incomplete: a blank
//! label (after trimming) or the `"Nil"` sentinel is skipped. Partially
//! filled UI forms must not hard-fail server-side.

use crate::taxonomy::FinancialCategory;
use crate::types::{Declaration, FinancialProfile, NIL_TYPE};
use serde::{Deserialize, Serialize};

/// One validation finding, positioned at the offending row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path to the offending field, e.g. `income`, `spouses[0].assets`,
    /// or `children[2].liabilities`.
    pub field: String,
    /// Zero-based index of the offending row within the field.
    pub index: usize,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationIssue {
    /// Creates a new `ValidationIssue`.
    #[must_use]
    pub const fn new(field: String, index: usize, message: String) -> Self {
        Self {
            field,
            index,
            message,
        }
    }
}

/// Validates every financial array on a declaration.
///
/// Checks the declarant's own arrays, then each spouse's and each child's,
/// collecting all findings. An empty result means the payload is
/// acceptable.
///
/// This function is pure: it never mutates the declaration, and the caller
/// is responsible for rejecting the request when the result is non-empty.
#[must_use]
pub fn validate_declaration_financials(declaration: &Declaration) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    validate_profile(&declaration.profile, "", &mut issues);
    for (i, spouse) in declaration.spouses().enumerate() {
        validate_profile(&spouse.profile, &format!("spouses[{i}]."), &mut issues);
    }
    for (i, child) in declaration.children().enumerate() {
        validate_profile(&child.profile, &format!("children[{i}]."), &mut issues);
    }

    issues
}

/// Validates one financial profile, appending findings under `path_prefix`.
fn validate_profile(profile: &FinancialProfile, path_prefix: &str, issues: &mut Vec<ValidationIssue>) {
    for category in FinancialCategory::ALL {
        let field = match category {
            FinancialCategory::Income => &profile.income,
            FinancialCategory::Assets => &profile.assets,
            FinancialCategory::Liabilities => &profile.liabilities,
        };

        for (index, item) in field.items().iter().enumerate() {
            let label: &str = item.item_type.trim();

            // Incomplete rows and explicit "nothing to declare" rows pass.
            if label.is_empty() || label == NIL_TYPE {
                continue;
            }

            if !category.is_allowed(label) {
                issues.push(ValidationIssue::new(
                    format!("{path_prefix}{}", category.field_name()),
                    index,
                    format!("Invalid type: {label}"),
                ));
            } else if item.value < 0.0 {
                issues.push(ValidationIssue::new(
                    format!("{path_prefix}{}", category.field_name()),
                    index,
                    format!("Negative value: {}", item.value),
                ));
            }
        }
    }
}
