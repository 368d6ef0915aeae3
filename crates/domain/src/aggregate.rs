// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Family financial aggregation for reporting and export consumers.
//!
//! Sums the normalized income, asset, and liability fields across the
//! declarant and every attached spouse and child. Legacy field shapes
//! (JSON-encoded strings and bare scalars) contribute through the same
//! normalization as structured rows; anything unparseable contributes zero.

use crate::types::Declaration;
use serde::{Deserialize, Serialize};

/// Aggregated totals across declarant plus all family members.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FamilyTotals {
    pub total_income: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    /// `total_assets - total_liabilities`. May be negative; that is not an
    /// error condition.
    pub net_worth: f64,
}

/// Aggregates a declaration's financial figures across the whole family.
#[must_use]
pub fn aggregate_family_totals(declaration: &Declaration) -> FamilyTotals {
    let mut total_income: f64 = declaration.profile.income.total();
    let mut total_assets: f64 = declaration.profile.assets.total();
    let mut total_liabilities: f64 = declaration.profile.liabilities.total();

    for member in &declaration.family_members {
        total_income += member.profile.income.total();
        total_assets += member.profile.assets.total();
        total_liabilities += member.profile.liabilities.total();
    }

    FamilyTotals {
        total_income,
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
    }
}
