// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Financial taxonomy: the closed catalog of allowed category labels.
//!
//! Each set contains both canonical labels and UI-synonym labels that mean
//! the same real-world category (e.g. "Rent" and "Rental Income"). The
//! validator treats membership in either spelling as valid; no cross-mapping
//! or deduplication happens at validation time.
//!
//! This catalog is the single source of truth for both the server-side
//! validator and any client-side dropdown. Define it here, import it
//! everywhere; never duplicate it.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Allowed income category labels (canonical + synonyms).
pub const INCOME_TYPES: &[&str] = &[
    "Salary",
    "Allowances",
    "Rent",
    "Rental Income",
    "Business",
    "Business Income",
    "Agriculture",
    "Agricultural Income",
    "Dividends",
    "Interest",
    "Pension",
    "Consultancy",
    "Royalties",
    "Gift",
    "Inheritance",
    "Other",
];

/// Allowed asset category labels (canonical + synonyms).
pub const ASSET_TYPES: &[&str] = &[
    "Land",
    "Building",
    "House",
    "Apartment",
    "Vehicle",
    "Motor Vehicle",
    "Bank Deposit",
    "Savings",
    "Cash",
    "Shares",
    "Stocks",
    "Bonds",
    "Jewelry",
    "Jewellery",
    "Livestock",
    "Machinery",
    "Intellectual Property",
    "Other",
];

/// Allowed liability category labels (canonical + synonyms).
pub const LIABILITY_TYPES: &[&str] = &[
    "Bank Loan",
    "Mortgage",
    "Personal Loan",
    "Salary Advance",
    "Credit",
    "Credit Card",
    "Tax Liability",
    "Guarantee",
    "Other",
];

/// The three financial categories carried by every profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialCategory {
    Income,
    Assets,
    Liabilities,
}

impl FinancialCategory {
    /// All categories, in the order they appear on a declaration.
    pub const ALL: [Self; 3] = [Self::Income, Self::Assets, Self::Liabilities];

    /// Returns the field name used in payloads and error paths.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Assets => "assets",
            Self::Liabilities => "liabilities",
        }
    }

    /// Returns the allowed labels for this category.
    #[must_use]
    pub const fn allowed_labels(&self) -> &'static [&'static str] {
        match self {
            Self::Income => INCOME_TYPES,
            Self::Assets => ASSET_TYPES,
            Self::Liabilities => LIABILITY_TYPES,
        }
    }

    /// Checks whether a label belongs to this category's allowed set.
    ///
    /// Matching is exact (case-sensitive); the catalog already carries every
    /// accepted spelling.
    #[must_use]
    pub fn is_allowed(&self, label: &str) -> bool {
        self.allowed_labels().contains(&label)
    }
}

impl FromStr for FinancialCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "assets" => Ok(Self::Assets),
            "liabilities" => Ok(Self::Liabilities),
            _ => Err(DomainError::InvalidFinancialCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for FinancialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}
