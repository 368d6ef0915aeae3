// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod review_api_tests;

use time::OffsetDateTime;
use time::macros::{date, datetime};
use wds_domain::{FinancialField, FinancialItem};
use wds_persistence::Persistence;

use crate::{
    AuthenticatedActor, CreateWindowRequest, DeclarationPayload, FamilyMemberPayload, Role,
    create_window,
};

pub const NOW: OffsetDateTime = datetime!(2026-03-15 12:00 UTC);

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(11, Role::Admin)
}

pub fn create_super_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(12, Role::SuperAdmin)
}

pub fn single_item(label: &str, value: f64) -> FinancialField {
    FinancialField::Items(vec![FinancialItem::new(
        String::from(label),
        String::from("test row"),
        value,
    )])
}

/// Opens a global declaration window covering `NOW` and returns its id.
pub fn open_current_window(persistence: &mut Persistence) -> i64 {
    create_window(
        persistence,
        &CreateWindowRequest {
            year: None,
            start_date: date!(2026 - 03 - 01),
            end_date: date!(2026 - 04 - 30),
            notes: None,
        },
        &create_admin(),
    )
    .unwrap()
    .window_id
}

/// A valid biennial payload for user 7 with one spouse and one child.
pub fn create_biennial_payload() -> DeclarationPayload {
    DeclarationPayload {
        user_id: 7,
        declaration_type: String::from("biennial"),
        period_start: date!(2024 - 01 - 01),
        period_end: date!(2025 - 12 - 31),
        income: single_item("Salary", 50_000.0),
        assets: single_item("House", 320_000.0),
        liabilities: FinancialField::Empty,
        other_financial_info: String::new(),
        family_members: vec![
            FamilyMemberPayload {
                relation: String::from("spouse"),
                full_name: String::from("Jane Example"),
                income: FinancialField::Empty,
                assets: single_item("Land", 300_000.0),
                liabilities: FinancialField::Empty,
                other_financial_info: String::new(),
            },
            FamilyMemberPayload {
                relation: String::from("child"),
                full_name: String::from("Sam Example"),
                income: FinancialField::Empty,
                assets: FinancialField::Empty,
                liabilities: FinancialField::Empty,
                other_financial_info: String::new(),
            },
        ],
    }
}
