// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use time::macros::datetime;
use time::{Date, Month, OffsetDateTime};
use wds_domain::{
    Declaration, DeclarationType, FamilyMember, FinancialField, FinancialItem, FinancialProfile,
    Relation,
};

use crate::Persistence;

pub const SUBMIT_TIME: OffsetDateTime = datetime!(2026-02-01 09:30 UTC);
pub const REVIEW_TIME: OffsetDateTime = datetime!(2026-03-15 12:00 UTC);

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_test_date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

pub fn create_test_profile() -> FinancialProfile {
    FinancialProfile::new(
        FinancialField::Items(vec![FinancialItem::new(
            String::from("Salary"),
            String::from("Ministry salary"),
            54_000.0,
        )]),
        FinancialField::Items(vec![FinancialItem::new(
            String::from("House"),
            String::from("Family home"),
            320_000.0,
        )]),
        FinancialField::Items(vec![FinancialItem::new(
            String::from("Mortgage"),
            String::from("Home loan"),
            120_000.0,
        )]),
        String::from("No other interests"),
    )
}

pub fn create_spouse_profile() -> FinancialProfile {
    FinancialProfile::new(
        FinancialField::Items(vec![FinancialItem::new(
            String::from("Consultancy"),
            String::from("Part-time consulting"),
            18_000.0,
        )]),
        FinancialField::Empty,
        FinancialField::Empty,
        String::new(),
    )
}

/// Creates an unpersisted biennial declaration with one spouse and one
/// child, already stamped with a submission time.
pub fn create_test_declaration() -> Declaration {
    let mut declaration: Declaration = Declaration::new(
        7,
        DeclarationType::Biennial,
        create_test_date(2024, Month::January, 1),
        create_test_date(2025, Month::December, 31),
        create_test_profile(),
        vec![
            FamilyMember::new(
                Relation::Spouse,
                String::from("Jane Example"),
                create_spouse_profile(),
            ),
            FamilyMember::new(
                Relation::Child,
                String::from("Sam Example"),
                FinancialProfile::default(),
            ),
        ],
    )
    .unwrap();
    declaration.submitted_at = Some(SUBMIT_TIME);
    declaration
}
