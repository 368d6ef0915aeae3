// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Declaration, DeclarationType, FamilyMember, FinancialField, FinancialItem, FinancialProfile,
    Relation, aggregate_family_totals,
};
use time::macros::date;

fn declaration_with(profile: FinancialProfile, family_members: Vec<FamilyMember>) -> Declaration {
    Declaration::new(
        7,
        DeclarationType::Biennial,
        date!(2024 - 01 - 01),
        date!(2025 - 12 - 31),
        profile,
        family_members,
    )
    .unwrap()
}

fn single_row(label: &str, value: f64) -> FinancialField {
    FinancialField::Items(vec![FinancialItem::new(
        String::from(label),
        String::new(),
        value,
    )])
}

#[test]
fn test_structured_rows_sum_to_plain_arithmetic() {
    let profile = FinancialProfile::new(
        FinancialField::Items(vec![
            FinancialItem::new(String::from("Salary"), String::new(), 50000.0),
            FinancialItem::new(String::from("Rent"), String::new(), 12000.0),
        ]),
        single_row("Land", 300000.0),
        single_row("Mortgage", 80000.0),
        String::new(),
    );
    let totals = aggregate_family_totals(&declaration_with(profile, Vec::new()));

    assert_eq!(totals.total_income, 62000.0);
    assert_eq!(totals.total_assets, 300000.0);
    assert_eq!(totals.total_liabilities, 80000.0);
    assert_eq!(totals.net_worth, 220000.0);
}

#[test]
fn test_family_members_contribute_to_totals() {
    // Declarant earns, spouse holds land, child's liabilities are a legacy
    // "Nil" string that must contribute zero.
    let declarant = FinancialProfile::new(
        single_row("Salary", 50000.0),
        FinancialField::Empty,
        FinancialField::Empty,
        String::new(),
    );
    let spouse = FinancialProfile::new(
        FinancialField::Empty,
        single_row("Land", 300000.0),
        FinancialField::Empty,
        String::new(),
    );
    let child = FinancialProfile::new(
        FinancialField::Empty,
        FinancialField::Empty,
        FinancialField::from_value(&serde_json::Value::String(String::from("Nil"))),
        String::new(),
    );

    let totals = aggregate_family_totals(&declaration_with(
        declarant,
        vec![
            FamilyMember::new(Relation::Spouse, String::from("Spouse One"), spouse),
            FamilyMember::new(Relation::Child, String::from("Child One"), child),
        ],
    ));

    assert_eq!(totals.total_income, 50000.0);
    assert_eq!(totals.total_assets, 300000.0);
    assert_eq!(totals.total_liabilities, 0.0);
    assert_eq!(totals.net_worth, 300000.0);
}

#[test]
fn test_legacy_scalar_string_contributes_numeric_value() {
    let profile = FinancialProfile::new(
        FinancialField::from_value(&serde_json::Value::String(String::from("45000"))),
        FinancialField::Empty,
        FinancialField::Empty,
        String::new(),
    );
    let totals = aggregate_family_totals(&declaration_with(profile, Vec::new()));

    assert_eq!(totals.total_income, 45000.0);
}

#[test]
fn test_json_string_field_contributes_row_sum() {
    let profile = FinancialProfile::new(
        FinancialField::Empty,
        FinancialField::from_value(&serde_json::Value::String(String::from(
            r#"[{"type":"Land","value":100000},{"type":"Cash","value":25000}]"#,
        ))),
        FinancialField::Empty,
        String::new(),
    );
    let totals = aggregate_family_totals(&declaration_with(profile, Vec::new()));

    assert_eq!(totals.total_assets, 125000.0);
}

#[test]
fn test_unparseable_field_contributes_zero() {
    let profile = FinancialProfile::new(
        FinancialField::from_value(&serde_json::Value::String(String::from("garbage"))),
        FinancialField::Empty,
        FinancialField::Empty,
        String::new(),
    );
    let totals = aggregate_family_totals(&declaration_with(profile, Vec::new()));

    assert_eq!(totals.total_income, 0.0);
}

#[test]
fn test_net_worth_may_be_negative() {
    let profile = FinancialProfile::new(
        FinancialField::Empty,
        single_row("Cash", 1000.0),
        single_row("Bank Loan", 5000.0),
        String::new(),
    );
    let totals = aggregate_family_totals(&declaration_with(profile, Vec::new()));

    assert_eq!(totals.net_worth, -4000.0);
}
