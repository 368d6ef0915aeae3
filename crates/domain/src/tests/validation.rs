// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ASSET_TYPES, Declaration, DeclarationType, FamilyMember, FinancialField, FinancialItem,
    FinancialProfile, INCOME_TYPES, LIABILITY_TYPES, Relation, ValidationIssue,
    validate_declaration_financials,
};
use time::macros::date;

fn items(rows: Vec<FinancialItem>) -> FinancialField {
    FinancialField::Items(rows)
}

fn row(label: &str, value: f64) -> FinancialItem {
    FinancialItem::new(String::from(label), String::from("test row"), value)
}

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

#[test]
fn test_every_taxonomy_label_is_accepted() {
    let profile = FinancialProfile::new(
        items(INCOME_TYPES.iter().map(|label| row(label, 100.0)).collect()),
        items(ASSET_TYPES.iter().map(|label| row(label, 100.0)).collect()),
        items(
            LIABILITY_TYPES
                .iter()
                .map(|label| row(label, 100.0))
                .collect(),
        ),
        String::new(),
    );
    let declaration = declaration_with(profile, Vec::new());

    let issues = validate_declaration_financials(&declaration);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn test_nil_row_is_always_accepted() {
    let profile = FinancialProfile::new(
        items(vec![row("Nil", 0.0)]),
        items(vec![row("Nil", 999.0)]),
        items(vec![row("Nil", 0.0)]),
        String::new(),
    );
    let declaration = declaration_with(profile, Vec::new());

    assert!(validate_declaration_financials(&declaration).is_empty());
}

#[test]
fn test_blank_type_row_is_skipped_not_rejected() {
    let profile = FinancialProfile::new(
        items(vec![row("", 500.0), row("   ", 500.0)]),
        FinancialField::Empty,
        FinancialField::Empty,
        String::new(),
    );
    let declaration = declaration_with(profile, Vec::new());

    assert!(validate_declaration_financials(&declaration).is_empty());
}

#[test]
fn test_unknown_type_reports_one_error_at_row_position() {
    let profile = FinancialProfile::new(
        items(vec![row("Salary", 100.0), row("Smuggling", 100.0)]),
        FinancialField::Empty,
        FinancialField::Empty,
        String::new(),
    );
    let declaration = declaration_with(profile, Vec::new());

    let issues = validate_declaration_financials(&declaration);
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0],
        ValidationIssue::new(
            String::from("income"),
            1,
            String::from("Invalid type: Smuggling")
        )
    );
}

#[test]
fn test_errors_are_collected_across_all_scopes() {
    let bad_profile = |category_label: &str| {
        FinancialProfile::new(
            items(vec![row(category_label, 1.0)]),
            items(vec![row(category_label, 1.0)]),
            items(vec![row(category_label, 1.0)]),
            String::new(),
        )
    };

    let declaration = declaration_with(
        bad_profile("Bogus"),
        vec![
            FamilyMember::new(Relation::Spouse, String::from("Spouse One"), bad_profile("Bogus")),
            FamilyMember::new(Relation::Child, String::from("Child One"), bad_profile("Bogus")),
        ],
    );

    let issues = validate_declaration_financials(&declaration);

    // Three categories in each of three scopes, all reported at once.
    assert_eq!(issues.len(), 9);
    let fields: Vec<&str> = issues.iter().map(|issue| issue.field.as_str()).collect();
    assert!(fields.contains(&"income"));
    assert!(fields.contains(&"spouses[0].assets"));
    assert!(fields.contains(&"children[0].liabilities"));
}

#[test]
fn test_spouse_and_child_indices_are_tracked_independently() {
    let clean = FinancialProfile::default();
    let bad = FinancialProfile::new(
        items(vec![row("Bogus", 1.0)]),
        FinancialField::Empty,
        FinancialField::Empty,
        String::new(),
    );

    let declaration = declaration_with(
        FinancialProfile::default(),
        vec![
            FamilyMember::new(Relation::Child, String::from("Child One"), clean.clone()),
            FamilyMember::new(Relation::Spouse, String::from("Spouse One"), clean),
            FamilyMember::new(Relation::Child, String::from("Child Two"), bad),
        ],
    );

    let issues = validate_declaration_financials(&declaration);
    assert_eq!(issues.len(), 1);
    // Second child, regardless of position among all family members.
    assert_eq!(issues[0].field, "children[1].income");
}

#[test]
fn test_malformed_json_string_field_is_treated_as_empty() {
    let profile = FinancialProfile::new(
        FinancialField::from_value(&serde_json::Value::String(String::from("{not json"))),
        FinancialField::Empty,
        FinancialField::Empty,
        String::new(),
    );
    let declaration = declaration_with(profile, Vec::new());

    assert!(validate_declaration_financials(&declaration).is_empty());
}

#[test]
fn test_json_string_field_is_reparsed_and_validated() {
    let encoded = serde_json::Value::String(String::from(
        r#"[{"type":"Smuggling","description":"","value":10}]"#,
    ));
    let profile = FinancialProfile::new(
        FinancialField::from_value(&encoded),
        FinancialField::Empty,
        FinancialField::Empty,
        String::new(),
    );
    let declaration = declaration_with(profile, Vec::new());

    let issues = validate_declaration_financials(&declaration);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Invalid type: Smuggling");
}

#[test]
fn test_non_object_array_elements_are_skipped() {
    let field = FinancialField::from_value(&serde_json::json!([
        "stray string",
        42,
        {"type": "Salary", "description": "", "value": 100}
    ]));
    let profile = FinancialProfile::new(field, FinancialField::Empty, FinancialField::Empty, String::new());
    let declaration = declaration_with(profile, Vec::new());

    assert!(validate_declaration_financials(&declaration).is_empty());
}

#[test]
fn test_negative_value_is_reported() {
    let profile = FinancialProfile::new(
        items(vec![row("Salary", -100.0)]),
        FinancialField::Empty,
        FinancialField::Empty,
        String::new(),
    );
    let declaration = declaration_with(profile, Vec::new());

    let issues = validate_declaration_financials(&declaration);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "income");
    assert_eq!(issues[0].message, "Negative value: -100");
}
