// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use wds_domain::DeclarationStatus;
use wds_persistence::Persistence;

use crate::tests::{
    NOW, create_admin, create_biennial_payload, create_super_admin, create_test_persistence,
    open_current_window,
};
use crate::{
    ApiError, AuditView, ReviewDeclarationRequest, get_declaration, get_status_audit,
    review_declaration, submit_declaration,
};

fn approve_request() -> ReviewDeclarationRequest {
    ReviewDeclarationRequest {
        action: String::from("approve"),
        correction_message: None,
    }
}

fn reject_request(message: &str) -> ReviewDeclarationRequest {
    ReviewDeclarationRequest {
        action: String::from("reject"),
        correction_message: Some(String::from(message)),
    }
}

fn submit_pending_declaration(persistence: &mut Persistence) -> i64 {
    open_current_window(persistence);
    submit_declaration(persistence, &create_biennial_payload(), NOW)
        .unwrap()
        .declaration_id
}

#[test]
fn test_approve_pending_declaration() {
    let mut persistence: Persistence = create_test_persistence();
    let declaration_id: i64 = submit_pending_declaration(&mut persistence);

    let response = review_declaration(
        &mut persistence,
        declaration_id,
        &approve_request(),
        &create_admin(),
        NOW,
    )
    .unwrap();

    assert_eq!(response.status, "approved");
    assert_eq!(response.correction_message, None);
    assert_eq!(response.approved_at, NOW);

    let stored = get_declaration(&mut persistence, declaration_id).unwrap();
    assert_eq!(stored.status, DeclarationStatus::Approved);
    assert_eq!(stored.approved_at, Some(NOW));

    let trail = get_status_audit(&mut persistence, declaration_id, AuditView::Full).unwrap();
    assert_eq!(trail.records.len(), 1);
    assert_eq!(trail.records[0].new_status, DeclarationStatus::Approved);
}

#[test]
fn test_reject_records_correction_message() {
    let mut persistence: Persistence = create_test_persistence();
    let declaration_id: i64 = submit_pending_declaration(&mut persistence);

    let response = review_declaration(
        &mut persistence,
        declaration_id,
        &reject_request("need receipts"),
        &create_admin(),
        NOW,
    )
    .unwrap();

    assert_eq!(response.status, "rejected");
    assert_eq!(response.correction_message.as_deref(), Some("need receipts"));

    let trail = get_status_audit(&mut persistence, declaration_id, AuditView::Full).unwrap();
    assert_eq!(trail.records.len(), 1);
    assert_eq!(trail.records[0].previous_status, DeclarationStatus::Pending);
    assert_eq!(trail.records[0].new_status, DeclarationStatus::Rejected);
}

#[test]
fn test_reject_without_message_is_invalid_and_writes_no_audit_row() {
    let mut persistence: Persistence = create_test_persistence();
    let declaration_id: i64 = submit_pending_declaration(&mut persistence);

    let result = review_declaration(
        &mut persistence,
        declaration_id,
        &ReviewDeclarationRequest {
            action: String::from("reject"),
            correction_message: None,
        },
        &create_admin(),
        NOW,
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "correction_message"
    ));

    let trail = get_status_audit(&mut persistence, declaration_id, AuditView::Full).unwrap();
    assert!(trail.records.is_empty());
}

#[test]
fn test_plain_admin_revision_is_forbidden_and_writes_no_audit_row() {
    let mut persistence: Persistence = create_test_persistence();
    let declaration_id: i64 = submit_pending_declaration(&mut persistence);
    review_declaration(
        &mut persistence,
        declaration_id,
        &approve_request(),
        &create_admin(),
        NOW,
    )
    .unwrap();

    let result = review_declaration(
        &mut persistence,
        declaration_id,
        &reject_request("changed my mind"),
        &create_admin(),
        NOW,
    );

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));

    let stored = get_declaration(&mut persistence, declaration_id).unwrap();
    assert_eq!(stored.status, DeclarationStatus::Approved);

    let trail = get_status_audit(&mut persistence, declaration_id, AuditView::Full).unwrap();
    assert_eq!(trail.records.len(), 1);
}

#[test]
fn test_super_admin_revision_succeeds() {
    let mut persistence: Persistence = create_test_persistence();
    let declaration_id: i64 = submit_pending_declaration(&mut persistence);
    review_declaration(
        &mut persistence,
        declaration_id,
        &approve_request(),
        &create_admin(),
        NOW,
    )
    .unwrap();

    let response = review_declaration(
        &mut persistence,
        declaration_id,
        &reject_request("figures do not add up"),
        &create_super_admin(),
        NOW,
    )
    .unwrap();

    assert_eq!(response.status, "rejected");

    let trail = get_status_audit(&mut persistence, declaration_id, AuditView::Full).unwrap();
    assert_eq!(trail.records.len(), 2);
    assert_eq!(trail.records[1].previous_status, DeclarationStatus::Approved);
    assert_eq!(trail.records[1].acting_admin_id, 12);
}

#[test]
fn test_unknown_action_is_invalid_input() {
    let mut persistence: Persistence = create_test_persistence();
    let declaration_id: i64 = submit_pending_declaration(&mut persistence);

    let result = review_declaration(
        &mut persistence,
        declaration_id,
        &ReviewDeclarationRequest {
            action: String::from("escalate"),
            correction_message: None,
        },
        &create_admin(),
        NOW,
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "action"
    ));
}

#[test]
fn test_review_of_missing_declaration_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = review_declaration(
        &mut persistence,
        999,
        &approve_request(),
        &create_admin(),
        NOW,
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
