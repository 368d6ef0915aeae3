// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    REVIEW_TIME, create_reviewed_declaration, create_test_admin, create_test_declaration,
    create_test_super_admin,
};
use crate::{CoreError, ReviewCommand, ReviewOutcome, apply_review};
use wds_domain::{Declaration, DeclarationStatus, DomainError};

#[test]
fn test_approve_pending_declaration() {
    let declaration: Declaration = create_test_declaration();

    let outcome: ReviewOutcome = apply_review(
        &declaration,
        ReviewCommand::approve(),
        &create_test_admin(),
        REVIEW_TIME,
    )
    .unwrap();

    assert_eq!(outcome.new_declaration.status, DeclarationStatus::Approved);
    assert!(outcome.new_declaration.correction_message.is_none());
    assert_eq!(outcome.new_declaration.approved_at, Some(REVIEW_TIME));
}

#[test]
fn test_reject_pending_declaration_with_message() {
    let declaration: Declaration = create_test_declaration();

    let outcome: ReviewOutcome = apply_review(
        &declaration,
        ReviewCommand::reject(String::from("missing land valuation")),
        &create_test_admin(),
        REVIEW_TIME,
    )
    .unwrap();

    assert_eq!(outcome.new_declaration.status, DeclarationStatus::Rejected);
    assert_eq!(
        outcome.new_declaration.correction_message.as_deref(),
        Some("missing land valuation")
    );
    // Rejection also stamps the last-action time.
    assert_eq!(outcome.new_declaration.approved_at, Some(REVIEW_TIME));
}

#[test]
fn test_reject_without_message_is_refused() {
    let declaration: Declaration = create_test_declaration();

    let result = apply_review(
        &declaration,
        ReviewCommand::new(crate::ReviewAction::Reject, None),
        &create_test_admin(),
        REVIEW_TIME,
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::MissingCorrectionMessage
        ))
    );
}

#[test]
fn test_reject_with_blank_message_is_refused() {
    let declaration: Declaration = create_test_declaration();

    let result = apply_review(
        &declaration,
        ReviewCommand::reject(String::from("   ")),
        &create_test_admin(),
        REVIEW_TIME,
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::MissingCorrectionMessage
        ))
    );
}

#[test]
fn test_approve_with_message_is_refused() {
    let declaration: Declaration = create_test_declaration();

    let result = apply_review(
        &declaration,
        ReviewCommand::new(
            crate::ReviewAction::Approve,
            Some(String::from("looks fine")),
        ),
        &create_test_admin(),
        REVIEW_TIME,
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::UnexpectedCorrectionMessage
        ))
    );
}

#[test]
fn test_approval_clears_previous_correction_message() {
    let declaration: Declaration = create_reviewed_declaration(
        DeclarationStatus::Rejected,
        Some("missing land valuation"),
    );

    let outcome: ReviewOutcome = apply_review(
        &declaration,
        ReviewCommand::approve(),
        &create_test_super_admin(),
        REVIEW_TIME,
    )
    .unwrap();

    assert_eq!(outcome.new_declaration.status, DeclarationStatus::Approved);
    assert!(outcome.new_declaration.correction_message.is_none());
    assert_eq!(
        outcome.audit_record.previous_correction_message.as_deref(),
        Some("missing land valuation")
    );
    assert!(outcome.audit_record.new_correction_message.is_none());
}

#[test]
fn test_plain_admin_cannot_revise_reviewed_declaration() {
    for status in [DeclarationStatus::Approved, DeclarationStatus::Rejected] {
        let message: Option<&str> = if status == DeclarationStatus::Rejected {
            Some("fix it")
        } else {
            None
        };
        let declaration: Declaration = create_reviewed_declaration(status, message);

        let result = apply_review(
            &declaration,
            ReviewCommand::approve(),
            &create_test_admin(),
            REVIEW_TIME,
        );

        assert_eq!(
            result,
            Err(CoreError::RevisionRequiresSuperAdmin { admin_id: 11 })
        );
    }
}

#[test]
fn test_super_admin_can_flip_approved_to_rejected() {
    let declaration: Declaration =
        create_reviewed_declaration(DeclarationStatus::Approved, None);

    let outcome: ReviewOutcome = apply_review(
        &declaration,
        ReviewCommand::reject(String::from("asset values understated")),
        &create_test_super_admin(),
        REVIEW_TIME,
    )
    .unwrap();

    assert_eq!(outcome.new_declaration.status, DeclarationStatus::Rejected);
    assert_eq!(
        outcome.audit_record.previous_status,
        DeclarationStatus::Approved
    );
    assert_eq!(outcome.audit_record.new_status, DeclarationStatus::Rejected);
    assert_eq!(outcome.audit_record.acting_admin_id, 12);
}

#[test]
fn test_no_op_re_approval_still_produces_audit_record() {
    let declaration: Declaration =
        create_reviewed_declaration(DeclarationStatus::Approved, None);

    let outcome: ReviewOutcome = apply_review(
        &declaration,
        ReviewCommand::approve(),
        &create_test_super_admin(),
        REVIEW_TIME,
    )
    .unwrap();

    assert_eq!(
        outcome.audit_record.previous_status,
        DeclarationStatus::Approved
    );
    assert_eq!(outcome.audit_record.new_status, DeclarationStatus::Approved);
    assert!(!outcome.audit_record.changed_visible_state());
    // The last-action time still moves forward.
    assert_eq!(outcome.new_declaration.approved_at, Some(REVIEW_TIME));
}

#[test]
fn test_audit_record_captures_transition_endpoints() {
    let declaration: Declaration = create_test_declaration();

    let outcome: ReviewOutcome = apply_review(
        &declaration,
        ReviewCommand::reject(String::from("missing land valuation")),
        &create_test_admin(),
        REVIEW_TIME,
    )
    .unwrap();

    let record = &outcome.audit_record;
    assert_eq!(record.declaration_id, 1);
    assert_eq!(record.previous_status, DeclarationStatus::Pending);
    assert_eq!(record.new_status, DeclarationStatus::Rejected);
    assert!(record.previous_correction_message.is_none());
    assert_eq!(
        record.new_correction_message.as_deref(),
        Some("missing land valuation")
    );
    assert_eq!(record.acting_admin_id, 11);
    assert_eq!(record.changed_at, REVIEW_TIME);
}

#[test]
fn test_unpersisted_declaration_cannot_be_reviewed() {
    let mut declaration: Declaration = create_test_declaration();
    declaration.declaration_id = None;

    let result = apply_review(
        &declaration,
        ReviewCommand::approve(),
        &create_test_admin(),
        REVIEW_TIME,
    );

    assert_eq!(result, Err(CoreError::UnpersistedDeclaration));
}
