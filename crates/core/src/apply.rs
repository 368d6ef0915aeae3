// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{ReviewAction, ReviewCommand};
use crate::error::CoreError;
use time::OffsetDateTime;
use wds_audit::StatusAuditRecord;
use wds_domain::{AdminActor, Declaration, DeclarationStatus, DomainError};

/// The result of a successful status transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewOutcome {
    /// The declaration after the transition.
    pub new_declaration: Declaration,
    /// The audit record documenting the transition.
    pub audit_record: StatusAuditRecord,
}

/// Applies a review command to a declaration, producing the new declaration
/// and its audit record.
///
/// The declaration passed in is immutable; the outcome carries a new copy
/// with the transition applied. Every successful call produces exactly one
/// audit record, including a no-op re-approval, so the audit trail is a
/// complete log of administrator actions rather than of state changes.
///
/// Any administrator may review a `Pending` declaration. Once a declaration
/// is `Approved` or `Rejected`, only a super administrator may revise the
/// verdict; a plain administrator gets `RevisionRequiresSuperAdmin` and no
/// audit record is produced.
///
/// `approved_at` is stamped with `now` on every successful transition,
/// approvals and rejections alike: it records the time of the most recent
/// administrator action.
///
/// # Arguments
///
/// * `declaration` - The declaration under review (must be persisted)
/// * `command` - The review command to apply
/// * `actor` - The administrator performing the review
/// * `now` - The time of the action
///
/// # Returns
///
/// * `Ok(ReviewOutcome)` containing the new declaration and audit record
/// * `Err(CoreError)` if the command is invalid or the actor lacks authority
///
/// # Errors
///
/// Returns an error if:
/// - The declaration has no identifier yet
/// - The declaration is already reviewed and the actor is not a super
///   administrator
/// - A rejection carries no correction message, or a blank one
/// - An approval carries a correction message
pub fn apply_review(
    declaration: &Declaration,
    command: ReviewCommand,
    actor: &AdminActor,
    now: OffsetDateTime,
) -> Result<ReviewOutcome, CoreError> {
    let declaration_id: i64 = declaration
        .declaration_id
        .ok_or(CoreError::UnpersistedDeclaration)?;

    // Authority check comes first so an unauthorized attempt leaves no trace
    // beyond the error itself.
    if declaration.status.is_reviewed() && !actor.is_super_admin {
        return Err(CoreError::RevisionRequiresSuperAdmin {
            admin_id: actor.admin_id,
        });
    }

    let (new_status, new_message): (DeclarationStatus, Option<String>) = match command.action {
        ReviewAction::Approve => {
            if command
                .correction_message
                .as_deref()
                .is_some_and(|message| !message.trim().is_empty())
            {
                return Err(CoreError::DomainViolation(
                    DomainError::UnexpectedCorrectionMessage,
                ));
            }
            (DeclarationStatus::Approved, None)
        }
        ReviewAction::Reject => {
            let message: String = command
                .correction_message
                .filter(|message| !message.trim().is_empty())
                .ok_or(CoreError::DomainViolation(
                    DomainError::MissingCorrectionMessage,
                ))?;
            (DeclarationStatus::Rejected, Some(message))
        }
    };

    let audit_record: StatusAuditRecord = StatusAuditRecord::new(
        declaration_id,
        declaration.status,
        new_status,
        declaration.correction_message.clone(),
        new_message.clone(),
        actor.admin_id,
        now,
    );

    let mut new_declaration: Declaration = declaration.clone();
    new_declaration.status = new_status;
    new_declaration.correction_message = new_message;
    new_declaration.approved_at = Some(now);

    Ok(ReviewOutcome {
        new_declaration,
        audit_record,
    })
}
