// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers take an already-authenticated actor where one is required and
//! an explicit `now` instant, so the out-of-scope HTTP layer stays a thin
//! shell and every rule here is testable without a clock.

use std::str::FromStr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;
use wds::{ReviewAction, ReviewCommand, ReviewOutcome, apply_review, validate_for_submission};
use wds_domain::{
    AccessDecision, AccessRequest, Declaration, DeclarationType, DeclarationWindow, EditOverride,
    FamilyMember, FinancialProfile, LockFlags, Relation, aggregate_family_totals, resolve_access,
};
use wds_persistence::Persistence;

use crate::auth::AuthenticatedActor;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    AccessCheckResponse, CreateOverrideRequest, CreateOverrideResponse, CreateWindowRequest,
    CreateWindowResponse, DeclarationPayload, DeclarationTotalsResponse, ListOverridesResponse,
    ListWindowsResponse, ReviewDeclarationRequest, ReviewDeclarationResponse, SetLockFlagsRequest,
    SetLockFlagsResponse, StatusAuditResponse, SubmitDeclarationResponse,
    UpdateDeclarationResponse,
};

/// Which view of the audit trail the caller is entitled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditView {
    /// The full ledger, including acting administrator identities.
    Full,
    /// The employee-facing view with administrator identities removed.
    Redacted,
}

/// Builds a domain declaration from an API payload.
///
/// Parsing failures and a backwards reporting period surface as
/// `InvalidInput`; taxonomy findings are the caller's concern.
fn build_declaration(payload: &DeclarationPayload) -> Result<Declaration, ApiError> {
    let declaration_type: DeclarationType =
        DeclarationType::from_str(&payload.declaration_type).map_err(translate_domain_error)?;

    let mut family_members: Vec<FamilyMember> = Vec::with_capacity(payload.family_members.len());
    for member in &payload.family_members {
        let relation: Relation =
            Relation::from_str(&member.relation).map_err(translate_domain_error)?;
        family_members.push(FamilyMember::new(
            relation,
            member.full_name.clone(),
            FinancialProfile::new(
                member.income.clone(),
                member.assets.clone(),
                member.liabilities.clone(),
                member.other_financial_info.clone(),
            ),
        ));
    }

    Declaration::new(
        payload.user_id,
        declaration_type,
        payload.period_start,
        payload.period_end,
        FinancialProfile::new(
            payload.income.clone(),
            payload.assets.clone(),
            payload.liabilities.clone(),
            payload.other_financial_info.clone(),
        ),
        family_members,
    )
    .map_err(translate_domain_error)
}

/// Loads lock flags, windows, and overrides and runs the access resolver.
///
/// The three reads are treated as one logical snapshot; locks, windows,
/// and overrides change rarely enough that a mid-request change is a
/// tolerable race.
fn resolve_current_access(
    persistence: &mut Persistence,
    request: AccessRequest,
    declaration_type: DeclarationType,
    user_id: i64,
    now: OffsetDateTime,
) -> Result<AccessDecision, ApiError> {
    let locks: LockFlags = persistence
        .load_lock_flags()
        .map_err(translate_persistence_error)?;
    let windows: Vec<DeclarationWindow> = persistence
        .list_windows()
        .map_err(translate_persistence_error)?;
    let overrides: Vec<EditOverride> = persistence
        .list_overrides()
        .map_err(translate_persistence_error)?;

    Ok(resolve_access(
        request,
        declaration_type,
        user_id,
        &locks,
        &windows,
        &overrides,
        now,
    ))
}

/// Runs the financial validator and converts findings into the structured
/// validation error.
fn validate_payload(declaration: &Declaration) -> Result<(), ApiError> {
    validate_for_submission(declaration).map_err(|details| ApiError::Validation { details })
}

/// Submits a new declaration.
///
/// The payload is validated against the financial taxonomy and the
/// submission is gated by the window/lock resolver before anything is
/// persisted.
///
/// # Errors
///
/// Returns `Validation` with the complete finding list, `Forbidden` with
/// the resolver's reason, `InvalidInput` for malformed fields, or an
/// internal error if persistence fails.
pub fn submit_declaration(
    persistence: &mut Persistence,
    payload: &DeclarationPayload,
    now: OffsetDateTime,
) -> Result<SubmitDeclarationResponse, ApiError> {
    let mut declaration: Declaration = build_declaration(payload)?;
    validate_payload(&declaration)?;

    let decision: AccessDecision = resolve_current_access(
        persistence,
        AccessRequest::NewSubmission,
        declaration.declaration_type,
        declaration.user_id,
        now,
    )?;
    if !decision.allowed {
        return Err(ApiError::Forbidden {
            reason: decision.reason,
        });
    }

    declaration.submitted_at = Some(now);
    let declaration_id: i64 = persistence
        .create_declaration(&declaration)
        .map_err(translate_persistence_error)?;

    info!(
        declaration_id,
        user_id = declaration.user_id,
        declaration_type = %declaration.declaration_type,
        "Declaration submitted"
    );

    Ok(SubmitDeclarationResponse {
        declaration_id,
        status: declaration.status.to_string(),
        message: format!("Declaration {declaration_id} submitted"),
    })
}

/// Updates an existing declaration with resubmitted content.
///
/// The edit is gated by the window/lock resolver (edit overrides apply).
/// A successful update returns the declaration to `Pending` and clears
/// any prior correction message; it will be reviewed again.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown declaration, `Forbidden` if
/// the declaration belongs to another user or the resolver denies the
/// edit, `InvalidInput` if the payload's type differs from the stored
/// declaration's type, `Validation` with the complete finding list, or an
/// internal error if persistence fails.
pub fn update_declaration(
    persistence: &mut Persistence,
    declaration_id: i64,
    payload: &DeclarationPayload,
    now: OffsetDateTime,
) -> Result<UpdateDeclarationResponse, ApiError> {
    let existing: Declaration = persistence
        .get_declaration(declaration_id)
        .map_err(translate_persistence_error)?;
    if existing.user_id != payload.user_id {
        return Err(ApiError::Forbidden {
            reason: format!("Declaration {declaration_id} belongs to another user"),
        });
    }

    let mut declaration: Declaration = build_declaration(payload)?;
    // The type is immutable after filing, and the edit gate must judge the
    // declaration as stored, not as the payload describes it.
    if declaration.declaration_type != existing.declaration_type {
        return Err(ApiError::InvalidInput {
            field: String::from("declaration_type"),
            message: format!(
                "Declaration {declaration_id} was filed as {}; its type cannot change",
                existing.declaration_type
            ),
        });
    }
    validate_payload(&declaration)?;

    let decision: AccessDecision = resolve_current_access(
        persistence,
        AccessRequest::EditExisting(declaration_id),
        existing.declaration_type,
        declaration.user_id,
        now,
    )?;
    if !decision.allowed {
        return Err(ApiError::Forbidden {
            reason: decision.reason,
        });
    }

    // A resubmission goes back to review: Pending, no correction message.
    declaration.declaration_id = Some(declaration_id);
    declaration.submitted_at = Some(now);
    persistence
        .update_declaration(declaration_id, &declaration)
        .map_err(translate_persistence_error)?;

    info!(
        declaration_id,
        user_id = declaration.user_id,
        "Declaration updated and resubmitted"
    );

    Ok(UpdateDeclarationResponse {
        declaration_id,
        status: declaration.status.to_string(),
        message: format!("Declaration {declaration_id} resubmitted for review"),
    })
}

/// Checks whether the user may create or edit a declaration right now.
///
/// A denial is a normal response, not an error; the verdict carries the
/// deciding rule and its human-readable reason.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown declaration type or an internal
/// error if the configuration cannot be loaded.
pub fn can_submit_or_edit(
    persistence: &mut Persistence,
    user_id: i64,
    declaration_id: Option<i64>,
    declaration_type: &str,
    now: OffsetDateTime,
) -> Result<AccessCheckResponse, ApiError> {
    let parsed_type: DeclarationType =
        DeclarationType::from_str(declaration_type).map_err(translate_domain_error)?;
    let request: AccessRequest =
        declaration_id.map_or(AccessRequest::NewSubmission, AccessRequest::EditExisting);

    let decision: AccessDecision =
        resolve_current_access(persistence, request, parsed_type, user_id, now)?;

    Ok(AccessCheckResponse {
        allowed: decision.allowed,
        rule: decision.rule,
        reason: decision.reason,
    })
}

/// Reviews a declaration: approve or reject, with super-admin revisions.
///
/// The status transition and its audit ledger row commit atomically; a
/// failed review writes nothing.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown action or a missing/unexpected
/// correction message, `Forbidden` when a plain admin attempts a
/// revision, `ResourceNotFound` for an unknown declaration, or `Conflict`
/// when a concurrent review won the race.
pub fn review_declaration(
    persistence: &mut Persistence,
    declaration_id: i64,
    request: &ReviewDeclarationRequest,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<ReviewDeclarationResponse, ApiError> {
    let action: ReviewAction = match request.action.as_str() {
        "approve" => ReviewAction::Approve,
        "reject" => ReviewAction::Reject,
        other => {
            return Err(ApiError::InvalidInput {
                field: String::from("action"),
                message: format!("Unknown review action: {other}"),
            });
        }
    };

    let declaration: Declaration = persistence
        .get_declaration(declaration_id)
        .map_err(translate_persistence_error)?;

    let command: ReviewCommand = ReviewCommand::new(action, request.correction_message.clone());
    let outcome: ReviewOutcome = apply_review(&declaration, command, &actor.to_admin_actor(), now)
        .map_err(translate_core_error)?;

    let audit_id: i64 = persistence
        .persist_review(&outcome)
        .map_err(translate_persistence_error)?;

    info!(
        declaration_id,
        action = %request.action,
        acting_admin_id = actor.admin_id,
        audit_id,
        "Declaration reviewed"
    );

    let reviewed: &Declaration = &outcome.new_declaration;
    Ok(ReviewDeclarationResponse {
        declaration_id,
        status: reviewed.status.to_string(),
        correction_message: reviewed.correction_message.clone(),
        approved_at: now,
        audit_id,
        message: format!("Declaration {declaration_id} is now {}", reviewed.status),
    })
}

/// Retrieves a declaration with its family members.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown declaration.
pub fn get_declaration(
    persistence: &mut Persistence,
    declaration_id: i64,
) -> Result<Declaration, ApiError> {
    persistence
        .get_declaration(declaration_id)
        .map_err(translate_persistence_error)
}

/// Lists all declarations filed by a user, newest first.
///
/// # Errors
///
/// Returns an internal error if the database cannot be queried.
pub fn list_declarations_for_user(
    persistence: &mut Persistence,
    user_id: i64,
) -> Result<Vec<Declaration>, ApiError> {
    persistence
        .list_declarations_for_user(user_id)
        .map_err(translate_persistence_error)
}

/// Retrieves a declaration's status audit trail in transition order.
///
/// The employee-facing view redacts the acting administrator identities;
/// the trail itself is identical.
///
/// # Errors
///
/// Returns an internal error if the database cannot be queried.
pub fn get_status_audit(
    persistence: &mut Persistence,
    declaration_id: i64,
    view: AuditView,
) -> Result<StatusAuditResponse, ApiError> {
    let records = persistence
        .get_audit_trail(declaration_id)
        .map_err(translate_persistence_error)?;

    let records = match view {
        AuditView::Full => records,
        AuditView::Redacted => records.iter().map(wds_audit::StatusAuditRecord::redacted).collect(),
    };

    Ok(StatusAuditResponse {
        declaration_id,
        records,
    })
}

/// Computes the family-wide financial totals for a declaration.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown declaration.
pub fn declaration_totals(
    persistence: &mut Persistence,
    declaration_id: i64,
) -> Result<DeclarationTotalsResponse, ApiError> {
    let declaration: Declaration = persistence
        .get_declaration(declaration_id)
        .map_err(translate_persistence_error)?;

    Ok(DeclarationTotalsResponse {
        declaration_id,
        totals: aggregate_family_totals(&declaration),
    })
}

/// Sets the per-type lock flags. Admin only.
///
/// # Errors
///
/// Returns an internal error if persistence fails.
pub fn set_lock_flags(
    persistence: &mut Persistence,
    request: &SetLockFlagsRequest,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<SetLockFlagsResponse, ApiError> {
    let flags = LockFlags {
        first_declaration_locked: request.first_declaration_locked,
        biennial_declaration_locked: request.biennial_declaration_locked,
        final_declaration_locked: request.final_declaration_locked,
    };
    let updated_at: String = now.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })?;

    persistence
        .save_lock_flags(&flags, actor.admin_id, &updated_at)
        .map_err(translate_persistence_error)?;

    Ok(SetLockFlagsResponse {
        flags,
        message: String::from("Lock flags updated"),
    })
}

/// Creates a declaration window. Admin only.
///
/// # Errors
///
/// Returns `InvalidInput` if the end date precedes the start date, or an
/// internal error if persistence fails.
pub fn create_window(
    persistence: &mut Persistence,
    request: &CreateWindowRequest,
    actor: &AuthenticatedActor,
) -> Result<CreateWindowResponse, ApiError> {
    if request.end_date < request.start_date {
        return Err(translate_domain_error(
            wds_domain::DomainError::InvalidWindowRange {
                start: request.start_date.to_string(),
                end: request.end_date.to_string(),
            },
        ));
    }

    let window = DeclarationWindow {
        window_id: None,
        year: request.year,
        start_date: request.start_date,
        end_date: request.end_date,
        active: true,
        notes: request.notes.clone(),
    };
    let window_id: i64 = persistence
        .create_window(&window, actor.admin_id)
        .map_err(translate_persistence_error)?;

    info!(window_id, created_by = actor.admin_id, "Declaration window created");

    Ok(CreateWindowResponse {
        window_id,
        message: format!("Declaration window {window_id} created"),
    })
}

/// Activates or deactivates a declaration window. Admin only.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown window.
pub fn set_window_active(
    persistence: &mut Persistence,
    window_id: i64,
    active: bool,
) -> Result<(), ApiError> {
    persistence.set_window_active(window_id, active).map_err(|e| {
        if matches!(e, wds_persistence::PersistenceError::NotFound(_)) {
            ApiError::ResourceNotFound {
                resource_type: String::from("Declaration window"),
                message: format!("Declaration window {window_id} does not exist"),
            }
        } else {
            translate_persistence_error(e)
        }
    })
}

/// Lists all declaration windows in creation order. Admin only.
///
/// # Errors
///
/// Returns an internal error if the database cannot be queried.
pub fn list_windows(persistence: &mut Persistence) -> Result<ListWindowsResponse, ApiError> {
    let windows: Vec<DeclarationWindow> = persistence
        .list_windows()
        .map_err(translate_persistence_error)?;
    Ok(ListWindowsResponse { windows })
}

/// Creates an edit override. Admin only.
///
/// # Errors
///
/// Returns `InvalidInput` if the range is backwards or the reason is
/// blank, or an internal error if persistence fails.
pub fn create_override(
    persistence: &mut Persistence,
    request: &CreateOverrideRequest,
    actor: &AuthenticatedActor,
) -> Result<CreateOverrideResponse, ApiError> {
    if request.allow_until < request.allow_from {
        return Err(translate_domain_error(
            wds_domain::DomainError::InvalidOverrideRange {
                from: request.allow_from.to_string(),
                until: request.allow_until.to_string(),
            },
        ));
    }
    if request.reason.trim().is_empty() {
        return Err(translate_domain_error(
            wds_domain::DomainError::MissingOverrideReason,
        ));
    }

    let edit_override = EditOverride {
        override_id: None,
        user_id: request.user_id,
        declaration_id: request.declaration_id,
        allow_from: request.allow_from,
        allow_until: request.allow_until,
        allow: request.allow,
        active: true,
        reason: request.reason.clone(),
    };
    let override_id: i64 = persistence
        .create_override(&edit_override, actor.admin_id)
        .map_err(translate_persistence_error)?;

    info!(
        override_id,
        created_by = actor.admin_id,
        allow = request.allow,
        "Edit override created"
    );

    Ok(CreateOverrideResponse {
        override_id,
        message: format!("Edit override {override_id} created"),
    })
}

/// Activates or deactivates an edit override. Admin only.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown override.
pub fn set_override_active(
    persistence: &mut Persistence,
    override_id: i64,
    active: bool,
) -> Result<(), ApiError> {
    persistence
        .set_override_active(override_id, active)
        .map_err(|e| {
            if matches!(e, wds_persistence::PersistenceError::NotFound(_)) {
                ApiError::ResourceNotFound {
                    resource_type: String::from("Edit override"),
                    message: format!("Edit override {override_id} does not exist"),
                }
            } else {
                translate_persistence_error(e)
            }
        })
}

/// Lists all edit overrides in creation order. Admin only.
///
/// # Errors
///
/// Returns an internal error if the database cannot be queried.
pub fn list_overrides(persistence: &mut Persistence) -> Result<ListOverridesResponse, ApiError> {
    let overrides: Vec<EditOverride> = persistence
        .list_overrides()
        .map_err(translate_persistence_error)?;
    Ok(ListOverridesResponse { overrides })
}
