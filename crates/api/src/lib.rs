// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Wealth Declaration System.
//!
//! This crate is what the out-of-scope HTTP controllers consume: request
//! and response DTOs, a structured error envelope, explicit
//! domain/core/persistence → API error translation, and handler functions
//! that wire the validator, the window/lock resolver, the status
//! transition state machine, and the aggregator to the persistence layer.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, Role};
pub use error::{
    ApiError, ErrorEnvelope, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    AuditView, can_submit_or_edit, create_override, create_window, declaration_totals,
    get_declaration, get_status_audit, list_declarations_for_user, list_overrides, list_windows,
    review_declaration, set_lock_flags, set_override_active, set_window_active,
    submit_declaration, update_declaration,
};
pub use request_response::{
    AccessCheckResponse, CreateOverrideRequest, CreateOverrideResponse, CreateWindowRequest,
    CreateWindowResponse, DeclarationPayload, DeclarationTotalsResponse, FamilyMemberPayload,
    ListOverridesResponse, ListWindowsResponse, ReviewDeclarationRequest,
    ReviewDeclarationResponse, SetLockFlagsRequest, SetLockFlagsResponse, StatusAuditResponse,
    SubmitDeclarationResponse, UpdateDeclarationResponse,
};
