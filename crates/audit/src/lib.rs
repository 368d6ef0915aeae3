// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use wds_domain::DeclarationStatus;

/// An immutable audit record for one status transition.
///
/// Every successful status transition must produce exactly one audit
/// record, including no-op transitions that re-apply the current state:
/// administrators want a paper trail of repeated reviews. Records are
/// never mutated or deleted; the ordered sequence for a declaration forms
/// the full "who changed what, when" ledger.
///
/// Creation produces no record: a declaration is created `Pending` with no
/// prior state, so the audit trail length always equals the number of
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusAuditRecord {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the record has not been persisted yet.
    pub audit_id: Option<i64>,
    /// The declaration whose status changed.
    pub declaration_id: i64,
    /// Status before the transition.
    pub previous_status: DeclarationStatus,
    /// Status after the transition.
    pub new_status: DeclarationStatus,
    /// Correction message before the transition.
    pub previous_correction_message: Option<String>,
    /// Correction message after the transition.
    pub new_correction_message: Option<String>,
    /// The administrator who performed the transition.
    pub acting_admin_id: i64,
    /// When the transition happened.
    #[serde(with = "time::serde::rfc3339")]
    pub changed_at: OffsetDateTime,
}

impl StatusAuditRecord {
    /// Creates a new `StatusAuditRecord` without a persisted ID.
    ///
    /// Once created, an audit record is immutable.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        declaration_id: i64,
        previous_status: DeclarationStatus,
        new_status: DeclarationStatus,
        previous_correction_message: Option<String>,
        new_correction_message: Option<String>,
        acting_admin_id: i64,
        changed_at: OffsetDateTime,
    ) -> Self {
        Self {
            audit_id: None,
            declaration_id,
            previous_status,
            new_status,
            previous_correction_message,
            new_correction_message,
            acting_admin_id,
            changed_at,
        }
    }

    /// Returns a copy with the acting administrator identity removed.
    ///
    /// The redacted form is the one surfaced to the filing employee; the
    /// full ledger is reserved for administrators.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            acting_admin_id: 0,
            ..self.clone()
        }
    }

    /// Returns whether the transition changed the visible state.
    ///
    /// A record for a no-op transition (same status, same message) is
    /// still valid; it documents a repeated review.
    #[must_use]
    pub fn changed_visible_state(&self) -> bool {
        self.previous_status != self.new_status
            || self.previous_correction_message != self.new_correction_message
    }
}
