// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Window and lock resolution for declaration submission and editing.
//!
//! Determines, for a given user, declaration type, and instant, whether
//! creating or editing a declaration is currently permitted. Four layers
//! are consulted in strict precedence order:
//!
//! 1. Administrator lock flags (hard lock per declaration type)
//! 2. The base rule: only `Biennial` declarations are window-scoped
//! 3. Dated declaration windows (year-specific preferred over global)
//! 4. Per-user/per-declaration edit overrides, which may flip the window
//!    verdict in either direction
//!
//! ## Invariants
//!
//! - A hard lock can never be re-opened for a *new* submission; an active
//!   `allow = true` override may still open an *edit* of an existing
//!   declaration while the lock is on.
//! - Among simultaneously applicable overrides, the most recently created
//!   one wins. Callers must supply overrides in creation order.
//! - Every verdict carries a human-readable reason naming the deciding
//!   rule; callers surface it to the end user verbatim.

use crate::types::DeclarationType;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Process-wide hard locks, one per declaration type.
///
/// Loaded at request start and persisted via an explicit admin-only update;
/// never ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockFlags {
    pub first_declaration_locked: bool,
    pub biennial_declaration_locked: bool,
    pub final_declaration_locked: bool,
}

impl LockFlags {
    /// Returns whether the given declaration type is hard-locked.
    #[must_use]
    pub const fn is_locked(&self, declaration_type: DeclarationType) -> bool {
        match declaration_type {
            DeclarationType::First => self.first_declaration_locked,
            DeclarationType::Biennial => self.biennial_declaration_locked,
            DeclarationType::Final => self.final_declaration_locked,
        }
    }
}

/// A dated window during which biennial declarations may be filed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationWindow {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the window has not been persisted yet.
    pub window_id: Option<i64>,
    /// The year this window applies to; `None` applies to all years.
    pub year: Option<i32>,
    /// First day of the window (inclusive).
    pub start_date: Date,
    /// Last day of the window (inclusive).
    pub end_date: Date,
    /// Inactive windows are ignored by the resolver.
    pub active: bool,
    /// Free-text administrator notes.
    pub notes: Option<String>,
}

impl DeclarationWindow {
    /// Returns whether this window is active and covers the given day.
    #[must_use]
    pub fn covers(&self, day: Date) -> bool {
        self.active && self.start_date <= day && day <= self.end_date
    }
}

/// An administrator-granted exception to the lock/window rules.
///
/// Scoped to a user, a specific declaration, or both. An active override
/// with `allow = false` explicitly denies access within an otherwise-open
/// window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOverride {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the override has not been persisted yet.
    pub override_id: Option<i64>,
    /// The user this override is scoped to; `None` matches any user.
    pub user_id: Option<i64>,
    /// The declaration this override is scoped to; `None` matches any.
    pub declaration_id: Option<i64>,
    /// Start of the override's validity (inclusive).
    #[serde(with = "time::serde::rfc3339")]
    pub allow_from: OffsetDateTime,
    /// End of the override's validity (inclusive).
    #[serde(with = "time::serde::rfc3339")]
    pub allow_until: OffsetDateTime,
    /// Whether this override grants (`true`) or revokes (`false`) access.
    pub allow: bool,
    /// Inactive overrides are ignored by the resolver.
    pub active: bool,
    /// Why the override was granted. Required, shown on admin screens.
    pub reason: String,
}

impl EditOverride {
    /// Returns whether this override is active, covers `now`, and matches
    /// the `(user, declaration)` scope of the request.
    ///
    /// A `None` scope member on the override matches anything; a concrete
    /// scope member must match exactly. An override pinned to a specific
    /// declaration never applies to a new submission.
    #[must_use]
    pub fn applies_to(
        &self,
        user_id: i64,
        declaration_id: Option<i64>,
        now: OffsetDateTime,
    ) -> bool {
        if !self.active || now < self.allow_from || now > self.allow_until {
            return false;
        }
        if self.user_id.is_some_and(|scoped| scoped != user_id) {
            return false;
        }
        match (self.declaration_id, declaration_id) {
            (Some(scoped), Some(requested)) => scoped == requested,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}

/// What kind of access is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRequest {
    /// Creating a brand-new declaration.
    NewSubmission,
    /// Editing the existing declaration with this identifier.
    EditExisting(i64),
}

impl AccessRequest {
    /// Returns the declaration identifier for edit requests.
    #[must_use]
    pub const fn declaration_id(&self) -> Option<i64> {
        match self {
            Self::NewSubmission => None,
            Self::EditExisting(id) => Some(*id),
        }
    }
}

/// Which rule decided the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecidingRule {
    /// The per-type administrator lock decided.
    AdminLock,
    /// The declaration type is not window-scoped.
    TypeNotWindowed,
    /// An active declaration window covering now decided.
    InsideWindow,
    /// No active declaration window covers now.
    OutsideWindow,
    /// An administrator override granted access.
    OverrideGrant,
    /// An administrator override revoked access.
    OverrideRevoke,
}

/// The resolver's verdict for one access request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Whether the request is permitted.
    pub allowed: bool,
    /// Which rule decided.
    pub rule: DecidingRule,
    /// Human-readable reason, surfaced verbatim to the end user.
    pub reason: String,
}

impl AccessDecision {
    const fn new(allowed: bool, rule: DecidingRule, reason: String) -> Self {
        Self {
            allowed,
            rule,
            reason,
        }
    }
}

/// Resolves whether the user may create or edit a declaration right now.
///
/// `windows` and `overrides` must be supplied in creation order; among
/// simultaneously applicable overrides the last one wins.
#[must_use]
pub fn resolve_access(
    request: AccessRequest,
    declaration_type: DeclarationType,
    user_id: i64,
    locks: &LockFlags,
    windows: &[DeclarationWindow],
    overrides: &[EditOverride],
    now: OffsetDateTime,
) -> AccessDecision {
    // Rule 1: hard lock. Overrides cannot re-open a lock for new
    // submissions, but may still open an edit of an existing declaration.
    if locks.is_locked(declaration_type) {
        if let AccessRequest::EditExisting(declaration_id) = request {
            if let Some(decisive) =
                last_applicable_override(overrides, user_id, Some(declaration_id), now)
            {
                if decisive.allow {
                    return AccessDecision::new(
                        true,
                        DecidingRule::OverrideGrant,
                        String::from(
                            "editing granted by administrator override while submissions are locked",
                        ),
                    );
                }
            }
        }
        return AccessDecision::new(
            false,
            DecidingRule::AdminLock,
            format!("{declaration_type} declarations are locked by administrator"),
        );
    }

    // Rule 2: only biennial declarations are window-scoped.
    if declaration_type != DeclarationType::Biennial {
        return AccessDecision::new(
            true,
            DecidingRule::TypeNotWindowed,
            format!("{declaration_type} declarations are not window-restricted"),
        );
    }

    // Rule 4 outranks the window verdict in both directions.
    if let Some(decisive) =
        last_applicable_override(overrides, user_id, request.declaration_id(), now)
    {
        return if decisive.allow {
            AccessDecision::new(
                true,
                DecidingRule::OverrideGrant,
                String::from("access granted by administrator override"),
            )
        } else {
            AccessDecision::new(
                false,
                DecidingRule::OverrideRevoke,
                String::from("access revoked by administrator override"),
            )
        };
    }

    // Rule 3: the most specific active window covering today governs.
    governing_window(windows, now).map_or_else(
        || {
            AccessDecision::new(
                false,
                DecidingRule::OutsideWindow,
                String::from("outside declaration window"),
            )
        },
        |window| {
            AccessDecision::new(
                true,
                DecidingRule::InsideWindow,
                format!(
                    "within declaration window {} to {}",
                    window.start_date, window.end_date
                ),
            )
        },
    )
}

/// Finds the most specific active window covering `now`.
///
/// A window whose `year` matches the current year is preferred over a
/// global (`year = None`) window. Among equally specific candidates the
/// most recently created one wins.
#[must_use]
pub fn governing_window<'a>(
    windows: &'a [DeclarationWindow],
    now: OffsetDateTime,
) -> Option<&'a DeclarationWindow> {
    let today: Date = now.date();
    let current_year: i32 = today.year();

    let covering = || windows.iter().filter(|window| window.covers(today));

    covering()
        .filter(|window| window.year == Some(current_year))
        .next_back()
        .or_else(|| covering().filter(|window| window.year.is_none()).next_back())
}

/// Finds the last-created override applicable to the request, if any.
fn last_applicable_override<'a>(
    overrides: &'a [EditOverride],
    user_id: i64,
    declaration_id: Option<i64>,
    now: OffsetDateTime,
) -> Option<&'a EditOverride> {
    overrides
        .iter()
        .rev()
        .find(|o| o.applies_to(user_id, declaration_id, now))
}
