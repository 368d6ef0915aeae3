// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor roles and the authenticated-actor type.
//!
//! Authentication itself (credentials, sessions, tokens) is out of scope;
//! the API layer receives an already-authenticated administrator and only
//! cares about its role. Roles apply to reviewing administrators, never to
//! the filing employees.

use wds_domain::AdminActor;

/// Administrator roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Ordinary administrator: may review pending declarations and manage
    /// windows, overrides, and lock flags.
    Admin,
    /// Super administrator: additionally may revise already-reviewed
    /// declarations (Approved ↔ Rejected).
    SuperAdmin,
}

impl Role {
    /// Returns the string representation used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

/// An authenticated administrator with an associated role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The administrator's identifier, recorded on every audit row.
    pub admin_id: i64,
    /// The role assigned to this administrator.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(admin_id: i64, role: Role) -> Self {
        Self { admin_id, role }
    }

    /// Converts this actor into the domain `AdminActor` used by the
    /// status transition state machine.
    #[must_use]
    pub const fn to_admin_actor(&self) -> AdminActor {
        AdminActor::new(self.admin_id, matches!(self.role, Role::SuperAdmin))
    }
}
