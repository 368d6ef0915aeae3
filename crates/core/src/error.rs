// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use wds_domain::DomainError;

/// Errors that can occur during status transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A reviewed declaration may only be revised by a super administrator.
    RevisionRequiresSuperAdmin {
        /// The administrator who attempted the revision.
        admin_id: i64,
    },
    /// The declaration has not been persisted and cannot be reviewed.
    UnpersistedDeclaration,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::RevisionRequiresSuperAdmin { admin_id } => write!(
                f,
                "Admin {admin_id} may not revise a reviewed declaration; super administrator required"
            ),
            Self::UnpersistedDeclaration => {
                write!(f, "Declaration has no identifier and cannot be reviewed")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
