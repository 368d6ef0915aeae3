// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The review verdict an administrator is issuing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    /// Accept the declaration as filed.
    Approve,
    /// Send the declaration back to the filer for correction.
    Reject,
}

impl ReviewAction {
    /// Returns the string representation of the action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

impl std::fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A review command represents administrator intent as data only.
///
/// Commands are the only way to request a status transition. The correction
/// message travels with the command because its validity depends on the
/// action: a rejection must explain itself, an approval must not carry a
/// leftover message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCommand {
    /// The verdict to apply.
    pub action: ReviewAction,
    /// The correction message for the filer, required when rejecting.
    pub correction_message: Option<String>,
}

impl ReviewCommand {
    /// Creates a new review command.
    #[must_use]
    pub const fn new(action: ReviewAction, correction_message: Option<String>) -> Self {
        Self {
            action,
            correction_message,
        }
    }

    /// Creates an approval command.
    #[must_use]
    pub const fn approve() -> Self {
        Self::new(ReviewAction::Approve, None)
    }

    /// Creates a rejection command carrying the given correction message.
    #[must_use]
    pub const fn reject(correction_message: String) -> Self {
        Self::new(ReviewAction::Reject, Some(correction_message))
    }
}
