// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic query modules.
//!
//! All queries use Diesel DSL and work across all supported database
//! backends.
//!
//! ## Module Organization
//!
//! - `declarations` — Declaration reads, including family members
//! - `audit` — Status audit ledger reads
//! - `config` — Lock flags, declaration windows, and edit overrides

pub mod audit;
pub mod config;
pub mod declarations;

// Re-export backend-specific query functions used by lib.rs
pub use audit::{get_audit_trail_mysql, get_audit_trail_sqlite};
pub use config::{
    list_overrides_mysql, list_overrides_sqlite, list_windows_mysql, list_windows_sqlite,
    load_lock_flags_mysql, load_lock_flags_sqlite,
};
pub use declarations::{
    get_declaration_mysql, get_declaration_sqlite, list_declarations_for_user_mysql,
    list_declarations_for_user_sqlite,
};
