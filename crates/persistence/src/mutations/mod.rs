// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence
//! layer. Most mutations use Diesel DSL and are backend-agnostic, with
//! minimal use of backend-specific helpers (e.g., `last_insert_rowid()`
//! for `SQLite`).
//!
//! ## Module Organization
//!
//! - `declarations` — Declaration and family member writes
//! - `review` — Transactional status transitions plus audit ledger inserts
//! - `config` — Lock flags, declaration windows, and edit overrides

pub mod config;
pub mod declarations;
pub mod review;

// Re-export backend-specific mutation functions used by lib.rs
pub use config::{
    insert_override_mysql, insert_override_sqlite, insert_window_mysql, insert_window_sqlite,
    save_lock_flags_mysql, save_lock_flags_sqlite, set_override_active_mysql,
    set_override_active_sqlite, set_window_active_mysql, set_window_active_sqlite,
};
pub use declarations::{
    insert_declaration_mysql, insert_declaration_sqlite, update_declaration_mysql,
    update_declaration_sqlite,
};
pub use review::{persist_review_mysql, persist_review_sqlite};
