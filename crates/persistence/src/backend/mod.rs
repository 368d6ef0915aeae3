// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-specific database plumbing.
//!
//! Everything that cannot be written as backend-agnostic Diesel DSL is
//! quarantined here: connection establishment, migration execution,
//! PRAGMA / engine configuration, and the last-insert-id workaround.
//! The declaration, audit, and configuration queries in `queries/` and
//! `mutations/` never touch a concrete connection type directly.
//!
//! Two backends are supported:
//!
//! - `sqlite` — the default for development and all standard tests
//! - `mysql` — MySQL/MariaDB, exercised by opt-in tests against a real
//!   server

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

/// Backend operations with no Diesel DSL equivalent.
///
/// Implemented for both `SqliteConnection` and `MysqlConnection` so the
/// generated query and mutation functions can stay generic over the
/// connection while each backend keeps its own raw-SQL escape hatches.
pub trait PersistenceBackend: Connection {
    /// Returns the auto-increment id of the most recently inserted row.
    ///
    /// Declaration, window, override, and audit inserts all need the new
    /// id back, and `RETURNING` support differs between the backends.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError>;

    /// Confirms the backend is enforcing foreign keys.
    ///
    /// Family members and audit rows reference their declaration; without
    /// enforcement the ledger could orphan silently. Run at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if enforcement is disabled or cannot be checked.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        sqlite::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        mysql::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }
}
