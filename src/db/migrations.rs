//! Database migrations
//!
//! Versioned schema migrations tracked in a schema_migrations table.

use crate::core::error::{RegistryError, Result};
use rusqlite::Connection;
use tracing::info;

/// Migration version tracking table
const MIGRATION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Initial schema migration (version 1)
const MIGRATION_V1: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL DEFAULT '',
    email TEXT UNIQUE NOT NULL,
    password_digest TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_users_email ON users(email);
"#;

/// All migrations in order
const MIGRATIONS: &[(i64, &str)] = &[(1, MIGRATION_V1)];

/// Run all pending migrations against the given connection
pub fn run_migrations(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(MIGRATION_TABLE)
        .map_err(RegistryError::DatabaseError)?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(RegistryError::DatabaseError)?;

    for (version, sql) in MIGRATIONS {
        if *version <= current_version {
            continue;
        }

        info!(version, "Applying database migration");

        let tx = conn.transaction().map_err(RegistryError::DatabaseError)?;
        tx.execute_batch(sql).map_err(RegistryError::DatabaseError)?;
        tx.execute(
            "INSERT INTO schema_migrations (version) VALUES (?)",
            [version],
        )
        .map_err(RegistryError::DatabaseError)?;
        tx.commit().map_err(RegistryError::DatabaseError)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_migrations_fresh_database() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();

        let version: i64 = conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(version, 1);
    }

    #[test]
    fn test_run_migrations_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();
        run_migrations(&mut conn).unwrap();

        let applied: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_email_uniqueness_enforced() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();

        conn.execute(
            "INSERT INTO users (id, name, email, password_digest) VALUES ('u1', 'A', 'a@x.com', 'd1')",
            [],
        )
        .unwrap();

        let duplicate = conn.execute(
            "INSERT INTO users (id, name, email, password_digest) VALUES ('u2', 'B', 'a@x.com', 'd2')",
            [],
        );
        assert!(duplicate.is_err());
    }
}
