//! Repository pattern implementation for data access layer

use crate::core::error::{RegistryError, Result};
use crate::db::manager::DatabaseManager;
use crate::db::models::User;
use async_trait::async_trait;
use rusqlite::OptionalExtension;
use std::sync::Arc;

/// Generic repository trait for CRUD operations
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Find an entity by its ID
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Find all entities
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Create a new entity
    async fn create(&self, entity: &T) -> Result<()>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> Result<()>;

    /// Delete an entity by its ID
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Repository for User entities
pub struct UserRepository {
    db: Arc<DatabaseManager>,
}

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_digest: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Find a user by email. Absence is a normal outcome, not a fault.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT id, name, email, password_digest, created_at FROM users WHERE email = ?",
                    [&email],
                    row_to_user,
                )
                .optional()
                .map_err(RegistryError::DatabaseError)
            })
            .await
    }

    /// Count total users
    pub async fn count(&self) -> Result<i64> {
        self.db
            .execute(|conn| {
                conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
                    .map_err(RegistryError::DatabaseError)
            })
            .await
    }
}

#[async_trait]
impl Repository<User> for UserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let id = id.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT id, name, email, password_digest, created_at FROM users WHERE id = ?",
                    [&id],
                    row_to_user,
                )
                .optional()
                .map_err(RegistryError::DatabaseError)
            })
            .await
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn
                    .prepare(
                        "SELECT id, name, email, password_digest, created_at FROM users \
                         ORDER BY created_at DESC",
                    )
                    .map_err(RegistryError::DatabaseError)?;

                let users = stmt
                    .query_map([], row_to_user)
                    .map_err(RegistryError::DatabaseError)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(RegistryError::DatabaseError)?;

                Ok(users)
            })
            .await
    }

    async fn create(&self, user: &User) -> Result<()> {
        let user = user.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO users (id, name, email, password_digest) VALUES (?, ?, ?, ?)",
                    rusqlite::params![&user.id, &user.name, &user.email, &user.password_digest],
                )
                .map_err(RegistryError::DatabaseError)?;
                Ok(())
            })
            .await
    }

    async fn update(&self, user: &User) -> Result<()> {
        let user = user.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "UPDATE users SET name = ?, email = ?, password_digest = ? WHERE id = ?",
                    rusqlite::params![&user.name, &user.email, &user.password_digest, &user.id],
                )
                .map_err(RegistryError::DatabaseError)?;
                Ok(())
            })
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.db
            .execute(move |conn| {
                conn.execute("DELETE FROM users WHERE id = ?", [&id])
                    .map_err(RegistryError::DatabaseError)?;
                Ok(())
            })
            .await
    }
}
