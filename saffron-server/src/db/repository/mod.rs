//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables, one repository per resource.

pub mod admin_user;
pub mod banner;
pub mod feedback;
pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod subscriber;

// Re-exports
pub use admin_user::AdminUserRepository;
pub use banner::BannerRepository;
pub use feedback::FeedbackRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use reservation::ReservationRepository;
pub use subscriber::SubscriberRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// API 层的 ID 参数既可能是 "menu_item:abc"，也可能是裸 "abc"。
// [`record_id`] 统一转换为 RecordId，CRUD 直接使用：
//   - db.select(record_id(TABLE, id))
//   - db.delete(record_id(TABLE, id))

/// Build a [`RecordId`] from a possibly table-prefixed id string
pub fn record_id(table: &str, id: &str) -> RecordId {
    let key = id
        .strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id);
    RecordId::from_table_key(table, key)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Unix timestamp in seconds, for `created_at` fields
pub fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_both_forms() {
        let bare = record_id("menu_item", "abc123");
        let prefixed = record_id("menu_item", "menu_item:abc123");
        assert_eq!(bare, prefixed);
        assert_eq!(bare.to_string(), "menu_item:abc123");
    }
}
