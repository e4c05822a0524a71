//! Admin User Repository

use super::{BaseRepository, RepoError, RepoResult, now_ts, record_id};
use crate::db::models::AdminUser;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "admin_user";

#[derive(Clone)]
pub struct AdminUserRepository {
    base: BaseRepository,
}

impl AdminUserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find account by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<AdminUser>> {
        let email = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM admin_user WHERE email = $email LIMIT 1")
            .bind(("email", email))
            .await?;
        let users: Vec<AdminUser> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Find account by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<AdminUser>> {
        let user: Option<AdminUser> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(user)
    }

    /// Whether any account exists (bootstrap check)
    pub async fn any_exists(&self) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM admin_user GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0) > 0)
    }

    /// Create an account with a freshly hashed password
    pub async fn create(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
        role: &str,
    ) -> RepoResult<AdminUser> {
        if self.find_by_email(email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Account '{}' already exists",
                email
            )));
        }

        let hash_pass = AdminUser::hash_password(password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {}", e)))?;

        let user = AdminUser {
            id: None,
            email: email.to_string(),
            display_name: display_name.to_string(),
            hash_pass,
            role: role.to_string(),
            is_active: true,
            created_at: now_ts(),
        };

        let created: Option<AdminUser> = self.base.db().create(TABLE).content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create admin user".to_string()))
    }
}
