//! Subscriber Repository

use super::{BaseRepository, RepoError, RepoResult, now_ts};
use crate::db::models::Subscriber;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "subscriber";

#[derive(Clone)]
pub struct SubscriberRepository {
    base: BaseRepository,
}

impl SubscriberRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find subscriber by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Subscriber>> {
        let email = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM subscriber WHERE email = $email LIMIT 1")
            .bind(("email", email))
            .await?;
        let subscribers: Vec<Subscriber> = result.take(0)?;
        Ok(subscribers.into_iter().next())
    }

    /// Add an email to the mailing list
    pub async fn create(&self, email: &str) -> RepoResult<Subscriber> {
        if self.find_by_email(email).await?.is_some() {
            return Err(RepoError::Duplicate(
                "This email is already subscribed".to_string(),
            ));
        }

        let subscriber = Subscriber {
            id: None,
            email: email.to_string(),
            created_at: now_ts(),
        };

        let created: Option<Subscriber> = self.base.db().create(TABLE).content(subscriber).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create subscriber".to_string()))
    }
}
