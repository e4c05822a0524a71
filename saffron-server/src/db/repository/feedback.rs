//! Feedback Repository

use super::{BaseRepository, RepoError, RepoResult, now_ts, record_id};
use crate::db::models::Feedback;
use shared::models::FeedbackCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "feedback";

#[derive(Clone)]
pub struct FeedbackRepository {
    base: BaseRepository,
}

impl FeedbackRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All reviews, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Feedback>> {
        let reviews: Vec<Feedback> = self
            .base
            .db()
            .query("SELECT * FROM feedback ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// Find review by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Feedback>> {
        let review: Option<Feedback> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(review)
    }

    /// Store a submitted review
    pub async fn create(&self, data: FeedbackCreate) -> RepoResult<Feedback> {
        let review = Feedback {
            id: None,
            name: data.name,
            email: data.email,
            rating: data.rating,
            comment: data.comment,
            created_at: now_ts(),
        };

        let created: Option<Feedback> = self.base.db().create(TABLE).content(review).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create feedback".to_string()))
    }
}
