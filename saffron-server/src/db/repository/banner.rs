//! Banner Repository

use super::{BaseRepository, RepoError, RepoResult, now_ts, record_id};
use crate::db::models::Banner;
use shared::models::{BannerCreate, BannerUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "banner";

#[derive(Clone)]
pub struct BannerRepository {
    base: BaseRepository,
}

impl BannerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All banners for the admin screen
    pub async fn find_all(&self) -> RepoResult<Vec<Banner>> {
        let banners: Vec<Banner> = self
            .base
            .db()
            .query("SELECT * FROM banner ORDER BY sort_order, created_at")
            .await?
            .take(0)?;
        Ok(banners)
    }

    /// Active banners for the home page carousel
    pub async fn find_active(&self) -> RepoResult<Vec<Banner>> {
        let banners: Vec<Banner> = self
            .base
            .db()
            .query("SELECT * FROM banner WHERE active = true ORDER BY sort_order, created_at")
            .await?
            .take(0)?;
        Ok(banners)
    }

    /// Find banner by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Banner>> {
        let banner: Option<Banner> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(banner)
    }

    /// Create a new banner
    pub async fn create(&self, data: BannerCreate) -> RepoResult<Banner> {
        let banner = Banner {
            id: None,
            image: data.image,
            title: data.title,
            description: data.description,
            active: data.active.unwrap_or(true),
            sort_order: data.sort_order.unwrap_or(0),
            created_at: now_ts(),
        };

        let created: Option<Banner> = self.base.db().create(TABLE).content(banner).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create banner".to_string()))
    }

    /// Update a banner
    pub async fn update(&self, id: &str, data: BannerUpdate) -> RepoResult<Banner> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Banner {} not found", id)));
        }

        let rid = record_id(TABLE, id);
        self.base
            .db()
            .query("UPDATE $id MERGE $data")
            .bind(("id", rid))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Banner {} not found", id)))
    }

    /// Flip the active flag, returning the updated banner
    pub async fn toggle_active(&self, id: &str) -> RepoResult<Banner> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Banner {} not found", id)))?;

        self.update(
            id,
            BannerUpdate {
                active: Some(!existing.active),
                ..Default::default()
            },
        )
        .await
    }

    /// Hard delete a banner
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Banner {} not found", id)));
        }
        let _: Option<Banner> = self.base.db().delete(record_id(TABLE, id)).await?;
        Ok(true)
    }
}
