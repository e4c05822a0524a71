//! Banner service

use validator::Validate;

use crate::ClientResult;
use crate::http::RestClient;
use shared::models::{Banner, BannerCreate, BannerUpdate};

pub struct BannerService<'a, C: RestClient> {
    client: &'a C,
}

impl<'a, C: RestClient> BannerService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// All banners (admin screen)
    pub async fn list(&self) -> ClientResult<Vec<Banner>> {
        self.client.get("/api/banners").await
    }

    /// Active banners for the home page carousel
    pub async fn carousel(&self) -> ClientResult<Vec<Banner>> {
        self.client.get("/api/banners?active=true").await
    }

    /// Create a banner (admin)
    pub async fn create(&self, banner: &BannerCreate) -> ClientResult<Banner> {
        banner.validate()?;
        self.client.post("/api/banners", banner).await
    }

    /// Update a banner (admin)
    pub async fn update(&self, id: &str, update: &BannerUpdate) -> ClientResult<Banner> {
        update.validate()?;
        self.client.put(&format!("/api/banners/{id}"), update).await
    }

    /// Flip a banner's active flag (admin)
    pub async fn toggle(&self, id: &str) -> ClientResult<Banner> {
        self.client
            .post_empty(&format!("/api/banners/{id}/toggle"))
            .await
    }

    /// Delete a banner (admin)
    pub async fn delete(&self, id: &str) -> ClientResult<bool> {
        self.client.delete(&format!("/api/banners/{id}")).await
    }
}
