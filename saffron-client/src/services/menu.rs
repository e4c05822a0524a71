//! Menu service

use validator::Validate;

use crate::ClientResult;
use crate::http::RestClient;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

pub struct MenuService<'a, C: RestClient> {
    client: &'a C,
}

impl<'a, C: RestClient> MenuService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Public menu, optionally narrowed to one category slug
    pub async fn list(&self, category: Option<&str>) -> ClientResult<Vec<MenuItem>> {
        match category {
            Some(category) if category != "all" => {
                self.client
                    .get(&format!("/api/menu?category={category}"))
                    .await
            }
            _ => self.client.get("/api/menu").await,
        }
    }

    /// Featured items for the home page
    pub async fn featured(&self) -> ClientResult<Vec<MenuItem>> {
        self.client.get("/api/menu/featured").await
    }

    /// Full menu for the admin screen, including unavailable items
    pub async fn list_all(&self) -> ClientResult<Vec<MenuItem>> {
        self.client.get("/api/menu/all").await
    }

    /// Create a menu item (admin)
    pub async fn create(&self, item: &MenuItemCreate) -> ClientResult<MenuItem> {
        item.validate()?;
        self.client.post("/api/menu", item).await
    }

    /// Update a menu item (admin)
    pub async fn update(&self, id: &str, update: &MenuItemUpdate) -> ClientResult<MenuItem> {
        update.validate()?;
        self.client.put(&format!("/api/menu/{id}"), update).await
    }

    /// Delete a menu item (admin)
    pub async fn delete(&self, id: &str) -> ClientResult<bool> {
        self.client.delete(&format!("/api/menu/{id}")).await
    }
}
