//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult, now_ts, record_id};
use crate::db::models::MenuItem;
use shared::models::{MenuItemCreate, MenuItemUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All items for the admin screen, including unavailable ones
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY sort_order, name")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Available items for the public menu
    pub async fn find_available(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE is_available = true ORDER BY sort_order, name")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Available items in one category
    pub async fn find_by_category(&self, category: &str) -> RepoResult<Vec<MenuItem>> {
        let category = category.to_string();
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE is_available = true AND category = $category ORDER BY sort_order, name")
            .bind(("category", category))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Featured items for the home page
    pub async fn find_featured(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE is_available = true AND featured = true ORDER BY sort_order, name")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let item: Option<MenuItem> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(item)
    }

    /// Find menu item by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<MenuItem>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items.into_iter().next())
    }

    /// Create a new menu item
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        // Check duplicate name
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Menu item '{}' already exists",
                data.name
            )));
        }

        let item = MenuItem {
            id: None,
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category,
            image: data.image,
            featured: data.featured,
            dietary: data.dietary,
            sort_order: data.sort_order.unwrap_or(0),
            is_available: true,
            created_at: now_ts(),
        };

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Update a menu item
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))?;

        // Check duplicate name if changing
        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Menu item '{}' already exists",
                new_name
            )));
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
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Hard delete a menu item
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Menu item {} not found", id)));
        }
        let _: Option<MenuItem> = self.base.db().delete(record_id(TABLE, id)).await?;
        Ok(true)
    }

    /// Count of all menu items (dashboard stats)
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM menu_item GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }
}
