//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Order;
use serde::Serialize;
use shared::models::OrderStatus;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All orders for the admin screen, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(order)
    }

    /// Persist a fully built order (totals already computed by the handler)
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Persist a status change (legality is checked by the handler)
    pub async fn set_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        #[derive(Serialize)]
        struct StatusUpdate {
            status: OrderStatus,
        }

        let rid = record_id(TABLE, id);
        self.base
            .db()
            .query("UPDATE $id MERGE $data")
            .bind(("id", rid))
            .bind(("data", StatusUpdate { status }))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Dashboard stats: total order count and completed revenue
    pub async fn dashboard_totals(&self) -> RepoResult<(i64, f64)> {
        let mut result = self
            .base
            .db()
            .query(
                "LET $all = SELECT status, total FROM order; \
                 LET $completed = SELECT * FROM $all WHERE status = 'completed'; \
                 RETURN { orders: count($all), revenue: math::sum($completed.total) OR 0 }",
            )
            .await?;

        #[derive(serde::Deserialize)]
        struct Totals {
            orders: i64,
            revenue: f64,
        }

        // LET statements occupy result slots; the RETURN is index 2
        let totals: Option<Totals> = result.take(2)?;
        let totals = totals
            .ok_or_else(|| RepoError::Database("Failed to compute order totals".to_string()))?;
        Ok((totals.orders, totals.revenue))
    }
}
