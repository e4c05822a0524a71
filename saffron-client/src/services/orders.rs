//! Order service

use validator::Validate;

use crate::ClientResult;
use crate::http::RestClient;
use shared::models::{Order, OrderStatus, PlaceOrderRequest, UpdateOrderStatusRequest};

pub struct OrderService<'a, C: RestClient> {
    client: &'a C,
}

impl<'a, C: RestClient> OrderService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Place an order (public); totals come back computed by the server
    pub async fn place(&self, order: &PlaceOrderRequest) -> ClientResult<Order> {
        order.validate()?;
        self.client.post("/api/orders/place", order).await
    }

    /// Track an order by id (public)
    pub async fn get(&self, order_id: &str) -> ClientResult<Order> {
        self.client.get(&format!("/api/orders/{order_id}")).await
    }

    /// All orders, newest first (admin)
    pub async fn list(&self) -> ClientResult<Vec<Order>> {
        self.client.get("/api/orders").await
    }

    /// Change an order's status (admin)
    pub async fn update_status(&self, order_id: &str, status: OrderStatus) -> ClientResult<Order> {
        let request = UpdateOrderStatusRequest {
            order_id: order_id.to_string(),
            status,
        };
        self.client.post("/api/orders/update-status", &request).await
    }
}
