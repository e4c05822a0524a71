//! Subscribe service

use validator::Validate;

use crate::ClientResult;
use crate::http::RestClient;
use shared::models::{SubscribeRequest, Subscriber};

pub struct SubscribeService<'a, C: RestClient> {
    client: &'a C,
}

impl<'a, C: RestClient> SubscribeService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Join the coming-soon mailing list
    pub async fn subscribe(&self, email: &str) -> ClientResult<Subscriber> {
        let request = SubscribeRequest {
            email: email.to_string(),
        };
        request.validate()?;
        self.client.post("/api/subscribe", &request).await
    }
}
