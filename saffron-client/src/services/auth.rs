//! Auth service
//!
//! Admin session handling: login stores the bearer token on the transport,
//! logout drops it.

use validator::Validate;

use crate::http::RestClient;
use crate::{ClientResult, LoginRequest, LoginResponse, UserInfo};

pub struct AuthService<'a, C: RestClient> {
    client: &'a C,
}

impl<'a, C: RestClient> AuthService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Login with email and password
    ///
    /// On success the token is installed on the transport so subsequent
    /// admin calls are authenticated.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let response: LoginResponse = self.client.post("/api/auth/login", &request).await?;
        self.client.set_token(Some(response.token.clone())).await;
        Ok(response)
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.client.get("/api/auth/me").await
    }

    /// Logout and drop the local token
    pub async fn logout(&self) -> ClientResult<()> {
        let result: ClientResult<()> = self.client.post_empty("/api/auth/logout").await;
        self.client.set_token(None).await;
        result
    }
}
