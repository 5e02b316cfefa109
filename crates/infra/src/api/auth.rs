//! Login endpoint

use std::sync::Arc;

use async_trait::async_trait;
use labelprint_core::{AuthGateway, ClassifiedError, RequestOptions};
use labelprint_domain::{LoginRequest, LoginResponse};
use tracing::debug;

use super::client::ApiClient;

/// `/auth` resource
///
/// Login is sent without a bearer credential.
#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClassifiedError> {
        debug!(username = %request.username, "requesting session token");
        self.client.post("/auth/login", request, &RequestOptions::new().skip_auth()).await
    }
}
