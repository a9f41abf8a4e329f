//! HTTP adapter for the auth endpoints
//!
//! Login and signup persist the returned session to the store; logout clears
//! the store even when the backend call fails, matching the intent that a
//! user who logs out is logged out locally no matter what.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use core_kernel::TransportError;
use domain_session::{AuthPort, Credentials, Session, SignupRequest, User};

use crate::client::{store_error, ApiClient};

/// Token payload returned by login and signup
#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: String,
    #[allow(dead_code)]
    token_type: String,
    user: User,
}

/// `AuthPort` over the backend `/auth` endpoints
#[derive(Clone)]
pub struct HttpAuthClient {
    api: ApiClient,
}

impl HttpAuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn persist(&self, response: AuthResponse) -> Result<Session, TransportError> {
        self.api
            .session()
            .set_session(&response.user, &response.access_token)
            .map_err(store_error)?;
        Ok(Session::new(response.user, response.access_token))
    }
}

#[async_trait]
impl AuthPort for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session, TransportError> {
        debug!(email = %credentials.email, "POST /auth/login-json");
        let response: AuthResponse = self
            .api
            .send_json(self.api.post("/auth/login-json").json(credentials))
            .await?;
        info!(user = %response.user.email, "logged in");
        self.persist(response)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Session, TransportError> {
        debug!(email = %request.email, "POST /auth/signup");
        let response: AuthResponse = self
            .api
            .send_json(self.api.post("/auth/signup").json(request))
            .await?;
        info!(user = %response.user.email, "account created");
        self.persist(response)
    }

    async fn logout(&self) -> Result<(), TransportError> {
        let result = match self.api.authorize(self.api.post("/auth/logout")) {
            Ok(builder) => self.api.send_no_content(builder).await,
            Err(err) => Err(err),
        };
        // local logout happens regardless of the backend's answer
        self.api.session().clear().map_err(store_error)?;
        info!("logged out");
        result
    }

    async fn current_user(&self) -> Result<User, TransportError> {
        let builder = self.api.authorize_required(self.api.get("/auth/me"))?;
        let user: User = self.api.send_json(builder).await?;
        self.api.session().update_user(&user).map_err(store_error)?;
        Ok(user)
    }
}
