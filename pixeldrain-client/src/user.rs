//! User and session operations
//!
//! Login, API-key listing and key revocation for the `/user` endpoints.

use reqwest::multipart::Form;

use crate::error::PixeldrainError;
use crate::transport::{ApiRequest, Transport};
use crate::types::{ApiKeySession, StatusMessage, TokenResponse};
use crate::validate::require;

/// `app_name` sent when [`UserClient::request_new_token`] gets none.
pub const DEFAULT_APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Client for the `/user` endpoints.
#[derive(Debug, Clone)]
pub struct UserClient {
    transport: Transport,
}

impl UserClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Trade a username and password for a fresh API token.
    ///
    /// `app_name` labels the session in the account's key list and
    /// defaults to [`DEFAULT_APP_NAME`]. The returned token is not stored
    /// anywhere; build a new client with it to use it.
    pub async fn request_new_token(
        &self,
        username: &str,
        password: &str,
        app_name: Option<&str>,
    ) -> Result<String, PixeldrainError> {
        require(username, "Please insert a username.")?;
        require(password, "Please insert a password.")?;
        let form = Form::new()
            .text("username", username.to_string())
            .text("password", password.to_string())
            .text("app_name", app_name.unwrap_or(DEFAULT_APP_NAME).to_string());
        let response: TokenResponse = self
            .transport
            .send_json(ApiRequest::post("/user/login").multipart(form))
            .await?;
        Ok(response.auth_key)
    }

    /// All API-key sessions of the authenticated user, in server order.
    pub async fn api_keys(&self) -> Result<Vec<ApiKeySession>, PixeldrainError> {
        self.transport
            .send_json(ApiRequest::get("/user/session").authenticated())
            .await
    }

    /// Revoke an API key.
    ///
    /// The request authenticates as the key being revoked, not as this
    /// client's credential, so any key the caller holds can be revoked.
    pub async fn revoke_api_key(&self, api_key: &str) -> Result<StatusMessage, PixeldrainError> {
        require(api_key, "Please insert an API key.")?;
        self.transport
            .send_json(ApiRequest::delete("/user/session").auth_key(api_key))
            .await
    }
}
