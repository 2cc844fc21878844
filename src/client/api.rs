use super::ClientError;
use crate::handlers::{LoginResponse, MessageResponse, StatusResponse};
use crate::services::{auth_service::LoginRequest, validation::RegisterRequest};
use reqwest::Response;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Third-party sign-in providers. Their redirect targets are not served by
/// this backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Apple,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Apple => "apple",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<Vec<String>>,
}

/// Thin JSON client for the `/api/auth` endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn status(&self) -> Result<bool, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/auth/status", self.base_url))
            .send()
            .await?;
        let status: StatusResponse = decode(response).await?;
        Ok(status.registered)
    }

    /// Returns the server's confirmation message.
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/auth/register", self.base_url))
            .json(request)
            .send()
            .await?;
        let body: MessageResponse = decode(response).await?;
        Ok(body.message)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub fn oauth_url(&self, provider: OAuthProvider) -> String {
        format!("{}/api/auth/{}", self.base_url, provider.as_str())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    let message = body
        .message
        .or_else(|| body.errors.filter(|e| !e.is_empty()).map(|e| e.join("\n")));
    debug!(status = status.as_u16(), ?message, "API request rejected");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
