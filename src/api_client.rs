use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::configuration::Credentials;

const LOGIN: &str = "/api/auth/login";
const PENDING_USERS: &str = "/api/users/pending";

#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{endpoint} returned status {status}")]
    Rejected {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Successful response of the login endpoint.
///
/// The service returns more fields than these; everything beyond the token
/// and the role is ignored.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: Secret<String>,
    pub role: String,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: std::time::Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the HTTP client");
        Self {
            http_client,
            base_url,
        }
    }

    #[tracing::instrument(name = "Logging in", skip_all, fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = self.base_url.join(LOGIN).unwrap();
        let request_body = LoginRequest {
            email: credentials.email.as_ref().to_owned(),
            password: credentials.password.expose_secret().to_owned(),
        };
        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await?;
        read_json(LOGIN, response).await
    }

    #[tracing::instrument(name = "Fetching pending users", skip_all)]
    pub async fn pending_users(
        &self,
        token: &Secret<String>,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        let url = self.base_url.join(PENDING_USERS).unwrap();
        let response = self
            .http_client
            .get(url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        read_json(PENDING_USERS, response).await
    }
}

async fn read_json<T>(endpoint: &'static str, response: reqwest::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Rejected {
            endpoint,
            status,
            body,
        });
    }
    response.json().await.map_err(ApiError::from)
}

#[derive(Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}
