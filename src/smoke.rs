use crate::{
    api_client::{ApiClient, ApiError},
    configuration::Credentials,
};

/// Outcome of a successful smoke run.
#[derive(Debug)]
pub struct SmokeReport {
    pub role: String,
    pub pending_users: Vec<serde_json::Value>,
}

/// Runs the two checks in sequence: login, then the protected
/// pending-users endpoint with the freshly issued token.
#[tracing::instrument(name = "Running smoke test", skip_all)]
pub async fn run(client: &ApiClient, credentials: &Credentials) -> Result<SmokeReport, ApiError> {
    let login = client.login(credentials).await?;
    tracing::info!(role = %login.role, "Login successful, token received");

    let pending_users = client.pending_users(&login.token).await?;
    tracing::info!(count = pending_users.len(), "Pending users endpoint responded");

    Ok(SmokeReport {
        role: login.role,
        pending_users,
    })
}

pub fn report_failure(error: &ApiError) {
    match error {
        ApiError::Rejected {
            endpoint,
            status,
            body,
        } => {
            tracing::error!(%status, %body, "Request to {} was rejected", endpoint);
        }
        ApiError::Transport(source) => match source.status() {
            Some(status) => tracing::error!(%status, "Request failed: {}", source),
            None => tracing::error!("Request failed: {}", source),
        },
    }
}
