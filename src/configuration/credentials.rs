use secrecy::Secret;
use serde::Deserialize;

use crate::domain::AdminEmail;

/// The admin account the smoke test logs in as.
#[derive(Clone, Debug, Deserialize)]
pub struct Credentials {
    pub email: AdminEmail,
    pub password: Secret<String>,
}
