pub mod api_client;
pub mod configuration;
pub mod domain;
pub mod smoke;
pub mod telemetry;

pub use api_client::{ApiClient, ApiError, LoginResponse};
pub use configuration::{Config, Credentials};
