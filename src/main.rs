use dotenvy::dotenv;
use sparc_smoke::{smoke, telemetry, ApiClient, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    telemetry::init("sparc-smoke", "info", std::io::stdout)
        .expect("Failed to initialize telemetry");
    let config = Config::init().expect("Failed to initialize config");

    let client = ApiClient::new(config.api.base_url.clone().into(), config.api.timeout());
    match smoke::run(&client, &config.credentials).await {
        Ok(report) => {
            tracing::info!(
                role = %report.role,
                count = report.pending_users.len(),
                "Smoke test passed"
            );
            println!("{}", serde_json::to_string_pretty(&report.pending_users)?);
        }
        Err(error) => smoke::report_failure(&error),
    }
    Ok(())
}
