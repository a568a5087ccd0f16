
use once_cell::sync::Lazy;
use reqwest::Url;
use secrecy::Secret;
use serde_json::json;
use sparc_smoke::{telemetry, ApiClient, Credentials};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

static TELEMETRY: Lazy<Result<(), String>> = Lazy::new(|| {
    let (name, filter) = ("test", "debug");
    if std::env::var("TEST_LOG")
        .unwrap_or_default()
        .parse::<bool>()
        .unwrap_or_default()
    {
        telemetry::init(name, filter, std::io::stdout)
    } else {
        telemetry::init(name, filter, std::io::sink)
    }
});

struct TestApi {
    server: MockServer,
    client: ApiClient,
}

async fn spawn_api() -> TestApi {
    Lazy::force(&TELEMETRY);
    let server = MockServer::start().await;
    let client = ApiClient::new(
        Url::parse(&server.uri()).expect("Failed to parse the mock server url"),
        std::time::Duration::from_millis(500),
    );
    TestApi { server, client }
}

impl TestApi {
    async fn mock_login(&self, response: ResponseTemplate) {
        Mock::given(path("/api/auth/login"))
            .and(method("POST"))
            .respond_with(response)
            .mount(&self.server)
            .await
    }

    async fn mock_pending_users(&self, response: ResponseTemplate, expect: Option<u64>) {
        let builder = Mock::given(path("/api/users/pending"))
            .and(method("GET"))
            .respond_with(response);
        if let Some(requests) = expect {
            builder.expect(requests)
        } else {
            builder
        }
        .mount(&self.server)
        .await
    }
}

fn credentials() -> Credentials {
    Credentials {
        email: "admin@sparc.com".to_string().try_into().unwrap(),
        password: Secret::new("admin123".to_string()),
    }
}

fn login_success() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "token": "issued-token",
        "role": "admin",
    }))
}
