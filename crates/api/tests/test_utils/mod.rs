#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use axum_test::TestServer;
use scheduler_api::{ApiState, app, config::AppConfig};
use scheduler_integrations::mock::providers::{MockCalendar, MockMailer};

/// Configuration with every key left at its default
pub fn default_config() -> Arc<AppConfig> {
    Arc::new(AppConfig::from_lookup(|_| None).expect("defaults should resolve"))
}

/// Configuration with the given keys overridden
pub fn config_with(overrides: &[(&str, &str)]) -> eyre::Result<AppConfig> {
    let vars: HashMap<String, String> = overrides
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(move |key| vars.get(key).cloned())
}

/// Server wired to the fixture providers
pub fn fixture_server() -> TestServer {
    server(ApiState::with_fixtures(default_config()))
}

/// Server wired to mock providers whose expectations the test sets up
pub fn mock_server(calendar: MockCalendar, mailer: MockMailer) -> TestServer {
    server(ApiState::new(
        default_config(),
        Arc::new(calendar),
        Arc::new(mailer),
    ))
}

pub fn server(state: ApiState) -> TestServer {
    TestServer::new(app(Arc::new(state))).expect("Failed to start test server")
}
