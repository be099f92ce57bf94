//! Common test utilities for integration tests.

#![allow(dead_code)]

use dojo_bot::infrastructure::config::{CommandKind, Config};
use dojo_bot::infrastructure::exchange::{ExchangeClient, ExchangeEndpoints};
use dojo_bot::infrastructure::gateway::ApiGateway;
use std::sync::Arc;
use std::sync::Once;
use std::time::Duration;
use wiremock::MockServer;

static INIT: Once = Once::new();

pub fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Start a mock API server.
pub async fn mock_server() -> MockServer {
    ensure_init();
    MockServer::start().await
}

/// Gateway with a short timeout for tests.
pub fn test_gateway(timeout: Duration) -> Arc<ApiGateway> {
    Arc::new(ApiGateway::new(timeout, "dojo-bot-test").unwrap())
}

/// Ticker client pointing at the mock server.
pub fn test_exchange_client(server: &MockServer) -> Arc<ExchangeClient> {
    let config = test_config(server);
    Arc::new(ExchangeClient::new(
        test_gateway(Duration::from_secs(2)),
        ExchangeEndpoints::from(&config.endpoints),
    ))
}

/// Config with every command enabled and every endpoint on the mock server.
pub fn test_config(server: &MockServer) -> Config {
    let base = server.uri();
    let mut config = Config::default();
    config.http.timeout_seconds = 2;
    config.credentials.keyword_app_id = Some("test-app-id".to_string());
    config.credentials.chat_api_key = Some("test-chat-key".to_string());
    config.credentials.youtube_api_key = Some("test-youtube-key".to_string());
    config.endpoints.keyword = format!("{}/keyphrase", base);
    config.endpoints.chat = format!("{}/smalltalk", base);
    config.endpoints.youtube = format!("{}/youtube/search", base);
    config.endpoints.bookmark = format!("{}/entry/jsonlite/", base);
    config.endpoints.bitflyer = format!("{}/bitflyer/ticker", base);
    config.endpoints.coincheck = format!("{}/coincheck/ticker", base);
    config.endpoints.zaif = format!("{}/zaif/last_price/btc_jpy", base);
    config.commands = CommandKind::ALL.to_vec();
    config
}
