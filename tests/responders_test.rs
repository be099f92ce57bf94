//! Integration tests for the API-backed responders against a mock server.

mod common;

use common::{mock_server, test_config, test_exchange_client, test_gateway};
use dojo_bot::responders::{
    BookmarkResponder, ChatResponder, KeywordResponder, SpreadResponder, TickerResponder,
    VideoResponder,
};
use dojo_bot::{Message, Responder, ResponderError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn ask(responder: &dyn Responder, text: &str) -> Result<Message, ResponderError> {
    let message = Message::new(text);
    let args = responder
        .matches(&message)
        .unwrap_or_else(|| panic!("{} should match {:?}", responder.name(), text));
    responder.respond(&message, &args).await
}

async fn mount_json(server: &MockServer, http_method: &str, route: &str, body: serde_json::Value) {
    Mock::given(method(http_method))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn keyword_responder(server: &MockServer) -> KeywordResponder {
    let config = test_config(server);
    KeywordResponder::new(
        test_gateway(Duration::from_secs(2)),
        config.endpoints.keyword,
        "test-app-id",
    )
}

#[tokio::test]
async fn test_keyword_lists_keys() {
    let server = mock_server().await;

    Mock::given(method("GET"))
        .and(path("/keyphrase"))
        .and(query_param("appid", "test-app-id"))
        .and(query_param("sentence", "東京タワーに行った"))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"東京タワー": 100, "行った": 20})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = ask(&keyword_responder(&server), "keyword 東京タワーに行った")
        .await
        .unwrap();
    assert!(reply.body.starts_with("キーワード："));
    assert!(reply.body.contains("東京タワー"));
    assert!(reply.body.contains("行った"));
    assert!(reply.body.contains(", "));
}

#[tokio::test]
async fn test_keyword_error_key_is_remote_error() {
    let server = mock_server().await;
    mount_json(
        &server,
        "GET",
        "/keyphrase",
        json!({"Error": {"Message": "Invalid appid"}}),
    )
    .await;

    let err = ask(&keyword_responder(&server), "keyword anything").await.unwrap_err();
    match err {
        ResponderError::Remote(detail) => assert!(detail.contains("Invalid appid")),
        other => panic!("expected remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_keyword_upstream_500_is_remote_error() {
    let server = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/keyphrase"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = ask(&keyword_responder(&server), "keyword text").await.unwrap_err();
    assert!(matches!(err, ResponderError::Remote(_)));
}

fn chat_responder(server: &MockServer) -> ChatResponder {
    let config = test_config(server);
    ChatResponder::new(
        test_gateway(Duration::from_secs(2)),
        config.endpoints.chat,
        "test-chat-key",
    )
}

#[tokio::test]
async fn test_chat_returns_first_reply() {
    let server = mock_server().await;

    Mock::given(method("POST"))
        .and(path("/smalltalk"))
        .and(body_string_contains("apikey=test-chat-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "message": "ok",
            "results": [
                {"perplexity": 0.5, "reply": "こんにちは"},
                {"perplexity": 0.9, "reply": "second"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = ask(&chat_responder(&server), "talk やあ").await.unwrap();
    assert_eq!(reply.body, "こんにちは");
}

#[tokio::test]
async fn test_chat_nonzero_status_is_remote_error() {
    let server = mock_server().await;
    mount_json(
        &server,
        "POST",
        "/smalltalk",
        json!({"status": 1000, "message": "apikey is invalid"}),
    )
    .await;

    let err = ask(&chat_responder(&server), "talk hi").await.unwrap_err();
    match err {
        ResponderError::Remote(detail) => assert!(detail.contains("apikey is invalid")),
        other => panic!("expected remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_btc_bitflyer() {
    let server = mock_server().await;
    mount_json(
        &server,
        "GET",
        "/bitflyer/ticker",
        json!({"product_code": "BTC_JPY", "best_ask": 123.45, "best_bid": 120.0}),
    )
    .await;

    let responder = TickerResponder::new(test_exchange_client(&server));
    let reply = ask(&responder, "btc bitflyer").await.unwrap();
    assert_eq!(reply.body, "bitflyerのBTC_JPY価格は123.45円");
}

#[tokio::test]
async fn test_btc_coincheck_and_zaif() {
    let server = mock_server().await;
    mount_json(&server, "GET", "/coincheck/ticker", json!({"last": 1, "ask": 5000000.0})).await;
    mount_json(&server, "GET", "/zaif/last_price/btc_jpy", json!({"last_price": 4999000.5})).await;

    let responder = TickerResponder::new(test_exchange_client(&server));

    let reply = ask(&responder, "btc coincheck").await.unwrap();
    assert_eq!(reply.body, "coincheckのBTC価格は5000000円");

    let reply = ask(&responder, "btc zaif").await.unwrap();
    assert_eq!(reply.body, "zaifのBTC価格は4999000.5円");
}

#[tokio::test]
async fn test_btc_unknown_exchange_makes_no_request() {
    let server = mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let responder = TickerResponder::new(test_exchange_client(&server));
    let err = ask(&responder, "btc mtgox").await.unwrap_err();
    assert!(matches!(err, ResponderError::UnsupportedExchange(ref name) if name == "mtgox"));
}

#[tokio::test]
async fn test_btc_missing_field_is_decode_error() {
    let server = mock_server().await;
    mount_json(&server, "GET", "/bitflyer/ticker", json!({"product_code": "BTC_JPY"})).await;

    let responder = TickerResponder::new(test_exchange_client(&server));
    let err = ask(&responder, "btc bitflyer").await.unwrap_err();
    assert!(matches!(err, ResponderError::Decode(_)));
}

#[tokio::test]
async fn test_spread_difference() {
    let server = mock_server().await;
    mount_json(
        &server,
        "GET",
        "/bitflyer/ticker",
        json!({"product_code": "BTC_JPY", "best_ask": 5001500.0}),
    )
    .await;
    mount_json(&server, "GET", "/zaif/last_price/btc_jpy", json!({"last_price": 5000000.0})).await;

    let responder = SpreadResponder::new(test_exchange_client(&server));

    let reply = ask(&responder, "spread bitflyer zaif").await.unwrap();
    assert_eq!(reply.body, "bitflyer, zaifのBTC価格差は1500円");

    let reply = ask(&responder, "spread zaif bitflyer").await.unwrap();
    assert_eq!(reply.body, "zaif, bitflyerのBTC価格差は-1500円");
}

#[tokio::test]
async fn test_spread_propagates_failed_leg() {
    let server = mock_server().await;
    mount_json(&server, "GET", "/coincheck/ticker", json!({"ask": 5000000.0})).await;
    Mock::given(method("GET"))
        .and(path("/zaif/last_price/btc_jpy"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let responder = SpreadResponder::new(test_exchange_client(&server));
    let err = ask(&responder, "spread coincheck zaif").await.unwrap_err();
    assert!(matches!(err, ResponderError::Remote(_)));
}

#[tokio::test]
async fn test_spread_requires_two_arguments() {
    let server = mock_server().await;
    let responder = SpreadResponder::new(test_exchange_client(&server));

    assert!(responder.matches(&Message::new("spread bitflyer")).is_none());
    assert!(responder.matches(&Message::new("spread bitflyer zaif coincheck")).is_none());
}

fn video_responder(server: &MockServer) -> VideoResponder {
    let config = test_config(server);
    VideoResponder::new(
        test_gateway(Duration::from_secs(2)),
        config.endpoints.youtube,
        "test-youtube-key",
    )
}

#[tokio::test]
async fn test_youtube_caps_results() {
    let server = mock_server().await;

    Mock::given(method("GET"))
        .and(path("/youtube/search"))
        .and(query_param("key", "test-youtube-key"))
        .and(query_param("q", "rust lang"))
        .and(query_param("part", "id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "aaa"}},
                {"id": {"kind": "youtube#channel", "channelId": "chan"}},
                {"id": {"kind": "youtube#video", "videoId": "bbb"}},
                {"id": {"kind": "youtube#video", "videoId": "ccc"}},
                {"id": {"kind": "youtube#video", "videoId": "ddd"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = ask(&video_responder(&server), "youtube rust lang").await.unwrap();
    assert!(reply.body.contains("https://www.youtube.com/embed/aaa"));
    assert!(reply.body.contains("watch?v=bbb"));
    assert!(reply.body.contains("watch?v=ccc"));
    assert!(!reply.body.contains("ddd"));
    assert!(!reply.body.contains("chan"));
    assert_eq!(reply.body.matches("<br>").count(), 3);
}

#[tokio::test]
async fn test_youtube_no_results_is_empty_reply() {
    let server = mock_server().await;
    mount_json(&server, "GET", "/youtube/search", json!({"items": []})).await;

    let reply = ask(&video_responder(&server), "youtube nothing").await.unwrap();
    assert!(reply.is_empty());
}

fn bookmark_responder(server: &MockServer) -> BookmarkResponder {
    let config = test_config(server);
    BookmarkResponder::new(test_gateway(Duration::from_secs(2)), config.endpoints.bookmark)
}

#[tokio::test]
async fn test_hatena_first_comment() {
    let server = mock_server().await;

    Mock::given(method("GET"))
        .and(path("/entry/jsonlite/"))
        .and(query_param("url", "https://example.com/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Example",
            "bookmarks": [
                {"user": "a", "comment": ""},
                {"user": "b", "comment": "good read"},
                {"user": "c", "comment": "meh"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = ask(&bookmark_responder(&server), "hatena https://example.com/")
        .await
        .unwrap();
    assert_eq!(reply.body, "good read");
}

#[tokio::test]
async fn test_hatena_null_is_empty_reply() {
    let server = mock_server().await;
    Mock::given(method("GET"))
        .and(path("/entry/jsonlite/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let reply = ask(&bookmark_responder(&server), "hatena https://nobody.example/")
        .await
        .unwrap();
    assert!(reply.is_empty());
}
