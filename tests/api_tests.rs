// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io::Write;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use wxconvert::config::settings::{FetchSettings, ServerSettings, Settings, WeChatSettings};
use wxconvert::engines::article_fetcher::ArticleFetcher;
use wxconvert::infrastructure::wechat::client::WeChatClient;
use wxconvert::presentation::routes::build_router;

fn make_settings(config_file: &str) -> Arc<Settings> {
    Arc::new(Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        static_dir: "static".to_string(),
        config_file: config_file.to_string(),
        fetch: FetchSettings {
            timeout_secs: 5,
            user_agent: "test-agent".to_string(),
        },
        wechat: WeChatSettings {
            // Tests in this file never reach the WeChat API
            api_base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        },
    })
}

fn make_server(settings: Arc<Settings>) -> TestServer {
    let fetcher = Arc::new(ArticleFetcher::new(&settings.fetch).unwrap());
    let wechat = Arc::new(WeChatClient::new(&settings.wechat).unwrap());
    TestServer::new(build_router(settings, fetcher, wechat)).unwrap()
}

#[tokio::test]
async fn test_root_returns_service_message() {
    let server = make_server(make_settings("config.json"));

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "WeChat Article Style Converter API");
}

#[tokio::test]
async fn test_fetch_content_rejects_unrecognizable_url() {
    let server = make_server(make_settings("config.json"));

    let response = server
        .post("/fetch-content")
        .json(&json!({ "url": "not-a-url" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "InvalidInput");
}

#[tokio::test]
async fn test_fetch_content_extracts_local_article() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<html><head><title>本地文章</title></head><body>
           <div id="js_content" style="visibility: hidden;"><p>Hi</p></div>
           </body></html>"#
    )
    .unwrap();
    let server = make_server(make_settings("config.json"));

    let response = server
        .post("/fetch-content")
        .json(&json!({ "url": format!("file://{}", file.path().display()) }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["title"], "本地文章");
    let content = body["content"].as_str().unwrap();
    assert!(content.contains("visibility: visible;"));
    assert!(!content.contains("visibility: hidden;"));
    assert!(content.contains("<p>Hi</p>"));
}

#[tokio::test]
async fn test_fetch_content_reports_missing_file() {
    let server = make_server(make_settings("config.json"));

    let response = server
        .post("/fetch-content")
        .json(&json!({ "url": "file:///no/such/article.html" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "NotFound");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("/no/such/article.html"));
}

#[tokio::test]
async fn test_process_content_replaces_text() {
    let server = make_server(make_settings("config.json"));

    let response = server
        .post("/process-content")
        .json(&json!({
            "original_content": "<p>A</p>",
            "edited_content": "<p>B</p>",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["processed_content"], "<p>B</p>");
}

#[tokio::test]
async fn test_process_content_preserves_structure() {
    let server = make_server(make_settings("config.json"));

    let response = server
        .post("/process-content")
        .json(&json!({
            "original_content": r#"<p class="intro">old text</p>"#,
            "edited_content": "<p>new text</p>",
        }))
        .await;
    let body: Value = response.json();
    let merged = body["processed_content"].as_str().unwrap();
    assert!(merged.contains(r#"class="intro""#));
    assert!(merged.contains("new text"));
}

#[tokio::test]
async fn test_config_endpoint_serves_local_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"apiBase": "http://localhost:5003"}}"#).unwrap();
    let server = make_server(make_settings(file.path().to_str().unwrap()));

    let response = server.get("/config").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["apiBase"], "http://localhost:5003");
}

#[tokio::test]
async fn test_config_endpoint_missing_file_is_404() {
    let server = make_server(make_settings("/no/such/config.json"));

    let response = server.get("/config").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_draft_submission_requires_thumb_media_id() {
    let server = make_server(make_settings("config.json"));

    let response = server
        .post("/send-to-wechat-draft")
        .json(&json!({
            "access_token": "TOKEN",
            "title": "标题",
            "content": "<p>正文</p>",
            "thumb_media_id": "   ",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "InvalidInput");
    assert!(body["message"].as_str().unwrap().contains("thumb_media_id"));
}

#[tokio::test]
async fn test_draft_submission_requires_content() {
    let server = make_server(make_settings("config.json"));

    let response = server
        .post("/send-to-wechat-draft")
        .json(&json!({
            "access_token": "TOKEN",
            "thumb_media_id": "MEDIA_ID",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("content"));
}

#[tokio::test]
async fn test_token_exchange_requires_both_fields() {
    let server = make_server(make_settings("config.json"));

    let response = server
        .post("/wechat/token")
        .json(&json!({ "appid": "wx123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("secret"));
}
