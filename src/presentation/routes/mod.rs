// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::settings::Settings;
use crate::engines::article_fetcher::ArticleFetcher;
use crate::infrastructure::wechat::client::WeChatClient;
use crate::presentation::errors::ServiceError;
use crate::presentation::handlers::{content_handler, wechat_handler};

/// 创建应用路由
///
/// 挂载全部API端点和 /static 静态目录，并配置宽松的CORS策略
/// 以便前端页面直接访问
///
/// # 返回值
///
/// 返回配置好的路由
pub fn build_router(
    settings: Arc<Settings>,
    fetcher: Arc<ArticleFetcher>,
    wechat: Arc<WeChatClient>,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(read_root))
        .route("/config", get(read_config))
        .route("/fetch-content", post(content_handler::fetch_content))
        .route("/process-content", post(content_handler::process_content))
        .route("/send-to-wechat-draft", post(wechat_handler::send_to_draft))
        .route("/wechat/token", post(wechat_handler::exchange_token))
        .nest_service("/static", ServeDir::new(&settings.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(fetcher))
        .layer(Extension(wechat))
        .layer(Extension(settings))
}

/// 根端点
pub async fn read_root() -> Json<serde_json::Value> {
    Json(json!({ "message": "WeChat Article Style Converter API" }))
}

/// 返回本地配置文件的原始内容
///
/// 文件缺失时返回404
pub async fn read_config(
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<Response, ServiceError> {
    let path = settings.config_file.as_str();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|_| ServiceError::NotFound(path.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
