// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use wxconvert::config::settings::Settings;
use wxconvert::engines::article_fetcher::ArticleFetcher;
use wxconvert::infrastructure::wechat::client::WeChatClient;
use wxconvert::presentation::routes;
use wxconvert::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting wxconvert...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize components
    let fetcher = Arc::new(ArticleFetcher::new(&settings.fetch)?);
    let wechat = Arc::new(WeChatClient::new(&settings.wechat)?);

    // 4. Start HTTP server
    let app = routes::build_router(settings.clone(), fetcher, wechat);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
