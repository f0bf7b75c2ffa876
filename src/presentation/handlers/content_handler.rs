// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tracing::info;

use crate::application::dto::content_update::{ContentUpdateRequest, ProcessedContentResponse};
use crate::application::dto::fetch_request::{FetchContentRequest, FetchContentResponse};
use crate::domain::services::{extraction_service, reconcile_service};
use crate::engines::article_fetcher::ArticleFetcher;
use crate::presentation::errors::ServiceError;

/// 抓取并提取文章正文
///
/// 抓取层的失败（URL无效、文件缺失、请求失败）翻译为对应的错误响应；
/// 提取层对可解析的文档永不失败，最差情况下返回占位片段
pub async fn fetch_content(
    Extension(fetcher): Extension<Arc<ArticleFetcher>>,
    Json(payload): Json<FetchContentRequest>,
) -> Result<Json<FetchContentResponse>, ServiceError> {
    info!("Fetching article content from {}", payload.url);
    let raw_html = fetcher.fetch(&payload.url).await?;
    let extracted = extraction_service::extract(&raw_html);
    info!(
        "Extracted {} bytes of content, title: {}",
        extracted.content.len(),
        extracted.title
    );
    Ok(Json(FetchContentResponse {
        success: true,
        content: extracted.content,
        title: extracted.title,
    }))
}

/// 把用户的文本编辑合并回原始标记结构
pub async fn process_content(
    Json(payload): Json<ContentUpdateRequest>,
) -> Json<ProcessedContentResponse> {
    let merged =
        reconcile_service::reconcile(&payload.original_content, &payload.edited_content);
    Json(ProcessedContentResponse {
        success: true,
        processed_content: merged,
    })
}
