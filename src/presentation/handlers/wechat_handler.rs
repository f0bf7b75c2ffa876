// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::dto::draft_request::SendDraftRequest;
use crate::application::dto::token_request::TokenExchangeRequest;
use crate::infrastructure::wechat::client::{DraftArticle, WeChatClient};
use crate::presentation::errors::ServiceError;
use crate::utils::text_encoding::reinterpret_utf8_as_latin1;

/// 校验必填字段存在且非空白
///
/// 缺失时返回指明字段名的参数错误，任何网络调用都不会发生
fn require_field(value: Option<&str>, field: &str) -> Result<String, ServiceError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| ServiceError::InvalidInput(format!("{field} 不能为空")))
}

/// 提交文章到微信草稿箱
///
/// `access_token`、`content`、`thumb_media_id` 三者缺一不可。
/// 标题和正文经过字节重解释以兼容接口的编码转换
pub async fn send_to_draft(
    Extension(client): Extension<Arc<WeChatClient>>,
    Json(payload): Json<SendDraftRequest>,
) -> Result<Json<Value>, ServiceError> {
    let access_token = require_field(payload.access_token.as_deref(), "access_token")?;
    let content = require_field(payload.content.as_deref(), "content")?;
    let thumb_media_id = require_field(payload.thumb_media_id.as_deref(), "thumb_media_id")?;

    let article = DraftArticle {
        title: reinterpret_utf8_as_latin1(payload.title.as_deref().unwrap_or_default()),
        author: payload.author.unwrap_or_default(),
        digest: payload.digest.unwrap_or_default(),
        content: reinterpret_utf8_as_latin1(&content),
        content_source_url: payload.content_source_url.unwrap_or_default(),
        thumb_media_id: Some(thumb_media_id),
        need_open_comment: payload.need_open_comment.unwrap_or(0),
        only_fans_can_comment: payload.only_fans_can_comment.unwrap_or(0),
    };

    match client
        .add_draft(&access_token, std::slice::from_ref(&article))
        .await
    {
        Ok(data) => {
            info!("Article saved to WeChat draft box");
            Ok(Json(json!({
                "success": true,
                "message": "文章已保存到微信草稿箱",
                "data": data,
            })))
        }
        Err(err) => {
            warn!("Draft submission failed: {}", err);
            Err(err.into())
        }
    }
}

/// 用appid和secret换取access_token
///
/// 成功时原样转发微信的响应（含access_token和expires_in）
pub async fn exchange_token(
    Extension(client): Extension<Arc<WeChatClient>>,
    Json(payload): Json<TokenExchangeRequest>,
) -> Result<Json<Value>, ServiceError> {
    let appid = require_field(payload.appid.as_deref(), "appid")?;
    let secret = require_field(payload.secret.as_deref(), "secret")?;

    match client.fetch_token(&appid, &secret).await {
        Ok(data) => Ok(Json(data)),
        Err(err) => {
            warn!("Token exchange failed: {}", err);
            Err(err.into())
        }
    }
}
