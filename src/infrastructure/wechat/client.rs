// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::config::settings::WeChatSettings;

/// 微信接口错误类型
///
/// 区分两种失败：接口在200响应内返回了非零errcode（业务拒绝），
/// 以及网络层面的传输失败。调用方必须分别处理
#[derive(Error, Debug)]
pub enum WeChatError {
    /// 接口返回错误信封
    #[error("微信接口返回错误: errcode={errcode}, errmsg={errmsg}")]
    Rejected {
        /// 微信错误码
        errcode: i64,
        /// 微信错误描述
        errmsg: String,
    },
    /// 请求微信接口失败
    #[error("请求微信接口失败: {0}")]
    Transport(#[from] reqwest::Error),
}

/// 草稿箱文章载荷
///
/// 对应 `draft/add` 接口单篇文章的字段。`thumb_media_id`
/// 仅在为空时省略，其余情况必须携带
#[derive(Debug, Clone, Serialize)]
pub struct DraftArticle {
    pub title: String,
    pub author: String,
    pub digest: String,
    pub content: String,
    pub content_source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_media_id: Option<String>,
    pub need_open_comment: u8,
    pub only_fans_can_comment: u8,
}

/// 微信公众号接口客户端
///
/// 每个调用都是一次性的请求，固定超时，不做重试
pub struct WeChatClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeChatClient {
    /// 创建新的接口客户端
    pub fn new(settings: &WeChatSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 提交文章到草稿箱
    ///
    /// # 返回值
    ///
    /// * `Ok(Value)` - 接口的成功响应（含media_id）
    /// * `Err(WeChatError)` - 接口拒绝或传输失败
    pub async fn add_draft(
        &self,
        access_token: &str,
        articles: &[DraftArticle],
    ) -> Result<Value, WeChatError> {
        let url = format!("{}/cgi-bin/draft/add", self.base_url);
        debug!("Submitting {} article(s) to WeChat draft box", articles.len());
        let response = self
            .client
            .post(&url)
            .query(&[("access_token", access_token)])
            .json(&json!({ "articles": articles }))
            .send()
            .await?;
        let envelope: Value = response.json().await?;
        Self::check_envelope(envelope)
    }

    /// 换取接口调用凭证access_token
    ///
    /// 成功响应原样返回（含 `access_token` 和 `expires_in`）
    pub async fn fetch_token(&self, appid: &str, secret: &str) -> Result<Value, WeChatError> {
        let url = format!("{}/cgi-bin/token", self.base_url);
        debug!("Exchanging credentials for access token");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("grant_type", "client_credential"),
                ("appid", appid),
                ("secret", secret),
            ])
            .send()
            .await?;
        let envelope: Value = response.json().await?;
        Self::check_envelope(envelope)
    }

    /// 解释微信的错误信封约定
    ///
    /// errcode为0或缺失视为成功，非零则携带errcode/errmsg返回拒绝错误
    fn check_envelope(envelope: Value) -> Result<Value, WeChatError> {
        match envelope.get("errcode").and_then(Value::as_i64) {
            None | Some(0) => Ok(envelope),
            Some(errcode) => {
                let errmsg = envelope
                    .get("errmsg")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string();
                Err(WeChatError::Rejected { errcode, errmsg })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_zero_errcode_is_success() {
        let envelope = json!({"errcode": 0, "errmsg": "ok", "media_id": "MEDIA_ID"});
        let value = WeChatClient::check_envelope(envelope).unwrap();
        assert_eq!(value["media_id"], "MEDIA_ID");
    }

    #[test]
    fn test_envelope_without_errcode_is_success() {
        let envelope = json!({"access_token": "TOKEN", "expires_in": 7200});
        let value = WeChatClient::check_envelope(envelope).unwrap();
        assert_eq!(value["access_token"], "TOKEN");
    }

    #[test]
    fn test_envelope_with_nonzero_errcode_is_rejected() {
        let envelope = json!({"errcode": 40001, "errmsg": "invalid credential"});
        let err = WeChatClient::check_envelope(envelope).unwrap_err();
        match err {
            WeChatError::Rejected { errcode, errmsg } => {
                assert_eq!(errcode, 40001);
                assert_eq!(errmsg, "invalid credential");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_thumb_media_id_is_omitted_from_payload() {
        let article = DraftArticle {
            title: "t".to_string(),
            author: String::new(),
            digest: String::new(),
            content: "<p>c</p>".to_string(),
            content_source_url: String::new(),
            thumb_media_id: None,
            need_open_comment: 0,
            only_fans_can_comment: 0,
        };
        let serialized = serde_json::to_value(&article).unwrap();
        assert!(serialized.get("thumb_media_id").is_none());
    }
}
