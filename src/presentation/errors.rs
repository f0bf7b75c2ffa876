// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::engines::article_fetcher::FetchError;
use crate::infrastructure::wechat::client::WeChatError;

/// 服务错误类型
///
/// 所有失败在各操作的边缘被捕获并翻译为HTTP状态码加JSON消息，
/// 不做重试。错误体携带英文错误标识和中文描述
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 请求参数缺失或无效
    #[error("无效的请求参数: {0}")]
    InvalidInput(String),

    /// 本地文件或配置文件不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 抓取目标页面失败
    #[error("抓取页面失败: {0}")]
    FetchFailed(String),

    /// 内容解析过程中的意外失败
    #[error("内容解析失败: {0}")]
    ExtractionFailed(String),

    /// 微信接口返回了结构化错误码
    #[error("微信接口返回错误: errcode={errcode}, errmsg={errmsg}")]
    UpstreamRejected {
        /// 微信错误码
        errcode: i64,
        /// 微信错误描述
        errmsg: String,
    },

    /// 上游服务网络错误或其他非预期失败
    #[error("上游服务调用失败: {0}")]
    UpstreamFailure(String),
}

impl ServiceError {
    /// 错误的英文标识，用于响应体的error字段
    fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidInput(_) => "InvalidInput",
            ServiceError::NotFound(_) => "NotFound",
            ServiceError::FetchFailed(_) => "FetchFailed",
            ServiceError::ExtractionFailed(_) => "ExtractionFailed",
            ServiceError::UpstreamRejected { .. } => "UpstreamRejected",
            ServiceError::UpstreamFailure(_) => "UpstreamFailure",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_)
            | ServiceError::FetchFailed(_)
            | ServiceError::UpstreamRejected { .. } => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::ExtractionFailed(_) | ServiceError::UpstreamFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "success": false,
            "error": self.code(),
            "message": self.to_string(),
        });
        // Relay the upstream envelope fields so callers see the original errcode
        if let ServiceError::UpstreamRejected { errcode, errmsg } = &self {
            body["errcode"] = json!(errcode);
            body["errmsg"] = json!(errmsg);
        }
        (self.status(), Json(body)).into_response()
    }
}

impl From<FetchError> for ServiceError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidUrl(url) => ServiceError::InvalidInput(format!("无法识别的URL: {url}")),
            FetchError::FileNotFound(path) => ServiceError::NotFound(path),
            FetchError::Request(e) => ServiceError::FetchFailed(e.to_string()),
            FetchError::Io(e) => ServiceError::FetchFailed(e.to_string()),
        }
    }
}

impl From<WeChatError> for ServiceError {
    fn from(err: WeChatError) -> Self {
        match err {
            WeChatError::Rejected { errcode, errmsg } => {
                ServiceError::UpstreamRejected { errcode, errmsg }
            }
            WeChatError::Transport(e) => ServiceError::UpstreamFailure(e.to_string()),
        }
    }
}
