// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::config::settings::FetchSettings;
use crate::utils::url_utils;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 无法识别的URL
    #[error("无法识别的URL格式: {0}")]
    InvalidUrl(String),
    /// 本地文件不存在
    #[error("本地文件不存在: {0}")]
    FileNotFound(String),
    /// HTTP请求失败
    #[error("请求目标页面失败: {0}")]
    Request(#[from] reqwest::Error),
    /// 本地文件读取失败
    #[error("读取本地文件失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 文章抓取引擎
///
/// 基于reqwest实现的HTTP抓取，并支持 `file://` 引用以便本地调试。
/// 每次请求为一次性调用，超时后直接失败，不做重试
pub struct ArticleFetcher {
    client: reqwest::Client,
}

impl ArticleFetcher {
    /// 创建新的抓取引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取配置（超时时间和User-Agent）
    pub fn new(settings: &FetchSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// 获取文章原始HTML
    ///
    /// 先对输入URL做规范化（无协议的域名补全 `https://`），
    /// `file://` 引用读取本地文件，其余走HTTP GET
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 原始HTML文本
    /// * `Err(FetchError)` - URL无法识别、文件缺失或请求失败
    pub async fn fetch(&self, raw_url: &str) -> Result<String, FetchError> {
        let url = url_utils::ensure_scheme(raw_url)
            .ok_or_else(|| FetchError::InvalidUrl(raw_url.to_string()))?;

        if let Some(path) = url.strip_prefix("file://") {
            // Both file://path and file:///abs/path keep everything after the prefix
            debug!("Reading local article file: {}", path);
            if !Path::new(path).exists() {
                return Err(FetchError::FileNotFound(path.to_string()));
            }
            Ok(tokio::fs::read_to_string(path).await?)
        } else {
            debug!("Fetching article over HTTP: {}", url);
            let response = self.client.get(&url).send().await?.error_for_status()?;
            Ok(response.text().await?)
        }
    }
}
