// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 抓取文章请求数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct FetchContentRequest {
    /// 文章URL，可省略协议，也可为 `file://` 本地引用
    pub url: String,
}

/// 抓取文章响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct FetchContentResponse {
    pub success: bool,
    /// 提取并清理后的正文HTML片段
    pub content: String,
    /// 文档标题，缺失时为 "Untitled"
    pub title: String,
}
