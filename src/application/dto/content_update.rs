// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 内容编辑对数据传输对象
///
/// 每次调用相互独立，不保存任何标识
#[derive(Debug, Deserialize, Serialize)]
pub struct ContentUpdateRequest {
    /// 抓取得到的原始HTML片段
    pub original_content: String,
    /// 用户编辑后的HTML片段
    pub edited_content: String,
}

/// 结构保留处理响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct ProcessedContentResponse {
    pub success: bool,
    /// 合并后的HTML片段
    pub processed_content: String,
}
