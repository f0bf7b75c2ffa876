// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 草稿箱提交请求数据传输对象
///
/// `access_token`、`content` 和 `thumb_media_id` 为必填项，
/// 使用Option承接以便在处理器中返回指明缺失字段的400错误
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SendDraftRequest {
    /// 接口调用凭证
    pub access_token: Option<String>,
    /// 文章标题
    pub title: Option<String>,
    /// 作者
    pub author: Option<String>,
    /// 摘要
    pub digest: Option<String>,
    /// 文章正文HTML
    pub content: Option<String>,
    /// 原文链接
    pub content_source_url: Option<String>,
    /// 封面图素材ID，草稿箱接口要求必填
    pub thumb_media_id: Option<String>,
    /// 是否打开评论（0/1）
    pub need_open_comment: Option<u8>,
    /// 是否仅粉丝可评论（0/1）
    pub only_fans_can_comment: Option<u8>,
}
