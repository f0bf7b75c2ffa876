// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义各API端点的请求和响应结构
/// 所有实体均为单次请求内创建、响应后丢弃的临时对象
pub mod content_update;
pub mod draft_request;
pub mod fetch_request;
pub mod token_request;
