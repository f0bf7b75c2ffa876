// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 内容提取服务负责从原始HTML中定位并清理正文，
/// 结构保留服务负责把用户的文本编辑合并回原始标记结构
pub mod extraction_service;
pub mod reconcile_service;
