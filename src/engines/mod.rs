// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 引擎模块
///
/// 实现文章原始HTML的获取，支持HTTP抓取和本地文件读取
pub mod article_fetcher;
