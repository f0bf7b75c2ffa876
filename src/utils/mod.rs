// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括遥测监控、URL规范化和文本编码处理
pub mod telemetry;
pub mod text_encoding;
pub mod url_utils;
