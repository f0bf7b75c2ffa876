// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 微信公众号接口模块
///
/// 封装草稿箱提交和access_token换取两个接口调用
pub mod client;
