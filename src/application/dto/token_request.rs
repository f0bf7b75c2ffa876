// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// access_token换取请求数据传输对象
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TokenExchangeRequest {
    /// 公众号appid
    pub appid: Option<String>,
    /// 公众号secret
    pub secret: Option<String>,
}
