// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 规范化用户输入的URL
///
/// 已带有 `http://`、`https://` 或 `file://` 前缀的输入原样返回；
/// 无协议但包含 `.` 的输入（看起来像域名）补全 `https://` 前缀；
/// 其余输入无法识别，返回 `None`
pub fn ensure_scheme(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("file://")
    {
        return Some(trimmed.to_string());
    }
    if trimmed.contains('.') {
        let candidate = format!("https://{trimmed}");
        if Url::parse(&candidate).is_ok() {
            return Some(candidate);
        }
    }
    None
}
