// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 将字符串的UTF-8字节逐个重解释为Latin-1码点
///
/// 微信草稿箱接口对请求体做了一次多余的编码转换，直接发送UTF-8中文
/// 会在草稿中出现乱码。提交前把 `title` 和 `content` 的每个UTF-8字节
/// 映射为对应的U+0000..U+00FF字符，经过接口的转换后恰好还原为原文。
/// ASCII文本不受影响
pub fn reinterpret_utf8_as_latin1(text: &str) -> String {
    text.bytes().map(char::from).collect()
}
