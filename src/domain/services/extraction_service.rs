// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// 微信文章正文所在的容器
static CONTENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#js_content").unwrap());
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

/// 未能提取到任何内容时返回的占位片段
const PLACEHOLDER: &str = "<p>Content could not be extracted properly.</p>";

/// 标题缺失时的默认值
const DEFAULT_TITLE: &str = "Untitled";

/// 微信文章常见的反爬/渐进展示内联样式及其可见替换
const HIDDEN_STYLE_REWRITES: [(&str, &str); 3] = [
    ("visibility: hidden;", "visibility: visible;"),
    ("opacity: 0;", "opacity: 1;"),
    ("display: none;", "display: block;"),
];

/// 提取结果
#[derive(Debug)]
pub struct ExtractedContent {
    /// 清理后的正文HTML片段
    pub content: String,
    /// 文档标题
    pub title: String,
}

/// 从原始HTML中提取文章正文
///
/// 容器定位顺序：`div#js_content` → `body` → 整个文档根元素。
/// 均无法得到内容时返回固定占位片段而不报错。
/// 格式错误但可解析的文档不会导致失败
pub fn extract(html: &str) -> ExtractedContent {
    if html.trim().is_empty() {
        debug!("Empty document, falling back to placeholder fragment");
        return ExtractedContent {
            content: PLACEHOLDER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        };
    }

    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let content = match select_container(&document) {
        Some(container) => unhide_styles(&container.html()),
        None => {
            debug!("No content container found, falling back to placeholder fragment");
            PLACEHOLDER.to_string()
        }
    };

    ExtractedContent { content, title }
}

/// 定位正文容器
fn select_container(document: &Html) -> Option<ElementRef<'_>> {
    if let Some(container) = document.select(&CONTENT_SELECTOR).next() {
        return Some(container);
    }
    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        return Some(body);
    }
    // Malformed tree without a body, serialize whatever root element exists
    document.tree.root().children().find_map(ElementRef::wrap)
}

/// 把隐藏内容的内联样式改写为可见样式
///
/// 精确子串替换，不做CSS解析。替换后目标子串不再匹配，因此重复调用幂等
pub fn unhide_styles(html: &str) -> String {
    let mut result = html.to_string();
    for (hidden, visible) in HIDDEN_STYLE_REWRITES {
        result = result.replace(hidden, visible);
    }
    result
}
