// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Node};

/// HTML中无闭合标签的空元素
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// 把用户编辑后的文本合并回原始标记结构
///
/// 对两个HTML片段的同级元素按位置对齐：标签名相同的元素视为同一节点，
/// 文本取编辑版，结构属性（class、style、id、data-*）在编辑版缺失时
/// 从原始版补回；编辑版新增的节点原样保留，原始版中被删除的节点丢弃
pub fn reconcile(original: &str, edited: &str) -> String {
    let original = Html::parse_fragment(original);
    let edited = Html::parse_fragment(edited);

    let mut output = String::new();
    merge_children(
        Some(original.root_element()),
        edited.root_element(),
        &mut output,
    );
    output
}

/// 合并一对已对齐父节点的子节点序列
///
/// 在原始子元素上维护一个游标：编辑版的每个元素与游标处同名元素配对，
/// 标签不同则视为编辑版新增的节点，游标不前进
fn merge_children(original: Option<ElementRef<'_>>, edited: ElementRef<'_>, output: &mut String) {
    let mut originals = original
        .into_iter()
        .flat_map(|parent| parent.children())
        .filter_map(ElementRef::wrap)
        .peekable();

    for child in edited.children() {
        match child.value() {
            Node::Text(text) => {
                output.push_str(&html_escape::encode_text(&*text.text));
            }
            Node::Comment(comment) => {
                output.push_str("<!--");
                output.push_str(&comment.comment);
                output.push_str("-->");
            }
            Node::Element(_) => {
                let Some(edited_el) = ElementRef::wrap(child) else {
                    continue;
                };
                let tag_matches = originals
                    .peek()
                    .is_some_and(|orig| orig.value().name() == edited_el.value().name());
                let aligned = if tag_matches { originals.next() } else { None };
                match aligned {
                    Some(orig_el) => merge_element(orig_el, edited_el, output),
                    // New structure introduced by the edit, keep it verbatim
                    None => output.push_str(&edited_el.html()),
                }
            }
            _ => {}
        }
    }
}

/// 合并一对按位置对齐的元素
fn merge_element(original: ElementRef<'_>, edited: ElementRef<'_>, output: &mut String) {
    let name = edited.value().name();
    output.push('<');
    output.push_str(name);

    // Edited attributes win, structural ones fall back to the original
    let mut attributes: Vec<(&str, &str)> = edited.value().attrs().collect();
    for (key, value) in original.value().attrs() {
        if is_structural_attr(key) && !attributes.iter().any(|(k, _)| *k == key) {
            attributes.push((key, value));
        }
    }
    for (key, value) in attributes {
        output.push(' ');
        output.push_str(key);
        output.push_str("=\"");
        output.push_str(&html_escape::encode_double_quoted_attribute(value));
        output.push('"');
    }
    output.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    merge_children(Some(original), edited, output);

    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

/// 判断属性是否属于需要保留的结构属性
fn is_structural_attr(key: &str) -> bool {
    matches!(key, "class" | "style" | "id") || key.starts_with("data-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_edit_passes_through() {
        assert_eq!(reconcile("<p>A</p>", "<p>B</p>"), "<p>B</p>");
    }

    #[test]
    fn test_structural_attributes_survive_text_edit() {
        let merged = reconcile(
            r#"<p class="intro" style="color: red;">old</p>"#,
            "<p>new</p>",
        );
        assert!(merged.contains(r#"class="intro""#));
        assert!(merged.contains(r#"style="color: red;""#));
        assert!(merged.contains(">new</p>"));
    }

    #[test]
    fn test_edited_attributes_win_over_original() {
        let merged = reconcile(
            r#"<p class="intro">old</p>"#,
            r#"<p class="lead">new</p>"#,
        );
        assert_eq!(merged, r#"<p class="lead">new</p>"#);
    }

    #[test]
    fn test_nested_structure_is_preserved() {
        let merged = reconcile(
            r#"<div class="wrap"><span style="font-weight: bold;">old</span></div>"#,
            "<div><span>new</span></div>",
        );
        assert_eq!(
            merged,
            r#"<div class="wrap"><span style="font-weight: bold;">new</span></div>"#
        );
    }

    #[test]
    fn test_new_elements_from_edit_are_kept() {
        let merged = reconcile("<p>one</p>", "<p>one</p><blockquote>added</blockquote>");
        assert_eq!(merged, "<p>one</p><blockquote>added</blockquote>");
    }

    #[test]
    fn test_deleted_elements_are_dropped() {
        let merged = reconcile("<p>one</p><p>two</p>", "<p>one</p>");
        assert_eq!(merged, "<p>one</p>");
    }

    #[test]
    fn test_data_attributes_are_structural() {
        let merged = reconcile(r#"<p data-src="img.png">old</p>"#, "<p>new</p>");
        assert_eq!(merged, r#"<p data-src="img.png">new</p>"#);
    }

    #[test]
    fn test_void_elements_do_not_get_closing_tags() {
        let merged = reconcile(r#"<p><img src="a.png">x</p>"#, r#"<p><img src="a.png">y</p>"#);
        assert_eq!(merged, r#"<p><img src="a.png">y</p>"#);
    }

    #[test]
    fn test_text_is_escaped_on_output() {
        let merged = reconcile("<p>a</p>", "<p>1 &lt; 2</p>");
        assert_eq!(merged, "<p>1 &lt; 2</p>");
    }
}
