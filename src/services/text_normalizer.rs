//! 文本规范化 - 业务能力层
//!
//! 按固定顺序执行：
//! 1. 去引用编号，再去括号参考文献
//! 2. 字母、数字、`! ? , . -` 和换行以外的字符替换为空格
//! 3. 连续的 `! ? .` 统一为一个句号
//! 4. 连续空格压缩为一个

use crate::services::pattern_stripper::{strip_citations, strip_references};
use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9!?,.\-\n]").expect("valid charset regex"));

static TERMINATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!?.]+").expect("valid terminator regex"));

static MULTI_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid space regex"));

/// 对一段文本做完整的规范化
pub fn normalize(text: &str) -> String {
    let text = strip_citations(text);
    let text = strip_references(&text);
    let text = DISALLOWED_RE.replace_all(&text, " ");
    let text = TERMINATOR_RE.replace_all(&text, ".");
    MULTI_SPACE_RE.replace_all(&text, " ").into_owned()
}
