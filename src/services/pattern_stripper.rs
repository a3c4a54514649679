//! 引用标记清理 - 业务能力层
//!
//! 只负责把正文里的引用编号和括号参考文献替换成空格

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `[12]` 或 `(3)` 形式的引用编号
static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]|\(\d+\)").expect("valid citation regex"));

/// 括号内逗号后跟四位年份的参考文献，如 `(Smith et al., 2019)`
///
/// 括号内不允许再出现括号或换行，每个括号单独匹配
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^()\n]*,\s*\d{4}[^()\n]*\)").expect("valid reference regex")
});

/// 去掉引用编号，每处替换为一个空格
pub fn strip_citations(text: &str) -> Cow<'_, str> {
    CITATION_RE.replace_all(text, " ")
}

/// 去掉括号参考文献，每处替换为一个空格
pub fn strip_references(text: &str) -> Cow<'_, str> {
    REFERENCE_RE.replace_all(text, " ")
}
