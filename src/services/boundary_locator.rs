//! 元数据边界定位 - 业务能力层
//!
//! front 的元数据总在正文之前，取最靠后的结束标记；
//! body 的尾部元数据总在正文之后，取最靠前的开始标记。
//!
//! 标记匹配只对 ASCII 字母做大小写折叠，这样小写副本与原文的字节下标一一对应。

use crate::models::segment::StopstringSet;

/// 计算 front 片段的切分位置（字节下标）
///
/// 对每个标记取最后一次出现的结束位置，再取其中最大值；
/// 没有任何标记出现时返回 0。
/// 切点后的字符不是字母时，再向后跳过一到两个标点或空白。
pub fn locate_front_cut(text: &str, stopstrings: &StopstringSet) -> usize {
    let lowered = text.to_ascii_lowercase();
    let cut = stopstrings
        .iter()
        .filter_map(|marker| lowered.rfind(marker).map(|start| start + marker.len()))
        .max();

    let Some(mut idx) = cut else {
        return 0;
    };

    if idx > 0 {
        let mut rest = text[idx..].chars();
        if let Some(first) = rest.next().filter(|c| !c.is_alphabetic()) {
            idx += first.len_utf8();
            if let Some(second) = rest.next().filter(|c| is_boundary_char(*c)) {
                idx += second.len_utf8();
            }
        }
    }

    idx.min(text.len())
}

/// 计算 body 片段的切分位置（字节下标）
///
/// 对每个标记取第一次出现的起始位置，再取其中最小值；
/// 未出现的标记按文本末尾计算，全部未出现时返回 `text.len()`。
pub fn locate_back_cut(text: &str, stopstrings: &StopstringSet) -> usize {
    let lowered = text.to_ascii_lowercase();
    stopstrings
        .iter()
        .filter_map(|marker| lowered.find(marker))
        .min()
        .unwrap_or(text.len())
}

/// 去掉 front 片段开头的元数据
pub fn cut_front<'a>(text: &'a str, stopstrings: &StopstringSet) -> &'a str {
    &text[locate_front_cut(text, stopstrings)..]
}

/// 去掉 body 片段结尾的元数据
pub fn cut_back<'a>(text: &'a str, stopstrings: &StopstringSet) -> &'a str {
    &text[..locate_back_cut(text, stopstrings)]
}

fn is_boundary_char(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}
