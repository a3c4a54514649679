//! 原始文章与分节

use crate::models::segment::Segment;

/// 从单个输入文件读取的原始文章
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    text: String,
}

/// 拆分后保留的两个片段
///
/// refs 及之后的内容不出现在这里
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSections<'a> {
    pub front: Segment<'a>,
    pub body: Segment<'a>,
    /// 分节结构是否完整（false 表示走了整篇作为 body 的兜底）
    pub structured: bool,
}

impl RawDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 按分节符拆分文章
    ///
    /// 至少 3 段时取第 1、2 段（从 0 开始）作为 front 和 body，
    /// 第 0 段和第 3 段以后全部丢弃；不足 3 段时 front 为空，整篇作为 body。
    pub fn split<'a>(&'a self, separator: &str) -> DocumentSections<'a> {
        let mut parts = self.text.split(separator);
        let _ = parts.next();
        match (parts.next(), parts.next()) {
            (Some(front), Some(body)) => DocumentSections {
                front: Segment::front(front),
                body: Segment::body(body),
                structured: true,
            },
            _ => DocumentSections {
                front: Segment::front(""),
                body: Segment::body(&self.text),
                structured: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::segment::SegmentMode;

    #[test]
    fn test_split_takes_front_and_body() {
        let doc = RawDocument::new("head==== front text==== body text==== refs==== tail");
        let sections = doc.split("====");
        assert!(sections.structured);
        assert_eq!(sections.front.text, " front text");
        assert_eq!(sections.body.text, " body text");
        assert_eq!(sections.front.mode, SegmentMode::Front);
        assert_eq!(sections.body.mode, SegmentMode::Body);
    }

    #[test]
    fn test_split_exactly_three_sections() {
        let doc = RawDocument::new("==== a==== b");
        let sections = doc.split("====");
        assert!(sections.structured);
        assert_eq!(sections.front.text, " a");
        assert_eq!(sections.body.text, " b");
    }

    #[test]
    fn test_split_fallback_when_too_few_sections() {
        let doc = RawDocument::new("only one ==== separator");
        let sections = doc.split("====");
        assert!(!sections.structured);
        assert_eq!(sections.front.text, "");
        assert_eq!(sections.body.text, "only one ==== separator");

        let plain = RawDocument::new("no separator at all");
        assert_eq!(plain.split("====").body.text, "no separator at all");
    }
}
