//! 片段预处理 - 流程层
//!
//! front：去掉开头元数据 → 规范化
//! body：去掉结尾元数据 → 规范化

use crate::config::Config;
use crate::models::segment::{Segment, SegmentMode, StopstringSet};
use crate::services::{cut_back, cut_front, normalize};

/// 片段预处理器
///
/// 持有两组停止词，构造后不可变
#[derive(Debug, Clone)]
pub struct SegmentPreprocessor {
    stopstrings_front: StopstringSet,
    stopstrings_body: StopstringSet,
}

impl SegmentPreprocessor {
    pub fn new(config: &Config) -> Self {
        Self::with_stopstrings(
            StopstringSet::new(SegmentMode::Front, &config.stopstrings_front),
            StopstringSet::new(SegmentMode::Body, &config.stopstrings_body),
        )
    }

    pub fn with_stopstrings(stopstrings_front: StopstringSet, stopstrings_body: StopstringSet) -> Self {
        Self {
            stopstrings_front,
            stopstrings_body,
        }
    }

    /// 按模式预处理一段文本
    pub fn preprocess(&self, text: &str, mode: SegmentMode) -> String {
        let kept = match mode {
            SegmentMode::Front => cut_front(text, &self.stopstrings_front),
            SegmentMode::Body => cut_back(text, &self.stopstrings_body),
        };
        normalize(kept)
    }

    pub fn preprocess_segment(&self, segment: &Segment<'_>) -> String {
        self.preprocess(segment.text, segment.mode)
    }
}
