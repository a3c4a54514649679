//! 文章片段与停止词集合

use crate::error::{AppError, ContractError};
use std::fmt;
use std::str::FromStr;

/// 片段模式
///
/// 只有 front 和 body 两种，refs 部分在拆分时就已丢弃
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentMode {
    /// 正文前的元数据部分（标题、许可、署名）
    Front,
    /// 正文部分
    Body,
}

impl SegmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentMode::Front => "front",
            SegmentMode::Body => "body",
        }
    }
}

impl fmt::Display for SegmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(SegmentMode::Front),
            "body" => Ok(SegmentMode::Body),
            other => Err(ContractError::InvalidSegmentMode {
                mode: other.to_string(),
            }
            .into()),
        }
    }
}

/// 带模式标记的文章片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub mode: SegmentMode,
}

impl<'a> Segment<'a> {
    pub fn front(text: &'a str) -> Self {
        Self {
            text,
            mode: SegmentMode::Front,
        }
    }

    pub fn body(text: &'a str) -> Self {
        Self {
            text,
            mode: SegmentMode::Body,
        }
    }
}

/// 停止词集合
///
/// 按配置顺序保存的小写标记串，构造后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopstringSet {
    mode: SegmentMode,
    markers: Vec<String>,
}

impl StopstringSet {
    /// 创建停止词集合，标记统一转为小写，空串和重复项被忽略
    pub fn new<I, S>(mode: SegmentMode, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lowered: Vec<String> = Vec::new();
        for marker in markers {
            let marker = marker.as_ref().to_ascii_lowercase();
            if !marker.is_empty() && !lowered.contains(&marker) {
                lowered.push(marker);
            }
        }
        Self {
            mode,
            markers: lowered,
        }
    }

    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }
}
