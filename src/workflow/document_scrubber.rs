//! 单篇文章清洗 - 流程层
//!
//! 核心职责：定义"一篇文章"的完整清洗流程
//!
//! 流程顺序：
//! 1. 读取原文
//! 2. 按分节符拆出 front / body（refs 丢弃）
//! 3. 分别预处理后用换行拼接
//! 4. 确保输出目录存在，先写临时文件再改名为同名输出文件

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::models::document::RawDocument;
use crate::workflow::segment_preprocessor::SegmentPreprocessor;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// 单篇文章的清洗结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrubOutcome {
    /// 写出的文件路径
    pub output_path: PathBuf,
    /// 是否因分节不足而整篇按 body 处理
    pub fallback: bool,
}

/// 文章清洗流程
///
/// - 不持有任何文件句柄
/// - 每篇文章独立处理，重复执行只会覆盖同名输出
pub struct DocumentScrubber {
    separator: String,
    output_folder: String,
    preprocessor: SegmentPreprocessor,
}

impl DocumentScrubber {
    pub fn new(config: &Config) -> Self {
        Self {
            separator: config.separator.clone(),
            output_folder: config.output_folder.clone(),
            preprocessor: SegmentPreprocessor::new(config),
        }
    }

    /// 清洗内存中的文章，返回输出文本和是否走了兜底
    pub fn scrub_text(&self, document: &RawDocument) -> (String, bool) {
        let sections = document.split(&self.separator);
        let front = self.preprocessor.preprocess_segment(&sections.front);
        let body = self.preprocessor.preprocess_segment(&sections.body);
        (format!("{}\n{}", front, body), !sections.structured)
    }

    /// 单文件的默认输出目录
    ///
    /// 按 `语料/子目录/文件` 的固定层级，去掉路径最后两段后拼上输出目录名
    pub fn default_output_dir(&self, source: &Path) -> PathBuf {
        source
            .parent()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""))
            .join(&self.output_folder)
    }

    /// 清洗单个文件
    ///
    /// # 参数
    /// - `source`: 原始文章路径
    /// - `destination_dir`: 输出目录，`None` 时使用 [`Self::default_output_dir`]
    ///
    /// # 返回
    /// 返回输出文件路径和是否走了兜底
    pub async fn scrub(&self, source: &Path, destination_dir: Option<&Path>) -> AppResult<ScrubOutcome> {
        let file_name = source
            .file_name()
            .ok_or_else(|| FileError::MissingFileName {
                path: source.to_path_buf(),
            })?;

        let text = fs::read_to_string(source)
            .await
            .map_err(|e| AppError::file_read_failed(source, e))?;
        debug!("读取 {} ({} 字节)", source.display(), text.len());

        let (output, fallback) = self.scrub_text(&RawDocument::new(text));
        if fallback {
            warn!(
                "⚠️ {} 分节不足 3 段，整篇按 body 处理",
                source.display()
            );
        }

        let destination_dir = match destination_dir {
            Some(dir) => dir.to_path_buf(),
            None => self.default_output_dir(source),
        };
        ensure_dir(&destination_dir).await?;

        let output_path = destination_dir.join(file_name);
        write_replacing(&output_path, &output).await?;

        Ok(ScrubOutcome {
            output_path,
            fallback,
        })
    }
}

/// 确保目录存在，已存在时不报错
pub async fn ensure_dir(dir: &Path) -> AppResult<()> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::create_dir_failed(dir, e))
}

/// 先写同目录下的临时文件，成功后再改名覆盖目标，失败时不留下半截文件
async fn write_replacing(path: &Path, content: &str) -> AppResult<()> {
    let tmp_path = tmp_path_for(path);

    if let Err(e) = fs::write(&tmp_path, content).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(AppError::file_write_failed(path, e));
    }
    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(AppError::file_write_failed(path, e));
    }
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}
