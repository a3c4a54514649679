//! 失败记录服务 - 业务能力层
//!
//! 只负责"把处理失败的文件写进清单"能力，不关心流程

use anyhow::Result;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 失败记录服务
///
/// 职责：
/// - 将处理失败的文章路径和原因追加到清单文件
/// - 只处理单个文件的失败
/// - 不关心流程顺序
pub struct FailureWriter {
    failure_file_path: String,
}

impl FailureWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            failure_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.failure_file_path
    }

    /// 写入失败信息
    ///
    /// # 参数
    /// - `article`: 失败的文章路径
    /// - `reason`: 失败原因
    pub async fn write(&self, article: &Path, reason: &str) -> Result<()> {
        debug!("写入失败记录: {} | {}", article.display(), reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.failure_file_path)
            .await?;

        // 原因里的换行会破坏一行一条的格式
        let line = format!(
            "{} | {}\n",
            article.display(),
            reason.replace('\n', " ")
        );

        file.write_all(line.as_bytes()).await?;

        Ok(())
    }
}
