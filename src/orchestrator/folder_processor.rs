//! 子目录处理器 - 编排层
//!
//! ## 职责
//!
//! 处理语料中一个子目录下的全部文章，是子目录级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **并发调度**：每篇文章一个任务，用 Semaphore 限制同时处理的数量
//! 2. **失败隔离**：单篇失败只记日志和计数，不影响其他文章
//! 3. **失败清单**：失败文章写入失败清单文件
//! 4. **约定错误**：调用约定错误和任务 panic 直接向上抛出，不计入失败

use crate::models::ArticleFolder;
use crate::services::FailureWriter;
use crate::workflow::DocumentScrubber;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 子目录处理结果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FolderResult {
    pub success: usize,
    pub failed: usize,
}

/// 处理单个子目录
///
/// # 参数
/// - `scrubber`: 文章清洗流程（各任务共享）
/// - `failure_writer`: 失败清单
/// - `folder`: 子目录及其文章
/// - `output_dir`: 共享输出目录（调用前已创建）
/// - `semaphore`: 全局并发限制
pub async fn process_folder(
    scrubber: Arc<DocumentScrubber>,
    failure_writer: &FailureWriter,
    folder: &ArticleFolder,
    output_dir: &Path,
    semaphore: Arc<Semaphore>,
) -> Result<FolderResult> {
    let mut handles = Vec::with_capacity(folder.files.len());

    for path in &folder.files {
        let permit = semaphore.clone().acquire_owned().await?;
        let scrubber = Arc::clone(&scrubber);
        let source = path.clone();
        let output_dir = output_dir.to_path_buf();

        let handle = tokio::spawn(async move {
            let _permit = permit;
            scrubber.scrub(&source, Some(&output_dir)).await
        });
        handles.push((path.clone(), handle));
    }

    let mut result = FolderResult::default();

    for (path, handle) in handles {
        match handle.await {
            Ok(Ok(outcome)) => {
                info!(
                    "✓ 清洗成功: {} → {}",
                    path.display(),
                    outcome.output_path.display()
                );
                result.success += 1;
            }
            Ok(Err(e)) if e.is_contract_violation() => {
                return Err(e.into());
            }
            Ok(Err(e)) => {
                error!("❌ 清洗失败: {}，原因: {}", path.display(), e);
                record_failure(failure_writer, &path, &e.to_string()).await;
                result.failed += 1;
            }
            Err(e) if e.is_panic() => {
                std::panic::resume_unwind(e.into_panic());
            }
            Err(e) => {
                error!("❌ 任务执行失败: {}，原因: {}", path.display(), e);
                record_failure(failure_writer, &path, &e.to_string()).await;
                result.failed += 1;
            }
        }
    }

    Ok(result)
}

async fn record_failure(failure_writer: &FailureWriter, path: &Path, reason: &str) {
    if let Err(e) = failure_writer.write(path, reason).await {
        warn!(
            "⚠️ 无法写入失败清单 {}: {}",
            failure_writer.path(),
            e
        );
    }
}
