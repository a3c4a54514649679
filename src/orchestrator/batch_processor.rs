//! 批量语料处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责整个语料目录的清洗和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头，构建 DocumentScrubber
//! 2. **语料扫描**：按 语料 → 子目录 → 文章 的两层结构加载全部文件
//! 3. **输出目录**：在语料目录旁边创建 `<语料名>_preprocessed`，只创建一次
//! 4. **并发控制**：使用 Semaphore 限制同时处理的文章数量
//! 5. **全局统计**：汇总成功、失败数量和耗时
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单篇文章的细节
//! - **向下委托**：子目录交给 folder_processor，单篇交给 DocumentScrubber
//! - **失败隔离**：单篇失败不会中断整个语料；目录级别的文件系统错误直接返回

use crate::config::Config;
use crate::error::{AppResult, ConfigError};
use crate::models::{load_corpus, BatchRunSummary};
use crate::orchestrator::folder_processor;
use crate::services::FailureWriter;
use crate::utils::logging;
use crate::workflow::{ensure_dir, DocumentScrubber, ScrubOutcome};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    scrubber: Arc<DocumentScrubber>,
    failure_writer: FailureWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)
            .with_context(|| format!("无法写入日志文件: {}", config.output_log_file))?;

        let scrubber = Arc::new(DocumentScrubber::new(&config));
        let failure_writer = FailureWriter::with_path(config.failure_log_file.clone());

        Ok(Self {
            config,
            scrubber,
            failure_writer,
        })
    }

    /// 清洗单个文件，`output_dir` 为空时使用默认输出目录
    pub async fn scrub_file(&self, path: &Path, output_dir: Option<&Path>) -> Result<ScrubOutcome> {
        let outcome = self
            .scrubber
            .scrub(path, output_dir)
            .await
            .with_context(|| format!("清洗失败: {}", path.display()))?;
        info!(
            "✓ 清洗成功: {} → {}",
            path.display(),
            outcome.output_path.display()
        );
        Ok(outcome)
    }

    /// 清洗整个语料目录
    pub async fn scrub_corpus(&self, corpus_dir: &Path) -> Result<BatchRunSummary> {
        let started_at = chrono::Local::now();
        let timer = Instant::now();

        let output_dir = corpus_output_dir(corpus_dir, &self.config.output_folder)?;
        logging::log_startup(corpus_dir, &output_dir, self.config.max_concurrent_files);

        // 加载所有待处理的文章
        info!("\n📁 正在扫描语料目录...");
        let folders = load_corpus(corpus_dir)
            .await
            .with_context(|| format!("无法扫描语料目录: {}", corpus_dir.display()))?;

        let total_files: usize = folders.iter().map(|f| f.files.len()).sum();
        if folders.is_empty() {
            warn!("⚠️ 语料目录下没有子目录: {}", corpus_dir.display());
        }
        logging::log_corpus_loaded(folders.len(), total_files);

        // 输出目录在任何写入之前创建一次
        ensure_dir(&output_dir).await?;

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_files));
        let mut success = 0;
        let mut failed = 0;

        for (idx, folder) in folders.iter().enumerate() {
            let folder_num = idx + 1;
            logging::log_folder_start(folder_num, folders.len(), &folder.path, folder.files.len());

            let result = folder_processor::process_folder(
                Arc::clone(&self.scrubber),
                &self.failure_writer,
                folder,
                &output_dir,
                semaphore.clone(),
            )
            .await?;

            success += result.success;
            failed += result.failed;

            logging::log_folder_complete(folder_num, result.success, folder.files.len());
        }

        let summary = BatchRunSummary {
            success,
            failed,
            started_at,
            finished_at: chrono::Local::now(),
            elapsed: timer.elapsed(),
        };

        // 输出最终统计
        logging::print_final_stats(&summary, &self.config.output_log_file);
        if let Err(e) = logging::append_summary(&self.config.output_log_file, corpus_dir, &summary) {
            warn!("⚠️ 无法写入日志文件 {}: {}", self.config.output_log_file, e);
        }

        Ok(summary)
    }
}

/// 语料的共享输出目录：与语料目录同级，名为 `<语料目录名>_<output_folder>`
pub fn corpus_output_dir(corpus_dir: &Path, output_folder: &str) -> AppResult<PathBuf> {
    let name = corpus_dir
        .file_name()
        .ok_or_else(|| ConfigError::InvalidCorpusDir {
            path: corpus_dir.to_path_buf(),
        })?;

    let mut dir_name = name.to_os_string();
    dir_name.push("_");
    dir_name.push(output_folder);

    Ok(corpus_dir
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(dir_name))
}
