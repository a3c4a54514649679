use crate::models::BatchRunSummary;
use anyhow::Result;
/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n语料清洗日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 把运行统计追加到日志文件
pub fn append_summary(log_file_path: &str, corpus_dir: &Path, summary: &BatchRunSummary) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(file, "语料目录: {}", corpus_dir.display())?;
    writeln!(
        file,
        "开始时间: {}",
        summary.started_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(
        file,
        "完成时间: {}",
        summary.finished_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(file, "成功: {}", summary.success)?;
    writeln!(file, "失败: {}", summary.failed)?;
    writeln!(file, "耗时: {}", summary.formatted_elapsed())?;
    writeln!(file)?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `corpus_dir`: 语料目录
/// - `output_dir`: 共享输出目录
/// - `max_concurrent`: 最大并发数
pub fn log_startup(corpus_dir: &Path, output_dir: &Path, max_concurrent: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始清洗语料: {}", corpus_dir.display());
    info!("📂 输出目录: {}", output_dir.display());
    info!("📊 最大并发数: {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

/// 记录语料加载信息
///
/// # 参数
/// - `folders`: 子目录数量
/// - `files`: 文章总数
pub fn log_corpus_loaded(folders: usize, files: usize) {
    info!("✓ 找到 {} 个子目录，共 {} 篇文章\n", folders, files);
}

/// 记录子目录开始信息
///
/// # 参数
/// - `folder_num`: 子目录编号
/// - `total_folders`: 子目录总数
/// - `folder`: 子目录路径
/// - `files`: 本目录文章数
pub fn log_folder_start(folder_num: usize, total_folders: usize, folder: &Path, files: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 个目录: {}", folder_num, total_folders, folder.display());
    info!("📄 本目录文章: {} 篇", files);
    info!("{}", "=".repeat(60));
}

/// 记录子目录完成信息
///
/// # 参数
/// - `folder_num`: 子目录编号
/// - `success`: 成功数量
/// - `total`: 本目录文章数
pub fn log_folder_complete(folder_num: usize, success: usize, total: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 第 {} 个目录完成: 成功 {}/{}", folder_num, success, total);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 运行统计
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(summary: &BatchRunSummary, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部清洗完成统计");
    info!(
        "完成时间: {}",
        summary.finished_at.format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", summary.success, summary.total());
    info!("❌ 失败: {}", summary.failed);
    info!("⏱️ 耗时: {}", summary.formatted_elapsed());
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}
