//! # PMC Scrubber
//!
//! 清洗 PMC 文章纯文本，去掉许可声明、引用编号、参考文献和致谢等元数据，
//! 输出适合后续语言处理的规范化文本。
//!
//! ## 架构设计
//!
//! 本系统采用四层架构，数据只向下流动：
//!
//! ### ① 模型层（Models）
//! - `models/` - 原始文章、片段模式、停止词集合、运行统计
//! - `models/loaders` - 扫描 语料 → 子目录 → 文章 的目录结构
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 只处理一段文本，不关心文件和流程
//! - `boundary_locator` - 计算 front / body 的元数据切分位置
//! - `pattern_stripper` - 去引用编号和括号参考文献
//! - `text_normalizer` - 字符集收敛、句末符号统一、空格压缩
//! - `FailureWriter` - 写失败清单能力
//!
//! ### ③ 流程层（Workflow）
//! - `SegmentPreprocessor` - 单个片段：边界切分 → 规范化
//! - `DocumentScrubber` - 单篇文章：读取 → 分节 → 预处理 → 写出
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 整个语料的清洗、输出目录、统计和耗时
//! - `orchestrator/folder_processor` - 单个子目录，逐篇隔离失败

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{BatchRunSummary, RawDocument, SegmentMode, StopstringSet};
pub use orchestrator::App;
pub use workflow::{DocumentScrubber, ScrubOutcome, SegmentPreprocessor};
