//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量语料处理器
//! - 管理应用生命周期（初始化、运行）
//! - 扫描语料目录（语料 → 子目录 → 文章）
//! - 创建共享输出目录
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息和耗时
//!
//! ### `folder_processor` - 子目录处理器
//! - 遍历单个子目录的所有文章
//! - 每篇文章独立清洗，失败只计数不中断
//! - 写入失败清单
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理整个语料)
//!     ↓
//! folder_processor (处理 Vec<文章路径>)
//!     ↓
//! workflow::DocumentScrubber (处理单篇文章)
//!     ↓
//! workflow::SegmentPreprocessor (处理 front / body 片段)
//!     ↓
//! services (能力层：边界定位 / 引用清理 / 规范化)
//! ```

pub mod batch_processor;
pub mod folder_processor;

// 重新导出主要类型
pub use batch_processor::{corpus_output_dir, App};
pub use folder_processor::{process_folder, FolderResult};
