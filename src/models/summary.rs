//! 批量运行统计

use chrono::{DateTime, Local};
use std::time::Duration;

/// 一次批量处理的统计结果
#[derive(Debug, Clone)]
pub struct BatchRunSummary {
    pub success: usize,
    pub failed: usize,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub elapsed: Duration,
}

impl BatchRunSummary {
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    /// 耗时，格式为 HH:MM:SS.mmm
    pub fn formatted_elapsed(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

/// 把耗时格式化为 `时:分:秒`，每段两位补零，秒保留三位小数
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    let millis = elapsed.subsec_millis();
    format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
}
