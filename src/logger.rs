//! tracing 日志初始化

use tracing_subscriber::EnvFilter;

/// 默认输出本 crate 的 info 级别日志，可用 `RUST_LOG` 覆盖
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pmc_scrubber=info"));

    // 测试里可能被多次调用，重复初始化直接忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
