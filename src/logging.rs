// ==========================================
// 工作订单跟踪 - 日志系统初始化
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统（RUST_LOG 过滤,默认 info）
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // 日志输出到 stderr,stdout 留给导出结果
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// 初始化测试环境的日志系统（debug 级别,输出交给测试框架捕获）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
