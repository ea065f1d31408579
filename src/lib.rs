// ==========================================
// 工作订单跟踪 - 核心库
// ==========================================
// 职责: 会话内订单登记、状态汇总、Excel/PDF 报表导出
// 红线: 不持久化,会话结束即释放全部订单
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 会话内订单表
pub mod repository;

// 引擎层 - 汇总统计
pub mod engine;

// 报表层 - 图表/Excel/PDF
pub mod report;

// 配置层 - 报表参数
pub mod config;

// 日志系统
pub mod logging;

// 应用层 - 会话
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use app::{ExportedFile, Session};
pub use config::ReportConfig;
pub use domain::{Area, NewWorkOrder, OrderStatus, WorkOrder};
pub use engine::{count_by_area, count_by_status, CountTable};
pub use report::{ReportError, ReportResult};
pub use repository::{OrderStore, StoreOutcome};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Sistema de Órdenes de Trabajo";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
