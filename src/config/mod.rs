// ==========================================
// 工作订单跟踪 - 配置层
// ==========================================
// 职责: 报表导出参数（标题/图表/版式）
// 存储: 可选 JSON 文件,缺省字段取默认值
// ==========================================

pub mod report_config;

pub use report_config::{ChartConfig, ConfigError, PageConfig, ReportConfig};
