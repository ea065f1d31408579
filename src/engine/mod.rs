// ==========================================
// 工作订单跟踪 - 引擎层
// ==========================================
// 职责: 订单汇总统计
// 红线: 无状态,所有函数都是纯函数
// ==========================================

pub mod aggregator;

pub use aggregator::{count_by_area, count_by_status, CountTable};
