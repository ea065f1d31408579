// ==========================================
// 工作订单跟踪 - 数据仓储层
// ==========================================
// 职责: 会话内订单表的增删改查
// 存储: 内存（会话结束即释放）
// ==========================================

pub mod order_store;

pub use order_store::{OrderStore, StoreOutcome};
