// ==========================================
// 工作订单跟踪 - 领域模型层
// ==========================================
// 职责: 定义订单实体与枚举类型
// 红线: 不含存储逻辑,不含报表逻辑
// ==========================================

pub mod types;
pub mod work_order;

// 重导出核心类型
pub use types::{Area, OrderStatus, UnknownVariant};
pub use work_order::{NewWorkOrder, WorkOrder, TIMESTAMP_FORMAT};
