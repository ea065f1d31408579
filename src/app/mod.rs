// ==========================================
// 工作订单跟踪 - 应用层
// ==========================================
// 职责: 会话生命周期,供输入端（表单/表格界面）调用
// ==========================================

pub mod session;

pub use session::{ExportedFile, Session};
