// ==========================================
// 工作订单跟踪 - 订单领域模型
// ==========================================
// 字段顺序即报表列顺序:
// ID / 创建时间 / 负责人 / 区域 / 材料 / 作业内容 / 附加需求 / 状态
// ==========================================

use crate::domain::types::{Area, OrderStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 报表与表格中的时间格式（精确到分钟）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

// ==========================================
// WorkOrder - 工作订单
// ==========================================
// 红线: id 在会话内始终为 1..N 连续编号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: u32,                  // 序号（删除后重新编号）
    pub created_at: NaiveDateTime, // 登记时间
    pub supervisor: String,       // 负责人
    pub area: Area,               // 区域
    pub materials: String,        // 所需材料
    pub activities: String,       // 作业内容
    pub requirements: String,     // 附加需求
    pub status: OrderStatus,      // 当前状态
}

impl WorkOrder {
    /// 按报表时间格式输出登记时间
    pub fn created_at_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// 单行摘要（PDF 订单清单使用）
    pub fn summary_line(&self) -> String {
        format!(
            "ID: {} | Supervisor: {} | Área: {} | Estatus: {} | Materiales: {} | Actividades: {} | Requerimientos: {}",
            self.id,
            self.supervisor,
            self.area,
            self.status,
            self.materials,
            self.activities,
            self.requirements
        )
    }
}

// ==========================================
// NewWorkOrder - 表单提交载荷
// ==========================================
// 文本字段不做校验,区域由输入端的下拉框约束
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkOrder {
    pub supervisor: String,
    pub area: Area,
    #[serde(default)]
    pub materials: String,
    #[serde(default)]
    pub activities: String,
    #[serde(default)]
    pub requirements: String,
}

impl NewWorkOrder {
    pub fn new(supervisor: &str, area: Area) -> Self {
        Self {
            supervisor: supervisor.to_string(),
            area,
            materials: String::new(),
            activities: String::new(),
            requirements: String::new(),
        }
    }

    pub fn materials(mut self, materials: &str) -> Self {
        self.materials = materials.to_string();
        self
    }

    pub fn activities(mut self, activities: &str) -> Self {
        self.activities = activities.to_string();
        self
    }

    pub fn requirements(mut self, requirements: &str) -> Self {
        self.requirements = requirements.to_string();
        self
    }
}
