// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use work_order_tracker::{Area, NewWorkOrder, OrderStore, Session};

// ==========================================
// NewWorkOrder 构建器
// ==========================================

pub struct OrderBuilder {
    supervisor: String,
    area: Area,
    materials: String,
    activities: String,
    requirements: String,
}

impl OrderBuilder {
    pub fn new(supervisor: &str) -> Self {
        Self {
            supervisor: supervisor.to_string(),
            area: Area::Gats,
            materials: "Material estándar".to_string(),
            activities: "Inspección".to_string(),
            requirements: String::new(),
        }
    }

    pub fn area(mut self, area: Area) -> Self {
        self.area = area;
        self
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

    pub fn build(self) -> NewWorkOrder {
        NewWorkOrder::new(&self.supervisor, self.area)
            .materials(&self.materials)
            .activities(&self.activities)
            .requirements(&self.requirements)
    }
}

/// 固定登记时间（分钟精度）
pub fn fixed_time(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 9)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// 按区域列表构造订单表
pub fn store_with_areas(areas: &[Area]) -> OrderStore {
    let mut store = OrderStore::new();
    for (i, area) in areas.iter().enumerate() {
        store.create_at(
            OrderBuilder::new(&format!("Supervisor {}", i + 1)).area(*area).build(),
            fixed_time(8, i as u32),
        );
    }
    store
}

/// 按区域列表构造会话
pub fn session_with_areas(areas: &[Area]) -> Session {
    let mut session = Session::default();
    for (i, area) in areas.iter().enumerate() {
        session.submit_order(OrderBuilder::new(&format!("Supervisor {}", i + 1)).area(*area).build());
    }
    session
}
