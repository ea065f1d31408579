// ==========================================
// 工作订单跟踪 - 汇总引擎
// ==========================================
// 职责: 按状态 / 按区域统计订单数量
// 输出: 报表摘要表、柱状图数据
// ==========================================

use crate::domain::{Area, OrderStatus, WorkOrder};
use std::fmt::Display;

// ==========================================
// CountTable - 分类计数表
// ==========================================
// 规则: 不含零计数分类; 按数量降序,数量相同时按枚举声明顺序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable<K> {
    rows: Vec<(K, usize)>,
}

impl<K: Copy + Eq + Display> CountTable<K> {
    /// 按候选分类顺序统计
    fn tally(categories: &[K], values: impl Iterator<Item = K> + Clone) -> Self {
        let mut rows: Vec<(K, usize)> = categories
            .iter()
            .map(|&key| (key, values.clone().filter(|v| *v == key).count()))
            .filter(|(_, count)| *count > 0)
            .collect();

        // sort_by 为稳定排序,并列时保留声明顺序
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        Self { rows }
    }

    pub fn get(&self, key: K) -> usize {
        self.rows
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, usize)> {
        self.rows.iter()
    }

    /// (显示名称, 数量) 列表，供图表与表格使用
    pub fn labeled(&self) -> Vec<(String, usize)> {
        self.rows
            .iter()
            .map(|(key, count)| (key.to_string(), *count))
            .collect()
    }
}

/// 按状态统计
pub fn count_by_status(orders: &[WorkOrder]) -> CountTable<OrderStatus> {
    CountTable::tally(&OrderStatus::ALL, orders.iter().map(|o| o.status))
}

/// 按区域统计
pub fn count_by_area(orders: &[WorkOrder]) -> CountTable<Area> {
    CountTable::tally(&Area::ALL, orders.iter().map(|o| o.area))
}
