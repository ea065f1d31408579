// ==========================================
// 工作订单跟踪 - 领域类型定义
// ==========================================
// 职责: 区域与订单状态枚举
// 红线: 只允许固定枚举值,不存储任意字符串
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 区域 (Area)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Area {
    Gats,
    Ford,
    Epu4,
}

impl Area {
    /// 全部区域（声明顺序即报表中的并列顺序）
    pub const ALL: [Area; 3] = [Area::Gats, Area::Ford, Area::Epu4];

    /// 报表显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Area::Gats => "Gats",
            Area::Ford => "Ford",
            Area::Epu4 => "EPU4",
        }
    }

    /// 序列化代码（与 serde 一致）
    pub fn code(&self) -> &'static str {
        match self {
            Area::Gats => "GATS",
            Area::Ford => "FORD",
            Area::Epu4 => "EPU4",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Area {
    type Err = UnknownVariant;

    /// 同时接受显示名称与序列化代码
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Area::ALL
            .into_iter()
            .find(|area| area.label() == value || area.code() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "Área",
                value: value.to_string(),
            })
    }
}

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 流转: 不限制方向,任意状态之间可直接切换
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    ToDo,       // 待处理
    InProgress, // 进行中
    Done,       // 已完成
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::ToDo, OrderStatus::InProgress, OrderStatus::Done];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::ToDo => "Por hacer",
            OrderStatus::InProgress => "En progreso",
            OrderStatus::Done => "Hecho",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::ToDo => "TO_DO",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Done => "DONE",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.label() == value || status.code() == value)
            .ok_or_else(|| UnknownVariant {
                kind: "Estatus",
                value: value.to_string(),
            })
    }
}

/// 枚举解析失败
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("未知的{kind}取值: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_parses_label_and_code() {
        assert_eq!("EPU4".parse::<Area>().unwrap(), Area::Epu4);
        assert_eq!("GATS".parse::<Area>().unwrap(), Area::Gats);
        assert_eq!(" Ford ".parse::<Area>().unwrap(), Area::Ford);
        assert!("Planta 9".parse::<Area>().is_err());
    }

    #[test]
    fn test_status_parses_label_and_code() {
        assert_eq!("Por hacer".parse::<OrderStatus>().unwrap(), OrderStatus::ToDo);
        assert_eq!("IN_PROGRESS".parse::<OrderStatus>().unwrap(), OrderStatus::InProgress);
        assert_eq!("Hecho".parse::<OrderStatus>().unwrap(), OrderStatus::Done);

        let err = "Cancelado".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.value, "Cancelado");
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Area::Epu4).unwrap(), "\"EPU4\"");
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        let status: OrderStatus = serde_json::from_str("\"TO_DO\"").unwrap();
        assert_eq!(status, OrderStatus::default());
    }
}
