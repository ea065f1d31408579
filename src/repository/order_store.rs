// ==========================================
// 工作订单跟踪 - 订单仓储（会话内存表）
// ==========================================
// 职责: 订单登记、状态更新、删除并重新编号
// 红线: id 始终为 1..N 连续编号; 插入顺序即显示顺序
// 生命周期: 随会话创建,随会话销毁,不落盘
// ==========================================

use crate::domain::{NewWorkOrder, OrderStatus, WorkOrder};
use chrono::{Local, NaiveDateTime, Timelike};
use tracing::debug;

/// 按 id 修改/删除的结果
///
/// 未找到 id 不视为错误,由调用方决定是否提示用户
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Updated,
    Deleted,
    NotFound,
}

impl StoreOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreOutcome::NotFound)
    }
}

// ==========================================
// OrderStore - 订单内存表
// ==========================================
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<WorkOrder>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记新订单（登记时间取本地当前时间,精确到分钟）
    pub fn create(&mut self, new_order: NewWorkOrder) -> WorkOrder {
        let now = Local::now().naive_local();
        let created_at = now
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        self.create_at(new_order, created_at)
    }

    /// 以指定登记时间登记新订单
    ///
    /// # 规则
    /// - id = 当前订单数 + 1
    /// - 状态固定为 ToDo
    pub fn create_at(&mut self, new_order: NewWorkOrder, created_at: NaiveDateTime) -> WorkOrder {
        let order = WorkOrder {
            id: self.next_id(),
            created_at,
            supervisor: new_order.supervisor,
            area: new_order.area,
            materials: new_order.materials,
            activities: new_order.activities,
            requirements: new_order.requirements,
            status: OrderStatus::ToDo,
        };

        debug!(id = order.id, area = %order.area, "订单已登记");
        self.orders.push(order.clone());
        order
    }

    /// 更新订单状态
    pub fn update_status(&mut self, id: u32, status: OrderStatus) -> StoreOutcome {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                debug!(id, from = %order.status, to = %status, "订单状态已更新");
                order.status = status;
                StoreOutcome::Updated
            }
            None => StoreOutcome::NotFound,
        }
    }

    /// 删除订单,其余订单按当前顺序重新编号为 1..N
    pub fn delete(&mut self, id: u32) -> StoreOutcome {
        let Some(index) = self.orders.iter().position(|o| o.id == id) else {
            return StoreOutcome::NotFound;
        };

        self.orders.remove(index);
        self.renumber();
        debug!(id, remaining = self.orders.len(), "订单已删除并重新编号");
        StoreOutcome::Deleted
    }

    /// 只读视图（显示顺序）
    pub fn list(&self) -> &[WorkOrder] {
        &self.orders
    }

    pub fn get(&self, id: u32) -> Option<&WorkOrder> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn next_id(&self) -> u32 {
        self.orders.len() as u32 + 1
    }

    fn renumber(&mut self) {
        for (index, order) in self.orders.iter_mut().enumerate() {
            order.id = index as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Area;

    fn submit(store: &mut OrderStore, supervisor: &str, area: Area) -> WorkOrder {
        store.create(NewWorkOrder::new(supervisor, area))
    }

    fn ids(store: &OrderStore) -> Vec<u32> {
        store.list().iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_create_assigns_sequential_id_and_todo() {
        let mut store = OrderStore::new();
        let first = submit(&mut store, "Ana", Area::Gats);
        let second = submit(&mut store, "Luis", Area::Ford);

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, OrderStatus::ToDo);
        assert_eq!(first.created_at.second(), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_status_unknown_id_is_not_found() {
        let mut store = OrderStore::new();
        submit(&mut store, "Ana", Area::Gats);

        assert_eq!(store.update_status(7, OrderStatus::Done), StoreOutcome::NotFound);
        assert_eq!(store.list()[0].status, OrderStatus::ToDo);
    }

    #[test]
    fn test_delete_middle_renumbers_in_order() {
        let mut store = OrderStore::new();
        submit(&mut store, "A", Area::Gats);
        submit(&mut store, "B", Area::Ford);
        submit(&mut store, "C", Area::Epu4);

        assert_eq!(store.delete(2), StoreOutcome::Deleted);
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.get(2).map(|o| o.supervisor.as_str()), Some("C"));
    }

    #[test]
    fn test_delete_unknown_id_keeps_store() {
        let mut store = OrderStore::new();
        submit(&mut store, "A", Area::Gats);

        assert!(store.delete(0).is_not_found());
        assert!(store.delete(2).is_not_found());
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn test_create_after_delete_continues_contiguous() {
        let mut store = OrderStore::new();
        submit(&mut store, "A", Area::Gats);
        submit(&mut store, "B", Area::Gats);
        store.delete(1);

        let next = submit(&mut store, "C", Area::Ford);
        assert_eq!(next.id, 2);
        assert_eq!(ids(&store), vec![1, 2]);
    }
}
