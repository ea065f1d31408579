// ==========================================
// 订单表与汇总 集成测试
// ==========================================
// 测试目标: 连续编号、状态更新、汇总计数
// ==========================================

mod helpers;

use helpers::test_data_builder::{store_with_areas, OrderBuilder};
use work_order_tracker::{
    count_by_area, count_by_status, Area, OrderStatus, OrderStore, StoreOutcome,
};

fn ids(store: &OrderStore) -> Vec<u32> {
    store.list().iter().map(|o| o.id).collect()
}

#[test]
fn test_single_order_defaults() {
    let mut store = OrderStore::new();
    let order = store.create(OrderBuilder::new("Ana").area(Area::Gats).build());

    assert_eq!(store.len(), 1);
    assert_eq!(order.id, 1);
    assert_eq!(order.supervisor, "Ana");
    assert_eq!(order.area, Area::Gats);
    assert_eq!(order.status, OrderStatus::ToDo);
}

#[test]
fn test_delete_first_renumbers_survivor() {
    let mut store = OrderStore::new();
    store.create(OrderBuilder::new("A").build());
    store.create(OrderBuilder::new("B").build());

    assert_eq!(store.delete(1), StoreOutcome::Deleted);

    let remaining = store.list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 1);
    assert_eq!(remaining[0].supervisor, "B");
}

#[test]
fn test_update_then_count_by_status() {
    let mut store = OrderStore::new();
    store.create(OrderBuilder::new("A").build());
    store.create(OrderBuilder::new("B").build());

    assert_eq!(store.update_status(2, OrderStatus::Done), StoreOutcome::Updated);

    let counts = count_by_status(store.list());
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(OrderStatus::ToDo), 1);
    assert_eq!(counts.get(OrderStatus::Done), 1);
    assert_eq!(counts.get(OrderStatus::InProgress), 0);
}

#[test]
fn test_count_by_area_three_orders() {
    let store = store_with_areas(&[Area::Gats, Area::Ford, Area::Gats]);

    let counts = count_by_area(store.list());
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(Area::Gats), 2);
    assert_eq!(counts.get(Area::Ford), 1);
}

#[test]
fn test_ids_stay_contiguous_under_mixed_operations() {
    let mut store = OrderStore::new();
    // 线性同余序列,保证用例可复现
    let mut seed: u64 = 0x5eed;
    let mut next = move || {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (seed >> 33) as u32
    };

    for step in 0..300 {
        let roll = next() % 10;
        if roll < 6 || store.is_empty() {
            let area = Area::ALL[(next() % 3) as usize];
            store.create(OrderBuilder::new(&format!("S{}", step)).area(area).build());
        } else if roll < 8 {
            let id = next() % (store.len() as u32 + 2);
            store.delete(id);
        } else {
            let id = next() % (store.len() as u32 + 2);
            store.update_status(id, OrderStatus::ALL[(next() % 3) as usize]);
        }

        let expected: Vec<u32> = (1..=store.len() as u32).collect();
        assert_eq!(ids(&store), expected, "step {}", step);

        let orders = store.list();
        assert_eq!(count_by_status(orders).total(), orders.len());
        assert_eq!(count_by_area(orders).total(), orders.len());
    }
}

#[test]
fn test_list_is_idempotent() {
    let store = store_with_areas(&[Area::Epu4, Area::Ford]);

    let first = store.list().to_vec();
    let second = store.list().to_vec();
    assert_eq!(first, second);
}
