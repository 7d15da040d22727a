// ==========================================
// 库存模型与汇总统计集成测试
// ==========================================
// 测试目标: 床位规整化契约与汇总恒等式
// ==========================================

#[path = "helpers/test_data_builder.rs"]
mod test_data_builder;

use hajj_housing_admin::engine::aggregate::aggregate;
use hajj_housing_admin::engine::inventory::{available_count, normalized_beds, occupied_count};
use test_data_builder::{PilgrimBuilder, RoomBuilder, TentBuilder};

#[test]
fn test_normalized_length_equals_total_beds_for_any_stored_length() {
    for stored in [0usize, 1, 3, 10, 15] {
        let tent = TentBuilder::new("T1", "M-001")
            .total_beds(10)
            .stored_beds(stored)
            .build();
        let beds = normalized_beds(&tent);
        assert_eq!(beds.len(), 10, "stored={}", stored);
    }
}

#[test]
fn test_padded_beds_are_empty_with_synthetic_ids() {
    let room = RoomBuilder::new("R1", "101")
        .total_beds(4)
        .stored_beds(1)
        .build();
    let beds = normalized_beds(&room);

    assert_eq!(beds[0].id, "R1-bed-1"); // 存量床保留
    for bed in &beds[1..] {
        assert!(!bed.occupied);
        assert!(bed.pilgrim_name.is_none());
    }
    assert_eq!(beds[3].id, "R1-bed-4");
}

#[test]
fn test_occupied_count_bounded_by_total() {
    let p = PilgrimBuilder::new("P1", "Ahmad").build();
    // 容量 2, 存了 3 张床且全占用: 计数按截断口径封顶
    let room = RoomBuilder::new("R1", "101")
        .total_beds(2)
        .stored_beds(3)
        .occupant(&p)
        .occupant(&p)
        .occupant(&p)
        .build();

    assert_eq!(occupied_count(&room), 2);
    assert_eq!(available_count(&room), 0);
}

#[test]
fn test_short_stored_tent_aggregates_correctly() {
    let p1 = PilgrimBuilder::new("P1", "Ahmad").build();
    let p2 = PilgrimBuilder::new("P2", "Omar").build();
    let p3 = PilgrimBuilder::new("P3", "Bilal").build();

    // 帐篷容量 10, 只存了 3 张占用床
    let tent = TentBuilder::new("T1", "M-001")
        .total_beds(10)
        .stored_beds(3)
        .occupant(&p1)
        .occupant(&p2)
        .occupant(&p3)
        .build();

    assert_eq!(occupied_count(&tent), 3);
    assert_eq!(available_count(&tent), 7);

    let summary = aggregate(std::iter::once(&tent));
    assert_eq!(summary.total_beds, 10);
    assert_eq!(summary.occupied_beds, 3);
    assert_eq!(summary.available_beds, 7);
    assert_eq!(
        summary.occupied_beds + summary.available_beds,
        summary.total_beds
    );
}
