// ==========================================
// 筛选谓词引擎集成测试
// ==========================================
// 测试目标: 复合筛选条件的合取语义与占用者存在量词
// 覆盖范围: 基础/高级双通道、单元专属谓词、纯函数性质
// ==========================================

#[path = "helpers/test_data_builder.rs"]
mod test_data_builder;

use hajj_housing_admin::domain::pilgrim::Pilgrim;
use hajj_housing_admin::domain::types::{Gender, RoomGender, TentLocation};
use hajj_housing_admin::engine::filter::{AdvancedFilterField, FilterState, GenderFilter};
use hajj_housing_admin::engine::filter_units;
use test_data_builder::{PilgrimBuilder, RoomBuilder, TentBuilder};

// ==========================================
// 测试辅助函数
// ==========================================

fn no_roster() -> Vec<Pilgrim> {
    Vec::new()
}

fn ali() -> Pilgrim {
    PilgrimBuilder::new("P-ALI", "Ali")
        .gender(Gender::Male)
        .nationality("EG")
        .phone("+20-100-0000001")
        .passport("P11111111")
        .build()
}

fn sara() -> Pilgrim {
    PilgrimBuilder::new("P-SARA", "Sara")
        .gender(Gender::Female)
        .nationality("SA")
        .organizer("ORG-007")
        .passport("P22222222")
        .build()
}

// ==========================================
// 测试用例 1: 占用者存在量词 + 合取
// ==========================================

#[test]
fn test_existential_and_requires_single_occupant_to_match_all() {
    let ali = ali();
    let sara = sara();
    let rooms = vec![RoomBuilder::new("R1", "101")
        .occupant(&ali)
        .occupant(&sara)
        .build()];
    let roster = vec![ali, sara];

    // pilgrimName=Ali AND nationality=SA: 无单人同时满足 → 排除
    let mut state = FilterState::default()
        .enable(AdvancedFilterField::PilgrimName)
        .enable(AdvancedFilterField::Nationality);
    state.advanced.pilgrim_name = "Ali".to_string();
    state.advanced.nationality = "SA".to_string();
    assert!(filter_units(&rooms, &state, &roster).is_empty());

    // 仅 pilgrimName=Ali → 包含
    let mut state = FilterState::default().enable(AdvancedFilterField::PilgrimName);
    state.advanced.pilgrim_name = "Ali".to_string();
    assert_eq!(filter_units(&rooms, &state, &roster).len(), 1);

    // 仅 nationality=SA → 包含（Sara 满足）
    let mut state = FilterState::default().enable(AdvancedFilterField::Nationality);
    state.advanced.nationality = "SA".to_string();
    assert_eq!(filter_units(&rooms, &state, &roster).len(), 1);
}

#[test]
fn test_occupant_filters_exclude_units_with_unresolvable_occupants() {
    let ghost = PilgrimBuilder::new("GHOST", "Ghost").build();
    // 床位引用的 pilgrimId 不在名册内
    let rooms = vec![RoomBuilder::new("R1", "101").occupant(&ghost).build()];
    let roster: Vec<Pilgrim> = Vec::new();

    let mut state = FilterState::default().enable(AdvancedFilterField::PilgrimName);
    state.advanced.pilgrim_name = "Ghost".to_string();
    assert!(filter_units(&rooms, &state, &roster).is_empty());
}

#[test]
fn test_all_occupant_fields_participate_in_conjunction() {
    let ali = ali();
    let rooms = vec![RoomBuilder::new("R1", "101").occupant(&ali).build()];
    let roster = vec![ali];

    let mut state = FilterState::default()
        .enable(AdvancedFilterField::MobileNumber)
        .enable(AdvancedFilterField::PassportNumber);
    state.advanced.mobile_number = "100-0000001".to_string();
    state.advanced.passport_number = "P1111".to_string();
    assert_eq!(filter_units(&rooms, &state, &roster).len(), 1);

    // 护照子条件不满足 → 整组失败
    state.advanced.passport_number = "P9999".to_string();
    assert!(filter_units(&rooms, &state, &roster).is_empty());
}

// ==========================================
// 测试用例 2: 停用的筛选一律忽略
// ==========================================

#[test]
fn test_disabled_advanced_filter_ignored_regardless_of_value() {
    let rooms = vec![RoomBuilder::new("R1", "101").build()];
    let mut state = FilterState::default();
    // 值填了但未启用
    state.advanced.pilgrim_name = "nobody".to_string();
    state.advanced.room_number = "999".to_string();

    assert_eq!(filter_units(&rooms, &state, &no_roster()).len(), 1);
}

// ==========================================
// 测试用例 3: 编号双通道
// ==========================================

#[test]
fn test_basic_and_advanced_room_number_both_must_pass() {
    let rooms = vec![
        RoomBuilder::new("R1", "101").build(),
        RoomBuilder::new("R2", "201").build(),
    ];
    let mut state = FilterState {
        search_term: "01".to_string(), // 两间都含
        ..Default::default()
    };
    state = state.enable(AdvancedFilterField::RoomNumber);
    state.advanced.room_number = "2".to_string(); // 只有 201 含

    let result = filter_units(&rooms, &state, &no_roster());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].room_number, "201");
}

// ==========================================
// 测试用例 4: 单元专属谓词
// ==========================================

#[test]
fn test_floor_equality_applies_to_rooms() {
    let rooms = vec![
        RoomBuilder::new("R1", "101").floor(1).build(),
        RoomBuilder::new("R2", "201").floor(2).build(),
    ];
    let state = FilterState {
        floor: Some(2),
        ..Default::default()
    };
    let result = filter_units(&rooms, &state, &no_roster());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].room_number, "201");
}

#[test]
fn test_section_equality_applies_to_tents() {
    let tents = vec![
        TentBuilder::new("T1", "M-001").section("A").build(),
        TentBuilder::new("T2", "M-002").section("B").build(),
    ];
    let state = FilterState {
        section: Some("b".to_string()), // 不区分大小写
        ..Default::default()
    };
    let result = filter_units(&tents, &state, &no_roster());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].tent_number, "M-002");
}

#[test]
fn test_tent_capacity_range() {
    let tents = vec![
        TentBuilder::new("T1", "M-001").total_beds(10).build(),
        TentBuilder::new("T2", "M-002").total_beds(30).build(),
        TentBuilder::new("T3", "M-003").total_beds(50).build(),
    ];
    let state = FilterState {
        min_capacity: Some(20),
        max_capacity: Some(40),
        ..Default::default()
    };
    let result = filter_units(&tents, &state, &no_roster());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].tent_number, "M-002");

    // 矛盾区间: 空集而非报错
    let state = FilterState {
        min_capacity: Some(40),
        max_capacity: Some(20),
        ..Default::default()
    };
    assert!(filter_units(&tents, &state, &no_roster()).is_empty());
}

// ==========================================
// 测试用例 5: 仅空单元与性别
// ==========================================

#[test]
fn test_empty_only_returns_only_empty_units() {
    let ali = ali();
    let full = RoomBuilder::new("R1", "101")
        .total_beds(2)
        .occupant(&ali)
        .occupant(&sara())
        .build();
    let empty = RoomBuilder::new("R2", "102").total_beds(2).build();

    let rooms = vec![full, empty];
    let state = FilterState {
        empty_only: true,
        ..Default::default()
    };
    let result = filter_units(&rooms, &state, &no_roster());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].room_number, "102");
}

#[test]
fn test_mixed_room_passes_any_gender_filter() {
    let rooms = vec![RoomBuilder::new("R1", "101").gender(RoomGender::Mixed).build()];
    for gender in [GenderFilter::Male, GenderFilter::Female, GenderFilter::Mixed] {
        let state = FilterState {
            gender,
            ..Default::default()
        };
        assert_eq!(filter_units(&rooms, &state, &no_roster()).len(), 1);
    }
}

#[test]
fn test_tent_gender_uses_occupant_snapshot() {
    let ali = ali();
    let sara = sara();
    let tents = vec![
        TentBuilder::new("T1", "M-001").occupant(&ali).build(),
        TentBuilder::new("T2", "M-002").occupant(&ali).occupant(&sara).build(),
        TentBuilder::new("T3", "A-001").location(TentLocation::Arafat).build(),
    ];

    let state = FilterState {
        gender: GenderFilter::Mixed,
        ..Default::default()
    };
    let result = filter_units(&tents, &state, &no_roster());
    // 男女同在的帐篷 + 空帐篷
    let numbers: Vec<&str> = result.iter().map(|t| t.tent_number.as_str()).collect();
    assert_eq!(numbers, vec!["M-002", "A-001"]);
}

// ==========================================
// 测试用例 6: 纯函数性质
// ==========================================

#[test]
fn test_filter_units_idempotent_and_order_preserving() {
    let rooms = vec![
        RoomBuilder::new("R3", "303").build(),
        RoomBuilder::new("R1", "101").build(),
        RoomBuilder::new("R2", "202").build(),
    ];
    let state = FilterState {
        search_term: "0".to_string(),
        ..Default::default()
    };

    let run = || -> Vec<String> {
        filter_units(&rooms, &state, &no_roster())
            .iter()
            .map(|r| r.room_number.clone())
            .collect()
    };
    assert_eq!(run(), run());
    assert_eq!(run(), vec!["303", "101", "202"]);
}

#[test]
fn test_enabling_filters_never_grows_result() {
    let ali = ali();
    let sara = sara();
    let rooms = vec![
        RoomBuilder::new("R1", "101").occupant(&ali).build(),
        RoomBuilder::new("R2", "102").occupant(&sara).build(),
        RoomBuilder::new("R3", "103").build(),
    ];
    let roster = vec![ali, sara];

    let mut state = FilterState::default();
    let mut previous = filter_units(&rooms, &state, &roster).len();

    for field in [
        AdvancedFilterField::PilgrimName,
        AdvancedFilterField::Nationality,
        AdvancedFilterField::PassportNumber,
    ] {
        state = state.enable(field);
        let current = filter_units(&rooms, &state, &roster).len();
        assert!(current <= previous, "启用 {:?} 后结果集变大", field);
        previous = current;
    }
}
