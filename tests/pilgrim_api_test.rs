// ==========================================
// 朝觐者名册 API 集成测试
// ==========================================
// 测试目标: 名册增删改规则与未分配查询
// ==========================================


use hajj_housing_admin::api::{ApiError, CreatePilgrimRequest, CreateTentRequest};
use hajj_housing_admin::domain::types::{Gender, TentLocation};
use test_helpers::create_test_state;

// ==========================================
// 测试辅助函数
// ==========================================

fn request(name: &str, gender: Gender) -> CreatePilgrimRequest {
    CreatePilgrimRequest {
        name: name.to_string(),
        gender,
        age: 35,
        nationality: "EG".to_string(),
        phone: None,
        email: None,
        organizer: None,
        group: None,
        passport_number: None,
        visa_number: None,
    }
}

// ==========================================
// 测试用例 1: 未分配查询
// ==========================================

#[test]
fn test_search_unassigned_matches_name_phone_email() {
    let (_dir, state) = create_test_state();

    let mut ahmad = request("Ahmad Hassan", Gender::Male);
    ahmad.phone = Some("+20-100-555-0199".to_string());
    state.pilgrim_api.create_pilgrim(ahmad).unwrap();

    let mut sara = request("Sara Khan", Gender::Female);
    sara.email = Some("sara.k@example.org".to_string());
    state.pilgrim_api.create_pilgrim(sara).unwrap();

    // 无条件: 两人都未分配
    assert_eq!(state.pilgrim_api.search_unassigned(None).unwrap().len(), 2);

    // 姓名匹配
    let hit = state.pilgrim_api.search_unassigned(Some("hassan")).unwrap();
    assert_eq!(hit.len(), 1);
    assert_eq!(hit[0].name, "Ahmad Hassan");

    // 电话匹配
    assert_eq!(
        state
            .pilgrim_api
            .search_unassigned(Some("555-0199"))
            .unwrap()
            .len(),
        1
    );

    // 邮箱匹配
    assert_eq!(
        state
            .pilgrim_api
            .search_unassigned(Some("SARA.K@"))
            .unwrap()
            .len(),
        1
    );

    // 未命中
    assert!(state
        .pilgrim_api
        .search_unassigned(Some("yusuf"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_assigned_pilgrims_leave_unassigned_query() {
    let (_dir, state) = create_test_state();

    let tent = state
        .tent_api
        .create_tent(CreateTentRequest {
            tent_number: "M-001".to_string(),
            total_beds: 10,
            location: TentLocation::Mina,
            section: Some("A".to_string()),
        })
        .unwrap();
    let pilgrim = state
        .pilgrim_api
        .create_pilgrim(request("Ahmad Hassan", Gender::Male))
        .unwrap();

    state
        .tent_api
        .assign_bed(&tent.id, &tent.beds[0].id, &pilgrim.id)
        .unwrap();
    assert!(state.pilgrim_api.search_unassigned(None).unwrap().is_empty());

    // 解绑后重新出现（查询每次重新求值）
    state.pilgrim_api.unassign(&pilgrim.id).unwrap();
    assert_eq!(state.pilgrim_api.search_unassigned(None).unwrap().len(), 1);
}

// ==========================================
// 测试用例 2: 编辑与删除规则
// ==========================================

#[test]
fn test_update_preserves_assignment_refs() {
    let (_dir, state) = create_test_state();

    let tent = state
        .tent_api
        .create_tent(CreateTentRequest {
            tent_number: "M-001".to_string(),
            total_beds: 12,
            location: TentLocation::Mina,
            section: None,
        })
        .unwrap();
    let created = state
        .pilgrim_api
        .create_pilgrim(request("Ahmad Hassan", Gender::Male))
        .unwrap();
    state
        .tent_api
        .assign_bed(&tent.id, &tent.beds[0].id, &created.id)
        .unwrap();

    // 编辑提交里清空了分配引用: 以库内为准,不得丢失
    let mut edited = state.pilgrim_api.get_pilgrim(&created.id).unwrap();
    edited.name = "Ahmad H. Hassan".to_string();
    edited.assigned_tent = None;
    let updated = state.pilgrim_api.update_pilgrim(edited).unwrap();

    assert_eq!(updated.name, "Ahmad H. Hassan");
    assert!(updated.assigned_tent.is_some());
}

#[test]
fn test_delete_rules() {
    let (_dir, state) = create_test_state();

    let tent = state
        .tent_api
        .create_tent(CreateTentRequest {
            tent_number: "A-001".to_string(),
            total_beds: 10,
            location: TentLocation::Arafat,
            section: None,
        })
        .unwrap();
    let assigned = state
        .pilgrim_api
        .create_pilgrim(request("Ahmad Hassan", Gender::Male))
        .unwrap();
    let free = state
        .pilgrim_api
        .create_pilgrim(request("Omar Khan", Gender::Male))
        .unwrap();
    state
        .tent_api
        .assign_bed(&tent.id, &tent.beds[0].id, &assigned.id)
        .unwrap();

    // 已分配: 拒绝删除
    assert!(matches!(
        state.pilgrim_api.delete_pilgrim(&assigned.id),
        Err(ApiError::BusinessRule(_))
    ));

    // 未分配: 删除成功
    state.pilgrim_api.delete_pilgrim(&free.id).unwrap();
    assert!(matches!(
        state.pilgrim_api.get_pilgrim(&free.id),
        Err(ApiError::NotFound(_))
    ));

    // 解绑后可删
    state.pilgrim_api.unassign(&assigned.id).unwrap();
    state.pilgrim_api.delete_pilgrim(&assigned.id).unwrap();
}

#[test]
fn test_create_validation() {
    let (_dir, state) = create_test_state();

    let result = state.pilgrim_api.create_pilgrim(request("  ", Gender::Male));
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));

    let mut bad = request("Ahmad", Gender::Male);
    bad.nationality = "".to_string();
    assert!(matches!(
        state.pilgrim_api.create_pilgrim(bad),
        Err(ApiError::InvalidInput(_))
    ));
}
