// ==========================================
// 朝觐住宿管理系统 - 筛选谓词引擎
// ==========================================
// 职责: 对单个住宿单元求值复合筛选条件
// 红线: 纯函数、全函数（任何筛选状态都不报错,矛盾条件得空集）
// ==========================================
// 求值口径:
// - 全部启用的谓词按合取（AND）组合
// - 占用者属性组为存在量词+合取: 须有某一个占用者
//   同时满足全部启用的占用者子条件
// - 停用的高级筛选无论取值一律忽略;启用但值为空视为恒真
// ==========================================

use crate::domain::pilgrim::Pilgrim;
use crate::domain::types::{Gender, RoomGender, UnitKind};
use crate::engine::inventory::{occupied_count, resolved_occupants, HousingUnit, PilgrimLookup};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// GenderFilter - 性别筛选取值
// ==========================================
// 房间: 与房间性别属性比对, mixed 房间恒通过
// 帐篷: 无性别字段,按占用者性别判定（空帐篷恒通过）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
    Mixed,
}

// ==========================================
// AdvancedFilterField - 高级筛选字段
// ==========================================
// 每个字段可独立启用/停用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdvancedFilterField {
    PilgrimName,
    RoomNumber,
    Nationality,
    PassportNumber,
    OrganizerNumber,
    MobileNumber,
    VisaNumber,
}

/// 占用者属性类的高级筛选字段（roomNumber 针对单元编号,不在此列）
const OCCUPANT_FIELDS: [AdvancedFilterField; 6] = [
    AdvancedFilterField::PilgrimName,
    AdvancedFilterField::Nationality,
    AdvancedFilterField::PassportNumber,
    AdvancedFilterField::OrganizerNumber,
    AdvancedFilterField::MobileNumber,
    AdvancedFilterField::VisaNumber,
];

// ==========================================
// AdvancedFilterValues - 高级筛选取值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedFilterValues {
    pub pilgrim_name: String,
    pub room_number: String,
    pub nationality: String, // "all" 为通配（对齐前端下拉框）
    pub passport_number: String,
    pub organizer_number: String,
    pub mobile_number: String,
    pub visa_number: String,
}

impl Default for AdvancedFilterValues {
    fn default() -> Self {
        Self {
            pilgrim_name: String::new(),
            room_number: String::new(),
            nationality: "all".to_string(),
            passport_number: String::new(),
            organizer_number: String::new(),
            mobile_number: String::new(),
            visa_number: String::new(),
        }
    }
}

// ==========================================
// FilterState - 筛选状态
// ==========================================
// 全字段可缺省;缺省值等价于"不筛选"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    // ===== 基础筛选 =====
    pub search_term: String,
    pub gender: GenderFilter,
    pub capacity: Option<u32>, // None = all（房间床位数精确匹配）
    pub empty_only: bool,

    // ===== 单元专属筛选 =====
    pub floor: Option<i32>,          // 房间楼层等值
    pub section: Option<String>,     // 帐篷分区等值
    pub min_capacity: Option<u32>,   // 帐篷容量下限
    pub max_capacity: Option<u32>,   // 帐篷容量上限

    // ===== 高级筛选 =====
    pub enabled_advanced_filters: HashSet<AdvancedFilterField>,
    pub advanced: AdvancedFilterValues,
}

impl FilterState {
    /// 指定高级筛选字段是否启用
    pub fn is_enabled(&self, field: AdvancedFilterField) -> bool {
        self.enabled_advanced_filters.contains(&field)
    }

    /// 启用高级筛选字段（便于链式构造）
    pub fn enable(mut self, field: AdvancedFilterField) -> Self {
        self.enabled_advanced_filters.insert(field);
        self
    }

    /// 是否存在已启用的占用者属性筛选
    fn has_occupant_filters(&self) -> bool {
        OCCUPANT_FIELDS.iter().any(|f| self.is_enabled(*f))
    }

    /// 单个占用者是否同时满足全部启用的占用者子条件
    fn occupant_matches(&self, pilgrim: &Pilgrim) -> bool {
        if self.is_enabled(AdvancedFilterField::PilgrimName)
            && !contains_ci(&pilgrim.name, &self.advanced.pilgrim_name)
        {
            return false;
        }
        if self.is_enabled(AdvancedFilterField::Nationality)
            && !nationality_matches(&pilgrim.nationality, &self.advanced.nationality)
        {
            return false;
        }
        if self.is_enabled(AdvancedFilterField::PassportNumber)
            && !opt_contains_ci(pilgrim.passport_number.as_deref(), &self.advanced.passport_number)
        {
            return false;
        }
        if self.is_enabled(AdvancedFilterField::OrganizerNumber)
            && !opt_contains_ci(pilgrim.organizer.as_deref(), &self.advanced.organizer_number)
        {
            return false;
        }
        if self.is_enabled(AdvancedFilterField::MobileNumber)
            && !opt_contains_ci(pilgrim.phone.as_deref(), &self.advanced.mobile_number)
        {
            return false;
        }
        if self.is_enabled(AdvancedFilterField::VisaNumber)
            && !opt_contains_ci(pilgrim.visa_number.as_deref(), &self.advanced.visa_number)
        {
            return false;
        }
        true
    }
}

// ==========================================
// 字符串匹配工具
// ==========================================

/// 子串匹配,不区分大小写;空白条件视为恒真
fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Option 字段的子串匹配: 条件为空恒真,字段缺失恒假
fn opt_contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    match haystack {
        Some(value) => contains_ci(value, needle),
        None => false,
    }
}

/// 国籍匹配: "all" 通配,否则不区分大小写等值
fn nationality_matches(nationality: &str, filter_value: &str) -> bool {
    let filter_value = filter_value.trim();
    if filter_value.is_empty() || filter_value.eq_ignore_ascii_case("all") {
        return true;
    }
    nationality.to_lowercase() == filter_value.to_lowercase()
}

// ==========================================
// 单元谓词求值
// ==========================================

/// 单个住宿单元是否通过筛选
///
/// # 规则（全部合取,逐条短路）
/// 1. 基础编号搜索: 单元编号子串匹配
/// 2. 高级房号筛选: 与基础搜索双通道并存,启用时须同时通过
/// 3. 占用者属性组: 存在量词+合取;无可解析占用者时,
///    只要启用了任一占用者属性筛选即排除该单元
/// 4. 楼层（房间）/分区（帐篷）等值
/// 5. 容量范围（帐篷）: totalBeds ∈ [min, max]
/// 6. 仅空单元: 占用数为 0
/// 7. 性别: 房间按性别属性（mixed 恒通过）,帐篷按占用者性别
/// 8. 容量精确匹配（房间）
pub fn matches_unit<U: HousingUnit>(
    unit: &U,
    state: &FilterState,
    pilgrims: &impl PilgrimLookup,
) -> bool {
    // 规则 1: 基础编号搜索
    if !contains_ci(unit.unit_number(), &state.search_term) {
        return false;
    }

    // 规则 2: 高级房号筛选（双通道）
    if state.is_enabled(AdvancedFilterField::RoomNumber)
        && !contains_ci(unit.unit_number(), &state.advanced.room_number)
    {
        return false;
    }

    // 规则 3: 占用者属性组（存在量词 + 合取）
    if state.has_occupant_filters() {
        let occupants = resolved_occupants(unit, pilgrims);
        if occupants.is_empty() {
            return false;
        }
        if !occupants.iter().any(|p| state.occupant_matches(p)) {
            return false;
        }
    }

    // 规则 4: 楼层/分区等值（仅对持有对应字段的单元类型生效）
    match unit.kind() {
        UnitKind::Room => {
            if let Some(floor) = state.floor {
                if unit.floor() != Some(floor) {
                    return false;
                }
            }
        }
        UnitKind::Tent => {
            if let Some(section) = state.section.as_deref() {
                let wanted = section.trim();
                if !wanted.is_empty() && !wanted.eq_ignore_ascii_case("all") {
                    match unit.section() {
                        Some(actual) if actual.eq_ignore_ascii_case(wanted) => {}
                        _ => return false,
                    }
                }
            }
        }
    }

    // 规则 5: 容量范围（帐篷）
    if unit.kind() == UnitKind::Tent {
        if let Some(min) = state.min_capacity {
            if (unit.total_beds() as u32) < min {
                return false;
            }
        }
        if let Some(max) = state.max_capacity {
            if (unit.total_beds() as u32) > max {
                return false;
            }
        }
    }

    // 规则 6: 仅空单元
    if state.empty_only && occupied_count(unit) != 0 {
        return false;
    }

    // 规则 7: 性别
    if !gender_matches(unit, state.gender) {
        return false;
    }

    // 规则 8: 容量精确匹配（房间）
    if unit.kind() == UnitKind::Room {
        if let Some(capacity) = state.capacity {
            if unit.total_beds() as u32 != capacity {
                return false;
            }
        }
    }

    true
}

/// 性别谓词
///
/// 房间: 筛选值等于房间性别,或房间为 mixed,或筛选为 all
/// 帐篷: 空帐篷恒通过;否则按占用床位上的性别快照判定
///       （mixed 要求男女占用者同时在场）
fn gender_matches<U: HousingUnit>(unit: &U, filter: GenderFilter) -> bool {
    if filter == GenderFilter::All {
        return true;
    }

    match unit.gender() {
        // 房间: 有性别属性
        Some(room_gender) => {
            if room_gender == RoomGender::Mixed {
                return true;
            }
            match filter {
                GenderFilter::Male => room_gender == RoomGender::Male,
                GenderFilter::Female => room_gender == RoomGender::Female,
                GenderFilter::Mixed => false, // mixed 已在上方通过
                GenderFilter::All => true,
            }
        }
        // 帐篷: 按占用者性别判定
        None => {
            if occupied_count(unit) == 0 {
                return true;
            }
            let genders: Vec<Gender> = unit
                .raw_beds()
                .iter()
                .take(unit.total_beds())
                .filter(|b| b.occupied)
                .filter_map(|b| b.pilgrim_gender)
                .collect();
            match filter {
                GenderFilter::Male => genders.contains(&Gender::Male),
                GenderFilter::Female => genders.contains(&Gender::Female),
                GenderFilter::Mixed => {
                    genders.contains(&Gender::Male) && genders.contains(&Gender::Female)
                }
                GenderFilter::All => true,
            }
        }
    }
}

/// 筛选单元集合
///
/// 纯函数: 不改输入,保持原始顺序,可在每次状态变更时安全重算
pub fn filter_units<'a, U: HousingUnit>(
    units: &'a [U],
    state: &FilterState,
    pilgrims: &impl PilgrimLookup,
) -> Vec<&'a U> {
    units
        .iter()
        .filter(|unit| matches_unit(*unit, state, pilgrims))
        .collect()
}
