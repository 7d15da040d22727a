// ==========================================
// 朝觐住宿管理系统 - 库存模型
// ==========================================
// 职责: 住宿单元统一抽象、床位规整化、占用计数
// 红线: 无状态、无副作用（规整化返回新序列,不改原记录）
// ==========================================
// 床位规整化契约: 调用方不得假设 beds.len() == totalBeds,
// 必须经 normalized_beds 补齐;超出 totalBeds 的存量脏数据
// 按截断处理（可恢复,记告警日志）
// ==========================================

use crate::domain::housing::{Bed, Room};
use crate::domain::pilgrim::Pilgrim;
use crate::domain::tent::Tent;
use crate::domain::types::{RoomGender, UnitKind};
use crate::repository::pilgrim_repo::PilgrimRepository;
use std::collections::HashMap;
use tracing::warn;

// ==========================================
// HousingUnit - 住宿单元统一抽象
// ==========================================
/// 住宿单元（房间/帐篷）的统一读取接口
///
/// 筛选引擎与汇总统计只通过该接口访问单元,
/// 单元专属字段（性别/楼层/分区）以 Option 暴露
pub trait HousingUnit {
    fn unit_id(&self) -> &str;
    fn unit_number(&self) -> &str;
    fn kind(&self) -> UnitKind;
    fn total_beds(&self) -> usize;
    fn raw_beds(&self) -> &[Bed];

    /// 房间性别属性（帐篷无此字段）
    fn gender(&self) -> Option<RoomGender> {
        None
    }

    /// 楼层（房间专属）
    fn floor(&self) -> Option<i32> {
        None
    }

    /// 营地分区（帐篷专属）
    fn section(&self) -> Option<&str> {
        None
    }
}

impl HousingUnit for Room {
    fn unit_id(&self) -> &str {
        &self.id
    }

    fn unit_number(&self) -> &str {
        &self.room_number
    }

    fn kind(&self) -> UnitKind {
        UnitKind::Room
    }

    fn total_beds(&self) -> usize {
        self.total_beds as usize
    }

    fn raw_beds(&self) -> &[Bed] {
        &self.beds
    }

    fn gender(&self) -> Option<RoomGender> {
        Some(self.gender)
    }

    fn floor(&self) -> Option<i32> {
        self.floor
    }
}

impl HousingUnit for Tent {
    fn unit_id(&self) -> &str {
        &self.id
    }

    fn unit_number(&self) -> &str {
        &self.tent_number
    }

    fn kind(&self) -> UnitKind {
        UnitKind::Tent
    }

    fn total_beds(&self) -> usize {
        self.total_beds as usize
    }

    fn raw_beds(&self) -> &[Bed] {
        &self.beds
    }

    fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

// ==========================================
// 床位规整化
// ==========================================

/// 合成补位床位的 ID
///
/// 与前端补位口径一致: {unitId}-bed-{序号}
pub fn synthetic_bed_id(unit_id: &str, index: usize) -> String {
    format!("{}-bed-{}", unit_id, index + 1)
}

/// 规整化后的床位序列
///
/// # 契约
/// - 返回序列长度恒等于 totalBeds
/// - 存储序列偏短: 以空床补齐（合成 ID）
/// - 存储序列偏长: 截断并记告警（可恢复的脏数据）
pub fn normalized_beds(unit: &impl HousingUnit) -> Vec<Bed> {
    let total = unit.total_beds();
    let raw = unit.raw_beds();

    if raw.len() > total {
        warn!(
            unit_id = unit.unit_id(),
            stored = raw.len(),
            total_beds = total,
            "床位数超出单元容量,超出部分截断"
        );
    }

    let mut beds: Vec<Bed> = raw.iter().take(total).cloned().collect();
    for index in beds.len()..total {
        beds.push(Bed::empty(synthetic_bed_id(unit.unit_id(), index)));
    }
    beds
}

/// 已占用床位数（截断口径,恒 <= totalBeds）
pub fn occupied_count(unit: &impl HousingUnit) -> usize {
    unit.raw_beds()
        .iter()
        .take(unit.total_beds())
        .filter(|b| b.occupied)
        .count()
}

/// 空余床位数
pub fn available_count(unit: &impl HousingUnit) -> usize {
    unit.total_beds() - occupied_count(unit)
}

// ==========================================
// PilgrimLookup - 名册查找接口
// ==========================================
/// 占用者解析所需的名册查找接口
///
/// 筛选引擎按床位上的 pilgrimId 解析占用者;
/// 查不到的 ID 仅计入占用数,不贡献占用者属性
pub trait PilgrimLookup {
    fn lookup(&self, pilgrim_id: &str) -> Option<Pilgrim>;
}

impl PilgrimLookup for HashMap<String, Pilgrim> {
    fn lookup(&self, pilgrim_id: &str) -> Option<Pilgrim> {
        self.get(pilgrim_id).cloned()
    }
}

impl PilgrimLookup for [Pilgrim] {
    fn lookup(&self, pilgrim_id: &str) -> Option<Pilgrim> {
        self.iter().find(|p| p.id == pilgrim_id).cloned()
    }
}

impl PilgrimLookup for Vec<Pilgrim> {
    fn lookup(&self, pilgrim_id: &str) -> Option<Pilgrim> {
        self.as_slice().lookup(pilgrim_id)
    }
}

impl PilgrimLookup for PilgrimRepository {
    fn lookup(&self, pilgrim_id: &str) -> Option<Pilgrim> {
        self.find_by_id(pilgrim_id).ok().flatten()
    }
}

/// 解析单元的占用者集合
///
/// 仅返回 occupied 且 pilgrimId 可在名册解析的占用者,
/// 顺序与床位顺序一致
pub fn resolved_occupants(unit: &impl HousingUnit, pilgrims: &impl PilgrimLookup) -> Vec<Pilgrim> {
    unit.raw_beds()
        .iter()
        .take(unit.total_beds())
        .filter(|b| b.occupied)
        .filter_map(|b| b.pilgrim_id.as_deref())
        .filter_map(|id| pilgrims.lookup(id))
        .collect()
}
