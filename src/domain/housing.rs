// ==========================================
// 朝觐住宿管理系统 - 住宿领域模型
// ==========================================
// 职责: 床位/房间/酒店/楼栋实体定义
// 红线: 不含数据访问逻辑,不含引擎逻辑
// 对齐: 前端 localStorage 记录结构 (camelCase)
// ==========================================

use crate::domain::pilgrim::Pilgrim;
use crate::domain::types::{Gender, RoomGender};
use serde::{Deserialize, Serialize};

// ==========================================
// Bed - 床位
// ==========================================
// 不变量: occupied=false 时占用者字段全为空;
//         occupied=true 时至少 pilgrim_name 有值
// 约定: 历史记录可能缺少 pilgrim_id/pilgrim_gender,
//       此时仅计入占用数,不参与占用者属性筛选
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bed {
    pub id: String,
    pub occupied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilgrim_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilgrim_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilgrim_gender: Option<Gender>,
}

impl Bed {
    /// 创建空床位
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            occupied: false,
            pilgrim_id: None,
            pilgrim_name: None,
            pilgrim_gender: None,
        }
    }

    /// 占用床位（从朝觐者记录复制快照字段）
    pub fn occupy(&mut self, pilgrim: &Pilgrim) {
        self.occupied = true;
        self.pilgrim_id = Some(pilgrim.id.clone());
        self.pilgrim_name = Some(pilgrim.name.clone());
        self.pilgrim_gender = Some(pilgrim.gender);
    }

    /// 释放床位（清空全部占用者字段）
    pub fn vacate(&mut self) {
        self.occupied = false;
        self.pilgrim_id = None;
        self.pilgrim_name = None;
        self.pilgrim_gender = None;
    }

    /// 是否被指定朝觐者占用
    pub fn occupied_by(&self, pilgrim_id: &str) -> bool {
        self.occupied && self.pilgrim_id.as_deref() == Some(pilgrim_id)
    }
}

// ==========================================
// Room - 房间
// ==========================================
// 容量范围: 2-4 床
// parent_id: 所属酒店或楼栋 ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub room_number: String,
    pub total_beds: u32,
    pub beds: Vec<Bed>,
    pub gender: RoomGender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    pub parent_id: String,
}

/// 房间容量下限
pub const ROOM_MIN_BEDS: u32 = 2;
/// 房间容量上限
pub const ROOM_MAX_BEDS: u32 = 4;

// ==========================================
// Hotel - 酒店
// ==========================================
// 容器实体: totalCapacity/occupiedCapacity 由成员房间派生
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u8>,
    pub rooms: Vec<Room>,
}

impl Hotel {
    /// 总床位容量（成员房间 totalBeds 之和）
    pub fn total_capacity(&self) -> usize {
        rooms_total_capacity(&self.rooms)
    }

    /// 已占用床位数
    pub fn occupied_capacity(&self) -> usize {
        rooms_occupied_capacity(&self.rooms)
    }
}

// ==========================================
// Building - 楼栋
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
    pub rooms: Vec<Room>,
}

impl Building {
    /// 总床位容量
    pub fn total_capacity(&self) -> usize {
        rooms_total_capacity(&self.rooms)
    }

    /// 已占用床位数
    pub fn occupied_capacity(&self) -> usize {
        rooms_occupied_capacity(&self.rooms)
    }
}

/// 房间集合的总容量
fn rooms_total_capacity(rooms: &[Room]) -> usize {
    rooms.iter().map(|r| r.total_beds as usize).sum()
}

/// 房间集合的已占用床位数
///
/// 超出 totalBeds 的存量脏数据不计入（与筛选引擎的截断口径一致）
fn rooms_occupied_capacity(rooms: &[Room]) -> usize {
    rooms
        .iter()
        .map(|r| {
            r.beds
                .iter()
                .take(r.total_beds as usize)
                .filter(|b| b.occupied)
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Gender;

    fn pilgrim(id: &str, name: &str) -> Pilgrim {
        Pilgrim::new(id, name, Gender::Male, 40, "SA")
    }

    #[test]
    fn test_bed_occupy_and_vacate() {
        let mut bed = Bed::empty("B1");
        assert!(!bed.occupied);
        assert!(bed.pilgrim_name.is_none());

        let p = pilgrim("P1", "Ahmad");
        bed.occupy(&p);
        assert!(bed.occupied);
        assert_eq!(bed.pilgrim_id.as_deref(), Some("P1"));
        assert_eq!(bed.pilgrim_name.as_deref(), Some("Ahmad"));
        assert_eq!(bed.pilgrim_gender, Some(Gender::Male));
        assert!(bed.occupied_by("P1"));
        assert!(!bed.occupied_by("P2"));

        bed.vacate();
        assert!(!bed.occupied);
        assert!(bed.pilgrim_id.is_none());
        assert!(bed.pilgrim_name.is_none());
        assert!(bed.pilgrim_gender.is_none());
    }

    #[test]
    fn test_hotel_capacity_counts_cap_at_total_beds() {
        let p = pilgrim("P1", "Ahmad");
        let mut beds = vec![Bed::empty("B1"), Bed::empty("B2"), Bed::empty("B3")];
        beds[0].occupy(&p);
        beds[2].occupy(&p);

        // totalBeds=2 但存了 3 张床: 第 3 张不计入
        let room = Room {
            id: "R1".to_string(),
            room_number: "101".to_string(),
            total_beds: 2,
            beds,
            gender: RoomGender::Male,
            floor: Some(1),
            parent_id: "H1".to_string(),
        };
        let hotel = Hotel {
            id: "H1".to_string(),
            name: "测试酒店".to_string(),
            stars: Some(4),
            rooms: vec![room],
        };

        assert_eq!(hotel.total_capacity(), 2);
        assert_eq!(hotel.occupied_capacity(), 1);
    }
}
