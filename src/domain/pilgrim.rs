// ==========================================
// 朝觐住宿管理系统 - 朝觐者领域模型
// ==========================================
// 职责: 朝觐者主记录与分配引用定义
// 不变量: assignedRoom 与 assignedTent 至多一个有值,
//         且所指床位的 pilgrimId 与本记录 id 一致
// ==========================================

use crate::domain::types::{Gender, HousingKind, TentLocation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RoomAssignment - 房间分配引用
// ==========================================
// 反向链接: 由分配引擎与床位同步写入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAssignment {
    pub housing_type: HousingKind, // hotel | building
    pub parent_id: String,         // 酒店/楼栋 ID
    pub room_id: String,
    pub room_number: String,
    pub bed_id: String,
}

// ==========================================
// TentAssignment - 帐篷分配引用
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TentAssignment {
    pub location: TentLocation,
    pub tent_id: String,
    pub tent_number: String,
    pub bed_id: String,
}

// ==========================================
// Pilgrim - 朝觐者主记录
// ==========================================
// 用途: 名册导入/手工录入写入,分配引擎更新反向链接
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pilgrim {
    // ===== 主键 =====
    pub id: String,

    // ===== 基础信息 =====
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub nationality: String, // ISO 国家码或国家名（名册口径）

    // ===== 联系方式 =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    // ===== 团组信息 =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>, // 组织者编号
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>, // 团组名称

    // ===== 证件信息 =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_number: Option<String>,

    // ===== 分配引用（反向链接）=====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_room: Option<RoomAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_tent: Option<TentAssignment>,

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pilgrim {
    /// 创建新朝觐者记录（可选字段全空）
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        gender: Gender,
        age: u32,
        nationality: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            gender,
            age,
            nationality: nationality.into(),
            phone: None,
            email: None,
            organizer: None,
            group: None,
            passport_number: None,
            visa_number: None,
            assigned_room: None,
            assigned_tent: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 是否未分配住宿
    pub fn is_unassigned(&self) -> bool {
        self.assigned_room.is_none() && self.assigned_tent.is_none()
    }

    /// 未分配查询的文本匹配: 姓名/电话/邮箱 子串（不区分大小写）
    pub fn matches_search(&self, filter_text: &str) -> bool {
        let needle = filter_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        if self.name.to_lowercase().contains(&needle) {
            return true;
        }
        if let Some(phone) = &self.phone {
            if phone.to_lowercase().contains(&needle) {
                return true;
            }
        }
        if let Some(email) = &self.email {
            if email.to_lowercase().contains(&needle) {
                return true;
            }
        }
        false
    }
}

/// 未分配朝觐者的惰性查询
///
/// 每次调用重新求值（非一次性游标）,调用方可重复消费
pub fn unassigned_iter<'a>(
    pilgrims: &'a [Pilgrim],
    filter_text: Option<&'a str>,
) -> impl Iterator<Item = &'a Pilgrim> + 'a {
    pilgrims.iter().filter(move |p| {
        p.is_unassigned()
            && match filter_text {
                Some(text) => p.matches_search(text),
                None => true,
            }
    })
}
