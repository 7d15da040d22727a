// ==========================================
// 朝觐住宿管理系统 - 领域类型定义
// ==========================================
// 职责: 定义住宿与朝觐者共用的枚举类型
// 序列化格式: lowercase (与前端 localStorage 记录一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 性别 (Gender)
// ==========================================
// 用途: 朝觐者性别、床位占用者性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,   // 男
    Female, // 女
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

// ==========================================
// 房间性别属性 (Room Gender)
// ==========================================
// 用途: 房间的入住性别限制
// 约定: mixed 房间对任何性别筛选均可见
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomGender {
    Male,   // 男性房间
    Female, // 女性房间
    Mixed,  // 混合房间（家庭房）
}

impl fmt::Display for RoomGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomGender::Male => write!(f, "male"),
            RoomGender::Female => write!(f, "female"),
            RoomGender::Mixed => write!(f, "mixed"),
        }
    }
}

impl RoomGender {
    /// 从字符串解析（前端下拉框取值）
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(RoomGender::Male),
            "female" => Some(RoomGender::Female),
            "mixed" => Some(RoomGender::Mixed),
            _ => None,
        }
    }
}

// ==========================================
// 帐篷营地位置 (Tent Location)
// ==========================================
// 米纳与阿拉法特两处营地
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TentLocation {
    Mina,   // 米纳营地
    Arafat, // 阿拉法特营地
}

impl fmt::Display for TentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TentLocation::Mina => write!(f, "mina"),
            TentLocation::Arafat => write!(f, "arafat"),
        }
    }
}

impl TentLocation {
    /// 从字符串解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mina" => Some(TentLocation::Mina),
            "arafat" => Some(TentLocation::Arafat),
            _ => None,
        }
    }
}

// ==========================================
// 住宿容器类型 (Housing Kind)
// ==========================================
// 用途: 房间分配引用中区分酒店/楼栋
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingKind {
    Hotel,    // 酒店
    Building, // 楼栋
}

impl fmt::Display for HousingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HousingKind::Hotel => write!(f, "hotel"),
            HousingKind::Building => write!(f, "building"),
        }
    }
}

// ==========================================
// 住宿单元类型 (Unit Kind)
// ==========================================
// 用途: 筛选引擎区分房间/帐篷的专属谓词
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Room, // 房间
    Tent, // 帐篷
}
