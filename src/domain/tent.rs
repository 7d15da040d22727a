// ==========================================
// 朝觐住宿管理系统 - 帐篷领域模型
// ==========================================
// 职责: 米纳/阿拉法特营地帐篷实体定义
// ==========================================

use crate::domain::housing::Bed;
use crate::domain::types::TentLocation;
use serde::{Deserialize, Serialize};

// ==========================================
// Tent - 帐篷
// ==========================================
// 容量范围: 10-50 床
// 帐篷无性别属性: 性别筛选按占用者性别判定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tent {
    pub id: String,
    pub tent_number: String,
    pub total_beds: u32,
    pub beds: Vec<Bed>,
    pub location: TentLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// 帐篷容量下限
pub const TENT_MIN_BEDS: u32 = 10;
/// 帐篷容量上限
pub const TENT_MAX_BEDS: u32 = 50;
