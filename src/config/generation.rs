// ==========================================
// 朝觐住宿管理系统 - 合成数据生成配置
// ==========================================
// 职责: 种子数据生成参数（容量范围、占用率、规模）
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// GenerationConfig - 生成配置
// ==========================================
// 容量范围约束: 房间 2-4 床,帐篷 10-50 床
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    // ===== 规模 =====
    pub hotel_count: u32,
    pub building_count: u32,
    pub rooms_per_hotel: u32,
    pub rooms_per_building: u32,
    pub tents_per_camp: u32, // 米纳/阿拉法特各生成这么多
    pub pilgrim_count: u32,

    // ===== 占用 =====
    /// 初始占用率（每张床独立抽样）
    pub occupancy_rate: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            hotel_count: 4,
            building_count: 3,
            rooms_per_hotel: 20,
            rooms_per_building: 16,
            tents_per_camp: 12,
            pilgrim_count: 600,
            occupancy_rate: 0.55,
        }
    }
}

impl GenerationConfig {
    /// 占用率夹取到 [0, 1]
    pub fn clamped_occupancy_rate(&self) -> f64 {
        self.occupancy_rate.clamp(0.0, 1.0)
    }
}
