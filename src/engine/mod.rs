// ==========================================
// 朝觐住宿管理系统 - 引擎层
// ==========================================
// 职责: 实现占用模型业务规则
// 红线: 筛选与汇总为纯函数;分配操作显式返回错误
// ==========================================

pub mod aggregate;
pub mod assignment;
pub mod error;
pub mod filter;
pub mod generator;
pub mod inventory;

// 重导出核心引擎
pub use aggregate::{aggregate, OccupancySummary};
pub use assignment::AssignmentEngine;
pub use error::{EngineError, EngineResult};
pub use filter::{
    filter_units, matches_unit, AdvancedFilterField, AdvancedFilterValues, FilterState,
    GenderFilter,
};
pub use generator::{generate, GeneratedData};
pub use inventory::{
    available_count, normalized_beds, occupied_count, resolved_occupants, synthetic_bed_id,
    HousingUnit, PilgrimLookup,
};
