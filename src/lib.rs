// ==========================================
// 朝觐住宿管理系统 - 核心库
// ==========================================
// 系统定位: 住宿分配与查询核心（占用模型 + 筛选引擎）
// 技术栈: Rust + 本地 JSON 快照存储
// 外部协作: 渲染/弹窗/路由/翻译由 UI 外壳承担
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部名册
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 存储基础设施（localStorage 风格快照）
pub mod store;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Gender, HousingKind, RoomGender, TentLocation, UnitKind};

// 领域实体
pub use domain::{Bed, Building, Hotel, Pilgrim, Room, RoomAssignment, Tent, TentAssignment};

// 引擎核心
pub use engine::{
    aggregate, filter_units, matches_unit, normalized_beds, occupied_count, AssignmentEngine,
    EngineError, FilterState, HousingUnit, OccupancySummary,
};

/// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
