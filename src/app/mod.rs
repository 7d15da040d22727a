// ==========================================
// 朝觐住宿管理系统 - 应用层
// ==========================================
// 职责: 应用状态装配与入口支撑
// ==========================================

pub mod state;

pub use state::{get_default_data_dir, AppState};
