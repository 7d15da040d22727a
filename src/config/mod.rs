// ==========================================
// 朝觐住宿管理系统 - 配置层
// ==========================================
// 职责: 系统配置与生成参数
// ==========================================

pub mod config_manager;
pub mod generation;

pub use config_manager::{ConfigManager, CONFIG_KV_KEY, GENERATION_CONFIG_KEY};
pub use generation::GenerationConfig;
