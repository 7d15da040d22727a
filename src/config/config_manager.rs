// ==========================================
// 朝觐住宿管理系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 快照键 (key-value)
// ==========================================

use crate::config::generation::GenerationConfig;
use crate::store::{LocalStore, StoreResult};
use std::collections::HashMap;
use std::sync::Arc;

/// 配置键值对的存储键
pub const CONFIG_KV_KEY: &str = "config_kv";
/// 生成配置在 config_kv 中的键
pub const GENERATION_CONFIG_KEY: &str = "generation/config";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    store: Arc<LocalStore>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    /// 读取 config_kv 全量键值对（键不存在时为空表）
    fn load_kv(&self) -> StoreResult<HashMap<String, String>> {
        Ok(self.store.get(CONFIG_KV_KEY)?.unwrap_or_default())
    }

    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load_kv()?.get(key).cloned())
    }

    /// 读取配置值,带默认值
    pub fn get_config_or_default(&self, key: &str, default: &str) -> StoreResult<String> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 写入配置值（整表回写快照）
    pub fn set_config_value(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut kv = self.load_kv()?;
        kv.insert(key.to_string(), value.to_string());
        self.store.set(CONFIG_KV_KEY, &kv)
    }

    /// 读取生成配置（存储于 config_kv: generation/config,JSON 文本）
    ///
    /// 缺失或解析失败时回落到默认配置
    pub fn get_generation_config(&self) -> StoreResult<GenerationConfig> {
        let raw = match self.get_config_value(GENERATION_CONFIG_KEY)? {
            Some(v) => v,
            None => return Ok(GenerationConfig::default()),
        };
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(error = %e, "生成配置解析失败,回落默认值");
                Ok(GenerationConfig::default())
            }
        }
    }

    /// 写入生成配置
    pub fn set_generation_config(&self, config: &GenerationConfig) -> StoreResult<()> {
        let raw = serde_json::to_string(config).map_err(|e| crate::store::StoreError::Serialization {
            key: GENERATION_CONFIG_KEY.to_string(),
            source: e,
        })?;
        self.set_config_value(GENERATION_CONFIG_KEY, &raw)
    }
}
