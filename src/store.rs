// ==========================================
// 朝觐住宿管理系统 - 本地快照存储
// ==========================================
// 职责: localStorage 风格的键值存储,每个集合一份 JSON 快照
// 约定: 键名即文件名（{key}.json）,写入先落临时文件再原子改名
// ==========================================

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 默认数据目录名（位于系统数据目录下）
pub const DEFAULT_DATA_DIR_NAME: &str = "hajj-housing-admin";

// ==========================================
// StoreError - 存储层错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("非法存储键: {0}")]
    InvalidKey(String),

    #[error("存储 IO 失败 (key={key}): {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("快照序列化失败 (key={key}): {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

// ==========================================
// LocalStore - 键值快照存储
// ==========================================
/// 本地键值快照存储
///
/// 前端版本的数据落在浏览器 localStorage;
/// 桌面核心用数据目录下的 JSON 文件承载同一组集合键
/// （hotels / buildings / tents / pilgrims / config_kv）。
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// 打开（必要时创建）数据目录
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::Io {
            key: root.display().to_string(),
            source: e,
        })?;
        Ok(Self { root })
    }

    /// 默认数据目录: {系统数据目录}/hajj-housing-admin
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DATA_DIR_NAME)
    }

    /// 数据目录路径
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 读取键对应的快照
    ///
    /// # 返回
    /// - Ok(Some(T)): 快照存在且解析成功
    /// - Ok(None): 键不存在
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|e| StoreError::Io {
            key: key.to_string(),
            source: e,
        })?;
        let value = serde_json::from_str(&raw).map_err(|e| StoreError::Serialization {
            key: key.to_string(),
            source: e,
        })?;
        Ok(Some(value))
    }

    /// 写入键对应的快照（整体替换）
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let path = self.key_path(key)?;
        let raw =
            serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialization {
                key: key.to_string(),
                source: e,
            })?;

        // 先写临时文件再改名,避免写一半留下损坏快照
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, raw).map_err(|e| StoreError::Io {
            key: key.to_string(),
            source: e,
        })?;
        fs::rename(&tmp_path, &path).map_err(|e| StoreError::Io {
            key: key.to_string(),
            source: e,
        })?;
        Ok(())
    }

    /// 删除键（键不存在时为幂等成功）
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StoreError::Io {
                key: key.to_string(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// 键是否存在
    pub fn contains(&self, key: &str) -> bool {
        match self.key_path(key) {
            Ok(path) => path.exists(),
            Err(_) => false,
        }
    }

    /// 键名到文件路径的映射,拒绝路径穿越字符
    fn key_path(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        count: u32,
        label: String,
    }

    #[test]
    fn test_set_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();

        let value = Snapshot {
            count: 3,
            label: "tents".to_string(),
        };
        store.set("tents", &value).unwrap();

        let loaded: Option<Snapshot> = store.get("tents").unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();

        let loaded: Option<Snapshot> = store.get("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();

        store.set("pilgrims", &vec![1, 2, 3]).unwrap();
        assert!(store.contains("pilgrims"));

        store.remove("pilgrims").unwrap();
        assert!(!store.contains("pilgrims"));
        // 再删一次不报错
        store.remove("pilgrims").unwrap();
    }

    #[test]
    fn test_invalid_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();

        let result = store.set("../escape", &1);
        assert!(matches!(result, Err(StoreError::InvalidKey(_))));
    }
}
