// ==========================================
// 朝觐住宿管理系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::store::StoreError;
use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 数据访问错误 =====
    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("记录已存在: {entity} with id={id}")]
    Duplicate { entity: String, id: String },

    #[error("快照存储访问失败: {0}")]
    Storage(#[from] StoreError),

    #[error("集合锁获取失败: {0}")]
    LockError(String),
}

impl RepositoryError {
    /// 构造 NotFound（收敛 entity 字符串拼写）
    pub fn not_found(entity: &str, id: &str) -> Self {
        RepositoryError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// 构造 Duplicate
    pub fn duplicate(entity: &str, id: &str) -> Self {
        RepositoryError::Duplicate {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
