// ==========================================
// 朝觐住宿管理系统 - API 层错误类型
// ==========================================
// 职责: 定义 API 层错误类型,转换下层错误为用户可读消息
// ==========================================

use crate::engine::error::EngineError;
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("分配冲突: {0}")]
    AssignmentConflict(String),

    #[error("业务规则违反: {0}")]
    BusinessRule(String),

    #[error("名册导入失败: {0}")]
    ImportFailed(String),

    #[error("存储访问失败: {0}")]
    StorageError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::PilgrimNotFound(_)
            | EngineError::HousingUnitNotFound { .. }
            | EngineError::BedNotFound { .. } => ApiError::NotFound(err.to_string()),
            EngineError::BedAlreadyOccupied { .. } | EngineError::PilgrimAlreadyAssigned(_) => {
                ApiError::AssignmentConflict(err.to_string())
            }
            EngineError::Repository(e) => ApiError::from(e),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            RepositoryError::Duplicate { .. } => ApiError::BusinessRule(err.to_string()),
            RepositoryError::Storage(_) | RepositoryError::LockError(_) => {
                ApiError::StorageError(err.to_string())
            }
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileNotFound(_) | ImportError::UnsupportedFormat(_) => {
                ApiError::InvalidInput(err.to_string())
            }
            ImportError::RepositoryError(e) => ApiError::from(e),
            _ => ApiError::ImportFailed(err.to_string()),
        }
    }
}
