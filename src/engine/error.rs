// ==========================================
// 朝觐住宿管理系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 分配失败必须显式返回,不做静默覆盖
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 分配操作错误 =====
    #[error("朝觐者不存在: {0}")]
    PilgrimNotFound(String),

    #[error("床位已被占用: bed={bed_id}, occupant={occupant}")]
    BedAlreadyOccupied { bed_id: String, occupant: String },

    #[error("朝觐者已有住宿分配: {0}")]
    PilgrimAlreadyAssigned(String),

    #[error("住宿单元不存在: {kind} id={id}")]
    HousingUnitNotFound { kind: String, id: String },

    #[error("床位不存在: unit={unit_id}, bed={bed_id}")]
    BedNotFound { unit_id: String, bed_id: String },

    // ===== 数据访问错误 =====
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl EngineError {
    /// 构造 HousingUnitNotFound
    pub fn unit_not_found(kind: &str, id: &str) -> Self {
        EngineError::HousingUnitNotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }

    /// 构造 BedNotFound
    pub fn bed_not_found(unit_id: &str, bed_id: &str) -> Self {
        EngineError::BedNotFound {
            unit_id: unit_id.to_string(),
            bed_id: bed_id.to_string(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
