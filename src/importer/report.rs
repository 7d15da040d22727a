// ==========================================
// 朝觐住宿管理系统 - 导入批次与数据质量报告
// ==========================================
// 职责: 导入结果的批次元信息与违规明细结构
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DqLevel - 数据质量级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DqLevel {
    Error,    // 错误（该行阻断）
    Warning,  // 警告（允许导入,字段取默认值）
    Conflict, // 冲突（证件号重复,进入冲突清单）
}

// ==========================================
// DqViolation - 数据质量违规记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DqViolation {
    pub row_number: usize, // 原始文件行号（数据行从 1 起）
    pub level: DqLevel,
    pub field: String,
    pub message: String,
}

// ==========================================
// DqSummary - 数据质量汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DqSummary {
    pub total_rows: usize,
    pub success: usize,
    pub blocked: usize,
    pub warning: usize,
    pub conflict: usize,
}

// ==========================================
// ImportBatch - 导入批次
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBatch {
    pub batch_id: String, // UUID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub imported_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

// ==========================================
// RosterImportResult - 导入结果
// ==========================================
// 用途: 导入接口返回值
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterImportResult {
    pub batch: ImportBatch,
    pub summary: DqSummary,
    pub violations: Vec<DqViolation>,
}
