// ==========================================
// 朝觐住宿管理系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("名册缺少必需列: {0}")]
    MissingColumn(String),

    #[error("字段解析失败 (行 {row}, 字段 {field}): {message}")]
    FieldError {
        row: usize,
        field: String,
        message: String,
    },

    // ===== 落库错误 =====
    #[error("名册写入失败: {0}")]
    RepositoryError(#[from] crate::repository::error::RepositoryError),
}
