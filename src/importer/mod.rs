// ==========================================
// 朝觐住宿管理系统 - 名册导入层
// ==========================================
// 职责: 组织者名册文件的解析、校验与落库
// ==========================================

pub mod error;
pub mod file_parser;
pub mod report;
pub mod roster_importer;

pub use error::ImportError;
pub use file_parser::{parse_roster_file, RawRow};
pub use report::{DqLevel, DqSummary, DqViolation, ImportBatch, RosterImportResult};
pub use roster_importer::RosterImporter;
