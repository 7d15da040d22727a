// ==========================================
// 朝觐住宿管理系统 - 名册导入 API
// ==========================================
// 职责: 封装名册导入器,做入口校验与错误转换
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::importer::report::RosterImportResult;
use crate::importer::roster_importer::RosterImporter;
use std::path::Path;
use std::sync::Arc;

// ==========================================
// ImportApi - 名册导入 API
// ==========================================
pub struct ImportApi {
    importer: Arc<RosterImporter>,
}

impl ImportApi {
    pub fn new(importer: Arc<RosterImporter>) -> Self {
        Self { importer }
    }

    /// 导入名册文件
    ///
    /// # 参数
    /// - file_path: 名册文件路径 (.xlsx/.xls/.csv)
    ///
    /// # 返回
    /// - Ok(RosterImportResult): 批次 + DQ 汇总 + 违规明细
    /// - Err(ApiError): 文件级失败
    pub fn import_roster(&self, file_path: &str) -> ApiResult<RosterImportResult> {
        if file_path.trim().is_empty() {
            return Err(ApiError::InvalidInput("文件路径不能为空".to_string()));
        }
        Ok(self.importer.import_file(Path::new(file_path))?)
    }
}
