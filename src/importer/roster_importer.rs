// ==========================================
// 朝觐住宿管理系统 - 名册导入器
// ==========================================
// 职责: 解析 → 字段映射 → 数据质量校验 → 落库
// 口径: ERROR 行阻断、WARNING 行放行取默认值、
//       证件号重复进入冲突清单不落库
// ==========================================

use crate::domain::pilgrim::Pilgrim;
use crate::domain::types::Gender;
use crate::importer::error::ImportError;
use crate::importer::file_parser::{parse_roster_file, RawRow};
use crate::importer::report::{
    DqLevel, DqSummary, DqViolation, ImportBatch, RosterImportResult,
};
use crate::repository::pilgrim_repo::PilgrimRepository;
use chrono::Utc;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// 表头别名: 同一字段在不同组织者名册里的常见写法
const NAME_KEYS: &[&str] = &["name", "full name", "full_name", "pilgrim name"];
const GENDER_KEYS: &[&str] = &["gender", "sex"];
const AGE_KEYS: &[&str] = &["age"];
const NATIONALITY_KEYS: &[&str] = &["nationality", "country"];
const PHONE_KEYS: &[&str] = &["phone", "mobile", "mobile number", "mobile_number"];
const EMAIL_KEYS: &[&str] = &["email", "e-mail"];
const ORGANIZER_KEYS: &[&str] = &["organizer", "organizer number", "organizer_number"];
const GROUP_KEYS: &[&str] = &["group", "group name", "group_name"];
const PASSPORT_KEYS: &[&str] = &["passport", "passport number", "passport_number"];
const VISA_KEYS: &[&str] = &["visa", "visa number", "visa_number"];

// ==========================================
// RosterImporter - 名册导入器
// ==========================================
pub struct RosterImporter {
    pilgrim_repo: Arc<PilgrimRepository>,
}

impl RosterImporter {
    pub fn new(pilgrim_repo: Arc<PilgrimRepository>) -> Self {
        Self { pilgrim_repo }
    }

    /// 导入名册文件
    ///
    /// # 参数
    /// - path: 名册文件路径 (.xlsx/.xls/.csv)
    ///
    /// # 返回
    /// - Ok(RosterImportResult): 批次信息 + DQ 汇总 + 违规明细
    /// - Err(ImportError): 文件级失败（行级问题进 DQ 报告,不报错）
    pub fn import_file(&self, path: &Path) -> Result<RosterImportResult, ImportError> {
        let started = Instant::now();
        let rows = parse_roster_file(path)?;

        if let Some(first) = rows.first() {
            ensure_column(first, NAME_KEYS, "name")?;
            ensure_column(first, GENDER_KEYS, "gender")?;
            ensure_column(first, NATIONALITY_KEYS, "nationality")?;
        }

        // 证件号查重: 现有名册 + 本批次内
        let mut seen_passports: HashSet<String> = self
            .pilgrim_repo
            .list()?
            .into_iter()
            .filter_map(|p| p.passport_number)
            .map(|p| p.to_uppercase())
            .collect();

        let mut summary = DqSummary {
            total_rows: rows.len(),
            ..DqSummary::default()
        };
        let mut violations: Vec<DqViolation> = Vec::new();
        let mut accepted: Vec<Pilgrim> = Vec::new();

        for (idx, row) in rows.iter().enumerate() {
            let row_number = idx + 1; // 数据行从 1 起
            match map_row(row, row_number) {
                Ok((pilgrim, row_warnings)) => {
                    if let Some(passport) = pilgrim.passport_number.as_deref() {
                        let key = passport.to_uppercase();
                        if !seen_passports.insert(key) {
                            summary.conflict += 1;
                            violations.push(DqViolation {
                                row_number,
                                level: DqLevel::Conflict,
                                field: "passportNumber".to_string(),
                                message: format!("证件号重复: {}", passport),
                            });
                            continue;
                        }
                    }
                    if !row_warnings.is_empty() {
                        summary.warning += 1;
                        violations.extend(row_warnings);
                    }
                    summary.success += 1;
                    accepted.push(pilgrim);
                }
                Err(violation) => {
                    summary.blocked += 1;
                    violations.push(violation);
                }
            }
        }

        if !accepted.is_empty() {
            self.pilgrim_repo.insert_many(accepted)?;
        }

        let batch = ImportBatch {
            batch_id: Uuid::new_v4().to_string(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string()),
            imported_at: Utc::now(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            batch_id = %batch.batch_id,
            total = summary.total_rows,
            success = summary.success,
            blocked = summary.blocked,
            conflict = summary.conflict,
            "名册导入完成"
        );

        Ok(RosterImportResult {
            batch,
            summary,
            violations,
        })
    }
}

/// 检查必需列存在于表头
fn ensure_column(row: &RawRow, aliases: &[&str], field: &str) -> Result<(), ImportError> {
    if aliases.iter().any(|key| row.contains_key(*key)) {
        return Ok(());
    }
    Err(ImportError::MissingColumn(field.to_string()))
}

/// 按别名取第一个非空值
fn get_field(row: &RawRow, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| row.get(*key))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// 单行映射: 必填字段缺失返回 ERROR 违规,可恢复问题收集为 WARNING
fn map_row(row: &RawRow, row_number: usize) -> Result<(Pilgrim, Vec<DqViolation>), DqViolation> {
    let name = get_field(row, NAME_KEYS).ok_or_else(|| DqViolation {
        row_number,
        level: DqLevel::Error,
        field: "name".to_string(),
        message: "姓名为空".to_string(),
    })?;

    let gender_raw = get_field(row, GENDER_KEYS).ok_or_else(|| DqViolation {
        row_number,
        level: DqLevel::Error,
        field: "gender".to_string(),
        message: "性别为空".to_string(),
    })?;
    let gender = parse_gender(&gender_raw).ok_or_else(|| DqViolation {
        row_number,
        level: DqLevel::Error,
        field: "gender".to_string(),
        message: format!("性别无法识别: {}", gender_raw),
    })?;

    let nationality = get_field(row, NATIONALITY_KEYS).ok_or_else(|| DqViolation {
        row_number,
        level: DqLevel::Error,
        field: "nationality".to_string(),
        message: "国籍为空".to_string(),
    })?;

    let mut warnings = Vec::new();
    let age = match get_field(row, AGE_KEYS) {
        Some(raw) => match raw.parse::<u32>() {
            Ok(age) => age,
            Err(_) => {
                warnings.push(DqViolation {
                    row_number,
                    level: DqLevel::Warning,
                    field: "age".to_string(),
                    message: format!("年龄无法解析,取 0: {}", raw),
                });
                0
            }
        },
        None => {
            warnings.push(DqViolation {
                row_number,
                level: DqLevel::Warning,
                field: "age".to_string(),
                message: "年龄为空,取 0".to_string(),
            });
            0
        }
    };

    let mut pilgrim = Pilgrim::new(Uuid::new_v4().to_string(), name, gender, age, nationality);
    pilgrim.phone = get_field(row, PHONE_KEYS);
    pilgrim.email = get_field(row, EMAIL_KEYS);
    pilgrim.organizer = get_field(row, ORGANIZER_KEYS);
    pilgrim.group = get_field(row, GROUP_KEYS);
    pilgrim.passport_number = get_field(row, PASSPORT_KEYS);
    pilgrim.visa_number = get_field(row, VISA_KEYS);

    Ok((pilgrim, warnings))
}

/// 性别解析: 兼容 male/female/m/f 与阿拉伯语写法
fn parse_gender(raw: &str) -> Option<Gender> {
    match raw.trim().to_lowercase().as_str() {
        "male" | "m" | "ذكر" => Some(Gender::Male),
        "female" | "f" | "أنثى" => Some(Gender::Female),
        _ => None,
    }
}
