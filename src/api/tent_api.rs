// ==========================================
// 朝觐住宿管理系统 - 帐篷管理 API
// ==========================================
// 职责: 营地帐篷的查询、创建、筛选与床位分配
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::housing::Bed;
use crate::domain::tent::{Tent, TENT_MAX_BEDS, TENT_MIN_BEDS};
use crate::domain::types::TentLocation;
use crate::engine::aggregate::{aggregate, OccupancySummary};
use crate::engine::assignment::AssignmentEngine;
use crate::engine::filter::{filter_units, FilterState};
use crate::engine::inventory::synthetic_bed_id;
use crate::repository::pilgrim_repo::PilgrimRepository;
use crate::repository::tent_repo::TentRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// 请求/响应结构
// ==========================================

/// 创建帐篷请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTentRequest {
    pub tent_number: String,
    pub total_beds: u32,
    pub location: TentLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// 帐篷筛选响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredTentsResponse {
    pub tents: Vec<Tent>,
    pub summary: OccupancySummary,
}

// ==========================================
// TentApi - 帐篷管理 API
// ==========================================
pub struct TentApi {
    tent_repo: Arc<TentRepository>,
    pilgrim_repo: Arc<PilgrimRepository>,
    assignment: Arc<AssignmentEngine>,
}

impl TentApi {
    pub fn new(
        tent_repo: Arc<TentRepository>,
        pilgrim_repo: Arc<PilgrimRepository>,
        assignment: Arc<AssignmentEngine>,
    ) -> Self {
        Self {
            tent_repo,
            pilgrim_repo,
            assignment,
        }
    }

    /// 查询帐篷（可选按营地过滤）
    pub fn list_tents(&self, location: Option<TentLocation>) -> ApiResult<Vec<Tent>> {
        match location {
            Some(location) => Ok(self.tent_repo.list_by_location(location)?),
            None => Ok(self.tent_repo.list()?),
        }
    }

    /// 按 ID 查询帐篷
    pub fn get_tent(&self, tent_id: &str) -> ApiResult<Tent> {
        if tent_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("帐篷ID不能为空".to_string()));
        }
        self.tent_repo
            .find_by_id(tent_id)?
            .ok_or_else(|| ApiError::NotFound(format!("帐篷不存在: {}", tent_id)))
    }

    /// 筛选帐篷
    ///
    /// # 参数
    /// - location: 营地位置（None 为全部营地）
    /// - state: 筛选状态
    pub fn filter_tents(
        &self,
        location: Option<TentLocation>,
        state: &FilterState,
    ) -> ApiResult<FilteredTentsResponse> {
        let tents = self.list_tents(location)?;
        let matched: Vec<Tent> = filter_units(&tents, state, &*self.pilgrim_repo)
            .into_iter()
            .cloned()
            .collect();
        let summary = aggregate(matched.iter());
        Ok(FilteredTentsResponse {
            tents: matched,
            summary,
        })
    }

    /// 创建帐篷（初始全空床）
    pub fn create_tent(&self, request: CreateTentRequest) -> ApiResult<Tent> {
        if request.tent_number.trim().is_empty() {
            return Err(ApiError::InvalidInput("帐篷编号不能为空".to_string()));
        }
        if !(TENT_MIN_BEDS..=TENT_MAX_BEDS).contains(&request.total_beds) {
            return Err(ApiError::InvalidInput(format!(
                "帐篷床位数必须在{}-{}之间: {}",
                TENT_MIN_BEDS, TENT_MAX_BEDS, request.total_beds
            )));
        }

        let id = Uuid::new_v4().to_string();
        let beds = (0..request.total_beds as usize)
            .map(|i| Bed::empty(synthetic_bed_id(&id, i)))
            .collect();
        let tent = Tent {
            id,
            tent_number: request.tent_number.trim().to_string(),
            total_beds: request.total_beds,
            beds,
            location: request.location,
            section: request
                .section
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        };
        self.tent_repo.save(tent.clone())?;
        Ok(tent)
    }

    /// 将朝觐者分配到帐篷床位
    pub fn assign_bed(&self, tent_id: &str, bed_id: &str, pilgrim_id: &str) -> ApiResult<()> {
        for (value, label) in [
            (tent_id, "帐篷ID"),
            (bed_id, "床位ID"),
            (pilgrim_id, "朝觐者ID"),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::InvalidInput(format!("{}不能为空", label)));
            }
        }
        self.assignment.assign_tent_bed(tent_id, bed_id, pilgrim_id)?;
        Ok(())
    }
}
