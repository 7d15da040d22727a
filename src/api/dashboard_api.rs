// ==========================================
// 朝觐住宿管理系统 - 驾驶舱 API
// ==========================================
// 职责: 提供占用总览与容器级汇总查询
// 架构: API 层 → 汇总引擎（纯函数,按需重算）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::types::{HousingKind, TentLocation};
use crate::engine::aggregate::{aggregate, OccupancySummary};
use crate::repository::housing_repo::{BuildingRepository, HotelRepository};
use crate::repository::tent_repo::TentRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==========================================
// 响应结构
// ==========================================

/// 占用总览: 按住宿类型分列 + 全局合计
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingOverviewResponse {
    pub hotel_rooms: OccupancySummary,
    pub building_rooms: OccupancySummary,
    pub tents_mina: OccupancySummary,
    pub tents_arafat: OccupancySummary,
    pub overall: OccupancySummary,
}

/// 容器卡片汇总（酒店/楼栋列表页）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSummary {
    pub id: String,
    pub name: String,
    pub kind: HousingKind,
    pub total_rooms: usize,
    pub total_capacity: usize,
    pub occupied_capacity: usize,
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================
pub struct DashboardApi {
    hotel_repo: Arc<HotelRepository>,
    building_repo: Arc<BuildingRepository>,
    tent_repo: Arc<TentRepository>,
}

impl DashboardApi {
    pub fn new(
        hotel_repo: Arc<HotelRepository>,
        building_repo: Arc<BuildingRepository>,
        tent_repo: Arc<TentRepository>,
    ) -> Self {
        Self {
            hotel_repo,
            building_repo,
            tent_repo,
        }
    }

    /// 占用总览
    ///
    /// 每次调用对当前集合重算,无增量缓存
    pub fn get_housing_overview(&self) -> ApiResult<HousingOverviewResponse> {
        let hotels = self.hotel_repo.list()?;
        let buildings = self.building_repo.list()?;
        let mina = self.tent_repo.list_by_location(TentLocation::Mina)?;
        let arafat = self.tent_repo.list_by_location(TentLocation::Arafat)?;

        let hotel_rooms = aggregate(hotels.iter().flat_map(|h| h.rooms.iter()));
        let building_rooms = aggregate(buildings.iter().flat_map(|b| b.rooms.iter()));
        let tents_mina = aggregate(mina.iter());
        let tents_arafat = aggregate(arafat.iter());

        let overall = hotel_rooms
            .merge(building_rooms)
            .merge(tents_mina)
            .merge(tents_arafat);

        Ok(HousingOverviewResponse {
            hotel_rooms,
            building_rooms,
            tents_mina,
            tents_arafat,
            overall,
        })
    }

    /// 容器卡片汇总列表（酒店在前,楼栋在后,保持集合顺序）
    pub fn list_container_summaries(&self) -> ApiResult<Vec<ContainerSummary>> {
        let mut summaries = Vec::new();
        for hotel in self.hotel_repo.list()? {
            summaries.push(ContainerSummary {
                total_rooms: hotel.rooms.len(),
                total_capacity: hotel.total_capacity(),
                occupied_capacity: hotel.occupied_capacity(),
                id: hotel.id,
                name: hotel.name,
                kind: HousingKind::Hotel,
            });
        }
        for building in self.building_repo.list()? {
            summaries.push(ContainerSummary {
                total_rooms: building.rooms.len(),
                total_capacity: building.total_capacity(),
                occupied_capacity: building.occupied_capacity(),
                id: building.id,
                name: building.name,
                kind: HousingKind::Building,
            });
        }
        Ok(summaries)
    }

    /// 单个容器的占用汇总
    pub fn get_container_summary(
        &self,
        kind: HousingKind,
        container_id: &str,
    ) -> ApiResult<OccupancySummary> {
        if container_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("容器ID不能为空".to_string()));
        }
        let rooms = match kind {
            HousingKind::Hotel => self
                .hotel_repo
                .find_by_id(container_id)?
                .ok_or_else(|| ApiError::NotFound(format!("酒店不存在: {}", container_id)))?
                .rooms,
            HousingKind::Building => self
                .building_repo
                .find_by_id(container_id)?
                .ok_or_else(|| ApiError::NotFound(format!("楼栋不存在: {}", container_id)))?
                .rooms,
        };
        Ok(aggregate(rooms.iter()))
    }
}
