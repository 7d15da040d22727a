// ==========================================
// 朝觐住宿管理系统 - 住宿管理 API
// ==========================================
// 职责: 酒店/楼栋的查询、创建、房间筛选与床位分配
// 架构: API 层 → 引擎层 / 仓储层
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::housing::{Bed, Building, Hotel, Room, ROOM_MAX_BEDS, ROOM_MIN_BEDS};
use crate::domain::types::{HousingKind, RoomGender};
use crate::engine::aggregate::{aggregate, OccupancySummary};
use crate::engine::assignment::AssignmentEngine;
use crate::engine::filter::{filter_units, FilterState};
use crate::engine::inventory::synthetic_bed_id;
use crate::repository::housing_repo::{BuildingRepository, HotelRepository};
use crate::repository::pilgrim_repo::PilgrimRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// 请求/响应结构
// ==========================================

/// 房间规格（创建容器时由表单提交）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSpec {
    pub room_number: String,
    pub total_beds: u32,
    pub gender: RoomGender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
}

/// 创建酒店请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u8>,
    pub rooms: Vec<RoomSpec>,
}

/// 创建楼栋请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuildingRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
    pub rooms: Vec<RoomSpec>,
}

/// 房间筛选响应: 命中房间（保持原始顺序）+ 命中集合的占用汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredRoomsResponse {
    pub rooms: Vec<Room>,
    pub summary: OccupancySummary,
}

// ==========================================
// HousingApi - 住宿管理 API
// ==========================================
pub struct HousingApi {
    hotel_repo: Arc<HotelRepository>,
    building_repo: Arc<BuildingRepository>,
    pilgrim_repo: Arc<PilgrimRepository>,
    assignment: Arc<AssignmentEngine>,
}

impl HousingApi {
    pub fn new(
        hotel_repo: Arc<HotelRepository>,
        building_repo: Arc<BuildingRepository>,
        pilgrim_repo: Arc<PilgrimRepository>,
        assignment: Arc<AssignmentEngine>,
    ) -> Self {
        Self {
            hotel_repo,
            building_repo,
            pilgrim_repo,
            assignment,
        }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 查询全部酒店
    pub fn list_hotels(&self) -> ApiResult<Vec<Hotel>> {
        Ok(self.hotel_repo.list()?)
    }

    /// 查询全部楼栋
    pub fn list_buildings(&self) -> ApiResult<Vec<Building>> {
        Ok(self.building_repo.list()?)
    }

    /// 按 ID 查询酒店
    pub fn get_hotel(&self, hotel_id: &str) -> ApiResult<Hotel> {
        if hotel_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("酒店ID不能为空".to_string()));
        }
        self.hotel_repo
            .find_by_id(hotel_id)?
            .ok_or_else(|| ApiError::NotFound(format!("酒店不存在: {}", hotel_id)))
    }

    /// 按 ID 查询楼栋
    pub fn get_building(&self, building_id: &str) -> ApiResult<Building> {
        if building_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("楼栋ID不能为空".to_string()));
        }
        self.building_repo
            .find_by_id(building_id)?
            .ok_or_else(|| ApiError::NotFound(format!("楼栋不存在: {}", building_id)))
    }

    /// 筛选指定容器内的房间
    ///
    /// # 参数
    /// - kind: 容器类型
    /// - parent_id: 容器 ID
    /// - state: 筛选状态（缺省字段不参与筛选）
    ///
    /// # 返回
    /// - Ok(FilteredRoomsResponse): 命中房间 + 占用汇总
    pub fn filter_rooms(
        &self,
        kind: HousingKind,
        parent_id: &str,
        state: &FilterState,
    ) -> ApiResult<FilteredRoomsResponse> {
        let rooms = match kind {
            HousingKind::Hotel => self.get_hotel(parent_id)?.rooms,
            HousingKind::Building => self.get_building(parent_id)?.rooms,
        };

        let matched: Vec<Room> = filter_units(&rooms, state, &*self.pilgrim_repo)
            .into_iter()
            .cloned()
            .collect();
        let summary = aggregate(matched.iter());
        Ok(FilteredRoomsResponse {
            rooms: matched,
            summary,
        })
    }

    // ==========================================
    // 创建接口
    // ==========================================

    /// 创建酒店（房间初始全空床）
    pub fn create_hotel(&self, request: CreateHotelRequest) -> ApiResult<Hotel> {
        if request.name.trim().is_empty() {
            return Err(ApiError::InvalidInput("酒店名称不能为空".to_string()));
        }
        let id = Uuid::new_v4().to_string();
        let rooms = build_rooms(&id, &request.rooms)?;
        let hotel = Hotel {
            id,
            name: request.name.trim().to_string(),
            stars: request.stars,
            rooms,
        };
        self.hotel_repo.save(hotel.clone())?;
        Ok(hotel)
    }

    /// 创建楼栋（房间初始全空床）
    pub fn create_building(&self, request: CreateBuildingRequest) -> ApiResult<Building> {
        if request.name.trim().is_empty() {
            return Err(ApiError::InvalidInput("楼栋名称不能为空".to_string()));
        }
        let id = Uuid::new_v4().to_string();
        let rooms = build_rooms(&id, &request.rooms)?;
        let building = Building {
            id,
            name: request.name.trim().to_string(),
            floors: request.floors,
            rooms,
        };
        self.building_repo.save(building.clone())?;
        Ok(building)
    }

    // ==========================================
    // 分配接口
    // ==========================================

    /// 将朝觐者分配到房间床位
    pub fn assign_bed(
        &self,
        kind: HousingKind,
        parent_id: &str,
        room_id: &str,
        bed_id: &str,
        pilgrim_id: &str,
    ) -> ApiResult<()> {
        for (value, label) in [
            (parent_id, "容器ID"),
            (room_id, "房间ID"),
            (bed_id, "床位ID"),
            (pilgrim_id, "朝觐者ID"),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::InvalidInput(format!("{}不能为空", label)));
            }
        }
        self.assignment
            .assign_room_bed(kind, parent_id, room_id, bed_id, pilgrim_id)?;
        Ok(())
    }
}

/// 由房间规格构造房间集合,校验容量范围与房号
fn build_rooms(parent_id: &str, specs: &[RoomSpec]) -> ApiResult<Vec<Room>> {
    specs
        .iter()
        .map(|spec| {
            if spec.room_number.trim().is_empty() {
                return Err(ApiError::InvalidInput("房号不能为空".to_string()));
            }
            if !(ROOM_MIN_BEDS..=ROOM_MAX_BEDS).contains(&spec.total_beds) {
                return Err(ApiError::InvalidInput(format!(
                    "房间床位数必须在{}-{}之间: {}",
                    ROOM_MIN_BEDS, ROOM_MAX_BEDS, spec.total_beds
                )));
            }
            let id = Uuid::new_v4().to_string();
            let beds = (0..spec.total_beds as usize)
                .map(|i| Bed::empty(synthetic_bed_id(&id, i)))
                .collect();
            Ok(Room {
                id,
                room_number: spec.room_number.trim().to_string(),
                total_beds: spec.total_beds,
                beds,
                gender: spec.gender,
                floor: spec.floor,
                parent_id: parent_id.to_string(),
            })
        })
        .collect()
}
