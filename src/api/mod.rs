// ==========================================
// 朝觐住宿管理系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 UI 外壳调用
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod housing_api;
pub mod import_api;
pub mod pilgrim_api;
pub mod tent_api;

// 重导出核心类型
pub use dashboard_api::{ContainerSummary, DashboardApi, HousingOverviewResponse};
pub use error::{ApiError, ApiResult};
pub use housing_api::{
    CreateBuildingRequest, CreateHotelRequest, FilteredRoomsResponse, HousingApi, RoomSpec,
};
pub use import_api::ImportApi;
pub use pilgrim_api::{CreatePilgrimRequest, PilgrimApi};
pub use tent_api::{CreateTentRequest, FilteredTentsResponse, TentApi};
