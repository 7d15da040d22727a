// ==========================================
// 朝觐住宿管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod housing;
pub mod pilgrim;
pub mod tent;
pub mod types;

// 重导出核心类型
pub use housing::{Bed, Building, Hotel, Room, ROOM_MAX_BEDS, ROOM_MIN_BEDS};
pub use pilgrim::{unassigned_iter, Pilgrim, RoomAssignment, TentAssignment};
pub use tent::{Tent, TENT_MAX_BEDS, TENT_MIN_BEDS};
pub use types::{Gender, HousingKind, RoomGender, TentLocation, UnitKind};
