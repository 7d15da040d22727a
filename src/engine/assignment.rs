// ==========================================
// 朝觐住宿管理系统 - 分配引擎
// ==========================================
// 职责: 朝觐者与床位的绑定/解绑
// 红线: 校验全部通过后才写入;床位与反向链接同批更新,
//       失败路径不留中间状态
// ==========================================
// 错误契约（相对前端旧行为的收紧）:
// - 朝觐者 ID 无法解析 → PilgrimNotFound（不再静默跳过）
// - 床位已被他人占用 → BedAlreadyOccupied（不再静默覆盖）
// - 同一朝觐者重复分配同一床位 → 幂等成功
// ==========================================

use crate::domain::housing::Room;
use crate::domain::pilgrim::{Pilgrim, RoomAssignment, TentAssignment};
use crate::domain::types::HousingKind;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::inventory::normalized_beds;
use crate::repository::housing_repo::{BuildingRepository, HotelRepository};
use crate::repository::pilgrim_repo::PilgrimRepository;
use crate::repository::tent_repo::TentRepository;
use std::sync::Arc;
use tracing::{info, warn};

// ==========================================
// AssignmentEngine - 分配引擎
// ==========================================
/// 分配引擎
///
/// 持有四个仓储,对外提供房间/帐篷床位的分配与解绑。
/// 所有操作同步完成,效果对观察者原子可见。
pub struct AssignmentEngine {
    hotel_repo: Arc<HotelRepository>,
    building_repo: Arc<BuildingRepository>,
    tent_repo: Arc<TentRepository>,
    pilgrim_repo: Arc<PilgrimRepository>,
}

impl AssignmentEngine {
    pub fn new(
        hotel_repo: Arc<HotelRepository>,
        building_repo: Arc<BuildingRepository>,
        tent_repo: Arc<TentRepository>,
        pilgrim_repo: Arc<PilgrimRepository>,
    ) -> Self {
        Self {
            hotel_repo,
            building_repo,
            tent_repo,
            pilgrim_repo,
        }
    }

    /// 将朝觐者分配到房间床位
    ///
    /// # 参数
    /// - kind: 容器类型（酒店/楼栋）
    /// - parent_id: 容器 ID
    /// - room_id: 房间 ID
    /// - bed_id: 床位 ID（允许指向规整化补出的空床）
    /// - pilgrim_id: 朝觐者 ID
    pub fn assign_room_bed(
        &self,
        kind: HousingKind,
        parent_id: &str,
        room_id: &str,
        bed_id: &str,
        pilgrim_id: &str,
    ) -> EngineResult<()> {
        let pilgrim = self
            .pilgrim_repo
            .find_by_id(pilgrim_id)?
            .ok_or_else(|| EngineError::PilgrimNotFound(pilgrim_id.to_string()))?;

        // 幂等路径: 反向链接已指向目标床位
        if let Some(assigned) = &pilgrim.assigned_room {
            if assigned.room_id == room_id && assigned.bed_id == bed_id {
                return Ok(());
            }
        }
        if !pilgrim.is_unassigned() {
            return Err(EngineError::PilgrimAlreadyAssigned(pilgrim_id.to_string()));
        }

        match kind {
            HousingKind::Hotel => {
                let mut hotel = self
                    .hotel_repo
                    .find_by_id(parent_id)?
                    .ok_or_else(|| EngineError::unit_not_found("hotel", parent_id))?;
                let room_number =
                    Self::occupy_room_bed(&mut hotel.rooms, room_id, bed_id, &pilgrim)?;

                let mut updated = pilgrim;
                updated.assigned_room = Some(RoomAssignment {
                    housing_type: kind,
                    parent_id: parent_id.to_string(),
                    room_id: room_id.to_string(),
                    room_number,
                    bed_id: bed_id.to_string(),
                });
                self.hotel_repo.save(hotel)?;
                self.pilgrim_repo.update(updated)?;
            }
            HousingKind::Building => {
                let mut building = self
                    .building_repo
                    .find_by_id(parent_id)?
                    .ok_or_else(|| EngineError::unit_not_found("building", parent_id))?;
                let room_number =
                    Self::occupy_room_bed(&mut building.rooms, room_id, bed_id, &pilgrim)?;

                let mut updated = pilgrim;
                updated.assigned_room = Some(RoomAssignment {
                    housing_type: kind,
                    parent_id: parent_id.to_string(),
                    room_id: room_id.to_string(),
                    room_number,
                    bed_id: bed_id.to_string(),
                });
                self.building_repo.save(building)?;
                self.pilgrim_repo.update(updated)?;
            }
        }

        info!(pilgrim_id, room_id, bed_id, "房间床位分配完成");
        Ok(())
    }

    /// 将朝觐者分配到帐篷床位
    pub fn assign_tent_bed(
        &self,
        tent_id: &str,
        bed_id: &str,
        pilgrim_id: &str,
    ) -> EngineResult<()> {
        let pilgrim = self
            .pilgrim_repo
            .find_by_id(pilgrim_id)?
            .ok_or_else(|| EngineError::PilgrimNotFound(pilgrim_id.to_string()))?;

        if let Some(assigned) = &pilgrim.assigned_tent {
            if assigned.tent_id == tent_id && assigned.bed_id == bed_id {
                return Ok(());
            }
        }
        if !pilgrim.is_unassigned() {
            return Err(EngineError::PilgrimAlreadyAssigned(pilgrim_id.to_string()));
        }

        let mut tent = self
            .tent_repo
            .find_by_id(tent_id)?
            .ok_or_else(|| EngineError::unit_not_found("tent", tent_id))?;

        // 规整化后再定位: 补位空床可直接被分配
        let mut beds = normalized_beds(&tent);
        let bed = beds
            .iter_mut()
            .find(|b| b.id == bed_id)
            .ok_or_else(|| EngineError::bed_not_found(tent_id, bed_id))?;

        if bed.occupied && !bed.occupied_by(&pilgrim.id) {
            return Err(EngineError::BedAlreadyOccupied {
                bed_id: bed_id.to_string(),
                occupant: bed.pilgrim_name.clone().unwrap_or_else(|| "unknown".to_string()),
            });
        }
        bed.occupy(&pilgrim);
        tent.beds = beds;

        let mut updated = pilgrim;
        updated.assigned_tent = Some(TentAssignment {
            location: tent.location,
            tent_id: tent_id.to_string(),
            tent_number: tent.tent_number.clone(),
            bed_id: bed_id.to_string(),
        });
        self.tent_repo.save(tent)?;
        self.pilgrim_repo.update(updated)?;

        info!(pilgrim_id, tent_id, bed_id, "帐篷床位分配完成");
        Ok(())
    }

    /// 解除朝觐者的住宿分配
    ///
    /// 未分配时为幂等成功;床位侧与引用不一致的存量数据
    /// 以反向链接为准清理并记告警
    pub fn unassign(&self, pilgrim_id: &str) -> EngineResult<()> {
        let pilgrim = self
            .pilgrim_repo
            .find_by_id(pilgrim_id)?
            .ok_or_else(|| EngineError::PilgrimNotFound(pilgrim_id.to_string()))?;

        if let Some(assignment) = pilgrim.assigned_room.clone() {
            match assignment.housing_type {
                HousingKind::Hotel => {
                    if let Some(mut hotel) = self.hotel_repo.find_by_id(&assignment.parent_id)? {
                        Self::vacate_room_bed(
                            &mut hotel.rooms,
                            &assignment.room_id,
                            &assignment.bed_id,
                            pilgrim_id,
                        );
                        self.hotel_repo.save(hotel)?;
                    } else {
                        warn!(pilgrim_id, parent_id = %assignment.parent_id, "解绑时酒店不存在,仅清理反向链接");
                    }
                }
                HousingKind::Building => {
                    if let Some(mut building) =
                        self.building_repo.find_by_id(&assignment.parent_id)?
                    {
                        Self::vacate_room_bed(
                            &mut building.rooms,
                            &assignment.room_id,
                            &assignment.bed_id,
                            pilgrim_id,
                        );
                        self.building_repo.save(building)?;
                    } else {
                        warn!(pilgrim_id, parent_id = %assignment.parent_id, "解绑时楼栋不存在,仅清理反向链接");
                    }
                }
            }
        } else if let Some(assignment) = pilgrim.assigned_tent.clone() {
            if let Some(mut tent) = self.tent_repo.find_by_id(&assignment.tent_id)? {
                if let Some(bed) = tent.beds.iter_mut().find(|b| b.id == assignment.bed_id) {
                    if bed.occupied_by(pilgrim_id) {
                        bed.vacate();
                    } else {
                        warn!(pilgrim_id, bed_id = %assignment.bed_id, "床位占用者与引用不一致,保留床位状态");
                    }
                } else {
                    warn!(pilgrim_id, bed_id = %assignment.bed_id, "解绑时床位不存在,仅清理反向链接");
                }
                self.tent_repo.save(tent)?;
            } else {
                warn!(pilgrim_id, tent_id = %assignment.tent_id, "解绑时帐篷不存在,仅清理反向链接");
            }
        } else {
            // 未分配: 幂等成功
            return Ok(());
        }

        let mut updated = pilgrim;
        updated.assigned_room = None;
        updated.assigned_tent = None;
        self.pilgrim_repo.update(updated)?;

        info!(pilgrim_id, "住宿分配已解除");
        Ok(())
    }

    /// 在房间集合内占用指定床位,返回房号
    fn occupy_room_bed(
        rooms: &mut [Room],
        room_id: &str,
        bed_id: &str,
        pilgrim: &Pilgrim,
    ) -> EngineResult<String> {
        let room = rooms
            .iter_mut()
            .find(|r| r.id == room_id)
            .ok_or_else(|| EngineError::unit_not_found("room", room_id))?;

        // 规整化后再定位: 补位空床可直接被分配
        let mut beds = normalized_beds(&*room);
        let bed = beds
            .iter_mut()
            .find(|b| b.id == bed_id)
            .ok_or_else(|| EngineError::bed_not_found(room_id, bed_id))?;

        if bed.occupied && !bed.occupied_by(&pilgrim.id) {
            return Err(EngineError::BedAlreadyOccupied {
                bed_id: bed_id.to_string(),
                occupant: bed.pilgrim_name.clone().unwrap_or_else(|| "unknown".to_string()),
            });
        }
        bed.occupy(pilgrim);

        let room_number = room.room_number.clone();
        room.beds = beds;
        Ok(room_number)
    }

    /// 在房间集合内释放指定床位
    fn vacate_room_bed(rooms: &mut [Room], room_id: &str, bed_id: &str, pilgrim_id: &str) {
        let Some(room) = rooms.iter_mut().find(|r| r.id == room_id) else {
            warn!(pilgrim_id, room_id, "解绑时房间不存在,仅清理反向链接");
            return;
        };
        let Some(bed) = room.beds.iter_mut().find(|b| b.id == bed_id) else {
            warn!(pilgrim_id, room_id, bed_id, "解绑时床位不存在,仅清理反向链接");
            return;
        };
        if bed.occupied_by(pilgrim_id) {
            bed.vacate();
        } else {
            warn!(pilgrim_id, bed_id, "床位占用者与引用不一致,保留床位状态");
        }
    }
}
