// ==========================================
// 朝觐住宿管理系统 - 住宿数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 存储: LocalStore 快照键 hotels / buildings
// ==========================================

use crate::domain::housing::{Building, Hotel};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::store::LocalStore;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// hotels 集合的存储键
pub const HOTELS_KEY: &str = "hotels";
/// buildings 集合的存储键
pub const BUILDINGS_KEY: &str = "buildings";

// ==========================================
// HotelRepository - 酒店仓储
// ==========================================
/// 酒店仓储
/// 职责: hotels 集合的读写与快照持久化
/// 红线: 不含业务逻辑，只负责数据访问
pub struct HotelRepository {
    store: Arc<LocalStore>,
    hotels: RwLock<Vec<Hotel>>,
}

impl HotelRepository {
    /// 从快照存储加载酒店集合
    pub fn new(store: Arc<LocalStore>) -> RepositoryResult<Self> {
        let hotels: Vec<Hotel> = store.get(HOTELS_KEY)?.unwrap_or_default();
        Ok(Self {
            store,
            hotels: RwLock::new(hotels),
        })
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<Hotel>>> {
        self.hotels
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<Hotel>>> {
        self.hotels
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询全部酒店
    pub fn list(&self) -> RepositoryResult<Vec<Hotel>> {
        Ok(self.read()?.clone())
    }

    /// 按 ID 查询
    pub fn find_by_id(&self, hotel_id: &str) -> RepositoryResult<Option<Hotel>> {
        Ok(self.read()?.iter().find(|h| h.id == hotel_id).cloned())
    }

    /// 酒店数量
    pub fn count(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.len())
    }

    /// 整体替换并落快照（单元级 append/replace）
    pub fn replace_all(&self, hotels: Vec<Hotel>) -> RepositoryResult<()> {
        {
            let mut guard = self.write()?;
            *guard = hotels;
        }
        self.persist()
    }

    /// 新增或整体替换单个酒店聚合，然后落快照
    pub fn save(&self, hotel: Hotel) -> RepositoryResult<()> {
        {
            let mut guard = self.write()?;
            match guard.iter_mut().find(|h| h.id == hotel.id) {
                Some(existing) => *existing = hotel,
                None => guard.push(hotel),
            }
        }
        self.persist()
    }

    /// 将当前集合写入快照存储
    fn persist(&self) -> RepositoryResult<()> {
        let guard = self.read()?;
        self.store.set(HOTELS_KEY, &*guard)?;
        Ok(())
    }
}

// ==========================================
// BuildingRepository - 楼栋仓储
// ==========================================
/// 楼栋仓储
/// 职责: buildings 集合的读写与快照持久化
pub struct BuildingRepository {
    store: Arc<LocalStore>,
    buildings: RwLock<Vec<Building>>,
}

impl BuildingRepository {
    /// 从快照存储加载楼栋集合
    pub fn new(store: Arc<LocalStore>) -> RepositoryResult<Self> {
        let buildings: Vec<Building> = store.get(BUILDINGS_KEY)?.unwrap_or_default();
        Ok(Self {
            store,
            buildings: RwLock::new(buildings),
        })
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<Building>>> {
        self.buildings
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<Building>>> {
        self.buildings
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询全部楼栋
    pub fn list(&self) -> RepositoryResult<Vec<Building>> {
        Ok(self.read()?.clone())
    }

    /// 按 ID 查询
    pub fn find_by_id(&self, building_id: &str) -> RepositoryResult<Option<Building>> {
        Ok(self.read()?.iter().find(|b| b.id == building_id).cloned())
    }

    /// 楼栋数量
    pub fn count(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.len())
    }

    /// 整体替换并落快照
    pub fn replace_all(&self, buildings: Vec<Building>) -> RepositoryResult<()> {
        {
            let mut guard = self.write()?;
            *guard = buildings;
        }
        self.persist()
    }

    /// 新增或整体替换单个楼栋聚合，然后落快照
    pub fn save(&self, building: Building) -> RepositoryResult<()> {
        {
            let mut guard = self.write()?;
            match guard.iter_mut().find(|b| b.id == building.id) {
                Some(existing) => *existing = building,
                None => guard.push(building),
            }
        }
        self.persist()
    }

    fn persist(&self) -> RepositoryResult<()> {
        let guard = self.read()?;
        self.store.set(BUILDINGS_KEY, &*guard)?;
        Ok(())
    }
}
