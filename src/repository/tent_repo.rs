// ==========================================
// 朝觐住宿管理系统 - 帐篷数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 存储: LocalStore 快照键 tents
// ==========================================

use crate::domain::tent::Tent;
use crate::domain::types::TentLocation;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::store::LocalStore;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// tents 集合的存储键
pub const TENTS_KEY: &str = "tents";

// ==========================================
// TentRepository - 帐篷仓储
// ==========================================
/// 帐篷仓储
/// 职责: tents 集合的读写与快照持久化
pub struct TentRepository {
    store: Arc<LocalStore>,
    tents: RwLock<Vec<Tent>>,
}

impl TentRepository {
    /// 从快照存储加载帐篷集合
    pub fn new(store: Arc<LocalStore>) -> RepositoryResult<Self> {
        let tents: Vec<Tent> = store.get(TENTS_KEY)?.unwrap_or_default();
        Ok(Self {
            store,
            tents: RwLock::new(tents),
        })
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<Tent>>> {
        self.tents
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<Tent>>> {
        self.tents
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询全部帐篷
    pub fn list(&self) -> RepositoryResult<Vec<Tent>> {
        Ok(self.read()?.clone())
    }

    /// 按营地位置查询（保持集合原始顺序）
    pub fn list_by_location(&self, location: TentLocation) -> RepositoryResult<Vec<Tent>> {
        Ok(self
            .read()?
            .iter()
            .filter(|t| t.location == location)
            .cloned()
            .collect())
    }

    /// 按 ID 查询
    pub fn find_by_id(&self, tent_id: &str) -> RepositoryResult<Option<Tent>> {
        Ok(self.read()?.iter().find(|t| t.id == tent_id).cloned())
    }

    /// 帐篷数量
    pub fn count(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.len())
    }

    /// 整体替换并落快照
    pub fn replace_all(&self, tents: Vec<Tent>) -> RepositoryResult<()> {
        {
            let mut guard = self.write()?;
            *guard = tents;
        }
        self.persist()
    }

    /// 新增或整体替换单个帐篷，然后落快照
    pub fn save(&self, tent: Tent) -> RepositoryResult<()> {
        {
            let mut guard = self.write()?;
            match guard.iter_mut().find(|t| t.id == tent.id) {
                Some(existing) => *existing = tent,
                None => guard.push(tent),
            }
        }
        self.persist()
    }

    fn persist(&self) -> RepositoryResult<()> {
        let guard = self.read()?;
        self.store.set(TENTS_KEY, &*guard)?;
        Ok(())
    }
}
