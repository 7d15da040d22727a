// ==========================================
// 朝觐住宿管理系统 - 朝觐者名册仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 存储: LocalStore 快照键 pilgrims
// ==========================================

use crate::domain::pilgrim::{unassigned_iter, Pilgrim};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::store::LocalStore;
use chrono::Utc;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// pilgrims 集合的存储键
pub const PILGRIMS_KEY: &str = "pilgrims";

// ==========================================
// PilgrimRepository - 朝觐者名册仓储
// ==========================================
/// 朝觐者名册仓储
/// 职责: pilgrims 集合的读写、按 ID / 未分配状态查询
pub struct PilgrimRepository {
    store: Arc<LocalStore>,
    pilgrims: RwLock<Vec<Pilgrim>>,
}

impl PilgrimRepository {
    /// 从快照存储加载名册
    pub fn new(store: Arc<LocalStore>) -> RepositoryResult<Self> {
        let pilgrims: Vec<Pilgrim> = store.get(PILGRIMS_KEY)?.unwrap_or_default();
        Ok(Self {
            store,
            pilgrims: RwLock::new(pilgrims),
        })
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<Pilgrim>>> {
        self.pilgrims
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<Pilgrim>>> {
        self.pilgrims
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询全部朝觐者（保持名册顺序）
    pub fn list(&self) -> RepositoryResult<Vec<Pilgrim>> {
        Ok(self.read()?.clone())
    }

    /// 按 ID 查询
    pub fn find_by_id(&self, pilgrim_id: &str) -> RepositoryResult<Option<Pilgrim>> {
        Ok(self.read()?.iter().find(|p| p.id == pilgrim_id).cloned())
    }

    /// 名册人数
    pub fn count(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.len())
    }

    /// 未分配住宿的朝觐者查询
    ///
    /// 每次调用对当前名册重新求值；filter_text 对姓名/电话/邮箱
    /// 做不区分大小写的子串匹配
    pub fn find_unassigned(&self, filter_text: Option<&str>) -> RepositoryResult<Vec<Pilgrim>> {
        Ok(unassigned_iter(&self.read()?, filter_text)
            .cloned()
            .collect())
    }

    /// 新增朝觐者（ID 重复时报错）
    pub fn insert(&self, pilgrim: Pilgrim) -> RepositoryResult<()> {
        {
            let mut guard = self.write()?;
            if guard.iter().any(|p| p.id == pilgrim.id) {
                return Err(RepositoryError::duplicate("pilgrim", &pilgrim.id));
            }
            guard.push(pilgrim);
        }
        self.persist()
    }

    /// 批量新增（导入层使用；整批校验后一次落快照）
    pub fn insert_many(&self, pilgrims: Vec<Pilgrim>) -> RepositoryResult<usize> {
        let inserted = {
            let mut guard = self.write()?;
            for pilgrim in &pilgrims {
                if guard.iter().any(|p| p.id == pilgrim.id) {
                    return Err(RepositoryError::duplicate("pilgrim", &pilgrim.id));
                }
            }
            let count = pilgrims.len();
            guard.extend(pilgrims);
            count
        };
        self.persist()?;
        Ok(inserted)
    }

    /// 整体替换记录（按 ID 定位），刷新 updatedAt 后落快照
    pub fn update(&self, mut pilgrim: Pilgrim) -> RepositoryResult<()> {
        {
            let mut guard = self.write()?;
            let existing = guard
                .iter_mut()
                .find(|p| p.id == pilgrim.id)
                .ok_or_else(|| RepositoryError::not_found("pilgrim", &pilgrim.id))?;
            pilgrim.updated_at = Utc::now();
            *existing = pilgrim;
        }
        self.persist()
    }

    /// 删除记录
    pub fn delete(&self, pilgrim_id: &str) -> RepositoryResult<()> {
        {
            let mut guard = self.write()?;
            let before = guard.len();
            guard.retain(|p| p.id != pilgrim_id);
            if guard.len() == before {
                return Err(RepositoryError::not_found("pilgrim", pilgrim_id));
            }
        }
        self.persist()
    }

    /// 整体替换名册并落快照（合成数据种子使用）
    pub fn replace_all(&self, pilgrims: Vec<Pilgrim>) -> RepositoryResult<()> {
        {
            let mut guard = self.write()?;
            *guard = pilgrims;
        }
        self.persist()
    }

    fn persist(&self) -> RepositoryResult<()> {
        let guard = self.read()?;
        self.store.set(PILGRIMS_KEY, &*guard)?;
        Ok(())
    }
}
