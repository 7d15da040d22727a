// ==========================================
// 朝觐住宿管理系统 - 朝觐者名册 API
// ==========================================
// 职责: 名册查询、增删改与住宿解绑
// 约束: 分配引用只能经分配引擎变更,编辑接口不触碰
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::pilgrim::Pilgrim;
use crate::domain::types::Gender;
use crate::engine::assignment::AssignmentEngine;
use crate::repository::pilgrim_repo::PilgrimRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// 请求结构
// ==========================================

/// 创建朝觐者请求（手工录入表单）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePilgrimRequest {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub nationality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_number: Option<String>,
}

// ==========================================
// PilgrimApi - 朝觐者名册 API
// ==========================================
pub struct PilgrimApi {
    pilgrim_repo: Arc<PilgrimRepository>,
    assignment: Arc<AssignmentEngine>,
}

impl PilgrimApi {
    pub fn new(pilgrim_repo: Arc<PilgrimRepository>, assignment: Arc<AssignmentEngine>) -> Self {
        Self {
            pilgrim_repo,
            assignment,
        }
    }

    /// 查询全部朝觐者
    pub fn list_pilgrims(&self) -> ApiResult<Vec<Pilgrim>> {
        Ok(self.pilgrim_repo.list()?)
    }

    /// 按 ID 查询
    pub fn get_pilgrim(&self, pilgrim_id: &str) -> ApiResult<Pilgrim> {
        if pilgrim_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("朝觐者ID不能为空".to_string()));
        }
        self.pilgrim_repo
            .find_by_id(pilgrim_id)?
            .ok_or_else(|| ApiError::NotFound(format!("朝觐者不存在: {}", pilgrim_id)))
    }

    /// 未分配住宿的朝觐者查询
    ///
    /// filter_text 对姓名/电话/邮箱做不区分大小写的子串匹配,
    /// 每次调用对当前名册重新求值
    pub fn search_unassigned(&self, filter_text: Option<&str>) -> ApiResult<Vec<Pilgrim>> {
        Ok(self.pilgrim_repo.find_unassigned(filter_text)?)
    }

    /// 手工录入朝觐者
    pub fn create_pilgrim(&self, request: CreatePilgrimRequest) -> ApiResult<Pilgrim> {
        if request.name.trim().is_empty() {
            return Err(ApiError::InvalidInput("姓名不能为空".to_string()));
        }
        if request.nationality.trim().is_empty() {
            return Err(ApiError::InvalidInput("国籍不能为空".to_string()));
        }

        let mut pilgrim = Pilgrim::new(
            Uuid::new_v4().to_string(),
            request.name.trim().to_string(),
            request.gender,
            request.age,
            request.nationality.trim().to_string(),
        );
        pilgrim.phone = request.phone;
        pilgrim.email = request.email;
        pilgrim.organizer = request.organizer;
        pilgrim.group = request.group;
        pilgrim.passport_number = request.passport_number;
        pilgrim.visa_number = request.visa_number;

        self.pilgrim_repo.insert(pilgrim.clone())?;
        Ok(pilgrim)
    }

    /// 编辑朝觐者记录
    ///
    /// 分配引用以库内记录为准,编辑提交中的值被忽略,
    /// 住宿变更必须走分配/解绑接口
    pub fn update_pilgrim(&self, mut pilgrim: Pilgrim) -> ApiResult<Pilgrim> {
        if pilgrim.name.trim().is_empty() {
            return Err(ApiError::InvalidInput("姓名不能为空".to_string()));
        }
        let existing = self.get_pilgrim(&pilgrim.id)?;
        pilgrim.assigned_room = existing.assigned_room;
        pilgrim.assigned_tent = existing.assigned_tent;
        pilgrim.created_at = existing.created_at;

        self.pilgrim_repo.update(pilgrim.clone())?;
        Ok(pilgrim)
    }

    /// 删除朝觐者
    ///
    /// 已分配住宿的记录拒绝删除,须先解绑
    pub fn delete_pilgrim(&self, pilgrim_id: &str) -> ApiResult<()> {
        let pilgrim = self.get_pilgrim(pilgrim_id)?;
        if !pilgrim.is_unassigned() {
            return Err(ApiError::BusinessRule(format!(
                "朝觐者已分配住宿,须先解绑: {}",
                pilgrim_id
            )));
        }
        self.pilgrim_repo.delete(pilgrim_id)?;
        Ok(())
    }

    /// 解除住宿分配（未分配时幂等成功）
    pub fn unassign(&self, pilgrim_id: &str) -> ApiResult<()> {
        if pilgrim_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("朝觐者ID不能为空".to_string()));
        }
        self.assignment.unassign(pilgrim_id)?;
        Ok(())
    }
}
