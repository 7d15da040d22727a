// ==========================================
// 朝觐住宿管理系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和 API 实例
// 组装: 存储 → 仓储 → 引擎 → API
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{DashboardApi, HousingApi, ImportApi, PilgrimApi, TentApi};
use crate::config::ConfigManager;
use crate::engine::assignment::AssignmentEngine;
use crate::engine::generator;
use crate::importer::roster_importer::RosterImporter;
use crate::repository::{
    BuildingRepository, HotelRepository, PilgrimRepository, RepositoryResult, TentRepository,
};
use crate::store::LocalStore;

/// 默认数据目录
pub fn get_default_data_dir() -> PathBuf {
    LocalStore::default_data_dir()
}

// ==========================================
// AppState - 应用状态
// ==========================================
/// 应用状态
///
/// 包含所有 API 实例和共享资源,由 UI 外壳持有
pub struct AppState {
    /// 数据目录
    pub data_dir: PathBuf,

    /// 配置管理器
    pub config_manager: Arc<ConfigManager>,

    /// 住宿管理 API
    pub housing_api: Arc<HousingApi>,

    /// 帐篷管理 API
    pub tent_api: Arc<TentApi>,

    /// 朝觐者名册 API
    pub pilgrim_api: Arc<PilgrimApi>,

    /// 驾驶舱 API
    pub dashboard_api: Arc<DashboardApi>,

    /// 名册导入 API
    pub import_api: Arc<ImportApi>,

    // 仓储保留引用: 种子数据写入需要整体替换
    hotel_repo: Arc<HotelRepository>,
    building_repo: Arc<BuildingRepository>,
    tent_repo: Arc<TentRepository>,
    pilgrim_repo: Arc<PilgrimRepository>,
}

impl AppState {
    /// 创建 AppState 并完成全部装配
    ///
    /// # 参数
    /// - data_dir: 数据目录（不存在时创建）
    pub fn new(data_dir: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let data_dir = data_dir.into();
        let store = Arc::new(LocalStore::open(&data_dir)?);

        // 仓储层
        let hotel_repo = Arc::new(HotelRepository::new(Arc::clone(&store))?);
        let building_repo = Arc::new(BuildingRepository::new(Arc::clone(&store))?);
        let tent_repo = Arc::new(TentRepository::new(Arc::clone(&store))?);
        let pilgrim_repo = Arc::new(PilgrimRepository::new(Arc::clone(&store))?);

        // 引擎层
        let assignment = Arc::new(AssignmentEngine::new(
            Arc::clone(&hotel_repo),
            Arc::clone(&building_repo),
            Arc::clone(&tent_repo),
            Arc::clone(&pilgrim_repo),
        ));
        let importer = Arc::new(RosterImporter::new(Arc::clone(&pilgrim_repo)));

        // API 层
        let housing_api = Arc::new(HousingApi::new(
            Arc::clone(&hotel_repo),
            Arc::clone(&building_repo),
            Arc::clone(&pilgrim_repo),
            Arc::clone(&assignment),
        ));
        let tent_api = Arc::new(TentApi::new(
            Arc::clone(&tent_repo),
            Arc::clone(&pilgrim_repo),
            Arc::clone(&assignment),
        ));
        let pilgrim_api = Arc::new(PilgrimApi::new(
            Arc::clone(&pilgrim_repo),
            Arc::clone(&assignment),
        ));
        let dashboard_api = Arc::new(DashboardApi::new(
            Arc::clone(&hotel_repo),
            Arc::clone(&building_repo),
            Arc::clone(&tent_repo),
        ));
        let import_api = Arc::new(ImportApi::new(importer));

        let config_manager = Arc::new(ConfigManager::new(Arc::clone(&store)));

        Ok(Self {
            data_dir,
            config_manager,
            housing_api,
            tent_api,
            pilgrim_api,
            dashboard_api,
            import_api,
            hotel_repo,
            building_repo,
            tent_repo,
            pilgrim_repo,
        })
    }

    /// 全部集合是否为空（首启判定）
    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.hotel_repo.count()? == 0
            && self.building_repo.count()? == 0
            && self.tent_repo.count()? == 0
            && self.pilgrim_repo.count()? == 0)
    }

    /// 按生成配置写入合成种子数据（整体替换现有集合）
    pub fn seed_demo_data(&self, seed: u64) -> RepositoryResult<()> {
        let config = self
            .config_manager
            .get_generation_config()
            .map_err(crate::repository::RepositoryError::Storage)?;
        let data = generator::generate(&config, seed);

        self.hotel_repo.replace_all(data.hotels)?;
        self.building_repo.replace_all(data.buildings)?;
        self.tent_repo.replace_all(data.tents)?;
        self.pilgrim_repo.replace_all(data.pilgrims)?;
        Ok(())
    }
}
