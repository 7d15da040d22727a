// ==========================================
// 朝觐住宿管理系统 - 管理控制台入口
// ==========================================
// 职责: 初始化日志与应用状态,首启写入种子数据,
//       输出占用总览
// ==========================================

use anyhow::Context;
use hajj_housing_admin::app::{get_default_data_dir, AppState};
use hajj_housing_admin::logging;

/// 首启种子（回历 1447 年朝觐季）
const DEMO_SEED: u64 = 1447;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("朝觐住宿管理系统 - 住宿分配与查询核心");
    tracing::info!("系统版本: {}", hajj_housing_admin::VERSION);
    tracing::info!("==================================================");

    // 数据目录
    let data_dir = get_default_data_dir();
    tracing::info!("使用数据目录: {}", data_dir.display());

    // 创建 AppState
    let app_state = AppState::new(&data_dir).context("无法初始化AppState")?;

    // 首启写入种子数据
    if app_state.is_empty().context("集合状态检查失败")? {
        tracing::info!("集合为空,写入合成种子数据 (seed={})", DEMO_SEED);
        app_state
            .seed_demo_data(DEMO_SEED)
            .context("种子数据写入失败")?;
    }

    // 输出占用总览
    let overview = app_state
        .dashboard_api
        .get_housing_overview()
        .map_err(|e| anyhow::anyhow!("占用总览查询失败: {}", e))?;

    tracing::info!(
        "酒店房间: {} 间 / {} 床 / 已住 {}",
        overview.hotel_rooms.total_units,
        overview.hotel_rooms.total_beds,
        overview.hotel_rooms.occupied_beds
    );
    tracing::info!(
        "楼栋房间: {} 间 / {} 床 / 已住 {}",
        overview.building_rooms.total_units,
        overview.building_rooms.total_beds,
        overview.building_rooms.occupied_beds
    );
    tracing::info!(
        "米纳帐篷: {} 顶 / {} 床 / 已住 {}",
        overview.tents_mina.total_units,
        overview.tents_mina.total_beds,
        overview.tents_mina.occupied_beds
    );
    tracing::info!(
        "阿拉法特帐篷: {} 顶 / {} 床 / 已住 {}",
        overview.tents_arafat.total_units,
        overview.tents_arafat.total_beds,
        overview.tents_arafat.occupied_beds
    );
    tracing::info!(
        "合计: {} 床 / 已住 {} / 空余 {}",
        overview.overall.total_beds,
        overview.overall.occupied_beds,
        overview.overall.available_beds
    );

    Ok(())
}
