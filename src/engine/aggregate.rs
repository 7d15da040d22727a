// ==========================================
// 朝觐住宿管理系统 - 占用汇总统计
// ==========================================
// 职责: 对单元集合派生汇总计数
// 红线: 纯函数,按需重算,不做增量维护
// ==========================================

use crate::engine::inventory::{occupied_count, HousingUnit};
use serde::{Deserialize, Serialize};

// ==========================================
// OccupancySummary - 占用汇总
// ==========================================
// 恒等式: occupiedBeds + availableBeds == totalBeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySummary {
    pub total_units: usize,
    pub total_beds: usize,
    pub occupied_beds: usize,
    pub available_beds: usize,
}

impl OccupancySummary {
    /// 占用率（空集合为 0）
    pub fn occupancy_rate(&self) -> f64 {
        if self.total_beds == 0 {
            return 0.0;
        }
        self.occupied_beds as f64 / self.total_beds as f64
    }

    /// 合并两份汇总（跨单元类型的总览）
    pub fn merge(self, other: OccupancySummary) -> OccupancySummary {
        OccupancySummary {
            total_units: self.total_units + other.total_units,
            total_beds: self.total_beds + other.total_beds,
            occupied_beds: self.occupied_beds + other.occupied_beds,
            available_beds: self.available_beds + other.available_beds,
        }
    }
}

/// 对单元集合计算占用汇总
///
/// 接受筛选结果（&U 序列）或原始集合,复杂度 O(单元数 × 床位数)
pub fn aggregate<'a, U, I>(units: I) -> OccupancySummary
where
    U: HousingUnit + 'a,
    I: IntoIterator<Item = &'a U>,
{
    let mut summary = OccupancySummary::default();
    for unit in units {
        let occupied = occupied_count(unit);
        summary.total_units += 1;
        summary.total_beds += unit.total_beds();
        summary.occupied_beds += occupied;
        summary.available_beds += unit.total_beds() - occupied;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::housing::Bed;
    use crate::domain::pilgrim::Pilgrim;
    use crate::domain::tent::Tent;
    use crate::domain::types::{Gender, TentLocation};

    fn tent(number: &str, total: u32, occupied: usize) -> Tent {
        let p = Pilgrim::new("P1", "Test", Gender::Male, 30, "SA");
        let beds: Vec<Bed> = (0..occupied)
            .map(|i| {
                let mut bed = Bed::empty(format!("{}-bed-{}", number, i + 1));
                bed.occupy(&p);
                bed
            })
            .collect();
        Tent {
            id: format!("T-{}", number),
            tent_number: number.to_string(),
            total_beds: total,
            beds,
            location: TentLocation::Arafat,
            section: None,
        }
    }

    #[test]
    fn test_aggregate_sum_law() {
        let tents = vec![tent("A-001", 10, 3), tent("A-002", 20, 20), tent("A-003", 15, 0)];
        let summary = aggregate(&tents);

        assert_eq!(summary.total_units, 3);
        assert_eq!(summary.total_beds, 45);
        assert_eq!(summary.occupied_beds, 23);
        assert_eq!(summary.available_beds, 22);
        assert_eq!(
            summary.occupied_beds + summary.available_beds,
            summary.total_beds
        );
    }

    #[test]
    fn test_aggregate_short_bed_array_scenario() {
        // 容量 10 / 存 3 张占用床 → 占用 3, 空余 7
        let tents = vec![tent("A-001", 10, 3)];
        let summary = aggregate(&tents);
        assert_eq!(summary.occupied_beds, 3);
        assert_eq!(summary.available_beds, 7);
    }

    #[test]
    fn test_aggregate_empty_collection() {
        let tents: Vec<Tent> = Vec::new();
        let summary = aggregate(&tents);
        assert_eq!(summary, OccupancySummary::default());
        assert_eq!(summary.occupancy_rate(), 0.0);
    }

    #[test]
    fn test_merge() {
        let a = aggregate(&vec![tent("A-001", 10, 4)]);
        let b = aggregate(&vec![tent("M-001", 20, 5)]);
        let merged = a.merge(b);
        assert_eq!(merged.total_units, 2);
        assert_eq!(merged.total_beds, 30);
        assert_eq!(merged.occupied_beds, 9);
        assert_eq!(merged.available_beds, 21);
    }
}
