//! Seed, labor, and irrigation planning

use std::collections::BTreeSet;

use chrono::NaiveDate;
use shared::models::{ResourcePlan, SuccessionPlanting};

use crate::calendar::add_days;
use crate::tables::{
    HARVEST_LABOR_HOURS_PER_ACRE, IRRIGATION_INTERVAL_DAYS, PLANTING_LABOR_HOURS_PER_ACRE,
    PlannerTables,
};

/// Derive the resource requirements for a plan's plantings
pub fn plan_resources(
    crop_id: &str,
    plantings: &[SuccessionPlanting],
    tables: &PlannerTables,
) -> ResourcePlan {
    let count = plantings.len() as u64;
    let area_per = plantings.first().map(|p| p.area_acres).unwrap_or(0.0);

    let seeds_per_planting = (tables.seeding_rate(crop_id) * area_per).ceil() as u64;
    let total_seeds = seeds_per_planting * count;

    let labor_hours = (count as f64
        * area_per
        * (PLANTING_LABOR_HOURS_PER_ACRE + HARVEST_LABOR_HOURS_PER_ACRE))
        .ceil() as u64;

    // BTreeSet merges the per-planting schedules, de-duplicates shared
    // days, and keeps the result sorted
    let mut irrigation: BTreeSet<NaiveDate> = BTreeSet::new();
    for planting in plantings {
        let mut day = planting.planting_date;
        while day <= planting.harvest_start {
            irrigation.insert(day);
            day = add_days(day, IRRIGATION_INTERVAL_DAYS);
        }
    }

    ResourcePlan {
        seeds_per_planting,
        total_seeds,
        labor_hours,
        irrigation_dates: irrigation.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::types::PlantingStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn planting(seq: u32, planting_date: NaiveDate, area: f64) -> SuccessionPlanting {
        SuccessionPlanting {
            sequence: seq,
            planting_date,
            harvest_start: add_days(planting_date, 9),
            harvest_end: add_days(planting_date, 16),
            area_acres: area,
            status: PlantingStatus::Planned,
            expected_yield_lbs: 1000.0,
            actual_yield_lbs: None,
            weather_risk: None,
        }
    }

    #[test]
    fn test_seed_counts_round_up() {
        let tables = PlannerTables::default();
        let plantings = vec![
            planting(1, date(2025, 5, 1), 0.25),
            planting(2, date(2025, 5, 12), 0.25),
        ];
        let resources = plan_resources("unknown_crop", &plantings, &tables);
        // 50_000 * 0.25 = 12_500
        assert_eq!(resources.seeds_per_planting, 12500);
        assert_eq!(resources.total_seeds, 25000);
    }

    #[test]
    fn test_labor_uses_fixed_rates() {
        let tables = PlannerTables::default();
        let plantings = vec![
            planting(1, date(2025, 5, 1), 0.5),
            planting(2, date(2025, 5, 12), 0.5),
        ];
        let resources = plan_resources("lettuce", &plantings, &tables);
        // 2 plantings * 0.5 acres * (8 + 12) hours
        assert_eq!(resources.labor_hours, 20);
    }

    #[test]
    fn test_irrigation_every_three_days_through_harvest_start() {
        let tables = PlannerTables::default();
        let plantings = vec![planting(1, date(2025, 5, 1), 1.0)];
        let resources = plan_resources("lettuce", &plantings, &tables);
        // May 1 through harvest start May 10: 1, 4, 7, 10
        assert_eq!(
            resources.irrigation_dates,
            vec![date(2025, 5, 1), date(2025, 5, 4), date(2025, 5, 7), date(2025, 5, 10)]
        );
    }

    #[test]
    fn test_overlapping_schedules_deduplicate() {
        let tables = PlannerTables::default();
        // Second planting three days after the first: schedules share days
        let plantings = vec![
            planting(1, date(2025, 5, 1), 0.5),
            planting(2, date(2025, 5, 4), 0.5),
        ];
        let resources = plan_resources("lettuce", &plantings, &tables);
        let mut deduped = resources.irrigation_dates.clone();
        deduped.dedup();
        assert_eq!(deduped, resources.irrigation_dates);
        // Sorted ascending
        let mut sorted = resources.irrigation_dates.clone();
        sorted.sort();
        assert_eq!(sorted, resources.irrigation_dates);
        // May 4, 7, 10 appear once despite being in both schedules
        assert!(resources.irrigation_dates.contains(&date(2025, 5, 4)));
    }
}
