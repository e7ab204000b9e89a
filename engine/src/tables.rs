//! Injectable lookup tables and planning constants
//!
//! Represented as an owned value rather than ambient globals so concurrent
//! planning requests cannot interfere and tests can substitute fixtures.

use chrono::Weekday;
use std::collections::{HashMap, HashSet};

/// Planting labor, hours per acre
pub const PLANTING_LABOR_HOURS_PER_ACRE: f64 = 8.0;
/// Harvest labor, hours per acre
pub const HARVEST_LABOR_HOURS_PER_ACRE: f64 = 12.0;
/// Days between irrigation events
pub const IRRIGATION_INTERVAL_DAYS: i64 = 3;

/// Lookup tables the planner consults while generating plans
#[derive(Debug, Clone)]
pub struct PlannerTables {
    /// Crops suitable for staggered succession planting
    pub succession_crops: HashSet<String>,
    /// Crops that mature fast enough to favor frequent replanting
    pub quick_harvest_crops: HashSet<String>,
    /// Expected yield, lbs per acre, keyed by crop id
    pub yield_rates: HashMap<String, f64>,
    /// Seeds per acre, keyed by crop id
    pub seeding_rates: HashMap<String, f64>,
    /// Yield rate used when a crop has no entry
    pub default_yield_rate: f64,
    /// Seeding rate used when a crop has no entry
    pub default_seeding_rate: f64,
    /// First day of the week for harvest-calendar bucketing
    pub week_start: Weekday,
}

impl PlannerTables {
    pub fn yield_rate(&self, crop_id: &str) -> f64 {
        self.yield_rates
            .get(crop_id)
            .copied()
            .unwrap_or(self.default_yield_rate)
    }

    pub fn seeding_rate(&self, crop_id: &str) -> f64 {
        self.seeding_rates
            .get(crop_id)
            .copied()
            .unwrap_or(self.default_seeding_rate)
    }

    pub fn is_succession_crop(&self, crop_id: &str) -> bool {
        self.succession_crops.contains(crop_id)
    }

    pub fn is_quick_harvest(&self, crop_id: &str) -> bool {
        self.quick_harvest_crops.contains(crop_id)
    }
}

impl Default for PlannerTables {
    fn default() -> Self {
        let succession_crops: HashSet<String> =
            ["lettuce", "spinach", "radish", "carrot", "bush_bean", "beet"]
                .into_iter()
                .map(String::from)
                .collect();

        let quick_harvest_crops: HashSet<String> = ["radish", "spinach", "lettuce"]
            .into_iter()
            .map(String::from)
            .collect();

        let yield_rates: HashMap<String, f64> = [
            ("lettuce", 20000.0),
            ("spinach", 9000.0),
            ("radish", 12000.0),
            ("carrot", 24000.0),
            ("bush_bean", 4500.0),
            ("beet", 16000.0),
            ("broccoli", 10000.0),
            ("tomato", 30000.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let seeding_rates: HashMap<String, f64> = [
            ("lettuce", 110000.0),
            ("spinach", 130000.0),
            ("radish", 260000.0),
            ("carrot", 300000.0),
            ("bush_bean", 75000.0),
            ("beet", 125000.0),
            ("broccoli", 18000.0),
            ("tomato", 4500.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            succession_crops,
            quick_harvest_crops,
            yield_rates,
            seeding_rates,
            default_yield_rate: 5000.0,
            default_seeding_rate: 50000.0,
            week_start: Weekday::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates_fall_back() {
        let tables = PlannerTables::default();
        assert_eq!(tables.yield_rate("lettuce"), 20000.0);
        assert_eq!(tables.yield_rate("unknown_crop"), tables.default_yield_rate);
        assert_eq!(
            tables.seeding_rate("unknown_crop"),
            tables.default_seeding_rate
        );
    }

    #[test]
    fn test_allow_list_membership() {
        let tables = PlannerTables::default();
        assert!(tables.is_succession_crop("radish"));
        assert!(!tables.is_succession_crop("tomato"));
        assert!(tables.is_quick_harvest("radish"));
        assert!(!tables.is_quick_harvest("carrot"));
    }

    #[test]
    fn test_allow_lists_resolve_in_builtin_catalog() {
        // Every allow-listed crop must be schedulable, which starts with a
        // catalog lookup
        let tables = PlannerTables::default();
        let catalog = crate::catalog::CropCatalog::builtin();
        for id in tables
            .succession_crops
            .iter()
            .chain(tables.quick_harvest_crops.iter())
        {
            assert!(catalog.crop(id).is_ok(), "{id} missing from the catalog");
        }
    }
}
