//! Alternative succession strategies
//!
//! Produces the three fixed cadences (weekly, biweekly, monthly) and picks
//! a default based on the available area, biased toward higher-frequency
//! planting for quick-harvest crops.

use chrono::NaiveDate;
use shared::models::{PlantingCadence, StrategySet, SuccessionStrategy};

use crate::calendar::{ceil_div, days_between};
use crate::catalog::CropCatalog;
use crate::error::{PlannerError, PlannerResult};
use crate::tables::PlannerTables;
use crate::window::calculate_planting_window;

/// Below this area the default is monthly planting, acres
const SMALL_FIELD_ACRES: f64 = 0.25;
/// Above this area the default is weekly planting, acres
const LARGE_FIELD_ACRES: f64 = 2.0;

struct CadencePreset {
    cadence: PlantingCadence,
    interval_days: i64,
    period_weeks: u32,
    max_plantings: u32,
    benefits: &'static [&'static str],
    considerations: &'static [&'static str],
}

const CADENCES: [CadencePreset; 3] = [
    CadencePreset {
        cadence: PlantingCadence::Weekly,
        interval_days: 7,
        period_weeks: 1,
        max_plantings: 8,
        benefits: &[
            "Steadiest possible harvest flow",
            "Small failures cost only one week of production",
        ],
        considerations: &[
            "Highest labor demand",
            "Requires disciplined weekly scheduling",
        ],
    },
    CadencePreset {
        cadence: PlantingCadence::Biweekly,
        interval_days: 14,
        period_weeks: 2,
        max_plantings: 6,
        benefits: &[
            "Good balance of continuity and labor",
            "Forgiving of a missed planting date",
        ],
        considerations: &["Short gaps possible between harvest waves"],
    },
    CadencePreset {
        cadence: PlantingCadence::Monthly,
        interval_days: 30,
        period_weeks: 4,
        max_plantings: 4,
        benefits: &[
            "Lowest labor demand",
            "Simple to manage alongside other crops",
        ],
        considerations: &[
            "Noticeable gaps between harvests",
            "Each planting carries more of the season's yield",
        ],
    },
];

/// Build the three strategies and select a default for the field size
pub fn generate_recommendations(
    catalog: &CropCatalog,
    tables: &PlannerTables,
    crop_id: &str,
    zone_code: &str,
    total_area_acres: f64,
    desired_weeks: u32,
    today: NaiveDate,
) -> PlannerResult<StrategySet> {
    if desired_weeks == 0 {
        return Err(PlannerError::InvalidInput(
            "Desired harvest duration must be at least one week".to_string(),
        ));
    }
    let crop = catalog.crop(crop_id)?;
    let zone = catalog.zone(zone_code)?;
    let window = calculate_planting_window(crop, zone, None, today)?;
    let season_span = days_between(window.optimal, window.latest);

    let options: Vec<SuccessionStrategy> = CADENCES
        .iter()
        .map(|preset| {
            let plantings = ceil_div(desired_weeks, preset.period_weeks).min(preset.max_plantings);
            let mut considerations: Vec<String> =
                preset.considerations.iter().map(|s| s.to_string()).collect();
            let span_needed = i64::from(plantings.saturating_sub(1)) * preset.interval_days;
            if span_needed > season_span {
                considerations.push(format!(
                    "Zone {zone_code}'s season fits fewer than {plantings} plantings at this cadence"
                ));
            }
            SuccessionStrategy {
                cadence: preset.cadence,
                interval_days: preset.interval_days,
                plantings,
                area_per_planting_acres: total_area_acres / f64::from(plantings.max(1)),
                benefits: preset.benefits.iter().map(|s| s.to_string()).collect(),
                considerations,
            }
        })
        .collect();

    let mut best_option = if total_area_acres < SMALL_FIELD_ACRES {
        2
    } else if total_area_acres > LARGE_FIELD_ACRES {
        0
    } else {
        1
    };
    // Quick crops never default slower than biweekly; the clamp only ever
    // moves toward higher frequency
    if tables.is_quick_harvest(crop_id) {
        best_option = best_option.min(1);
    }

    Ok(StrategySet {
        options,
        best_option,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn strategies(crop: &str, area: f64) -> StrategySet {
        generate_recommendations(
            &CropCatalog::builtin(),
            &PlannerTables::default(),
            crop,
            "7a",
            area,
            8,
            date(2025, 3, 1),
        )
        .unwrap()
    }

    #[test]
    fn test_three_fixed_cadences() {
        let set = strategies("carrot", 1.0);
        assert_eq!(set.options.len(), 3);
        assert_eq!(set.options[0].interval_days, 7);
        assert_eq!(set.options[1].interval_days, 14);
        assert_eq!(set.options[2].interval_days, 30);
        // 8 desired weeks: weekly caps at 8, biweekly needs 4, monthly 2
        assert_eq!(set.options[0].plantings, 8);
        assert_eq!(set.options[1].plantings, 4);
        assert_eq!(set.options[2].plantings, 2);
    }

    #[test]
    fn test_area_divided_evenly() {
        let set = strategies("carrot", 1.0);
        for option in &set.options {
            let total = option.area_per_planting_acres * f64::from(option.plantings);
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_small_field_defaults_monthly() {
        assert_eq!(strategies("carrot", 0.1).best_option, 2);
    }

    #[test]
    fn test_large_field_defaults_weekly() {
        assert_eq!(strategies("carrot", 3.0).best_option, 0);
    }

    #[test]
    fn test_mid_field_defaults_biweekly() {
        assert_eq!(strategies("carrot", 1.0).best_option, 1);
    }

    #[test]
    fn test_quick_crop_clamps_toward_frequency() {
        // Radish on a small field: monthly would win on area, but the
        // quick-harvest clamp pulls it to biweekly
        assert_eq!(strategies("radish", 0.1).best_option, 1);
        // The clamp never lowers an already-frequent default
        assert_eq!(strategies("radish", 3.0).best_option, 0);
    }

    #[test]
    fn test_zero_weeks_is_rejected() {
        let result = generate_recommendations(
            &CropCatalog::builtin(),
            &PlannerTables::default(),
            "carrot",
            "7a",
            1.0,
            0,
            date(2025, 3, 1),
        );
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_ids_propagate_not_found() {
        let result = generate_recommendations(
            &CropCatalog::builtin(),
            &PlannerTables::default(),
            "durian",
            "7a",
            1.0,
            8,
            date(2025, 3, 1),
        );
        assert!(result.is_err());
    }
}
