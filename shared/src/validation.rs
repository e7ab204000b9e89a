//! Validation helpers for planner inputs and outputs
//!
//! Callers can run these against a plan before persisting it; the engine's
//! own tests use them to check the invariants every generated plan carries.

use crate::models::{CropProfile, SuccessionPlan};

const AREA_EPSILON: f64 = 1e-6;

/// Hard cap on plantings per plan regardless of inputs
pub const MAX_SUCCESSIONS: u32 = 8;

/// Validate that allocated areas sum to the plan total
pub fn validate_area_allocation(plan: &SuccessionPlan) -> Result<(), &'static str> {
    let allocated: f64 = plan.plantings.iter().map(|p| p.area_acres).sum();
    if (allocated - plan.total_area_acres).abs() > AREA_EPSILON {
        return Err("Allocated areas must sum to the total field area");
    }
    Ok(())
}

/// Validate sequence numbers are 1-based and strictly increasing
pub fn validate_sequences(plan: &SuccessionPlan) -> Result<(), &'static str> {
    for (i, planting) in plan.plantings.iter().enumerate() {
        if planting.sequence != (i as u32) + 1 {
            return Err("Planting sequences must be 1-based and strictly increasing");
        }
    }
    Ok(())
}

/// Validate uniform interval stepping between consecutive planting dates
pub fn validate_interval_stepping(plan: &SuccessionPlan) -> Result<(), &'static str> {
    for pair in plan.plantings.windows(2) {
        let gap = (pair[1].planting_date - pair[0].planting_date).num_days();
        if gap != plan.interval_days {
            return Err("Consecutive plantings must be exactly one interval apart");
        }
    }
    Ok(())
}

/// Validate each planting's harvest interval matches the crop's window
pub fn validate_harvest_intervals(
    plan: &SuccessionPlan,
    crop: &CropProfile,
) -> Result<(), &'static str> {
    for planting in &plan.plantings {
        let maturity = (planting.harvest_start - planting.planting_date).num_days();
        if maturity != crop.timing.days_to_maturity as i64 {
            return Err("Harvest start must be planting date plus days to maturity");
        }
        let window = (planting.harvest_end - planting.harvest_start).num_days();
        if window != crop.timing.harvest_window_days as i64 {
            return Err("Harvest interval must span the crop's harvest window");
        }
    }
    Ok(())
}

/// Validate the planting-count cap
pub fn validate_succession_cap(plan: &SuccessionPlan) -> Result<(), &'static str> {
    if plan.plantings.len() as u32 > MAX_SUCCESSIONS {
        return Err("A plan can hold at most 8 plantings");
    }
    Ok(())
}

/// Run every plan invariant check
pub fn validate_plan(plan: &SuccessionPlan, crop: &CropProfile) -> Result<(), &'static str> {
    validate_area_allocation(plan)?;
    validate_sequences(plan)?;
    validate_interval_stepping(plan)?;
    validate_harvest_intervals(plan, crop)?;
    validate_succession_cap(plan)?;
    Ok(())
}

/// Validate a crop profile's numeric fields are internally consistent
pub fn validate_crop_profile(crop: &CropProfile) -> Result<(), &'static str> {
    if crop.soil.ph_min > crop.soil.ph_max {
        return Err("Soil pH minimum cannot exceed maximum");
    }
    if crop.soil.ph_min < 0.0 || crop.soil.ph_max > 14.0 {
        return Err("Soil pH must lie between 0 and 14");
    }
    if crop.planting.plant_spacing_inches <= 0.0 || crop.planting.row_spacing_inches <= 0.0 {
        return Err("Plant and row spacing must be positive");
    }
    if crop.timing.days_to_maturity == 0 {
        return Err("Days to maturity must be positive");
    }
    if crop.climate.optimal_soil_temp_f.min_f > crop.climate.optimal_soil_temp_f.max_f
        || crop.climate.optimal_growing_temp_f.min_f > crop.climate.optimal_growing_temp_f.max_f
    {
        return Err("Optimal temperature ranges must be ordered");
    }
    if crop.nutrients.nitrogen_fixed_lbs_per_acre < 0.0 {
        return Err("Nitrogen contribution cannot be negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HarvestCalendar, ResourcePlan, SuccessionPlanting};
    use crate::types::PlantingStatus;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_plan() -> SuccessionPlan {
        let plantings: Vec<SuccessionPlanting> = (0..3)
            .map(|i| {
                let planting_date = date(2025, 4, 20) + chrono::Duration::days(i * 10);
                SuccessionPlanting {
                    sequence: (i as u32) + 1,
                    planting_date,
                    harvest_start: planting_date + chrono::Duration::days(50),
                    harvest_end: planting_date + chrono::Duration::days(64),
                    area_acres: 0.5,
                    status: PlantingStatus::Planned,
                    expected_yield_lbs: 1000.0,
                    actual_yield_lbs: None,
                    weather_risk: None,
                }
            })
            .collect();

        SuccessionPlan {
            id: Uuid::new_v4(),
            crop_id: "lettuce".to_string(),
            field_id: Uuid::new_v4(),
            total_area_acres: 1.5,
            successions: 3,
            interval_days: 10,
            start_date: date(2025, 4, 20),
            end_date: date(2025, 6, 23),
            plantings,
            harvest_calendar: HarvestCalendar {
                weeks: vec![],
                peak_weeks: vec![],
                total_season_yield_lbs: 3000.0,
            },
            resources: ResourcePlan {
                seeds_per_planting: 1,
                total_seeds: 3,
                labor_hours: 30,
                irrigation_dates: vec![],
            },
        }
    }

    #[test]
    fn test_area_allocation_valid() {
        assert!(validate_area_allocation(&sample_plan()).is_ok());
    }

    #[test]
    fn test_area_allocation_mismatch() {
        let mut plan = sample_plan();
        plan.plantings[0].area_acres = 0.4;
        assert!(validate_area_allocation(&plan).is_err());
    }

    #[test]
    fn test_sequences_strictly_increasing() {
        let mut plan = sample_plan();
        assert!(validate_sequences(&plan).is_ok());
        plan.plantings[2].sequence = 2;
        assert!(validate_sequences(&plan).is_err());
    }

    #[test]
    fn test_interval_stepping() {
        let mut plan = sample_plan();
        assert!(validate_interval_stepping(&plan).is_ok());
        plan.plantings[1].planting_date += chrono::Duration::days(1);
        assert!(validate_interval_stepping(&plan).is_err());
    }

    #[test]
    fn test_succession_cap() {
        let mut plan = sample_plan();
        assert!(validate_succession_cap(&plan).is_ok());
        let extra = plan.plantings[0].clone();
        for _ in 0..9 {
            plan.plantings.push(extra.clone());
        }
        assert!(validate_succession_cap(&plan).is_err());
    }
}
