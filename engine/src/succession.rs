//! Succession schedule generation
//!
//! The central orchestrator: combines the catalog, the planting window,
//! and optional weather data into a dated, area-allocated plan with its
//! derived harvest calendar and resource requirements.

use chrono::NaiveDate;
use uuid::Uuid;

use shared::models::{
    ActualHarvest, ProgressReport, StrategySet, SuccessionPlan, SuccessionPlanting, WeatherBundle,
};
use shared::types::PlantingStatus;
use shared::validation::MAX_SUCCESSIONS;

use crate::advisor::assess_planting_risk;
use crate::calendar::{add_days, ceil_div, days_between};
use crate::catalog::CropCatalog;
use crate::error::{PlannerError, PlannerResult};
use crate::harvest::build_harvest_calendar;
use crate::monitor::monitor_progress;
use crate::recommend::generate_recommendations;
use crate::resources::plan_resources;
use crate::tables::PlannerTables;
use crate::window::calculate_planting_window;

/// Succession planting scheduler
///
/// Holds the injected catalog and lookup tables; carries no mutable state,
/// so one planner can serve concurrent planning requests.
#[derive(Debug, Clone)]
pub struct SuccessionPlanner {
    catalog: CropCatalog,
    tables: PlannerTables,
}

impl SuccessionPlanner {
    pub fn new(catalog: CropCatalog, tables: PlannerTables) -> Self {
        Self { catalog, tables }
    }

    /// Planner over the built-in catalog and default tables
    pub fn builtin() -> Self {
        Self::new(CropCatalog::builtin(), PlannerTables::default())
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    pub fn tables(&self) -> &PlannerTables {
        &self.tables
    }

    /// Generate a succession plan for `crop_id` on a field of
    /// `total_area_acres`, targeting `desired_weeks` of continuous harvest.
    ///
    /// Fewer plantings than requested may be returned when the safe window
    /// cannot hold them; the allocated areas always sum to the field total.
    #[allow(clippy::too_many_arguments)]
    pub fn calculate_succession_schedule(
        &self,
        crop_id: &str,
        field_id: Uuid,
        total_area_acres: f64,
        desired_weeks: u32,
        zone_code: &str,
        weather: Option<&WeatherBundle>,
        today: NaiveDate,
    ) -> PlannerResult<SuccessionPlan> {
        if total_area_acres <= 0.0 {
            return Err(PlannerError::InvalidInput(
                "Field area must be positive".to_string(),
            ));
        }
        if desired_weeks == 0 {
            return Err(PlannerError::InvalidInput(
                "Desired harvest duration must be at least one week".to_string(),
            ));
        }

        let crop = self.catalog.crop(crop_id)?;
        if !self.tables.is_succession_crop(crop_id) {
            return Err(PlannerError::UnsupportedCrop(crop_id.to_string()));
        }
        let zone = self.catalog.zone(zone_code)?;

        let window = calculate_planting_window(crop, zone, None, today)?;

        let harvest_window = crop.timing.harvest_window_days;
        let interval_days = i64::from(ceil_div(harvest_window, 2)).max(7);
        let window_days = days_between(window.earliest, window.latest);
        let season_capacity = (window_days / interval_days) as u32;
        if season_capacity == 0 {
            return Err(PlannerError::SeasonTooShort {
                window_days,
                interval_days,
            });
        }
        let requested = ceil_div(desired_weeks, ceil_div(harvest_window, 7).max(1));
        let planned_count = season_capacity.min(requested).min(MAX_SUCCESSIONS);

        // Dates first: generation stops before stepping past the latest
        // safe date, so the plan may hold fewer plantings than planned
        let mut planting_dates: Vec<NaiveDate> = Vec::new();
        for i in 0..planned_count {
            let date = add_days(window.optimal, i64::from(i) * interval_days);
            if date > window.latest {
                tracing::debug!(
                    crop = %crop_id,
                    generated = planting_dates.len(),
                    planned = planned_count,
                    "stopped before the latest safe planting date"
                );
                break;
            }
            planting_dates.push(date);
        }
        if planting_dates.is_empty() {
            return Err(PlannerError::DegenerateWindow {
                earliest: window.optimal,
                latest: window.latest,
            });
        }

        let successions = planting_dates.len() as u32;
        let area_per_planting = total_area_acres / f64::from(successions);
        let expected_yield_lbs = self.tables.yield_rate(crop_id) * area_per_planting;

        let plantings: Vec<SuccessionPlanting> = planting_dates
            .iter()
            .enumerate()
            .map(|(i, &planting_date)| {
                let harvest_start =
                    add_days(planting_date, i64::from(crop.timing.days_to_maturity));
                SuccessionPlanting {
                    sequence: (i as u32) + 1,
                    planting_date,
                    harvest_start,
                    harvest_end: add_days(harvest_start, i64::from(harvest_window)),
                    area_acres: area_per_planting,
                    status: PlantingStatus::Planned,
                    expected_yield_lbs,
                    actual_yield_lbs: None,
                    weather_risk: Some(assess_planting_risk(planting_date, today, weather)),
                }
            })
            .collect();

        let harvest_calendar = build_harvest_calendar(&plantings, self.tables.week_start);
        let resources = plan_resources(crop_id, &plantings, &self.tables);

        let start_date = plantings[0].planting_date;
        let end_date = plantings[plantings.len() - 1].harvest_end;

        tracing::info!(
            crop = %crop_id,
            zone = %zone_code,
            successions,
            interval_days,
            "succession schedule generated"
        );

        Ok(SuccessionPlan {
            id: Uuid::new_v4(),
            crop_id: crop_id.to_string(),
            field_id,
            total_area_acres,
            successions,
            interval_days,
            start_date,
            end_date,
            plantings,
            harvest_calendar,
            resources,
        })
    }

    /// Three alternative succession strategies with a default pick
    pub fn generate_succession_recommendations(
        &self,
        crop_id: &str,
        zone_code: &str,
        total_area_acres: f64,
        desired_weeks: u32,
        today: NaiveDate,
    ) -> PlannerResult<StrategySet> {
        generate_recommendations(
            &self.catalog,
            &self.tables,
            crop_id,
            zone_code,
            total_area_acres,
            desired_weeks,
            today,
        )
    }

    /// Compare a live plan against actual outcomes and fresh weather
    pub fn monitor_succession_progress(
        &self,
        plan: &SuccessionPlan,
        actual_harvests: &[ActualHarvest],
        weather: &WeatherBundle,
        today: NaiveDate,
    ) -> ProgressReport {
        monitor_progress(plan, actual_harvests, weather, today)
    }
}
