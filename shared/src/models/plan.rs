//! Succession plan models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{PlantingStatus, WeatherRiskTier};

/// Safe planting dates for a crop in a climate zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
    pub optimal: NaiveDate,
    pub notes: Vec<String>,
}

/// A complete succession planting plan for one field
///
/// Immutable once returned; changed inputs require generating a new plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessionPlan {
    pub id: Uuid,
    pub crop_id: String,
    pub field_id: Uuid,
    pub total_area_acres: f64,
    /// Number of plantings actually generated (may be fewer than requested)
    pub successions: u32,
    pub interval_days: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub plantings: Vec<SuccessionPlanting>,
    pub harvest_calendar: HarvestCalendar,
    pub resources: ResourcePlan,
}

/// One dated, area-allocated planting within a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessionPlanting {
    /// 1-based, strictly increasing
    pub sequence: u32,
    pub planting_date: NaiveDate,
    pub harvest_start: NaiveDate,
    pub harvest_end: NaiveDate,
    pub area_acres: f64,
    pub status: PlantingStatus,
    pub expected_yield_lbs: f64,
    pub actual_yield_lbs: Option<f64>,
    pub weather_risk: Option<WeatherRiskTier>,
}

/// Weekly yield calendar derived from a plan's plantings
///
/// `total_season_yield_lbs` sums the plantings' expected yields directly.
/// The week buckets pro-rate those yields by day overlap, so their sum can
/// differ slightly from the total. The two figures are deliberately kept
/// independent; do not reconcile them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestCalendar {
    pub weeks: Vec<HarvestWeek>,
    /// Week-start dates of the heaviest-yield weeks, in chronological order
    pub peak_weeks: Vec<NaiveDate>,
    pub total_season_yield_lbs: f64,
}

/// One week's estimated harvest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestWeek {
    pub week_start: NaiveDate,
    pub estimated_yield_lbs: f64,
    /// Sequence numbers of the plantings contributing to this week
    pub plantings: Vec<u32>,
}

/// Seed, labor, and irrigation requirements for a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcePlan {
    pub seeds_per_planting: u64,
    pub total_seeds: u64,
    pub labor_hours: u64,
    /// Irrigation event days, de-duplicated and sorted
    pub irrigation_dates: Vec<NaiveDate>,
}
