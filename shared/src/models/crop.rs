//! Crop profile models
//!
//! Immutable reference data describing a crop's agronomic behaviour.
//! Loaded once from the catalog and never mutated at runtime.

use serde::{Deserialize, Serialize};

use crate::types::{Drainage, FrostTolerance, Level, TempRange};

/// Full agronomic profile of a crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    /// Catalog key, e.g. "lettuce"
    pub id: String,
    pub name: String,
    /// Taxonomic family, e.g. "brassicaceae"
    pub family: String,
    pub planting: PlantingGeometry,
    pub timing: CropTiming,
    pub climate: ClimateTolerance,
    pub soil: SoilPreference,
    pub water: WaterNeed,
    pub nutrients: NutrientProfile,
    pub rotation: RotationProfile,
    pub companions: Vec<String>,
    pub antagonists: Vec<String>,
    pub pests: Vec<String>,
    pub diseases: Vec<String>,
}

impl CropProfile {
    /// Legumes fix atmospheric nitrogen into the soil
    pub fn fixes_nitrogen(&self) -> bool {
        self.nutrients.nitrogen_fixed_lbs_per_acre > 0.0
    }
}

/// Seed depth and spacing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingGeometry {
    pub depth_inches: f64,
    pub plant_spacing_inches: f64,
    pub row_spacing_inches: f64,
}

/// Development timeline in days
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropTiming {
    pub days_to_germination: u32,
    pub days_to_maturity: u32,
    /// How long the crop keeps producing once mature
    pub harvest_window_days: u32,
}

/// Temperature tolerance and frost behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateTolerance {
    pub min_soil_temp_f: f64,
    pub optimal_soil_temp_f: TempRange,
    pub min_growing_temp_f: f64,
    pub optimal_growing_temp_f: TempRange,
    pub frost_tolerance: FrostTolerance,
}

/// Soil conditions the crop prefers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilPreference {
    pub ph_min: f64,
    pub ph_max: f64,
    pub drainage: Drainage,
    pub fertility: Level,
    pub organic_matter: Level,
}

/// Water demand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterNeed {
    pub weekly_inches: f64,
    /// Growth stages where water stress is most damaging
    pub critical_stages: Vec<String>,
    pub drought_tolerance: Level,
}

/// Nutrient demand and contribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub nitrogen_demand: Level,
    pub phosphorus_demand: Level,
    pub potassium_demand: Level,
    /// Nitrogen fixed into the soil; 0 for non-legumes
    pub nitrogen_fixed_lbs_per_acre: f64,
}

/// Rotation metadata keyed by taxonomic family
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationProfile {
    /// Families this crop must not follow
    pub avoid_after_families: Vec<String>,
    /// Families this crop benefits from following
    pub good_after_families: Vec<String>,
    /// Years before the same family should return to a field
    pub rest_period_years: u32,
}
