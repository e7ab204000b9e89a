//! Built-in crop and climate-zone reference data
//!
//! Static agronomic profiles loaded once and injected into the planner.
//! The numeric coefficients are illustrative planning constants, not
//! agronomic ground truth; the catalog exists so every engine operation
//! resolves ids through one lookup path.

use std::collections::HashMap;

use shared::models::{
    ClimateTolerance, ClimateZone, CropProfile, CropTiming, NutrientProfile, PlantingGeometry,
    RotationProfile, SoilPreference, WaterNeed,
};
use shared::types::{Drainage, FrostTolerance, Level, MonthDay, TempRange};

use crate::error::{PlannerError, PlannerResult};

/// Immutable catalog of crop profiles and climate zones
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: HashMap<String, CropProfile>,
    zones: HashMap<String, ClimateZone>,
}

impl CropCatalog {
    /// Catalog with the built-in reference data
    pub fn builtin() -> Self {
        let mut crops = HashMap::new();
        for crop in builtin_crops() {
            crops.insert(crop.id.clone(), crop);
        }
        let mut zones = HashMap::new();
        for zone in builtin_zones() {
            zones.insert(zone.code.clone(), zone);
        }
        Self { crops, zones }
    }

    /// Empty catalog for test fixtures
    pub fn empty() -> Self {
        Self {
            crops: HashMap::new(),
            zones: HashMap::new(),
        }
    }

    pub fn add_crop(&mut self, crop: CropProfile) {
        self.crops.insert(crop.id.clone(), crop);
    }

    pub fn add_zone(&mut self, zone: ClimateZone) {
        self.zones.insert(zone.code.clone(), zone);
    }

    /// Look up a crop profile by id
    pub fn crop(&self, id: &str) -> PlannerResult<&CropProfile> {
        self.crops
            .get(id)
            .ok_or_else(|| PlannerError::NotFound(format!("Crop '{id}'")))
    }

    /// Look up a climate zone by code
    pub fn zone(&self, code: &str) -> PlannerResult<&ClimateZone> {
        self.zones
            .get(code)
            .ok_or_else(|| PlannerError::NotFound(format!("Climate zone '{code}'")))
    }

    pub fn crop_ids(&self) -> impl Iterator<Item = &str> {
        self.crops.keys().map(String::as_str)
    }
}

fn builtin_zones() -> Vec<ClimateZone> {
    vec![
        ClimateZone {
            code: "4b".to_string(),
            last_frost: MonthDay::new(5, 15),
            first_frost: MonthDay::new(9, 25),
            gdd_base_temp_f: 40.0,
            annual_min_temp_f: TempRange::new(-25.0, -20.0),
        },
        ClimateZone {
            code: "5b".to_string(),
            last_frost: MonthDay::new(5, 1),
            first_frost: MonthDay::new(10, 5),
            gdd_base_temp_f: 45.0,
            annual_min_temp_f: TempRange::new(-15.0, -10.0),
        },
        ClimateZone {
            code: "6a".to_string(),
            last_frost: MonthDay::new(4, 21),
            first_frost: MonthDay::new(10, 17),
            gdd_base_temp_f: 50.0,
            annual_min_temp_f: TempRange::new(-10.0, -5.0),
        },
        ClimateZone {
            code: "6b".to_string(),
            last_frost: MonthDay::new(4, 15),
            first_frost: MonthDay::new(10, 21),
            gdd_base_temp_f: 50.0,
            annual_min_temp_f: TempRange::new(-5.0, 0.0),
        },
        ClimateZone {
            code: "7a".to_string(),
            last_frost: MonthDay::new(4, 5),
            first_frost: MonthDay::new(11, 5),
            gdd_base_temp_f: 50.0,
            annual_min_temp_f: TempRange::new(0.0, 5.0),
        },
        ClimateZone {
            code: "8a".to_string(),
            last_frost: MonthDay::new(3, 25),
            first_frost: MonthDay::new(10, 31),
            gdd_base_temp_f: 50.0,
            annual_min_temp_f: TempRange::new(10.0, 15.0),
        },
    ]
}

fn builtin_crops() -> Vec<CropProfile> {
    vec![
        CropProfile {
            id: "lettuce".to_string(),
            name: "Lettuce".to_string(),
            family: "asteraceae".to_string(),
            planting: PlantingGeometry {
                depth_inches: 0.25,
                plant_spacing_inches: 8.0,
                row_spacing_inches: 12.0,
            },
            timing: CropTiming {
                days_to_germination: 7,
                days_to_maturity: 55,
                harvest_window_days: 14,
            },
            climate: ClimateTolerance {
                min_soil_temp_f: 35.0,
                optimal_soil_temp_f: TempRange::new(60.0, 70.0),
                min_growing_temp_f: 45.0,
                optimal_growing_temp_f: TempRange::new(60.0, 70.0),
                frost_tolerance: FrostTolerance::Light,
            },
            soil: SoilPreference {
                ph_min: 6.0,
                ph_max: 7.0,
                drainage: Drainage::WellDrained,
                fertility: Level::High,
                organic_matter: Level::High,
            },
            water: WaterNeed {
                weekly_inches: 1.0,
                critical_stages: vec!["head formation".to_string()],
                drought_tolerance: Level::Low,
            },
            nutrients: NutrientProfile {
                nitrogen_demand: Level::Moderate,
                phosphorus_demand: Level::Moderate,
                potassium_demand: Level::Moderate,
                nitrogen_fixed_lbs_per_acre: 0.0,
            },
            rotation: RotationProfile {
                avoid_after_families: vec!["asteraceae".to_string()],
                good_after_families: vec!["fabaceae".to_string()],
                rest_period_years: 2,
            },
            companions: vec!["carrot".to_string(), "radish".to_string()],
            antagonists: vec![],
            pests: vec!["aphids".to_string(), "slugs".to_string()],
            diseases: vec!["downy mildew".to_string(), "lettuce drop".to_string()],
        },
        CropProfile {
            id: "spinach".to_string(),
            name: "Spinach".to_string(),
            family: "amaranthaceae".to_string(),
            planting: PlantingGeometry {
                depth_inches: 0.5,
                plant_spacing_inches: 3.0,
                row_spacing_inches: 12.0,
            },
            timing: CropTiming {
                days_to_germination: 8,
                days_to_maturity: 45,
                harvest_window_days: 21,
            },
            climate: ClimateTolerance {
                min_soil_temp_f: 38.0,
                optimal_soil_temp_f: TempRange::new(50.0, 65.0),
                min_growing_temp_f: 40.0,
                optimal_growing_temp_f: TempRange::new(50.0, 70.0),
                frost_tolerance: FrostTolerance::Moderate,
            },
            soil: SoilPreference {
                ph_min: 6.5,
                ph_max: 7.5,
                drainage: Drainage::WellDrained,
                fertility: Level::High,
                organic_matter: Level::High,
            },
            water: WaterNeed {
                weekly_inches: 1.0,
                critical_stages: vec!["leaf development".to_string()],
                drought_tolerance: Level::Low,
            },
            nutrients: NutrientProfile {
                nitrogen_demand: Level::High,
                phosphorus_demand: Level::Moderate,
                potassium_demand: Level::Moderate,
                nitrogen_fixed_lbs_per_acre: 0.0,
            },
            rotation: RotationProfile {
                avoid_after_families: vec!["amaranthaceae".to_string()],
                good_after_families: vec!["fabaceae".to_string()],
                rest_period_years: 2,
            },
            companions: vec!["radish".to_string(), "bush_bean".to_string()],
            antagonists: vec![],
            pests: vec!["leaf miners".to_string(), "aphids".to_string()],
            diseases: vec!["downy mildew".to_string()],
        },
        CropProfile {
            id: "radish".to_string(),
            name: "Radish".to_string(),
            family: "brassicaceae".to_string(),
            planting: PlantingGeometry {
                depth_inches: 0.5,
                plant_spacing_inches: 2.0,
                row_spacing_inches: 6.0,
            },
            timing: CropTiming {
                days_to_germination: 4,
                days_to_maturity: 25,
                harvest_window_days: 7,
            },
            climate: ClimateTolerance {
                min_soil_temp_f: 40.0,
                optimal_soil_temp_f: TempRange::new(55.0, 75.0),
                min_growing_temp_f: 40.0,
                optimal_growing_temp_f: TempRange::new(50.0, 70.0),
                frost_tolerance: FrostTolerance::Light,
            },
            soil: SoilPreference {
                ph_min: 6.0,
                ph_max: 7.0,
                drainage: Drainage::WellDrained,
                fertility: Level::Moderate,
                organic_matter: Level::Moderate,
            },
            water: WaterNeed {
                weekly_inches: 1.0,
                critical_stages: vec!["root expansion".to_string()],
                drought_tolerance: Level::Low,
            },
            nutrients: NutrientProfile {
                nitrogen_demand: Level::Low,
                phosphorus_demand: Level::Moderate,
                potassium_demand: Level::Moderate,
                nitrogen_fixed_lbs_per_acre: 0.0,
            },
            rotation: RotationProfile {
                avoid_after_families: vec![],
                good_after_families: vec!["fabaceae".to_string()],
                rest_period_years: 1,
            },
            companions: vec!["lettuce".to_string(), "spinach".to_string()],
            antagonists: vec![],
            pests: vec!["flea beetles".to_string(), "root maggots".to_string()],
            diseases: vec!["clubroot".to_string()],
        },
        CropProfile {
            id: "carrot".to_string(),
            name: "Carrot".to_string(),
            family: "apiaceae".to_string(),
            planting: PlantingGeometry {
                depth_inches: 0.25,
                plant_spacing_inches: 2.0,
                row_spacing_inches: 12.0,
            },
            timing: CropTiming {
                days_to_germination: 14,
                days_to_maturity: 75,
                harvest_window_days: 21,
            },
            climate: ClimateTolerance {
                min_soil_temp_f: 40.0,
                optimal_soil_temp_f: TempRange::new(55.0, 75.0),
                min_growing_temp_f: 45.0,
                optimal_growing_temp_f: TempRange::new(55.0, 75.0),
                frost_tolerance: FrostTolerance::Light,
            },
            soil: SoilPreference {
                ph_min: 6.0,
                ph_max: 6.8,
                drainage: Drainage::WellDrained,
                fertility: Level::Moderate,
                organic_matter: Level::Moderate,
            },
            water: WaterNeed {
                weekly_inches: 1.0,
                critical_stages: vec!["germination".to_string(), "root expansion".to_string()],
                drought_tolerance: Level::Moderate,
            },
            nutrients: NutrientProfile {
                nitrogen_demand: Level::Low,
                phosphorus_demand: Level::High,
                potassium_demand: Level::High,
                nitrogen_fixed_lbs_per_acre: 0.0,
            },
            rotation: RotationProfile {
                avoid_after_families: vec!["apiaceae".to_string()],
                good_after_families: vec!["alliaceae".to_string()],
                rest_period_years: 3,
            },
            companions: vec!["lettuce".to_string(), "tomato".to_string()],
            antagonists: vec![],
            pests: vec!["carrot rust fly".to_string(), "wireworms".to_string()],
            diseases: vec!["alternaria leaf blight".to_string()],
        },
        CropProfile {
            id: "bush_bean".to_string(),
            name: "Bush Bean".to_string(),
            family: "fabaceae".to_string(),
            planting: PlantingGeometry {
                depth_inches: 1.0,
                plant_spacing_inches: 4.0,
                row_spacing_inches: 18.0,
            },
            timing: CropTiming {
                days_to_germination: 8,
                days_to_maturity: 55,
                harvest_window_days: 14,
            },
            climate: ClimateTolerance {
                min_soil_temp_f: 60.0,
                optimal_soil_temp_f: TempRange::new(70.0, 80.0),
                min_growing_temp_f: 55.0,
                optimal_growing_temp_f: TempRange::new(65.0, 85.0),
                frost_tolerance: FrostTolerance::None,
            },
            soil: SoilPreference {
                ph_min: 6.0,
                ph_max: 7.0,
                drainage: Drainage::WellDrained,
                fertility: Level::Moderate,
                organic_matter: Level::Moderate,
            },
            water: WaterNeed {
                weekly_inches: 1.0,
                critical_stages: vec!["flowering".to_string(), "pod fill".to_string()],
                drought_tolerance: Level::Moderate,
            },
            nutrients: NutrientProfile {
                nitrogen_demand: Level::Low,
                phosphorus_demand: Level::Moderate,
                potassium_demand: Level::Moderate,
                nitrogen_fixed_lbs_per_acre: 40.0,
            },
            rotation: RotationProfile {
                avoid_after_families: vec!["fabaceae".to_string()],
                good_after_families: vec!["poaceae".to_string()],
                rest_period_years: 2,
            },
            companions: vec!["carrot".to_string(), "spinach".to_string()],
            antagonists: vec!["allium".to_string()],
            pests: vec!["mexican bean beetle".to_string(), "aphids".to_string()],
            diseases: vec!["bacterial blight".to_string(), "rust".to_string()],
        },
        CropProfile {
            id: "beet".to_string(),
            name: "Beet".to_string(),
            family: "amaranthaceae".to_string(),
            planting: PlantingGeometry {
                depth_inches: 0.5,
                plant_spacing_inches: 3.0,
                row_spacing_inches: 12.0,
            },
            timing: CropTiming {
                days_to_germination: 8,
                days_to_maturity: 60,
                harvest_window_days: 21,
            },
            climate: ClimateTolerance {
                min_soil_temp_f: 40.0,
                optimal_soil_temp_f: TempRange::new(55.0, 75.0),
                min_growing_temp_f: 40.0,
                optimal_growing_temp_f: TempRange::new(55.0, 75.0),
                frost_tolerance: FrostTolerance::Moderate,
            },
            soil: SoilPreference {
                ph_min: 6.2,
                ph_max: 7.0,
                drainage: Drainage::WellDrained,
                fertility: Level::Moderate,
                organic_matter: Level::Moderate,
            },
            water: WaterNeed {
                weekly_inches: 1.0,
                critical_stages: vec!["root expansion".to_string()],
                drought_tolerance: Level::Moderate,
            },
            nutrients: NutrientProfile {
                nitrogen_demand: Level::Moderate,
                phosphorus_demand: Level::Moderate,
                potassium_demand: Level::High,
                nitrogen_fixed_lbs_per_acre: 0.0,
            },
            rotation: RotationProfile {
                avoid_after_families: vec!["amaranthaceae".to_string()],
                good_after_families: vec!["brassicaceae".to_string()],
                rest_period_years: 2,
            },
            companions: vec!["lettuce".to_string(), "radish".to_string()],
            antagonists: vec![],
            pests: vec!["leaf miners".to_string(), "flea beetles".to_string()],
            diseases: vec!["cercospora leaf spot".to_string()],
        },
        CropProfile {
            id: "broccoli".to_string(),
            name: "Broccoli".to_string(),
            family: "brassicaceae".to_string(),
            planting: PlantingGeometry {
                depth_inches: 0.5,
                plant_spacing_inches: 18.0,
                row_spacing_inches: 30.0,
            },
            timing: CropTiming {
                days_to_germination: 7,
                days_to_maturity: 70,
                harvest_window_days: 14,
            },
            climate: ClimateTolerance {
                min_soil_temp_f: 40.0,
                optimal_soil_temp_f: TempRange::new(55.0, 75.0),
                min_growing_temp_f: 40.0,
                optimal_growing_temp_f: TempRange::new(60.0, 70.0),
                frost_tolerance: FrostTolerance::Moderate,
            },
            soil: SoilPreference {
                ph_min: 6.0,
                ph_max: 7.0,
                drainage: Drainage::WellDrained,
                fertility: Level::High,
                organic_matter: Level::High,
            },
            water: WaterNeed {
                weekly_inches: 1.5,
                critical_stages: vec!["head formation".to_string()],
                drought_tolerance: Level::Low,
            },
            nutrients: NutrientProfile {
                nitrogen_demand: Level::High,
                phosphorus_demand: Level::Moderate,
                potassium_demand: Level::Moderate,
                nitrogen_fixed_lbs_per_acre: 0.0,
            },
            rotation: RotationProfile {
                avoid_after_families: vec!["solanaceae".to_string()],
                good_after_families: vec!["fabaceae".to_string()],
                rest_period_years: 3,
            },
            companions: vec!["beet".to_string(), "spinach".to_string()],
            antagonists: vec!["tomato".to_string()],
            pests: vec!["cabbage worms".to_string(), "aphids".to_string()],
            diseases: vec!["clubroot".to_string(), "black rot".to_string()],
        },
        CropProfile {
            id: "tomato".to_string(),
            name: "Tomato".to_string(),
            family: "solanaceae".to_string(),
            planting: PlantingGeometry {
                depth_inches: 0.25,
                plant_spacing_inches: 24.0,
                row_spacing_inches: 48.0,
            },
            timing: CropTiming {
                days_to_germination: 7,
                days_to_maturity: 80,
                harvest_window_days: 45,
            },
            climate: ClimateTolerance {
                min_soil_temp_f: 60.0,
                optimal_soil_temp_f: TempRange::new(70.0, 85.0),
                min_growing_temp_f: 55.0,
                optimal_growing_temp_f: TempRange::new(70.0, 85.0),
                frost_tolerance: FrostTolerance::None,
            },
            soil: SoilPreference {
                ph_min: 6.0,
                ph_max: 6.8,
                drainage: Drainage::WellDrained,
                fertility: Level::High,
                organic_matter: Level::High,
            },
            water: WaterNeed {
                weekly_inches: 1.5,
                critical_stages: vec!["flowering".to_string(), "fruit set".to_string()],
                drought_tolerance: Level::Moderate,
            },
            nutrients: NutrientProfile {
                nitrogen_demand: Level::High,
                phosphorus_demand: Level::High,
                potassium_demand: Level::High,
                nitrogen_fixed_lbs_per_acre: 0.0,
            },
            rotation: RotationProfile {
                avoid_after_families: vec!["solanaceae".to_string(), "brassicaceae".to_string()],
                good_after_families: vec!["fabaceae".to_string()],
                rest_period_years: 3,
            },
            companions: vec!["carrot".to_string()],
            antagonists: vec!["broccoli".to_string()],
            pests: vec!["hornworms".to_string(), "whiteflies".to_string()],
            diseases: vec!["early blight".to_string(), "fusarium wilt".to_string()],
        },
    ]
}
