//! Advisor and recommendation output models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Plant-now / wait verdict from the weather advisor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlantingRecommendation {
    Ideal,
    Good,
    Caution,
    Wait,
    TooLate,
}

/// One weighted factor from the advisor's scoring pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredFactor {
    pub name: String,
    pub score: f64,
    pub weight: f64,
    pub note: String,
}

/// Full weather-driven planting assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingAdvice {
    pub recommendation: PlantingRecommendation,
    /// 0-100, earned share of the available factor weight
    pub confidence: u32,
    pub factors: Vec<ScoredFactor>,
    /// Up to three qualifying forecast days, chronological
    pub best_planting_dates: Vec<NaiveDate>,
    pub risk_factors: Vec<String>,
    pub next_evaluation: NaiveDate,
}

/// Rotation compatibility verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationAssessment {
    pub compatible: bool,
    pub reason: String,
    /// 0-10
    pub score: u32,
}

/// Cadence of a succession strategy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlantingCadence {
    Weekly,
    Biweekly,
    Monthly,
}

/// One alternative succession strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessionStrategy {
    pub cadence: PlantingCadence,
    pub interval_days: i64,
    pub plantings: u32,
    pub area_per_planting_acres: f64,
    pub benefits: Vec<String>,
    pub considerations: Vec<String>,
}

/// Three strategies plus the default pick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySet {
    pub options: Vec<SuccessionStrategy>,
    /// Index into `options`
    pub best_option: usize,
}
