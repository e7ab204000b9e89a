//! Common types used across the planner

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A crop's ability to survive sub-freezing temperatures
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FrostTolerance {
    None,
    Light,
    Moderate,
    Heavy,
}

impl FrostTolerance {
    /// Whether the crop can shrug off a light freeze
    pub fn is_hardy(&self) -> bool {
        !matches!(self, FrostTolerance::None)
    }
}

/// Lifecycle status of a single succession planting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PlantingStatus {
    Planned,
    Planted,
    Growing,
    Harvesting,
    Completed,
}

impl PlantingStatus {
    /// Status moves forward only, one step at a time
    pub fn can_advance_to(&self, next: PlantingStatus) -> bool {
        (next as u8) == (*self as u8) + 1
    }
}

/// Coarse classification of forecast-derived risk
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WeatherRiskTier {
    Low,
    Moderate,
    High,
}

/// Three-step demand/tolerance scale used for nutrients, fertility,
/// organic matter, and drought tolerance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Moderate,
    High,
}

/// Soil drainage preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Drainage {
    Poor,
    Moderate,
    WellDrained,
}

/// A recurring calendar day (frost dates repeat every year)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Pin this month-day to a concrete year.
    /// Returns None for dates that do not exist in that year.
    pub fn resolve(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// An inclusive temperature band in degrees Fahrenheit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TempRange {
    pub min_f: f64,
    pub max_f: f64,
}

impl TempRange {
    pub fn new(min_f: f64, max_f: f64) -> Self {
        Self { min_f, max_f }
    }

    pub fn contains(&self, temp_f: f64) -> bool {
        temp_f >= self.min_f && temp_f <= self.max_f
    }

    pub fn midpoint(&self) -> f64 {
        (self.min_f + self.max_f) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_advances_one_step() {
        assert!(PlantingStatus::Planned.can_advance_to(PlantingStatus::Planted));
        assert!(PlantingStatus::Growing.can_advance_to(PlantingStatus::Harvesting));
        assert!(!PlantingStatus::Planned.can_advance_to(PlantingStatus::Growing));
        assert!(!PlantingStatus::Harvesting.can_advance_to(PlantingStatus::Planted));
        assert!(!PlantingStatus::Completed.can_advance_to(PlantingStatus::Planned));
    }

    #[test]
    fn test_month_day_resolution() {
        let md = MonthDay::new(4, 15);
        assert_eq!(md.resolve(2025), NaiveDate::from_ymd_opt(2025, 4, 15));
        // Feb 29 only exists in leap years
        assert!(MonthDay::new(2, 29).resolve(2024).is_some());
        assert!(MonthDay::new(2, 29).resolve(2025).is_none());
    }

    #[test]
    fn test_temp_range_contains_bounds() {
        let range = TempRange::new(60.0, 75.0);
        assert!(range.contains(60.0));
        assert!(range.contains(75.0));
        assert!(!range.contains(59.9));
        assert_eq!(range.midpoint(), 67.5);
    }
}
