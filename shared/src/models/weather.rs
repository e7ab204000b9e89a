//! Weather data models
//!
//! Supplied by the caller from an external forecast provider.
//! The engine reads these and never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily min/max/average temperatures
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyTemperature {
    pub min_f: f64,
    pub max_f: f64,
    pub avg_f: f64,
}

/// One day of forecast data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecastDay {
    pub date: NaiveDate,
    pub temp: DailyTemperature,
    pub soil_temp_f: Option<f64>,
    pub precipitation_inches: f64,
    pub humidity_percent: f64,
    pub wind_speed_mph: f64,
    pub uv_index: Option<f64>,
}

/// Conditions at the time the bundle was assembled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_f: f64,
    pub soil_temp_f: Option<f64>,
    pub precipitation_inches: f64,
    pub humidity_percent: f64,
    pub wind_speed_mph: f64,
}

/// Pre-fetched weather data passed into the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub current: CurrentConditions,
    pub forecast: Vec<WeatherForecastDay>,
    /// Provider alert strings, passed through untouched
    pub alerts: Vec<String>,
}

impl WeatherBundle {
    /// First `days` forecast entries (or fewer when the forecast is short)
    pub fn forecast_slice(&self, days: usize) -> &[WeatherForecastDay] {
        &self.forecast[..self.forecast.len().min(days)]
    }
}
