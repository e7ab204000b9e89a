//! Weather-driven planting advice
//!
//! Multi-factor weighted scoring of current conditions and forecast data
//! against a crop's tolerances. Factors whose inputs are missing (no soil
//! temperature, empty forecast) drop out of both the earned score and the
//! available maximum, so thin data lowers confidence without failing.

use chrono::NaiveDate;
use shared::models::{
    CropProfile, PlantingAdvice, PlantingRecommendation, ScoredFactor, WeatherBundle,
    WeatherForecastDay,
};
use shared::types::WeatherRiskTier;

use crate::calendar::{add_days, days_between};

/// Freezing point used for frost-day counting, °F
pub const FREEZE_TEMP_F: f64 = 32.0;
/// Daily maximum above this is heat stress, °F
pub const HEAT_STRESS_TEMP_F: f64 = 95.0;
/// Daily precipitation above this counts as heavy rain, inches
pub const HEAVY_RAIN_INCHES: f64 = 1.0;
/// Sustained wind above this is damaging, mph
pub const HIGH_WIND_MPH: f64 = 25.0;
/// Wind at or below this is calm enough for transplanting, mph
pub const CALM_WIND_MPH: f64 = 15.0;

const SOIL_WEIGHT: f64 = 20.0;
const FROST_WEIGHT: f64 = 25.0;
const PRECIP_WEIGHT: f64 = 15.0;
const TEMP_WEIGHT: f64 = 20.0;
const WIND_WEIGHT: f64 = 10.0;

/// Days a planting must be within for weather risk to be assessed at all
pub const RISK_HORIZON_DAYS: i64 = 14;

/// Score current weather and forecast for planting `crop` at `location`.
///
/// `today` anchors the evaluation; the result is deterministic for a given
/// bundle and date.
pub fn analyze_planting_conditions(
    crop: &CropProfile,
    weather: &WeatherBundle,
    location: &str,
    today: NaiveDate,
) -> PlantingAdvice {
    let mut earned = 0.0;
    let mut available = 0.0;
    let mut factors: Vec<ScoredFactor> = Vec::new();
    let mut risk_factors: Vec<String> = Vec::new();

    // Soil temperature, counted only when a reading exists
    match weather.current.soil_temp_f {
        Some(soil_temp) => {
            available += SOIL_WEIGHT;
            let (score, note) = if crop.climate.optimal_soil_temp_f.contains(soil_temp) {
                (SOIL_WEIGHT, format!("Soil at {soil_temp}°F is in the optimal range"))
            } else if soil_temp >= crop.climate.min_soil_temp_f {
                (
                    SOIL_WEIGHT / 2.0,
                    format!("Soil at {soil_temp}°F is workable but below optimal"),
                )
            } else {
                risk_factors.push(format!(
                    "Soil at {soil_temp}°F is below the crop minimum of {}°F",
                    crop.climate.min_soil_temp_f
                ));
                (0.0, "Soil too cold for germination".to_string())
            };
            earned += score;
            factors.push(ScoredFactor {
                name: "soil_temperature".to_string(),
                score,
                weight: SOIL_WEIGHT,
                note,
            });
        }
        None => {
            risk_factors
                .push("Soil temperature unavailable; soil factor excluded from scoring".to_string());
        }
    }

    if weather.forecast.is_empty() {
        risk_factors.push("Forecast unavailable; forecast factors excluded from scoring".to_string());
    } else {
        // Frost risk over the next 14 days
        available += FROST_WEIGHT;
        let freeze_days = weather
            .forecast_slice(14)
            .iter()
            .filter(|day| day.temp.min_f < FREEZE_TEMP_F)
            .count();
        let (score, note) = if freeze_days == 0 {
            (FROST_WEIGHT, "No freeze days in the 14-day forecast".to_string())
        } else if crop.climate.frost_tolerance.is_hardy() {
            (
                15.0,
                format!("{freeze_days} freeze day(s) ahead; crop tolerates frost"),
            )
        } else {
            risk_factors.push(format!(
                "{freeze_days} freeze day(s) forecast for a frost-intolerant crop"
            ));
            (0.0, "Freeze expected".to_string())
        };
        earned += score;
        factors.push(ScoredFactor {
            name: "frost_risk".to_string(),
            score,
            weight: FROST_WEIGHT,
            note,
        });

        // 7-day precipitation total
        available += PRECIP_WEIGHT;
        let precip_total: f64 = weather
            .forecast_slice(7)
            .iter()
            .map(|day| day.precipitation_inches)
            .sum();
        let (score, note) = if (0.5..=2.0).contains(&precip_total) {
            (
                PRECIP_WEIGHT,
                format!("{precip_total:.1}in of rain this week is adequate"),
            )
        } else if precip_total < 0.5 {
            risk_factors.push(format!(
                "Only {precip_total:.1}in of rain forecast; irrigation will be needed"
            ));
            (0.0, "Too dry".to_string())
        } else {
            risk_factors.push(format!(
                "{precip_total:.1}in of rain forecast; fields may be too wet to access"
            ));
            (0.0, "Too wet".to_string())
        };
        earned += score;
        factors.push(ScoredFactor {
            name: "precipitation".to_string(),
            score,
            weight: PRECIP_WEIGHT,
            note,
        });

        // 7-day average temperature
        available += TEMP_WEIGHT;
        let week = weather.forecast_slice(7);
        let avg_temp: f64 =
            week.iter().map(|day| day.temp.avg_f).sum::<f64>() / week.len() as f64;
        let (score, note) = if crop.climate.optimal_growing_temp_f.contains(avg_temp) {
            (
                TEMP_WEIGHT,
                format!("Average of {avg_temp:.0}°F is in the optimal growing range"),
            )
        } else if avg_temp >= crop.climate.min_growing_temp_f {
            (
                TEMP_WEIGHT / 2.0,
                format!("Average of {avg_temp:.0}°F is survivable but below optimal"),
            )
        } else {
            risk_factors.push(format!(
                "Average of {avg_temp:.0}°F is below the crop minimum of {}°F",
                crop.climate.min_growing_temp_f
            ));
            (0.0, "Too cold to grow".to_string())
        };
        earned += score;
        factors.push(ScoredFactor {
            name: "temperature".to_string(),
            score,
            weight: TEMP_WEIGHT,
            note,
        });
    }

    // Current wind
    available += WIND_WEIGHT;
    let wind = weather.current.wind_speed_mph;
    let (score, note) = if wind <= CALM_WIND_MPH {
        (WIND_WEIGHT, format!("{wind:.0}mph wind is calm"))
    } else if wind > HIGH_WIND_MPH {
        risk_factors.push(format!("{wind:.0}mph wind will damage transplants"));
        (0.0, "Too windy".to_string())
    } else {
        (WIND_WEIGHT / 2.0, format!("{wind:.0}mph wind is workable"))
    };
    earned += score;
    factors.push(ScoredFactor {
        name: "wind".to_string(),
        score,
        weight: WIND_WEIGHT,
        note,
    });

    let confidence = if available > 0.0 {
        (100.0 * earned / available).round() as u32
    } else {
        0
    };

    let recommendation = match confidence {
        85.. => PlantingRecommendation::Ideal,
        70..=84 => PlantingRecommendation::Good,
        50..=69 => PlantingRecommendation::Caution,
        30..=49 => PlantingRecommendation::Wait,
        _ => PlantingRecommendation::TooLate,
    };

    let next_evaluation = if recommendation == PlantingRecommendation::Wait {
        add_days(today, 3)
    } else {
        add_days(today, 7)
    };

    tracing::debug!(
        crop = %crop.id,
        %location,
        confidence,
        ?recommendation,
        "planting conditions analyzed"
    );

    PlantingAdvice {
        recommendation,
        confidence,
        factors,
        best_planting_dates: best_planting_dates(crop, &weather.forecast),
        risk_factors,
        next_evaluation,
    }
}

/// Scan the forecast for up to three good planting days.
///
/// Day 0 is skipped (too soon to prepare). A day qualifies at 6 of 8
/// points: suitable temperatures (+3), little rain (+2), calm wind (+1),
/// and no extreme weather in the following three days (+2).
fn best_planting_dates(crop: &CropProfile, forecast: &[WeatherForecastDay]) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    for (i, day) in forecast.iter().enumerate().skip(1) {
        let mut points = 0;
        if day.temp.min_f >= crop.climate.min_growing_temp_f
            && day.temp.max_f <= crop.climate.optimal_growing_temp_f.max_f + 5.0
        {
            points += 3;
        }
        if day.precipitation_inches <= 0.2 {
            points += 2;
        }
        if day.wind_speed_mph <= CALM_WIND_MPH {
            points += 1;
        }
        let extreme_ahead = forecast[i + 1..]
            .iter()
            .take(3)
            .any(is_extreme_weather_day);
        if !extreme_ahead {
            points += 2;
        }
        if points >= 6 {
            dates.push(day.date);
            if dates.len() == 3 {
                break;
            }
        }
    }
    dates
}

fn is_extreme_weather_day(day: &WeatherForecastDay) -> bool {
    day.temp.min_f < FREEZE_TEMP_F
        || day.precipitation_inches > HEAVY_RAIN_INCHES
        || day.wind_speed_mph > HIGH_WIND_MPH
}

/// Classify weather risk for a planting scheduled on `planting_date`.
///
/// Only plantings within the next 14 days are evaluated; anything further
/// out (or with no weather supplied) defaults to low risk.
pub fn assess_planting_risk(
    planting_date: NaiveDate,
    today: NaiveDate,
    weather: Option<&WeatherBundle>,
) -> WeatherRiskTier {
    let Some(bundle) = weather else {
        return WeatherRiskTier::Low;
    };
    let days_until = days_between(today, planting_date);
    if !(0..=RISK_HORIZON_DAYS).contains(&days_until) {
        return WeatherRiskTier::Low;
    }

    let slice_len = RISK_HORIZON_DAYS.min(days_until + 7) as usize;
    let slice = bundle.forecast_slice(slice_len);

    let freeze = slice.iter().any(|d| d.temp.min_f < FREEZE_TEMP_F);
    let heat = slice.iter().any(|d| d.temp.max_f > HEAT_STRESS_TEMP_F);
    let heavy_rain_days = slice
        .iter()
        .filter(|d| d.precipitation_inches > HEAVY_RAIN_INCHES)
        .count();
    let high_wind_days = slice
        .iter()
        .filter(|d| d.wind_speed_mph > HIGH_WIND_MPH)
        .count();

    if freeze || heat || heavy_rain_days > 3 {
        WeatherRiskTier::High
    } else if heavy_rain_days > 1 || high_wind_days > 2 {
        WeatherRiskTier::Moderate
    } else {
        WeatherRiskTier::Low
    }
}
