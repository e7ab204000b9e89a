//! Progress monitoring against a live plan
//!
//! Compares actual harvest records and fresh weather data against a
//! previously generated plan, flagging schedule drift, yield shortfall,
//! and weather risk to upcoming plantings.

use chrono::NaiveDate;
use shared::models::{
    ActualHarvest, AdjustmentKind, AdjustmentSuggestion, AlertKind, AlertSeverity, ProgressAlert,
    ProgressReport, ProgressStatus, SuccessionPlan, WeatherBundle,
};
use shared::types::{PlantingStatus, WeatherRiskTier};

use crate::advisor::{assess_planting_risk, RISK_HORIZON_DAYS};
use crate::calendar::{add_days, days_between};

/// Yield variance below this fraction of expected triggers a shortfall alert
const YIELD_SHORTFALL_THRESHOLD: f64 = -0.20;
/// How many plantings a schedule can drift before an alert
const SCHEDULE_DRIFT_TOLERANCE: i64 = 1;
/// Days a high-risk planting is pushed back
const TIMING_ADJUSTMENT_DAYS: i64 = 5;

/// Evaluate a live plan against actual outcomes and fresh weather
pub fn monitor_progress(
    plan: &SuccessionPlan,
    actual_harvests: &[ActualHarvest],
    weather: &WeatherBundle,
    today: NaiveDate,
) -> ProgressReport {
    let mut alerts: Vec<ProgressAlert> = Vec::new();
    let mut adjustments: Vec<AdjustmentSuggestion> = Vec::new();

    // Schedule drift: completed-by-now plantings vs recorded harvests
    let planned_complete = plan
        .plantings
        .iter()
        .filter(|p| p.harvest_end <= today)
        .count() as i64;
    let actual_complete = actual_harvests.len() as i64;

    let mut status = ProgressStatus::OnTrack;
    if planned_complete - actual_complete > SCHEDULE_DRIFT_TOLERANCE {
        status = ProgressStatus::BehindSchedule;
        alerts.push(ProgressAlert {
            kind: AlertKind::Timing,
            severity: AlertSeverity::Medium,
            message: format!(
                "{planned_complete} planting(s) should have finished harvest but only {actual_complete} are recorded"
            ),
        });
    } else if actual_complete - planned_complete > SCHEDULE_DRIFT_TOLERANCE {
        status = ProgressStatus::AheadOfSchedule;
    }

    // Yield shortfall: actuals vs the same-count prefix of expected yields
    if !actual_harvests.is_empty() {
        let count = actual_harvests.len().min(plan.plantings.len());
        let avg_actual: f64 = actual_harvests
            .iter()
            .map(|h| h.actual_yield_lbs)
            .sum::<f64>()
            / actual_harvests.len() as f64;
        let avg_expected: f64 = plan.plantings[..count]
            .iter()
            .map(|p| p.expected_yield_lbs)
            .sum::<f64>()
            / count as f64;

        if avg_expected > 0.0 {
            let variance = (avg_actual - avg_expected) / avg_expected;
            if variance < YIELD_SHORTFALL_THRESHOLD {
                alerts.push(ProgressAlert {
                    kind: AlertKind::Yield,
                    severity: AlertSeverity::High,
                    message: format!(
                        "Average yield of {avg_actual:.0} lbs is {:.0}% below the expected {avg_expected:.0} lbs",
                        -variance * 100.0
                    ),
                });
                for planting in plan
                    .plantings
                    .iter()
                    .filter(|p| p.status != PlantingStatus::Completed)
                {
                    adjustments.push(AdjustmentSuggestion {
                        kind: AdjustmentKind::IncreaseCare,
                        sequence: planting.sequence,
                        suggested_date: None,
                        message: format!(
                            "Increase irrigation and fertility checks for planting {}",
                            planting.sequence
                        ),
                    });
                }
            }
        }
    }

    // Weather risk for plantings coming up within the horizon
    for planting in &plan.plantings {
        let days_until = days_between(today, planting.planting_date);
        if !(0..=RISK_HORIZON_DAYS).contains(&days_until) {
            continue;
        }
        match assess_planting_risk(planting.planting_date, today, Some(weather)) {
            WeatherRiskTier::High => {
                alerts.push(ProgressAlert {
                    kind: AlertKind::Weather,
                    severity: AlertSeverity::High,
                    message: format!(
                        "High weather risk for planting {} on {}",
                        planting.sequence, planting.planting_date
                    ),
                });
                adjustments.push(AdjustmentSuggestion {
                    kind: AdjustmentKind::AdjustTiming,
                    sequence: planting.sequence,
                    suggested_date: Some(add_days(
                        planting.planting_date,
                        TIMING_ADJUSTMENT_DAYS,
                    )),
                    message: format!(
                        "Delay planting {} by {TIMING_ADJUSTMENT_DAYS} days to clear the risk window",
                        planting.sequence
                    ),
                });
            }
            WeatherRiskTier::Moderate => {
                alerts.push(ProgressAlert {
                    kind: AlertKind::Weather,
                    severity: AlertSeverity::Medium,
                    message: format!(
                        "Moderate weather risk for planting {} on {}",
                        planting.sequence, planting.planting_date
                    ),
                });
            }
            WeatherRiskTier::Low => {}
        }
    }

    // Any high alert or pending adjustment overrides the schedule status
    if alerts.iter().any(|a| a.severity == AlertSeverity::High) || !adjustments.is_empty() {
        status = ProgressStatus::AdjustmentsNeeded;
    }

    tracing::debug!(
        plan = %plan.id,
        ?status,
        alerts = alerts.len(),
        adjustments = adjustments.len(),
        "progress evaluated"
    );

    ProgressReport {
        status,
        alerts,
        adjustments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        CurrentConditions, DailyTemperature, HarvestCalendar, ResourcePlan, SuccessionPlanting,
        WeatherForecastDay,
    };
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn planting(seq: u32, planting_date: NaiveDate, status: PlantingStatus) -> SuccessionPlanting {
        let harvest_start = add_days(planting_date, 50);
        SuccessionPlanting {
            sequence: seq,
            planting_date,
            harvest_start,
            harvest_end: add_days(harvest_start, 14),
            area_acres: 0.5,
            status,
            expected_yield_lbs: 1000.0,
            actual_yield_lbs: None,
            weather_risk: None,
        }
    }

    fn plan(plantings: Vec<SuccessionPlanting>) -> SuccessionPlan {
        SuccessionPlan {
            id: Uuid::new_v4(),
            crop_id: "lettuce".to_string(),
            field_id: Uuid::new_v4(),
            total_area_acres: plantings.iter().map(|p| p.area_acres).sum(),
            successions: plantings.len() as u32,
            interval_days: 7,
            start_date: plantings[0].planting_date,
            end_date: plantings[plantings.len() - 1].harvest_end,
            plantings,
            harvest_calendar: HarvestCalendar {
                weeks: vec![],
                peak_weeks: vec![],
                total_season_yield_lbs: 0.0,
            },
            resources: ResourcePlan {
                seeds_per_planting: 0,
                total_seeds: 0,
                labor_hours: 0,
                irrigation_dates: vec![],
            },
        }
    }

    fn forecast_day(date: NaiveDate, min_f: f64) -> WeatherForecastDay {
        WeatherForecastDay {
            date,
            temp: DailyTemperature {
                min_f,
                max_f: min_f + 20.0,
                avg_f: min_f + 10.0,
            },
            soil_temp_f: None,
            precipitation_inches: 0.1,
            humidity_percent: 50.0,
            wind_speed_mph: 5.0,
            uv_index: None,
        }
    }

    fn mild_weather(from: NaiveDate) -> WeatherBundle {
        WeatherBundle {
            current: CurrentConditions {
                temp_f: 65.0,
                soil_temp_f: Some(60.0),
                precipitation_inches: 0.0,
                humidity_percent: 50.0,
                wind_speed_mph: 5.0,
            },
            forecast: (0..7).map(|i| forecast_day(add_days(from, i), 50.0)).collect(),
            alerts: vec![],
        }
    }

    fn harvest(seq: u32, yield_lbs: f64) -> ActualHarvest {
        ActualHarvest {
            sequence: seq,
            harvest_date: date(2025, 6, 20),
            actual_yield_lbs: yield_lbs,
        }
    }

    #[test]
    fn test_on_track_when_harvests_match_plan() {
        let today = date(2025, 7, 1);
        // One planting finished in June, the next is months out
        let plan = plan(vec![
            planting(1, date(2025, 4, 20), PlantingStatus::Completed),
            planting(2, date(2025, 8, 1), PlantingStatus::Planned),
        ]);
        let report = monitor_progress(&plan, &[harvest(1, 1000.0)], &mild_weather(today), today);
        assert_eq!(report.status, ProgressStatus::OnTrack);
        assert!(report.alerts.is_empty());
        assert!(report.adjustments.is_empty());
    }

    #[test]
    fn test_missing_harvests_flag_behind_schedule() {
        let today = date(2025, 8, 1);
        // Both plantings should be done, nothing recorded
        let plan = plan(vec![
            planting(1, date(2025, 4, 1), PlantingStatus::Harvesting),
            planting(2, date(2025, 4, 15), PlantingStatus::Harvesting),
        ]);
        let report = monitor_progress(&plan, &[], &mild_weather(today), today);
        assert_eq!(report.status, ProgressStatus::BehindSchedule);
        assert!(report
            .alerts
            .iter()
            .any(|a| a.kind == AlertKind::Timing && a.severity == AlertSeverity::Medium));
    }

    #[test]
    fn test_one_planting_drift_is_tolerated() {
        let today = date(2025, 8, 1);
        let plan = plan(vec![
            planting(1, date(2025, 4, 1), PlantingStatus::Harvesting),
            planting(2, date(2025, 8, 15), PlantingStatus::Planned),
        ]);
        let report = monitor_progress(&plan, &[], &mild_weather(today), today);
        assert_eq!(report.status, ProgressStatus::OnTrack);
    }

    #[test]
    fn test_yield_shortfall_triggers_care_adjustments() {
        let today = date(2025, 7, 1);
        let plan = plan(vec![
            planting(1, date(2025, 4, 20), PlantingStatus::Completed),
            planting(2, date(2025, 8, 1), PlantingStatus::Planned),
        ]);
        // 700 against 1000 expected: 30% short
        let report = monitor_progress(&plan, &[harvest(1, 700.0)], &mild_weather(today), today);
        assert_eq!(report.status, ProgressStatus::AdjustmentsNeeded);
        assert!(report
            .alerts
            .iter()
            .any(|a| a.kind == AlertKind::Yield && a.severity == AlertSeverity::High));
        // Care suggestions target the plantings still in flight
        assert_eq!(report.adjustments.len(), 1);
        assert_eq!(report.adjustments[0].kind, AdjustmentKind::IncreaseCare);
        assert_eq!(report.adjustments[0].sequence, 2);
    }

    #[test]
    fn test_small_yield_variance_passes() {
        let today = date(2025, 7, 1);
        let plan = plan(vec![
            planting(1, date(2025, 4, 20), PlantingStatus::Completed),
        ]);
        // 10% short stays inside tolerance
        let report = monitor_progress(&plan, &[harvest(1, 900.0)], &mild_weather(today), today);
        assert!(report.alerts.is_empty());
    }

    #[test]
    fn test_freeze_ahead_suggests_delaying_the_planting() {
        let today = date(2025, 5, 1);
        let plan = plan(vec![planting(1, date(2025, 5, 5), PlantingStatus::Planned)]);
        let mut weather = mild_weather(today);
        weather.forecast[3] = forecast_day(date(2025, 5, 4), 28.0);
        let report = monitor_progress(&plan, &[], &weather, today);
        assert_eq!(report.status, ProgressStatus::AdjustmentsNeeded);
        assert!(report
            .alerts
            .iter()
            .any(|a| a.kind == AlertKind::Weather && a.severity == AlertSeverity::High));
        assert_eq!(report.adjustments[0].kind, AdjustmentKind::AdjustTiming);
        assert_eq!(report.adjustments[0].suggested_date, Some(date(2025, 5, 10)));
    }
}
