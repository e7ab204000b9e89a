//! Weekly harvest calendar aggregation
//!
//! Buckets a plan's plantings into calendar weeks and pro-rates each
//! planting's expected yield across the weeks its harvest interval touches.

use chrono::{NaiveDate, Weekday};
use shared::models::{HarvestCalendar, HarvestWeek, SuccessionPlanting};

use crate::calendar::{add_days, days_between, overlap_days, week_start_of};

/// Share of weeks flagged as peak harvest
const PEAK_WEEK_FRACTION: f64 = 0.25;

/// Build the weekly yield calendar for a set of plantings.
///
/// `total_season_yield_lbs` sums the plantings' expected yields directly;
/// the per-week buckets pro-rate by day overlap and may sum to a slightly
/// different figure. Both are reported as-is.
pub fn build_harvest_calendar(
    plantings: &[SuccessionPlanting],
    week_start: Weekday,
) -> HarvestCalendar {
    let total_season_yield_lbs: f64 = plantings.iter().map(|p| p.expected_yield_lbs).sum();

    let (Some(first_start), Some(last_end)) = (
        plantings.iter().map(|p| p.harvest_start).min(),
        plantings.iter().map(|p| p.harvest_end).max(),
    ) else {
        return HarvestCalendar {
            weeks: vec![],
            peak_weeks: vec![],
            total_season_yield_lbs,
        };
    };

    let mut weeks: Vec<HarvestWeek> = Vec::new();
    let mut cursor = week_start_of(first_start, week_start);
    let final_week = week_start_of(last_end, week_start);
    while cursor <= final_week {
        let week_end = add_days(cursor, 6);
        let mut estimated_yield_lbs = 0.0;
        let mut contributors: Vec<u32> = Vec::new();
        for planting in plantings {
            let overlap = overlap_days(cursor, week_end, planting.harvest_start, planting.harvest_end);
            if overlap > 0 {
                let window_days = days_between(planting.harvest_start, planting.harvest_end).max(1);
                estimated_yield_lbs +=
                    (planting.expected_yield_lbs / window_days as f64) * overlap as f64;
                contributors.push(planting.sequence);
            }
        }
        weeks.push(HarvestWeek {
            week_start: cursor,
            estimated_yield_lbs,
            plantings: contributors,
        });
        cursor = add_days(cursor, 7);
    }

    HarvestCalendar {
        peak_weeks: peak_weeks(&weeks),
        weeks,
        total_season_yield_lbs,
    }
}

/// The heaviest-yield quarter of the season, at least one week
fn peak_weeks(weeks: &[HarvestWeek]) -> Vec<NaiveDate> {
    if weeks.is_empty() {
        return vec![];
    }
    let count = ((weeks.len() as f64 * PEAK_WEEK_FRACTION).ceil() as usize).max(1);
    let mut by_yield: Vec<&HarvestWeek> = weeks.iter().collect();
    by_yield.sort_by(|a, b| {
        b.estimated_yield_lbs
            .partial_cmp(&a.estimated_yield_lbs)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut peaks: Vec<NaiveDate> = by_yield
        .into_iter()
        .take(count)
        .map(|w| w.week_start)
        .collect();
    peaks.sort();
    peaks
}
