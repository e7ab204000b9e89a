//! Planting window derivation
//!
//! Earliest/latest/optimal planting dates for a crop in a climate zone,
//! anchored to the frost calendar of the year containing `today`.

use chrono::{Datelike, NaiveDate};
use shared::models::{ClimateZone, CropProfile, PlantingWindow};
use shared::types::FrostTolerance;

use crate::calendar::add_days;
use crate::error::{PlannerError, PlannerResult};

/// Buffer between the latest harvest-ready date and the first frost
const FIRST_FROST_BUFFER_DAYS: i64 = 7;
/// Fixed offset from the earliest safe date to the optimal one
const OPTIMAL_OFFSET_DAYS: i64 = 10;

/// Derive the safe planting window for `crop` in `zone` for the current
/// calendar year.
///
/// A supplied target harvest date narrows `latest` when the back-calculated
/// planting date falls strictly inside the window. A window whose earliest
/// date lands after its latest is degenerate and returned as an error
/// rather than silently reordered.
pub fn calculate_planting_window(
    crop: &CropProfile,
    zone: &ClimateZone,
    target_harvest: Option<NaiveDate>,
    today: NaiveDate,
) -> PlannerResult<PlantingWindow> {
    let year = today.year();
    let last_frost = zone.last_frost.resolve(year).ok_or_else(|| {
        PlannerError::InvalidInput(format!("Zone {} has an invalid last-frost date", zone.code))
    })?;
    let first_frost = zone.first_frost.resolve(year).ok_or_else(|| {
        PlannerError::InvalidInput(format!("Zone {} has an invalid first-frost date", zone.code))
    })?;

    let mut notes = Vec::new();

    // Hardy crops go in ahead of the last frost; tender ones wait a week past it
    let frost_offset = match crop.climate.frost_tolerance {
        FrostTolerance::None => 7,
        FrostTolerance::Light => 0,
        FrostTolerance::Moderate | FrostTolerance::Heavy => -14,
    };
    let earliest = add_days(last_frost, frost_offset);

    let mut latest = add_days(
        first_frost,
        -(crop.timing.days_to_maturity as i64) - FIRST_FROST_BUFFER_DAYS,
    );

    if let Some(target) = target_harvest {
        let back_calculated = add_days(target, -(crop.timing.days_to_maturity as i64));
        if back_calculated > earliest && back_calculated < latest {
            latest = back_calculated;
            notes.push(format!(
                "Latest planting narrowed to {back_calculated} to hit the target harvest of {target}"
            ));
        }
    }

    if earliest > latest {
        return Err(PlannerError::DegenerateWindow { earliest, latest });
    }

    let optimal = add_days(earliest, OPTIMAL_OFFSET_DAYS);

    tracing::debug!(
        crop = %crop.id,
        zone = %zone.code,
        %earliest,
        %latest,
        "planting window derived"
    );

    Ok(PlantingWindow {
        earliest,
        latest,
        optimal,
        notes,
    })
}
