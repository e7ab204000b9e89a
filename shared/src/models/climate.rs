//! Climate zone models

use serde::{Deserialize, Serialize};

use crate::types::{MonthDay, TempRange};

/// A hardiness zone with its frost calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateZone {
    /// Zone code, e.g. "6b"
    pub code: String,
    /// Average date of the last spring frost
    pub last_frost: MonthDay,
    /// Average date of the first fall frost
    pub first_frost: MonthDay,
    /// Base temperature for growing-degree-day accumulation
    pub gdd_base_temp_f: f64,
    /// Typical annual minimum temperature band
    pub annual_min_temp_f: TempRange,
}
