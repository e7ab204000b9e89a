//! Growing-degree-day accumulation
//!
//! Heat units predict crop development rate. The standard formula caps the
//! daily maximum, floors both readings at the base temperature, averages,
//! and subtracts the base; a day can never contribute negative units.

use shared::models::WeatherForecastDay;

/// Default base temperature, °F
pub const DEFAULT_BASE_TEMP_F: f64 = 50.0;
/// Default cap on the daily maximum, °F
pub const DEFAULT_CAP_TEMP_F: f64 = 86.0;

/// Heat units for a single day given min/max temperatures
pub fn growing_degree_days(min_temp_f: f64, max_temp_f: f64, base_temp_f: f64, cap_temp_f: f64) -> f64 {
    let capped_max = max_temp_f.min(cap_temp_f).max(base_temp_f);
    let floored_min = min_temp_f.max(base_temp_f);
    (((floored_min + capped_max) / 2.0) - base_temp_f).max(0.0)
}

/// Heat units with the standard 50/86 °F base and cap
pub fn growing_degree_days_standard(min_temp_f: f64, max_temp_f: f64) -> f64 {
    growing_degree_days(min_temp_f, max_temp_f, DEFAULT_BASE_TEMP_F, DEFAULT_CAP_TEMP_F)
}

/// Total heat units over a forecast window using a zone's base temperature
pub fn accumulated_gdd(forecast: &[WeatherForecastDay], base_temp_f: f64) -> f64 {
    forecast
        .iter()
        .map(|day| growing_degree_days(day.temp.min_f, day.temp.max_f, base_temp_f, DEFAULT_CAP_TEMP_F))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_day_contributes_nothing() {
        assert_eq!(growing_degree_days(30.0, 40.0, 50.0, 86.0), 0.0);
    }

    #[test]
    fn test_mild_day() {
        assert_eq!(growing_degree_days(60.0, 80.0, 50.0, 86.0), 20.0);
    }

    #[test]
    fn test_hot_day_is_capped() {
        // Max capped to 86 before averaging
        assert_eq!(growing_degree_days(70.0, 100.0, 50.0, 86.0), 28.0);
    }

    #[test]
    fn test_min_floored_at_base() {
        // Min floored to 50: (50 + 80) / 2 - 50 = 15
        assert_eq!(growing_degree_days(40.0, 80.0, 50.0, 86.0), 15.0);
    }

    #[test]
    fn test_never_negative() {
        assert_eq!(growing_degree_days(10.0, 20.0, 50.0, 86.0), 0.0);
        assert_eq!(growing_degree_days(-10.0, 0.0, 50.0, 86.0), 0.0);
    }
}
