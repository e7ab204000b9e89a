//! Progress monitoring models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An actual harvest outcome reported by the operational tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActualHarvest {
    /// Sequence number of the planting this record belongs to
    pub sequence: u32,
    pub harvest_date: NaiveDate,
    pub actual_yield_lbs: f64,
}

/// Overall schedule health
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    OnTrack,
    AheadOfSchedule,
    BehindSchedule,
    AdjustmentsNeeded,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

/// What a monitoring alert is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Timing,
    Yield,
    Weather,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressAlert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
}

/// Suggested change to a live plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    AdjustTiming,
    IncreaseCare,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentSuggestion {
    pub kind: AdjustmentKind,
    /// Planting the suggestion targets
    pub sequence: u32,
    /// New planting date, for timing adjustments
    pub suggested_date: Option<NaiveDate>,
    pub message: String,
}

/// Result of comparing a live plan against actual outcomes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    pub status: ProgressStatus,
    pub alerts: Vec<ProgressAlert>,
    pub adjustments: Vec<AdjustmentSuggestion>,
}
