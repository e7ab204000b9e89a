//! Crop planning scheduling engine
//!
//! Turns a crop's agronomic profile, a field's area, a climate zone, and an
//! optionally supplied weather forecast into rotation judgments, planting
//! windows, plant/wait recommendations, succession schedules with harvest
//! calendars and resource plans, and ongoing progress reports.
//!
//! The engine is a pure synchronous computation layer: no I/O, no shared
//! mutable state, no ambient clock. Every operation that depends on the
//! current date takes it as a parameter so results are reproducible.

pub mod advisor;
pub mod calendar;
pub mod catalog;
pub mod error;
pub mod gdd;
pub mod harvest;
pub mod monitor;
pub mod recommend;
pub mod resources;
pub mod rotation;
pub mod succession;
pub mod tables;
pub mod window;

pub use advisor::{analyze_planting_conditions, assess_planting_risk};
pub use catalog::CropCatalog;
pub use error::{PlannerError, PlannerResult};
pub use gdd::{accumulated_gdd, growing_degree_days};
pub use harvest::build_harvest_calendar;
pub use monitor::monitor_progress;
pub use recommend::generate_recommendations;
pub use resources::plan_resources;
pub use rotation::score_rotation;
pub use succession::SuccessionPlanner;
pub use tables::PlannerTables;
pub use window::calculate_planting_window;
