//! Shared types and models for the crop planning engine
//!
//! This crate contains the serializable records exchanged between the
//! planning engine, persistence, and presentation layers.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
