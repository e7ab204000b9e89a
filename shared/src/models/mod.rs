//! Domain models for the crop planning engine

mod advice;
mod climate;
mod crop;
mod monitor;
mod plan;
mod weather;

pub use advice::*;
pub use climate::*;
pub use crop::*;
pub use monitor::*;
pub use plan::*;
pub use weather::*;
