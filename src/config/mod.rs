//! Configuration module for brake-bedding.
//!
//! Provides the stored plan format, speed thresholds and unit types, loaded
//! from TOML files (with `std` feature) or pre-parsed data.

mod procedure;
mod record;
mod thresholds;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use procedure::ProcedureConfig;
pub use record::{StageKind, StageRecord};
pub use thresholds::Thresholds;
pub use validation::validate_plan;

#[cfg(feature = "std")]
pub use loader::{
    load_plan, load_plan_or_empty, load_procedure, load_thresholds, parse_procedure,
    plan_to_string, save_plan,
};

// Re-export unit types at config level
pub use units::{Miles, Mph, Seconds};
