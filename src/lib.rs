//! # brake-bedding
//!
//! Speed-driven coaching state machine for bedding in new brake pads and rotors.
//!
//! ## Features
//!
//! - **Plan-driven**: Bedding stages and cooldown defined in TOML files
//! - **Sample-driven**: Advances only on speed samples and countdown ticks
//! - **no_std compatible**: Core library works without standard library
//! - **Stale-tick safe**: Countdown ticks carry a generation token
//! - **Distance by integration**: Gap and cooldown distance from speed × time
//! - **embedded-hal 1.0**: RGB indicator lamp on three `OutputPin`s
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use brake_bedding::{Coach, Thresholds, Mph};
//!
//! // Load the stage plan, falling back to an empty plan
//! let plan = brake_bedding::load_plan_or_empty("bedding.toml");
//! let mut coach = Coach::new(plan, Thresholds::default());
//!
//! coach.start()?;
//! coach.on_timed_sample(Mph::from_meters_per_sec(gps_speed), now_ms);
//! println!("{}", coach.current_instruction());
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod coach;
pub mod config;
pub mod error;
pub mod plan;
pub mod render;
pub mod session;

mod telemetry;

// Re-exports for ergonomic API
pub use coach::{
    CoachEvent, Coach, CountdownTick, Events, GeoPosition, IndicatorColor, Instruction, Phase,
    Progress, ReloadOutcome, Urgency,
};
pub use config::{validate_plan, ProcedureConfig, StageRecord, Thresholds};
pub use error::{Error, Result};
pub use plan::{BeddingStage, BrakingIntensity, CooldownStage, Plan, PlanBuilder, Stage};
pub use render::{IndicatorLamp, Renderer};
pub use session::CoachSession;

// Plan loading (std only)
#[cfg(feature = "std")]
pub use config::{load_plan, load_plan_or_empty, save_plan};

// Unit types
pub use config::units::{Miles, Mph, Seconds, UnitExt};
