//! Plan module for brake-bedding.
//!
//! Provides stage types, the immutable plan and a builder.

mod builder;
mod sequence;
mod stage;

pub use builder::PlanBuilder;
pub use sequence::{Plan, MAX_STAGES};
pub use stage::{BeddingStage, BrakingIntensity, CooldownStage, DistancePhase, Stage};
