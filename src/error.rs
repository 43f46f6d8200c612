//! Error types for brake-bedding library.
//!
//! Provides unified error handling across plan loading, plan validation,
//! coaching and rendering.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all brake-bedding operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing, I/O or threshold error
    Config(ConfigError),
    /// Stage plan validation error
    Plan(PlanError),
    /// Coach operation error
    Coach(CoachError),
    /// Renderer output error
    Render(RenderError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML plan or threshold data
    ParseError(heapless::String<128>),
    /// Failed to serialize a plan
    SerializeError(heapless::String<128>),
    /// Threshold is negative or not finite
    InvalidThreshold {
        /// Threshold key
        name: &'static str,
        /// Offending value
        value: f32,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Stage plan errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Stage record is missing a required field
    MissingField {
        /// Stage position in the plan (0-based)
        stage: usize,
        /// Missing field name
        field: &'static str,
    },
    /// Number of stops must be at least 1
    InvalidStops {
        /// Stage position in the plan
        stage: usize,
        /// Configured number of stops
        value: u16,
    },
    /// Start speed must be > 0
    InvalidStartSpeed {
        /// Stage position in the plan
        stage: usize,
        /// Configured start speed (mph)
        value: f32,
    },
    /// Target speed must satisfy 0 <= target < start
    InvalidTargetSpeed {
        /// Stage position in the plan
        stage: usize,
        /// Configured start speed (mph)
        start: f32,
        /// Configured target speed (mph)
        target: f32,
    },
    /// Gap distance must be >= 0
    InvalidGapDistance {
        /// Stage position in the plan
        stage: usize,
        /// Configured gap (miles)
        value: f32,
    },
    /// Cooldown distance must be > 0
    InvalidCooldownDistance {
        /// Stage position in the plan
        stage: usize,
        /// Configured distance (miles)
        value: f32,
    },
    /// Cooldown stage must be the last stage
    CooldownNotLast {
        /// Position of the misplaced cooldown
        stage: usize,
    },
    /// Too many stages
    TooManyStages,
}

/// Coach operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoachError {
    /// `start()` called with no stages loaded
    EmptyPlan,
}

/// Renderer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Indicator pin operation failed
    PinError,
    /// Display sink rejected the update
    SinkUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Plan(e) => write!(f, "Plan error: {}", e),
            Error::Coach(e) => write!(f, "Coach error: {}", e),
            Error::Render(e) => write!(f, "Render error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
            ConfigError::InvalidThreshold { name, value } => {
                write!(f, "Invalid threshold {}: {}. Must be a finite value >= 0", name, value)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::MissingField { stage, field } => {
                write!(f, "Stage {} is missing '{}'", stage + 1, field)
            }
            PlanError::InvalidStops { stage, value } => {
                write!(f, "Stage {}: invalid number of stops {}. Must be >= 1", stage + 1, value)
            }
            PlanError::InvalidStartSpeed { stage, value } => {
                write!(f, "Stage {}: invalid start speed {}. Must be > 0", stage + 1, value)
            }
            PlanError::InvalidTargetSpeed { stage, start, target } => write!(
                f,
                "Stage {}: target speed {} must be >= 0 and below start speed {}",
                stage + 1,
                target,
                start
            ),
            PlanError::InvalidGapDistance { stage, value } => {
                write!(f, "Stage {}: invalid gap distance {}. Must be >= 0", stage + 1, value)
            }
            PlanError::InvalidCooldownDistance { stage, value } => {
                write!(f, "Stage {}: invalid cooldown distance {}. Must be > 0", stage + 1, value)
            }
            PlanError::CooldownNotLast { stage } => {
                write!(f, "Stage {}: cooldown must be the last stage", stage + 1)
            }
            PlanError::TooManyStages => {
                write!(f, "Too many stages (max {})", crate::plan::MAX_STAGES)
            }
        }
    }
}

impl fmt::Display for CoachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoachError::EmptyPlan => write!(f, "No stages available"),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::PinError => write!(f, "Indicator pin operation failed"),
            RenderError::SinkUnavailable => write!(f, "Display sink unavailable"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PlanError> for Error {
    fn from(e: PlanError) -> Self {
        Error::Plan(e)
    }
}

impl From<CoachError> for Error {
    fn from(e: CoachError) -> Self {
        Error::Coach(e)
    }
}

impl From<RenderError> for Error {
    fn from(e: RenderError) -> Self {
        Error::Render(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PlanError {}

#[cfg(feature = "std")]
impl std::error::Error for CoachError {}

#[cfg(feature = "std")]
impl std::error::Error for RenderError {}
