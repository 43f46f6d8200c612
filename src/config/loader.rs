//! Plan store: loading and saving TOML plan files (std only).

use std::fs;
use std::path::Path;
use std::string::String;

use crate::error::{ConfigError, Error, Result};
use crate::plan::Plan;
use crate::telemetry;

use super::{ProcedureConfig, Thresholds};

fn short_message(msg: &str) -> heapless::String<128> {
    // Truncate on a char boundary so long parser messages still fit.
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Load a procedure (thresholds + stage records) from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use brake_bedding::load_procedure;
///
/// let procedure = load_procedure("bedding.toml")?;
/// let plan = procedure.plan()?;
/// ```
pub fn load_procedure<P: AsRef<Path>>(path: P) -> Result<ProcedureConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(short_message(&e.to_string()))))?;

    parse_procedure(&content)
}

/// Parse a procedure from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or the thresholds fail validation.
/// Stage records are validated when converted with [`ProcedureConfig::plan`].
pub fn parse_procedure(content: &str) -> Result<ProcedureConfig> {
    let config: ProcedureConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(short_message(e.message()))))?;

    config.thresholds.validate()?;

    Ok(config)
}

/// Load and validate the stage plan from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Plan> {
    load_procedure(path)?.plan()
}

/// Load the stage plan, treating unreadable or malformed data as an empty plan.
///
/// The coach then reports "No stages available" instead of failing.
pub fn load_plan_or_empty<P: AsRef<Path>>(path: P) -> Plan {
    match load_plan(path) {
        Ok(plan) => plan,
        Err(e) => {
            telemetry::plan_dropped(&e);
            Plan::empty()
        }
    }
}

/// Load thresholds, falling back to defaults for missing keys.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_thresholds<P: AsRef<Path>>(path: P) -> Result<Thresholds> {
    Ok(load_procedure(path)?.thresholds)
}

/// Render a plan and its thresholds as TOML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn plan_to_string(plan: &Plan, thresholds: &Thresholds) -> Result<String> {
    let config = ProcedureConfig::from_plan(plan, *thresholds);
    toml::to_string(&config)
        .map_err(|e| Error::Config(ConfigError::SerializeError(short_message(&e.to_string()))))
}

/// Persist a plan and its thresholds to a TOML file.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &Plan, thresholds: &Thresholds) -> Result<()> {
    let content = plan_to_string(plan, thresholds)?;
    fs::write(path.as_ref(), content)
        .map_err(|e| Error::Config(ConfigError::IoError(short_message(&e.to_string()))))
}
