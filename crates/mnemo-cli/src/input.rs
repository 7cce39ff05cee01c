//! Argument parsing helpers shared by the subcommands

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use mnemo_core::{ReviewGrade, SchedulerConfig};

/// Split a grade list such as `3,4,5` or `hard good perfect` into raw grades
///
/// Range checking is left to the scheduler so out-of-range digits surface as
/// the library's own error.
pub fn parse_grades(raw: &str) -> anyhow::Result<Vec<i64>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<i64>() {
            Ok(n) => Ok(n),
            Err(_) => token
                .parse::<ReviewGrade>()
                .map(|g| i64::from(g.value()))
                .with_context(|| format!("Invalid grade '{}'", token)),
        })
        .collect()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (expected YYYY-MM-DD)", raw))
}

/// Load scheduler constants from a JSON file, or the defaults when no file is given
pub fn load_scheduler_config(path: Option<&Path>) -> anyhow::Result<SchedulerConfig> {
    let Some(path) = path else {
        return Ok(SchedulerConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = SchedulerConfig::from_json_str(&json)
        .with_context(|| format!("Failed to load config file {}", path.display()))?;
    tracing::info!(path = %path.display(), "Loaded scheduler config");
    Ok(config)
}
