//! Cockpit Configuration
//!
//! Presentation policy for the rollup and the level label. The only source
//! besides the defaults is the page's URL query string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// What the category and overall percentages count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollupGranularity {
    /// Whole tasks, all-or-nothing
    #[default]
    Task,
    /// Individual subtasks, partial credit
    Subtask,
}

/// How the level label frames the overall percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directionality {
    /// Low percent reads as "Low" progress
    #[default]
    Progress,
    /// Low percent reads as "High" risk
    Risk,
}

impl RollupGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            RollupGranularity::Task => "task",
            RollupGranularity::Subtask => "subtask",
        }
    }
}

impl Directionality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Directionality::Progress => "progress",
            Directionality::Risk => "risk",
        }
    }
}

impl fmt::Display for RollupGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Directionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RollupGranularity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "task" | "tasks" => Ok(RollupGranularity::Task),
            "subtask" | "subtasks" => Ok(RollupGranularity::Subtask),
            _ => Err(invalid("rollup", s)),
        }
    }
}

impl FromStr for Directionality {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "progress" => Ok(Directionality::Progress),
            "risk" => Ok(Directionality::Risk),
            _ => Err(invalid("direction", s)),
        }
    }
}

/// Two cut points splitting [0, 100] into three buckets:
/// `[0, medium_from)` low, `[medium_from, high_from)` medium, `[high_from, 100]` high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThresholds {
    pub medium_from: u8,
    pub high_from: u8,
}

impl LevelThresholds {
    pub fn new(medium_from: u8, high_from: u8) -> Result<Self, ConfigError> {
        if medium_from > high_from || high_from > 100 {
            return Err(ConfigError::InvalidThresholds { medium_from, high_from });
        }
        Ok(Self { medium_from, high_from })
    }

    /// Defaults per framing: progress is Low only at 0% and High only at 100%
    pub fn for_direction(direction: Directionality) -> Self {
        match direction {
            Directionality::Progress => Self { medium_from: 1, high_from: 100 },
            Directionality::Risk => Self { medium_from: 34, high_from: 67 },
        }
    }
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self::for_direction(Directionality::default())
    }
}

/// Rollup and level policy for one cockpit instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CockpitConfig {
    pub rollup: RollupGranularity,
    pub direction: Directionality,
    pub thresholds: LevelThresholds,
}

impl CockpitConfig {
    pub fn new(rollup: RollupGranularity, direction: Directionality) -> Self {
        Self {
            rollup,
            direction,
            thresholds: LevelThresholds::for_direction(direction),
        }
    }

    /// Parse `rollup`, `direction`, `medium_from`, `high_from` from a query
    /// string (leading `?` optional). Unknown keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut rollup = RollupGranularity::default();
        let mut direction = Directionality::default();
        let mut medium_from = None;
        let mut high_from = None;

        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|p| p.split_once('=').unwrap_or((p, "")));

        for (key, value) in pairs {
            match key {
                "rollup" => rollup = value.parse()?,
                "direction" => direction = value.parse()?,
                "medium_from" => medium_from = Some(parse_percent(key, value)?),
                "high_from" => high_from = Some(parse_percent(key, value)?),
                _ => {}
            }
        }

        let defaults = LevelThresholds::for_direction(direction);
        let thresholds = LevelThresholds::new(
            medium_from.unwrap_or(defaults.medium_from),
            high_from.unwrap_or(defaults.high_from),
        )?;

        Ok(Self { rollup, direction, thresholds })
    }
}

fn parse_percent(key: &str, value: &str) -> Result<u8, ConfigError> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_task_progress() {
        let config = CockpitConfig::default();
        assert_eq!(config.rollup, RollupGranularity::Task);
        assert_eq!(config.direction, Directionality::Progress);
        assert_eq!(config.thresholds, LevelThresholds { medium_from: 1, high_from: 100 });
    }

    #[test]
    fn test_from_empty_query_is_default() {
        assert_eq!(CockpitConfig::from_query("").unwrap(), CockpitConfig::default());
        assert_eq!(CockpitConfig::from_query("?").unwrap(), CockpitConfig::default());
    }

    #[test]
    fn test_from_query_risk_uses_risk_thresholds() {
        let config = CockpitConfig::from_query("?rollup=subtask&direction=risk&utm_source=x").unwrap();
        assert_eq!(config.rollup, RollupGranularity::Subtask);
        assert_eq!(config.direction, Directionality::Risk);
        assert_eq!(config.thresholds, LevelThresholds::for_direction(Directionality::Risk));
    }

    #[test]
    fn test_from_query_explicit_thresholds() {
        let config = CockpitConfig::from_query("medium_from=40&high_from=80").unwrap();
        assert_eq!(config.thresholds, LevelThresholds { medium_from: 40, high_from: 80 });
    }

    #[test]
    fn test_from_query_rejects_bad_values() {
        assert!(matches!(
            CockpitConfig::from_query("rollup=weekly"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            CockpitConfig::from_query("high_from=101"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            CockpitConfig::from_query("medium_from=90&high_from=50"),
            Err(ConfigError::InvalidThresholds { medium_from: 90, high_from: 50 })
        ));
    }

    #[test]
    fn test_enum_round_trip_through_str() {
        assert_eq!("Subtask".parse::<RollupGranularity>().unwrap().to_string(), "subtask");
        assert_eq!("risk".parse::<Directionality>().unwrap().to_string(), "risk");
    }
}
