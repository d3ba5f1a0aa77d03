//! Configuration types for nba-live-total

use crate::model::{
    OvertimeAdjustment, ProjectionOptions, DEFAULT_BONUS_BOOST_PER_MINUTE, DEFAULT_EDGE_THRESHOLD,
};
use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub projection: ProjectionDefaults,
    #[serde(default)]
    pub overtime: OvertimeDefaults,
    #[serde(default)]
    pub snapshots: SnapshotConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Defaults applied when the user leaves a projection field blank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionDefaults {
    /// Pregame total line
    #[serde(default = "default_pregame_total")]
    pub pregame_total: f64,

    /// Edge in points required to lean
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: f64,

    /// Extra points per minute while the bonus is on
    #[serde(default = "default_bonus_boost")]
    pub bonus_boost_per_minute: f64,
}

fn default_pregame_total() -> f64 {
    228.5
}
fn default_edge_threshold() -> f64 {
    DEFAULT_EDGE_THRESHOLD
}
fn default_bonus_boost() -> f64 {
    DEFAULT_BONUS_BOOST_PER_MINUTE
}

impl Default for ProjectionDefaults {
    fn default() -> Self {
        Self {
            pregame_total: default_pregame_total(),
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            bonus_boost_per_minute: DEFAULT_BONUS_BOOST_PER_MINUTE,
        }
    }
}

impl ProjectionDefaults {
    /// Options seeded from these defaults
    pub fn options(&self) -> ProjectionOptions {
        ProjectionOptions {
            edge_threshold: self.edge_threshold,
            bonus_boost_per_minute: self.bonus_boost_per_minute,
            ..Default::default()
        }
    }
}

/// Overtime values used when the adjustment is enabled without explicit numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeDefaults {
    #[serde(default = "default_ot_probability")]
    pub probability_pct: f64,
    #[serde(default = "default_ot_points")]
    pub expected_points: f64,
}

fn default_ot_probability() -> f64 {
    6.0
}
fn default_ot_points() -> f64 {
    10.0
}

impl Default for OvertimeDefaults {
    fn default() -> Self {
        Self {
            probability_pct: default_ot_probability(),
            expected_points: default_ot_points(),
        }
    }
}

impl OvertimeDefaults {
    /// Build an adjustment, falling back to these defaults for missing values
    pub fn adjustment(
        &self,
        probability_pct: Option<f64>,
        expected_points: Option<f64>,
    ) -> OvertimeAdjustment {
        OvertimeAdjustment {
            probability_pct: probability_pct.unwrap_or(self.probability_pct),
            expected_points: expected_points.unwrap_or(self.expected_points),
        }
    }
}

/// Snapshot log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_snapshot_path")]
    pub path: PathBuf,
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("nba_total_snapshots.csv")
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
