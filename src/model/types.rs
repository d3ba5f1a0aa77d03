//! Projection model types

use super::RiskFlags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Projection errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    /// Malformed clock reading
    #[error("Format error: {0}")]
    Format(String),
    /// Elapsed time or remaining time out of range
    #[error("Range error: {0}")]
    Range(String),
}

/// Default edge (points) required before leaning
pub const DEFAULT_EDGE_THRESHOLD: f64 = 4.0;
/// Default extra scoring per minute while the bonus is on
pub const DEFAULT_BONUS_BOOST_PER_MINUTE: f64 = 0.25;

/// Overtime expectation folded into the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OvertimeAdjustment {
    /// Chance of overtime in percent (6.0 = 6%)
    pub probability_pct: f64,
    /// Points expected if overtime happens
    pub expected_points: f64,
}

impl OvertimeAdjustment {
    /// Expected points contributed to the final total
    pub fn expected_contribution(&self) -> f64 {
        (self.probability_pct / 100.0) * self.expected_points
    }
}

/// Optional knobs for a projection.
///
/// Absent values mean "feature not supplied", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionOptions {
    /// Live-pace weight; `None` uses the auto-alpha schedule
    pub alpha: Option<f64>,
    /// Edge in points required to lean over or under
    pub edge_threshold: f64,
    /// Teams are in the bonus
    pub bonus_active: bool,
    /// Free-throw parade in progress
    pub ft_parade_active: bool,
    /// Extra points per minute applied while the bonus is on
    pub bonus_boost_per_minute: f64,
    /// Combined free-throw attempts so far
    pub free_throw_attempts: Option<f64>,
    /// Combined three-point percentage as a fraction in [0, 1]
    pub three_point_pct: Option<f64>,
    /// Overtime expectation
    pub overtime: Option<OvertimeAdjustment>,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            alpha: None,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            bonus_active: false,
            ft_parade_active: false,
            bonus_boost_per_minute: DEFAULT_BONUS_BOOST_PER_MINUTE,
            free_throw_attempts: None,
            three_point_pct: None,
            overtime: None,
        }
    }
}

/// Box-score state for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Current quarter (1-based)
    pub quarter: u32,
    /// Clock reading as `mm:ss`
    pub time_remaining: String,
    /// Combined points scored so far
    pub total_points_so_far: f64,
    /// Market's live total line
    pub live_market_total: f64,
    /// Pregame total line, used as the prior
    pub pregame_total: f64,
    #[serde(default)]
    pub options: ProjectionOptions,
}

impl ProjectionInput {
    /// Create an input with default options
    pub fn new(
        quarter: u32,
        time_remaining: impl Into<String>,
        total_points_so_far: f64,
        live_market_total: f64,
        pregame_total: f64,
    ) -> Self {
        Self {
            quarter,
            time_remaining: time_remaining.into(),
            total_points_so_far,
            live_market_total,
            pregame_total,
            options: ProjectionOptions::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: ProjectionOptions) -> Self {
        self.options = options;
        self
    }
}

/// Directional recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lean {
    Over,
    Under,
    Pass,
}

impl Lean {
    /// Classify an edge against a threshold
    pub fn from_edge(edge: f64, threshold: f64) -> Self {
        if edge >= threshold {
            Self::Over
        } else if edge <= -threshold {
            Self::Under
        } else {
            Self::Pass
        }
    }
}

impl fmt::Display for Lean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Over => f.write_str("OVER"),
            Self::Under => f.write_str("UNDER"),
            Self::Pass => f.write_str("PASS"),
        }
    }
}

/// Output of one projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub quarter: u32,
    pub time_remaining: String,
    pub total_points_so_far: f64,
    pub live_market_total: f64,
    pub pregame_total: f64,
    /// Regulation minutes played
    pub elapsed_minutes: f64,
    /// Live-pace weight actually used
    pub alpha_used: f64,
    /// Points per elapsed minute
    pub pace_per_minute: f64,
    /// Pace extrapolated to 48 minutes
    pub pace_only_projection: f64,
    /// Blended final-total projection
    pub blended_projection: f64,
    /// Blended projection minus the live line
    pub edge_vs_live: f64,
    /// Scoring rate required over the remaining minutes to reach the live line
    pub needed_pace_per_minute: f64,
    pub lean: Lean,
    pub flags: RiskFlags,
    pub timestamp: DateTime<Utc>,
}
