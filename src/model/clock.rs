//! Game clock conversion
//!
//! Turns a quarter plus a `mm:ss` clock reading into elapsed regulation minutes.

use super::ProjectionError;
use serde::{Deserialize, Serialize};

/// Minutes in a regulation quarter
pub const QUARTER_MINUTES: f64 = 12.0;
/// Minutes in a regulation game
pub const GAME_MINUTES: f64 = 48.0;

/// A validated clock reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    /// Current quarter (1-based)
    pub quarter: u32,
    /// Minutes left in the current quarter
    pub minutes_remaining: f64,
    /// Minutes of regulation already played
    pub elapsed_minutes: f64,
}

impl GameClock {
    /// Parse a quarter and a `mm:ss` reading
    pub fn parse(quarter: u32, time_remaining: &str) -> Result<Self, ProjectionError> {
        let minutes_remaining = parse_mmss(time_remaining)?;
        let elapsed_minutes =
            (f64::from(quarter) - 1.0) * QUARTER_MINUTES + (QUARTER_MINUTES - minutes_remaining);

        if elapsed_minutes <= 0.0 || elapsed_minutes > GAME_MINUTES {
            return Err(ProjectionError::Range(format!(
                "elapsed time {elapsed_minutes:.2} min is outside (0, 48]; check quarter/time left"
            )));
        }

        Ok(Self {
            quarter,
            minutes_remaining,
            elapsed_minutes,
        })
    }

    /// Regulation minutes still to play
    pub fn minutes_left_in_game(&self) -> f64 {
        GAME_MINUTES - self.elapsed_minutes
    }
}

/// Elapsed regulation minutes for a quarter and `mm:ss` reading
pub fn parse_clock(quarter: u32, time_remaining: &str) -> Result<f64, ProjectionError> {
    GameClock::parse(quarter, time_remaining).map(|clock| clock.elapsed_minutes)
}

/// Parse `mm:ss` into fractional minutes
fn parse_mmss(s: &str) -> Result<f64, ProjectionError> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.len() != 2 {
        return Err(ProjectionError::Format(format!(
            "time must be mm:ss (e.g. 7:10), got {s:?}"
        )));
    }

    let minutes = parse_component(parts[0], s)?;
    let seconds = parse_component(parts[1], s)?;

    if minutes < 0 || seconds < 0 || seconds >= 60 {
        return Err(ProjectionError::Format(format!(
            "invalid mm:ss {s:?}: components must be non-negative and seconds < 60"
        )));
    }

    Ok(minutes as f64 + seconds as f64 / 60.0)
}

fn parse_component(part: &str, whole: &str) -> Result<i64, ProjectionError> {
    let part = part.trim();
    if part.starts_with('-') {
        return Err(ProjectionError::Format(format!(
            "negative clock component in {whole:?}"
        )));
    }
    part.parse::<i64>()
        .map_err(|_| ProjectionError::Format(format!("non-numeric clock component in {whole:?}")))
}
