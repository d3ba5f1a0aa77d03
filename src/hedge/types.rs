//! Hedge types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Hedge validation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HedgeError {
    /// Bet side is neither OVER nor UNDER
    #[error("Validation error: side must be UNDER or OVER, got {0:?}")]
    InvalidSide(String),
    /// American odds of zero have no payout
    #[error("Validation error: American odds cannot be 0")]
    ZeroOdds,
}

impl HedgeError {
    /// Every hedge error is an input validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidSide(_) | Self::ZeroOdds)
    }
}

/// Side of a totals bet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetSide {
    Over,
    Under,
}

impl FromStr for BetSide {
    type Err = HedgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OVER" => Ok(Self::Over),
            "UNDER" => Ok(Self::Under),
            _ => Err(HedgeError::InvalidSide(s.to_string())),
        }
    }
}

impl fmt::Display for BetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Over => f.write_str("OVER"),
            Self::Under => f.write_str("UNDER"),
        }
    }
}

/// A placed bet plus the proposed counter-bet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeInput {
    /// Side of the bet already placed
    pub side: BetSide,
    /// Line of the placed bet
    pub my_line: f64,
    /// Stake of the placed bet
    pub my_stake: f64,
    /// American odds of the placed bet
    pub my_odds_american: f64,
    /// Line available for the hedge
    pub hedge_line: f64,
    /// American odds of the hedge
    pub hedge_odds_american: f64,
    /// Market's live total line
    pub live_market_total: f64,
    /// Flag labels from the latest projection
    #[serde(default)]
    pub risk_flags: Vec<String>,
}

/// Qualitative hedge recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HedgeSuggestion {
    NoSignal,
    Watch,
    SmallHedge,
    Hold,
}

impl HedgeSuggestion {
    /// Short advice shown to the bettor
    pub fn description(&self) -> &'static str {
        match self {
            Self::NoSignal => "No hedge signal",
            Self::Watch => "Watch closely (whistle risk)",
            Self::SmallHedge => "Consider SMALL hedge",
            Self::Hold => "Hold (good CLV)",
        }
    }
}

impl fmt::Display for HedgeSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSignal => f.write_str("NO_SIGNAL"),
            Self::Watch => f.write_str("WATCH"),
            Self::SmallHedge => f.write_str("SMALL_HEDGE"),
            Self::Hold => f.write_str("HOLD"),
        }
    }
}

/// Final totals where both bets win
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiddleRange {
    pub low: f64,
    pub high: f64,
}

impl fmt::Display for MiddleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Middle range (both win): {:.1} to {:.1} (excluding pushes).",
            self.low, self.high
        )
    }
}

/// Output of a hedge calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HedgeResult {
    /// Side of the original bet
    pub side: BetSide,
    pub suggestion: HedgeSuggestion,
    /// Counter-stake sized so either win pays a comparable amount
    pub equalized_hedge_stake: f64,
    /// Middle interval, if one exists
    pub middle_range: Option<MiddleRange>,
    /// Lower of the two one-side-wins outcomes
    pub worst_case_profit: f64,
    /// Both bets win; only reachable inside a middle
    pub best_case_profit: f64,
}

impl HedgeResult {
    /// Human-readable middle description
    pub fn middle_note(&self) -> String {
        match (&self.middle_range, self.side) {
            (Some(range), _) => range.to_string(),
            (None, BetSide::Under) => {
                "No classic middle (hedge line not below your under line).".to_string()
            }
            (None, BetSide::Over) => {
                "No classic middle (hedge line not above your over line).".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parsing() {
        assert_eq!(" under ".parse::<BetSide>().unwrap(), BetSide::Under);
        assert_eq!("Over".parse::<BetSide>().unwrap(), BetSide::Over);
        let err = "PUSH".parse::<BetSide>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_middle_note_text() {
        let range = MiddleRange {
            low: 225.5,
            high: 228.5,
        };
        assert_eq!(
            range.to_string(),
            "Middle range (both win): 225.5 to 228.5 (excluding pushes)."
        );
    }

    #[test]
    fn test_suggestion_labels() {
        assert_eq!(HedgeSuggestion::SmallHedge.to_string(), "SMALL_HEDGE");
        assert_eq!(HedgeSuggestion::Hold.description(), "Hold (good CLV)");
        assert_eq!(
            serde_json::to_string(&HedgeSuggestion::NoSignal).unwrap(),
            "\"NO_SIGNAL\""
        );
    }
}
