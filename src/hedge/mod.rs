//! Hedge module
//!
//! Counter-bet sizing, CLV-based hedge suggestions, and middle detection

mod engine;
mod odds;
mod types;

pub use engine::{closing_line_value, equalize_hedge, FlagSeverity, HedgeEngine};
pub use odds::{american_from_decimal, decimal_from_american};
pub use types::{BetSide, HedgeError, HedgeInput, HedgeResult, HedgeSuggestion, MiddleRange};
