//! Live total projection model
//!
//! Converts the game clock and box-score state into a blended final-total
//! projection, an edge versus the live line, a lean, and risk flags.

mod clock;
mod flags;
mod projection;
mod types;

pub use clock::{parse_clock, GameClock, GAME_MINUTES, QUARTER_MINUTES};
pub use flags::{FlagCategory, RiskFlag, RiskFlags, FLAG_SEPARATOR, NO_FLAGS};
pub use projection::{auto_alpha, clamp_alpha, project, ProjectionEngine, ALPHA_MAX, ALPHA_MIN};
pub use types::{
    Lean, OvertimeAdjustment, ProjectionError, ProjectionInput, ProjectionOptions,
    ProjectionResult, DEFAULT_BONUS_BOOST_PER_MINUTE, DEFAULT_EDGE_THRESHOLD,
};
