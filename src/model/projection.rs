//! Blended pace projection
//!
//! Final total = points so far + blended rate x minutes left, where the
//! blended rate mixes live pace (plus whistle boosts) with the pregame
//! baseline rate:
//!
//! rate = alpha * (pace + boost) + (1 - alpha) * pregame / 48

use super::clock::GAME_MINUTES;
use super::{
    GameClock, Lean, ProjectionError, ProjectionInput, ProjectionResult, RiskFlag, RiskFlags,
};
use chrono::{DateTime, Utc};

/// Explicit alpha is clamped into this band
pub const ALPHA_MIN: f64 = 0.05;
pub const ALPHA_MAX: f64 = 0.95;

/// Auto-alpha schedule: starts at 0.35 and trusts live pace more as the game goes on
const AUTO_ALPHA_BASE: f64 = 0.35;
const AUTO_ALPHA_PER_MINUTE: f64 = 0.012;
const AUTO_ALPHA_CAP: f64 = 0.90;

/// Extra points per minute during a free-throw parade
const FT_PARADE_BOOST_PER_MINUTE: f64 = 0.35;

/// Early bonus is high risk in quarters 1-3 with more than this many minutes left
const EARLY_BONUS_LAST_QUARTER: u32 = 3;
const EARLY_BONUS_MINUTES_LEFT: f64 = 6.0;

/// Live-pace weight for a given number of elapsed minutes
pub fn auto_alpha(elapsed_minutes: f64) -> f64 {
    (AUTO_ALPHA_BASE + AUTO_ALPHA_PER_MINUTE * elapsed_minutes)
        .clamp(AUTO_ALPHA_BASE, AUTO_ALPHA_CAP)
}

/// Clamp an explicit alpha into [`ALPHA_MIN`, `ALPHA_MAX`]; NaN lands on the cap
pub fn clamp_alpha(alpha: f64) -> f64 {
    ALPHA_MIN.max(ALPHA_MAX.min(alpha))
}

/// Stateless projection engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Project the final total, stamping the result with the current time
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
        self.project_at(input, Utc::now())
    }

    /// Project the final total with an explicit timestamp
    pub fn project_at(
        &self,
        input: &ProjectionInput,
        timestamp: DateTime<Utc>,
    ) -> Result<ProjectionResult, ProjectionError> {
        let opts = &input.options;
        let clock = GameClock::parse(input.quarter, &input.time_remaining)?;
        let elapsed = clock.elapsed_minutes;
        let minutes_left = clock.minutes_left_in_game();

        if minutes_left <= 0.0 {
            return Err(ProjectionError::Range(
                "no regulation time remaining; projection needs minutes left to play".to_string(),
            ));
        }

        let alpha_used = match opts.alpha {
            Some(alpha) => clamp_alpha(alpha),
            None => auto_alpha(elapsed),
        };

        let pace_per_minute = input.total_points_so_far / elapsed;
        let pace_only_projection = pace_per_minute * GAME_MINUTES;
        let baseline_rate = input.pregame_total / GAME_MINUTES;

        let mut boost = 0.0;
        if opts.bonus_active {
            boost += opts.bonus_boost_per_minute;
        }
        if opts.ft_parade_active {
            boost += FT_PARADE_BOOST_PER_MINUTE;
        }

        let blended_rate =
            alpha_used * (pace_per_minute + boost) + (1.0 - alpha_used) * baseline_rate;
        let mut blended_projection = input.total_points_so_far + blended_rate * minutes_left;

        if let Some(ot) = &opts.overtime {
            blended_projection += ot.expected_contribution();
        }

        let needed_pace_per_minute =
            (input.live_market_total - input.total_points_so_far) / minutes_left;
        let edge_vs_live = blended_projection - input.live_market_total;
        let flags = detect_flags(input, &clock);
        let lean = Lean::from_edge(edge_vs_live, opts.edge_threshold);

        tracing::debug!(
            elapsed,
            alpha_used,
            pace_per_minute,
            blended_rate,
            blended_projection,
            edge_vs_live,
            %lean,
            %flags,
            "Projected final total"
        );

        Ok(ProjectionResult {
            quarter: input.quarter,
            time_remaining: input.time_remaining.trim().to_string(),
            total_points_so_far: input.total_points_so_far,
            live_market_total: input.live_market_total,
            pregame_total: input.pregame_total,
            elapsed_minutes: elapsed,
            alpha_used,
            pace_per_minute,
            pace_only_projection,
            blended_projection,
            edge_vs_live,
            needed_pace_per_minute,
            lean,
            flags,
            timestamp,
        })
    }
}

/// Project with a default engine
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    ProjectionEngine::new().project(input)
}

/// Flags in detection order: bonus, FT parade, FT rate, 3P%, overtime
fn detect_flags(input: &ProjectionInput, clock: &GameClock) -> RiskFlags {
    let opts = &input.options;
    let mut flags = RiskFlags::new();

    if opts.bonus_active {
        if input.quarter <= EARLY_BONUS_LAST_QUARTER
            && clock.minutes_remaining > EARLY_BONUS_MINUTES_LEFT
        {
            flags.push(RiskFlag::EarlyBonusHighRisk);
        } else {
            flags.push(RiskFlag::BonusWhistlesOn);
        }
    }

    if opts.ft_parade_active {
        flags.push(RiskFlag::FtParade);
    }

    if let Some(attempts) = opts.free_throw_attempts {
        flags.push(RiskFlag::from_ft_rate(attempts / clock.elapsed_minutes));
    }

    if let Some(pct) = opts.three_point_pct {
        flags.push(RiskFlag::from_three_point_pct(pct));
    }

    if let Some(ot) = &opts.overtime {
        flags.push(RiskFlag::OvertimeOn {
            probability_pct: ot.probability_pct,
            points_added: ot.expected_contribution(),
        });
    }

    flags
}
