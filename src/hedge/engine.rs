//! Payout-equalizing hedge calculator
//!
//! Sizes a counter-bet so a win on either side pays a comparable amount.
//! This reduces variance; it is not an arbitrage lock.

use super::odds::decimal_from_american;
use super::{BetSide, HedgeError, HedgeInput, HedgeResult, HedgeSuggestion, MiddleRange};

/// CLV (points) at which the original bet is considered well ahead of the market
const STRONG_CLV: f64 = 6.0;
/// CLV (points) at which whistle risk is worth watching
const MODERATE_CLV: f64 = 3.0;

const BAD_MARKERS: [&str; 3] = ["HIGH_RISK", "FT_PARADE", "HIGH_FT_RATE"];
const WARN_MARKERS: [&str; 4] = ["BONUS", "ELEVATED_FT_RATE", "3P_", "OT_ON"];

/// Number of severe and cautionary flags among a set of labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSeverity {
    pub bad: usize,
    pub warn: usize,
}

impl FlagSeverity {
    /// Count labels by substring marker. A label can count as both bad and warn.
    pub fn count<S: AsRef<str>>(labels: &[S]) -> Self {
        let has_any = |label: &str, markers: &[&str]| markers.iter().any(|m| label.contains(m));

        labels.iter().fold(Self::default(), |mut acc, label| {
            let label = label.as_ref();
            if has_any(label, &BAD_MARKERS) {
                acc.bad += 1;
            }
            if has_any(label, &WARN_MARKERS) {
                acc.warn += 1;
            }
            acc
        })
    }
}

/// Stateless hedge engine
#[derive(Debug, Clone, Copy, Default)]
pub struct HedgeEngine;

impl HedgeEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn equalize(&self, input: &HedgeInput) -> Result<HedgeResult, HedgeError> {
        let dec_mine = decimal_from_american(input.my_odds_american)?;
        let dec_hedge = decimal_from_american(input.hedge_odds_american)?;

        let equalized_hedge_stake = input.my_stake * dec_mine / dec_hedge;

        let clv = closing_line_value(input.side, input.my_line, input.live_market_total);
        let severity = FlagSeverity::count(&input.risk_flags);
        let suggestion = suggest(clv, severity);
        let middle_range = find_middle(input.side, input.my_line, input.hedge_line);

        let win_mine = input.my_stake * (dec_mine - 1.0);
        let lose_mine = -input.my_stake;
        let win_hedge = equalized_hedge_stake * (dec_hedge - 1.0);
        let lose_hedge = -equalized_hedge_stake;

        let worst_case_profit = (win_mine + lose_hedge).min(lose_mine + win_hedge);
        let best_case_profit = win_mine + win_hedge;

        tracing::debug!(
            side = %input.side,
            clv,
            bad = severity.bad,
            warn = severity.warn,
            equalized_hedge_stake,
            %suggestion,
            "Equalized hedge"
        );

        Ok(HedgeResult {
            side: input.side,
            suggestion,
            equalized_hedge_stake,
            middle_range,
            worst_case_profit,
            best_case_profit,
        })
    }
}

/// Equalize a hedge with a default engine
pub fn equalize_hedge(input: &HedgeInput) -> Result<HedgeResult, HedgeError> {
    HedgeEngine::new().equalize(input)
}

/// Points the market has moved in the bet's favour since placement
pub fn closing_line_value(side: BetSide, my_line: f64, live_market_total: f64) -> f64 {
    match side {
        BetSide::Under => my_line - live_market_total,
        BetSide::Over => live_market_total - my_line,
    }
}

/// First matching rule wins
fn suggest(clv: f64, severity: FlagSeverity) -> HedgeSuggestion {
    if clv >= STRONG_CLV && (severity.bad >= 1 || severity.warn >= 2) {
        HedgeSuggestion::SmallHedge
    } else if clv >= STRONG_CLV {
        HedgeSuggestion::Hold
    } else if clv >= MODERATE_CLV && severity.bad >= 1 {
        HedgeSuggestion::Watch
    } else {
        HedgeSuggestion::NoSignal
    }
}

fn find_middle(side: BetSide, my_line: f64, hedge_line: f64) -> Option<MiddleRange> {
    match side {
        BetSide::Under if hedge_line < my_line => Some(MiddleRange {
            low: hedge_line,
            high: my_line,
        }),
        BetSide::Over if hedge_line > my_line => Some(MiddleRange {
            low: my_line,
            high: hedge_line,
        }),
        _ => None,
    }
}
