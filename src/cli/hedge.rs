//! Hedge command implementation

use crate::hedge::{BetSide, HedgeEngine, HedgeInput};
use crate::model::RiskFlags;
use crate::report::format_hedge;
use clap::Args;

#[derive(Args, Debug)]
pub struct HedgeArgs {
    /// Side of the placed bet (OVER or UNDER)
    #[arg(long)]
    pub side: BetSide,

    /// Line of the placed bet
    #[arg(long)]
    pub line: f64,

    /// Stake of the placed bet
    #[arg(long)]
    pub stake: f64,

    /// American odds of the placed bet (e.g. -110)
    #[arg(long, allow_negative_numbers = true)]
    pub odds: f64,

    /// Hedge line (defaults to the live total)
    #[arg(long)]
    pub hedge_line: Option<f64>,

    /// American odds of the hedge
    #[arg(long, allow_negative_numbers = true)]
    pub hedge_odds: f64,

    /// Live market total
    #[arg(long)]
    pub live: f64,

    /// Risk flags from a projection, `;`-separated
    #[arg(long, default_value = "NONE")]
    pub flags: String,

    /// Print JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl HedgeArgs {
    pub fn to_input(&self) -> HedgeInput {
        HedgeInput {
            side: self.side,
            my_line: self.line,
            my_stake: self.stake,
            my_odds_american: self.odds,
            hedge_line: self.hedge_line.unwrap_or(self.live),
            hedge_odds_american: self.hedge_odds,
            live_market_total: self.live,
            risk_flags: RiskFlags::parse_labels(&self.flags),
        }
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        let result = HedgeEngine::new().equalize(&self.to_input())?;
        super::emit(&result, self.json, format_hedge)
    }
}
