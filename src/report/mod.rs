//! Text rendering for projection and hedge results

use crate::hedge::HedgeResult;
use crate::model::ProjectionResult;

/// Shown in place of NaN or infinite values
pub const PLACEHOLDER: &str = "—";

/// Format a number with a fixed decimal count
pub fn fmt_num(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Render a projection for the terminal
pub fn format_projection(r: &ProjectionResult) -> String {
    format!(
        r#"
=== NBA LIVE TOTAL READ ===
Time: {}
Q{}  {} left | Total pts: {}
Live total: {} | Pregame: {}
Elapsed: {} min | Alpha: {}
Pace: {} pts/min | Needed for live: {} pts/min
Pace proj: {} | Blended proj: {}
Edge vs live: {}  =>  {}
Flags: {}
"#,
        r.timestamp.format("%Y-%m-%d %H:%M:%S"),
        r.quarter,
        r.time_remaining,
        fmt_num(r.total_points_so_far, 0),
        fmt_num(r.live_market_total, 1),
        fmt_num(r.pregame_total, 1),
        fmt_num(r.elapsed_minutes, 2),
        fmt_num(r.alpha_used, 2),
        fmt_num(r.pace_per_minute, 2),
        fmt_num(r.needed_pace_per_minute, 2),
        fmt_num(r.pace_only_projection, 1),
        fmt_num(r.blended_projection, 1),
        fmt_num(r.edge_vs_live, 1),
        lean_label(r),
        r.flags,
    )
}

fn lean_label(r: &ProjectionResult) -> String {
    match r.lean {
        crate::model::Lean::Pass => "PASS / WAIT".to_string(),
        lean => format!("LEAN: {lean}"),
    }
}

/// Render a hedge calculation for the terminal
pub fn format_hedge(h: &HedgeResult) -> String {
    format!(
        r#"
--- HEDGE OUTPUT ---
Suggestion: {} ({})
Equalized hedge stake: ${}
{}
Worst-case profit (approx): ${}
Best-case (middle hits): ${}
"#,
        h.suggestion.description(),
        h.suggestion,
        fmt_num(h.equalized_hedge_stake, 2),
        h.middle_note(),
        fmt_num(h.worst_case_profit, 2),
        fmt_num(h.best_case_profit, 2),
    )
}
