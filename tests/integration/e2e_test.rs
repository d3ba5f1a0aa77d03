//! End-to-end projection into hedge

use nba_live_total::config::Config;
use nba_live_total::hedge::{equalize_hedge, BetSide, HedgeInput, HedgeSuggestion};
use nba_live_total::model::{
    parse_clock, project, Lean, OvertimeAdjustment, ProjectionError, ProjectionInput,
    ProjectionOptions,
};

#[test]
fn test_third_quarter_scenario() {
    let input = ProjectionInput::new(3, "6:00", 150.0, 224.0, 228.5);
    let result = project(&input).unwrap();

    assert_eq!(result.elapsed_minutes, 30.0);
    assert!((result.alpha_used - 0.71).abs() < 1e-9);
    assert!((result.pace_per_minute - 5.0).abs() < 1e-9);
    assert!((result.blended_projection - 238.7).abs() < 0.1);
    assert!((result.edge_vs_live - 14.7).abs() < 0.1);
    assert_eq!(result.lean, Lean::Over);
}

#[test]
fn test_flags_feed_hedge_suggestion() {
    let input = ProjectionInput::new(2, "9:00", 64.0, 221.0, 228.5).with_options(
        ProjectionOptions {
            bonus_active: true,
            free_throw_attempts: Some(18.0),
            ..Default::default()
        },
    );
    let projection = project(&input).unwrap();
    // 15 minutes elapsed, 1.20 FTA/min
    assert_eq!(
        projection.flags.labels(),
        vec!["EARLY_BONUS_HIGH_RISK", "HIGH_FT_RATE(1.20/min)"]
    );

    let hedge = equalize_hedge(&HedgeInput {
        side: BetSide::Under,
        my_line: 225.0,
        my_stake: 110.0,
        my_odds_american: -110.0,
        hedge_line: 221.0,
        hedge_odds_american: -110.0,
        live_market_total: projection.live_market_total,
        risk_flags: projection.flags.labels(),
    })
    .unwrap();

    // clv = 4 with severe flags
    assert_eq!(hedge.suggestion, HedgeSuggestion::Watch);
    assert!(hedge.middle_range.is_some());
}

#[test]
fn test_overtime_adds_expected_points() {
    let config = Config::default();
    let base = ProjectionInput::new(4, "1:30", 210.0, 218.0, 228.5);
    let with_ot = base.clone().with_options(ProjectionOptions {
        overtime: Some(config.overtime.adjustment(None, None)),
        ..Default::default()
    });

    let a = project(&base).unwrap();
    let b = project(&with_ot).unwrap();
    assert!((b.blended_projection - a.blended_projection - 0.6).abs() < 1e-9);
    assert_eq!(
        b.flags.labels(),
        vec!["OT_ON(6.0% -> +0.6 pts)".to_string()]
    );

    let explicit = OvertimeAdjustment {
        probability_pct: 20.0,
        expected_points: 12.0,
    };
    assert!((explicit.expected_contribution() - 2.4).abs() < 1e-9);
}

#[test]
fn test_clock_boundaries() {
    assert_eq!(parse_clock(4, "0:00").unwrap(), 48.0);
    assert!(matches!(
        parse_clock(1, "12:00"),
        Err(ProjectionError::Range(_))
    ));
    assert!(matches!(
        parse_clock(3, "6.00"),
        Err(ProjectionError::Format(_))
    ));
}

#[test]
fn test_result_serializes_to_json() {
    let result = project(&ProjectionInput::new(3, "6:00", 150.0, 224.0, 228.5)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["lean"], "OVER");
    assert_eq!(json["flags"], "NONE");
    assert_eq!(json["quarter"], 3);
}
