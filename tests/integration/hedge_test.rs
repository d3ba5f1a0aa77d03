//! Hedge calculator scenarios

use nba_live_total::hedge::{
    equalize_hedge, BetSide, HedgeError, HedgeInput, HedgeSuggestion, MiddleRange,
};

fn bet(side: &str, my_line: f64, hedge_line: f64, live: f64) -> HedgeInput {
    HedgeInput {
        side: side.parse().unwrap(),
        my_line,
        my_stake: 100.0,
        my_odds_american: -110.0,
        hedge_line,
        hedge_odds_american: -110.0,
        live_market_total: live,
        risk_flags: Vec::new(),
    }
}

#[test]
fn test_under_middle_reported() {
    let result = equalize_hedge(&bet("UNDER", 228.5, 225.5, 224.0)).unwrap();
    assert_eq!(
        result.middle_range,
        Some(MiddleRange {
            low: 225.5,
            high: 228.5
        })
    );

    let result = equalize_hedge(&bet("UNDER", 228.5, 230.0, 224.0)).unwrap();
    assert_eq!(result.middle_range, None);
}

#[test]
fn test_over_with_good_clv_holds() {
    let result = equalize_hedge(&bet("over", 218.5, 226.5, 226.5)).unwrap();
    assert_eq!(result.side, BetSide::Over);
    assert_eq!(result.suggestion, HedgeSuggestion::Hold);
    assert!(result.best_case_profit > 0.0);
    assert!(result.worst_case_profit < 0.0);
}

#[test]
fn test_invalid_side_is_validation_error() {
    let err = "middle".parse::<BetSide>().unwrap_err();
    assert!(matches!(err, HedgeError::InvalidSide(_)));
    assert!(err.is_validation());
}

#[test]
fn test_zero_odds_is_validation_error() {
    let mut input = bet("UNDER", 228.5, 225.5, 224.0);
    input.my_odds_american = 0.0;
    assert_eq!(equalize_hedge(&input).unwrap_err(), HedgeError::ZeroOdds);
}

#[test]
fn test_underdog_hedge_needs_less_stake() {
    let mut input = bet("UNDER", 228.5, 225.5, 224.0);
    input.hedge_odds_american = 150.0;
    let result = equalize_hedge(&input).unwrap();
    let expected = 100.0 * (1.0 + 100.0 / 110.0) / 2.5;
    assert!((result.equalized_hedge_stake - expected).abs() < 1e-9);
}
