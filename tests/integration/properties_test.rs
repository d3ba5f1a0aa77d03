//! Property-based tests for model and hedge invariants

use nba_live_total::hedge::{american_from_decimal, decimal_from_american};
use nba_live_total::model::{
    auto_alpha, parse_clock, project, FlagCategory, ProjectionInput, ProjectionOptions,
};
use proptest::prelude::*;

fn clock_str(seconds_left: u32) -> String {
    format!("{}:{:02}", seconds_left / 60, seconds_left % 60)
}

proptest! {
    /// Elapsed time grows as the clock runs down and by 12 per quarter
    #[test]
    fn elapsed_monotonic(quarter in 1u32..=4, left in 1u32..=720, delta in 1u32..=60) {
        let later_left = left.saturating_sub(delta);
        let later = parse_clock(quarter, &clock_str(later_left)).unwrap();
        if let Ok(earlier) = parse_clock(quarter, &clock_str(left)) {
            prop_assert!(later > earlier);
        }
        if quarter < 4 {
            let next_quarter = parse_clock(quarter + 1, &clock_str(later_left)).unwrap();
            prop_assert!((next_quarter - later - 12.0).abs() < 1e-9);
        }
    }

    /// Auto-alpha stays in [0.35, 0.90] and never decreases
    #[test]
    fn auto_alpha_bounded(a in 0.0f64..48.0, b in 0.0f64..48.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(auto_alpha(lo) <= auto_alpha(hi));
        prop_assert!((0.35..=0.90).contains(&auto_alpha(lo)));
        prop_assert!((0.35..=0.90).contains(&auto_alpha(hi)));
    }

    /// Explicit alpha is always clamped into [0.05, 0.95]
    #[test]
    fn explicit_alpha_clamped(alpha in -1.0e6f64..1.0e6) {
        let input = ProjectionInput::new(3, "6:00", 150.0, 224.0, 228.5)
            .with_options(ProjectionOptions { alpha: Some(alpha), ..Default::default() });
        let result = project(&input).unwrap();
        prop_assert!((0.05..=0.95).contains(&result.alpha_used));
    }

    /// At most one flag per category, in detection order
    #[test]
    fn flags_unique_per_category(
        bonus in any::<bool>(),
        parade in any::<bool>(),
        fta in proptest::option::of(0.0f64..80.0),
        three in proptest::option::of(0.0f64..1.0),
    ) {
        let input = ProjectionInput::new(3, "4:00", 160.0, 226.0, 228.5)
            .with_options(ProjectionOptions {
                bonus_active: bonus,
                ft_parade_active: parade,
                free_throw_attempts: fta,
                three_point_pct: three,
                ..Default::default()
            });
        let result = project(&input).unwrap();
        let categories: Vec<FlagCategory> = result.flags.iter().map(|f| f.category()).collect();
        for (i, c) in categories.iter().enumerate() {
            prop_assert!(!categories[i + 1..].contains(c));
        }
        let expected = usize::from(bonus) + usize::from(parade)
            + usize::from(fta.is_some()) + usize::from(three.is_some());
        prop_assert_eq!(categories.len(), expected);
    }

    /// American -> decimal -> American round-trips
    #[test]
    fn odds_round_trip(magnitude in 100.0f64..2000.0, negative in any::<bool>()) {
        let american = if negative { -magnitude } else { magnitude };
        prop_assume!(american != -100.0);
        let dec = decimal_from_american(american).unwrap();
        let back = american_from_decimal(dec).unwrap();
        prop_assert!((back - american).abs() < 1e-6);
    }
}
