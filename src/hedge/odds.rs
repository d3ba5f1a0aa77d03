//! American and decimal odds conversion

use super::HedgeError;

/// Decimal odds (payout multiplier on stake) from American odds
pub fn decimal_from_american(american: f64) -> Result<f64, HedgeError> {
    if american == 0.0 {
        return Err(HedgeError::ZeroOdds);
    }
    if american < 0.0 {
        Ok(1.0 + 100.0 / american.abs())
    } else {
        Ok(1.0 + american / 100.0)
    }
}

/// American odds from decimal odds; `None` when the multiplier pays nothing
pub fn american_from_decimal(decimal: f64) -> Option<f64> {
    if decimal <= 1.0 {
        return None;
    }
    if decimal >= 2.0 {
        Some((decimal - 1.0) * 100.0)
    } else {
        Some(-100.0 / (decimal - 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favourite_odds() {
        let dec = decimal_from_american(-110.0).unwrap();
        assert!((dec - 1.909_090_909).abs() < 1e-6);
    }

    #[test]
    fn test_underdog_odds() {
        assert_eq!(decimal_from_american(150.0).unwrap(), 2.5);
        assert_eq!(decimal_from_american(100.0).unwrap(), 2.0);
    }

    #[test]
    fn test_zero_odds_rejected() {
        assert_eq!(decimal_from_american(0.0), Err(HedgeError::ZeroOdds));
    }

    #[test]
    fn test_round_trip() {
        for american in [-250.0, -110.0, -105.0, 100.0, 120.0, 150.0, 400.0] {
            let dec = decimal_from_american(american).unwrap();
            let back = american_from_decimal(dec).unwrap();
            assert!((back - american).abs() < 1e-9, "{american} -> {dec} -> {back}");
        }
    }

    #[test]
    fn test_no_payout_has_no_american_price() {
        assert!(american_from_decimal(1.0).is_none());
    }
}
