//! Premium / discount / par classification.

use bondcalc_core::PremiumDiscountIndicator;

/// Classifies a bond by comparing its market price with its face value.
///
/// Equality is exact; there is no tolerance band around par.
#[must_use]
pub fn classify(market_price: f64, face_value: f64) -> PremiumDiscountIndicator {
    if market_price > face_value {
        PremiumDiscountIndicator::Premium
    } else if market_price < face_value {
        PremiumDiscountIndicator::Discount
    } else {
        PremiumDiscountIndicator::Par
    }
}

/// Short description shown next to a classification.
#[must_use]
pub fn status_description(indicator: PremiumDiscountIndicator) -> &'static str {
    match indicator {
        PremiumDiscountIndicator::Premium => "Trading above face value",
        PremiumDiscountIndicator::Discount => "Trading below face value",
        PremiumDiscountIndicator::Par => "Trading at face value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(1050.0, 1000.0), PremiumDiscountIndicator::Premium);
        assert_eq!(classify(950.0, 1000.0), PremiumDiscountIndicator::Discount);
        assert_eq!(classify(1000.0, 1000.0), PremiumDiscountIndicator::Par);
    }

    #[test]
    fn test_no_tolerance_band() {
        assert_eq!(
            classify(1000.000_000_1, 1000.0),
            PremiumDiscountIndicator::Premium
        );
        assert_eq!(
            classify(999.999_999_9, 1000.0),
            PremiumDiscountIndicator::Discount
        );
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            status_description(PremiumDiscountIndicator::Premium),
            "Trading above face value"
        );
        assert_eq!(
            status_description(PremiumDiscountIndicator::Par),
            "Trading at face value"
        );
    }

    proptest! {
        #[test]
        fn prop_classification_matches_ordering(price in 1.0f64..2000.0, face in 1.0f64..2000.0) {
            let indicator = classify(price, face);
            prop_assert_eq!(indicator == PremiumDiscountIndicator::Par, price == face);
            prop_assert_eq!(indicator == PremiumDiscountIndicator::Premium, price > face);
            prop_assert_eq!(indicator == PremiumDiscountIndicator::Discount, price < face);
        }
    }
}
