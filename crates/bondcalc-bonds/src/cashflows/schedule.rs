//! Coupon schedule generation.

use chrono::{Months, NaiveDate};

use bondcalc_core::{BondInputs, CashFlowScheduleItem, CouponFrequency, MAX_YEARS_TO_MATURITY};

use crate::error::{BondError, BondResult};

/// Payment date of a coupon period.
///
/// Always measured from the issue date, so month-end clamping (Jan 31 plus
/// one month is Feb 28/29) never accumulates across periods.
pub fn payment_date(
    issue_date: NaiveDate,
    period: u32,
    frequency: CouponFrequency,
) -> BondResult<NaiveDate> {
    let months = period
        .checked_mul(frequency.months_per_period())
        .ok_or_else(|| BondError::cash_flow_failed(format!("period {period} is too far out")))?;

    issue_date
        .checked_add_months(Months::new(months))
        .ok_or_else(|| {
            BondError::cash_flow_failed(format!(
                "payment date for period {period} is out of range"
            ))
        })
}

/// Generates the coupon schedule of a bond issued on `issue_date`.
///
/// A negative coupon rate is treated as zero. Inputs that round to zero
/// periods yield an empty schedule; the calculator rejects them earlier.
/// Schedules longer than [`MAX_YEARS_TO_MATURITY`] allows are refused.
pub fn generate_schedule(
    inputs: &BondInputs,
    issue_date: NaiveDate,
) -> BondResult<Vec<CashFlowScheduleItem>> {
    let frequency = inputs.coupon_frequency;
    let total_periods = inputs.total_periods();
    let max_periods = frequency.periods_for(MAX_YEARS_TO_MATURITY);
    if total_periods > max_periods {
        return Err(BondError::cash_flow_failed(format!(
            "{total_periods} periods exceeds the maximum of {max_periods}"
        )));
    }
    let coupon_payment = inputs.annual_coupon().max(0.0) / f64::from(frequency.periods_per_year());

    let mut schedule = Vec::new();
    let mut cumulative_interest = 0.0;

    for period in 1..=total_periods {
        cumulative_interest += coupon_payment;
        let remaining_principal = if period == total_periods {
            0.0
        } else {
            inputs.face_value
        };

        schedule.push(CashFlowScheduleItem {
            period,
            payment_date: payment_date(issue_date, period, frequency)?,
            coupon_payment,
            cumulative_interest,
            remaining_principal,
        });
    }

    log::trace!(
        "generated {} coupon periods of {} from {}",
        schedule.len(),
        coupon_payment,
        issue_date
    );

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondcalc_core::BondDefaults;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bond(coupon: f64, years: f64, frequency: CouponFrequency) -> BondInputs {
        BondInputs {
            face_value: 1000.0,
            annual_coupon_rate: coupon,
            market_price: 950.0,
            years_to_maturity: years,
            coupon_frequency: frequency,
        }
    }

    #[test]
    fn test_default_bond_schedule() {
        let schedule = generate_schedule(&BondDefaults::inputs(), date(2026, 1, 15)).unwrap();

        assert_eq!(schedule.len(), 10);
        for (i, item) in schedule.iter().enumerate() {
            assert_eq!(item.period, i as u32 + 1);
            assert_relative_eq!(item.coupon_payment, 25.0);
        }
        assert_eq!(schedule[0].payment_date, date(2026, 7, 15));
        assert_eq!(schedule[1].payment_date, date(2027, 1, 15));
        assert_eq!(schedule[9].payment_date, date(2031, 1, 15));
        assert_relative_eq!(schedule[9].cumulative_interest, 250.0);
    }

    #[test]
    fn test_bullet_principal() {
        let schedule =
            generate_schedule(&bond(4.0, 3.0, CouponFrequency::Annual), date(2026, 3, 1)).unwrap();

        assert_eq!(schedule.len(), 3);
        assert_relative_eq!(schedule[0].remaining_principal, 1000.0);
        assert_relative_eq!(schedule[1].remaining_principal, 1000.0);
        assert_relative_eq!(schedule[2].remaining_principal, 0.0);
        assert_relative_eq!(schedule[2].total_payment(1000.0), 1040.0);
    }

    #[test]
    fn test_single_period() {
        let schedule =
            generate_schedule(&bond(6.0, 0.5, CouponFrequency::SemiAnnual), date(2026, 1, 1))
                .unwrap();

        assert_eq!(schedule.len(), 1);
        assert_relative_eq!(schedule[0].coupon_payment, 30.0);
        assert_relative_eq!(schedule[0].remaining_principal, 0.0);
        assert_eq!(schedule[0].payment_date, date(2026, 7, 1));
    }

    #[test]
    fn test_fractional_years_round_half_away_from_zero() {
        let issue = date(2026, 1, 1);

        let annual = generate_schedule(&bond(5.0, 2.5, CouponFrequency::Annual), issue).unwrap();
        assert_eq!(annual.len(), 3);

        let annual = generate_schedule(&bond(5.0, 2.4, CouponFrequency::Annual), issue).unwrap();
        assert_eq!(annual.len(), 2);

        let semi = generate_schedule(&bond(5.0, 1.25, CouponFrequency::SemiAnnual), issue).unwrap();
        assert_eq!(semi.len(), 3);
    }

    #[test]
    fn test_zero_periods_yields_empty_schedule() {
        let schedule =
            generate_schedule(&bond(5.0, 0.2, CouponFrequency::Annual), date(2026, 1, 1)).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_negative_coupon_clamped() {
        let schedule =
            generate_schedule(&bond(-3.0, 2.0, CouponFrequency::Annual), date(2026, 1, 1)).unwrap();

        assert!(schedule.iter().all(|item| item.coupon_payment == 0.0));
        assert_relative_eq!(schedule[1].cumulative_interest, 0.0);
    }

    #[test]
    fn test_month_end_clamping_does_not_drift() {
        let issue = date(2026, 8, 31);

        assert_eq!(
            payment_date(issue, 1, CouponFrequency::SemiAnnual).unwrap(),
            date(2027, 2, 28)
        );
        assert_eq!(
            payment_date(issue, 2, CouponFrequency::SemiAnnual).unwrap(),
            date(2027, 8, 31)
        );
        assert_eq!(
            payment_date(date(2027, 8, 31), 1, CouponFrequency::SemiAnnual).unwrap(),
            date(2028, 2, 29)
        );
    }

    #[test]
    fn test_annual_dates() {
        let issue = date(2026, 10, 19);
        assert_eq!(
            payment_date(issue, 4, CouponFrequency::Annual).unwrap(),
            date(2030, 10, 19)
        );
    }

    #[test]
    fn test_overlong_maturity_refused() {
        let inputs = bond(5.0, 1e12, CouponFrequency::SemiAnnual);
        let result = generate_schedule(&inputs, date(2026, 1, 1));
        assert!(matches!(result, Err(BondError::CashFlowFailed { .. })));

        let longest = generate_schedule(
            &bond(5.0, MAX_YEARS_TO_MATURITY, CouponFrequency::SemiAnnual),
            date(2026, 1, 1),
        )
        .unwrap();
        assert_eq!(longest.len(), 200);
    }

    #[test]
    fn test_payment_date_out_of_range() {
        let result = payment_date(NaiveDate::MAX, 1, CouponFrequency::Annual);
        assert!(matches!(result, Err(BondError::CashFlowFailed { .. })));
    }

    proptest! {
        #[test]
        fn prop_schedule_invariants(
            face in 1.0f64..1_000_000.0,
            coupon in 0.0f64..25.0,
            years in 1.0f64..40.0,
            semi in any::<bool>(),
        ) {
            let frequency = if semi { CouponFrequency::SemiAnnual } else { CouponFrequency::Annual };
            let inputs = BondInputs {
                face_value: face,
                annual_coupon_rate: coupon,
                market_price: face,
                years_to_maturity: years,
                coupon_frequency: frequency,
            };
            let schedule = generate_schedule(&inputs, date(2026, 1, 31)).unwrap();
            let expected_len = (years * f64::from(frequency.periods_per_year())).round() as usize;
            prop_assert_eq!(schedule.len(), expected_len);

            let coupon_payment = schedule[0].coupon_payment;
            let last = schedule.last().unwrap();
            let total: f64 = schedule.iter().map(|item| item.coupon_payment).sum();
            prop_assert!((last.cumulative_interest - total).abs() <= 1e-6 * total.max(1.0));
            prop_assert!((total - coupon_payment * expected_len as f64).abs() <= 1e-6 * total.max(1.0));

            for pair in schedule.windows(2) {
                prop_assert!(pair[1].cumulative_interest >= pair[0].cumulative_interest);
                prop_assert!(pair[1].remaining_principal <= pair[0].remaining_principal);
                prop_assert!(pair[1].payment_date > pair[0].payment_date);
                prop_assert_eq!(pair[1].period, pair[0].period + 1);
            }
            for item in &schedule[..schedule.len() - 1] {
                prop_assert_eq!(item.remaining_principal, face);
            }
            prop_assert_eq!(last.remaining_principal, 0.0);
        }
    }
}
