//! Hybrid root-finding algorithm.
//!
//! Combines bounded Newton-Raphson with bisection for robust convergence.

use crate::error::MathResult;
use crate::solvers::{bisection, newton_raphson_bounded, Bracket, SolverConfig, SolverResult};

/// Hybrid root-finding algorithm.
///
/// # Strategy
///
/// 1. Run Newton-Raphson from `initial_guess`, confined to `bracket`
/// 2. If Newton hits a vanishing derivative, a non-finite value, leaves the
///    bracket or exhausts its budget, bisect the whole bracket
///
/// Bisection converges linearly, so it gets twice the configured budget.
///
/// # Example
///
/// ```rust
/// use bondcalc_math::solvers::{hybrid, Bracket, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
/// let bracket = Bracket::new(1.0, 2.0).unwrap();
///
/// let result = hybrid(f, df, 1.5, bracket, &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bracket: Bracket,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let guess = if bracket.contains(initial_guess) {
        initial_guess
    } else {
        bracket.midpoint()
    };

    match newton_raphson_bounded(&f, &df, guess, bracket, config) {
        Ok(result) => Ok(result),
        Err(err) => {
            log::debug!("newton-raphson abandoned ({err}), bisecting [{}, {}]", bracket.lower(), bracket.upper());
            let bisection_config =
                config.with_max_iterations(config.max_iterations.saturating_mul(2));
            bisection(&f, bracket, &bisection_config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use crate::solvers::SolverMethod;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let bracket = Bracket::new(1.0, 2.0).unwrap();

        let result = hybrid(f, df, 1.5, bracket, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert_eq!(result.method, SolverMethod::Newton);
    }

    #[test]
    fn test_fallback_to_bisection_on_overshoot() {
        let f = |x: f64| x.atan();
        let df = |x: f64| 1.0 / (1.0 + x * x);
        let bracket = Bracket::new(-2.0, 2.0).unwrap();

        let result = hybrid(f, df, 1.5, bracket, &SolverConfig::default()).unwrap();

        assert_eq!(result.method, SolverMethod::Bisection);
        assert!(result.root.abs() < 1e-9);
    }

    #[test]
    fn test_fallback_on_zero_derivative() {
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;
        let bracket = Bracket::new(-1.0, 3.0).unwrap();

        let result = hybrid(f, df, 0.0, bracket, &SolverConfig::default()).unwrap();

        assert_eq!(result.method, SolverMethod::Bisection);
        assert_relative_eq!(result.root, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_guess_outside_bracket_starts_at_midpoint() {
        let f = |x: f64| x - 3.0;
        let df = |_: f64| 1.0;
        let bracket = Bracket::new(2.0, 4.0).unwrap();

        let result = hybrid(f, df, 100.0, bracket, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 3.0);
    }

    #[test]
    fn test_no_root_in_bracket() {
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;
        let bracket = Bracket::new(-1.0, 1.0).unwrap();

        let result = hybrid(f, df, 0.5, bracket, &SolverConfig::default());
        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_ytm_like_calculation() {
        // 5% annual coupon, 5 years, priced at 95
        let years = 5;
        let price_from_yield = |y: f64| {
            let mut pv = 0.0;
            for t in 1..=years {
                pv += 5.0 / (1.0 + y).powi(t);
            }
            pv + 100.0 / (1.0 + y).powi(years) - 95.0
        };
        let d_price_from_yield = |y: f64| {
            let mut dpv = 0.0;
            for t in 1..=years {
                dpv -= f64::from(t) * 5.0 / (1.0 + y).powi(t + 1);
            }
            dpv - f64::from(years) * 100.0 / (1.0 + y).powi(years + 1)
        };
        let bracket = Bracket::new(-0.99, 10.0).unwrap();

        let result = hybrid(
            price_from_yield,
            d_price_from_yield,
            0.05,
            bracket,
            &SolverConfig::default(),
        )
        .unwrap();

        assert!(price_from_yield(result.root).abs() < 1e-10);
        assert!(result.root > 0.05);
    }
}
