//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{Bracket, SolverConfig, SolverMethod, SolverResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves the bracket, keeping the half whose endpoints still
/// straddle a sign change. Stops when `|f(mid)|` or the bracket half-width
/// falls below the tolerance.
///
/// Requires `f(lower)` and `f(upper)` to have opposite signs (or one of them
/// to be a root already).
///
/// # Example
///
/// ```rust
/// use bondcalc_math::solvers::{bisection, Bracket, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let bracket = Bracket::new(1.0, 2.0).unwrap();
///
/// let result = bisection(f, bracket, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn bisection<F>(f: F, bracket: Bracket, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = bracket.lower();
    let mut hi = bracket.upper();
    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if !f_lo.is_finite() || !f_hi.is_finite() {
        return Err(MathError::NonFinite { iteration: 0 });
    }

    if f_lo.abs() < config.tolerance {
        return Ok(found(lo, 0, f_lo));
    }
    if f_hi.abs() < config.tolerance {
        return Ok(found(hi, 0, f_hi));
    }

    if f_lo.signum() == f_hi.signum() {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    for iteration in 1..=config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        if f_mid.abs() < config.tolerance || (hi - lo) / 2.0 < config.tolerance {
            return Ok(found(mid, iteration, f_mid));
        }

        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    let mid = (lo + hi) / 2.0;
    Err(MathError::convergence_failed(
        config.max_iterations,
        f(mid).abs(),
    ))
}

fn found(root: f64, iterations: u32, residual: f64) -> SolverResult {
    SolverResult {
        root,
        iterations,
        residual,
        method: SolverMethod::Bisection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let bracket = Bracket::new(1.0, 2.0).unwrap();

        let result = bisection(f, bracket, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert_eq!(result.method, SolverMethod::Bisection);
    }

    #[test]
    fn test_decreasing_function() {
        // Bond-price shaped: decreasing in the rate
        let f = |r: f64| 100.0 / (1.0 + r).powi(5) - 80.0;
        let bracket = Bracket::new(-0.99, 10.0).unwrap();

        let result = bisection(f, bracket, &SolverConfig::new(1e-12, 200)).unwrap();

        assert_relative_eq!(result.root, 1.25f64.powf(0.2) - 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x - 2.0;
        let bracket = Bracket::new(2.0, 3.0).unwrap();

        let result = bisection(f, bracket, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_root_at_endpoint() {
        let f = |x: f64| x - 1.0;
        let bracket = Bracket::new(0.0, 1.0).unwrap();

        let result = bisection(f, bracket, &SolverConfig::default()).unwrap();

        assert_eq!(result.iterations, 0);
        assert_relative_eq!(result.root, 1.0);
    }

    #[test]
    fn test_budget_exhausted() {
        let f = |x: f64| x - 0.3;
        let bracket = Bracket::new(0.0, 1.0).unwrap();

        let result = bisection(f, bracket, &SolverConfig::new(1e-15, 5));
        assert!(matches!(result, Err(MathError::ConvergenceFailed { .. })));
    }
}
