//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{Bracket, SolverConfig, SolverMethod, SolverResult, MIN_DERIVATIVE};

/// Newton-Raphson confined to a feasible bracket.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` and stops when
/// either `|f(x)|` or the step falls below the tolerance. Fails with
/// [`MathError::OutOfBounds`] as soon as an iterate leaves the bracket, so a
/// caller can switch to a bracketing method instead of chasing a divergent
/// sequence.
pub fn newton_raphson_bounded<F, DF>(
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
    if !bracket.contains(initial_guess) {
        return Err(MathError::OutOfBounds {
            x: initial_guess,
            lower: bracket.lower(),
            upper: bracket.upper(),
        });
    }
    iterate(&f, &df, initial_guess, bracket, config)
}

fn iterate<F, DF>(
    f: &F,
    df: &DF,
    initial_guess: f64,
    bracket: Bracket,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::NonFinite { iteration });
        }

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
                method: SolverMethod::Newton,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() || dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::ZeroDerivative { value: dfx });
        }

        let step = fx / dfx;
        x -= step;

        if !x.is_finite() {
            return Err(MathError::NonFinite { iteration });
        }
        if !bracket.contains(x) {
            return Err(MathError::OutOfBounds {
                x,
                lower: bracket.lower(),
                upper: bracket.upper(),
            });
        }

        if step.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: f(x),
                method: SolverMethod::Newton,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}
