//! # Bondcalc Math
//!
//! Numerical root finders used by the Bondcalc yield solver.
//!
//! This crate provides:
//!
//! - **Newton-Raphson**: quadratic convergence from a good initial guess
//! - **Bisection**: guaranteed convergence over a sign-changing bracket
//! - **Hybrid**: Newton-Raphson confined to a feasible bracket, falling back
//!   to bisection when Newton fails or leaves the bracket
//!
//! All solvers work on `f64` and report the iterations used and the final
//! residual alongside the root.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, hybrid, newton_raphson_bounded, Bracket, SolverConfig, SolverMethod,
        SolverResult,
    };
}

pub use error::{MathError, MathResult};
