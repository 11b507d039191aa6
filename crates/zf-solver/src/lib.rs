//! Z-factor solver orchestration.
//!
//! Explicit correlations are evaluated directly. Implicit correlations are
//! solved with a secant-form Newton iteration started from an ordered
//! ladder of initial guesses: an optional smart seed from the explicit
//! model, the primary guess, then the fixed values 0.1 to 1.0 nearest to
//! the primary guess first. The first guess that converges wins.

pub mod error;
pub mod guess;
pub mod newton;
pub mod solve;

pub use error::{SolverError, SolverResult};
pub use guess::{GuessPolicy, LADDER, guess_ladder};
pub use newton::{NewtonConfig, NewtonResult, newton_solve};
pub use solve::{ZSolution, ZSolveOptions, solve_z};
