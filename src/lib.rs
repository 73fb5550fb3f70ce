//! Numbers game - find an arithmetic expression over a multiset of numbers that
//! lands as close as possible to a target
//!
//! Expressions are grown one placement at a time from a single hole. Three search
//! strategies explore that space: exhaustive depth-first, depth-first with a
//! meet-in-the-middle memo, and best-first search driven by a pluggable heuristic.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use solver::{
    BestResult, HeuristicKind, InformedConfig, SolverError, solve_exhaustive, solve_informed,
    solve_memoized,
};
pub use utils::{Numbers, UtilsError, validate_inputs};

/// Find the expression closest to `target` with the best-first search, using the
/// memo, canonical deduplication and the absolute-difference heuristic.
///
/// This is a convenience wrapper around [`solve_informed`].
///
/// # Errors
///
/// This function will return an error if:
/// * The target or any of the numbers is NaN or infinite
/// * The search runs into an internal tree-shape error
///
/// # Examples
///
/// ```
/// use numbers_game::find_expression;
///
/// match find_expression(6.0, &[2.0, 3.0]) {
///     Ok(best) => println!("Found: {} = {}", best.expression.infix(), best.value),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expression(target: f64, numbers: &[f64]) -> Result<BestResult, SolverError> {
    solve_informed(
        target,
        numbers,
        InformedConfig::new(true, true),
        solver::heuristics::absolute_difference(target),
    )
}
