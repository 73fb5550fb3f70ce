pub mod constants;
pub mod heuristics;

mod best;
mod branching;
mod config;
mod depth_first;
mod errors;
mod informed;
mod memo;

pub use best::{Best, BestResult, better};
pub use config::InformedConfig;
pub use depth_first::{solve_exhaustive, solve_memoized};
pub use errors::SolverError;
pub use heuristics::HeuristicKind;
pub use informed::solve_informed;
pub use memo::MemoTable;
