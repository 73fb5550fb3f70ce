//! Utils module split into submodules

mod errors;
mod numbers;
mod validation;

pub use errors::UtilsError;
pub use numbers::Numbers;
pub use validation::validate_inputs;
