//! Expression trees with a single hole, built up one placement at a time

mod ast;
mod canonical;
mod display;
mod errors;
mod eval;
mod operator;

pub use ast::Expression;
pub use display::Infix;
pub use errors::ExpressionError;
pub use operator::{Operator, OperatorSpec};
