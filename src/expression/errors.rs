use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Cannot evaluate expression tree with open node")]
    OpenNodeEvaluation,
    #[error("Cannot compute required value of a literal")]
    RequiredOnLiteral,
    #[error("Expression tree has no open node to fill")]
    NoOpenNode,
}
