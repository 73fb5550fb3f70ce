use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// # Errors
    ///
    /// Returns an error when:
    /// - a hole is reachable (`OpenNodeEvaluation`)
    /// - a division has a zero right operand (`DivisionByZero`)
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        match self {
            Expression::Open => Err(ExpressionError::OpenNodeEvaluation),
            Expression::Literal(value) => Ok(*value),
            Expression::BinaryOp(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                op.eval(left, right)
            }
        }
    }

    /// The value the single hole must take for the whole tree to equal `target`.
    ///
    /// Walks from the root towards the hole, inverting each operator against the
    /// evaluable sibling. Assumes exactly one hole is reachable.
    ///
    /// # Errors
    ///
    /// Returns `RequiredOnLiteral` when the walk reaches a literal (the tree has
    /// no hole), and `DivisionByZero` when an inverse or a sibling evaluation
    /// divides by zero.
    pub fn required_value(&self, target: f64) -> Result<f64, ExpressionError> {
        match self {
            Expression::Open => Ok(target),
            Expression::Literal(_) => Err(ExpressionError::RequiredOnLiteral),
            Expression::BinaryOp(op, l, r) => {
                if l.evaluable() {
                    r.required_value(op.solve_right(target, l.evaluate()?)?)
                } else {
                    l.required_value(op.solve_left(target, r.evaluate()?)?)
                }
            }
        }
    }

    /// Best-effort value of a tree that may still contain holes.
    ///
    /// Holes contribute nothing: an operator with one valued side passes that
    /// value through, and a tree with no valued part estimates to 0. Only used
    /// to order the informed search frontier.
    pub fn evaluate_ignoring_holes(&self) -> f64 {
        let estimate = if self.is_fully_open() {
            0.0
        } else {
            self.partial_value().unwrap_or(0.0)
        };
        trace!("Estimated {} as {}", self, estimate);
        estimate
    }

    fn partial_value(&self) -> Option<f64> {
        match self {
            Expression::Open => None,
            Expression::Literal(value) => Some(*value),
            Expression::BinaryOp(op, l, r) => match (l.partial_value(), r.partial_value()) {
                (Some(left), Some(right)) => op.eval(left, right).ok(),
                (Some(value), None) | (None, Some(value)) => Some(value),
                (None, None) => None,
            },
        }
    }
}
