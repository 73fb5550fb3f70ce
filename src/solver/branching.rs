use std::rc::Rc;

use crate::expression::{Expression, ExpressionError, Operator};
use crate::utils::Numbers;

/// Every tree reachable from `expression` by filling its left-most hole, paired
/// with the numbers left afterwards.
///
/// Each distinct remaining number is placed once. Operator nodes are only offered
/// while there are fewer holes than numbers, so every hole can still be filled.
pub(crate) fn children(
    expression: &Rc<Expression>,
    numbers: &Numbers,
) -> Result<Vec<(Rc<Expression>, Numbers)>, ExpressionError> {
    let mut out = Vec::with_capacity(numbers.len() + Operator::ALL.len());

    for number in numbers.distinct() {
        let child = expression.fill_leftmost_open(Expression::literal(number))?;
        out.push((child, numbers.without(number)));
    }

    if expression.size() < numbers.len() {
        for op in Operator::ALL {
            let child = expression.fill_leftmost_open(Expression::operation(op))?;
            out.push((child, numbers.clone()));
        }
    }

    Ok(out)
}
