use std::collections::BTreeMap;
use std::rc::Rc;

use float_ord::FloatOrd;
use log::debug;

use crate::expression::{Expression, ExpressionError};
use crate::solver::constants::{EPSILON, MEMO_DECIMALS};
use crate::utils::Numbers;

type SubsetKey = Vec<FloatOrd<f64>>;
type ValueKey = FloatOrd<f64>;

/// Rounds a value so that results equal up to float noise share a key
fn value_key(value: f64) -> ValueKey {
    let scale = 10_f64.powi(MEMO_DECIMALS);
    let rounded = (value * scale).round() / scale;
    FloatOrd(if rounded == 0.0 { 0.0 } else { rounded })
}

/// Complete subtrees seen so far, indexed by the multiset of numbers they
/// consume and then by the value they evaluate to.
///
/// Lives for one search run. A later subtree with the same numbers and value
/// replaces the earlier one.
#[derive(Debug, Default)]
pub struct MemoTable {
    entries: BTreeMap<SubsetKey, BTreeMap<ValueKey, Rc<Expression>>>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded (subset, value) pairs
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a complete subtree under the numbers it uses.
    ///
    /// Returns whether anything was stored; a subtree that divides by zero is skipped.
    ///
    /// # Errors
    ///
    /// Returns `OpenNodeEvaluation` if the subtree still has a hole.
    pub fn record(&mut self, expression: &Rc<Expression>) -> Result<bool, ExpressionError> {
        let value = match expression.evaluate() {
            Ok(value) => value,
            Err(ExpressionError::DivisionByZero) => return Ok(false),
            Err(e) => return Err(e),
        };
        let subset = Numbers::new(expression.numbers_used()).key();
        self.entries
            .entry(subset)
            .or_default()
            .insert(value_key(value), Rc::clone(expression));
        Ok(true)
    }

    /// A recorded subtree using exactly `numbers` and evaluating to `value`
    pub fn lookup(&self, numbers: &Numbers, value: f64) -> Option<&Rc<Expression>> {
        self.entries
            .get(&numbers.key())
            .and_then(|by_value| by_value.get(&value_key(value)))
    }

    /// Tries to finish a single-hole tree with a recorded subtree built from
    /// exactly the remaining `numbers`.
    ///
    /// Returns the completed tree only when it hits `target`. A division by zero
    /// while computing the required value just means there is nothing to reuse.
    ///
    /// # Errors
    ///
    /// Returns the fatal tree errors (`RequiredOnLiteral`, `NoOpenNode`,
    /// `OpenNodeEvaluation`) when called on a tree without a hole.
    pub fn complete(
        &self,
        expression: &Rc<Expression>,
        numbers: &Numbers,
        target: f64,
    ) -> Result<Option<Rc<Expression>>, ExpressionError> {
        let required = match expression.required_value(target) {
            Ok(required) => required,
            Err(ExpressionError::DivisionByZero) => return Ok(None),
            Err(e) => return Err(e),
        };

        let Some(cached) = self.lookup(numbers, required) else {
            return Ok(None);
        };

        let answer = expression.fill_leftmost_open(Rc::clone(cached))?;
        match answer.evaluate() {
            Ok(value) if (value - target).abs() < EPSILON => {
                debug!("Memo hit: {} needs {}, completed as {}", expression, required, answer);
                Ok(Some(answer))
            }
            Ok(_) | Err(ExpressionError::DivisionByZero) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::value_key;
    use float_ord::FloatOrd;

    #[test]
    fn test_value_key_rounds_float_noise() {
        assert_eq!(value_key(0.1 + 0.2), value_key(0.3));
        assert_eq!(value_key(25.0), FloatOrd(25.0));
        assert_ne!(value_key(1.0), value_key(1.001));
    }

    #[test]
    fn test_value_key_folds_negative_zero() {
        assert_eq!(value_key(-0.0), value_key(0.0));
        assert_eq!(value_key(-1e-12), value_key(0.0));
    }
}
