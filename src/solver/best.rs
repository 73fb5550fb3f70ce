use std::rc::Rc;

use log::debug;

use crate::expression::{Expression, ExpressionError};
use crate::solver::constants::EPSILON;

/// A complete expression tree together with its value
#[derive(Debug, Clone)]
pub struct Best {
    pub expression: Rc<Expression>,
    pub value: f64,
}

impl Default for Best {
    /// The bare hole with value 0, reported when no candidate was ever scored
    fn default() -> Self {
        Self {
            expression: Expression::open(),
            value: 0.0,
        }
    }
}

impl Best {
    /// Evaluates a complete tree into a candidate.
    ///
    /// Returns `Ok(None)` when the evaluation divides by zero: such a tree
    /// contributes nothing to the search.
    ///
    /// # Errors
    ///
    /// Returns `OpenNodeEvaluation` if the tree still has a hole.
    pub fn evaluate(expression: Rc<Expression>) -> Result<Option<Self>, ExpressionError> {
        match expression.evaluate() {
            Ok(value) => Ok(Some(Self { expression, value })),
            Err(ExpressionError::DivisionByZero) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn distance(&self, target: f64) -> f64 {
        (self.value - target).abs()
    }

    pub fn is_exact(&self, target: f64) -> bool {
        self.distance(target) < EPSILON
    }
}

/// Strict improvement only: a candidate as close as the incumbent never replaces it
pub fn better(candidate: &Best, incumbent: &Best, target: f64) -> bool {
    candidate.distance(target) < incumbent.distance(target)
}

/// Outcome of one search run
#[derive(Debug, Clone)]
pub struct BestResult {
    pub expression: Rc<Expression>,
    pub value: f64,
    /// Number of trees generated during the run
    pub explored: u64,
}

impl BestResult {
    pub fn is_exact(&self, target: f64) -> bool {
        (self.value - target).abs() < EPSILON
    }
}

/// Running best candidate and explored-node counter for a single search run
pub(crate) struct BestTracker {
    target: f64,
    best: Option<Best>,
    explored: u64,
}

impl BestTracker {
    pub(crate) fn new(target: f64) -> Self {
        Self {
            target,
            best: None,
            explored: 0,
        }
    }

    pub(crate) fn target(&self) -> f64 {
        self.target
    }

    pub(crate) fn visit(&mut self) {
        self.explored += 1;
    }

    /// Scores a complete tree, keeping it if it beats the current best.
    ///
    /// The first scorable candidate always replaces the empty default.
    pub(crate) fn consider(&mut self, expression: &Rc<Expression>) -> Result<(), ExpressionError> {
        let Some(candidate) = Best::evaluate(Rc::clone(expression))? else {
            return Ok(());
        };

        let improves = match &self.best {
            Some(incumbent) => better(&candidate, incumbent, self.target),
            None => true,
        };
        if improves {
            debug!(
                "New best {} = {} (distance {})",
                candidate.expression,
                candidate.value,
                candidate.distance(self.target)
            );
            self.best = Some(candidate);
        }
        Ok(())
    }

    /// True once an exact match is held; nothing can improve on it
    pub(crate) fn is_solved(&self) -> bool {
        self.best
            .as_ref()
            .is_some_and(|best| best.is_exact(self.target))
    }

    pub(crate) fn finish(self) -> BestResult {
        let best = self.best.unwrap_or_default();
        BestResult {
            expression: best.expression,
            value: best.value,
            explored: self.explored,
        }
    }
}
