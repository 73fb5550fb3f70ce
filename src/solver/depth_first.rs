use std::rc::Rc;

use log::{info, trace};

use crate::expression::Expression;
use crate::solver::best::{BestResult, BestTracker};
use crate::solver::branching::children;
use crate::solver::errors::SolverError;
use crate::solver::memo::MemoTable;
use crate::utils::{Numbers, validate_inputs};

/// Plain depth-first enumeration of every tree over the numbers.
///
/// # Errors
///
/// Returns an error if the inputs are not finite, or if the search trips over a
/// tree-shape logic error. Division by zero never aborts the run.
pub fn solve_exhaustive(target: f64, numbers: &[f64]) -> Result<BestResult, SolverError> {
    validate_inputs(target, numbers)?;
    info!("Exhaustive search for {} over {:?}", target, numbers);

    let mut search = DepthFirstSearch::new(target, None);
    search.visit(Expression::open(), &Numbers::from(numbers))?;
    Ok(search.finish())
}

/// Depth-first enumeration that reuses recorded partial results.
///
/// Every intermediate complete subtree is recorded by the numbers it consumed.
/// A tree with a single hole first asks the memo for a subtree built from exactly
/// the remaining numbers with exactly the value the hole needs.
///
/// # Errors
///
/// Same as [`solve_exhaustive`].
pub fn solve_memoized(target: f64, numbers: &[f64]) -> Result<BestResult, SolverError> {
    validate_inputs(target, numbers)?;
    info!("Memoized search for {} over {:?}", target, numbers);

    let mut search = DepthFirstSearch::new(target, Some(MemoTable::new()));
    search.visit(Expression::open(), &Numbers::from(numbers))?;
    Ok(search.finish())
}

struct DepthFirstSearch {
    tracker: BestTracker,
    memo: Option<MemoTable>,
}

impl DepthFirstSearch {
    fn new(target: f64, memo: Option<MemoTable>) -> Self {
        Self {
            tracker: BestTracker::new(target),
            memo,
        }
    }

    fn visit(&mut self, expression: Rc<Expression>, numbers: &Numbers) -> Result<(), SolverError> {
        self.tracker.visit();
        trace!("Visiting {} with {:?} left", expression, numbers.as_slice());

        if expression.evaluable() {
            self.tracker.consider(&expression)?;
            if !numbers.is_empty()
                && let Some(memo) = self.memo.as_mut()
            {
                memo.record(&expression)?;
            }
            return Ok(());
        }

        if numbers.is_empty() {
            return Ok(());
        }

        if expression.size() == 1
            && let Some(memo) = self.memo.as_ref()
            && let Some(answer) = memo.complete(&expression, numbers, self.tracker.target())?
        {
            self.tracker.consider(&answer)?;
            return Ok(());
        }

        for (child, rest) in children(&expression, numbers)? {
            self.visit(child, &rest)?;
            // lucky stop
            if self.tracker.is_solved() {
                return Ok(());
            }
        }

        Ok(())
    }

    fn finish(self) -> BestResult {
        if let Some(memo) = &self.memo {
            info!("Memo table holds {} partial results", memo.len());
        }
        let result = self.tracker.finish();
        info!(
            "Finished after {} nodes: {} = {}",
            result.explored, result.expression, result.value
        );
        result
    }
}
