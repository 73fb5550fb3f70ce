use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use float_ord::FloatOrd;
use log::{debug, info};

use crate::expression::Expression;
use crate::solver::best::{BestResult, BestTracker};
use crate::solver::branching::children;
use crate::solver::config::InformedConfig;
use crate::solver::errors::SolverError;
use crate::solver::memo::MemoTable;
use crate::utils::{Numbers, validate_inputs};

/// A queued tree with unfilled holes
struct FrontierEntry {
    score: FloatOrd<f64>,
    sequence: u64,
    expression: Rc<Expression>,
    numbers: Numbers,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // Reversed so the max-heap pops the lowest score, earliest insertion first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Best-first search ordered by `heuristic` (lower scores are expanded first).
///
/// Complete trees are scored as soon as they are generated; only trees that
/// still have holes are queued. The heuristic is only ever called on those.
/// The run ends when the frontier is empty or an exact match is held.
///
/// # Errors
///
/// Returns an error if the inputs are not finite, or if the search trips over a
/// tree-shape logic error. Division by zero never aborts the run.
pub fn solve_informed<H>(
    target: f64,
    numbers: &[f64],
    config: InformedConfig,
    heuristic: H,
) -> Result<BestResult, SolverError>
where
    H: Fn(&Expression) -> f64,
{
    validate_inputs(target, numbers)?;
    info!(
        "Informed search for {} over {:?} (memo: {}, dedup: {})",
        target, numbers, config.use_memo, config.use_dedup
    );

    let mut search = InformedSearch {
        tracker: BestTracker::new(target),
        memo: config.use_memo.then(MemoTable::new),
        use_dedup: config.use_dedup,
        heuristic,
        frontier: BinaryHeap::new(),
        sequence: 0,
    };
    search.run(Numbers::from(numbers))?;

    let result = search.tracker.finish();
    info!(
        "Finished after {} nodes: {} = {}",
        result.explored, result.expression, result.value
    );
    Ok(result)
}

struct InformedSearch<H> {
    tracker: BestTracker,
    memo: Option<MemoTable>,
    use_dedup: bool,
    heuristic: H,
    frontier: BinaryHeap<FrontierEntry>,
    sequence: u64,
}

impl<H> InformedSearch<H>
where
    H: Fn(&Expression) -> f64,
{
    fn run(&mut self, numbers: Numbers) -> Result<(), SolverError> {
        self.tracker.visit();
        self.push(Expression::open(), numbers);

        while !self.tracker.is_solved() {
            let Some(entry) = self.frontier.pop() else {
                break;
            };

            if entry.expression.size() == 1
                && let Some(memo) = self.memo.as_ref()
                && let Some(answer) =
                    memo.complete(&entry.expression, &entry.numbers, self.tracker.target())?
            {
                self.tracker.consider(&answer)?;
                break;
            }

            for (child, rest) in children(&entry.expression, &entry.numbers)? {
                self.emplace(child, rest)?;
                if self.tracker.is_solved() {
                    break;
                }
            }
        }

        debug!("Frontier left with {} entries", self.frontier.len());
        Ok(())
    }

    fn emplace(&mut self, expression: Rc<Expression>, numbers: Numbers) -> Result<(), SolverError> {
        self.tracker.visit();

        if expression.evaluable() {
            self.tracker.consider(&expression)?;
            if !numbers.is_empty()
                && let Some(memo) = self.memo.as_mut()
            {
                memo.record(&expression)?;
            }
        } else if !self.use_dedup || expression.is_canonical() {
            self.push(expression, numbers);
        }

        Ok(())
    }

    fn push(&mut self, expression: Rc<Expression>, numbers: Numbers) {
        let score = FloatOrd((self.heuristic)(expression.as_ref()));
        self.sequence += 1;
        self.frontier.push(FrontierEntry {
            score,
            sequence: self.sequence,
            expression,
            numbers,
        });
    }
}
