//! Reference frontier orderings for the informed search.
//!
//! A heuristic scores a tree that still has holes; lower scores are expanded
//! first. None of them is admissible, they only steer the order of exploration.

use crate::expression::Expression;

/// How many of the `total` source numbers are not yet placed in the tree
pub fn remaining_numbers(total: usize) -> impl Fn(&Expression) -> f64 {
    move |expr| total.saturating_sub(expr.numbers_used().len()) as f64
}

/// Distance between the target and the tree's value with holes ignored
pub fn absolute_difference(target: f64) -> impl Fn(&Expression) -> f64 {
    move |expr| (target - expr.evaluate_ignoring_holes()).abs()
}

/// The larger of `target / estimate` and its reciprocal; punishes overshoot and undershoot alike
pub fn ratio_max(target: f64) -> impl Fn(&Expression) -> f64 {
    move |expr| {
        let estimate = expr.evaluate_ignoring_holes();
        if estimate == 0.0 || target == 0.0 {
            return f64::INFINITY;
        }
        let ratio = target / estimate;
        ratio.max(1.0 / ratio)
    }
}

/// The smaller of `target / estimate` and its reciprocal
pub fn ratio_min(target: f64) -> impl Fn(&Expression) -> f64 {
    move |expr| {
        let estimate = expr.evaluate_ignoring_holes();
        if estimate == 0.0 || target == 0.0 {
            return 0.0;
        }
        let ratio = target / estimate;
        ratio.min(1.0 / ratio)
    }
}

/// Selector over the reference heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    Remaining,
    Difference,
    RatioMax,
    RatioMin,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 4] = [
        HeuristicKind::Remaining,
        HeuristicKind::Difference,
        HeuristicKind::RatioMax,
        HeuristicKind::RatioMin,
    ];

    /// Short label used in reports
    pub fn label(self) -> &'static str {
        match self {
            HeuristicKind::Remaining => "SRCH CNT",
            HeuristicKind::Difference => "SRCH DIFF",
            HeuristicKind::RatioMax => "SRCH DV LG",
            HeuristicKind::RatioMin => "SRCH DV SM",
        }
    }

    /// Builds the scoring closure for a run over `total` numbers towards `target`
    pub fn build(self, target: f64, total: usize) -> Box<dyn Fn(&Expression) -> f64> {
        match self {
            HeuristicKind::Remaining => Box::new(remaining_numbers(total)),
            HeuristicKind::Difference => Box::new(absolute_difference(target)),
            HeuristicKind::RatioMax => Box::new(ratio_max(target)),
            HeuristicKind::RatioMin => Box::new(ratio_min(target)),
        }
    }
}
