use std::rc::Rc;

use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

/// A node of a partially built expression tree.
///
/// Subtrees are reference counted so that filling a hole produces a new tree
/// which shares every untouched subtree with the tree it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Open,
    Literal(f64),
    BinaryOp(Operator, Rc<Expression>, Rc<Expression>),
}

impl Expression {
    /// A bare hole, the root every search starts from
    pub fn open() -> Rc<Self> {
        Rc::new(Expression::Open)
    }

    pub fn literal(value: f64) -> Rc<Self> {
        Rc::new(Expression::Literal(value))
    }

    /// A fresh operator node whose two operands are both holes
    pub fn operation(op: Operator) -> Rc<Self> {
        Rc::new(Expression::BinaryOp(op, Self::open(), Self::open()))
    }

    pub fn binary(op: Operator, left: Rc<Expression>, right: Rc<Expression>) -> Rc<Self> {
        Rc::new(Expression::BinaryOp(op, left, right))
    }

    /// True iff no hole is reachable
    pub fn evaluable(&self) -> bool {
        match self {
            Expression::Open => false,
            Expression::Literal(_) => true,
            Expression::BinaryOp(_, l, r) => l.evaluable() && r.evaluable(),
        }
    }

    /// Number of holes reachable from this node
    pub fn size(&self) -> usize {
        match self {
            Expression::Open => 1,
            Expression::Literal(_) => 0,
            Expression::BinaryOp(_, l, r) => l.size() + r.size(),
        }
    }

    /// True for a hole, or an operator node built only from holes
    pub fn is_fully_open(&self) -> bool {
        match self {
            Expression::Open => true,
            Expression::Literal(_) => false,
            Expression::BinaryOp(_, l, r) => l.is_fully_open() && r.is_fully_open(),
        }
    }

    /// Literal values in the tree, sorted, duplicates kept
    pub fn numbers_used(&self) -> Vec<f64> {
        let mut numbers = Vec::new();
        self.collect_numbers(&mut numbers);
        numbers.sort_by(f64::total_cmp);
        numbers
    }

    fn collect_numbers(&self, numbers: &mut Vec<f64>) {
        match self {
            Expression::Open => {}
            Expression::Literal(value) => numbers.push(*value),
            Expression::BinaryOp(_, l, r) => {
                l.collect_numbers(numbers);
                r.collect_numbers(numbers);
            }
        }
    }

    /// Returns a new tree where the left-most, depth-first-first hole is replaced.
    ///
    /// Only the nodes on the path down to the hole are rebuilt; every other
    /// subtree is shared with `self`.
    ///
    /// # Errors
    ///
    /// Returns `NoOpenNode` if the tree has no hole.
    pub fn fill_leftmost_open(
        self: &Rc<Self>,
        replacement: Rc<Expression>,
    ) -> Result<Rc<Expression>, ExpressionError> {
        Self::fill(self, &replacement).ok_or(ExpressionError::NoOpenNode)
    }

    fn fill(node: &Rc<Expression>, replacement: &Rc<Expression>) -> Option<Rc<Expression>> {
        match node.as_ref() {
            Expression::Open => Some(Rc::clone(replacement)),
            Expression::Literal(_) => None,
            Expression::BinaryOp(op, l, r) => {
                if let Some(left) = Self::fill(l, replacement) {
                    Some(Self::binary(*op, left, Rc::clone(r)))
                } else {
                    Self::fill(r, replacement).map(|right| Self::binary(*op, Rc::clone(l), right))
                }
            }
        }
    }
}
