use std::fmt;

use crate::expression::errors::ExpressionError;

/// The four arithmetic operators an expression tree may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

/// Descriptor for one operator: forward evaluation plus the two inverse solves.
///
/// `solve_right(target, lhs)` yields the right operand that makes `lhs op x == target`,
/// `solve_left(target, rhs)` the left operand that makes `x op rhs == target`.
pub struct OperatorSpec {
    pub symbol: char,
    pub commutative: bool,
    pub eval: fn(f64, f64) -> Result<f64, ExpressionError>,
    pub solve_right: fn(f64, f64) -> Result<f64, ExpressionError>,
    pub solve_left: fn(f64, f64) -> Result<f64, ExpressionError>,
}

fn checked_div(numerator: f64, denominator: f64) -> Result<f64, ExpressionError> {
    if denominator == 0.0 {
        Err(ExpressionError::DivisionByZero)
    } else {
        Ok(numerator / denominator)
    }
}

static ADD: OperatorSpec = OperatorSpec {
    symbol: '+',
    commutative: true,
    eval: |lhs, rhs| Ok(lhs + rhs),
    solve_right: |target, lhs| Ok(target - lhs),
    solve_left: |target, rhs| Ok(target - rhs),
};

static SUB: OperatorSpec = OperatorSpec {
    symbol: '-',
    commutative: false,
    eval: |lhs, rhs| Ok(lhs - rhs),
    solve_right: |target, lhs| Ok(lhs - target),
    solve_left: |target, rhs| Ok(target + rhs),
};

static MUL: OperatorSpec = OperatorSpec {
    symbol: '*',
    commutative: true,
    eval: |lhs, rhs| Ok(lhs * rhs),
    solve_right: |target, lhs| checked_div(target, lhs),
    solve_left: |target, rhs| checked_div(target, rhs),
};

static DIV: OperatorSpec = OperatorSpec {
    symbol: '/',
    commutative: false,
    eval: checked_div,
    solve_right: |target, lhs| checked_div(lhs, target),
    solve_left: |target, rhs| Ok(target * rhs),
};

impl Operator {
    /// Every operator, in the order the searches branch on them
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn spec(self) -> &'static OperatorSpec {
        match self {
            Operator::Add => &ADD,
            Operator::Sub => &SUB,
            Operator::Mul => &MUL,
            Operator::Div => &DIV,
        }
    }

    pub fn symbol(self) -> char {
        self.spec().symbol
    }

    pub fn is_commutative(self) -> bool {
        self.spec().commutative
    }

    /// # Errors
    ///
    /// Returns `DivisionByZero` when dividing by a zero right operand.
    pub fn eval(self, lhs: f64, rhs: f64) -> Result<f64, ExpressionError> {
        (self.spec().eval)(lhs, rhs)
    }

    /// # Errors
    ///
    /// Returns `DivisionByZero` when the inverse needs to divide by zero.
    pub fn solve_right(self, target: f64, lhs: f64) -> Result<f64, ExpressionError> {
        (self.spec().solve_right)(target, lhs)
    }

    /// # Errors
    ///
    /// Returns `DivisionByZero` when the inverse needs to divide by zero.
    pub fn solve_left(self, target: f64, rhs: f64) -> Result<f64, ExpressionError> {
        (self.spec().solve_left)(target, rhs)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
