use std::fmt;

use crate::expression::ast::Expression;
use crate::expression::operator::Operator;

/// Prefix form: `+ 3 4` for `3 + 4`, with `.` for a hole
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Open => write!(f, "."),
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::BinaryOp(op, l, r) => write!(f, "{} {} {}", op, l, r),
        }
    }
}

/// Infix rendering with the minimal parentheses, for human-facing output
pub struct Infix<'a>(&'a Expression);

impl Expression {
    pub fn infix(&self) -> Infix<'_> {
        Infix(self)
    }
}

impl fmt::Display for Infix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::BinaryOp(Operator::Add | Operator::Sub, _, _) => 1,
                Expression::BinaryOp(Operator::Mul | Operator::Div, _, _) => 2,
                Expression::Open | Expression::Literal(_) => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Open => write!(f, "_"),
                Expression::Literal(value) if *value < 0.0 => write!(f, "({})", value),
                Expression::Literal(value) => write!(f, "{}", value),
                Expression::BinaryOp(op, l, r) => {
                    let own = precedence(expr);
                    let need_l = precedence(l) < own;
                    // Non-commutative operators bind their right operand tighter
                    let need_r = if op.is_commutative() {
                        precedence(r) < own
                    } else {
                        precedence(r) <= own
                    };
                    write_with_parens(f, l, need_l)?;
                    write!(f, " {} ", op)?;
                    write_with_parens(f, r, need_r)
                }
            }
        }

        fmt_expression(f, self.0)
    }
}
