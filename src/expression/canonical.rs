use crate::expression::ast::Expression;

/// Key of a hole; sorts after every literal and operator key
const OPEN_KEY: &str = "~";

impl Expression {
    /// Ordering key of this node's root, used to pick one representative among
    /// the operand orders of a commutative operator.
    pub fn canonical_key(&self) -> String {
        match self {
            Expression::Open => OPEN_KEY.to_string(),
            Expression::Literal(value) => format!("{}", value),
            Expression::BinaryOp(op, _, _) => op.symbol().to_string(),
        }
    }

    /// True when every commutative node in the tree has its operands in key order.
    ///
    /// Holes sort last, so a tree still being filled left to right is canonical
    /// as long as its completed parts are.
    pub fn is_canonical(&self) -> bool {
        match self {
            Expression::Open | Expression::Literal(_) => true,
            Expression::BinaryOp(op, l, r) => {
                l.is_canonical()
                    && r.is_canonical()
                    && (!op.is_commutative() || l.canonical_key() <= r.canonical_key())
            }
        }
    }
}
