// Tolerance for treating a value as an exact hit on the target
pub const EPSILON: f64 = 1e-9;
// Decimal places kept in memo value keys
pub const MEMO_DECIMALS: i32 = 9;
