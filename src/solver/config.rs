/// Optional behaviours of the informed search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InformedConfig {
    /// Reuse recorded partial results to complete single-hole trees
    pub use_memo: bool,
    /// Only queue trees whose commutative operands are in canonical order
    pub use_dedup: bool,
}

impl InformedConfig {
    pub fn new(use_memo: bool, use_dedup: bool) -> Self {
        Self {
            use_memo,
            use_dedup,
        }
    }
}
