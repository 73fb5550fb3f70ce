use float_ord::FloatOrd;

/// The multiset of source numbers still available to a search branch.
///
/// Values are kept sorted so that two multisets with the same contents compare
/// and key equal regardless of the order they were built in. Duplicates are
/// independent slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Numbers {
    values: Vec<f64>,
}

impl Numbers {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values
            .into_iter()
            .map(|v| if v == 0.0 { 0.0 } else { v })
            .collect();
        values.sort_by(f64::total_cmp);
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Each value once, ascending
    pub fn distinct(&self) -> impl Iterator<Item = f64> + '_ {
        let mut previous: Option<f64> = None;
        self.values.iter().copied().filter(move |&v| {
            let fresh = previous != Some(v);
            previous = Some(v);
            fresh
        })
    }

    /// A copy with one instance of `value` removed; unchanged if absent
    pub fn without(&self, value: f64) -> Self {
        let mut values = self.values.clone();
        if let Some(pos) = values.iter().position(|&v| v == value) {
            values.remove(pos);
        }
        Self { values }
    }

    /// True if every value of `other` is available here at least as many times
    #[cfg(test)]
    pub(crate) fn contains_all(&self, other: &[f64]) -> bool {
        let mut remaining = self.clone();
        for &value in other {
            let before = remaining.len();
            remaining = remaining.without(value);
            if remaining.len() == before {
                return false;
            }
        }
        true
    }

    /// Order-independent identity of the multiset, for use as a map key
    pub fn key(&self) -> Vec<FloatOrd<f64>> {
        self.values.iter().copied().map(FloatOrd).collect()
    }
}

impl From<&[f64]> for Numbers {
    fn from(values: &[f64]) -> Self {
        Self::new(values.iter().copied())
    }
}
