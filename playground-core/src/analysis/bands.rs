//! Ordered threshold tables.
//!
//! A table is a list of `(predicate, template)` rows evaluated top to bottom,
//! first match wins, plus an `otherwise` row that catches everything the
//! listed rows do not (values past the top of the domain, NaN). Boundaries are
//! therefore data: each row states its own predicate and nothing is implied
//! by branch nesting.

/// One contiguous interval and its description.
#[derive(Clone, Copy)]
pub struct Band<T: 'static, K: 'static> {
    pub kind: K,
    pub matches: fn(T) -> bool,
    pub describe: fn(T) -> String,
}

/// Rows checked in order, then the open-ended catch-all.
#[derive(Clone, Copy)]
pub struct BandTable<T: 'static, K: 'static> {
    pub bands: &'static [Band<T, K>],
    pub otherwise: Band<T, K>,
}

impl<T: Copy, K: Copy> BandTable<T, K> {
    /// Returns the first band whose predicate accepts `value`.
    pub fn classify(&self, value: T) -> &Band<T, K> {
        self.bands
            .iter()
            .find(|band| (band.matches)(value))
            .unwrap_or(&self.otherwise)
    }

    pub fn kind(&self, value: T) -> K {
        self.classify(value).kind
    }

    pub fn describe(&self, value: T) -> String {
        (self.classify(value).describe)(value)
    }
}
