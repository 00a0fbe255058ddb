//! Validated sweep grid and its deterministic enumeration.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    errors::SweepError,
    model::GenerationConfig,
    sweep::axis::{ParamValue, SweepAxis, SweepParam},
};

/// One concrete combination: the base config with every axis value applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    /// 0-based position in enumeration order.
    pub index: usize,
    /// Base config with this point's axis values substituted in.
    pub config: GenerationConfig,
}

/// A sweep that passed all preconditions and knows its size.
///
/// Constructed once by the caller and never mutated while running.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    base: GenerationConfig,
    params: Vec<SweepParam>,
    values: Vec<Vec<ParamValue>>,
    total: usize,
}

impl SweepPlan {
    /// Validates `axes` against `base` and precomputes the point count.
    ///
    /// An axis with no candidates is allowed and makes the grid empty. An
    /// empty axis list is the empty product: one point, the base itself.
    ///
    /// # Errors
    /// Any [`SweepError`]; nothing is dispatched for an invalid plan.
    pub fn new(base: GenerationConfig, axes: Vec<SweepAxis>) -> Result<Self, SweepError> {
        let mut seen = HashSet::with_capacity(axes.len());
        let mut params = Vec::with_capacity(axes.len());
        let mut values = Vec::with_capacity(axes.len());
        let mut total: usize = 1;

        for axis in axes {
            if !seen.insert(axis.param) {
                return Err(SweepError::DuplicateAxis(axis.param));
            }
            let resolved = axis
                .values
                .iter()
                .enumerate()
                .map(|(i, raw)| axis.param.resolve(i, raw))
                .collect::<Result<Vec<_>, _>>()?;

            total = total
                .checked_mul(resolved.len())
                .ok_or(SweepError::TooManyPoints)?;
            params.push(axis.param);
            values.push(resolved);
        }

        Ok(Self {
            base,
            params,
            values,
            total,
        })
    }

    /// Number of points: the product of all axis cardinalities.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn base(&self) -> &GenerationConfig {
        &self.base
    }

    /// Swept parameters, in declaration (nesting) order.
    pub fn params(&self) -> &[SweepParam] {
        &self.params
    }

    /// Builds the point at `index`, or `None` past the end.
    ///
    /// Mixed-radix decoding with the last axis as the least significant digit,
    /// so the first declared axis changes slowest.
    pub fn point(&self, index: usize) -> Option<SweepPoint> {
        if index >= self.total {
            return None;
        }
        let mut config = self.base.clone();
        let mut rest = index;
        for axis in self.values.iter().rev() {
            let digit = rest % axis.len();
            rest /= axis.len();
            axis[digit].apply(&mut config);
        }
        Some(SweepPoint { index, config })
    }

    /// All points in enumeration order.
    pub fn points(&self) -> SweepPoints<'_> {
        SweepPoints {
            plan: self,
            next: 0,
        }
    }
}

/// Iterator over a plan's points; see [`SweepPlan::points`].
#[derive(Debug, Clone)]
pub struct SweepPoints<'a> {
    plan: &'a SweepPlan,
    next: usize,
}

impl Iterator for SweepPoints<'_> {
    type Item = SweepPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.plan.point(self.next)?;
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.plan.total.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for SweepPoints<'_> {}
