//! Normalisation of raw 1–5 ratings onto a comparable unit scale.
#![forbid(unsafe_code)]

use wayfarer_core::{Dimension, RawRatings};

/// Lowest value on the raw rating scale.
pub(crate) const RATING_FLOOR: f64 = 1.0;
/// Width of the raw rating scale (`5 - 1`).
pub(crate) const RATING_SPAN: f64 = 4.0;

/// Ratings rescaled with `(raw - 1) / 4`.
///
/// Only lives for the duration of one scoring call and never leaves the
/// crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NormalizedVector {
    values: [f64; Dimension::COUNT],
}

impl NormalizedVector {
    pub(crate) fn get(&self, dimension: Dimension) -> f64 {
        self.values.get(dimension.index()).copied().unwrap_or(0.0)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

/// Rescale raw ratings onto the unit scale.
///
/// Absent or non-numeric ratings read as `0` and therefore normalise to
/// `-0.25`. The negative value is kept for parity with existing rankings;
/// clamping missing dimensions to `0.0` may be preferable in a future
/// revision.
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation rescales ratings with a linear transform"
)]
pub(crate) fn normalize(raw: &RawRatings) -> NormalizedVector {
    let mut values = [0.0; Dimension::COUNT];
    for (slot, dimension) in values.iter_mut().zip(Dimension::ALL) {
        *slot = (raw.value_or_zero(dimension) - RATING_FLOOR) / RATING_SPAN;
    }
    NormalizedVector { values }
}
