//! Derived comparison views: static averages and reference bands.
//!
//! Everything here is computed FROM a finished [`Estimate`] and never feeds
//! back into it. These are the presentation-side lookups: the per-bracket
//! monthly average table and the efficient/high bands drawn next to each
//! breakdown category.

use std::fmt;

use crate::estimator::{Category, DwellingSize, Estimate};

/// Monthly average for an unrecognized dwelling size (kg CO₂e).
pub const AVERAGE_DEFAULT_KG: f32 = 200.0;

/// Efficient-range band factor applied to each category value.
pub const EFFICIENT_FACTOR: f32 = 0.8;
/// High-consumption band factor applied to each category value.
pub const HIGH_FACTOR: f32 = 1.3;

/// Static monthly average footprint by dwelling size (kg CO₂e).
///
/// Unrecognized sizes fall back to [`AVERAGE_DEFAULT_KG`].
pub fn average_monthly_kg(dwelling: Option<DwellingSize>) -> f32 {
    match dwelling {
        Some(DwellingSize::OneRoom) => 150.0,
        Some(DwellingSize::TwoRoom) => 200.0,
        Some(DwellingSize::ThreeRoom) => 250.0,
        None => AVERAGE_DEFAULT_KG,
    }
}

/// Comparison of an estimate total against the static average table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageComparison {
    /// Average for the household's bracket (kg CO₂e).
    pub average_kg: f32,
    /// `total - average`; positive when above average.
    pub delta_kg: f32,
}

impl AverageComparison {
    /// Builds the comparison for an estimate and its dwelling bracket.
    pub fn for_estimate(estimate: &Estimate, dwelling: Option<DwellingSize>) -> Self {
        let average_kg = average_monthly_kg(dwelling);
        Self {
            average_kg,
            delta_kg: estimate.total_kg - average_kg,
        }
    }

    /// Returns `true` when the estimate exceeds the bracket average.
    pub fn is_above_average(&self) -> bool {
        self.delta_kg > 0.0
    }
}

impl fmt::Display for AverageComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_above_average() {
            write!(f, "{:.1} kg CO₂e above average", self.delta_kg)
        } else {
            write!(f, "{:.1} kg CO₂e below average", self.delta_kg.abs())
        }
    }
}

/// Reference band for one breakdown category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBand {
    pub category: Category,
    /// The household's own contribution (kg CO₂e).
    pub yours_kg: f32,
    /// Efficient-range value: `0.8 × yours`.
    pub efficient_kg: f32,
    /// High-consumption value: `1.3 × yours`.
    pub high_kg: f32,
}

/// Derives the reference bands for every category present in the breakdown.
///
/// One band per breakdown entry, in breakdown order.
pub fn reference_bands(estimate: &Estimate) -> Vec<ReferenceBand> {
    estimate
        .breakdown
        .iter()
        .map(|&(category, kg)| ReferenceBand {
            category,
            yours_kg: kg,
            efficient_kg: kg * EFFICIENT_FACTOR,
            high_kg: kg * HIGH_FACTOR,
        })
        .collect()
}
