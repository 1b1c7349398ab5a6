//! The footprint estimate: ordered breakdown plus total.

use super::rates;
use super::types::{Category, Household};

/// Monthly footprint estimate for one household.
///
/// Computed in a single pass from a [`Household`] record. The breakdown is
/// an ordered list of `(category, kg CO₂e)` entries; the total is the sum
/// of those entries, accumulated while they are inserted, so
/// `total == breakdown sum` holds by construction.
///
/// The "Lighting & Basic" entry is always present — even at 0.0 for an
/// unrecognized dwelling size — while appliance entries appear only when
/// the household has the appliance. This asymmetry is part of the contract.
///
/// # Examples
///
/// ```
/// use home_footprint::estimator::{DwellingSize, Estimate, Household};
///
/// let mut household = Household::new(Some(DwellingSize::OneRoom), 30);
/// household.refrigerator = true;
///
/// let estimate = Estimate::for_household(&household);
/// assert_eq!(estimate.breakdown.len(), 2);
/// assert!((estimate.total_kg - 192.0).abs() < 1e-3); // 2.4×30 + 4×30
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Total monthly footprint (kg CO₂e).
    pub total_kg: f32,
    /// Ordered per-category contributions (kg CO₂e), summing to `total_kg`.
    pub breakdown: Vec<(Category, f32)>,
}

impl Estimate {
    /// Computes the estimate for a household.
    ///
    /// Pure and deterministic: identical inputs produce bit-identical
    /// output. Never fails; unrecognized dwelling sizes degrade to a zero
    /// base term rather than an error, and `days_in_month` is used as
    /// given without a bounds check.
    pub fn for_household(household: &Household) -> Self {
        let days = household.days_in_month as f32;
        let mut total_kg = 0.0_f32;
        let mut breakdown = Vec::with_capacity(Category::ORDER.len());

        // Insertion order is fixed by Category::ORDER; the base term is
        // unconditional, appliance terms are gated on their flags.
        for category in Category::ORDER {
            if !household.has(category) {
                continue;
            }
            let kg = rates::rate_per_day(household.dwelling, category) * days;
            total_kg += kg;
            breakdown.push((category, kg));
        }

        Self { total_kg, breakdown }
    }

    /// Returns the contribution of a category, or `None` when absent.
    pub fn contribution(&self, category: Category) -> Option<f32> {
        self.breakdown
            .iter()
            .find(|&&(c, _)| c == category)
            .map(|&(_, kg)| kg)
    }

    /// Returns a category's share of the total in percent.
    ///
    /// Defined as 0.0 for absent categories and whenever the total is not
    /// positive (the all-zero estimate would otherwise divide by zero).
    pub fn share_pct(&self, category: Category) -> f32 {
        if self.total_kg <= 0.0 {
            return 0.0;
        }
        self.contribution(category)
            .map_or(0.0, |kg| 100.0 * kg / self.total_kg)
    }
}
