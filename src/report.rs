//! Plain-text footprint report.

use std::fmt;

use crate::comparison::{AverageComparison, reference_bands};
use crate::estimator::{Estimate, Household};

/// Appliance-side saving tips shown under the report.
pub const TIPS_APPLIANCES: &[&str] = &[
    "Use LED bulbs instead of incandescent",
    "Unplug devices when not in use",
    "Use energy-efficient appliances",
    "Set AC temperature to 24°C or higher",
];

/// Home-optimization tips shown under the report.
pub const TIPS_HOME: &[&str] = &[
    "Improve insulation",
    "Use natural lighting during day",
    "Regular maintenance of appliances",
    "Use timers for water heaters",
];

/// Full text report for one estimate: headline, breakdown, comparison,
/// reference bands, and tips.
pub struct FootprintReport<'a> {
    pub household: &'a Household,
    pub estimate: &'a Estimate,
}

impl<'a> FootprintReport<'a> {
    pub fn new(household: &'a Household, estimate: &'a Estimate) -> Self {
        Self {
            household,
            estimate,
        }
    }
}

impl fmt::Display for FootprintReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dwelling_label = self
            .household
            .dwelling
            .map_or("unknown size", |d| d.label());

        writeln!(f, "--- Monthly Energy Footprint ---")?;
        writeln!(
            f,
            "Total: {:.2} kg CO₂e ({} {}, {} days)",
            self.estimate.total_kg,
            dwelling_label,
            self.household.habitation,
            self.household.days_in_month
        )?;

        writeln!(f)?;
        writeln!(f, "Breakdown:")?;
        for &(category, kg) in &self.estimate.breakdown {
            writeln!(
                f,
                "  {:<18} {:>7.1} kg  ({:>5.1}%)",
                category.label(),
                kg,
                self.estimate.share_pct(category)
            )?;
        }

        let cmp = AverageComparison::for_estimate(self.estimate, self.household.dwelling);
        writeln!(f)?;
        writeln!(f, "Versus {:.0} kg bracket average: {cmp}", cmp.average_kg)?;

        writeln!(f)?;
        writeln!(f, "Reference bands (efficient 0.8x / high 1.3x):")?;
        for band in reference_bands(self.estimate) {
            writeln!(
                f,
                "  {:<18} {:>7.1} / {:>7.1} / {:>7.1} kg",
                band.category.label(),
                band.efficient_kg,
                band.yours_kg,
                band.high_kg
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Saving tips:")?;
        for tip in TIPS_APPLIANCES.iter().chain(TIPS_HOME) {
            writeln!(f, "  - {tip}")?;
        }
        Ok(())
    }
}
