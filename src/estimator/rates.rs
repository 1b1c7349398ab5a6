//! Per-day consumption rate tables (kg CO₂e per day).

use super::types::{Category, DwellingSize};

/// Lighting rate per room unit per day.
pub const LIGHTING_RATE_PER_UNIT: f32 = 0.4;
/// Basic-load rate per room unit per day.
pub const BASIC_RATE_PER_UNIT: f32 = 0.8;

/// Air conditioner rate per day.
pub const AC_RATE_PER_DAY: f32 = 3.0;
/// Refrigerator rate per day.
pub const FRIDGE_RATE_PER_DAY: f32 = 4.0;
/// Washing machine rate per day.
pub const WASHER_RATE_PER_DAY: f32 = 2.0;

impl DwellingSize {
    /// Room units in the bracket, driving both lighting and basic load.
    pub fn room_units(self) -> f32 {
        match self {
            Self::OneRoom => 2.0,
            Self::TwoRoom => 3.0,
            Self::ThreeRoom => 4.0,
        }
    }

    /// Per-day base rate: `units × 0.4 + units × 0.8`
    /// (2.4 / 3.6 / 4.8 for the three brackets).
    pub fn base_rate_per_day(self) -> f32 {
        self.room_units() * LIGHTING_RATE_PER_UNIT + self.room_units() * BASIC_RATE_PER_UNIT
    }
}

/// Per-day rate for a dwelling and category.
///
/// The base rate is zero when the dwelling size is unrecognized (`None`);
/// appliance rates do not depend on the dwelling at all.
pub fn rate_per_day(dwelling: Option<DwellingSize>, category: Category) -> f32 {
    match category {
        Category::LightingBasic => dwelling.map_or(0.0, DwellingSize::base_rate_per_day),
        Category::AirConditioner => AC_RATE_PER_DAY,
        Category::Refrigerator => FRIDGE_RATE_PER_DAY,
        Category::WashingMachine => WASHER_RATE_PER_DAY,
    }
}
