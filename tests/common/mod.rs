//! Shared builders for integration tests.

use home_footprint::estimator::{DwellingSize, Household};

/// Builds a household with explicit appliance flags.
pub fn household(
    dwelling: Option<DwellingSize>,
    ac: bool,
    fridge: bool,
    washer: bool,
    days: u32,
) -> Household {
    let mut h = Household::new(dwelling, days);
    h.air_conditioner = ac;
    h.refrigerator = fridge;
    h.washing_machine = washer;
    h
}

/// All dwelling inputs including the degraded (unrecognized) case.
pub fn all_dwellings() -> [Option<DwellingSize>; 4] {
    [
        None,
        Some(DwellingSize::OneRoom),
        Some(DwellingSize::TwoRoom),
        Some(DwellingSize::ThreeRoom),
    ]
}
