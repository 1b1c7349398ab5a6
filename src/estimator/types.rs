//! Common types for footprint estimation: dwelling categories and the
//! per-invocation input record.

use std::fmt;

/// Dwelling size bracket driving the base consumption rate.
///
/// User-facing labels follow the "BHK" convention ("1BHK" = one bedroom,
/// hall, kitchen). Parsing is case-insensitive;
/// labels outside the bracket set parse to `None` and the estimator
/// degrades that to a zero base rate rather than reporting an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwellingSize {
    /// 1BHK — one-room dwelling.
    OneRoom,
    /// 2BHK — two-room dwelling.
    TwoRoom,
    /// 3BHK — three-room dwelling.
    ThreeRoom,
}

impl DwellingSize {
    /// All brackets in ascending size order.
    pub const ALL: [DwellingSize; 3] = [Self::OneRoom, Self::TwoRoom, Self::ThreeRoom];

    /// Parses a user-facing label ("1BHK", "2bhk", ...).
    ///
    /// Returns `None` for anything outside the bracket set.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "1bhk" => Some(Self::OneRoom),
            "2bhk" => Some(Self::TwoRoom),
            "3bhk" => Some(Self::ThreeRoom),
            _ => None,
        }
    }

    /// Returns the user-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::OneRoom => "1BHK",
            Self::TwoRoom => "2BHK",
            Self::ThreeRoom => "3BHK",
        }
    }
}

impl fmt::Display for DwellingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Habitation kind collected alongside the dwelling size.
///
/// Cosmetic only: it appears in the report headline but never enters
/// the consumption arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Habitation {
    #[default]
    Flat,
    House,
}

impl Habitation {
    /// Parses a user-facing label, defaulting unknown labels to `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "flat" => Some(Self::Flat),
            "house" => Some(Self::House),
            _ => None,
        }
    }

    /// Returns the lowercase label used in report text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::House => "house",
        }
    }
}

impl fmt::Display for Habitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Consumption category of a breakdown entry.
///
/// `Category::ORDER` fixes the breakdown ordering: the base term first,
/// then appliances. The base term is always present in an estimate;
/// appliance terms only when the corresponding flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Unconditional lighting and basic-load term from the dwelling size.
    LightingBasic,
    AirConditioner,
    Refrigerator,
    WashingMachine,
}

impl Category {
    /// Fixed breakdown order: base → AC → fridge → washer.
    pub const ORDER: [Category; 4] = [
        Self::LightingBasic,
        Self::AirConditioner,
        Self::Refrigerator,
        Self::WashingMachine,
    ];

    /// Returns the display label used in reports, charts, and CSV.
    pub fn label(self) -> &'static str {
        match self {
            Self::LightingBasic => "Lighting & Basic",
            Self::AirConditioner => "Air Conditioner",
            Self::Refrigerator => "Refrigerator",
            Self::WashingMachine => "Washing Machine",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input record for one estimate invocation.
///
/// The estimator performs no bounds check on `days_in_month`; the
/// configuration layer and the TUI restrict it to [28, 31] before the
/// record is built. Out-of-band values still compute deterministically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Household {
    /// Dwelling size bracket; `None` for unrecognized labels (zero base rate).
    pub dwelling: Option<DwellingSize>,
    /// Flat or house. Cosmetic, never affects the arithmetic.
    pub habitation: Habitation,
    /// Air conditioner present.
    pub air_conditioner: bool,
    /// Refrigerator present.
    pub refrigerator: bool,
    /// Washing machine present.
    pub washing_machine: bool,
    /// Days in the month under estimation.
    pub days_in_month: u32,
}

impl Household {
    /// Creates a household with the given dwelling size, no appliances,
    /// and the given day count.
    pub fn new(dwelling: Option<DwellingSize>, days_in_month: u32) -> Self {
        Self {
            dwelling,
            habitation: Habitation::default(),
            air_conditioner: false,
            refrigerator: false,
            washing_machine: false,
            days_in_month,
        }
    }

    /// Returns whether the appliance of the given category is present.
    ///
    /// The base category reports `true`: its term is unconditional.
    pub fn has(&self, category: Category) -> bool {
        match category {
            Category::LightingBasic => true,
            Category::AirConditioner => self.air_conditioner,
            Category::Refrigerator => self.refrigerator,
            Category::WashingMachine => self.washing_machine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dwelling_labels_round_trip() {
        for size in DwellingSize::ALL {
            assert_eq!(DwellingSize::parse(size.label()), Some(size));
        }
    }

    #[test]
    fn dwelling_parse_is_case_insensitive() {
        assert_eq!(DwellingSize::parse("2BHK"), Some(DwellingSize::TwoRoom));
        assert_eq!(DwellingSize::parse("2bhk"), Some(DwellingSize::TwoRoom));
    }

    #[test]
    fn dwelling_parse_rejects_unknown_labels() {
        assert_eq!(DwellingSize::parse(""), None);
        assert_eq!(DwellingSize::parse("4bhk"), None);
        assert_eq!(DwellingSize::parse("studio"), None);
    }

    #[test]
    fn habitation_parse() {
        assert_eq!(Habitation::parse("Flat"), Some(Habitation::Flat));
        assert_eq!(Habitation::parse("house"), Some(Habitation::House));
        assert_eq!(Habitation::parse("tent"), None);
    }

    #[test]
    fn base_category_always_reported_present() {
        let h = Household::new(None, 30);
        assert!(h.has(Category::LightingBasic));
        assert!(!h.has(Category::AirConditioner));
        assert!(!h.has(Category::Refrigerator));
        assert!(!h.has(Category::WashingMachine));
    }
}
