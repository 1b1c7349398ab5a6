//! TUI application state.
//!
//! Holds the five interactive inputs and the estimate derived from them.
//! Every mutation goes through a method that recomputes the estimate, so
//! the rendered figures can never drift from the inputs.

use crate::config::HouseholdConfig;
use crate::estimator::{DwellingSize, Estimate, Habitation, Household};

/// Lower bound of the days-in-month control.
pub const DAYS_MIN: u32 = 28;
/// Upper bound of the days-in-month control.
pub const DAYS_MAX: u32 = 31;

/// TUI application state.
pub struct App {
    /// Current household inputs.
    pub household: Household,
    /// Estimate for the current inputs, kept in sync by the mutators.
    pub estimate: Estimate,
    /// Name of the preset the inputs started from.
    pub preset_name: String,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app from a validated configuration.
    pub fn from_config(config: &HouseholdConfig, preset_name: &str) -> Self {
        let household = config.household();
        let estimate = Estimate::for_household(&household);
        Self {
            household,
            estimate,
            preset_name: preset_name.to_string(),
            quit: false,
        }
    }

    fn recompute(&mut self) {
        self.estimate = Estimate::for_household(&self.household);
    }

    /// Selects a dwelling size bracket.
    pub fn set_dwelling(&mut self, dwelling: DwellingSize) {
        self.household.dwelling = Some(dwelling);
        self.recompute();
    }

    /// Toggles between flat and house (cosmetic, estimate unchanged).
    pub fn toggle_habitation(&mut self) {
        self.household.habitation = match self.household.habitation {
            Habitation::Flat => Habitation::House,
            Habitation::House => Habitation::Flat,
        };
        self.recompute();
    }

    /// Toggles the air conditioner flag.
    pub fn toggle_ac(&mut self) {
        self.household.air_conditioner = !self.household.air_conditioner;
        self.recompute();
    }

    /// Toggles the refrigerator flag.
    pub fn toggle_fridge(&mut self) {
        self.household.refrigerator = !self.household.refrigerator;
        self.recompute();
    }

    /// Toggles the washing machine flag.
    pub fn toggle_washer(&mut self) {
        self.household.washing_machine = !self.household.washing_machine;
        self.recompute();
    }

    /// Increments days in month, clamped to [`DAYS_MAX`].
    pub fn days_up(&mut self) {
        if self.household.days_in_month < DAYS_MAX {
            self.household.days_in_month += 1;
            self.recompute();
        }
    }

    /// Decrements days in month, clamped to [`DAYS_MIN`].
    pub fn days_down(&mut self) {
        if self.household.days_in_month > DAYS_MIN {
            self.household.days_in_month -= 1;
            self.recompute();
        }
    }

    /// Cycles to the next built-in preset, resetting all inputs.
    pub fn next_preset(&mut self) {
        let presets = HouseholdConfig::PRESETS;
        let idx = presets
            .iter()
            .position(|&p| p == self.preset_name)
            .map_or(0, |i| (i + 1) % presets.len());
        self.switch_preset(presets[idx]);
    }

    /// Switches to a named preset, resetting all inputs.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(config) = HouseholdConfig::from_preset(name) else {
            return;
        };
        self.household = config.household();
        self.preset_name = name.to_string();
        self.recompute();
    }
}
