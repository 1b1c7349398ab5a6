//! TOML-based household configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::estimator::{DwellingSize, Habitation, Household};

/// Top-level household configuration parsed from TOML.
///
/// All fields have defaults matching the typical household. Load from
/// TOML with [`HouseholdConfig::from_toml_file`] or use
/// [`HouseholdConfig::typical`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HouseholdConfig {
    /// Dwelling parameters and estimation period.
    #[serde(default)]
    pub home: HomeConfig,
    /// Appliance presence flags.
    #[serde(default)]
    pub appliances: ApplianceConfig,
}

/// Dwelling parameters and estimation period.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomeConfig {
    /// Habitation kind: `"flat"` or `"house"` (cosmetic).
    pub habitation: String,
    /// Dwelling size label: `"1bhk"`, `"2bhk"`, or `"3bhk"`.
    pub dwelling: String,
    /// Days in the month under estimation (must be in [28, 31]).
    pub days_in_month: u32,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            habitation: "flat".to_string(),
            dwelling: "2bhk".to_string(),
            days_in_month: 30,
        }
    }
}

/// Appliance presence flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplianceConfig {
    /// Air conditioner present.
    pub air_conditioner: bool,
    /// Refrigerator present.
    pub refrigerator: bool,
    /// Washing machine present.
    pub washing_machine: bool,
}

impl Default for ApplianceConfig {
    fn default() -> Self {
        Self {
            air_conditioner: false,
            refrigerator: true,
            washing_machine: true,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"home.days_in_month"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl HouseholdConfig {
    /// Returns the typical household (the built-in defaults).
    pub fn typical() -> Self {
        Self {
            home: HomeConfig::default(),
            appliances: ApplianceConfig::default(),
        }
    }

    /// Returns the studio preset: smallest bracket, no appliances.
    pub fn studio() -> Self {
        Self {
            home: HomeConfig {
                dwelling: "1bhk".to_string(),
                days_in_month: 28,
                ..HomeConfig::default()
            },
            appliances: ApplianceConfig {
                air_conditioner: false,
                refrigerator: false,
                washing_machine: false,
            },
        }
    }

    /// Returns the family preset: largest bracket, every appliance.
    pub fn family() -> Self {
        Self {
            home: HomeConfig {
                habitation: "house".to_string(),
                dwelling: "3bhk".to_string(),
                days_in_month: 31,
            },
            appliances: ApplianceConfig {
                air_conditioner: true,
                refrigerator: true,
                washing_machine: true,
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["typical", "studio", "family"];

    /// Loads a household from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "typical" => Ok(Self::typical()),
            "studio" => Ok(Self::studio()),
            "family" => Ok(Self::family()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a household from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a household from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid. This is the
    /// "input control" of the system: the estimator itself accepts any
    /// record and degrades silently, so the domain restrictions (the
    /// [28, 31] day range, recognized labels) are enforced here and
    /// nowhere else.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let h = &self.home;

        if Habitation::parse(&h.habitation).is_none() {
            errors.push(ConfigError {
                field: "home.habitation".into(),
                message: format!("must be \"flat\" or \"house\", got \"{}\"", h.habitation),
            });
        }
        if DwellingSize::parse(&h.dwelling).is_none() {
            errors.push(ConfigError {
                field: "home.dwelling".into(),
                message: format!(
                    "must be \"1bhk\", \"2bhk\", or \"3bhk\", got \"{}\"",
                    h.dwelling
                ),
            });
        }
        if !(28..=31).contains(&h.days_in_month) {
            errors.push(ConfigError {
                field: "home.days_in_month".into(),
                message: format!("must be in [28, 31], got {}", h.days_in_month),
            });
        }

        errors
    }

    /// Lowers the configuration into the estimator's input record.
    ///
    /// Unrecognized labels degrade here rather than erroring: an unknown
    /// dwelling label becomes `None` (zero base rate) and an unknown
    /// habitation label falls back to the default. Call [`Self::validate`]
    /// first when strict input checking is wanted.
    pub fn household(&self) -> Household {
        Household {
            dwelling: DwellingSize::parse(&self.home.dwelling),
            habitation: Habitation::parse(&self.home.habitation).unwrap_or_default(),
            air_conditioner: self.appliances.air_conditioner,
            refrigerator: self.appliances.refrigerator,
            washing_machine: self.appliances.washing_machine,
            days_in_month: self.home.days_in_month,
        }
    }
}
