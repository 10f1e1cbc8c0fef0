//! Tunable parameters for pet care mechanics.
//!
//! The action formulas have fixed shapes, but the time-decay periods and
//! the illness odds are data. [`CareConfig`] bundles them so a session can
//! load them from YAML and tests can override single values. Every field
//! defaults to the standard rules, so an empty document is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The document parsed but holds values the rules cannot use.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// All tunable care parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CareConfig {
    /// How fast needs decay while the pet is left alone.
    #[serde(default)]
    pub decay: DecayConfig,

    /// Odds and magnitudes of health effects for advanced pets.
    #[serde(default)]
    pub illness: IllnessConfig,
}

impl CareConfig {
    /// Load and validate a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        tracing::debug!(path = %path.display(), "care configuration loaded");
        Ok(config)
    }

    /// Parse and validate a configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value against the range the rules require.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.decay.validate()?;
        self.illness.validate()
    }
}

/// Base periods for need decay, in seconds.
///
/// Each period is shortened by a personality trait: the effective hunger
/// period is `hunger_period_secs / (3 + 2 * metabolism)`, the energy period
/// `energy_period_secs / (5 + 3 * activity)`, and the happiness period
/// `happiness_period_secs / (2 + sociability)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayConfig {
    /// Base hunger period (default: 3600).
    #[serde(default = "default_hunger_period_secs")]
    pub hunger_period_secs: f64,

    /// Base energy period (default: 7200).
    #[serde(default = "default_energy_period_secs")]
    pub energy_period_secs: f64,

    /// Base happiness period (default: 10800).
    #[serde(default = "default_happiness_period_secs")]
    pub happiness_period_secs: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            hunger_period_secs: default_hunger_period_secs(),
            energy_period_secs: default_energy_period_secs(),
            happiness_period_secs: default_happiness_period_secs(),
        }
    }
}

impl DecayConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("decay.hunger_period_secs", self.hunger_period_secs),
            ("decay.energy_period_secs", self.energy_period_secs),
            ("decay.happiness_period_secs", self.happiness_period_secs),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    reason: format!("{field} must be a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// An inclusive integer range a random amount is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    /// Smallest value that can be drawn.
    pub min: i32,
    /// Largest value that can be drawn.
    pub max: i32,
}

impl IntRange {
    /// Create a range.
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Draw a uniform value from the range.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.int_inclusive(self.min, self.max)
    }
}

/// Odds and magnitudes of the health mechanics of advanced pets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IllnessConfig {
    /// Chance a meal restores some health (default: 0.3).
    #[serde(default = "default_meal_heal_chance")]
    pub meal_heal_chance: f64,

    /// Energy below which play counts as overexertion (default: 3).
    #[serde(default = "default_overexertion_energy")]
    pub overexertion_energy: u8,

    /// Chance overexertion costs health (default: 0.4).
    #[serde(default = "default_overexertion_chance")]
    pub overexertion_chance: f64,

    /// Chance knowing the trained trick restores health (default: 0.2).
    #[serde(default = "default_training_heal_chance")]
    pub training_heal_chance: f64,

    /// Health restored by a lucky training session (default: 1).
    #[serde(default = "default_training_heal_amount")]
    pub training_heal_amount: i32,

    /// Per-disease chance of worsening each time time passes (default: 0.2).
    #[serde(default = "default_worsen_chance")]
    pub worsen_chance: f64,

    /// Treatment success chance for a fully cooperative pet (default: 0.7).
    #[serde(default = "default_treatment_chance")]
    pub treatment_chance: f64,

    /// Hunger added when a disease is contracted (default: 1..=3).
    #[serde(default = "default_contract_hunger")]
    pub contract_hunger: IntRange,

    /// Energy removed when a disease is contracted (default: 1..=3).
    #[serde(default = "default_contract_energy")]
    pub contract_energy: IntRange,

    /// Happiness removed when a disease is contracted (default: 2..=4).
    #[serde(default = "default_contract_happiness")]
    pub contract_happiness: IntRange,

    /// Health removed when a disease is contracted (default: 5..=15).
    #[serde(default = "default_contract_health")]
    pub contract_health: IntRange,

    /// Health removed when a disease worsens (default: 3..=7).
    #[serde(default = "default_worsen_health")]
    pub worsen_health: IntRange,

    /// Hunger added when a disease worsens (default: 0..=2).
    #[serde(default = "default_worsen_hunger")]
    pub worsen_hunger: IntRange,

    /// Energy removed when a disease worsens (default: 0..=2).
    #[serde(default = "default_worsen_energy")]
    pub worsen_energy: IntRange,

    /// Happiness removed when a disease worsens (default: 1..=3).
    #[serde(default = "default_worsen_happiness")]
    pub worsen_happiness: IntRange,

    /// Health restored by a successful cure (default: 5..=10).
    #[serde(default = "default_cure_health")]
    pub cure_health: IntRange,
}

impl Default for IllnessConfig {
    fn default() -> Self {
        Self {
            meal_heal_chance: default_meal_heal_chance(),
            overexertion_energy: default_overexertion_energy(),
            overexertion_chance: default_overexertion_chance(),
            training_heal_chance: default_training_heal_chance(),
            training_heal_amount: default_training_heal_amount(),
            worsen_chance: default_worsen_chance(),
            treatment_chance: default_treatment_chance(),
            contract_hunger: default_contract_hunger(),
            contract_energy: default_contract_energy(),
            contract_happiness: default_contract_happiness(),
            contract_health: default_contract_health(),
            worsen_health: default_worsen_health(),
            worsen_hunger: default_worsen_hunger(),
            worsen_energy: default_worsen_energy(),
            worsen_happiness: default_worsen_happiness(),
            cure_health: default_cure_health(),
        }
    }
}

impl IllnessConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("illness.meal_heal_chance", self.meal_heal_chance),
            ("illness.overexertion_chance", self.overexertion_chance),
            ("illness.training_heal_chance", self.training_heal_chance),
            ("illness.worsen_chance", self.worsen_chance),
            ("illness.treatment_chance", self.treatment_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    reason: format!("{field} must be within 0.0..=1.0, got {value}"),
                });
            }
        }
        if self.training_heal_amount < 0 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "illness.training_heal_amount must not be negative, got {}",
                    self.training_heal_amount
                ),
            });
        }
        for (field, range) in [
            ("illness.contract_hunger", self.contract_hunger),
            ("illness.contract_energy", self.contract_energy),
            ("illness.contract_happiness", self.contract_happiness),
            ("illness.contract_health", self.contract_health),
            ("illness.worsen_health", self.worsen_health),
            ("illness.worsen_hunger", self.worsen_hunger),
            ("illness.worsen_energy", self.worsen_energy),
            ("illness.worsen_happiness", self.worsen_happiness),
            ("illness.cure_health", self.cure_health),
        ] {
            if range.min < 0 {
                return Err(ConfigError::Invalid {
                    reason: format!("{field} must not go below 0, got min {}", range.min),
                });
            }
            if range.min > range.max {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "{field} has min {} greater than max {}",
                        range.min, range.max
                    ),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_hunger_period_secs() -> f64 {
    3600.0
}

const fn default_energy_period_secs() -> f64 {
    7200.0
}

const fn default_happiness_period_secs() -> f64 {
    10_800.0
}

const fn default_meal_heal_chance() -> f64 {
    0.3
}

const fn default_overexertion_energy() -> u8 {
    3
}

const fn default_overexertion_chance() -> f64 {
    0.4
}

const fn default_training_heal_chance() -> f64 {
    0.2
}

const fn default_training_heal_amount() -> i32 {
    1
}

const fn default_worsen_chance() -> f64 {
    0.2
}

const fn default_treatment_chance() -> f64 {
    0.7
}

const fn default_contract_hunger() -> IntRange {
    IntRange::new(1, 3)
}

const fn default_contract_energy() -> IntRange {
    IntRange::new(1, 3)
}

const fn default_contract_happiness() -> IntRange {
    IntRange::new(2, 4)
}

const fn default_contract_health() -> IntRange {
    IntRange::new(5, 15)
}

const fn default_worsen_health() -> IntRange {
    IntRange::new(3, 7)
}

const fn default_worsen_hunger() -> IntRange {
    IntRange::new(0, 2)
}

const fn default_worsen_energy() -> IntRange {
    IntRange::new(0, 2)
}

const fn default_worsen_happiness() -> IntRange {
    IntRange::new(1, 3)
}

const fn default_cure_health() -> IntRange {
    IntRange::new(5, 10)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::random::ScriptedRandom;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CareConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.decay.hunger_period_secs - 3600.0).abs() < f64::EPSILON);
        assert_eq!(config.illness.overexertion_energy, 3);
        assert_eq!(config.illness.contract_health, IntRange::new(5, 15));
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = CareConfig::parse("{}").unwrap();
        assert_eq!(config, CareConfig::default());
    }

    #[test]
    fn partial_document_overrides_single_values() {
        let yaml = "
decay:
  hunger_period_secs: 60
illness:
  worsen_chance: 1.0
  cure_health: { min: 1, max: 2 }
";
        let config = CareConfig::parse(yaml).unwrap();
        assert!((config.decay.hunger_period_secs - 60.0).abs() < f64::EPSILON);
        assert!((config.decay.energy_period_secs - 7200.0).abs() < f64::EPSILON);
        assert!((config.illness.worsen_chance - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.illness.cure_health, IntRange::new(1, 2));
        assert_eq!(config.illness.worsen_health, IntRange::new(3, 7));
    }

    #[test]
    fn zero_period_is_rejected() {
        let result = CareConfig::parse("decay:\n  energy_period_secs: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn chance_above_one_is_rejected() {
        let result = CareConfig::parse("illness:\n  treatment_chance: 1.5\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let result = CareConfig::parse("illness:\n  worsen_health: { min: 9, max: 2 }\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn negative_range_is_rejected() {
        let result = CareConfig::parse("illness:\n  contract_health: { min: -10, max: -5 }\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
        let result = CareConfig::parse("illness:\n  worsen_hunger: { min: -1, max: 2 }\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
        let result = CareConfig::parse("illness:\n  training_heal_amount: -3\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
        assert!(CareConfig::parse("illness:\n  worsen_hunger: { min: 0, max: 0 }\n").is_ok());
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let result = CareConfig::parse("decay: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = CareConfig::from_file(Path::new("/nonexistent/critter-care.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn range_draw_uses_source() {
        let mut rng = ScriptedRandom::new().with_ints([6]);
        assert_eq!(IntRange::new(5, 10).draw(&mut rng), 6);
    }
}
