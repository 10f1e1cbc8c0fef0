//! Configuration for a driver session, loaded from `critter-config.yaml`.
//!
//! The document has one section per concern: `logging`, `pet`, `session`
//! and `care`, plus an optional top-level `seed`. Every field has a
//! default, so a missing file or an empty document runs the standard demo
//! with Buddy the dog.

use std::path::Path;

use critter_core::config::{CareConfig, ConfigError};
use critter_types::{DEFAULT_HEALTH, PetParams};
use serde::Deserialize;
use tracing::info;

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "critter-config.yaml";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "CRITTER_CONFIG";

/// Complete driver configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EngineConfig {
    /// Log level and format.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed for the pet's random source. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// The pet to create.
    #[serde(default)]
    pub pet: PetConfig,

    /// The scripted session to run.
    #[serde(default)]
    pub session: SessionConfig,

    /// Decay periods and illness odds.
    #[serde(default)]
    pub care: CareConfig,
}

impl EngineConfig {
    /// Load the configuration from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read,
    /// parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate a configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] for malformed YAML and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null rather than an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.care.validate()?;
        if config.session.step_seconds == 0 {
            return Err(ConfigError::Invalid {
                reason: "session.step_seconds must be positive".to_owned(),
            });
        }
        Ok(config)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (default: `info`).
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Which kind of pet to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetKind {
    /// A pet with needs and tricks only.
    #[default]
    Basic,
    /// A pet that also tracks health and diseases.
    Advanced,
}

/// The pet a session runs with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PetConfig {
    /// Basic or advanced.
    #[serde(default)]
    pub kind: PetKind,

    /// Name, species, starting needs, and trait weights.
    #[serde(flatten)]
    pub params: PetParams,

    /// Starting health for advanced pets (default: 100).
    #[serde(default = "default_health")]
    pub health: i32,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            kind: PetKind::Basic,
            params: PetParams::new("Buddy").species("Dog"),
            health: DEFAULT_HEALTH,
        }
    }
}

/// The scripted sequence of interactions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of time steps after the interactions (default: 3).
    #[serde(default = "default_rounds")]
    pub rounds: u32,

    /// Seconds the clock advances per step (default: 3600).
    #[serde(default = "default_step_seconds")]
    pub step_seconds: u64,

    /// Tricks to train during the interactions (default: `["Sit"]`).
    #[serde(default = "default_tricks")]
    pub tricks: Vec<String>,

    /// Diseases an advanced pet catches during the interactions.
    #[serde(default)]
    pub diseases: Vec<String>,

    /// Diseases to treat right after catching them.
    #[serde(default)]
    pub treatments: Vec<String>,

    /// Also print each status as a JSON line.
    #[serde(default)]
    pub json_status: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            step_seconds: default_step_seconds(),
            tricks: default_tricks(),
            diseases: Vec::new(),
            treatments: Vec::new(),
            json_status: false,
        }
    }
}

fn default_level() -> String {
    String::from("info")
}

const fn default_health() -> i32 {
    DEFAULT_HEALTH
}

const fn default_rounds() -> u32 {
    3
}

const fn default_step_seconds() -> u64 {
    3600
}

fn default_tricks() -> Vec<String> {
    vec![String::from("Sit")]
}
