//! Bounded health value carried by advanced pets.
//!
//! Health follows the same saturating discipline as [`crate::Needs`], on
//! a wider scale. Reaching [`HEALTH_MIN`] is terminal, but deciding that
//! is the owning pet's job; this type only stores the number.

use serde::{Deserialize, Serialize};

/// Lowest health value (death by illness).
pub const HEALTH_MIN: u8 = 0;

/// Highest health value.
pub const HEALTH_MAX: u8 = 100;

/// Health in [`HEALTH_MIN`]..=[`HEALTH_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct Health(u8);

impl Health {
    /// Create a health value, saturating into range.
    pub fn new(value: i32) -> Self {
        let clamped = value.clamp(i32::from(HEALTH_MIN), i32::from(HEALTH_MAX));
        Self(u8::try_from(clamped).unwrap_or(HEALTH_MAX))
    }

    /// Current value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Return this value moved by `delta`, saturating into range.
    pub fn adjusted(self, delta: i32) -> Self {
        Self::new(i32::from(self.0).saturating_add(delta))
    }

    /// Whether health has run out.
    pub const fn is_depleted(self) -> bool {
        self.0 == HEALTH_MIN
    }
}

impl Default for Health {
    fn default() -> Self {
        Self(HEALTH_MAX)
    }
}

impl From<i32> for Health {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Health> for u8 {
    fn from(health: Health) -> Self {
        health.0
    }
}

impl core::fmt::Display for Health {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{HEALTH_MAX}", self.0)
    }
}
