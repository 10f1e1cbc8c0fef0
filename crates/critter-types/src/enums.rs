//! Enumeration types shared across the workspace.

use serde::{Deserialize, Serialize};

/// An action a caller can ask a pet to perform.
///
/// Used to label declined requests so the caller knows which call was
/// refused by a dead pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Feed the pet.
    Eat,
    /// Put the pet to sleep.
    Sleep,
    /// Play with the pet.
    Play,
    /// Teach the pet a trick.
    Train,
    /// Ask the pet to show its tricks.
    ShowTricks,
    /// Let time pass for the pet.
    TimePasses,
    /// Expose the pet to a disease.
    ContractDisease,
    /// Attempt to cure one of the pet's diseases.
    TreatDisease,
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Eat => write!(f, "eat"),
            Self::Sleep => write!(f, "sleep"),
            Self::Play => write!(f, "play"),
            Self::Train => write!(f, "train"),
            Self::ShowTricks => write!(f, "show_tricks"),
            Self::TimePasses => write!(f, "time_passes"),
            Self::ContractDisease => write!(f, "contract_disease"),
            Self::TreatDisease => write!(f, "treat_disease"),
        }
    }
}

/// The cause of a pet's death.
///
/// The two causes are independent terminal paths: neglect is only
/// detected while time passes, illness at every health write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    /// Hunger reached 10, or energy or happiness reached 0.
    Neglect,
    /// Health reached 0.
    Illness,
}

impl core::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Neglect => write!(f, "neglect"),
            Self::Illness => write!(f, "illness"),
        }
    }
}
