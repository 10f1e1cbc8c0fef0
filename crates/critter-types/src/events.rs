//! Event records returned by pet actions.
//!
//! Every action returns the ordered list of [`PetEvent`]s it produced
//! instead of printing. An overriding action appends its own events after
//! the ones from the base behavior, so the list reads in the order things
//! happened. Amounts are the formula outputs before clamping; the pet's
//! [`crate::Needs`] and [`crate::Health`] hold the clamped results.

use serde::{Deserialize, Serialize};

use crate::enums::{Action, DeathCause};

/// Something that happened to a pet during one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PetEvent {
    /// The pet is dead and did not perform the action.
    Declined {
        /// The refused action.
        action: Action,
    },

    /// The pet ate.
    Ate {
        /// Hunger removed by the meal.
        hunger_reduced: i32,
        /// Happiness added by the meal.
        happiness_gained: i32,
    },

    /// The pet slept.
    Slept {
        /// Energy recovered.
        energy_gained: i32,
    },

    /// The pet played.
    Played {
        /// Energy spent.
        energy_spent: i32,
        /// Happiness added.
        happiness_gained: i32,
        /// Hunger added.
        hunger_gained: i32,
    },

    /// A training attempt succeeded.
    TrickLearned {
        /// The trick as given by the trainer.
        trick: String,
    },

    /// A training attempt failed.
    TrickFailed {
        /// The trick as given by the trainer.
        trick: String,
    },

    /// The pet already knew the trick; nothing was attempted.
    TrickAlreadyKnown {
        /// The trick as given by the trainer.
        trick: String,
    },

    /// The pet showed every trick it knows (possibly none).
    TricksShown {
        /// Known tricks in the order they were learned.
        tricks: Vec<String>,
    },

    /// Enough time had elapsed for the needs to decay.
    TimePassed {
        /// Real seconds since the last interaction.
        elapsed_secs: f64,
        /// Hunger added by decay.
        hunger_gained: i32,
        /// Energy removed by decay.
        energy_lost: i32,
        /// Happiness removed by decay.
        happiness_lost: i32,
    },

    /// The pet died. Always the last event of a pet's life.
    Died {
        /// What killed the pet.
        cause: DeathCause,
    },

    /// Health moved from one value to another.
    HealthChanged {
        /// Health before the write.
        previous: u8,
        /// Health after the write.
        current: u8,
    },

    /// The pet caught a new disease.
    DiseaseContracted {
        /// The disease name as given.
        disease: String,
    },

    /// The pet already had the disease; nothing changed.
    DiseaseAlreadyActive {
        /// The disease name as given.
        disease: String,
    },

    /// An active disease got worse while time passed.
    DiseaseWorsened {
        /// The disease name as stored.
        disease: String,
    },

    /// Treatment cured a disease.
    DiseaseCured {
        /// The disease name as stored.
        disease: String,
    },

    /// Treatment was attempted and failed.
    TreatmentFailed {
        /// The disease name as given.
        disease: String,
    },

    /// Treatment was requested for a disease the pet does not have.
    DiseaseNotPresent {
        /// The disease name as given.
        disease: String,
    },
}

impl PetEvent {
    /// Whether this event records a refused action.
    pub const fn is_declined(&self) -> bool {
        matches!(self, Self::Declined { .. })
    }

    /// The cause of death if this event records one.
    pub const fn death_cause(&self) -> Option<DeathCause> {
        match self {
            Self::Died { cause } => Some(*cause),
            _ => None,
        }
    }
}
