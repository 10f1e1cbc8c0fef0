//! Construction parameters for pets.
//!
//! [`PetParams`] gathers everything a caller chooses when creating a pet.
//! Omitted fields fall back to the same defaults a freshly adopted pet
//! gets: moderately hungry, fairly rested, moderately happy. It
//! deserializes from configuration files with the same defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default starting hunger.
pub const DEFAULT_HUNGER: i32 = 5;

/// Default starting energy.
pub const DEFAULT_ENERGY: i32 = 7;

/// Default starting happiness.
pub const DEFAULT_HAPPINESS: i32 = 5;

/// Default starting health for advanced pets.
pub const DEFAULT_HEALTH: i32 = 100;

/// Parameters for creating a pet.
///
/// Values are not clamped here; the pet clamps them when it builds its
/// [`crate::Needs`] and [`crate::Personality`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetParams {
    /// The pet's name.
    pub name: String,

    /// Species label. `None` lets the pet kind pick its own default.
    #[serde(default)]
    pub species: Option<String>,

    /// Starting hunger.
    #[serde(default = "default_hunger")]
    pub hunger: i32,

    /// Starting energy.
    #[serde(default = "default_energy")]
    pub energy: i32,

    /// Starting happiness.
    #[serde(default = "default_happiness")]
    pub happiness: i32,

    /// Personality trait weights keyed by trait identifier.
    #[serde(default)]
    pub traits: BTreeMap<String, f64>,
}

impl PetParams {
    /// Parameters for a pet called `name` with every other value defaulted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: None,
            hunger: DEFAULT_HUNGER,
            energy: DEFAULT_ENERGY,
            happiness: DEFAULT_HAPPINESS,
            traits: BTreeMap::new(),
        }
    }

    /// Set the species label.
    #[must_use]
    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    /// Set all three starting needs.
    #[must_use]
    pub const fn needs(mut self, hunger: i32, energy: i32, happiness: i32) -> Self {
        self.hunger = hunger;
        self.energy = energy;
        self.happiness = happiness;
        self
    }

    /// Set one personality trait weight.
    #[must_use]
    pub fn with_trait(mut self, trait_name: impl Into<String>, weight: f64) -> Self {
        self.traits.insert(trait_name.into(), weight);
        self
    }
}

const fn default_hunger() -> i32 {
    DEFAULT_HUNGER
}

const fn default_energy() -> i32 {
    DEFAULT_ENERGY
}

const fn default_happiness() -> i32 {
    DEFAULT_HAPPINESS
}
