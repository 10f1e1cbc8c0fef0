//! Pet entities for the Critter simulation.
//!
//! A pet has bounded needs (hunger, energy, happiness), a personality that
//! scales how much each action moves those needs, a list of learned
//! tricks, and a life that ends when it is neglected. Advanced pets add
//! health and diseases on top of the same rules.
//!
//! # Modules
//!
//! - [`behavior`] -- The [`PetBehavior`] trait both kinds of pet implement
//! - [`pet`] -- The base [`Pet`]
//! - [`advanced`] -- [`AdvancedPet`] with health and diseases
//! - [`formulas`] -- Personality-weighted amounts for every action
//! - [`death`] -- Neglect and illness conditions
//! - [`mood`] -- Caller-registered mood modifier hooks
//! - [`names`] -- Case-insensitive ordered name lists for tricks and diseases
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use critter_core::{ManualClock, ScriptedRandom};
//! use critter_pets::{Pet, PetBehavior};
//! use critter_types::PetParams;
//!
//! let clock = Arc::new(ManualClock::default());
//! let mut pet = Pet::new(PetParams::new("Buddy"), clock, Box::new(ScriptedRandom::new()));
//! pet.eat();
//! assert!(pet.is_alive());
//! assert_eq!(pet.needs().hunger(), 3);
//! ```

pub mod advanced;
pub mod behavior;
pub mod death;
pub mod formulas;
pub mod mood;
pub mod names;
pub mod pet;

pub use advanced::{ADVANCED_SPECIES, AdvancedPet};
pub use behavior::PetBehavior;
pub use death::{check_illness, check_neglect};
pub use mood::{MoodModifier, MoodModifiers};
pub use names::NameList;
pub use pet::{DEFAULT_SPECIES, Pet};
