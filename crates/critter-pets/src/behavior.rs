//! The capability interface shared by every kind of pet.
//!
//! [`crate::Pet`] implements the base rules. [`crate::AdvancedPet`] wraps
//! a `Pet` and implements each action by running the base action first and
//! then layering its own effects, so callers can drive either kind through
//! `&mut dyn PetBehavior`.
//!
//! Actions never fail. A dead pet answers every action with a single
//! [`PetEvent::Declined`] and changes nothing.

use critter_types::{PetEvent, PetStatus};

use crate::pet::Pet;

/// Actions and queries every pet supports.
pub trait PetBehavior {
    /// The base pet this behavior is built on.
    fn base(&self) -> &Pet;

    /// Feed the pet.
    fn eat(&mut self) -> Vec<PetEvent>;

    /// Let the pet sleep.
    fn sleep(&mut self) -> Vec<PetEvent>;

    /// Play with the pet.
    fn play(&mut self) -> Vec<PetEvent>;

    /// Try to teach the pet `trick`.
    fn train(&mut self, trick: &str) -> Vec<PetEvent>;

    /// Report known tricks. Never changes state.
    fn show_tricks(&self) -> Vec<PetEvent>;

    /// Snapshot the pet's state. Never changes state.
    fn get_status(&self) -> PetStatus;

    /// Apply need decay if at least `seconds` of real time have passed since
    /// the last interaction.
    ///
    /// The amount of decay is computed from the actual elapsed time, not
    /// from `seconds`; `seconds` is only the gate.
    fn time_passes(&mut self, seconds: u64) -> Vec<PetEvent>;

    /// Register a mood modifier over this kind of pet. It runs only when
    /// [`Self::update_mood`] is called, after every modifier registered
    /// before it.
    fn add_mood_modifier<F>(&mut self, modifier: F)
    where
        F: FnMut(&mut Self) + 'static,
        Self: Sized;

    /// Run every registered mood modifier against this pet, in order. Runs
    /// whether or not the pet is alive.
    fn update_mood(&mut self);

    /// Whether the pet is alive.
    fn is_alive(&self) -> bool {
        self.base().is_alive()
    }

    /// The pet's name.
    fn name(&self) -> &str {
        self.base().name()
    }
}
