//! Pets with health and diseases.
//!
//! An [`AdvancedPet`] wraps a base [`Pet`] and adds a health value in
//! `0..=100` plus a list of active diseases. Each action runs the base
//! action first and then applies the health effects, which are skipped
//! when the pet is dead. Health reaching zero kills the pet of illness at
//! the moment it is written.
//!
//! Odds and amounts come from the pet's [`critter_core::IllnessConfig`].

use std::sync::Arc;

use critter_core::clock::Clock;
use critter_core::config::CareConfig;
use critter_core::random::RandomSource;
use critter_types::{Action, Health, PetEvent, PetParams, PetStatus};
use tracing::{debug, info, trace};

use crate::behavior::PetBehavior;
use crate::death::check_illness;
use crate::formulas;
use crate::mood::{self, MoodHost, MoodModifiers};
use crate::names::NameList;
use crate::pet::Pet;

/// Species label used for advanced pets when the caller does not pick one.
pub const ADVANCED_SPECIES: &str = "Advanced Pet";

/// A pet that tracks health and can fall ill.
#[derive(Debug)]
pub struct AdvancedPet {
    pet: Pet,
    health: Health,
    diseases: NameList,
    mood_modifiers: MoodModifiers<Self>,
}

impl AdvancedPet {
    /// Create an advanced pet with the given starting health.
    ///
    /// Health is clamped into `0..=100`. A pet created with no health is
    /// dead of illness from the start.
    pub fn new(
        params: PetParams,
        health: i32,
        clock: Arc<dyn Clock>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let pet = Pet::with_default_species(params, ADVANCED_SPECIES, clock, rng);
        let mut advanced = Self {
            pet,
            health: Health::new(health),
            diseases: NameList::new(),
            mood_modifiers: MoodModifiers::new(),
        };
        if let Some(cause) = check_illness(advanced.health) {
            advanced.pet.die(cause);
        }
        advanced
    }

    /// Replace the care parameters (decay periods, illness odds).
    #[must_use]
    pub fn with_care(mut self, care: CareConfig) -> Self {
        self.pet = self.pet.with_care(care);
        self
    }

    /// The wrapped base pet.
    pub const fn pet(&self) -> &Pet {
        &self.pet
    }

    /// Mutable access to the wrapped base pet's needs and state. Mood hooks
    /// registered here see only the base pet and do not run on
    /// [`PetBehavior::update_mood`] of the advanced pet.
    pub const fn pet_mut(&mut self) -> &mut Pet {
        &mut self.pet
    }

    /// Number of registered mood modifiers.
    pub const fn mood_modifier_count(&self) -> usize {
        self.mood_modifiers.len()
    }

    /// Current health.
    pub const fn health(&self) -> Health {
        self.health
    }

    /// Active diseases in the order they were contracted.
    pub fn diseases(&self) -> &[String] {
        self.diseases.as_slice()
    }

    /// Whether the pet has `disease` (ignoring case).
    pub fn has_disease(&self, disease: &str) -> bool {
        self.diseases.contains(disease)
    }

    /// Overwrite health. The value is clamped; writing zero to a living pet
    /// kills it of illness.
    pub fn set_health(&mut self, value: i32) -> Vec<PetEvent> {
        self.write_health(Health::new(value))
    }

    /// Catch `disease`. Needs and health take a random hit the first time;
    /// a disease the pet already has changes nothing.
    pub fn contract_disease(&mut self, disease: &str) -> Vec<PetEvent> {
        if !self.pet.is_alive() {
            return self.pet.decline(Action::ContractDisease);
        }
        if self.diseases.contains(disease) {
            debug!(pet = %self.pet.name(), disease, "disease already active");
            return vec![PetEvent::DiseaseAlreadyActive {
                disease: disease.to_owned(),
            }];
        }

        self.diseases.insert(disease);
        info!(pet = %self.pet.name(), disease, "pet contracted a disease");
        let mut events = vec![PetEvent::DiseaseContracted {
            disease: disease.to_owned(),
        }];

        let illness = self.pet.care().illness;
        let rng = self.pet.rng_mut();
        let hunger = illness.contract_hunger.draw(rng);
        let energy = illness.contract_energy.draw(rng);
        let happiness = illness.contract_happiness.draw(rng);
        let health = illness.contract_health.draw(rng);

        let needs = self.pet.needs_mut();
        needs.adjust_hunger(hunger);
        needs.adjust_energy(energy.saturating_neg());
        needs.adjust_happiness(happiness.saturating_neg());
        events.extend(self.adjust_health(health.saturating_neg()));
        events
    }

    /// Try to cure `disease`. Success depends on the pet's cooperativeness.
    pub fn treat_disease(&mut self, disease: &str) -> Vec<PetEvent> {
        if !self.pet.is_alive() {
            return self.pet.decline(Action::TreatDisease);
        }
        if !self.diseases.contains(disease) {
            debug!(pet = %self.pet.name(), disease, "no such disease to treat");
            return vec![PetEvent::DiseaseNotPresent {
                disease: disease.to_owned(),
            }];
        }

        let illness = self.pet.care().illness;
        let chance = formulas::treatment_chance(self.pet.personality(), &illness);
        if !self.pet.rng_mut().roll(chance) {
            debug!(pet = %self.pet.name(), disease, chance, "treatment failed");
            return vec![PetEvent::TreatmentFailed {
                disease: disease.to_owned(),
            }];
        }

        let Some(cured) = self.diseases.remove(disease) else {
            return Vec::new();
        };
        info!(pet = %self.pet.name(), disease = %cured, "disease cured");
        let mut events = vec![PetEvent::DiseaseCured { disease: cured }];
        let gain = illness.cure_health.draw(self.pet.rng_mut());
        events.extend(self.adjust_health(gain));
        events
    }

    fn adjust_health(&mut self, delta: i32) -> Vec<PetEvent> {
        self.write_health(self.health.adjusted(delta))
    }

    fn write_health(&mut self, health: Health) -> Vec<PetEvent> {
        let previous = self.health;
        self.health = health;

        let mut events = Vec::new();
        if previous != health {
            debug!(pet = %self.pet.name(), previous = %previous, current = %health, "health changed");
            events.push(PetEvent::HealthChanged {
                previous: previous.value(),
                current: health.value(),
            });
        }
        let illness = check_illness(health).filter(|_| self.pet.is_alive());
        if let Some(cause) = illness {
            events.extend(self.pet.die(cause));
        }
        events
    }

    /// Apply one worsening step to `disease`.
    fn worsen(&mut self, disease: String) -> Vec<PetEvent> {
        debug!(pet = %self.pet.name(), disease = %disease, "disease worsened");
        let mut events = vec![PetEvent::DiseaseWorsened { disease }];

        let illness = self.pet.care().illness;
        let health = illness.worsen_health.draw(self.pet.rng_mut());
        events.extend(self.adjust_health(health.saturating_neg()));

        let rng = self.pet.rng_mut();
        let hunger = illness.worsen_hunger.draw(rng);
        let energy = illness.worsen_energy.draw(rng);
        let happiness = illness.worsen_happiness.draw(rng);
        let needs = self.pet.needs_mut();
        needs.adjust_hunger(hunger);
        needs.adjust_energy(energy.saturating_neg());
        needs.adjust_happiness(happiness.saturating_neg());
        events
    }
}

impl PetBehavior for AdvancedPet {
    fn base(&self) -> &Pet {
        &self.pet
    }

    fn eat(&mut self) -> Vec<PetEvent> {
        let mut events = self.pet.eat();
        if !self.pet.is_alive() {
            return events;
        }
        let chance = self.pet.care().illness.meal_heal_chance;
        if self.pet.rng_mut().roll(chance) {
            let gain = formulas::meal_health_gain(self.pet.personality());
            events.extend(self.adjust_health(gain));
        }
        events
    }

    fn sleep(&mut self) -> Vec<PetEvent> {
        self.pet.sleep()
    }

    fn play(&mut self) -> Vec<PetEvent> {
        let mut events = self.pet.play();
        if !self.pet.is_alive() {
            return events;
        }
        let illness = self.pet.care().illness;
        if self.pet.needs().energy() < illness.overexertion_energy
            && self.pet.rng_mut().roll(illness.overexertion_chance)
        {
            let loss = formulas::overexertion_health_loss(self.pet.personality());
            debug!(pet = %self.pet.name(), loss, "pet overexerted itself");
            events.extend(self.adjust_health(loss.saturating_neg()));
        }
        events
    }

    fn train(&mut self, trick: &str) -> Vec<PetEvent> {
        let mut events = self.pet.train(trick);
        if !self.pet.is_alive() {
            return events;
        }
        let illness = self.pet.care().illness;
        if self.pet.knows_trick(trick) && self.pet.rng_mut().roll(illness.training_heal_chance) {
            events.extend(self.adjust_health(illness.training_heal_amount));
        }
        events
    }

    fn show_tricks(&self) -> Vec<PetEvent> {
        self.pet.show_tricks()
    }

    fn get_status(&self) -> PetStatus {
        let mut status = self.pet.get_status();
        if status.alive {
            status.health = Some(self.health);
            status.diseases = self.diseases.as_slice().to_vec();
        }
        status
    }

    fn add_mood_modifier<F>(&mut self, modifier: F)
    where
        F: FnMut(&mut Self) + 'static,
    {
        self.mood_modifiers.push(Box::new(modifier));
    }

    fn update_mood(&mut self) {
        trace!(
            pet = %self.pet.name(),
            count = self.mood_modifiers.len(),
            "running mood modifiers"
        );
        mood::run(self);
    }

    fn time_passes(&mut self, seconds: u64) -> Vec<PetEvent> {
        let mut events = self.pet.time_passes(seconds);
        let chance = self.pet.care().illness.worsen_chance;
        let active = self.diseases.as_slice().to_vec();
        for disease in active {
            if !self.pet.is_alive() {
                break;
            }
            if self.pet.rng_mut().roll(chance) {
                events.extend(self.worsen(disease));
            }
        }
        events
    }
}

impl MoodHost for AdvancedPet {
    fn mood_modifiers_mut(&mut self) -> &mut MoodModifiers<Self> {
        &mut self.mood_modifiers
    }
}
