//! The base pet: needs, personality, tricks, and neglect.
//!
//! A [`Pet`] owns one [`Needs`] record and one [`Personality`]. Actions
//! change the needs by personality-weighted amounts (see
//! [`crate::formulas`]) and reset the neglect timer. Neglect is measured
//! only when the caller lets time pass; that is also the only place the
//! base pet can die.
//!
//! Time and randomness come from the [`Clock`] and [`RandomSource`] the
//! pet was built with.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use critter_core::clock::Clock;
use critter_core::config::CareConfig;
use critter_core::random::RandomSource;
use critter_types::{Action, DeathCause, Needs, Personality, PetEvent, PetId, PetParams, PetStatus};
use tracing::{debug, info, trace, warn};

use crate::behavior::PetBehavior;
use crate::death::check_neglect;
use crate::formulas::{self, TRICK_HAPPINESS_BONUS};
use crate::mood::{self, MoodHost, MoodModifiers};
use crate::names::NameList;

/// Species label used when the caller does not pick one.
pub const DEFAULT_SPECIES: &str = "Generic Pet";

/// A simulated pet.
pub struct Pet {
    id: PetId,
    name: String,
    species: String,
    needs: Needs,
    personality: Personality,
    tricks: NameList,
    death: Option<DeathCause>,
    last_interaction: DateTime<Utc>,
    mood_modifiers: MoodModifiers<Self>,
    care: CareConfig,
    clock: Arc<dyn Clock>,
    rng: Box<dyn RandomSource>,
}

impl Pet {
    /// Create a living pet from `params`.
    ///
    /// Starting needs are clamped into range, trait weights into 0.0..=1.0.
    /// The neglect timer starts at the clock's current time.
    pub fn new(params: PetParams, clock: Arc<dyn Clock>, rng: Box<dyn RandomSource>) -> Self {
        Self::with_default_species(params, DEFAULT_SPECIES, clock, rng)
    }

    pub(crate) fn with_default_species(
        params: PetParams,
        default_species: &str,
        clock: Arc<dyn Clock>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let PetParams {
            name,
            species,
            hunger,
            energy,
            happiness,
            traits,
        } = params;
        let personality = Personality::new(format!("{name}'s Personality"), traits);
        let species = species.unwrap_or_else(|| default_species.to_owned());
        let now = clock.now();

        let pet = Self {
            id: PetId::new(),
            name,
            species,
            needs: Needs::new(hunger, energy, happiness),
            personality,
            tricks: NameList::new(),
            death: None,
            last_interaction: now,
            mood_modifiers: MoodModifiers::new(),
            care: CareConfig::default(),
            clock,
            rng,
        };
        debug!(
            pet = %pet.name,
            id = %pet.id,
            species = %pet.species,
            needs = %pet.needs,
            "pet created"
        );
        pet
    }

    /// Replace the care parameters (decay periods, illness odds).
    #[must_use]
    pub const fn with_care(mut self, care: CareConfig) -> Self {
        self.care = care;
        self
    }

    /// The pet's identifier.
    pub const fn id(&self) -> PetId {
        self.id
    }

    /// The pet's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pet's species label.
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Current needs.
    pub const fn needs(&self) -> &Needs {
        &self.needs
    }

    /// Mutable access to the needs. Every write still goes through the
    /// clamping setters.
    pub const fn needs_mut(&mut self) -> &mut Needs {
        &mut self.needs
    }

    /// The pet's personality.
    pub const fn personality(&self) -> &Personality {
        &self.personality
    }

    /// Known tricks in the order they were learned.
    pub fn tricks(&self) -> &[String] {
        self.tricks.as_slice()
    }

    /// Whether the pet knows `trick` (ignoring case).
    pub fn knows_trick(&self, trick: &str) -> bool {
        self.tricks.contains(trick)
    }

    /// Whether the pet is alive.
    pub const fn is_alive(&self) -> bool {
        self.death.is_none()
    }

    /// Why the pet died, if it has.
    pub const fn cause_of_death(&self) -> Option<DeathCause> {
        self.death
    }

    /// Time of the last interaction that reset the neglect timer.
    pub const fn last_interaction(&self) -> DateTime<Utc> {
        self.last_interaction
    }

    /// The care parameters this pet runs with.
    pub const fn care(&self) -> &CareConfig {
        &self.care
    }

    /// Number of registered mood modifiers.
    pub const fn mood_modifier_count(&self) -> usize {
        self.mood_modifiers.len()
    }

    pub(crate) fn rng_mut(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }

    /// Reset the neglect timer to now.
    fn touch(&mut self) {
        self.last_interaction = self.clock.now();
    }

    /// Flip the pet to dead. Returns the death event, or `None` if the pet
    /// was already dead (the first cause sticks).
    pub(crate) fn die(&mut self, cause: DeathCause) -> Option<PetEvent> {
        if self.death.is_some() {
            return None;
        }
        self.death = Some(cause);
        warn!(pet = %self.name, id = %self.id, cause = %cause, "pet died");
        Some(PetEvent::Died { cause })
    }

    pub(crate) fn decline(&self, action: Action) -> Vec<PetEvent> {
        debug!(pet = %self.name, action = %action, "dead pet declined action");
        vec![PetEvent::Declined { action }]
    }
}

impl PetBehavior for Pet {
    fn base(&self) -> &Pet {
        self
    }

    fn eat(&mut self) -> Vec<PetEvent> {
        if !self.is_alive() {
            return self.decline(Action::Eat);
        }
        let effect = formulas::meal(&self.personality);
        self.needs.adjust_hunger(effect.hunger_reduced.saturating_neg());
        self.needs.adjust_happiness(effect.happiness_gained);
        self.touch();
        debug!(pet = %self.name, needs = %self.needs, "pet ate");
        vec![PetEvent::Ate {
            hunger_reduced: effect.hunger_reduced,
            happiness_gained: effect.happiness_gained,
        }]
    }

    fn sleep(&mut self) -> Vec<PetEvent> {
        if !self.is_alive() {
            return self.decline(Action::Sleep);
        }
        let energy_gained = formulas::rest(&self.personality);
        self.needs.adjust_energy(energy_gained);
        self.touch();
        debug!(pet = %self.name, needs = %self.needs, "pet slept");
        vec![PetEvent::Slept { energy_gained }]
    }

    fn play(&mut self) -> Vec<PetEvent> {
        if !self.is_alive() {
            return self.decline(Action::Play);
        }
        let effect = formulas::play(&self.personality);
        self.needs.adjust_energy(effect.energy_spent.saturating_neg());
        self.needs.adjust_happiness(effect.happiness_gained);
        self.needs.adjust_hunger(effect.hunger_gained);
        self.touch();
        debug!(pet = %self.name, needs = %self.needs, "pet played");
        vec![PetEvent::Played {
            energy_spent: effect.energy_spent,
            happiness_gained: effect.happiness_gained,
            hunger_gained: effect.hunger_gained,
        }]
    }

    fn train(&mut self, trick: &str) -> Vec<PetEvent> {
        if !self.is_alive() {
            return self.decline(Action::Train);
        }
        if self.tricks.contains(trick) {
            debug!(pet = %self.name, trick, "trick already known");
            return vec![PetEvent::TrickAlreadyKnown {
                trick: trick.to_owned(),
            }];
        }

        let chance = formulas::training_chance(&self.personality);
        let event = if self.rng.roll(chance) {
            self.tricks.insert(trick);
            self.needs.adjust_happiness(TRICK_HAPPINESS_BONUS);
            info!(pet = %self.name, trick, "pet learned a trick");
            PetEvent::TrickLearned {
                trick: trick.to_owned(),
            }
        } else {
            debug!(pet = %self.name, trick, chance, "training attempt failed");
            PetEvent::TrickFailed {
                trick: trick.to_owned(),
            }
        };
        self.touch();
        vec![event]
    }

    fn show_tricks(&self) -> Vec<PetEvent> {
        if !self.is_alive() {
            return self.decline(Action::ShowTricks);
        }
        vec![PetEvent::TricksShown {
            tricks: self.tricks.as_slice().to_vec(),
        }]
    }

    fn get_status(&self) -> PetStatus {
        PetStatus {
            id: self.id,
            name: self.name.clone(),
            species: self.species.clone(),
            alive: self.is_alive(),
            needs: self.needs,
            tricks: self.tricks.as_slice().to_vec(),
            last_interaction: self.last_interaction,
            health: None,
            diseases: Vec::new(),
        }
    }

    fn add_mood_modifier<F>(&mut self, modifier: F)
    where
        F: FnMut(&mut Self) + 'static,
    {
        self.mood_modifiers.push(Box::new(modifier));
    }

    fn update_mood(&mut self) {
        trace!(pet = %self.name, count = self.mood_modifiers.len(), "running mood modifiers");
        mood::run(self);
    }

    fn time_passes(&mut self, seconds: u64) -> Vec<PetEvent> {
        if !self.is_alive() {
            return self.decline(Action::TimePasses);
        }
        let now = self.clock.now();
        let elapsed_secs = elapsed_seconds(self.last_interaction, now);
        if elapsed_secs < threshold_seconds(seconds) {
            trace!(pet = %self.name, elapsed_secs, seconds, "not enough time has passed");
            return Vec::new();
        }

        let effect = formulas::decay(elapsed_secs, &self.personality, &self.care.decay);
        self.needs.adjust_hunger(effect.hunger_gained);
        self.needs.adjust_energy(effect.energy_lost.saturating_neg());
        self.needs.adjust_happiness(effect.happiness_lost.saturating_neg());
        self.last_interaction = now;
        debug!(pet = %self.name, elapsed_secs, needs = %self.needs, "needs decayed");

        let mut events = vec![PetEvent::TimePassed {
            elapsed_secs,
            hunger_gained: effect.hunger_gained,
            energy_lost: effect.energy_lost,
            happiness_lost: effect.happiness_lost,
        }];
        if let Some(cause) = check_neglect(&self.needs) {
            events.extend(self.die(cause));
        }
        events
    }
}

impl MoodHost for Pet {
    fn mood_modifiers_mut(&mut self) -> &mut MoodModifiers<Self> {
        &mut self.mood_modifiers
    }
}

impl core::fmt::Debug for Pet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pet")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("species", &self.species)
            .field("needs", &self.needs)
            .field("personality", &self.personality)
            .field("tricks", &self.tricks)
            .field("death", &self.death)
            .field("last_interaction", &self.last_interaction)
            .field("mood_modifiers", &self.mood_modifiers)
            .finish_non_exhaustive()
    }
}

/// Seconds between two instants, with millisecond precision.
#[allow(clippy::cast_precision_loss)]
fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    to.signed_duration_since(from).num_milliseconds() as f64 / 1000.0
}

#[allow(clippy::cast_precision_loss)]
const fn threshold_seconds(seconds: u64) -> f64 {
    seconds as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use critter_core::clock::ManualClock;
    use critter_core::random::ScriptedRandom;
    use critter_types::personality::traits;

    use super::*;

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn make_pet(params: PetParams, script: ScriptedRandom) -> (Pet, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::starting_at(start()));
        let pet = Pet::new(params, Arc::clone(&clock) as Arc<dyn Clock>, Box::new(script));
        (pet, clock)
    }

    fn needs_of(pet: &Pet) -> (u8, u8, u8) {
        let needs = pet.needs();
        (needs.hunger(), needs.energy(), needs.happiness())
    }

    #[test]
    fn new_pet_uses_defaults() {
        let (pet, _clock) = make_pet(PetParams::new("Buddy"), ScriptedRandom::new());
        assert_eq!(pet.name(), "Buddy");
        assert_eq!(pet.species(), DEFAULT_SPECIES);
        assert_eq!(needs_of(&pet), (5, 7, 5));
        assert_eq!(pet.personality().name(), "Buddy's Personality");
        assert!(pet.is_alive());
        assert!(pet.tricks().is_empty());
        assert_eq!(pet.last_interaction(), start());
        assert_eq!(pet.cause_of_death(), None);
    }

    #[test]
    fn boundary_values_read_back_exactly() {
        let (low, _clock) = make_pet(PetParams::new("Low").needs(0, 0, 0), ScriptedRandom::new());
        assert_eq!(needs_of(&low), (0, 0, 0));
        let (high, _clock) =
            make_pet(PetParams::new("High").needs(10, 10, 10), ScriptedRandom::new());
        assert_eq!(needs_of(&high), (10, 10, 10));
    }

    #[test]
    fn out_of_range_construction_is_clamped() {
        let params = PetParams::new("Wild")
            .needs(-3, 99, 11)
            .with_trait(traits::PICKINESS, 4.0);
        let (pet, _clock) = make_pet(params, ScriptedRandom::new());
        assert_eq!(needs_of(&pet), (0, 10, 10));
        assert!((pet.personality().influence(traits::PICKINESS) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn eat_with_zero_traits_moves_exact_amounts() {
        let params = PetParams::new("Buddy")
            .needs(5, 5, 5)
            .with_trait(traits::PICKINESS, 0.0)
            .with_trait(traits::JOYFULNESS, 0.0);
        let (mut pet, _clock) = make_pet(params, ScriptedRandom::new());
        let events = pet.eat();
        assert_eq!(needs_of(&pet), (2, 5, 6));
        assert_eq!(
            events,
            vec![PetEvent::Ate {
                hunger_reduced: 3,
                happiness_gained: 1,
            }]
        );
    }

    #[test]
    fn eat_clamps_at_bounds() {
        let params = PetParams::new("Buddy")
            .needs(1, 5, 10)
            .with_trait(traits::PICKINESS, 0.0)
            .with_trait(traits::JOYFULNESS, 0.0);
        let (mut pet, _clock) = make_pet(params, ScriptedRandom::new());
        pet.eat();
        assert_eq!(needs_of(&pet), (0, 5, 10));
    }

    #[test]
    fn sleep_restores_energy() {
        let (mut pet, _clock) = make_pet(PetParams::new("Buddy").needs(5, 2, 5), ScriptedRandom::new());
        let events = pet.sleep();
        assert_eq!(needs_of(&pet), (5, 8, 5));
        assert_eq!(events, vec![PetEvent::Slept { energy_gained: 6 }]);

        let lazy = PetParams::new("Lazy").needs(5, 5, 5).with_trait(traits::LAZINESS, 1.0);
        let (mut lazy, _clock) = make_pet(lazy, ScriptedRandom::new());
        lazy.sleep();
        assert_eq!(lazy.needs().energy(), 10);
    }

    #[test]
    fn play_moves_three_needs() {
        let (mut pet, _clock) = make_pet(PetParams::new("Buddy"), ScriptedRandom::new());
        pet.play();
        // energy 7 - 2, happiness 5 + 2, hunger 5 + 1
        assert_eq!(needs_of(&pet), (6, 5, 7));
    }

    #[test]
    fn actions_reset_the_neglect_timer() {
        let (mut pet, clock) = make_pet(PetParams::new("Buddy"), ScriptedRandom::new());
        clock.advance_secs(120);
        pet.eat();
        assert_eq!(pet.last_interaction(), clock.now());
        clock.advance_secs(120);
        pet.sleep();
        assert_eq!(pet.last_interaction(), clock.now());
        clock.advance_secs(120);
        pet.play();
        assert_eq!(pet.last_interaction(), clock.now());
    }

    #[test]
    fn successful_training_then_repeat_is_no_op() {
        let script = ScriptedRandom::new().with_chances([0.1]);
        let (mut pet, _clock) = make_pet(PetParams::new("Buddy"), script);

        let first = pet.train("Sit");
        assert_eq!(
            first,
            vec![PetEvent::TrickLearned {
                trick: "Sit".to_owned(),
            }]
        );
        assert_eq!(pet.needs().happiness(), 7);

        let second = pet.train("sit");
        assert_eq!(
            second,
            vec![PetEvent::TrickAlreadyKnown {
                trick: "sit".to_owned(),
            }]
        );
        assert_eq!(pet.tricks(), ["Sit".to_owned()]);
        assert_eq!(pet.needs().happiness(), 7);
    }

    #[test]
    fn failed_training_changes_only_the_timer() {
        // trainability 0 -> chance 0.6; a draw of 0.65 fails
        let params = PetParams::new("Stubborn").with_trait(traits::TRAINABILITY, 0.0);
        let script = ScriptedRandom::new().with_chances([0.65]);
        let (mut pet, clock) = make_pet(params, script);
        clock.advance_secs(30);

        let events = pet.train("Roll Over");
        assert_eq!(
            events,
            vec![PetEvent::TrickFailed {
                trick: "Roll Over".to_owned(),
            }]
        );
        assert!(pet.tricks().is_empty());
        assert_eq!(needs_of(&pet), (5, 7, 5));
        assert_eq!(pet.last_interaction(), clock.now());
    }

    #[test]
    fn already_known_trick_keeps_the_timer() {
        let script = ScriptedRandom::new().with_chances([0.0]);
        let (mut pet, clock) = make_pet(PetParams::new("Buddy"), script);
        pet.train("Sit");
        let learned_at = pet.last_interaction();
        clock.advance_secs(60);
        pet.train("SIT");
        assert_eq!(pet.last_interaction(), learned_at);
    }

    #[test]
    fn time_gate_not_reached_changes_nothing() {
        let (mut pet, clock) = make_pet(PetParams::new("Buddy"), ScriptedRandom::new());
        clock.advance_secs(100);
        let events = pet.time_passes(3600);
        assert!(events.is_empty());
        assert_eq!(needs_of(&pet), (5, 7, 5));
        assert_eq!(pet.last_interaction(), start());
    }

    #[test]
    fn an_hour_of_neglect_decays_needs() {
        let (mut pet, clock) = make_pet(PetParams::new("Buddy"), ScriptedRandom::new());
        clock.advance_secs(3600);
        let events = pet.time_passes(3600);
        // hunger +4, energy -3, happiness -0 for a neutral personality
        assert_eq!(needs_of(&pet), (9, 4, 5));
        assert!(pet.is_alive());
        assert_eq!(pet.last_interaction(), clock.now());
        assert!(matches!(
            events.as_slice(),
            [PetEvent::TimePassed {
                hunger_gained: 4,
                energy_lost: 3,
                happiness_lost: 0,
                ..
            }]
        ));
    }

    #[test]
    fn decay_magnitude_follows_elapsed_time_not_the_gate() {
        let (mut pet, clock) =
            make_pet(PetParams::new("Buddy").needs(1, 7, 5), ScriptedRandom::new());
        clock.advance_secs(7200);
        pet.time_passes(60);
        // 7200 s: hunger +8, energy -6, happiness -1
        assert_eq!(needs_of(&pet), (9, 1, 4));
        assert!(pet.is_alive());
    }

    #[test]
    fn starving_pet_dies_of_neglect_and_declines_everything() {
        let (mut pet, clock) =
            make_pet(PetParams::new("Buddy").needs(10, 7, 5), ScriptedRandom::new());
        clock.advance_secs(3600);
        let events = pet.time_passes(3600);
        assert!(!pet.is_alive());
        assert_eq!(pet.cause_of_death(), Some(DeathCause::Neglect));
        assert_eq!(
            events.last(),
            Some(&PetEvent::Died {
                cause: DeathCause::Neglect,
            })
        );

        let before = needs_of(&pet);
        assert_eq!(pet.eat(), vec![PetEvent::Declined { action: Action::Eat }]);
        assert_eq!(pet.sleep(), vec![PetEvent::Declined { action: Action::Sleep }]);
        assert_eq!(pet.play(), vec![PetEvent::Declined { action: Action::Play }]);
        assert_eq!(pet.train("Sit"), vec![PetEvent::Declined { action: Action::Train }]);
        assert_eq!(
            pet.show_tricks(),
            vec![PetEvent::Declined {
                action: Action::ShowTricks,
            }]
        );
        clock.advance_secs(3600);
        assert_eq!(
            pet.time_passes(0),
            vec![PetEvent::Declined {
                action: Action::TimePasses,
            }]
        );
        assert_eq!(needs_of(&pet), before);
        assert!(!pet.get_status().alive);
    }

    #[test]
    fn neglect_is_only_checked_when_time_passes() {
        // Energy can hit zero through play without killing the pet.
        let (mut pet, _clock) =
            make_pet(PetParams::new("Buddy").needs(5, 2, 5), ScriptedRandom::new());
        pet.play();
        assert_eq!(pet.needs().energy(), 0);
        assert!(pet.is_alive());
    }

    #[test]
    fn queries_are_idempotent() {
        let script = ScriptedRandom::new().with_chances([0.0]);
        let (mut pet, _clock) = make_pet(PetParams::new("Buddy"), script);
        pet.train("Sit");
        let status = pet.get_status();
        for _ in 0..5 {
            assert_eq!(
                pet.show_tricks(),
                vec![PetEvent::TricksShown {
                    tricks: vec!["Sit".to_owned()],
                }]
            );
            assert_eq!(pet.get_status(), status);
        }
    }

    #[test]
    fn mood_modifiers_run_only_on_request_and_in_order() {
        let (mut pet, _clock) = make_pet(PetParams::new("Buddy"), ScriptedRandom::new());
        let calls = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&calls);
        pet.add_mood_modifier(move |pet| {
            first.borrow_mut().push(1);
            pet.needs_mut().adjust_happiness(3);
        });
        let second = Rc::clone(&calls);
        pet.add_mood_modifier(move |pet| {
            second.borrow_mut().push(2);
            pet.needs_mut().adjust_happiness(-1);
        });
        assert_eq!(pet.mood_modifier_count(), 2);

        pet.eat();
        pet.play();
        assert!(calls.borrow().is_empty());

        let happiness = pet.needs().happiness();
        pet.update_mood();
        assert_eq!(*calls.borrow(), vec![1, 2]);
        assert_eq!(pet.needs().happiness(), happiness.saturating_add(3).min(10).saturating_sub(1));

        pet.update_mood();
        assert_eq!(*calls.borrow(), vec![1, 2, 1, 2]);
        assert_eq!(pet.mood_modifier_count(), 2);
    }
}
