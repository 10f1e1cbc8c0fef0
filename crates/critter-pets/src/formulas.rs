//! Personality-weighted action formulas.
//!
//! Every formula computes a real-valued amount from one or two trait
//! weights and then truncates it toward zero. Truncation (not rounding)
//! is part of the rules: a joyful pet with joyfulness 1.0 gains
//! `trunc(1.5) = 1` happiness from a meal, not 2.
//!
//! These are pure functions over [`Personality`] so the numbers can be
//! checked without building a pet.

// A fused multiply-add rounds once instead of twice, which can move a
// result across an integer boundary before truncation.
#![allow(clippy::suboptimal_flops)]

use critter_core::config::{DecayConfig, IllnessConfig};
use critter_types::Personality;
use critter_types::personality::traits;

/// Happiness gained when a trick is learned.
pub const TRICK_HAPPINESS_BONUS: i32 = 2;

/// Truncate toward zero, saturating at the `i32` bounds (NaN becomes 0).
#[allow(clippy::cast_possible_truncation)]
pub fn truncate(value: f64) -> i32 {
    value.trunc() as i32
}

/// Need changes from one meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealEffect {
    /// Hunger removed: `trunc(3 - pickiness)`.
    pub hunger_reduced: i32,
    /// Happiness added: `trunc(1 + 0.5 * joyfulness)`.
    pub happiness_gained: i32,
}

/// Compute the effect of a meal.
pub fn meal(personality: &Personality) -> MealEffect {
    let pickiness = personality.influence(traits::PICKINESS);
    let joyfulness = personality.influence(traits::JOYFULNESS);
    MealEffect {
        hunger_reduced: truncate(3.0 - 1.0 * pickiness),
        happiness_gained: truncate(1.0 + 0.5 * joyfulness),
    }
}

/// Energy recovered by sleeping: `trunc(5 + 2 * laziness)`.
pub fn rest(personality: &Personality) -> i32 {
    let laziness = personality.influence(traits::LAZINESS);
    truncate(5.0 + 2.0 * laziness)
}

/// Need changes from one play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayEffect {
    /// Energy spent: `trunc(2 + (1 - playfulness))`.
    pub energy_spent: i32,
    /// Happiness added: `trunc(2 + 0.8 * playfulness)`.
    pub happiness_gained: i32,
    /// Hunger added: `trunc(1 + 0.3 * (1 - fussiness))`.
    pub hunger_gained: i32,
}

/// Compute the effect of playing.
pub fn play(personality: &Personality) -> PlayEffect {
    let playfulness = personality.influence(traits::PLAYFULNESS);
    let fussiness = personality.influence(traits::FUSSINESS);
    PlayEffect {
        energy_spent: truncate(2.0 + 1.0 * (1.0 - playfulness)),
        happiness_gained: truncate(2.0 + 0.8 * playfulness),
        hunger_gained: truncate(1.0 + 0.3 * (1.0 - fussiness)),
    }
}

/// Probability that a training attempt succeeds: `0.6 + 0.3 * trainability`.
pub fn training_chance(personality: &Personality) -> f64 {
    0.6 + 0.3 * personality.influence(traits::TRAINABILITY)
}

/// Need changes from a stretch of neglect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayEffect {
    /// Hunger added.
    pub hunger_gained: i32,
    /// Energy removed.
    pub energy_lost: i32,
    /// Happiness removed.
    pub happiness_lost: i32,
}

/// Compute need decay for `elapsed_secs` seconds without interaction.
///
/// Each amount is `trunc(elapsed / period)`, where the period is the
/// configured base period divided by a trait-weighted rate: metabolism for
/// hunger, activity for energy, sociability for happiness.
pub fn decay(elapsed_secs: f64, personality: &Personality, config: &DecayConfig) -> DecayEffect {
    let metabolism = personality.influence(traits::METABOLISM);
    let activity = personality.influence(traits::ACTIVITY);
    let sociability = personality.influence(traits::SOCIABILITY);

    let hunger_period = config.hunger_period_secs / (3.0 + 2.0 * metabolism);
    let energy_period = config.energy_period_secs / (5.0 + 3.0 * activity);
    let happiness_period = config.happiness_period_secs / (2.0 + 1.0 * sociability);

    DecayEffect {
        hunger_gained: truncate(elapsed_secs / hunger_period),
        energy_lost: truncate(elapsed_secs / energy_period),
        happiness_lost: truncate(elapsed_secs / happiness_period),
    }
}

/// Health restored by a nourishing meal: `trunc(2 + constitution)`.
pub fn meal_health_gain(personality: &Personality) -> i32 {
    truncate(2.0 + personality.influence(traits::CONSTITUTION))
}

/// Health lost to overexertion: `trunc(3 - resilience)`.
pub fn overexertion_health_loss(personality: &Personality) -> i32 {
    truncate(3.0 - personality.influence(traits::RESILIENCE))
}

/// Probability that a treatment cures: `treatment_chance * cooperativeness`.
pub fn treatment_chance(personality: &Personality, config: &IllnessConfig) -> f64 {
    config.treatment_chance * personality.influence(traits::COOPERATIVENESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personality(pairs: &[(&str, f64)]) -> Personality {
        Personality::new("Test", pairs.iter().map(|&(k, v)| (k, v)))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn truncation_goes_toward_zero() {
        assert_eq!(truncate(2.99), 2);
        assert_eq!(truncate(-2.99), -2);
        assert_eq!(truncate(f64::NAN), 0);
        assert_eq!(truncate(1e20), i32::MAX);
    }

    #[test]
    fn meal_with_zero_traits() {
        let effect = meal(&personality(&[("pickiness", 0.0), ("joyfulness", 0.0)]));
        assert_eq!(effect.hunger_reduced, 3);
        assert_eq!(effect.happiness_gained, 1);
    }

    #[test]
    fn meal_with_neutral_traits() {
        // 3 - 0.5 = 2.5 -> 2; 1 + 0.25 = 1.25 -> 1
        let effect = meal(&personality(&[]));
        assert_eq!(effect.hunger_reduced, 2);
        assert_eq!(effect.happiness_gained, 1);
    }

    #[test]
    fn meal_with_max_traits() {
        // 3 - 1 = 2; 1 + 0.5 = 1.5 -> 1
        let effect = meal(&personality(&[("pickiness", 1.0), ("joyfulness", 1.0)]));
        assert_eq!(effect.hunger_reduced, 2);
        assert_eq!(effect.happiness_gained, 1);
    }

    #[test]
    fn rest_scales_with_laziness() {
        assert_eq!(rest(&personality(&[("laziness", 0.0)])), 5);
        assert_eq!(rest(&personality(&[])), 6);
        assert_eq!(rest(&personality(&[("laziness", 1.0)])), 7);
    }

    #[test]
    fn play_with_neutral_traits() {
        // energy 2 + 0.5 = 2.5 -> 2; happiness 2 + 0.4 = 2.4 -> 2; hunger 1 + 0.15 -> 1
        let effect = play(&personality(&[]));
        assert_eq!(
            effect,
            PlayEffect {
                energy_spent: 2,
                happiness_gained: 2,
                hunger_gained: 1,
            }
        );
    }

    #[test]
    fn play_with_listless_pet() {
        // playfulness 0: energy 3, happiness 2
        let effect = play(&personality(&[("playfulness", 0.0), ("fussiness", 0.0)]));
        assert_eq!(effect.energy_spent, 3);
        assert_eq!(effect.happiness_gained, 2);
        assert_eq!(effect.hunger_gained, 1);
    }

    #[test]
    fn training_chance_range() {
        assert!(approx(training_chance(&personality(&[("trainability", 0.0)])), 0.6));
        assert!(approx(training_chance(&personality(&[])), 0.75));
        assert!(approx(training_chance(&personality(&[("trainability", 1.0)])), 0.9));
    }

    #[test]
    fn one_hour_of_decay_for_neutral_pet() {
        // hunger period 3600/4 = 900 -> 4; energy 7200/6.5 -> 3.25 -> 3;
        // happiness 10800/2.5 = 4320 -> 0.83 -> 0
        let effect = decay(3600.0, &personality(&[]), &DecayConfig::default());
        assert_eq!(
            effect,
            DecayEffect {
                hunger_gained: 4,
                energy_lost: 3,
                happiness_lost: 0,
            }
        );
    }

    #[test]
    fn short_gaps_do_not_decay() {
        let effect = decay(10.0, &personality(&[]), &DecayConfig::default());
        assert_eq!(effect.hunger_gained, 0);
        assert_eq!(effect.energy_lost, 0);
        assert_eq!(effect.happiness_lost, 0);
    }

    #[test]
    fn fast_metabolism_shortens_hunger_period() {
        let slow = decay(3600.0, &personality(&[("metabolism", 0.0)]), &DecayConfig::default());
        let fast = decay(3600.0, &personality(&[("metabolism", 1.0)]), &DecayConfig::default());
        assert_eq!(slow.hunger_gained, 3);
        assert_eq!(fast.hunger_gained, 5);
    }

    #[test]
    fn health_formulas() {
        assert_eq!(meal_health_gain(&personality(&[("constitution", 1.0)])), 3);
        assert_eq!(meal_health_gain(&personality(&[])), 2);
        assert_eq!(overexertion_health_loss(&personality(&[("resilience", 0.0)])), 3);
        assert_eq!(overexertion_health_loss(&personality(&[])), 2);
        let illness = IllnessConfig::default();
        assert!(approx(treatment_chance(&personality(&[]), &illness), 0.35));
        assert!(approx(
            treatment_chance(&personality(&[("cooperativeness", 0.0)]), &illness),
            0.0
        ));
    }
}
