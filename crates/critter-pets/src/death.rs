//! Terminal conditions for pets.
//!
//! A pet dies of neglect when, after time has passed, hunger has reached
//! its maximum or energy or happiness has reached zero. An advanced pet
//! also dies of illness when its health reaches zero. Both checks only
//! inspect state; flipping the pet to dead is the caller's job.

use critter_types::{DeathCause, Health, NEED_MAX, NEED_MIN, Needs};

/// Check whether `needs` meet the neglect condition.
///
/// Returns `Some(DeathCause::Neglect)` if they do, `None` otherwise.
pub const fn check_neglect(needs: &Needs) -> Option<DeathCause> {
    if needs.hunger() >= NEED_MAX || needs.energy() <= NEED_MIN || needs.happiness() <= NEED_MIN {
        return Some(DeathCause::Neglect);
    }
    None
}

/// Check whether `health` meets the illness condition.
pub const fn check_illness(health: Health) -> Option<DeathCause> {
    if health.is_depleted() {
        return Some(DeathCause::Illness);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_needs_are_not_terminal() {
        assert_eq!(check_neglect(&Needs::new(9, 1, 1)), None);
        assert_eq!(check_neglect(&Needs::new(5, 7, 5)), None);
    }

    #[test]
    fn each_need_can_be_terminal() {
        assert_eq!(check_neglect(&Needs::new(10, 5, 5)), Some(DeathCause::Neglect));
        assert_eq!(check_neglect(&Needs::new(5, 0, 5)), Some(DeathCause::Neglect));
        assert_eq!(check_neglect(&Needs::new(5, 5, 0)), Some(DeathCause::Neglect));
    }

    #[test]
    fn zero_health_is_illness() {
        assert_eq!(check_illness(Health::new(0)), Some(DeathCause::Illness));
        assert_eq!(check_illness(Health::new(1)), None);
    }
}
