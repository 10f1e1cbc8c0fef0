//! The bounded needs record every pet carries.
//!
//! Hunger, energy, and happiness are whole numbers in
//! [`NEED_MIN`]..=[`NEED_MAX`]. The bound is enforced at every write:
//! setters saturate out-of-range input instead of rejecting it, so no
//! sequence of operations can observe a value outside the range.

use serde::{Deserialize, Serialize};

/// Lowest value any need can hold.
pub const NEED_MIN: u8 = 0;

/// Highest value any need can hold.
pub const NEED_MAX: u8 = 10;

/// Hunger, energy, and happiness of a single pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawNeeds")]
pub struct Needs {
    hunger: u8,
    energy: u8,
    happiness: u8,
}

/// Unclamped wire form; deserialization routes through [`Needs::new`].
#[derive(Deserialize)]
struct RawNeeds {
    hunger: i32,
    energy: i32,
    happiness: i32,
}

impl From<RawNeeds> for Needs {
    fn from(raw: RawNeeds) -> Self {
        Self::new(raw.hunger, raw.energy, raw.happiness)
    }
}

impl Needs {
    /// Create a needs record, clamping each value into range.
    pub fn new(hunger: i32, energy: i32, happiness: i32) -> Self {
        Self {
            hunger: clamp_need(hunger),
            energy: clamp_need(energy),
            happiness: clamp_need(happiness),
        }
    }

    /// Current hunger (10 is starving).
    pub const fn hunger(&self) -> u8 {
        self.hunger
    }

    /// Current energy (0 is exhausted).
    pub const fn energy(&self) -> u8 {
        self.energy
    }

    /// Current happiness (0 is miserable).
    pub const fn happiness(&self) -> u8 {
        self.happiness
    }

    /// Store a new hunger value, saturating into range.
    pub fn set_hunger(&mut self, value: i32) {
        self.hunger = clamp_need(value);
    }

    /// Store a new energy value, saturating into range.
    pub fn set_energy(&mut self, value: i32) {
        self.energy = clamp_need(value);
    }

    /// Store a new happiness value, saturating into range.
    pub fn set_happiness(&mut self, value: i32) {
        self.happiness = clamp_need(value);
    }

    /// Add `delta` (which may be negative) to hunger through the clamping setter.
    pub fn adjust_hunger(&mut self, delta: i32) {
        self.set_hunger(i32::from(self.hunger).saturating_add(delta));
    }

    /// Add `delta` (which may be negative) to energy through the clamping setter.
    pub fn adjust_energy(&mut self, delta: i32) {
        self.set_energy(i32::from(self.energy).saturating_add(delta));
    }

    /// Add `delta` (which may be negative) to happiness through the clamping setter.
    pub fn adjust_happiness(&mut self, delta: i32) {
        self.set_happiness(i32::from(self.happiness).saturating_add(delta));
    }
}

impl core::fmt::Display for Needs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Hunger: {}/{NEED_MAX}, Energy: {}/{NEED_MAX}, Happiness: {}/{NEED_MAX}",
            self.hunger, self.energy, self.happiness
        )
    }
}

/// Saturate an arbitrary integer into the need range.
fn clamp_need(value: i32) -> u8 {
    let clamped = value.clamp(i32::from(NEED_MIN), i32::from(NEED_MAX));
    u8::try_from(clamped).unwrap_or(NEED_MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn construction_clamps_each_field() {
        let needs = Needs::new(-4, 42, 7);
        assert_eq!(needs.hunger(), 0);
        assert_eq!(needs.energy(), 10);
        assert_eq!(needs.happiness(), 7);
    }

    #[test]
    fn boundary_values_read_back_exactly() {
        let low = Needs::new(0, 0, 0);
        assert_eq!((low.hunger(), low.energy(), low.happiness()), (0, 0, 0));
        let high = Needs::new(10, 10, 10);
        assert_eq!((high.hunger(), high.energy(), high.happiness()), (10, 10, 10));
    }

    #[test]
    fn setters_saturate() {
        let mut needs = Needs::new(5, 5, 5);
        needs.set_hunger(11);
        needs.set_energy(-1);
        needs.set_happiness(i32::MIN);
        assert_eq!(needs.hunger(), 10);
        assert_eq!(needs.energy(), 0);
        assert_eq!(needs.happiness(), 0);
    }

    #[test]
    fn adjust_saturates_without_overflow() {
        let mut needs = Needs::new(9, 1, 5);
        needs.adjust_hunger(i32::MAX);
        needs.adjust_energy(-3);
        needs.adjust_happiness(2);
        assert_eq!(needs.hunger(), 10);
        assert_eq!(needs.energy(), 0);
        assert_eq!(needs.happiness(), 7);
    }

    #[test]
    fn display_lists_all_needs() {
        let needs = Needs::new(5, 7, 5);
        assert_eq!(needs.to_string(), "Hunger: 5/10, Energy: 7/10, Happiness: 5/10");
    }

    #[test]
    fn deserialization_clamps() {
        let needs: Needs =
            serde_json::from_str(r#"{"hunger": 15, "energy": -2, "happiness": 3}"#).unwrap();
        assert_eq!(needs, Needs::new(10, 0, 3));
    }
}
