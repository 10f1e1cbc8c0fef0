//! Personality: a named set of trait weights.
//!
//! Each weight is an `f64` in 0.0 to 1.0 that scales one term of an action
//! formula. Weights are clamped once at construction and never change;
//! looking up a trait the personality does not define yields
//! [`NEUTRAL_INFLUENCE`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Influence reported for any trait the personality does not define.
pub const NEUTRAL_INFLUENCE: f64 = 0.5;

/// Trait identifiers read by the action and time-decay formulas.
pub mod traits {
    /// Pickier pets eat less per meal.
    pub const PICKINESS: &str = "pickiness";
    /// Joyful pets get happier from a meal.
    pub const JOYFULNESS: &str = "joyfulness";
    /// Lazier pets sleep more deeply.
    pub const LAZINESS: &str = "laziness";
    /// Playful pets tire slower and enjoy play more.
    pub const PLAYFULNESS: &str = "playfulness";
    /// Less fussy pets get hungrier from play.
    pub const FUSSINESS: &str = "fussiness";
    /// Trainable pets learn tricks more reliably.
    pub const TRAINABILITY: &str = "trainability";
    /// Fast metabolism shortens the hunger period.
    pub const METABOLISM: &str = "metabolism";
    /// Active pets drain energy faster while idle.
    pub const ACTIVITY: &str = "activity";
    /// Sociable pets lose happiness faster when alone.
    pub const SOCIABILITY: &str = "sociability";
    /// Sturdy constitutions gain more health from food.
    pub const CONSTITUTION: &str = "constitution";
    /// Resilient pets lose less health from overexertion.
    pub const RESILIENCE: &str = "resilience";
    /// Cooperative pets are easier to treat.
    pub const COOPERATIVENESS: &str = "cooperativeness";
}

/// Immutable personality assigned at pet creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPersonality")]
pub struct Personality {
    name: String,
    traits: BTreeMap<String, f64>,
}

/// Unclamped wire form; deserialization routes through [`Personality::new`].
#[derive(Deserialize)]
struct RawPersonality {
    name: String,
    #[serde(default)]
    traits: BTreeMap<String, f64>,
}

impl From<RawPersonality> for Personality {
    fn from(raw: RawPersonality) -> Self {
        Self::new(raw.name, raw.traits)
    }
}

impl Personality {
    /// Create a personality, clamping every weight to 0.0..=1.0.
    ///
    /// A NaN weight carries no information and is stored as
    /// [`NEUTRAL_INFLUENCE`].
    pub fn new<I, K>(name: impl Into<String>, traits: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let traits = traits
            .into_iter()
            .map(|(trait_name, weight)| (trait_name.into(), clamp_weight(weight)))
            .collect();
        Self {
            name: name.into(),
            traits,
        }
    }

    /// Display name of this personality.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight of `trait_name`, or [`NEUTRAL_INFLUENCE`] when undefined.
    pub fn influence(&self, trait_name: &str) -> f64 {
        self.traits
            .get(trait_name)
            .copied()
            .unwrap_or(NEUTRAL_INFLUENCE)
    }

    /// All explicitly defined traits, ordered by name.
    pub const fn traits(&self) -> &BTreeMap<String, f64> {
        &self.traits
    }
}

fn clamp_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        NEUTRAL_INFLUENCE
    } else {
        weight.clamp(0.0, 1.0)
    }
}
