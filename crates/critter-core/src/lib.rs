//! Clock, randomness, and configuration for the Critter pet simulation.
//!
//! Pets read the current time and draw random numbers only through the
//! capabilities defined here, so a test or a replay can substitute a
//! manual clock and a scripted random source and get identical outcomes.
//!
//! # Modules
//!
//! - [`clock`] -- [`Clock`] trait with [`SystemClock`] and [`ManualClock`].
//! - [`random`] -- [`RandomSource`] trait, implemented for every `rand::Rng`
//!   and by [`ScriptedRandom`].
//! - [`config`] -- Tunable decay periods and illness odds ([`CareConfig`]),
//!   loaded from YAML.
//!
//! [`Clock`]: clock::Clock
//! [`SystemClock`]: clock::SystemClock
//! [`ManualClock`]: clock::ManualClock
//! [`RandomSource`]: random::RandomSource
//! [`ScriptedRandom`]: random::ScriptedRandom
//! [`CareConfig`]: config::CareConfig

pub mod clock;
pub mod config;
pub mod random;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CareConfig, ConfigError, DecayConfig, IllnessConfig, IntRange};
pub use random::{RandomSource, ScriptedRandom};
