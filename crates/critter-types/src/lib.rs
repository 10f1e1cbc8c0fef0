//! Shared type definitions for the Critter pet simulation.
//!
//! This crate holds the plain value types that every other crate in the
//! workspace agrees on. Nothing here knows about clocks, randomness, or
//! the action rules; those live in `critter-core` and `critter-pets`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for pet identifiers
//! - [`enums`] -- Actions and causes of death
//! - [`needs`] -- The bounded hunger/energy/happiness record ([`Needs`])
//! - [`health`] -- Bounded health value for advanced pets ([`Health`])
//! - [`personality`] -- Trait weights shaping action magnitudes ([`Personality`])
//! - [`params`] -- Construction parameters for pets ([`PetParams`])
//! - [`events`] -- Event records returned by every pet action ([`PetEvent`])
//! - [`status`] -- Read-only status snapshot ([`PetStatus`])

pub mod enums;
pub mod events;
pub mod health;
pub mod ids;
pub mod needs;
pub mod params;
pub mod personality;
pub mod status;

// Re-export all public types at crate root for convenience.
pub use enums::{Action, DeathCause};
pub use events::PetEvent;
pub use health::{Health, HEALTH_MAX, HEALTH_MIN};
pub use ids::PetId;
pub use needs::{NEED_MAX, NEED_MIN, Needs};
pub use params::{
    DEFAULT_ENERGY, DEFAULT_HAPPINESS, DEFAULT_HEALTH, DEFAULT_HUNGER, PetParams,
};
pub use personality::{NEUTRAL_INFLUENCE, Personality, traits};
pub use status::PetStatus;
