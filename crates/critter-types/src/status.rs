//! Read-only status snapshot of a pet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::health::Health;
use crate::ids::PetId;
use crate::needs::Needs;

/// Point-in-time view of a pet, produced without mutating it.
///
/// `health` is only present for advanced pets. `diseases` is empty for
/// basic pets and for advanced pets that are healthy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetStatus {
    /// The pet's identifier.
    pub id: PetId,
    /// The pet's name.
    pub name: String,
    /// The pet's species label.
    pub species: String,
    /// Whether the pet is alive.
    pub alive: bool,
    /// Current needs.
    pub needs: Needs,
    /// Known tricks in the order they were learned.
    pub tricks: Vec<String>,
    /// Time of the last interaction that reset the decay timer.
    pub last_interaction: DateTime<Utc>,
    /// Current health, for pets that track it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    /// Active diseases in the order they were contracted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diseases: Vec<String>,
}
