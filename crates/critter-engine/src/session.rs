//! The scripted care session.
//!
//! A session shows the pet's status, runs a fixed round of interactions,
//! then lets time pass in steps until the pet dies or the step budget is
//! spent. Time moves only through the session's [`ManualClock`], so a
//! session never sleeps and a seeded session always prints the same
//! transcript.

use std::io::Write;
use std::sync::Arc;

use critter_core::clock::{Clock, ManualClock};
use critter_core::config::CareConfig;
use critter_core::random::RandomSource;
use critter_pets::{AdvancedPet, Pet, PetBehavior};
use critter_types::{PetEvent, PetStatus};
use tracing::{debug, info};

use crate::config::{PetConfig, PetKind, SessionConfig};
use crate::error::EngineError;
use crate::render;

/// The pet a session drives.
#[derive(Debug)]
pub enum SessionPet {
    /// A basic pet.
    Basic(Pet),
    /// A pet with health and diseases.
    Advanced(AdvancedPet),
}

impl SessionPet {
    /// Build the configured pet.
    pub fn build(
        config: &PetConfig,
        care: CareConfig,
        clock: Arc<dyn Clock>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let params = config.params.clone();
        match config.kind {
            PetKind::Basic => Self::Basic(Pet::new(params, clock, rng).with_care(care)),
            PetKind::Advanced => Self::Advanced(
                AdvancedPet::new(params, config.health, clock, rng).with_care(care),
            ),
        }
    }

    /// The pet as a behavior trait object.
    pub fn behavior(&self) -> &dyn PetBehavior {
        match self {
            Self::Basic(pet) => pet,
            Self::Advanced(pet) => pet,
        }
    }

    /// The pet as a mutable behavior trait object.
    pub fn behavior_mut(&mut self) -> &mut dyn PetBehavior {
        match self {
            Self::Basic(pet) => pet,
            Self::Advanced(pet) => pet,
        }
    }

    /// Catch a disease. Basic pets cannot fall ill.
    fn contract_disease(&mut self, disease: &str) -> Vec<PetEvent> {
        match self {
            Self::Basic(_) => Vec::new(),
            Self::Advanced(pet) => pet.contract_disease(disease),
        }
    }

    /// Treat a disease. Basic pets cannot fall ill.
    fn treat_disease(&mut self, disease: &str) -> Vec<PetEvent> {
        match self {
            Self::Basic(_) => Vec::new(),
            Self::Advanced(pet) => pet.treat_disease(disease),
        }
    }
}

/// Outcome of a finished session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    /// Time steps actually run.
    pub rounds_run: u32,
    /// Whether the pet was alive at the end.
    pub survived: bool,
    /// The last status snapshot.
    pub final_status: PetStatus,
}

/// A scripted session writing its transcript to `out`.
pub struct Session<W> {
    pet: SessionPet,
    clock: Arc<ManualClock>,
    config: SessionConfig,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session. `clock` must be the clock `pet` was built with.
    pub const fn new(
        pet: SessionPet,
        clock: Arc<ManualClock>,
        config: SessionConfig,
        out: W,
    ) -> Self {
        Self {
            pet,
            clock,
            config,
            out,
        }
    }

    /// Run the whole script.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Io`] if the transcript cannot be written, or
    /// [`EngineError::Json`] if a JSON status line cannot be encoded.
    pub fn run(&mut self) -> Result<SessionReport, EngineError> {
        let name = self.pet.behavior().name().to_owned();
        info!(pet = %name, rounds = self.config.rounds, "session started");

        self.heading("--- Initial Status ---")?;
        self.show_status()?;

        self.heading(&format!("\n--- Interacting with {name} ---"))?;
        let events = self.pet.behavior_mut().eat();
        self.emit(&events)?;
        let events = self.pet.behavior_mut().play();
        self.emit(&events)?;
        for trick in self.config.tricks.clone() {
            let events = self.pet.behavior_mut().train(&trick);
            self.emit(&events)?;
        }
        let events = self.pet.behavior().show_tricks();
        self.emit(&events)?;
        let events = self.pet.behavior_mut().sleep();
        self.emit(&events)?;
        for disease in self.config.diseases.clone() {
            let events = self.pet.contract_disease(&disease);
            self.emit(&events)?;
        }
        for disease in self.config.treatments.clone() {
            let events = self.pet.treat_disease(&disease);
            self.emit(&events)?;
        }

        self.heading("\n--- Status After Interaction ---")?;
        self.show_status()?;

        self.heading("\n--- Time Passing (Simulated) ---")?;
        let mut rounds_run = 0_u32;
        for _ in 0..self.config.rounds {
            rounds_run = rounds_run.saturating_add(1);
            self.clock.advance_secs(self.config.step_seconds);
            let events = self.pet.behavior_mut().time_passes(self.config.step_seconds);
            self.emit(&events)?;
            self.show_status()?;
            if !self.pet.behavior().is_alive() {
                break;
            }
        }

        let survived = self.pet.behavior().is_alive();
        if survived {
            writeln!(self.out, "\n{name} is still doing well!")?;
        }
        info!(pet = %name, rounds_run, survived, "session finished");

        Ok(SessionReport {
            rounds_run,
            survived,
            final_status: self.pet.behavior().get_status(),
        })
    }

    fn heading(&mut self, text: &str) -> Result<(), EngineError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn emit(&mut self, events: &[PetEvent]) -> Result<(), EngineError> {
        let name = self.pet.behavior().name().to_owned();
        for event in events {
            debug!(pet = %name, event = ?event, "event");
            if let Some(line) = render::event(&name, event) {
                writeln!(self.out, "{line}")?;
            }
        }
        Ok(())
    }

    fn show_status(&mut self) -> Result<(), EngineError> {
        let status = self.pet.behavior().get_status();
        for line in render::status(&status) {
            writeln!(self.out, "{line}")?;
        }
        if self.config.json_status {
            writeln!(self.out, "{}", serde_json::to_string(&status)?)?;
        }
        Ok(())
    }
}
