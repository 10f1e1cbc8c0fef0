//! Session driver binary for the Critter pet simulation.
//!
//! Creates one pet from configuration and runs the scripted care session
//! against it, printing the transcript to stdout. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `critter-config.yaml` (or `CRITTER_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Create the manual clock and the seeded random source
//! 4. Build the configured pet
//! 5. Run the session and log the result

mod config;
mod error;
mod render;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use critter_core::clock::{Clock, ManualClock};
use critter_core::random::RandomSource;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, EngineConfig, LoggingConfig};
use crate::error::EngineError;
use crate::session::{Session, SessionPet};

/// Application entry point for the session driver.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the transcript
/// cannot be written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!(
        pet = config.pet.params.name,
        kind = ?config.pet.kind,
        seed = ?config.seed,
        rounds = config.session.rounds,
        step_seconds = config.session.step_seconds,
        "critter-engine starting"
    );

    // 3. Clock and randomness.
    let clock = Arc::new(ManualClock::starting_at(Utc::now()));
    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(SmallRng::seed_from_u64(seed)),
        None => Box::new(SmallRng::from_os_rng()),
    };

    // 4. Build the pet.
    let pet = SessionPet::build(
        &config.pet,
        config.care,
        Arc::clone(&clock) as Arc<dyn Clock>,
        rng,
    );

    // 5. Run the session.
    let stdout = std::io::stdout();
    let mut session = Session::new(pet, clock, config.session, stdout.lock());
    let report = session.run()?;

    info!(
        rounds_run = report.rounds_run,
        survived = report.survived,
        needs = %report.final_status.needs,
        "critter-engine shutdown complete"
    );
    Ok(())
}

/// Load the configuration from `CRITTER_CONFIG`, or from
/// `critter-config.yaml` in the working directory.
fn load_config() -> Result<EngineConfig, EngineError> {
    let path = std::env::var_os(CONFIG_PATH_ENV)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = EngineConfig::load(&path)?;
    Ok(config)
}

/// Install the tracing subscriber. `RUST_LOG` wins over the configured
/// level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
