//! Human-readable transcript lines for events and statuses.

use critter_types::{Action, DeathCause, PetEvent, PetStatus};

/// Render one event for the pet called `name`, or `None` for events that
/// print nothing.
pub fn event(name: &str, event: &PetEvent) -> Option<String> {
    let line = match event {
        PetEvent::Declined { action } => return declined(name, *action),
        PetEvent::Ate { .. } => format!("{name} is eating..."),
        PetEvent::Slept { .. } => format!("{name} is sleeping..."),
        PetEvent::Played { .. } => format!("{name} is playing!"),
        PetEvent::TrickLearned { trick } => format!("{name} learned the trick '{trick}'!"),
        PetEvent::TrickFailed { trick } => {
            format!("{name} struggled to learn '{trick}'. Try again later!")
        }
        PetEvent::TrickAlreadyKnown { trick } => {
            format!("{name} already knows the trick '{trick}'.")
        }
        PetEvent::TricksShown { tricks } if tricks.is_empty() => {
            format!("{name} hasn't learned any tricks yet.")
        }
        PetEvent::TricksShown { tricks } => {
            format!("{name} knows the following tricks: {}", tricks.join(", "))
        }
        PetEvent::TimePassed { elapsed_secs, .. } => {
            format!("{elapsed_secs:.0} seconds pass for {name}.")
        }
        PetEvent::Died {
            cause: DeathCause::Neglect,
        } => format!("{name} has passed away due to neglect."),
        PetEvent::Died {
            cause: DeathCause::Illness,
        } => format!("{name} has succumbed to illness."),
        PetEvent::HealthChanged { previous, current } => {
            format!("{name}'s health went from {previous} to {current}.")
        }
        PetEvent::DiseaseContracted { disease } => {
            format!("{name} has contracted '{disease}'.")
        }
        PetEvent::DiseaseAlreadyActive { disease } => {
            format!("{name} already has '{disease}'.")
        }
        PetEvent::DiseaseWorsened { disease } => format!("{disease} is worsening for {name}."),
        PetEvent::DiseaseCured { disease } => format!("{name} has been cured of '{disease}'."),
        PetEvent::TreatmentFailed { disease } => {
            format!("Treatment for '{disease}' was unsuccessful.")
        }
        PetEvent::DiseaseNotPresent { disease } => format!("{name} doesn't have '{disease}'."),
    };
    Some(line)
}

fn declined(name: &str, action: Action) -> Option<String> {
    let what = match action {
        Action::Eat => "cannot eat",
        Action::Sleep => "cannot sleep",
        Action::Play => "cannot play",
        Action::Train => "cannot learn any new tricks",
        Action::ShowTricks => "cannot show any tricks",
        // time passes silently for a dead pet
        Action::TimePasses => return None,
        Action::ContractDisease => "cannot fall ill",
        Action::TreatDisease => "cannot be treated",
    };
    Some(format!("{name} is no longer with us and {what}."))
}

/// Render a status block, one entry per line.
pub fn status(status: &PetStatus) -> Vec<String> {
    if !status.alive {
        return vec![format!("{} has passed away.", status.name)];
    }
    let mut lines = vec![
        format!("--- {} ({}) ---", status.name, status.species),
        status.needs.to_string(),
    ];
    if status.tricks.is_empty() {
        lines.push(format!("{} hasn't learned any tricks yet.", status.name));
    } else {
        lines.push(format!("Tricks learned: {}", status.tricks.join(", ")));
    }
    if let Some(health) = status.health {
        lines.push(format!("Health: {health}"));
        if !status.diseases.is_empty() {
            lines.push(format!("Diseases: {}", status.diseases.join(", ")));
        }
    }
    lines
}
