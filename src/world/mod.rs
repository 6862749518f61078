mod loader;
mod model;
mod validator;

pub use loader::load_world_from_str;

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Encounter, EncounterKind, EncounterTable, Location, LocationKind, World};
pub use validator::{ValidationError, validate_world};
