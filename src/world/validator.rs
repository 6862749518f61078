use super::model::{LocationKind, World};

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.max_health <= 0 {
        errors.push(ValidationError::new("world max_health must be positive"));
    }

    // Locations must not be empty, and every script kind must be reachable
    if world.locations.is_empty() {
        errors.push(ValidationError::new("world has no locations"));
    }

    for kind in [
        LocationKind::Forest,
        LocationKind::Cave,
        LocationKind::Village,
        LocationKind::Castle,
    ] {
        if !world.locations.iter().any(|l| l.kind == kind) {
            errors.push(ValidationError::new(format!(
                "no location uses the {:?} script",
                kind
            )));
        }
    }

    // Encounter categories must not be empty; a draw from an empty category
    // would have nothing to return
    if world.encounters.monsters.is_empty() {
        errors.push(ValidationError::new("encounter table has no monsters"));
    }
    if world.encounters.treasures.is_empty() {
        errors.push(ValidationError::new("encounter table has no treasures"));
    }
    if world.encounters.allies.is_empty() {
        errors.push(ValidationError::new("encounter table has no allies"));
    }

    // Per-entry sanity
    for m in &world.encounters.monsters {
        if m.damage <= 0 {
            errors.push(ValidationError::new(format!(
                "monster '{}' has non-positive damage",
                m.name
            )));
        }
    }

    for t in &world.encounters.treasures {
        if t.item.is_none() {
            errors.push(ValidationError::new(format!(
                "treasure '{}' grants no item",
                t.name
            )));
        }
        if t.reward < 0 {
            errors.push(ValidationError::new(format!(
                "treasure '{}' has negative reward",
                t.name
            )));
        }
    }

    for a in &world.encounters.allies {
        if a.item.is_none() {
            errors.push(ValidationError::new(format!(
                "ally '{}' grants no gift",
                a.name
            )));
        }
    }

    errors
}
