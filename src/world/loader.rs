use serde::Deserialize;
use std::io;

use super::model::{Encounter, EncounterKind, EncounterTable, Location, LocationKind, World};

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    location: Vec<LocationConfig>, // [[location]] blocks
    #[serde(default)]
    monster: Vec<MonsterConfig>, // [[monster]] blocks
    #[serde(default)]
    treasure: Vec<TreasureConfig>, // [[treasure]] blocks
    #[serde(default)]
    ally: Vec<AllyConfig>, // [[ally]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default = "default_max_health")]
    max_health: i32,
}

// Helper for serde default
fn default_max_health() -> i32 {
    100
}

#[derive(Deserialize)]
struct LocationConfig {
    id: String,
    name: String,

    /// Which branching script runs here: "forest", "cave", "village", "castle".
    kind: String,

    #[serde(default)]
    flavor: String,

    #[serde(default)]
    treasure_bonus: i32,

    #[serde(default)]
    ally_bonus: i32,
}

#[derive(Deserialize)]
struct MonsterConfig {
    name: String,
    damage: i32,
}

#[derive(Deserialize)]
struct TreasureConfig {
    name: String,
    reward: i32,
    item: String,
}

#[derive(Deserialize)]
struct AllyConfig {
    name: String,
    reward: i32,
    gift: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

fn parse_location_kind(s: &str) -> Result<LocationKind, String> {
    match s {
        "forest" => Ok(LocationKind::Forest),
        "cave" => Ok(LocationKind::Cave),
        "village" => Ok(LocationKind::Village),
        "castle" => Ok(LocationKind::Castle),
        other => Err(format!(
            "unknown location kind '{}' (expected forest, cave, village, or castle)",
            other
        )),
    }
}

/// Public API: build a runtime `World` from a TOML world definition string.
pub fn load_world_from_str(contents: &str) -> io::Result<World> {
    let world_file: WorldFile = toml::from_str(contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    // Basic validation
    if world_file.world.name.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "world.name may not be empty",
        ));
    }

    // Build the location roster, preserving declaration order
    let mut locations: Vec<Location> = Vec::new();

    for lc in world_file.location {
        if locations.iter().any(|l| l.id == lc.id) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Duplicate location id: {}", lc.id),
            ));
        }

        let kind = parse_location_kind(&lc.kind)
            .map_err(|msg| io::Error::new(io::ErrorKind::InvalidData, msg))?;

        if lc.name.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Location '{}' has an empty name", lc.id),
            ));
        }

        locations.push(Location {
            id: lc.id,
            name: lc.name,
            flavor: lc.flavor,
            kind,
            treasure_bonus: lc.treasure_bonus,
            ally_bonus: lc.ally_bonus,
        });
    }

    // Build the encounter table
    let mut encounters = EncounterTable::default();

    for mc in world_file.monster {
        if mc.damage <= 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Monster '{}' must have positive damage", mc.name),
            ));
        }
        encounters.monsters.push(Encounter {
            kind: EncounterKind::Monster,
            name: mc.name,
            damage: mc.damage,
            reward: 0,
            item: None,
        });
    }

    for tc in world_file.treasure {
        encounters.treasures.push(Encounter {
            kind: EncounterKind::Treasure,
            name: tc.name,
            damage: 0,
            reward: tc.reward,
            item: Some(tc.item),
        });
    }

    for ac in world_file.ally {
        encounters.allies.push(Encounter {
            kind: EncounterKind::Ally,
            name: ac.name,
            damage: 0,
            reward: ac.reward,
            item: Some(ac.gift),
        });
    }

    Ok(World {
        name: world_file.world.name,
        desc: world_file.world.desc,
        max_health: world_file.world.max_health,
        locations,
        encounters,
    })
}
