//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
#[derive(Debug)]
pub struct World {
    pub name: String,
    pub desc: String,
    pub max_health: i32,
    pub locations: Vec<Location>,
    pub encounters: EncounterTable,
}

/// Which scripted branching logic runs when the player enters a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Forest,
    Cave,
    Village,
    Castle,
}

#[derive(Debug)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub kind: LocationKind,
    /// Extra score granted on top of a treasure encounter's base reward.
    pub treasure_bonus: i32,
    /// Extra score granted on top of an ally encounter's base reward.
    pub ally_bonus: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterKind {
    Monster,
    Treasure,
    Ally,
}

/// One entry of the encounter table. Immutable after load.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub kind: EncounterKind,
    pub name: String,
    /// Upper bound of damage dealt (monsters only; zero otherwise).
    pub damage: i32,
    /// Score points granted when the encounter resolves in the player's favor.
    pub reward: i32,
    /// Item handed to the player (treasure loot or ally gift).
    pub item: Option<String>,
}

#[derive(Debug, Default)]
pub struct EncounterTable {
    pub monsters: Vec<Encounter>,
    pub treasures: Vec<Encounter>,
    pub allies: Vec<Encounter>,
}

impl EncounterTable {
    pub fn category(&self, kind: EncounterKind) -> &[Encounter] {
        match kind {
            EncounterKind::Monster => &self.monsters,
            EncounterKind::Treasure => &self.treasures,
            EncounterKind::Ally => &self.allies,
        }
    }
}

impl World {
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Location ids in declaration order, for the "where to?" prompt.
    pub fn location_ids(&self) -> Vec<&str> {
        self.locations.iter().map(|l| l.id.as_str()).collect()
    }
}
