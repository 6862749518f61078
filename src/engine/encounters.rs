use rand::Rng;
use rand::seq::SliceRandom;

use crate::world::{Encounter, EncounterKind, World};

/// Draw a random encounter: uniform over the three categories, then uniform
/// over the entries within the drawn category. The RNG is injected so the
/// whole game can run deterministically under a fixed seed.
///
/// Returns None only if the drawn category is empty (validate_world rejects
/// such tables up front).
pub fn random_encounter<'a, R: Rng>(world: &'a World, rng: &mut R) -> Option<&'a Encounter> {
    let kind = match rng.gen_range(0..3) {
        0 => EncounterKind::Monster,
        1 => EncounterKind::Treasure,
        _ => EncounterKind::Ally,
    };

    world.encounters.category(kind).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn world() -> World {
        crate::world::load_world_from_str(crate::DEFAULT_WORLD_TOML).unwrap()
    }

    #[test]
    fn draws_come_from_the_loaded_table() {
        let world = world();
        let mut rng = ChaCha20Rng::seed_from_u64(7);

        for _ in 0..200 {
            let enc = random_encounter(&world, &mut rng).unwrap();
            let category = world.encounters.category(enc.kind);
            assert!(category.iter().any(|e| e.name == enc.name));
        }
    }

    #[test]
    fn all_categories_are_reachable() {
        let world = world();
        let mut rng = ChaCha20Rng::seed_from_u64(42);

        let mut saw_monster = false;
        let mut saw_treasure = false;
        let mut saw_ally = false;

        for _ in 0..200 {
            match random_encounter(&world, &mut rng).unwrap().kind {
                EncounterKind::Monster => saw_monster = true,
                EncounterKind::Treasure => saw_treasure = true,
                EncounterKind::Ally => saw_ally = true,
            }
        }

        assert!(saw_monster && saw_treasure && saw_ally);
    }

    #[test]
    fn monster_entries_carry_damage_and_nothing_else() {
        let world = world();
        for m in &world.encounters.monsters {
            assert!(m.damage > 0);
            assert!(m.item.is_none());
        }
        for t in &world.encounters.treasures {
            assert!(t.item.is_some());
        }
    }
}
