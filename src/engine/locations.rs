use rand::Rng;

use crate::engine::encounters::random_encounter;
use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::world::{Encounter, EncounterKind, Location, World};

/// A follow-up question the current location script is waiting on. Held by
/// the dispatcher between turns; nothing else persists across script calls
/// beyond the Player itself.
#[derive(Debug, Clone)]
pub enum Pending {
    ForestMonster(Encounter),
    CaveMonster(Encounter),
    CastleMonster(Encounter),
    Village,
}

impl Pending {
    pub fn prompt(&self) -> &'static str {
        match self {
            Pending::ForestMonster(_) => "Do you [fight], [run], or [negotiate]? ",
            Pending::CaveMonster(_) => "Do you [fight], [run], or [sneak]? ",
            Pending::CastleMonster(_) => "Do you [challenge], [retreat], or [use magic]? ",
            Pending::Village => {
                "Do you [visit tavern], [trade with merchant], or [help villager]? "
            }
        }
    }
}

/// Enter a location: print the banner, set the player's location label, and
/// either resolve a non-monster encounter on the spot or hand back the
/// question the player must answer next turn.
pub fn enter_location<R: Rng>(
    out: &mut Output,
    player: &mut Player,
    world: &World,
    rng: &mut R,
    location: &Location,
) -> Option<Pending> {
    out.title(&location.flavor);
    player.location = location.name.clone();

    use crate::world::LocationKind::*;
    match location.kind {
        Village => {
            // The village has no random encounter, just its activity menu.
            Some(Pending::Village)
        }
        Forest | Cave | Castle => {
            let encounter = match random_encounter(world, rng) {
                Some(e) => e,
                None => return None, // empty table; validated against at load
            };

            match encounter.kind {
                EncounterKind::Monster => {
                    let line = match location.kind {
                        Forest => format!("A wild {} appears!", encounter.name),
                        Cave => format!("A {} emerges from the shadows!", encounter.name),
                        _ => format!("A powerful {} guards the castle!", encounter.name),
                    };
                    out.say(line);

                    let pending = match location.kind {
                        Forest => Pending::ForestMonster(encounter.clone()),
                        Cave => Pending::CaveMonster(encounter.clone()),
                        _ => Pending::CastleMonster(encounter.clone()),
                    };
                    Some(pending)
                }
                EncounterKind::Treasure => {
                    out.say(format!("You discover a {}!", encounter.name));
                    if let Some(item) = &encounter.item {
                        player.add_item(out, item.clone());
                    }
                    player.add_score(out, encounter.reward + location.treasure_bonus);
                    None
                }
                EncounterKind::Ally => {
                    out.say(format!("You meet a {}!", encounter.name));
                    if let Some(gift) = &encounter.item {
                        player.add_item(out, gift.clone());
                    }
                    player.add_score(out, encounter.reward + location.ally_bonus);
                    None
                }
            }
        }
    }
}

/// Resolve the answer to a pending question. `answer` is lowercase-trimmed;
/// anything unrecognized falls through to the script's default branch.
pub fn resolve_pending<R: Rng>(
    out: &mut Output,
    player: &mut Player,
    rng: &mut R,
    pending: &Pending,
    answer: &str,
) {
    match pending {
        Pending::ForestMonster(m) => forest_monster(out, player, rng, m, answer),
        Pending::CaveMonster(m) => cave_monster(out, player, rng, m, answer),
        Pending::CastleMonster(m) => castle_monster(out, player, rng, m, answer),
        Pending::Village => village_activity(out, player, rng, answer),
    }
}

fn forest_monster<R: Rng>(
    out: &mut Output,
    player: &mut Player,
    rng: &mut R,
    monster: &Encounter,
    answer: &str,
) {
    match answer {
        "fight" => {
            out.say(format!("You bravely fight the {}!", monster.name));
            let low = monster.damage.min(5);
            let damage = rng.gen_range(low..=monster.damage);
            player.take_damage(out, damage);
            player.add_item(out, format!("Tattered Fur from {}", monster.name));
            player.add_score(out, 50);
            out.say(format!("You took {} damage but won the battle!", damage));
        }
        "run" => {
            out.say("You escape safely, but miss out on potential treasure.");
            player.add_score(out, 10);
        }
        "negotiate" => {
            if rng.gen_bool(0.5) {
                out.say("The creature agrees to let you pass safely.");
                player.add_score(out, 20);
            } else {
                out.say("The creature is not interested in negotiating!");
                player.take_damage(out, 10);
            }
        }
        _ => {
            out.say("You hesitate in confusion... the creature attacks!");
            player.take_damage(out, 20);
        }
    }
}

fn cave_monster<R: Rng>(
    out: &mut Output,
    player: &mut Player,
    rng: &mut R,
    monster: &Encounter,
    answer: &str,
) {
    match answer {
        "fight" => {
            out.say(format!("Intense battle with {}!", monster.name));
            let low = monster.damage.min(10);
            let damage = rng.gen_range(low..=monster.damage);
            player.take_damage(out, damage);
            player.add_item(out, format!("Fang of {}", monster.name));
            player.add_score(out, 75);
            out.say(format!("You took {} damage but won!", damage));
        }
        "run" => {
            out.say("You sprint back out of the cave!");
            player.add_score(out, 15);
        }
        "sneak" => {
            if rng.gen_bool(0.4) {
                out.say("You sneak past the monster unnoticed!");
                player.add_score(out, 35);
            } else {
                out.say("You step on loose rocks and alert the monster!");
                player.take_damage(out, 25);
            }
        }
        _ => {
            out.say("You panic! The monster attacks!");
            player.take_damage(out, 30);
        }
    }
}

fn castle_monster<R: Rng>(
    out: &mut Output,
    player: &mut Player,
    rng: &mut R,
    monster: &Encounter,
    answer: &str,
) {
    match answer {
        "challenge" => {
            out.say(format!("BOSS BATTLE: {}!", monster.name));
            if rng.gen_bool(0.6) {
                out.say("You defeat the boss! The castle is yours!");
                player.add_item(out, "Crown of Kings");
                player.add_item(out, "Royal Scepter");
                player.add_score(out, 200);
            } else {
                out.say("The boss is too powerful!");
                player.take_damage(out, 50);
            }
        }
        "retreat" => {
            out.say("You wisely retreat from this challenge.");
            player.add_score(out, 20);
        }
        "use magic" => {
            if player.has_item("Mystical Gem") || player.has_item("Legendary Scroll") {
                out.say("Your magic overwhelms the guardian!");
                player.add_score(out, 150);
            } else {
                out.say("You lack the magical knowledge!");
                player.take_damage(out, 35);
            }
        }
        _ => {
            out.say("You stand frozen in awe. The guardian attacks!");
            player.take_damage(out, 45);
        }
    }
}

fn village_activity<R: Rng>(out: &mut Output, player: &mut Player, rng: &mut R, answer: &str) {
    match answer {
        "visit tavern" => {
            out.say("You enjoy warm ale and hear tales of adventure.");
            if rng.gen_bool(0.5) {
                out.say("A patron gifts you a map!");
                player.add_item(out, "Worn Map");
                player.add_score(out, 30);
            } else {
                out.say("You rest and recover.");
                player.heal(out, 30);
            }
        }
        "trade with merchant" => {
            out.say("The merchant offers rare items for sale.");
            if player.has_item("Gold Coins") {
                out.say("You trade your Gold Coins for a Legendary Scroll!");
                player.remove_item("Gold Coins");
                player.add_item(out, "Legendary Scroll");
                player.add_score(out, 40);
            } else {
                out.say("You don't have items the merchant wants.");
            }
        }
        "help villager" => {
            out.say("An elderly villager thanks you for your kindness.");
            player.heal(out, 20);
            player.add_score(out, 50);
        }
        _ => {
            // The village default is harmless, unlike the monster scripts.
            out.say("You wander around the village aimlessly.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::EncounterKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn world() -> World {
        crate::world::load_world_from_str(crate::DEFAULT_WORLD_TOML).unwrap()
    }

    fn player(world: &World) -> Player {
        Player::new("Tamsin", world.max_health)
    }

    fn monster(damage: i32) -> Encounter {
        Encounter {
            kind: EncounterKind::Monster,
            name: "Troll".to_string(),
            damage,
            reward: 0,
            item: None,
        }
    }

    #[test]
    fn forest_fight_damages_rewards_and_grants_a_trophy() {
        let world = world();
        let mut p = player(&world);
        let mut out = Output::new();
        let mut rng = ChaCha20Rng::seed_from_u64(11);

        let m = monster(35);
        resolve_pending(&mut out, &mut p, &mut rng, &Pending::ForestMonster(m), "fight");

        let taken = world.max_health - p.health;
        assert!((5..=35).contains(&taken));
        assert_eq!(p.score, 50);
        assert!(p.has_item("Tattered Fur from Troll"));
    }

    #[test]
    fn unrecognized_forest_answer_hits_the_penalty_branch() {
        let world = world();
        let mut p = player(&world);
        let mut out = Output::new();
        let mut rng = ChaCha20Rng::seed_from_u64(3);

        let m = monster(15);
        resolve_pending(&mut out, &mut p, &mut rng, &Pending::ForestMonster(m), "dance");

        assert_eq!(p.health, world.max_health - 20);
        assert_eq!(p.score, 0);
        assert!(p.inventory.is_empty());
    }

    #[test]
    fn cave_fight_handles_a_weak_monster_without_panicking() {
        let world = world();
        let mut p = player(&world);
        let mut out = Output::new();
        let mut rng = ChaCha20Rng::seed_from_u64(5);

        // damage below the usual floor of 10
        let m = monster(8);
        resolve_pending(&mut out, &mut p, &mut rng, &Pending::CaveMonster(m), "fight");

        assert_eq!(p.health, world.max_health - 8);
        assert_eq!(p.score, 75);
    }

    #[test]
    fn health_never_drops_below_zero() {
        let world = world();
        let mut p = player(&world);
        let mut out = Output::new();
        let mut rng = ChaCha20Rng::seed_from_u64(9);

        let m = monster(40);
        for _ in 0..20 {
            resolve_pending(
                &mut out,
                &mut p,
                &mut rng,
                &Pending::CastleMonster(m.clone()),
                "freeze",
            );
            assert!(p.health >= 0);
        }
        assert!(!p.is_alive());
    }

    #[test]
    fn castle_magic_needs_a_gem_or_scroll() {
        let world = world();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let m = monster(40);

        let mut broke = player(&world);
        let mut out = Output::new();
        resolve_pending(
            &mut out,
            &mut broke,
            &mut rng,
            &Pending::CastleMonster(m.clone()),
            "use magic",
        );
        assert_eq!(broke.health, world.max_health - 35);
        assert_eq!(broke.score, 0);

        let mut adept = player(&world);
        let mut out = Output::new();
        adept.add_item(&mut out, "Mystical Gem");
        resolve_pending(
            &mut out,
            &mut adept,
            &mut rng,
            &Pending::CastleMonster(m),
            "use magic",
        );
        assert_eq!(adept.health, world.max_health);
        assert_eq!(adept.score, 150);
    }

    #[test]
    fn merchant_trade_swaps_coins_for_a_scroll() {
        let world = world();
        let mut p = player(&world);
        let mut out = Output::new();
        let mut rng = ChaCha20Rng::seed_from_u64(2);

        p.add_item(&mut out, "Gold Coins");
        resolve_pending(&mut out, &mut p, &mut rng, &Pending::Village, "trade with merchant");

        assert!(!p.has_item("Gold Coins"));
        assert!(p.has_item("Legendary Scroll"));
        assert_eq!(p.score, 40);
    }

    #[test]
    fn merchant_without_coins_changes_nothing() {
        let world = world();
        let mut p = player(&world);
        let mut rng = ChaCha20Rng::seed_from_u64(2);

        let before = p.clone();
        let mut out = Output::new();
        resolve_pending(&mut out, &mut p, &mut rng, &Pending::Village, "trade with merchant");
        assert_eq!(p, before);
    }

    #[test]
    fn helping_a_villager_heals_within_the_cap() {
        let world = world();
        let mut p = player(&world);
        let mut out = Output::new();
        let mut rng = ChaCha20Rng::seed_from_u64(6);

        resolve_pending(&mut out, &mut p, &mut rng, &Pending::Village, "help villager");
        assert_eq!(p.health, world.max_health);
        assert_eq!(p.score, 50);
    }

    #[test]
    fn entering_the_village_asks_for_an_activity() {
        let world = world();
        let mut p = player(&world);
        let mut out = Output::new();
        let mut rng = ChaCha20Rng::seed_from_u64(4);

        let village = world.location("village").unwrap();
        let pending = enter_location(&mut out, &mut p, &world, &mut rng, village);

        assert!(matches!(pending, Some(Pending::Village)));
        assert_eq!(p.location, "Peaceful Village");
    }

    #[test]
    fn entering_the_forest_either_resolves_or_asks_a_question() {
        let world = world();
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let forest = world.location("forest").unwrap();

        for _ in 0..50 {
            let mut p = player(&world);
            let mut out = Output::new();
            let pending = enter_location(&mut out, &mut p, &world, &mut rng, forest);

            match pending {
                Some(Pending::ForestMonster(_)) => {
                    // Question pending: nothing applied yet
                    assert_eq!(p.health, world.max_health);
                    assert!(p.inventory.is_empty());
                }
                None => {
                    // Treasure or ally: item plus reward, no damage
                    assert_eq!(p.inventory.len(), 1);
                    assert!(p.score > 0);
                    assert_eq!(p.health, world.max_health);
                }
                other => panic!("forest returned unexpected pending: {:?}", other),
            }
        }
    }
}
