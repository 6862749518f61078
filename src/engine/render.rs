use crate::engine::output::Output;
use crate::engine::player::Player;

/// Ten-cell health bar scaled to max_health.
fn health_bar(health: i32, max_health: i32) -> String {
    let filled = if max_health > 0 {
        (health * 10 / max_health).clamp(0, 10) as usize
    } else {
        0
    };
    format!("[{}{}]", "█".repeat(filled), "░".repeat(10 - filled))
}

pub fn render_status(out: &mut Output, player: &Player) {
    out.title(format!("STATUS - {}", player.name));
    out.say(format!(
        "Health:    {}/{} {}",
        player.health,
        player.max_health,
        health_bar(player.health, player.max_health)
    ));
    out.say(format!("Score:     {} XP", player.score));
    out.say(format!("Location:  {}", player.location));
    out.say(format!("Inventory ({} items):", player.inventory.len()));

    if player.inventory.is_empty() {
        out.say("  (empty)");
    } else {
        for (i, item) in player.inventory.iter().enumerate() {
            out.say(format!("  {}. {}", i + 1, item));
        }
    }
}

pub fn render_inventory(out: &mut Output, player: &Player) {
    out.say(format!(
        "{}'s Inventory ({} items):",
        player.name,
        player.inventory.len()
    ));

    if player.inventory.is_empty() {
        out.say("  (empty)");
    } else {
        for item in &player.inventory {
            out.say(format!("  - {}", item));
        }
    }
}

pub fn render_help(out: &mut Output) {
    out.title("AVAILABLE COMMANDS");
    out.say("  explore   - Go to a location to adventure");
    out.say("  status    - View your health, inventory, and score");
    out.say("  inventory - List all items in your inventory");
    out.say("  heal      - Use a Healing Potion if you have one");
    out.say("  help      - Show this menu");
    out.say("  quit      - Exit the game");
}
