use crate::engine::output::Output;

/// The adventurer. Mutated in place by every location script; all
/// user-visible consequences go through the `Output` buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub score: i32,
    /// Ordered; duplicates allowed (two Gold Coins are two entries).
    pub inventory: Vec<String>,
    /// Display label of the last location entered.
    pub location: String,
}

impl Player {
    pub fn new(name: impl Into<String>, max_health: i32) -> Self {
        Player {
            name: name.into(),
            health: max_health,
            max_health,
            score: 0,
            inventory: Vec::new(),
            location: "starting area".to_string(),
        }
    }

    pub fn add_item(&mut self, out: &mut Output, item: impl Into<String>) {
        let item = item.into();
        out.event(format!("Gained: {}", item));
        self.inventory.push(item);
    }

    /// Remove the first matching item. No-op (returning false) if absent.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Reduce health, clamping at zero. Announces defeat on reaching zero.
    pub fn take_damage(&mut self, out: &mut Output, damage: i32) {
        self.health = (self.health - damage).max(0);
        if self.health == 0 {
            out.event(format!("{} has been defeated!", self.name));
        }
    }

    /// Restore health up to max_health.
    pub fn heal(&mut self, out: &mut Output, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
        out.event(format!(
            "Healed {} HP! Current health: {}/{}",
            amount, self.health, self.max_health
        ));
    }

    /// Award points. Negative amounts are allowed; score is unbounded.
    pub fn add_score(&mut self, out: &mut Output, points: i32) {
        self.score += points;
        out.event(format!(
            "Gained {} points! Total score: {}",
            points, self.score
        ));
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
