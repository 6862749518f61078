pub mod engine;
pub mod world;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use engine::{
    Output, Pending, Player, enter_location, render_help, render_inventory, render_status,
    resolve_pending,
};
use world::World;

pub use world::{load_world_from_str, validate_world};

/// The world definition compiled into the binary; the game touches no files
/// at runtime.
pub const DEFAULT_WORLD_TOML: &str = include_str!("../data/wayfarer.toml");

/// What the next line of input will be interpreted as.
enum Phase {
    /// Top-level commands: explore, status, inventory, heal, help, quit.
    Command,
    /// Answer to "where would you like to go?".
    ChoosingLocation,
    /// Answer to a location script's question.
    Pending(Pending),
}

pub struct GameState {
    pub world: World,
    pub player: Player,
    rng: ChaCha20Rng,
    phase: Phase,
}

impl GameState {
    pub fn new(world: World, name: impl Into<String>) -> Self {
        let player = Player::new(name, world.max_health);
        GameState {
            world,
            player,
            rng: ChaCha20Rng::from_entropy(),
            phase: Phase::Command,
        }
    }

    /// Seeded constructor: the whole run is deterministic for a given seed
    /// and input sequence.
    pub fn with_seed(world: World, name: impl Into<String>, seed: u64) -> Self {
        let player = Player::new(name, world.max_health);
        GameState {
            world,
            player,
            rng: ChaCha20Rng::seed_from_u64(seed),
            phase: Phase::Command,
        }
    }

    /// Welcome text and the command reference, shown once at game start.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        out.say(format!(
            "Welcome, {}! Your journey begins...",
            self.player.name
        ));
        render_help(&mut out);
        out
    }

    /// The input prompt matching the current phase, so the front end never
    /// inspects game state.
    pub fn prompt(&self) -> String {
        match &self.phase {
            Phase::Command => format!("[{}] > ", self.player.name),
            Phase::ChoosingLocation => {
                format!(
                    "Where would you like to go? [{}]: ",
                    self.world.location_ids().join("/")
                )
            }
            Phase::Pending(p) => p.prompt().to_string(),
        }
    }

    /// Process a single line of player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();
        let mut quit = false;
        let answer = input.trim().to_lowercase();

        match std::mem::replace(&mut self.phase, Phase::Command) {
            Phase::Command => self.handle_command(&mut out, &answer, &mut quit),
            Phase::ChoosingLocation => {
                if let Some(location) = self.world.location(&answer) {
                    if let Some(pending) = enter_location(
                        &mut out,
                        &mut self.player,
                        &self.world,
                        &mut self.rng,
                        location,
                    ) {
                        self.phase = Phase::Pending(pending);
                    }
                } else {
                    out.say(format!(
                        "Unknown location. Try: {}",
                        oxford_or(&self.world.location_ids())
                    ));
                }
            }
            Phase::Pending(pending) => {
                resolve_pending(&mut out, &mut self.player, &mut self.rng, &pending, &answer);
            }
        }

        // Death ends the loop no matter what the turn did
        if !self.player.is_alive() {
            quit = true;
        }

        (out, quit)
    }

    fn handle_command(&mut self, out: &mut Output, command: &str, quit: &mut bool) {
        match command {
            "quit" | "exit" => {
                out.say(format!("Thanks for playing, {}!", self.player.name));
                out.say(format!("Final Score: {} XP", self.player.score));
                out.say("Goodbye!");
                *quit = true;
            }
            "explore" => {
                self.phase = Phase::ChoosingLocation;
            }
            "status" => render_status(out, &self.player),
            "inventory" | "i" => render_inventory(out, &self.player),
            "heal" => {
                if self.player.remove_item("Healing Potion") {
                    self.player.heal(out, 50);
                } else {
                    out.say("You don't have a Healing Potion!");
                }
            }
            "help" => render_help(out),
            _ => out.say("Unknown command. Type 'help' for available commands."),
        }
    }
}

/// "a, b, c, or d" for the unknown-location message.
fn oxford_or(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
    }
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        prompt: String,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a TOML world string and an explicit RNG
        /// seed. Call `init()` to get the welcome output.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str, name: &str, seed: u64) -> Result<WasmGame, JsValue> {
            let world = world::load_world_from_str(world_toml)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                state: GameState::with_seed(world, name, seed),
            })
        }

        /// Welcome output and the first prompt.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            let out = self.state.initialize();
            to_value(&WasmStepResult {
                blocks: out.blocks,
                prompt: self.state.prompt(),
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks,
        /// the next prompt, and the quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = self.state.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                prompt: self.state.prompt(),
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}
