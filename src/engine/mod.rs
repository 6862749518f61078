mod encounters;
mod locations;
mod output;
mod player;
mod render;

pub use encounters::random_encounter;
pub use locations::{Pending, enter_location, resolve_pending};
pub use output::{Output, OutputBlock};
pub use player::Player;
pub use render::{render_help, render_inventory, render_status};
