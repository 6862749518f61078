use std::io::{self, Write};

use wayfarer::engine::{Output, OutputBlock};
use wayfarer::{DEFAULT_WORLD_TOML, GameState, load_world_from_str, validate_world};

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
                printed_anything = true;
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
        }
    }
}

fn read_line(stdin: &io::Stdin) -> io::Result<Option<String>> {
    let mut input = String::new();
    let bytes_read = stdin.read_line(&mut input)?;
    if bytes_read == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(input.trim().to_string()))
}

fn main() -> io::Result<()> {
    let world = match load_world_from_str(DEFAULT_WORLD_TOML) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load world definition: {e}");
            std::process::exit(1);
        }
    };

    let validation_errors = validate_world(&world);
    if !validation_errors.is_empty() {
        for err in &validation_errors {
            eprintln!("World validation error: {}", err.message);
        }
        std::process::exit(1);
    }

    println!("Welcome to {}!", world.name);
    if !world.desc.trim().is_empty() {
        println!("{}", world.desc.trim());
    }
    println!();

    let stdin = io::stdin();

    print!("Enter your name, adventurer: ");
    io::stdout().flush()?;

    let name = match read_line(&stdin)? {
        Some(n) if !n.is_empty() => n,
        Some(_) => "Adventurer".to_string(),
        None => {
            println!("\nGoodbye.");
            return Ok(());
        }
    };

    let mut state = GameState::new(world, name);
    flush_output(state.initialize());

    loop {
        print!("\n{}", state.prompt());
        io::stdout().flush()?;

        let input = match read_line(&stdin) {
            Ok(Some(line)) => line,
            // EOF or an interrupted read both end the session gracefully
            Ok(None) => {
                println!(
                    "\nThanks for playing, {}! See you next time!",
                    state.player.name
                );
                break;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                println!(
                    "\nThanks for playing, {}! See you next time!",
                    state.player.name
                );
                break;
            }
            Err(e) => return Err(e),
        };

        if input.is_empty() {
            continue;
        }

        let (out, quit) = state.step(&input);
        flush_output(out);

        if quit {
            break;
        }
    }

    Ok(())
}
