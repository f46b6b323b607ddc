//! Terminal front end for the color-mixing puzzle.
//!
//! Reads one command per line from standard input and prints the state of
//! the mix after each one.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play
//! ```
//!
//! Start from a specific seed, phrase, difficulty or configuration file:
//!
//! ```sh
//! cargo run --example play -- --phrase "rainy day" --difficulty hard
//! cargo run --example play -- --config my-palette.json
//! ```
//!
//! # Commands
//!
//! - `+ <index>`: add one unit of a color
//! - `- <index>`: remove one unit of a color
//! - `reset`: clear the mix
//! - `next`: new target at the current difficulty
//! - `solve`: apply the exact solution
//! - `difficulty <name>`: switch difficulty (starts a new target)
//! - `difficulties`: list the configured difficulties
//! - `quit`: exit

use std::{
    fs,
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
    process,
};

use chromatch_game::{GameConfig, GameError, MixState, PuzzleEngine};
use chromatch_generator::TargetSeed;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<TargetSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Difficulty to start with instead of the configured default.
    #[arg(long, value_name = "NAME")]
    difficulty: Option<String>,

    /// JSON configuration file with a palette and difficulty table.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Debug)]
enum Command {
    Add(usize),
    Remove(usize),
    Reset,
    Next,
    Solve,
    Difficulty(String),
    ListDifficulties,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match (words.next()?, words.next()) {
        ("+", Some(index)) => Command::Add(index.parse().ok()?),
        ("-", Some(index)) => Command::Remove(index.parse().ok()?),
        ("reset", None) => Command::Reset,
        ("next", None) => Command::Next,
        ("solve", None) => Command::Solve,
        ("difficulty", Some(name)) => Command::Difficulty(name.to_owned()),
        ("difficulties", None) => Command::ListDifficulties,
        ("quit" | "exit", None) => Command::Quit,
        _ => return None,
    };
    words.next().is_none().then_some(command)
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|err| {
                eprintln!("Failed to read {}: {err}", path.display());
                process::exit(1);
            });
            GameConfig::from_json(&json).unwrap_or_else(|err| {
                eprintln!("{}: {err}", path.display());
                process::exit(1);
            })
        }
        None => GameConfig::default(),
    };
    let seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(TargetSeed::from_phrase));
    let engine = match seed {
        Some(seed) => {
            println!("Seed: {seed}");
            PuzzleEngine::with_seed(config, seed)
        }
        None => PuzzleEngine::with_random_seed(config),
    };
    let mut engine = engine.unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(1);
    });
    if let Some(name) = &args.difficulty {
        if let Err(err) = engine.set_difficulty(name) {
            eprintln!("{err}");
            process::exit(2);
        }
    }

    print_state(&engine);
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read input: {err}");
                process::exit(1);
            }
        }
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_command(&line) else {
            println!("Unknown command. Try `+ 0`, `- 0`, reset, next, solve, difficulties, quit.");
            continue;
        };
        match apply(&mut engine, command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => println!("{err}"),
        }
    }
}

fn apply(engine: &mut PuzzleEngine, command: Command) -> Result<bool, GameError> {
    match command {
        Command::Add(index) => engine.increment(index)?,
        Command::Remove(index) => {
            engine.decrement(index)?;
        }
        Command::Reset => engine.reset(),
        Command::Next => {
            engine.next_target()?;
        }
        Command::Solve => {
            engine.reveal_solution();
            println!("Solution applied.");
        }
        Command::Difficulty(name) => {
            engine.set_difficulty(&name)?;
        }
        Command::ListDifficulties => {
            let palette_len = engine.palette().len();
            for (name, profile) in &engine.config().difficulties {
                let active = engine.difficulty_name() == Some(name.as_str());
                let marker = if active { '*' } else { ' ' };
                println!(
                    "{marker} {name:<8} colors {}-{}, weights {}-{}, {} visible",
                    profile.num_colors.min,
                    profile.num_colors.max,
                    profile.weights_range.min,
                    profile.weights_range.max,
                    profile.visible_count(palette_len),
                );
            }
            return Ok(true);
        }
        Command::Quit => return Ok(false),
    }
    print_state(engine);
    Ok(true)
}

fn print_state(engine: &PuzzleEngine) {
    println!();
    println!(
        "Round {} ({})",
        engine.round(),
        engine.difficulty_name().unwrap_or("custom")
    );
    println!("  Target: {}", engine.target_color());
    let mix = match engine.mix_state() {
        MixState::Empty => "(empty)".to_owned(),
        MixState::Mixed(rgb) => rgb.to_hex(),
    };
    println!("  Mix:    {mix}");
    let score = engine.compute_match();
    if score.is_great() {
        println!("  Match:  {score}%  Great job!");
    } else {
        println!("  Match:  {score}%");
    }
    println!("  Colors:");
    let amounts = engine.amounts();
    for (index, color) in engine.palette().iter().enumerate().take(engine.visible_count()) {
        println!(
            "    [{index}] {:<10} {:>3} ({:.0}%)",
            color.name(),
            amounts[index],
            engine.amount_percentage(index)
        );
    }
}
