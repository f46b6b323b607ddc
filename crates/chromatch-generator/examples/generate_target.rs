//! Example demonstrating target generation.
//!
//! This example shows how to:
//! - Create a `TargetGenerator` over the standard palette
//! - Generate a target for a default difficulty profile
//! - Reproduce a target from its seed
//! - Sample many targets in parallel and summarize them
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_target
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run --example generate_target -- --difficulty hard
//! ```
//!
//! Reproduce a target from a printed seed, or derive the seed from a phrase:
//!
//! ```sh
//! cargo run --example generate_target -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! cargo run --example generate_target -- --phrase "autumn leaves"
//! ```
//!
//! Sample many targets and print how many base colors they use:
//!
//! ```sh
//! cargo run --example generate_target -- --difficulty medium --count 10000
//! ```

use std::{collections::BTreeMap, process};

use chromatch_core::Palette;
use chromatch_generator::{DifficultyProfile, GeneratedTarget, TargetGenerator, TargetSeed};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty profile to generate with.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: Difficulty,

    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<TargetSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Number of targets to sample.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let profile = match args.difficulty {
        Difficulty::Easy => DifficultyProfile::easy(),
        Difficulty::Medium => DifficultyProfile::medium(),
        Difficulty::Hard => DifficultyProfile::hard(),
    };
    let palette = Palette::standard();
    let generator = TargetGenerator::new(&palette);

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    if args.count == 1 {
        let seed = args
            .seed
            .or_else(|| args.phrase.as_deref().map(TargetSeed::from_phrase))
            .unwrap_or_else(TargetSeed::random);
        let generated = generator.generate_with_seed(&profile, seed).unwrap();
        print_target(&palette, &generated);
        return;
    }

    if args.seed.is_some() || args.phrase.is_some() {
        eprintln!("--seed and --phrase only apply to a single target.");
        process::exit(2);
    }

    let histogram = (0..args.count)
        .into_par_iter()
        .map(|_| {
            let generated = generator.generate(&profile).unwrap();
            generated.target.ratios().non_zero_count()
        })
        .fold(BTreeMap::new, |mut acc, colors| {
            *acc.entry(colors).or_insert(0_usize) += 1;
            acc
        })
        .reduce(BTreeMap::new, |mut a, b| {
            for (colors, n) in b {
                *a.entry(colors).or_insert(0) += n;
            }
            a
        });

    println!("Profile:");
    println!("  {profile:?}");
    println!();
    println!("Colors used ({} targets):", args.count);
    for (colors, n) in histogram {
        println!("  {colors}: {n}");
    }
}

fn print_target(palette: &Palette, generated: &GeneratedTarget) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Target:");
    println!("  {}", generated.target.color());
    println!();

    println!("Ratios:");
    for (color, ratio) in palette.iter().zip(generated.target.ratios()) {
        if ratio > 0 {
            println!("  {}: {ratio}", color.name());
        }
    }
}
