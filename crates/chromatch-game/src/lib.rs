//! Game session management for the chromatch color-mixing puzzle.
//!
//! This crate provides [`PuzzleEngine`], which owns one puzzle session: the
//! palette, the player's per-color amounts, the current target, and the
//! active difficulty. Front ends call its operations in response to input and
//! render what its accessors return; they never repeat the mixing or scoring
//! math themselves.
//!
//! # Overview
//!
//! - [`PuzzleEngine`]: round lifecycle (`increment`, `decrement`, `reset`,
//!   `next_target`, `set_difficulty`, `generate_target`, `reveal_solution`)
//!   and read accessors.
//! - [`MixState`]: the current mix, with an explicit empty state.
//! - [`MatchScore`]: percentage closeness between mix and target.
//! - [`GameConfig`]: palette and difficulty table, loadable from JSON.
//!
//! # Example
//!
//! ```
//! use chromatch_game::{GameConfig, PuzzleEngine};
//! use chromatch_generator::TargetSeed;
//!
//! let mut engine =
//!     PuzzleEngine::with_seed(GameConfig::default(), TargetSeed::from_phrase("example")).unwrap();
//!
//! engine.set_difficulty("easy").unwrap();
//! assert_eq!(engine.visible_count(), 4);
//!
//! engine.increment(1).unwrap();
//! engine.increment(3).unwrap();
//! println!("mix {} scores {}%", engine.mix_state().css_color(), engine.compute_match());
//! ```

pub use self::{
    config::GameConfig,
    engine::PuzzleEngine,
    error::{ConfigError, GameError},
    score::{MatchScore, MixState},
};

mod config;
mod engine;
mod error;
mod score;
