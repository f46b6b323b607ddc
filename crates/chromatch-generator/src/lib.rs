//! Target generation for the chromatch puzzle.
//!
//! A target is built by picking a few distinct base colors, giving each an
//! integer weight, and mixing them. The weights are kept as the target's
//! ratio vector, so every generated target has an exact solution.
//!
//! - [`TargetGenerator`] runs the generation algorithm over a [`Palette`].
//! - [`DifficultyProfile`] bounds how many colors and how large the weights are.
//! - [`RandomSource`] is the seam all draws go through; any [`rand::RngCore`]
//!   implements it.
//! - [`TargetSeed`] makes generation reproducible.
//!
//! [`Palette`]: chromatch_core::Palette

pub use self::{
    difficulty::{CountRange, DifficultyProfile, ProfileError},
    generator::{GeneratedTarget, Target, TargetGenerator},
    random::RandomSource,
    seed::{SeedParseError, TargetSeed},
};

mod difficulty;
mod generator;
mod random;
mod seed;
pub mod testing;
