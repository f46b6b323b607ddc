//! Core color model for the chromatch puzzle.
//!
//! This crate holds the stateless color arithmetic shared by target generation
//! and the game engine.
//!
//! # Overview
//!
//! - [`rgb`]: the fractional [`Rgb`] triple, hex parsing ([`hex_to_rgb`],
//!   failing closed) and rendering ([`rgb_to_hex`]), distance and luminance.
//! - [`amounts`]: [`AmountVector`], the per-color unit counts of a mix.
//! - [`palette`]: [`Palette`] of named [`PaletteColor`]s and the weighted
//!   centroid [`mix_colors`].
//!
//! # Examples
//!
//! ```
//! use chromatch_core::{Palette, Rgb};
//!
//! let palette = Palette::standard();
//! let mut amounts = palette.zero_amounts();
//!
//! // One unit of white and one of black mix to mid grey.
//! amounts.increment(4);
//! amounts.increment(5);
//! assert_eq!(palette.mix(&amounts), Rgb::new(127.5, 127.5, 127.5));
//! ```

pub mod amounts;
pub mod palette;
pub mod rgb;

pub use self::{
    amounts::AmountVector,
    palette::{Palette, PaletteColor, mix_colors},
    rgb::{HexParseError, Rgb, hex_to_rgb, rgb_to_hex},
};
