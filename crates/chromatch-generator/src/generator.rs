use chromatch_core::{AmountVector, Palette, Rgb};

use crate::{DifficultyProfile, ProfileError, RandomSource, TargetSeed};

/// A puzzle target: the generating ratios and the color they mix to.
///
/// The ratios are an exact solution by construction, since the color is
/// computed from them with the same mixing formula the player's amounts use.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    ratios: AmountVector,
    color: Rgb,
}

impl Target {
    /// Builds a target from ratios, deriving its color by mixing them against
    /// `palette`.
    #[must_use]
    pub fn from_ratios(palette: &Palette, ratios: AmountVector) -> Self {
        let color = palette.mix(&ratios);
        Self { ratios, color }
    }

    /// The sparse ratio vector the target was mixed from.
    #[must_use]
    pub fn ratios(&self) -> &AmountVector {
        &self.ratios
    }

    /// The target color.
    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// A target together with the seed it was generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTarget {
    /// The generated target.
    pub target: Target,
    /// Seed that reproduces `target` via [`TargetGenerator::generate_with_seed`].
    pub seed: TargetSeed,
}

/// Generates solvable targets over a palette.
///
/// # Example
///
/// ```
/// use chromatch_core::Palette;
/// use chromatch_generator::{DifficultyProfile, TargetGenerator};
///
/// let palette = Palette::standard();
/// let generator = TargetGenerator::new(&palette);
/// let generated = generator.generate(&DifficultyProfile::hard()).unwrap();
///
/// let ratios = generated.target.ratios();
/// assert!((3..=5).contains(&ratios.non_zero_count()));
/// assert_eq!(palette.mix(ratios), generated.target.color());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TargetGenerator<'a> {
    palette: &'a Palette,
}

impl<'a> TargetGenerator<'a> {
    /// Creates a generator for `palette`.
    #[must_use]
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// The palette targets are mixed from.
    #[must_use]
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Generates a target from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if `profile` is invalid for the palette.
    pub fn generate(&self, profile: &DifficultyProfile) -> Result<GeneratedTarget, ProfileError> {
        self.generate_with_seed(profile, TargetSeed::random())
    }

    /// Generates the target determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if `profile` is invalid for the palette.
    pub fn generate_with_seed(
        &self,
        profile: &DifficultyProfile,
        seed: TargetSeed,
    ) -> Result<GeneratedTarget, ProfileError> {
        let mut rng = seed.to_rng();
        let target = self.generate_with_source(profile, &mut rng)?;
        Ok(GeneratedTarget { target, seed })
    }

    /// Generates a target, taking every random draw from `source`.
    ///
    /// The draws happen in a fixed order:
    ///
    /// 1. the number of colors `k` from `num_colors`;
    /// 2. palette indices from `0..visible`, discarding repeats, until `k`
    ///    distinct indices are chosen;
    /// 3. one weight from `weights_range` per chosen index, in the order the
    ///    indices were drawn.
    ///
    /// Unchosen entries of the ratio vector stay zero, and no index at or
    /// beyond the visible count is ever chosen.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if `profile` is invalid for the palette.
    pub fn generate_with_source<S>(
        &self,
        profile: &DifficultyProfile,
        source: &mut S,
    ) -> Result<Target, ProfileError>
    where
        S: RandomSource + ?Sized,
    {
        let palette_len = self.palette.len();
        profile.validate(palette_len)?;
        let visible = profile.visible_count(palette_len);
        // Validation bounds `visible` by the palette length and `k` by `visible`.
        let max_index = u32::try_from(visible - 1).unwrap_or(u32::MAX);

        let count = source.random_int(profile.num_colors.min, profile.num_colors.max) as usize;
        let mut chosen = Vec::with_capacity(count);
        while chosen.len() < count {
            let index = source.random_int(0, max_index) as usize;
            if chosen.contains(&index) {
                log::trace!("rejected duplicate color index {index}");
                continue;
            }
            chosen.push(index);
        }

        let mut ratios = vec![0; palette_len];
        for &index in &chosen {
            ratios[index] =
                source.random_int(profile.weights_range.min, profile.weights_range.max);
        }

        let target = Target::from_ratios(self.palette, AmountVector::from_vec(ratios));
        log::debug!(
            "generated target {} from {count} colors, ratios {:?}",
            target.color.to_hex(),
            target.ratios.as_slice()
        );
        Ok(target)
    }
}
