//! Difficulty profiles that shape target generation.

/// An inclusive integer range `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CountRange {
    /// Smallest allowed value.
    pub min: u32,
    /// Largest allowed value.
    pub max: u32,
}

impl CountRange {
    /// Creates the range `min..=max`.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies in the range.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Configuration for how targets of one difficulty are built.
///
/// # Examples
///
/// ```
/// use chromatch_generator::DifficultyProfile;
///
/// let easy = DifficultyProfile::easy();
/// assert_eq!(easy.visible_count(6), 4);
/// assert!(easy.validate(6).is_ok());
///
/// // Five colors cannot be drawn from four visible ones.
/// let mut broken = DifficultyProfile::hard();
/// broken.visible_base_colors = Some(4);
/// assert!(broken.validate(6).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DifficultyProfile {
    /// How many distinct base colors a target is mixed from.
    pub num_colors: CountRange,
    /// Range of the integer weight given to each chosen color.
    pub weights_range: CountRange,
    /// How many leading palette entries are exposed to the player and used for
    /// generation. `None` exposes the whole palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_base_colors: Option<usize>,
}

/// Reasons a [`DifficultyProfile`] cannot be used with a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ProfileError {
    /// A range has `min > max`.
    #[display("{field} range is empty: {min}..={max}")]
    EmptyRange {
        /// Name of the offending field.
        field: &'static str,
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },
    /// Targets would be allowed to use no colors at all.
    #[display("num_colors.min must be at least 1")]
    ZeroColors,
    /// A chosen color could receive a weight of zero.
    #[display("weights_range.min must be at least 1")]
    ZeroWeight,
    /// The visible color count is zero or exceeds the palette.
    #[display("visible_base_colors must be in 1..={palette_len}, found {visible}")]
    InvalidVisibleCount {
        /// Configured visible count.
        visible: usize,
        /// Palette length.
        palette_len: usize,
    },
    /// More distinct colors are requested than are visible.
    #[display("num_colors.max ({max}) exceeds the {visible} visible colors")]
    TooManyColors {
        /// Configured `num_colors.max`.
        max: u32,
        /// Effective visible count.
        visible: usize,
    },
}

impl DifficultyProfile {
    /// 2-3 colors with weights 1-3, drawn from the first 4 palette colors.
    #[must_use]
    pub const fn easy() -> Self {
        Self {
            num_colors: CountRange::new(2, 3),
            weights_range: CountRange::new(1, 3),
            visible_base_colors: Some(4),
        }
    }

    /// 2-4 colors with weights 1-5, drawn from the first 5 palette colors.
    #[must_use]
    pub const fn medium() -> Self {
        Self {
            num_colors: CountRange::new(2, 4),
            weights_range: CountRange::new(1, 5),
            visible_base_colors: Some(5),
        }
    }

    /// 3-5 colors with weights 1-7, drawn from the first 6 palette colors.
    #[must_use]
    pub const fn hard() -> Self {
        Self {
            num_colors: CountRange::new(3, 5),
            weights_range: CountRange::new(1, 7),
            visible_base_colors: Some(6),
        }
    }

    /// Number of leading palette entries this profile exposes.
    ///
    /// Falls back to `palette_len` when no limit is configured.
    #[must_use]
    pub fn visible_count(&self, palette_len: usize) -> usize {
        self.visible_base_colors.unwrap_or(palette_len)
    }

    /// Checks that targets can be generated with this profile over a palette
    /// of `palette_len` colors.
    ///
    /// Generation draws distinct colors by rejection, so it only terminates
    /// when `num_colors.max` does not exceed the visible count.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProfileError`] found.
    pub fn validate(&self, palette_len: usize) -> Result<(), ProfileError> {
        for (field, range) in [
            ("num_colors", self.num_colors),
            ("weights_range", self.weights_range),
        ] {
            if range.min > range.max {
                return Err(ProfileError::EmptyRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if self.num_colors.min == 0 {
            return Err(ProfileError::ZeroColors);
        }
        if self.weights_range.min == 0 {
            return Err(ProfileError::ZeroWeight);
        }
        let visible = self.visible_count(palette_len);
        if visible == 0 || visible > palette_len {
            return Err(ProfileError::InvalidVisibleCount {
                visible,
                palette_len,
            });
        }
        let fits = usize::try_from(self.num_colors.max).is_ok_and(|max| max <= visible);
        if !fits {
            return Err(ProfileError::TooManyColors {
                max: self.num_colors.max,
                visible,
            });
        }
        Ok(())
    }
}
