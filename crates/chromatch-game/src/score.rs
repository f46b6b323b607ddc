use std::fmt::{self, Display};

use chromatch_core::Rgb;

/// What the player's current mix looks like.
///
/// An empty mix is reported as [`MixState::Empty`] instead of black, so front
/// ends can render "no color yet" (e.g. transparent) rather than confusing it
/// with a mix that really is black.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum MixState {
    /// No units have been added.
    Empty,
    /// The weighted-centroid color of the added units.
    Mixed(Rgb),
}

impl MixState {
    /// The mixed color, or `None` for an empty mix.
    #[must_use]
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Self::Empty => None,
            Self::Mixed(rgb) => Some(*rgb),
        }
    }

    /// A CSS color for the mix: `transparent` when empty, `#RRGGBB` otherwise.
    #[must_use]
    pub fn css_color(&self) -> String {
        match self {
            Self::Empty => "transparent".to_owned(),
            Self::Mixed(rgb) => rgb.to_hex(),
        }
    }
}

/// How closely a mix matches the target, as a percentage in `0.0..=100.0`.
///
/// Displays with one decimal place.
///
/// # Example
///
/// ```
/// use chromatch_core::Rgb;
/// use chromatch_game::MatchScore;
///
/// let score = MatchScore::between(Rgb::new(127.5, 127.5, 127.5), Rgb::WHITE);
/// assert_eq!(score.to_string(), "50.0");
/// assert!(!score.is_great());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct MatchScore(f64);

impl MatchScore {
    /// The score of an empty mix.
    pub const ZERO: Self = Self(0.0);

    /// Scores at or above this are considered a great match.
    pub const GREAT_THRESHOLD: f64 = 99.0;

    /// Scores `mix` against `target`.
    ///
    /// The Euclidean RGB distance is normalized by [`Rgb::MAX_DISTANCE`], so
    /// identical colors score 100 and opposite corners of the RGB cube score 0.
    #[must_use]
    pub fn between(mix: Rgb, target: Rgb) -> Self {
        let distance = mix.distance(&target);
        Self((100.0 * (1.0 - distance / Rgb::MAX_DISTANCE)).max(0.0))
    }

    /// The score as a percentage.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the score reaches [`GREAT_THRESHOLD`](Self::GREAT_THRESHOLD).
    #[must_use]
    pub fn is_great(&self) -> bool {
        self.0 >= Self::GREAT_THRESHOLD
    }
}

impl Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
