use chromatch_generator::ProfileError;

/// Errors produced while loading or validating a [`GameConfig`](crate::GameConfig).
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    /// The configuration is not valid JSON for [`GameConfig`](crate::GameConfig).
    #[display("failed to parse configuration: {_0}")]
    Json(#[from] serde_json::Error),
    /// The palette has no colors.
    #[display("palette must contain at least one color")]
    EmptyPalette,
    /// The default difficulty is not in the difficulty table.
    #[display("default difficulty {name:?} is not defined")]
    UnknownDefaultDifficulty {
        /// The configured default.
        name: String,
    },
    /// A difficulty profile cannot be used with the palette.
    #[display("difficulty {name:?} is invalid: {source}")]
    InvalidProfile {
        /// Key of the offending profile.
        name: String,
        /// Why the profile was rejected.
        source: ProfileError,
    },
}

/// Errors returned by [`PuzzleEngine`](crate::PuzzleEngine) operations.
///
/// A failed operation leaves the engine state unchanged.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A color index at or beyond the visible count was used.
    #[display("color index {index} is out of range (only {visible} colors are visible)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Visible colors under the active difficulty.
        visible: usize,
    },
    /// No difficulty with this name is configured.
    #[display("unknown difficulty {name:?}")]
    UnknownDifficulty {
        /// The requested name.
        name: String,
    },
    /// A custom difficulty profile cannot be used with the palette.
    #[display("invalid difficulty profile: {_0}")]
    InvalidProfile(#[from] ProfileError),
    /// The engine configuration is invalid.
    #[display("invalid configuration: {_0}")]
    Config(#[from] ConfigError),
}
