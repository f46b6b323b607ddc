use std::collections::BTreeMap;

use chromatch_core::{Palette, Rgb};
use chromatch_generator::DifficultyProfile;

use crate::ConfigError;

/// Palette and difficulty table for a [`PuzzleEngine`](crate::PuzzleEngine).
///
/// The default configuration uses [`Palette::standard`] and the `easy`,
/// `medium` and `hard` profiles, starting at `medium`. Configurations can be
/// loaded from JSON; missing fields fall back to the defaults.
///
/// # Example
///
/// ```
/// use chromatch_game::GameConfig;
///
/// let config = GameConfig::from_json(
///     r##"{
///         "palette": [
///             { "name": "red", "hex": "#FF0000" },
///             { "name": "blue", "hex": "#0000FF" }
///         ],
///         "difficulties": {
///             "duo": {
///                 "num_colors": { "min": 2, "max": 2 },
///                 "weights_range": { "min": 1, "max": 4 }
///             }
///         },
///         "default_difficulty": "duo"
///     }"##,
/// )
/// .unwrap();
///
/// assert_eq!(config.palette.len(), 2);
/// assert!(config.difficulty("duo").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Base colors available for mixing.
    pub palette: Palette,
    /// Difficulty profiles by name.
    pub difficulties: BTreeMap<String, DifficultyProfile>,
    /// Difficulty the engine starts with.
    pub default_difficulty: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        let difficulties = [
            ("easy", DifficultyProfile::easy()),
            ("medium", DifficultyProfile::medium()),
            ("hard", DifficultyProfile::hard()),
        ]
        .into_iter()
        .map(|(name, profile)| (name.to_owned(), profile))
        .collect();
        Self {
            palette: Palette::standard(),
            difficulties,
            default_difficulty: "medium".to_owned(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or any error from
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Looks up a difficulty profile by name.
    #[must_use]
    pub fn difficulty(&self, name: &str) -> Option<&DifficultyProfile> {
        self.difficulties.get(name)
    }

    /// Checks that the configuration can drive a game.
    ///
    /// Palette entries that are not valid hex colors are accepted: they mix as
    /// black, and a warning is logged for each.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the palette is empty, a profile is invalid
    /// for the palette, or the default difficulty is missing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for (index, color) in self.palette.iter().enumerate() {
            if let Err(err) = color.hex().parse::<Rgb>() {
                log::warn!(
                    "palette color {index} ({:?}) has invalid hex {:?}, using black: {err}",
                    color.name(),
                    color.hex()
                );
            }
        }
        for (name, profile) in &self.difficulties {
            profile
                .validate(self.palette.len())
                .map_err(|source| ConfigError::InvalidProfile {
                    name: name.clone(),
                    source,
                })?;
        }
        if !self.difficulties.contains_key(&self.default_difficulty) {
            return Err(ConfigError::UnknownDefaultDifficulty {
                name: self.default_difficulty.clone(),
            });
        }
        Ok(())
    }
}
