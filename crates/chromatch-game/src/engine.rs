use chromatch_core::{AmountVector, Palette, Rgb};
use chromatch_generator::{DifficultyProfile, RandomSource, Target, TargetGenerator, TargetSeed};
use rand_pcg::Pcg64;

use crate::{GameConfig, GameError, MatchScore, MixState};

/// A color-mixing puzzle session.
///
/// Owns the palette and difficulty table, the player's amounts, the current
/// target and the random source targets are drawn from. Each round starts
/// with an empty mix; a new round begins on [`next_target`](Self::next_target),
/// [`set_difficulty`](Self::set_difficulty) or
/// [`generate_target`](Self::generate_target), discarding the previous target.
///
/// Only the first [`visible_count`](Self::visible_count) palette colors can be
/// mixed, and targets are generated from that same subset, so every target is
/// reachable with the colors the player has.
///
/// # Example
///
/// ```
/// use chromatch_game::{GameConfig, PuzzleEngine};
/// use chromatch_generator::TargetSeed;
///
/// let mut engine =
///     PuzzleEngine::with_seed(GameConfig::default(), TargetSeed::from_phrase("demo")).unwrap();
///
/// // A fresh round has nothing mixed.
/// assert!(engine.mix_state().is_empty());
/// assert_eq!(engine.compute_match().value(), 0.0);
///
/// engine.increment(0).unwrap();
/// assert!(engine.mix_state().is_mixed());
///
/// // Revealing the solution applies the target's own ratios.
/// let solution = engine.reveal_solution();
/// assert_eq!(engine.amounts(), &solution);
/// assert!(engine.compute_match().value() >= 99.9);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleEngine<R = Pcg64> {
    config: GameConfig,
    difficulty: Option<String>,
    profile: DifficultyProfile,
    amounts: AmountVector,
    target: Target,
    round: u64,
    rng: R,
}

impl PuzzleEngine<Pcg64> {
    /// Creates an engine whose targets are determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if `config` is invalid.
    pub fn with_seed(config: GameConfig, seed: TargetSeed) -> Result<Self, GameError> {
        Self::new(config, seed.to_rng())
    }

    /// Creates an engine with a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if `config` is invalid.
    pub fn with_random_seed(config: GameConfig) -> Result<Self, GameError> {
        Self::with_seed(config, TargetSeed::random())
    }
}

impl<R> PuzzleEngine<R>
where
    R: RandomSource,
{
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// The engine starts at the configured default difficulty with a freshly
    /// generated target (round 1).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if `config` is invalid.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let name = config.default_difficulty.clone();
        let profile = lookup_difficulty(&config, &name)?.clone();
        let target = TargetGenerator::new(&config.palette)
            .generate_with_source(&profile, &mut rng)?;
        let amounts = config.palette.zero_amounts();
        log::debug!("starting at difficulty {name:?}, target {}", target.color());
        Ok(Self {
            config,
            difficulty: Some(name),
            profile,
            amounts,
            target,
            round: 1,
            rng,
        })
    }

    /// The configuration the engine was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The palette being mixed.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    /// Name of the active difficulty, or `None` for a custom profile passed to
    /// [`generate_target`](Self::generate_target).
    #[must_use]
    pub fn difficulty_name(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    /// The active difficulty profile.
    #[must_use]
    pub fn difficulty_profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    /// Number of leading palette colors the player may use.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.profile.visible_count(self.config.palette.len())
    }

    /// The current round, starting at 1 and increasing with every new target.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// The player's current amounts.
    #[must_use]
    pub fn amounts(&self) -> &AmountVector {
        &self.amounts
    }

    /// The current target.
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// The current target color.
    #[must_use]
    pub fn target_color(&self) -> Rgb {
        self.target.color()
    }

    /// Percentage of the mix contributed by the color at `index`.
    ///
    /// Zero for an empty mix.
    #[must_use]
    pub fn amount_percentage(&self, index: usize) -> f64 {
        self.amounts.percentage(index)
    }

    /// Returns `true` if the color at `index` is visible and has a unit to
    /// remove.
    #[must_use]
    pub fn can_decrement(&self, index: usize) -> bool {
        index < self.visible_count() && self.amounts.get(index).is_some_and(|amount| amount > 0)
    }

    /// The current mix.
    #[must_use]
    pub fn mix_state(&self) -> MixState {
        if self.amounts.is_empty_mix() {
            MixState::Empty
        } else {
            MixState::Mixed(self.config.palette.mix(&self.amounts))
        }
    }

    /// Scores the current mix against the target.
    ///
    /// An empty mix scores exactly zero regardless of the target.
    #[must_use]
    pub fn compute_match(&self) -> MatchScore {
        match self.mix_state() {
            MixState::Empty => MatchScore::ZERO,
            MixState::Mixed(mix) => MatchScore::between(mix, self.target.color()),
        }
    }

    /// Adds one unit of the color at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `index` is not a visible color.
    pub fn increment(&mut self, index: usize) -> Result<(), GameError> {
        self.check_index(index)?;
        self.amounts.increment(index);
        Ok(())
    }

    /// Removes one unit of the color at `index` if it has any.
    ///
    /// Returns `true` if the amount changed. Removing from a zero amount is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `index` is not a visible color.
    pub fn decrement(&mut self, index: usize) -> Result<bool, GameError> {
        self.check_index(index)?;
        Ok(self.amounts.decrement(index))
    }

    /// Clears the mix, keeping the current target.
    pub fn reset(&mut self) {
        self.amounts.reset();
    }

    /// Starts a new round with the active difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidProfile`] if the active profile cannot be
    /// used, which cannot happen for profiles the engine accepted earlier.
    pub fn next_target(&mut self) -> Result<&Target, GameError> {
        let profile = self.profile.clone();
        let name = self.difficulty.clone();
        self.start_round(profile, name)
    }

    /// Switches to the named difficulty and starts a new round.
    ///
    /// Switching to the already active difficulty still starts a new round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownDifficulty`] if no profile has this name;
    /// the engine state is left unchanged.
    pub fn set_difficulty(&mut self, name: &str) -> Result<&Target, GameError> {
        let profile = lookup_difficulty(&self.config, name)?.clone();
        log::debug!("switching difficulty to {name:?}");
        self.start_round(profile, Some(name.to_owned()))
    }

    /// Makes `profile` the active (custom) difficulty and starts a new round
    /// with it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidProfile`] if `profile` cannot be used with
    /// the palette; the engine state is left unchanged.
    pub fn generate_target(&mut self, profile: DifficultyProfile) -> Result<&Target, GameError> {
        self.start_round(profile, None)
    }

    /// Applies the target's generating ratios as the current amounts and
    /// returns a copy of them.
    ///
    /// The mix then reproduces the target color up to floating-point error.
    pub fn reveal_solution(&mut self) -> AmountVector {
        self.amounts = self.target.ratios().clone();
        log::debug!("revealed solution {:?}", self.amounts.as_slice());
        self.amounts.clone()
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        let visible = self.visible_count();
        if index >= visible {
            return Err(GameError::IndexOutOfRange { index, visible });
        }
        Ok(())
    }

    fn start_round(
        &mut self,
        profile: DifficultyProfile,
        name: Option<String>,
    ) -> Result<&Target, GameError> {
        let target = TargetGenerator::new(&self.config.palette)
            .generate_with_source(&profile, &mut self.rng)?;
        self.profile = profile;
        self.difficulty = name;
        self.target = target;
        self.amounts.reset();
        self.round += 1;
        log::debug!(
            "round {} started, target {}",
            self.round,
            self.target.color()
        );
        Ok(&self.target)
    }
}

fn lookup_difficulty<'a>(
    config: &'a GameConfig,
    name: &str,
) -> Result<&'a DifficultyProfile, GameError> {
    config
        .difficulty(name)
        .ok_or_else(|| GameError::UnknownDifficulty {
            name: name.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chromatch_core::PaletteColor;
    use chromatch_generator::{CountRange, ProfileError, testing::ScriptedSource};
    use proptest::prelude::*;

    use super::*;
    use crate::ConfigError;

    fn single_profile_config(hex: &[&str], profile: DifficultyProfile) -> GameConfig {
        GameConfig {
            palette: Palette::new(hex.iter().map(|h| PaletteColor::from_hex(*h)).collect()),
            difficulties: BTreeMap::from([("only".to_owned(), profile)]),
            default_difficulty: "only".to_owned(),
        }
    }

    fn rgb_engine(draws: &[u32]) -> PuzzleEngine<ScriptedSource> {
        let config = single_profile_config(
            &["#FF0000", "#00FF00", "#0000FF"],
            DifficultyProfile {
                num_colors: CountRange::new(2, 2),
                weights_range: CountRange::new(1, 3),
                visible_base_colors: None,
            },
        );
        PuzzleEngine::new(config, ScriptedSource::new(draws.iter().copied())).unwrap()
    }

    fn seeded_engine(phrase: &str) -> PuzzleEngine {
        PuzzleEngine::with_seed(GameConfig::default(), TargetSeed::from_phrase(phrase)).unwrap()
    }

    #[test]
    fn test_new_engine_starts_empty() {
        let engine = seeded_engine("start");
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.difficulty_name(), Some("medium"));
        assert_eq!(engine.difficulty_profile(), &DifficultyProfile::medium());
        assert_eq!(engine.visible_count(), 5);
        assert_eq!(engine.amounts(), &AmountVector::zeroed(6));
        assert_eq!(engine.mix_state(), MixState::Empty);
        assert_eq!(engine.compute_match(), MatchScore::ZERO);
    }

    #[test]
    fn test_random_seed_engine() {
        let config = single_profile_config(
            &["#FF0000", "#0000FF"],
            DifficultyProfile {
                num_colors: CountRange::new(1, 2),
                weights_range: CountRange::new(1, 4),
                visible_base_colors: None,
            },
        );
        let mut engine = PuzzleEngine::with_random_seed(config.clone()).unwrap();
        assert_eq!(engine.config(), &config);
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.difficulty_name(), Some("only"));

        let solution = engine.reveal_solution();
        assert!((1..=2).contains(&solution.non_zero_count()));
        assert!(solution.iter().all(|weight| weight <= 4));
        assert!(engine.compute_match().is_great());
    }

    #[test]
    fn test_invalid_config_with_random_seed() {
        let config = GameConfig {
            default_difficulty: "nightmare".to_owned(),
            ..GameConfig::default()
        };
        assert!(matches!(
            PuzzleEngine::with_random_seed(config),
            Err(GameError::Config(ConfigError::UnknownDefaultDifficulty { .. }))
        ));
    }

    #[test]
    fn test_scripted_target_and_exact_solution() {
        // k = 2, indices 0 and 2, weights 2 and 1.
        let mut engine = rgb_engine(&[2, 0, 2, 2, 1]);
        assert_eq!(engine.target().ratios().as_slice(), &[2, 0, 1]);
        assert_eq!(engine.target_color().to_hex(), "#AA0055");

        engine.increment(0).unwrap();
        engine.increment(0).unwrap();
        engine.increment(2).unwrap();
        assert!((engine.compute_match().value() - 100.0).abs() < 1e-9);
        assert!(engine.compute_match().is_great());
    }

    #[test]
    fn test_two_color_mix() {
        let mut engine = rgb_engine(&[2, 0, 2, 2, 1]);
        engine.increment(0).unwrap();
        engine.increment(1).unwrap();
        let MixState::Mixed(mix) = engine.mix_state() else {
            panic!("mix should not be empty");
        };
        assert!(mix.distance(&Rgb::new(127.5, 127.5, 0.0)) < 1e-9);
        assert_eq!(mix.to_hex(), "#808000");
        assert!((engine.amount_percentage(0) - 50.0).abs() < 1e-9);
        assert!(engine.amount_percentage(2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_match_scales_with_distance() {
        let config = single_profile_config(
            &["#FFFFFF", "#000000"],
            DifficultyProfile {
                num_colors: CountRange::new(1, 1),
                weights_range: CountRange::new(1, 1),
                visible_base_colors: None,
            },
        );
        // k = 1, index 0 (white), weight 1.
        let mut engine = PuzzleEngine::new(config, ScriptedSource::new([1, 0, 1])).unwrap();
        assert_eq!(engine.target_color(), Rgb::WHITE);

        // Pure black is the opposite corner of the cube.
        engine.increment(1).unwrap();
        assert!(engine.compute_match().value().abs() < 1e-9);
        assert_eq!(engine.mix_state(), MixState::Mixed(Rgb::BLACK));

        // Mid grey is halfway.
        engine.increment(0).unwrap();
        assert!((engine.compute_match().value() - 50.0).abs() < 1e-9);
        assert_eq!(engine.compute_match().to_string(), "50.0");
    }

    #[test]
    fn test_empty_mix_scores_zero_even_against_black_target() {
        let config = single_profile_config(
            &["#000000"],
            DifficultyProfile {
                num_colors: CountRange::new(1, 1),
                weights_range: CountRange::new(1, 1),
                visible_base_colors: None,
            },
        );
        let engine = PuzzleEngine::new(config, ScriptedSource::new([1, 0, 1])).unwrap();
        assert_eq!(engine.target_color(), Rgb::BLACK);
        assert_eq!(engine.mix_state(), MixState::Empty);
        assert_eq!(engine.compute_match(), MatchScore::ZERO);
    }

    #[test]
    fn test_decrement_floor() {
        let mut engine = seeded_engine("floor");
        assert!(!engine.can_decrement(0));
        assert!(!engine.decrement(0).unwrap());
        assert_eq!(engine.amounts()[0], 0);

        engine.increment(0).unwrap();
        assert!(engine.can_decrement(0));
        assert!(engine.decrement(0).unwrap());
        assert!(!engine.decrement(0).unwrap());
        assert_eq!(engine.amounts()[0], 0);
        assert!(engine.mix_state().is_empty());
    }

    #[test]
    fn test_hidden_colors_are_rejected() {
        let mut engine = seeded_engine("hidden");
        assert_eq!(engine.visible_count(), 5);
        engine.increment(4).unwrap();
        assert!(matches!(
            engine.increment(5),
            Err(GameError::IndexOutOfRange { index: 5, visible: 5 })
        ));
        assert!(matches!(
            engine.decrement(6),
            Err(GameError::IndexOutOfRange { index: 6, visible: 5 })
        ));
        assert!(!engine.can_decrement(5));
        assert_eq!(engine.amounts().total(), 1);
    }

    #[test]
    fn test_reset_keeps_target() {
        let mut engine = seeded_engine("reset");
        let target = engine.target().clone();
        engine.increment(1).unwrap();
        engine.increment(3).unwrap();
        engine.reset();
        assert!(engine.amounts().is_empty_mix());
        assert_eq!(engine.target(), &target);
        assert_eq!(engine.round(), 1);
    }

    #[test]
    fn test_next_target_starts_new_round() {
        let mut engine = seeded_engine("next");
        engine.increment(0).unwrap();
        engine.next_target().unwrap();
        assert_eq!(engine.round(), 2);
        assert!(engine.amounts().is_empty_mix());
        assert_eq!(engine.difficulty_name(), Some("medium"));
    }

    #[test]
    fn test_set_difficulty() {
        let mut engine = seeded_engine("difficulty");
        engine.increment(4).unwrap();

        let target = engine.set_difficulty("easy").unwrap().clone();
        assert_eq!(engine.difficulty_name(), Some("easy"));
        assert_eq!(engine.visible_count(), 4);
        assert_eq!(engine.round(), 2);
        assert!(engine.amounts().is_empty_mix());
        assert_eq!(&target.ratios().as_slice()[4..], &[0, 0]);
        assert!(engine.increment(4).is_err());

        engine.set_difficulty("hard").unwrap();
        assert_eq!(engine.visible_count(), 6);
        engine.increment(5).unwrap();
    }

    #[test]
    fn test_unknown_difficulty_leaves_state_unchanged() {
        let mut engine = seeded_engine("unknown");
        engine.increment(2).unwrap();
        let target = engine.target().clone();

        let err = engine.set_difficulty("nightmare").unwrap_err();
        assert!(matches!(err, GameError::UnknownDifficulty { ref name } if name == "nightmare"));
        assert_eq!(engine.target(), &target);
        assert_eq!(engine.amounts()[2], 1);
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.difficulty_name(), Some("medium"));
    }

    #[test]
    fn test_custom_profile() {
        let mut engine = seeded_engine("custom");
        let profile = DifficultyProfile {
            num_colors: CountRange::new(1, 1),
            weights_range: CountRange::new(4, 4),
            visible_base_colors: Some(2),
        };
        let target = engine.generate_target(profile.clone()).unwrap().clone();
        assert_eq!(engine.difficulty_name(), None);
        assert_eq!(engine.difficulty_profile(), &profile);
        assert_eq!(engine.visible_count(), 2);
        assert_eq!(target.ratios().non_zero_count(), 1);
        assert!(target.ratios().iter().take(2).any(|weight| weight == 4));

        // The custom profile stays active across rounds.
        engine.next_target().unwrap();
        assert_eq!(engine.difficulty_profile(), &profile);
    }

    #[test]
    fn test_invalid_custom_profile_leaves_state_unchanged() {
        let mut engine = seeded_engine("invalid");
        let target = engine.target().clone();
        let profile = DifficultyProfile {
            num_colors: CountRange::new(3, 4),
            weights_range: CountRange::new(1, 2),
            visible_base_colors: Some(2),
        };
        assert!(matches!(
            engine.generate_target(profile),
            Err(GameError::InvalidProfile(ProfileError::TooManyColors { max: 4, visible: 2 }))
        ));
        assert_eq!(engine.target(), &target);
        assert_eq!(engine.difficulty_name(), Some("medium"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig {
            default_difficulty: "missing".to_owned(),
            ..GameConfig::default()
        };
        assert!(matches!(
            PuzzleEngine::with_seed(config, TargetSeed::from_phrase("config")),
            Err(GameError::Config(_))
        ));
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let mut a = seeded_engine("rounds");
        let mut b = seeded_engine("rounds");
        for name in ["easy", "medium", "hard", "hard"] {
            assert_eq!(a.target(), b.target());
            a.set_difficulty(name).unwrap();
            b.set_difficulty(name).unwrap();
        }
        a.next_target().unwrap();
        b.next_target().unwrap();
        assert_eq!(a.target(), b.target());
    }

    proptest! {
        #[test]
        fn prop_revealed_solution_matches(
            bytes in any::<[u8; 32]>(),
            difficulty in prop::sample::select(vec!["easy", "medium", "hard"]),
        ) {
            let seed = TargetSeed::from_bytes(bytes);
            let mut engine = PuzzleEngine::with_seed(GameConfig::default(), seed).unwrap();
            engine.set_difficulty(difficulty).unwrap();
            let solution = engine.reveal_solution();
            prop_assert_eq!(&solution, engine.target().ratios());
            prop_assert_eq!(engine.amounts(), &solution);
            prop_assert!(engine.compute_match().value() >= 99.9);
        }
    }
}
