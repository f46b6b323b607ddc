//! Test utilities for code that consumes a [`RandomSource`].
//!
//! # Example
//!
//! ```
//! use chromatch_generator::{RandomSource, testing::ScriptedSource};
//!
//! let mut source = ScriptedSource::new([2, 0, 5]);
//! assert_eq!(source.random_int(1, 3), 2);
//! assert_eq!(source.random_int(0, 5), 0);
//! assert_eq!(source.random_int(1, 7), 5);
//! assert!(source.is_exhausted());
//! assert_eq!(source.requests(), &[(1, 3), (0, 5), (1, 7)]);
//! ```

use std::collections::VecDeque;

use crate::RandomSource;

/// A [`RandomSource`] that replays a fixed sequence of draws.
///
/// Each call to [`random_int`](RandomSource::random_int) pops the next
/// scripted value and records the requested range, so tests can assert both
/// the outcome and the exact sequence of draws a consumer made.
///
/// # Panics
///
/// `random_int` panics when the script is exhausted or when the next scripted
/// value falls outside the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: VecDeque<u32>,
    requests: Vec<(u32, u32)>,
}

impl ScriptedSource {
    /// Creates a source that will return `draws` in order.
    pub fn new<I>(draws: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self {
            draws: draws.into_iter().collect(),
            requests: Vec::new(),
        }
    }

    /// Returns `true` if every scripted value has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draws.is_empty()
    }

    /// The `(min, max)` ranges requested so far, in call order.
    #[must_use]
    pub fn requests(&self) -> &[(u32, u32)] {
        &self.requests
    }
}

impl RandomSource for ScriptedSource {
    #[track_caller]
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        self.requests.push((min, max));
        let Some(value) = self.draws.pop_front() else {
            panic!("scripted source exhausted on draw {min}..={max}");
        };
        assert!(
            (min..=max).contains(&value),
            "scripted value {value} outside requested range {min}..={max}"
        );
        value
    }
}
