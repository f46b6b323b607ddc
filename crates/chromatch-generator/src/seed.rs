//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngCore as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed for target generation.
///
/// A seed fully determines the sequence of targets drawn from the generator
/// built by [`TargetSeed::to_rng`]. Seeds are displayed and parsed as 64
/// lowercase hex digits.
///
/// # Examples
///
/// ```
/// use chromatch_generator::TargetSeed;
///
/// let seed = TargetSeed::from_phrase("sunset");
/// let parsed: TargetSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSeed([u8; 32]);

/// Errors returned when parsing a [`TargetSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, found {len} characters")]
    InvalidLength {
        /// Length of the input.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit in seed at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        offset: usize,
    },
}

impl TargetSeed {
    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from a memorable phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic generator for this seed.
    #[must_use]
    pub fn to_rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for TargetSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for TargetSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }
        if let Some(offset) = s.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(SeedParseError::InvalidDigit { offset });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            *byte = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
        }
        Ok(Self(bytes))
    }
}

// Input must already be an ASCII hex digit.
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_display_parse_round_trip() {
        let seed = TargetSeed::from_str(SEED).unwrap();
        assert_eq!(seed.to_string(), SEED);
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let upper = TargetSeed::from_str(&SEED.to_uppercase()).unwrap();
        assert_eq!(upper, TargetSeed::from_str(SEED).unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            TargetSeed::from_str("abcd"),
            Err(SeedParseError::InvalidLength { len: 4 })
        );
        let mut bad = SEED.to_owned();
        bad.replace_range(10..11, "z");
        assert_eq!(
            TargetSeed::from_str(&bad),
            Err(SeedParseError::InvalidDigit { offset: 10 })
        );
        // Leading signs are not hex digits.
        let mut signed = SEED.to_owned();
        signed.replace_range(0..1, "+");
        assert_eq!(
            TargetSeed::from_str(&signed),
            Err(SeedParseError::InvalidDigit { offset: 0 })
        );
    }

    #[test]
    fn test_phrase_is_deterministic() {
        assert_eq!(
            TargetSeed::from_phrase("sunset"),
            TargetSeed::from_phrase("sunset")
        );
        assert_ne!(
            TargetSeed::from_phrase("sunset"),
            TargetSeed::from_phrase("sunrise")
        );
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = TargetSeed::from_str(SEED).unwrap();
        let mut a = seed.to_rng();
        let mut b = seed.to_rng();
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }
}
