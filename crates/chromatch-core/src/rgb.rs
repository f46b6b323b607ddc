//! Additive RGB color representation and hex conversions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// An additive RGB color with fractional channels.
///
/// Channels are conceptually in the range `0.0..=255.0`. Mixing math keeps
/// fractional values; rounding only happens when a color is rendered as hex
/// (see [`Rgb::to_hex`]).
///
/// # Examples
///
/// ```
/// use chromatch_core::Rgb;
///
/// let orange: Rgb = "#F80".parse().unwrap();
/// assert_eq!(orange, Rgb::new(255.0, 136.0, 0.0));
/// assert_eq!(orange.to_hex(), "#FF8800");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

/// Errors returned by the strict hex parser [`Rgb::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HexParseError {
    /// The string does not start with `#`.
    #[display("hex color must start with '#'")]
    MissingHash,
    /// The number of hex digits is neither 3 nor 6.
    #[display("hex color must have 3 or 6 digits, found {len}")]
    InvalidLength {
        /// Number of characters after the `#`.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit {ch:?}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl Rgb {
    /// Pure black, also the "no mix yet" sentinel returned by mixing an empty
    /// amount vector.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);

    /// Length of the diagonal of the RGB cube, `sqrt(3 * 255^2)`.
    ///
    /// This is the largest possible [`distance`](Self::distance) between two
    /// in-range colors.
    pub const MAX_DISTANCE: f64 = 441.672_955_930_063_7;

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as an array in `[r, g, b]` order.
    #[must_use]
    pub const fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Euclidean distance to `other` in RGB space.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Renders the color as uppercase `#RRGGBB`.
    ///
    /// Each channel is clamped to `0..=255` and rounded to the nearest integer.
    #[must_use]
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Relative luminance in `0.0..=1.0` using the WCAG formula.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        fn linearize(channel: f64) -> f64 {
            let c = channel.clamp(0.0, 255.0) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// Returns a label color readable on top of this color.
    ///
    /// White for dark colors (luminance below 0.5), black otherwise.
    #[must_use]
    pub fn contrast_text(&self) -> Self {
        if self.relative_luminance() < 0.5 {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = HexParseError;

    /// Parses `#RGB` or `#RRGGBB`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(HexParseError::MissingHash)?;
        let nibbles = digits
            .chars()
            .map(|ch| {
                ch.to_digit(16)
                    .map(f64::from)
                    .ok_or(HexParseError::InvalidDigit { ch })
            })
            .collect::<Result<Vec<_>, _>>()?;
        match *nibbles.as_slice() {
            [r, g, b] => Ok(Self::new(r * 17.0, g * 17.0, b * 17.0)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                r1 * 16.0 + r0,
                g1 * 16.0 + g0,
                b1 * 16.0 + b0,
            )),
            _ => Err(HexParseError::InvalidLength {
                len: nibbles.len(),
            }),
        }
    }
}

/// Converts a hex color string to RGB, failing closed.
///
/// Accepts `#RGB` and `#RRGGBB` (case-insensitive). Any other input yields
/// [`Rgb::BLACK`] instead of an error, so a malformed palette entry degrades
/// to black rather than aborting. Use [`Rgb::from_str`] to detect bad input.
///
/// # Examples
///
/// ```
/// use chromatch_core::{Rgb, hex_to_rgb};
///
/// assert_eq!(hex_to_rgb("#0f0"), Rgb::new(0.0, 255.0, 0.0));
/// assert_eq!(hex_to_rgb("not a color"), Rgb::BLACK);
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    hex.parse().unwrap_or(Rgb::BLACK)
}

/// Renders channels as uppercase `#RRGGBB`.
///
/// Each channel is clamped to `0..=255` and rounded to the nearest integer
/// (halves round up).
///
/// # Examples
///
/// ```
/// use chromatch_core::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex(127.5, 127.5, 0.0), "#808000");
/// assert_eq!(rgb_to_hex(-10.0, 300.0, 15.2), "#00FF0F");
/// ```
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_byte(channel: f64) -> u8 {
        // NaN clamps to NaN and casts to 0.
        channel.clamp(0.0, 255.0).round() as u8
    }
    format!("#{:02X}{:02X}{:02X}", to_byte(r), to_byte(g), to_byte(b))
}
