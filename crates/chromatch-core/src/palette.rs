//! Base color palette and weighted mixing.

use std::ops::Index;

use crate::{AmountVector, Rgb, hex_to_rgb};

/// A named base color.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PaletteColor {
    name: String,
    hex: String,
}

impl PaletteColor {
    /// Creates a palette entry.
    ///
    /// `hex` is not validated here; a malformed value mixes as black (see
    /// [`hex_to_rgb`]).
    #[must_use]
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Creates an entry named after its own hex value.
    #[must_use]
    pub fn from_hex(hex: impl Into<String>) -> Self {
        let hex = hex.into();
        Self {
            name: hex.clone(),
            hex,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hex color string as configured.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The color as RGB, black if the hex string is malformed.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        hex_to_rgb(&self.hex)
    }
}

/// A fixed, ordered set of base colors.
///
/// Order is significant: an index into the palette is the index into every
/// [`AmountVector`] mixed against it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<PaletteColor>,
}

impl Palette {
    /// Hex values of the standard six-color palette.
    pub const STANDARD_HEX: [&'static str; 6] = [
        "#F52F0C", "#B2F711", "#0FF57A", "#1B07F0", "#FFFFFF", "#000000",
    ];

    /// Creates a palette from its entries.
    #[must_use]
    pub fn new(colors: Vec<PaletteColor>) -> Self {
        Self { colors }
    }

    /// The standard palette: red-orange, lime, spring green, blue, white and black.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            Self::STANDARD_HEX
                .into_iter()
                .map(PaletteColor::from_hex)
                .collect(),
        )
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PaletteColor> {
        self.colors.get(index)
    }

    /// Iterates over the colors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteColor> {
        self.colors.iter()
    }

    /// Returns an all-zero amount vector sized for this palette.
    #[must_use]
    pub fn zero_amounts(&self) -> AmountVector {
        AmountVector::zeroed(self.len())
    }

    /// Mixes `amounts` against this palette. See [`mix_colors`].
    #[must_use]
    pub fn mix(&self, amounts: &AmountVector) -> Rgb {
        mix_colors(self, amounts)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<usize> for Palette {
    type Output = PaletteColor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteColor;
    type IntoIter = std::slice::Iter<'a, PaletteColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Mixes palette colors in the given integer ratios.
///
/// The result is the weighted centroid of the used colors in RGB space: each
/// color with a non-zero amount contributes `amount / total` of its channels.
/// This is an additive simplification. It does not model subtractive pigment
/// mixing or perceptual color spaces.
///
/// An empty mix (total of zero) returns [`Rgb::BLACK`]. Black is also a
/// legitimate mixed result, so callers that need to tell "nothing mixed yet"
/// apart must check [`AmountVector::is_empty_mix`].
///
/// Entries are paired by index; amounts beyond the palette length are ignored.
///
/// # Examples
///
/// ```
/// use chromatch_core::{AmountVector, Palette, PaletteColor, Rgb, mix_colors};
///
/// let palette = Palette::new(vec![
///     PaletteColor::from_hex("#FF0000"),
///     PaletteColor::from_hex("#00FF00"),
///     PaletteColor::from_hex("#0000FF"),
/// ]);
/// let mixed = mix_colors(&palette, &AmountVector::from_vec(vec![1, 1, 0]));
/// assert_eq!(mixed, Rgb::new(127.5, 127.5, 0.0));
/// assert_eq!(mixed.to_hex(), "#808000");
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn mix_colors(palette: &Palette, amounts: &AmountVector) -> Rgb {
    let total = amounts.total();
    if total == 0 {
        return Rgb::BLACK;
    }
    let total = total as f64;

    let mut mixed = Rgb::BLACK;
    for (color, amount) in palette.iter().zip(amounts) {
        if amount == 0 {
            continue;
        }
        let proportion = f64::from(amount) / total;
        let rgb = color.rgb();
        mixed.r += rgb.r * proportion;
        mixed.g += rgb.g * proportion;
        mixed.b += rgb.b * proportion;
    }
    mixed
}
