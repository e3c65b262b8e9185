//! Ordered palettes and nearest-color matching.

use std::io::{Read, Write};

use okcolor::{Clipper, Color, Lab, LinearColor, Representation, Rgba64, Rgba8};

use crate::error::PaletteError;
use crate::riff;

/// A color representation a [`Palette`] can store and search in.
pub trait PaletteEntry: Copy + Default + Into<Color> {
    /// The representation entries are stored in.
    const REPRESENTATION: Representation;

    /// Convert any color into this representation.
    fn from_color(color: Color) -> Self;

    /// Squared distance used for nearest-neighbour search.
    fn distance_squared(&self, other: &Self) -> f64;
}

impl PaletteEntry for Lab {
    const REPRESENTATION: Representation = Representation::Lab;

    fn from_color(color: Color) -> Self {
        color.to_lab()
    }

    fn distance_squared(&self, other: &Self) -> f64 {
        Lab::distance_squared(self, other)
    }
}

impl PaletteEntry for LinearColor {
    const REPRESENTATION: Representation = Representation::Linear;

    fn from_color(color: Color) -> Self {
        color.to_linear()
    }

    fn distance_squared(&self, other: &Self) -> f64 {
        LinearColor::distance_squared(self, other)
    }
}

/// An ordered, index-stable color palette.
///
/// Entries are converted into the native representation `C` once, at
/// construction, and never change afterwards. The index of an entry is the
/// quantization output, so order matters.
///
/// # Example
///
/// ```
/// use okcolor::{Lab, Rgba8};
/// use picproc::LabPalette;
///
/// let palette = LabPalette::from_rgba8(&[
///     Rgba8::opaque(0, 0, 0),
///     Rgba8::opaque(255, 255, 255),
/// ]);
///
/// let dark_gray = Lab::from(Rgba8::opaque(40, 40, 40));
/// assert_eq!(palette.index(&dark_gray), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette<C> {
    entries: Vec<C>,
}

/// Palette matched in OkLab.
pub type LabPalette = Palette<Lab>;

/// Palette matched in linear RGB.
pub type LinearPalette = Palette<LinearColor>;

impl<C: PaletteEntry> Palette<C> {
    /// Build a palette from colors in any representation.
    ///
    /// An empty input yields an empty palette.
    pub fn from_colors<I, T>(colors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Color>,
    {
        Self {
            entries: colors
                .into_iter()
                .map(|c| C::from_color(c.into()))
                .collect(),
        }
    }

    /// Build a palette from 8-bit sRGB colors.
    pub fn from_rgba8(colors: &[Rgba8]) -> Self {
        Self::from_colors(colors.iter().copied())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&C> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[C] {
        &self.entries
    }

    /// Index of the entry nearest to `color`.
    ///
    /// Exhaustive search; an exact match returns immediately and ties go to
    /// the lowest index. An empty palette returns 0.
    pub fn index(&self, color: &C) -> usize {
        let mut best = 0;
        let mut best_distance = f64::MAX;
        for (i, entry) in self.entries.iter().enumerate() {
            let d = color.distance_squared(entry);
            if d < best_distance {
                if d == 0.0 {
                    return i;
                }
                best = i;
                best_distance = d;
            }
        }
        best
    }

    /// The entry nearest to `color`, or the zero color for an empty palette.
    pub fn convert(&self, color: &C) -> C {
        self.entries
            .get(self.index(color))
            .copied()
            .unwrap_or_default()
    }

    /// Map each color to the index of its nearest entry.
    pub fn quantize<I, T>(&self, colors: I) -> Vec<usize>
    where
        I: IntoIterator<Item = T>,
        T: Into<Color>,
    {
        colors
            .into_iter()
            .map(|c| self.index(&C::from_color(c.into())))
            .collect()
    }

    /// Append every entry to `out`, converted into `representation`.
    ///
    /// Returns the number of colors appended.
    pub fn to(&self, representation: Representation, out: &mut Vec<Color>) -> usize {
        out.reserve(self.entries.len());
        out.extend(
            self.entries
                .iter()
                .map(|&e| Into::<Color>::into(e).convert(representation)),
        );
        self.entries.len()
    }

    /// Entries as 8-bit sRGB, clipped with [`Clipper::DEFAULT`].
    pub fn to_rgba8(&self) -> Vec<Rgba8> {
        self.to_rgba8_with(Clipper::DEFAULT)
    }

    /// Entries as 8-bit sRGB, clipped with `clipper`.
    pub fn to_rgba8_with(&self, clipper: Clipper) -> Vec<Rgba8> {
        self.entries
            .iter()
            .map(|&e| Rgba8::from(Into::<Color>::into(e).to_rgba64_with(clipper)))
            .collect()
    }

    /// Read a palette from a RIFF `PAL ` document.
    ///
    /// All chunks of the document are concatenated in file order.
    pub fn read_riff<R: Read>(r: R) -> Result<Self, PaletteError> {
        let chunks = riff::read_palettes(r)?;
        let palette = Self::from_colors(chunks.into_iter().flatten());
        tracing::debug!(
            colors = palette.len(),
            space = %C::REPRESENTATION,
            "Read palette"
        );
        Ok(palette)
    }

    /// Write the palette as a single-chunk RIFF `PAL ` document.
    ///
    /// Alpha is not stored. Returns the number of bytes written.
    pub fn write_riff<W: Write>(&self, w: W) -> Result<u64, PaletteError> {
        Ok(riff::write_palettes(w, &[self.to_rgba8()])?)
    }
}

impl<C: PaletteEntry> FromIterator<C> for Palette<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A palette in either matching space, chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyPalette {
    Lab(LabPalette),
    Linear(LinearPalette),
}

impl AnyPalette {
    /// Build a palette matched in `representation`.
    ///
    /// Lab and Lch select OkLab matching; Rgba64 and Linear select linear RGB.
    pub fn from_rgba8(colors: &[Rgba8], representation: Representation) -> Self {
        match representation {
            Representation::Lab | Representation::Lch => {
                AnyPalette::Lab(LabPalette::from_rgba8(colors))
            }
            Representation::Rgba64 | Representation::Linear => {
                AnyPalette::Linear(LinearPalette::from_rgba8(colors))
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnyPalette::Lab(p) => p.len(),
            AnyPalette::Linear(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the entry nearest to `color`.
    pub fn index_of(&self, color: impl Into<Color>) -> usize {
        let color = color.into();
        match self {
            AnyPalette::Lab(p) => p.index(&color.to_lab()),
            AnyPalette::Linear(p) => p.index(&color.to_linear()),
        }
    }

    /// Map 16-bit sRGB pixels to palette indices.
    pub fn quantize(&self, pixels: &[Rgba64]) -> Vec<usize> {
        match self {
            AnyPalette::Lab(p) => p.quantize(pixels.iter().copied()),
            AnyPalette::Linear(p) => p.quantize(pixels.iter().copied()),
        }
    }

    pub fn to_rgba8_with(&self, clipper: Clipper) -> Vec<Rgba8> {
        match self {
            AnyPalette::Lab(p) => p.to_rgba8_with(clipper),
            AnyPalette::Linear(p) => p.to_rgba8_with(clipper),
        }
    }
}
