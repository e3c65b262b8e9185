//! Closed union over the color representations.

use std::fmt;

use super::linear::LinearColor;
use super::oklab::Lab;
use super::oklch::Lch;
use super::srgb::{Rgba64, Rgba8};
use crate::gamut::Clipper;

/// Names one of the color representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// 16-bit companded sRGB ([`Rgba64`])
    Rgba64,
    /// Linear-light RGB ([`LinearColor`])
    Linear,
    /// OkLab ([`Lab`])
    Lab,
    /// OkLCh ([`Lch`])
    Lch,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Representation::Rgba64 => "rgba64",
            Representation::Linear => "linear",
            Representation::Lab => "oklab",
            Representation::Lch => "oklch",
        };
        f.write_str(name)
    }
}

/// A color in any of the supported representations.
///
/// Every pair of representations converts explicitly through
/// [`convert`](Color::convert). Conversions that leave the perceptual
/// spaces for RGB clip with [`Clipper::DEFAULT`]; use
/// [`convert_with`](Color::convert_with) to pick another strategy.
///
/// # Example
///
/// ```
/// use okcolor::{Color, Representation, Rgba8};
///
/// let c = Color::from(Rgba8::opaque(0, 128, 255));
/// let lch = c.convert(Representation::Lch);
/// assert_eq!(lch.representation(), Representation::Lch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgba64(Rgba64),
    Linear(LinearColor),
    Lab(Lab),
    Lch(Lch),
}

impl Color {
    /// The representation this value is stored in.
    pub fn representation(&self) -> Representation {
        match self {
            Color::Rgba64(_) => Representation::Rgba64,
            Color::Linear(_) => Representation::Linear,
            Color::Lab(_) => Representation::Lab,
            Color::Lch(_) => Representation::Lch,
        }
    }

    /// Convert into `to`, clipping with [`Clipper::DEFAULT`] where needed.
    pub fn convert(self, to: Representation) -> Color {
        self.convert_with(to, Clipper::DEFAULT)
    }

    /// Convert into `to`, clipping with `clipper` when a perceptual color is
    /// turned into RGB.
    pub fn convert_with(self, to: Representation, clipper: Clipper) -> Color {
        if self.representation() == to {
            return self;
        }
        match to {
            Representation::Rgba64 => Color::Rgba64(self.to_rgba64_with(clipper)),
            Representation::Linear => Color::Linear(self.linear_with(clipper)),
            Representation::Lab => Color::Lab(self.to_lab()),
            Representation::Lch => Color::Lch(Lch::from(self.to_lab())),
        }
    }

    fn linear_with(self, clipper: Clipper) -> LinearColor {
        match self {
            Color::Rgba64(c) => LinearColor::from(c),
            Color::Linear(c) => c,
            Color::Lab(c) => c.to_linear(Some(clipper)),
            Color::Lch(c) => Lab::from(c).to_linear(Some(clipper)),
        }
    }

    /// 16-bit sRGB, clipped with the default strategy.
    pub fn to_rgba64(self) -> Rgba64 {
        self.to_rgba64_with(Clipper::DEFAULT)
    }

    /// 16-bit sRGB, clipped with `clipper`.
    pub fn to_rgba64_with(self, clipper: Clipper) -> Rgba64 {
        match self {
            Color::Rgba64(c) => c,
            other => other.linear_with(clipper).encode(),
        }
    }

    /// Linear RGB, clipped with the default strategy.
    pub fn to_linear(self) -> LinearColor {
        self.linear_with(Clipper::DEFAULT)
    }

    pub fn to_lab(self) -> Lab {
        match self {
            Color::Rgba64(c) => Lab::from(c),
            Color::Linear(c) => Lab::from(c),
            Color::Lab(c) => c,
            Color::Lch(c) => Lab::from(c),
        }
    }

    pub fn to_lch(self) -> Lch {
        match self {
            Color::Lch(c) => c,
            other => Lch::from(other.to_lab()),
        }
    }
}

impl From<Rgba64> for Color {
    fn from(c: Rgba64) -> Self {
        Color::Rgba64(c)
    }
}

impl From<Rgba8> for Color {
    fn from(c: Rgba8) -> Self {
        Color::Rgba64(Rgba64::from(c))
    }
}

impl From<LinearColor> for Color {
    fn from(c: LinearColor) -> Self {
        Color::Linear(c)
    }
}

impl From<Lab> for Color {
    fn from(c: Lab) -> Self {
        Color::Lab(c)
    }
}

impl From<Lch> for Color {
    fn from(c: Lch) -> Self {
        Color::Lch(c)
    }
}
