//! Companded sRGB color types
//!
//! sRGB is the standard color space for display and storage of images.
//! It applies a transfer curve to linear light values for perceptual uniformity.
//! Alpha is straight (not premultiplied) and is never gamma-encoded.

use std::str::FromStr;

use super::error::ParseColorError;

/// An 8-bit-per-channel sRGB color with straight alpha.
///
/// This is the resolution of palette files and most image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    /// Red channel (gamma-corrected)
    pub r: u8,
    /// Green channel (gamma-corrected)
    pub g: u8,
    /// Blue channel (gamma-corrected)
    pub b: u8,
    /// Alpha channel (linear coverage)
    pub a: u8,
}

impl Rgba8 {
    /// Create an Rgba8 color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque Rgba8 color.
    ///
    /// # Example
    /// ```
    /// use okcolor::Rgba8;
    /// let red = Rgba8::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// The color channels as `[R, G, B]`, dropping alpha.
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A 16-bit-per-channel sRGB color with straight alpha.
///
/// This is the generic interchange color of the crate: every other
/// representation converts to and from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba64 {
    /// Red channel (gamma-corrected)
    pub r: u16,
    /// Green channel (gamma-corrected)
    pub g: u16,
    /// Blue channel (gamma-corrected)
    pub b: u16,
    /// Alpha channel (linear coverage)
    pub a: u16,
}

impl Rgba64 {
    /// Create an Rgba64 color from its four channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }
}

/// Widen an 8-bit channel to 16 bits (`0xAB` becomes `0xABAB`).
#[inline]
pub(crate) fn widen(v: u8) -> u16 {
    v as u16 * 257
}

/// Narrow a 16-bit channel to 8 bits, rounding to nearest.
#[inline]
pub(crate) fn narrow(v: u16) -> u8 {
    ((v as u32 * 255 + 32767) / 65535) as u8
}

impl From<Rgba8> for Rgba64 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: widen(c.r),
            g: widen(c.g),
            b: widen(c.b),
            a: widen(c.a),
        }
    }
}

impl From<Rgba64> for Rgba8 {
    fn from(c: Rgba64) -> Self {
        Self {
            r: narrow(c.r),
            g: narrow(c.g),
            b: narrow(c.b),
            a: narrow(c.a),
        }
    }
}

impl FromStr for Rgba8 {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports the following formats, with or without a leading `#`:
    /// - `RRGGBB` / `RGB` - opaque
    /// - `RRGGBBAA` / `RGBA` - with alpha
    ///
    /// Shorthand digits expand by repetition (`F` becomes `FF`). Parsing is
    /// case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use okcolor::Rgba8;
    ///
    /// let white: Rgba8 = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgba8::opaque(255, 255, 255));
    ///
    /// let faded: Rgba8 = "#f008".parse().unwrap();
    /// assert_eq!(faded, Rgba8::new(255, 0, 0, 0x88));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let short = |i: usize| -> Result<u8, ParseColorError> {
            Ok(u8::from_str_radix(&s[i..i + 1], 16)? * 17)
        };
        let long = |i: usize| -> Result<u8, ParseColorError> {
            Ok(u8::from_str_radix(&s[i..i + 2], 16)?)
        };

        // from_str_radix alone would also take a sign
        if let Some(ch) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(ch));
        }

        match s.len() {
            3 => Ok(Self::opaque(short(0)?, short(1)?, short(2)?)),
            4 => Ok(Self::new(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Ok(Self::opaque(long(0)?, long(2)?, long(4)?)),
            8 => Ok(Self::new(long(0)?, long(2)?, long(4)?, long(6)?)),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}
