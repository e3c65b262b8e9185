//! Palettes: nearest-color matching, the built-in set, and resolution of
//! palette names and files.

pub mod builtin;
mod palette;
mod source;

pub use palette::{AnyPalette, LabPalette, LinearPalette, Palette, PaletteEntry};
pub use source::{load_palette, PaletteSource};
