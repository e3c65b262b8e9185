//! picproc - perceptual palette quantization
//!
//! Maps colors onto fixed palettes using distances in OkLab or linear RGB,
//! and reads and writes palettes in the RIFF `PAL ` format. The color math
//! lives in the `okcolor` crate.

pub mod error;
pub mod models;
pub mod palette;
pub mod riff;

pub use error::{ConfigError, PaletteError};
pub use models::QuantizeConfig;
pub use palette::{
    load_palette, AnyPalette, LabPalette, LinearPalette, Palette, PaletteEntry, PaletteSource,
};
pub use riff::{read_palettes, write_palettes, RiffError};
