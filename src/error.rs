use std::path::PathBuf;

use okcolor::ParseColorError;
use thiserror::Error;

use crate::riff::RiffError;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Palette file error: {0}")]
    Riff(#[from] RiffError),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Could not open palette file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid color {value:?} in palette {palette}: {source}")]
    ParseColor {
        palette: String,
        value: String,
        source: ParseColorError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Could not read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),
}
