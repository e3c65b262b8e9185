use okcolor::{Clipper, Representation};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{ConfigError, PaletteError};
use crate::palette::{load_palette, AnyPalette};

/// Quantization settings loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct QuantizeConfig {
    /// Built-in name, custom name, or path to a RIFF palette file
    #[serde(default = "default_palette")]
    pub palette: String,

    /// Space nearest-color matching runs in
    #[serde(default)]
    pub space: ColorSpace,

    /// Gamut clipping used when palette colors are turned back into RGB
    #[serde(default)]
    pub clip: ClipConfig,

    /// Custom named palettes, as hex colors
    #[serde(default)]
    pub palettes: HashMap<String, Vec<String>>,
}

fn default_palette() -> String {
    "bw".to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    #[default]
    Lab,
    Linear,
}

impl From<ColorSpace> for Representation {
    fn from(space: ColorSpace) -> Self {
        match space {
            ColorSpace::Lab => Representation::Lab,
            ColorSpace::Linear => Representation::Linear,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ClipStrategy {
    PreserveChroma,
    ProjectToMidpoint,
    /// Project toward the configured `l0`
    ProjectTo,
    ProjectToCusp,
    #[default]
    AdaptiveMidpoint,
    AdaptiveCusp,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ClipConfig {
    #[serde(default)]
    pub strategy: ClipStrategy,

    /// Strength of the adaptive strategies
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Anchor lightness for `project-to`, clamped to `[0, 1]`
    #[serde(default = "default_l0")]
    pub l0: f64,
}

fn default_alpha() -> f64 {
    0.05
}

fn default_l0() -> f64 {
    0.5
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            strategy: ClipStrategy::default(),
            alpha: default_alpha(),
            l0: default_l0(),
        }
    }
}

impl From<ClipConfig> for Clipper {
    fn from(config: ClipConfig) -> Self {
        match config.strategy {
            ClipStrategy::PreserveChroma => Clipper::PreserveChroma,
            ClipStrategy::ProjectToMidpoint => Clipper::ProjectToMidpoint,
            // an anchor outside [0, 1] is not inside the gamut
            ClipStrategy::ProjectTo => Clipper::ProjectTo {
                l0: config.l0.clamp(0.0, 1.0),
            },
            ClipStrategy::ProjectToCusp => Clipper::ProjectToCusp,
            ClipStrategy::AdaptiveMidpoint => Clipper::AdaptiveMidpoint {
                alpha: config.alpha,
            },
            ClipStrategy::AdaptiveCusp => Clipper::AdaptiveCusp {
                alpha: config.alpha,
            },
        }
    }
}

impl QuantizeConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration, falling back to defaults when the file is missing
    /// or invalid
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    palette = %config.palette,
                    custom_palettes = config.palettes.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn clipper(&self) -> Clipper {
        self.clip.into()
    }

    /// Load the configured palette, matched in the configured space
    pub fn resolve_palette(&self) -> Result<AnyPalette, PaletteError> {
        let colors = load_palette(&self.palette, &self.palettes)?;
        Ok(AnyPalette::from_rgba8(&colors, self.space.into()))
    }
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            space: ColorSpace::default(),
            clip: ClipConfig::default(),
            palettes: HashMap::new(),
        }
    }
}
