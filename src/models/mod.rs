pub mod config;

pub use config::{ClipConfig, ClipStrategy, ColorSpace, QuantizeConfig};
