//! Resolving a palette spec string to colors.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use okcolor::Rgba8;

use super::builtin;
use crate::error::PaletteError;
use crate::riff;

/// Where a palette comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteSource {
    /// One of [`builtin::names`]
    Builtin(String),
    /// A named palette from configuration, as hex strings
    Custom { name: String, colors: Vec<String> },
    /// A RIFF `PAL ` file on disk
    File(PathBuf),
}

impl PaletteSource {
    /// Work out what `spec` refers to.
    ///
    /// Custom names shadow built-in ones. Anything else that looks like a
    /// path (has an extension or a separator) is treated as a file.
    pub fn parse(spec: &str, custom: &HashMap<String, Vec<String>>) -> Result<Self, PaletteError> {
        let spec = spec.trim();
        if let Some(colors) = custom.get(spec) {
            return Ok(PaletteSource::Custom {
                name: spec.to_string(),
                colors: colors.clone(),
            });
        }
        if builtin::lookup(spec).is_some() {
            return Ok(PaletteSource::Builtin(spec.to_ascii_lowercase()));
        }
        if spec.contains('.') || spec.contains(std::path::MAIN_SEPARATOR) || spec.contains('/') {
            return Ok(PaletteSource::File(PathBuf::from(spec)));
        }
        Err(PaletteError::UnknownPalette(spec.to_string()))
    }

    /// Produce the colors, reading the file for [`PaletteSource::File`].
    pub fn load(&self) -> Result<Vec<Rgba8>, PaletteError> {
        match self {
            PaletteSource::Builtin(name) => {
                builtin::lookup(name).ok_or_else(|| PaletteError::UnknownPalette(name.clone()))
            }
            PaletteSource::Custom { name, colors } => colors
                .iter()
                .map(|value| {
                    value.parse::<Rgba8>().map_err(|source| PaletteError::ParseColor {
                        palette: name.clone(),
                        value: value.clone(),
                        source,
                    })
                })
                .collect(),
            PaletteSource::File(path) => read_file(path),
        }
    }
}

impl fmt::Display for PaletteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteSource::Builtin(name) => write!(f, "builtin:{name}"),
            PaletteSource::Custom { name, .. } => write!(f, "custom:{name}"),
            PaletteSource::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<Rgba8>, PaletteError> {
    let file = File::open(path).map_err(|source| PaletteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let chunks = riff::read_palettes(BufReader::new(file))?;
    // the file stores no alpha; resolve like the built-ins, fully opaque
    Ok(chunks
        .into_iter()
        .flatten()
        .map(|c| Rgba8::opaque(c.r, c.g, c.b))
        .collect())
}

/// Resolve `spec` and load its colors.
pub fn load_palette(
    spec: &str,
    custom: &HashMap<String, Vec<String>>,
) -> Result<Vec<Rgba8>, PaletteError> {
    let source = PaletteSource::parse(spec, custom)?;
    let colors = source.load()?;
    tracing::info!(source = %source, colors = colors.len(), "Loaded palette");
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_custom() -> HashMap<String, Vec<String>> {
        HashMap::new()
    }

    #[test]
    fn test_parse_builtin() {
        let source = PaletteSource::parse("Spectra6", &no_custom()).unwrap();
        assert_eq!(source, PaletteSource::Builtin("spectra6".to_string()));
        assert_eq!(source.to_string(), "builtin:spectra6");
    }

    #[test]
    fn test_custom_shadows_builtin() {
        let mut custom = no_custom();
        custom.insert("bw".to_string(), vec!["#000".to_string(), "#f00".to_string()]);
        let source = PaletteSource::parse("bw", &custom).unwrap();
        assert!(matches!(source, PaletteSource::Custom { .. }));
        assert_eq!(
            source.load().unwrap(),
            vec![Rgba8::opaque(0, 0, 0), Rgba8::opaque(255, 0, 0)]
        );
    }

    #[test]
    fn test_parse_file() {
        let source = PaletteSource::parse("colors.pal", &no_custom()).unwrap();
        assert_eq!(source, PaletteSource::File(PathBuf::from("colors.pal")));
        let source = PaletteSource::parse("dir/colors", &no_custom()).unwrap();
        assert_eq!(source, PaletteSource::File(PathBuf::from("dir/colors")));
    }

    #[test]
    fn test_parse_unknown() {
        match PaletteSource::parse("sepia", &no_custom()) {
            Err(PaletteError::UnknownPalette(name)) => assert_eq!(name, "sepia"),
            other => panic!("Expected UnknownPalette, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_bad_color() {
        let mut custom = no_custom();
        custom.insert("sepia".to_string(), vec!["#2b1d0e".to_string(), "oops".to_string()]);
        match load_palette("sepia", &custom) {
            Err(PaletteError::ParseColor { palette, value, .. }) => {
                assert_eq!(palette, "sepia");
                assert_eq!(value, "oops");
            }
            other => panic!("Expected ParseColor, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match load_palette("/definitely/not/here.pal", &no_custom()) {
            Err(PaletteError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.pal"))
            }
            other => panic!("Expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.pal");
        let colors = vec![Rgba8::opaque(1, 2, 3), Rgba8::opaque(250, 251, 252)];
        let file = File::create(&path).unwrap();
        riff::write_palettes(file, &[&colors[..]]).unwrap();

        let loaded = load_palette(path.to_str().unwrap(), &no_custom()).unwrap();
        assert_eq!(loaded, colors);
    }
}
