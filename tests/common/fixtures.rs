//! Test fixtures and constants.

use okcolor::Rgba8;

/// Palettes of the sizes the codec must handle
pub mod sizes {
    pub const EMPTY: usize = 0;
    pub const SINGLE: usize = 1;
    pub const SMALL: usize = 16;
    pub const FULL: usize = 256;
}

/// A deterministic palette of `n` distinct-ish colors with varying alpha
pub fn sample_palette(n: usize) -> Vec<Rgba8> {
    (0..n)
        .map(|i| {
            let i = i as u32;
            Rgba8::new(
                (i * 37 % 256) as u8,
                (i * 91 % 256) as u8,
                (i * 151 % 256) as u8,
                (255 - i % 256) as u8,
            )
        })
        .collect()
}

/// Hand-built document: one data chunk with the given version bytes and
/// `[r, g, b, flags]` entries
pub fn pal_document(version: [u8; 2], entries: &[[u8; 4]]) -> Vec<u8> {
    pal_document_with_count(version, entries.len() as u16, entries)
}

/// Like [`pal_document`], but declaring `count` entries regardless of how
/// many are present; the chunk size still matches the bytes written
pub fn pal_document_with_count(version: [u8; 2], count: u16, entries: &[[u8; 4]]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&version);
    data.extend_from_slice(&count.to_le_bytes());
    for e in entries {
        data.extend_from_slice(e);
    }

    let mut chunk = Vec::new();
    chunk.extend_from_slice(b"data");
    chunk.extend_from_slice(&(data.len() as u32).to_le_bytes());
    chunk.extend_from_slice(&data);

    let mut doc = Vec::new();
    doc.extend_from_slice(b"RIFF");
    doc.extend_from_slice(&(4 + chunk.len() as u32).to_le_bytes());
    doc.extend_from_slice(b"PAL ");
    doc.extend_from_slice(&chunk);
    doc
}

/// A YAML configuration with a custom palette
pub const SEPIA_CONFIG: &str = r##"
palette: sepia
space: lab
clip:
  strategy: preserve-chroma
palettes:
  sepia: ["#2b1d0e", "#7a5230", "#d9c3a0"]
"##;
