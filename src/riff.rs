//! RIFF `PAL ` palette files.
//!
//! A document is `"RIFF"`, a little-endian u32 size, the form type `"PAL "`
//! and a sequence of chunks. Each `data` chunk holds one logical palette:
//!
//! ```text
//! u16 version (big-endian, always 3)
//! u16 count   (little-endian)
//! count × [R, G, B, flags]
//! ```
//!
//! `LIST` chunks of list type `"PAL "` nest further chunks. The flags byte is
//! not a color channel; decoded colors carry alpha 0 and encoded entries
//! always write 0.

use std::fmt;
use std::io::{Read, Write};

use okcolor::Rgba8;
use thiserror::Error;

/// A four character chunk or form identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
    pub const RIFF: FourCc = FourCc(*b"RIFF");
    pub const LIST: FourCc = FourCc(*b"LIST");
    pub const PAL: FourCc = FourCc(*b"PAL ");
    pub const DATA: FourCc = FourCc(*b"data");

    fn read(buf: &[u8]) -> Self {
        FourCc([buf[0], buf[1], buf[2], buf[3]])
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

/// Palette version stored in every `data` chunk.
const VERSION: u16 = 3;

#[derive(Debug, Error)]
pub enum RiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a RIFF stream (magic {0})")]
    BadMagic(FourCc),

    #[error("unsupported RIFF content type: {0}")]
    UnsupportedFormType(FourCc),

    #[error("unsupported chunk type in {path}: {id}")]
    UnsupportedChunk { path: String, id: FourCc },

    #[error("chunk {path} has unsupported list type: {list_type}")]
    UnsupportedListType { path: String, list_type: FourCc },

    #[error("unsupported palette version in chunk {path}: {version}")]
    UnsupportedVersion { path: String, version: u16 },

    #[error("not enough bytes in {path} to read {what}: need {needed}, have {available}")]
    Truncated {
        path: String,
        what: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("palette {index} has {count} colors (max 65535 per chunk)")]
    TooManyColors { index: usize, count: usize },

    #[error("document size {size} does not fit in a RIFF header")]
    DocumentTooLarge { size: u64 },
}

fn truncated(path: &str, what: &'static str, needed: usize, available: usize) -> RiffError {
    RiffError::Truncated {
        path: path.to_string(),
        what,
        needed,
        available,
    }
}

/// Read every palette in a RIFF `PAL ` document, in file order.
///
/// Nested `LIST` chunks are flattened depth-first.
pub fn read_palettes<R: Read>(mut r: R) -> Result<Vec<Vec<Rgba8>>, RiffError> {
    let mut header = Vec::with_capacity(12);
    r.by_ref().take(12).read_to_end(&mut header)?;
    if header.len() < 12 {
        return Err(truncated("RIFF", "header", 12, header.len()));
    }

    let magic = FourCc::read(&header[0..4]);
    if magic != FourCc::RIFF {
        return Err(RiffError::BadMagic(magic));
    }
    let size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;
    let form_type = FourCc::read(&header[8..12]);
    if form_type != FourCc::PAL {
        return Err(RiffError::UnsupportedFormType(form_type));
    }

    // the declared size counts the form type
    let declared = size.saturating_sub(4);
    let mut body = Vec::with_capacity(declared.min(1 << 20));
    r.take(declared as u64).read_to_end(&mut body)?;

    let mut palettes = Vec::new();
    read_chunks(&body, &form_type.to_string(), &mut palettes)?;

    if body.len() < declared {
        return Err(truncated("RIFF", "document", declared, body.len()));
    }

    Ok(palettes)
}

fn read_chunks(mut rest: &[u8], ident: &str, out: &mut Vec<Vec<Rgba8>>) -> Result<(), RiffError> {
    let mut index = 0;
    while !rest.is_empty() {
        let path = format!("{ident}#{index}");

        if rest.len() < 8 {
            return Err(truncated(&path, "chunk header", 8, rest.len()));
        }
        let id = FourCc::read(&rest[0..4]);
        let size = u32::from_le_bytes([rest[4], rest[5], rest[6], rest[7]]) as usize;
        let body = &rest[8..];
        if body.len() < size {
            return Err(truncated(&path, "chunk data", size, body.len()));
        }
        let (data, tail) = body.split_at(size);
        // odd-sized chunks are followed by a pad byte
        rest = if size % 2 == 1 && !tail.is_empty() {
            &tail[1..]
        } else {
            tail
        };

        match id {
            FourCc::DATA => out.push(read_palette(data, &path)?),
            FourCc::LIST => {
                if data.len() < 4 {
                    return Err(truncated(&path, "list type", 4, data.len()));
                }
                let list_type = FourCc::read(&data[0..4]);
                if list_type != FourCc::PAL {
                    return Err(RiffError::UnsupportedListType { path, list_type });
                }
                read_chunks(&data[4..], &format!("{path}.{list_type}"), out)?;
            }
            other => return Err(RiffError::UnsupportedChunk { path, id: other }),
        }

        index += 1;
    }
    Ok(())
}

fn read_palette(data: &[u8], path: &str) -> Result<Vec<Rgba8>, RiffError> {
    if data.len() < 2 {
        return Err(truncated(path, "version", 2, data.len()));
    }
    let version = u16::from_be_bytes([data[0], data[1]]);
    if version != VERSION {
        return Err(RiffError::UnsupportedVersion {
            path: path.to_string(),
            version,
        });
    }

    if data.len() < 4 {
        return Err(truncated(path, "number of entries", 2, data.len() - 2));
    }
    let count = u16::from_le_bytes([data[2], data[3]]) as usize;

    let entries = &data[4..];
    if entries.len() < count * 4 {
        return Err(truncated(path, "colors", count * 4, entries.len()));
    }

    let colors: Vec<Rgba8> = entries[..count * 4]
        .chunks_exact(4)
        .map(|e| Rgba8::new(e[0], e[1], e[2], 0))
        .collect();

    tracing::debug!(chunk = %path, colors = colors.len(), "Decoded palette chunk");
    Ok(colors)
}

/// Write `palettes` as one RIFF `PAL ` document, one `data` chunk each.
///
/// Returns the number of bytes written.
pub fn write_palettes<W, P>(mut w: W, palettes: &[P]) -> Result<u64, RiffError>
where
    W: Write,
    P: AsRef<[Rgba8]>,
{
    let mut size: u64 = 4;
    for (index, palette) in palettes.iter().enumerate() {
        let count = palette.as_ref().len();
        if count > u16::MAX as usize {
            return Err(RiffError::TooManyColors { index, count });
        }
        // chunk id + chunk size + version + count + 4 bytes per color
        size += 4 + 4 + 4 + count as u64 * 4;
    }
    let declared = u32::try_from(size).map_err(|_| RiffError::DocumentTooLarge { size })?;

    let mut header = Vec::with_capacity(12);
    header.extend_from_slice(&FourCc::RIFF.0);
    header.extend_from_slice(&declared.to_le_bytes());
    header.extend_from_slice(&FourCc::PAL.0);
    w.write_all(&header)?;

    for (index, palette) in palettes.iter().enumerate() {
        let colors = palette.as_ref();
        let mut chunk = Vec::with_capacity(12 + colors.len() * 4);
        chunk.extend_from_slice(&FourCc::DATA.0);
        chunk.extend_from_slice(&(4 + colors.len() as u32 * 4).to_le_bytes());
        chunk.extend_from_slice(&VERSION.to_be_bytes());
        chunk.extend_from_slice(&(colors.len() as u16).to_le_bytes());
        for c in colors {
            chunk.extend_from_slice(&[c.r, c.g, c.b, 0]);
        }
        w.write_all(&chunk)?;
        tracing::debug!(chunk = index, colors = colors.len(), "Encoded palette chunk");
    }
    w.flush()?;

    Ok(8 + size)
}
