//! Assertion helpers for tests.

use okcolor::Rgba8;
use pretty_assertions::assert_eq;

/// Assert two palettes agree on their RGB channels, ignoring alpha
pub fn assert_same_rgb(actual: &[Rgba8], expected: &[Rgba8]) {
    let actual: Vec<[u8; 3]> = actual.iter().map(|c| c.rgb()).collect();
    let expected: Vec<[u8; 3]> = expected.iter().map(|c| c.rgb()).collect();
    assert_eq!(actual, expected);
}

/// Assert a buffer starts with a RIFF `PAL ` header declaring `len - 8` bytes
pub fn assert_riff_header(bytes: &[u8]) {
    assert!(bytes.len() >= 12, "Document too short: {} bytes", bytes.len());
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"PAL ");
    let declared = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
    assert_eq!(declared, bytes.len() - 8, "Declared size mismatch");
}
