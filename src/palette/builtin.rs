//! Palettes that ship with the crate.
//!
//! | Name       | Colors | Notes                                      |
//! |------------|--------|--------------------------------------------|
//! | `bw`       | 2      | black, white                               |
//! | `gray16`   | 16     | even steps of 17                           |
//! | `spectra6` | 6      | six-color e-paper panels                   |
//! | `vga16`    | 16     | EGA/VGA text mode colors                   |
//! | `vga256`   | 256    | default VGA mode 13h palette               |

use okcolor::Rgba8;

/// Names of every built-in palette.
pub const NAMES: [&str; 5] = ["bw", "gray16", "spectra6", "vga16", "vga256"];

/// Names of every built-in palette.
pub fn names() -> &'static [&'static str] {
    &NAMES
}

/// Colors of the built-in palette called `name`, if there is one.
///
/// Names are matched case-insensitively.
pub fn lookup(name: &str) -> Option<Vec<Rgba8>> {
    match name.to_ascii_lowercase().as_str() {
        "bw" => Some(vec![Rgba8::opaque(0, 0, 0), Rgba8::opaque(255, 255, 255)]),
        "gray16" => Some((0..16u8).map(|i| Rgba8::opaque(i * 17, i * 17, i * 17)).collect()),
        "spectra6" => Some(from_hex(&SPECTRA6)),
        "vga16" => Some(from_hex(&VGA16)),
        "vga256" => Some(vga256()),
        _ => None,
    }
}

const SPECTRA6: [u32; 6] = [
    0x000000, 0xFFFFFF, 0xFFFF00, 0xFF0000, 0x0000FF, 0x00FF00,
];

const VGA16: [u32; 16] = [
    0x000000, 0x0000AA, 0x00AA00, 0x00AAAA, 0xAA0000, 0xAA00AA, 0xAA5500, 0xAAAAAA,
    0x555555, 0x5555FF, 0x55FF55, 0x55FFFF, 0xFF5555, 0xFF55FF, 0xFFFF55, 0xFFFFFF,
];

fn from_hex(colors: &[u32]) -> Vec<Rgba8> {
    colors
        .iter()
        .map(|&c| Rgba8::opaque((c >> 16) as u8, (c >> 8) as u8, c as u8))
        .collect()
}

/// 6-bit DAC levels of the gray ramp at indices 16..32.
const GRAY_RAMP: [u8; 16] = [0, 5, 8, 11, 14, 17, 20, 24, 28, 32, 36, 40, 45, 50, 56, 63];

/// (high, low) DAC levels of the nine 24-color hue wheels.
const WHEEL_BLOCKS: [(u8, u8); 9] = [
    (63, 0),
    (63, 31),
    (63, 45),
    (28, 0),
    (28, 14),
    (28, 20),
    (16, 0),
    (16, 8),
    (16, 11),
];

/// Scale a 6-bit DAC level to 8 bits.
fn dac(v: u8) -> u8 {
    ((v as u32 * 255 + 31) / 63) as u8
}

fn dac_color(r: u8, g: u8, b: u8) -> Rgba8 {
    Rgba8::opaque(dac(r), dac(g), dac(b))
}

/// One hue wheel: starts at blue and walks the six edges of the RGB cube
/// between `low` and `high` in five levels per edge.
fn wheel(high: u8, low: u8) -> Vec<Rgba8> {
    let span = (high - low) as u32;
    let ramp: [u8; 5] = std::array::from_fn(|k| ((4 * low as u32 + span * k as u32 + 1) / 4) as u8);

    // channel index, direction
    const EDGES: [(usize, bool); 6] = [
        (0, true),
        (2, false),
        (1, true),
        (0, false),
        (2, true),
        (1, false),
    ];

    let mut level = [0usize, 0, 4];
    let mut colors = Vec::with_capacity(25);
    colors.push(dac_color(ramp[level[0]], ramp[level[1]], ramp[level[2]]));
    for (channel, up) in EDGES {
        for _ in 0..4 {
            if up {
                level[channel] += 1;
            } else {
                level[channel] -= 1;
            }
            colors.push(dac_color(ramp[level[0]], ramp[level[1]], ramp[level[2]]));
        }
    }
    // the last step lands back on the starting blue
    colors.truncate(24);
    colors
}

fn vga256() -> Vec<Rgba8> {
    let mut colors = from_hex(&VGA16);
    colors.extend(GRAY_RAMP.iter().map(|&v| dac_color(v, v, v)));
    for (high, low) in WHEEL_BLOCKS {
        colors.extend(wheel(high, low));
    }
    colors.resize(256, Rgba8::opaque(0, 0, 0));
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in names() {
            assert!(lookup(name).is_some(), "{name}");
        }
        assert!(lookup("sepia").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("VGA16"), lookup("vga16"));
    }

    #[test]
    fn test_sizes() {
        let sizes: Vec<usize> = names().iter().map(|n| lookup(n).unwrap().len()).collect();
        assert_eq!(sizes, vec![2, 16, 6, 16, 256]);
    }

    #[test]
    fn test_gray16_ends() {
        let gray = lookup("gray16").unwrap();
        assert_eq!(gray[0], Rgba8::opaque(0, 0, 0));
        assert_eq!(gray[15], Rgba8::opaque(255, 255, 255));
    }

    #[test]
    fn test_vga256_starts_with_vga16() {
        let vga16 = lookup("vga16").unwrap();
        let vga256 = lookup("vga256").unwrap();
        assert_eq!(&vga256[..16], &vga16[..]);
    }

    #[test]
    fn test_vga256_landmarks() {
        let vga = lookup("vga256").unwrap();
        let hex = |i: usize| {
            let c = vga[i];
            (c.r as u32) << 16 | (c.g as u32) << 8 | c.b as u32
        };
        assert_eq!(hex(16), 0x000000);
        assert_eq!(hex(17), 0x141414);
        assert_eq!(hex(31), 0xFFFFFF);
        assert_eq!(hex(32), 0x0000FF);
        assert_eq!(hex(33), 0x4100FF);
        assert_eq!(hex(36), 0xFF00FF);
        assert_eq!(hex(40), 0xFF0000);
        assert_eq!(hex(44), 0xFFFF00);
        assert_eq!(hex(48), 0x00FF00);
        assert_eq!(hex(52), 0x00FFFF);
        assert_eq!(hex(55), 0x0041FF);
        assert_eq!(hex(56), 0x7D7DFF);
        assert_eq!(hex(104), 0x000071);
        assert!(vga[248..].iter().all(|&c| c == Rgba8::opaque(0, 0, 0)));
    }

    #[test]
    fn test_all_opaque() {
        for name in names() {
            assert!(lookup(name).unwrap().iter().all(|c| c.a == 255), "{name}");
        }
    }
}
