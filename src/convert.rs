// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB → xterm 256 palette quantization.
//!
//! The 256-color palette is not uniform: 16 basic colors, a 6×6×6 color
//! cube (indices 16-231) whose channel levels are unevenly spaced, and a
//! 24-step grayscale ramp (indices 232-255). Quantization therefore
//! branches: pure grays go to the ramp, everything else is digitized into
//! the cube using snap-point thresholds. The snap-point digitization is
//! deliberate — it reproduces the exact cell boundaries terminals expect,
//! which a generic nearest-neighbor search over all 256 entries would not
//! (the two disagree at cube-cell edges).
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://gist.github.com/MicahElliott/719710>

use std::sync::LazyLock;

use crate::{Ansi256Color, Memoize, RgbColor};

/// Channel values of the 6 quantization levels of the color cube.
pub const CUBE_LEVELS: [u8; 6] = [0x00, 0x5F, 0x87, 0xAF, 0xD7, 0xFF];

/// Midpoints between consecutive cube levels (with an implicit 0 level
/// prepended). A channel's cube coordinate is the number of snap points
/// strictly below it.
pub const SNAP_POINTS: [u8; 5] = [0x2F, 0x73, 0x9B, 0xC3, 0xEB];

/// The grayscale ramp as `(luminance, palette index)` pairs, in ascending
/// luminance order. `0x08` means `#080808`, and so on in steps of `0x0A`.
const GRAYSCALE_RAMP: [(u8, u8); 24] = [
    (0x08, 232),
    (0x12, 233),
    (0x1C, 234),
    (0x26, 235),
    (0x30, 236),
    (0x3A, 237),
    (0x44, 238),
    (0x4E, 239),
    (0x58, 240),
    (0x62, 241),
    (0x6C, 242),
    (0x76, 243),
    (0x80, 244),
    (0x8A, 245),
    (0x94, 246),
    (0x9E, 247),
    (0xA8, 248),
    (0xB2, 249),
    (0xBC, 250),
    (0xC6, 251),
    (0xD0, 252),
    (0xDA, 253),
    (0xE4, 254),
    (0xEE, 255),
];

/// Returns the index in the 256-color ANSI palette approximating `rgb`.
///
/// Pure grays (`r == g == b`) map onto the grayscale ramp (232-255), all
/// other colors onto the 6×6×6 cube (16-231). The basic colors 0-15 are
/// never produced.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbColor) -> Ansi256Color {
    let RgbColor { red, green, blue } = rgb;

    if red == green && green == blue {
        return Ansi256Color::new(nearest_grayscale_index(red));
    }

    let r = cube_coordinate(red);
    let g = cube_coordinate(green);
    let b = cube_coordinate(blue);
    Ansi256Color::new(16 + 36 * r + 6 * g + b)
}

/// Memoized front door for [`convert_rgb_into_ansi256`]. Sound because the
/// conversion is a pure function of its input.
#[must_use]
pub fn rgb_to_xterm(rgb: RgbColor) -> Ansi256Color {
    static CACHE: LazyLock<Memoize<RgbColor, Ansi256Color>> = LazyLock::new(Memoize::new);
    CACHE.get_or_insert_with(&rgb, |it| convert_rgb_into_ansi256(*it))
}

/// Nearest ramp anchor by absolute luminance difference. The scan keeps
/// the first anchor on an exact tie, i.e. ties resolve toward the darker
/// gray.
fn nearest_grayscale_index(luminance: u8) -> u8 {
    let distance = |anchor: u8| (i16::from(anchor) - i16::from(luminance)).abs();
    let mut best = GRAYSCALE_RAMP[0];
    for pair in GRAYSCALE_RAMP {
        if distance(pair.0) < distance(best.0) {
            best = pair;
        }
    }
    best.1
}

/// Digitize one channel value into a cube coordinate in `[0, 5]`.
fn cube_coordinate(channel: u8) -> u8 {
    SNAP_POINTS.iter().filter(|&&snap| snap < channel).count() as u8
}
