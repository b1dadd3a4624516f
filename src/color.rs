// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color value types.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

use strum_macros::{EnumCount, EnumIter};

/// Represents a color in RGB (24-bit) format.
///
/// Implements [`Hash`] and [`Eq`] by value so it can serve as a key in the
/// quantization cache (see [`crate::Memoize`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Represents a color in the ANSI 256-color palette format.
///
/// Indices 16-231 are the 6×6×6 color cube, 232-255 the grayscale ramp.
/// Values of this type are produced by
/// [`crate::convert_rgb_into_ansi256`], which never yields the basic
/// colors 0-15.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ansi256Color {
    pub index: u8,
}

impl Ansi256Color {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }
}

impl From<u8> for Ansi256Color {
    fn from(index: u8) -> Self { Self { index } }
}

/// The 8 named colors of the original ANSI palette.
///
/// The discriminant is the offset from the SGR foreground base code 30
/// (background base code 40). See [`crate::SgrCode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BasicColor {
    pub(crate) const fn offset(self) -> u8 { self as u8 }
}
