// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) escape sequence rendering.
//!
//! [`esc`] joins any ordered run of codes into a single sequence, e.g.
//! `esc(&[Bold, Foreground(Red), Invert])` → `"\x1b[1;31;7m"`. This is
//! pure formatting: no validation of code combinations is attempted.
//!
//! Every style class has its own specific "off" code here (39 for
//! foreground, 49 for background, 22/23/24/25/27/29 for the attributes).
//! Ending a span with the universal [`SgrCode::Reset`] instead would wipe
//! attributes an enclosing span still has open, so nothing in this crate
//! emits code 0 as an end code.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#graphics>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::BasicColor;

pub mod sizing {
    use super::SmallString;

    /// Fits the longest sequence this crate produces
    /// (`\x1b[1;38;5;nnn;7m`); anything longer spills to the heap.
    pub const ESC_SEQ_STORAGE_SIZE: usize = 16;
    pub type InlineEscSeq = SmallString<[u8; ESC_SEQ_STORAGE_SIZE]>;
}
pub use sizing::InlineEscSeq;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Italic,
    Underline,
    SlowBlink,
    Invert,
    Strikethrough,
    /// Turns off bold (and dim).
    NormalIntensity,
    NoItalic,
    NoUnderline,
    NoBlink,
    NoInvert,
    NoStrikethrough,
    Foreground(BasicColor),
    Background(BasicColor),
    ResetForeground,
    ResetBackground,
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
}

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

impl SgrCode {
    /// Writes the parameter portion only, without `CSI`/`SGR` framing.
    #[rustfmt::skip]
    fn write_param(self, f: &mut Formatter<'_>) -> Result {
        match self {
            SgrCode::Reset                    => write!(f, "0"),
            SgrCode::Bold                     => write!(f, "1"),
            SgrCode::Italic                   => write!(f, "3"),
            SgrCode::Underline                => write!(f, "4"),
            SgrCode::SlowBlink                => write!(f, "5"),
            SgrCode::Invert                   => write!(f, "7"),
            SgrCode::Strikethrough            => write!(f, "9"),
            SgrCode::NormalIntensity          => write!(f, "22"),
            SgrCode::NoItalic                 => write!(f, "23"),
            SgrCode::NoUnderline              => write!(f, "24"),
            SgrCode::NoBlink                  => write!(f, "25"),
            SgrCode::NoInvert                 => write!(f, "27"),
            SgrCode::NoStrikethrough          => write!(f, "29"),
            SgrCode::Foreground(color)        => write!(f, "{}", 30 + color.offset()),
            SgrCode::ResetForeground          => write!(f, "39"),
            SgrCode::Background(color)        => write!(f, "{}", 40 + color.offset()),
            SgrCode::ResetBackground          => write!(f, "49"),
            SgrCode::ForegroundAnsi256(index) => write!(f, "38;5;{index}"),
            SgrCode::BackgroundAnsi256(index) => write!(f, "48;5;{index}"),
        }
    }
}

impl Display for SgrCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{CSI}")?;
        self.write_param(f)?;
        write!(f, "{SGR}")
    }
}

/// An ordered run of codes rendered as one escape sequence.
struct SgrCodeSeq<'a>(&'a [SgrCode]);

impl Display for SgrCodeSeq<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{CSI}")?;
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            code.write_param(f)?;
        }
        write!(f, "{SGR}")
    }
}

/// Renders `codes` joined by `;` as a single `ESC [ … m` sequence, into a
/// stack-allocated buffer.
#[must_use]
pub fn esc(codes: &[SgrCode]) -> InlineEscSeq {
    format!("{}", SgrCodeSeq(codes)).into()
}
