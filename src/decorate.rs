// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Composable text decoration.
//!
//! Every decoration function wraps its input between a start and an end
//! escape sequence and returns a value of the same kind it received:
//! strings come back as [`String`], byte slices as [`Vec<u8>`]. Because
//! each style class ends with its own specific off-code (see
//! [`crate::SgrCode`]) rather than the universal reset, decorations
//! compose by plain nesting:
//!
//! ```
//! use r3bl_xterm_color::{bold, red, yellow};
//!
//! let sentence = bold(red("fox"));          // bold wrapping red.
//! let mixed = format!("{} and {}", sentence, yellow("hen"));
//! ```
//!
//! The `*_bg` functions set the color as background, the `*_hl` functions
//! set it as background-like emphasis (bold + inverse + color) so the
//! word stands out. [`fg256`], [`bg256`] and [`hl256`] take a hex string
//! or an RGB triple and run it through the xterm-256 quantizer.

use std::sync::LazyLock;

use strum::{EnumCount, IntoEnumIterator};

use crate::{BasicColor, HexColorError, InlineEscSeq, RgbColor, SgrCode, esc,
            global_color_mode, hex_to_rgb, rgb_to_xterm};

/// A reusable (start sequence, end sequence) pair for one style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleCode {
    start: InlineEscSeq,
    end: InlineEscSeq,
}

impl StyleCode {
    #[must_use]
    pub fn new(start: &[SgrCode], end: &[SgrCode]) -> Self {
        Self {
            start: esc(start),
            end: esc(end),
        }
    }

    /// Wraps `text` in this style's start/end sequences, or returns it
    /// unchanged (owned) when decoration is globally off.
    pub fn apply<T: Decorate>(&self, text: T) -> T::Output {
        if global_color_mode::detect() {
            text.wrap(self.start.as_str(), self.end.as_str())
        } else {
            text.plain()
        }
    }
}

/// Ties an input text kind to its decorated output kind: text in → text
/// out, bytes in → bytes out. Implemented for `&str`/[`String`] (output
/// [`String`]) and `&[u8]`/[`Vec<u8>`] (output [`Vec<u8>`]).
pub trait Decorate {
    type Output;

    /// `start ++ self ++ end`.
    fn wrap(self, start: &str, end: &str) -> Self::Output;

    /// The undecorated input, converted to its owned output kind only.
    fn plain(self) -> Self::Output;
}

impl Decorate for &str {
    type Output = String;

    fn wrap(self, start: &str, end: &str) -> String { format!("{start}{self}{end}") }

    fn plain(self) -> String { self.to_owned() }
}

impl Decorate for String {
    type Output = String;

    fn wrap(self, start: &str, end: &str) -> String { format!("{start}{self}{end}") }

    fn plain(self) -> String { self }
}

impl Decorate for &[u8] {
    type Output = Vec<u8>;

    fn wrap(self, start: &str, end: &str) -> Vec<u8> {
        let mut acc = Vec::with_capacity(start.len() + self.len() + end.len());
        acc.extend_from_slice(start.as_bytes());
        acc.extend_from_slice(self);
        acc.extend_from_slice(end.as_bytes());
        acc
    }

    fn plain(self) -> Vec<u8> { self.to_vec() }
}

impl Decorate for Vec<u8> {
    type Output = Vec<u8>;

    fn wrap(self, start: &str, end: &str) -> Vec<u8> { self.as_slice().wrap(start, end) }

    fn plain(self) -> Vec<u8> { self }
}

/// Anything [`fg256`], [`bg256`] and [`hl256`] accept as a color: an
/// [`RgbColor`], a `(r, g, b)` tuple, or a 3/6-digit hex string (the only
/// form that can fail).
pub trait IntoRgb {
    /// # Errors
    ///
    /// [`HexColorError`] for hex string inputs; infallible otherwise.
    fn into_rgb(self) -> Result<RgbColor, HexColorError>;
}

impl IntoRgb for RgbColor {
    fn into_rgb(self) -> Result<RgbColor, HexColorError> { Ok(self) }
}

impl IntoRgb for (u8, u8, u8) {
    fn into_rgb(self) -> Result<RgbColor, HexColorError> { Ok(self.into()) }
}

impl IntoRgb for &str {
    fn into_rgb(self) -> Result<RgbColor, HexColorError> { hex_to_rgb(self) }
}

/// The fixed styles, built once and reused for every decoration call.
struct StyleTable {
    fg: [StyleCode; BasicColor::COUNT],
    bg: [StyleCode; BasicColor::COUNT],
    hl: [StyleCode; BasicColor::COUNT],
    bold: StyleCode,
    italic: StyleCode,
    underline: StyleCode,
    strike: StyleCode,
    blink: StyleCode,
}

static STYLES: LazyLock<StyleTable> = LazyLock::new(StyleTable::build);

impl StyleTable {
    fn build() -> Self {
        let mut fg: [StyleCode; BasicColor::COUNT] = Default::default();
        let mut bg: [StyleCode; BasicColor::COUNT] = Default::default();
        let mut hl: [StyleCode; BasicColor::COUNT] = Default::default();

        for color in BasicColor::iter() {
            let slot = color as usize;
            fg[slot] = StyleCode::new(
                &[SgrCode::Foreground(color)],
                &[SgrCode::ResetForeground],
            );
            bg[slot] = StyleCode::new(
                &[SgrCode::Background(color)],
                &[SgrCode::ResetBackground],
            );
            hl[slot] = StyleCode::new(
                &[SgrCode::Bold, SgrCode::Foreground(color), SgrCode::Invert],
                &[
                    SgrCode::NormalIntensity,
                    SgrCode::NoInvert,
                    SgrCode::ResetForeground,
                ],
            );
        }

        Self {
            fg,
            bg,
            hl,
            bold: StyleCode::new(&[SgrCode::Bold], &[SgrCode::NormalIntensity]),
            italic: StyleCode::new(&[SgrCode::Italic], &[SgrCode::NoItalic]),
            underline: StyleCode::new(&[SgrCode::Underline], &[SgrCode::NoUnderline]),
            strike: StyleCode::new(&[SgrCode::Strikethrough], &[SgrCode::NoStrikethrough]),
            blink: StyleCode::new(&[SgrCode::SlowBlink], &[SgrCode::NoBlink]),
        }
    }
}

/// Decorate `text` with `color` as foreground.
pub fn fg<T: Decorate>(color: BasicColor, text: T) -> T::Output {
    STYLES.fg[color as usize].apply(text)
}

/// Decorate `text` with `color` as background.
pub fn bg<T: Decorate>(color: BasicColor, text: T) -> T::Output {
    STYLES.bg[color as usize].apply(text)
}

/// Decorate `text` with `color` as a highlight: bold + inverse + color,
/// undone by exactly those three off-codes.
pub fn hl<T: Decorate>(color: BasicColor, text: T) -> T::Output {
    STYLES.hl[color as usize].apply(text)
}

pub fn black<T: Decorate>(text: T) -> T::Output { fg(BasicColor::Black, text) }
pub fn red<T: Decorate>(text: T) -> T::Output { fg(BasicColor::Red, text) }
pub fn green<T: Decorate>(text: T) -> T::Output { fg(BasicColor::Green, text) }
pub fn yellow<T: Decorate>(text: T) -> T::Output { fg(BasicColor::Yellow, text) }
pub fn blue<T: Decorate>(text: T) -> T::Output { fg(BasicColor::Blue, text) }
pub fn magenta<T: Decorate>(text: T) -> T::Output { fg(BasicColor::Magenta, text) }
pub fn cyan<T: Decorate>(text: T) -> T::Output { fg(BasicColor::Cyan, text) }
pub fn white<T: Decorate>(text: T) -> T::Output { fg(BasicColor::White, text) }

pub fn black_bg<T: Decorate>(text: T) -> T::Output { bg(BasicColor::Black, text) }
pub fn red_bg<T: Decorate>(text: T) -> T::Output { bg(BasicColor::Red, text) }
pub fn green_bg<T: Decorate>(text: T) -> T::Output { bg(BasicColor::Green, text) }
pub fn yellow_bg<T: Decorate>(text: T) -> T::Output { bg(BasicColor::Yellow, text) }
pub fn blue_bg<T: Decorate>(text: T) -> T::Output { bg(BasicColor::Blue, text) }
pub fn magenta_bg<T: Decorate>(text: T) -> T::Output { bg(BasicColor::Magenta, text) }
pub fn cyan_bg<T: Decorate>(text: T) -> T::Output { bg(BasicColor::Cyan, text) }
pub fn white_bg<T: Decorate>(text: T) -> T::Output { bg(BasicColor::White, text) }

pub fn black_hl<T: Decorate>(text: T) -> T::Output { hl(BasicColor::Black, text) }
pub fn red_hl<T: Decorate>(text: T) -> T::Output { hl(BasicColor::Red, text) }
pub fn green_hl<T: Decorate>(text: T) -> T::Output { hl(BasicColor::Green, text) }
pub fn yellow_hl<T: Decorate>(text: T) -> T::Output { hl(BasicColor::Yellow, text) }
pub fn blue_hl<T: Decorate>(text: T) -> T::Output { hl(BasicColor::Blue, text) }
pub fn magenta_hl<T: Decorate>(text: T) -> T::Output { hl(BasicColor::Magenta, text) }
pub fn cyan_hl<T: Decorate>(text: T) -> T::Output { hl(BasicColor::Cyan, text) }
pub fn white_hl<T: Decorate>(text: T) -> T::Output { hl(BasicColor::White, text) }

pub fn bold<T: Decorate>(text: T) -> T::Output { STYLES.bold.apply(text) }
pub fn italic<T: Decorate>(text: T) -> T::Output { STYLES.italic.apply(text) }
pub fn underline<T: Decorate>(text: T) -> T::Output { STYLES.underline.apply(text) }
pub fn strike<T: Decorate>(text: T) -> T::Output { STYLES.strike.apply(text) }
pub fn blink<T: Decorate>(text: T) -> T::Output { STYLES.blink.apply(text) }

/// Decorate `text` with the xterm-256 approximation of `color` as
/// foreground.
///
/// # Errors
///
/// [`HexColorError`] when `color` is an invalid hex string.
pub fn fg256<C: IntoRgb, T: Decorate>(color: C, text: T) -> Result<T::Output, HexColorError> {
    let ansi = rgb_to_xterm(color.into_rgb()?);
    let style = StyleCode::new(
        &[SgrCode::ForegroundAnsi256(ansi.index)],
        &[SgrCode::ResetForeground],
    );
    Ok(style.apply(text))
}

/// Decorate `text` with the xterm-256 approximation of `color` as
/// background.
///
/// # Errors
///
/// [`HexColorError`] when `color` is an invalid hex string.
pub fn bg256<C: IntoRgb, T: Decorate>(color: C, text: T) -> Result<T::Output, HexColorError> {
    let ansi = rgb_to_xterm(color.into_rgb()?);
    let style = StyleCode::new(
        &[SgrCode::BackgroundAnsi256(ansi.index)],
        &[SgrCode::ResetBackground],
    );
    Ok(style.apply(text))
}

/// Decorate `text` with the xterm-256 approximation of `color` as a
/// highlight (bold + inverse + color).
///
/// # Errors
///
/// [`HexColorError`] when `color` is an invalid hex string.
pub fn hl256<C: IntoRgb, T: Decorate>(color: C, text: T) -> Result<T::Output, HexColorError> {
    let ansi = rgb_to_xterm(color.into_rgb()?);
    let style = StyleCode::new(
        &[
            SgrCode::Bold,
            SgrCode::ForegroundAnsi256(ansi.index),
            SgrCode::Invert,
        ],
        &[
            SgrCode::NoInvert,
            SgrCode::ResetForeground,
            SgrCode::NormalIntensity,
        ],
    );
    Ok(style.apply(text))
}

/// Decorate `text` with grayscale ramp `level` (0 = darkest, 23 =
/// lightest) as foreground, addressing palette indices 232-255 directly.
pub fn grayscale<T: Decorate>(level: u8, text: T) -> T::Output {
    StyleCode::new(
        &[SgrCode::ForegroundAnsi256(grayscale_index(level))],
        &[SgrCode::ResetForeground],
    )
    .apply(text)
}

/// Grayscale ramp `level` as background.
pub fn grayscale_bg<T: Decorate>(level: u8, text: T) -> T::Output {
    StyleCode::new(
        &[SgrCode::BackgroundAnsi256(grayscale_index(level))],
        &[SgrCode::ResetBackground],
    )
    .apply(text)
}

/// Grayscale ramp `level` as highlight (bold + inverse + color).
pub fn grayscale_hl<T: Decorate>(level: u8, text: T) -> T::Output {
    StyleCode::new(
        &[
            SgrCode::Bold,
            SgrCode::ForegroundAnsi256(grayscale_index(level)),
            SgrCode::Invert,
        ],
        &[
            SgrCode::NoInvert,
            SgrCode::ResetForeground,
            SgrCode::NormalIntensity,
        ],
    )
    .apply(text)
}

fn grayscale_index(level: u8) -> u8 {
    debug_assert!(level < 24, "grayscale level must be in 0-23, got {level}");
    232 + level.min(23)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::ColorMode;

    fn force_color_on() { global_color_mode::set_override(ColorMode::Enabled); }

    #[serial]
    #[test]
    fn named_foreground_background_highlight() {
        force_color_on();
        assert_eq!(red("x"), "\x1b[31mx\x1b[39m");
        assert_eq!(black("x"), "\x1b[30mx\x1b[39m");
        assert_eq!(white("x"), "\x1b[37mx\x1b[39m");
        assert_eq!(green_bg("x"), "\x1b[42mx\x1b[49m");
        assert_eq!(magenta_hl("x"), "\x1b[1;35;7mx\x1b[22;27;39m");
    }

    #[serial]
    #[test]
    fn attributes_end_with_their_own_off_codes() {
        force_color_on();
        assert_eq!(bold("x"), "\x1b[1mx\x1b[22m");
        assert_eq!(italic("x"), "\x1b[3mx\x1b[23m");
        assert_eq!(underline("x"), "\x1b[4mx\x1b[24m");
        assert_eq!(strike("x"), "\x1b[9mx\x1b[29m");
        assert_eq!(blink("x"), "\x1b[5mx\x1b[25m");
    }

    /// Nested decorations keep both starts before the text and both
    /// specific end codes after it, innermost end first, and the
    /// universal reset never appears.
    #[serial]
    #[test]
    fn nesting_does_not_interfere() {
        force_color_on();
        let nested = red(bold("txt"));
        assert_eq!(nested, "\x1b[31m\x1b[1mtxt\x1b[22m\x1b[39m");
        assert!(!nested.contains("\x1b[0m"));

        let triple = bold(red(green_bg("txt")));
        assert_eq!(
            triple,
            "\x1b[1m\x1b[31m\x1b[42mtxt\x1b[49m\x1b[39m\x1b[22m"
        );
        assert!(!triple.contains("\x1b[0m"));
    }

    #[serial]
    #[test]
    fn xterm256_foreground_from_hex() {
        force_color_on();
        assert_eq!(fg256("10a3a3", "Teal"), Ok("\x1b[38;5;37mTeal\x1b[39m".into()));
        // Shorthand "555" is a pure gray: rides the ramp.
        assert_eq!(fg256("555", "gray"), Ok("\x1b[38;5;240mgray\x1b[39m".into()));
    }

    #[serial]
    #[test]
    fn xterm256_background_and_highlight_from_rgb() {
        force_color_on();
        assert_eq!(bg256((0, 0, 0), "x"), Ok("\x1b[48;5;232mx\x1b[49m".into()));
        assert_eq!(
            hl256((100, 150, 200), "x"),
            Ok("\x1b[1;38;5;68;7mx\x1b[27;39;22m".into())
        );
        assert_eq!(
            hl256(RgbColor::from_u8(100, 150, 200), "x"),
            Ok("\x1b[1;38;5;68;7mx\x1b[27;39;22m".into())
        );
    }

    #[serial]
    #[test]
    fn xterm256_invalid_hex_is_reported() {
        force_color_on();
        assert_eq!(
            fg256("abcde", "x"),
            Err(HexColorError::InvalidLength(5))
        );
        assert_eq!(
            bg256("ggg", "x"),
            Err(HexColorError::InvalidDigit("ggg".into()))
        );
    }

    #[serial]
    #[test]
    fn bytes_in_bytes_out() {
        force_color_on();
        let decorated = red(&b"abc"[..]);
        assert_eq!(decorated, b"\x1b[31mabc\x1b[39m".to_vec());

        let nested = bold(red(&b"abc"[..]));
        assert_eq!(nested, b"\x1b[1m\x1b[31mabc\x1b[39m\x1b[22m".to_vec());
    }

    #[serial]
    #[test]
    fn grayscale_ramp_levels() {
        force_color_on();
        assert_eq!(grayscale(0, "x"), "\x1b[38;5;232mx\x1b[39m");
        assert_eq!(grayscale(23, "x"), "\x1b[38;5;255mx\x1b[39m");
        assert_eq!(grayscale_bg(12, "x"), "\x1b[48;5;244mx\x1b[49m");
        assert_eq!(grayscale_hl(23, "x"), "\x1b[1;38;5;255;7mx\x1b[27;39;22m");
    }

    #[serial]
    #[test]
    fn disabled_mode_passes_text_through() {
        global_color_mode::set_override(ColorMode::Disabled);
        assert_eq!(red("plain"), "plain");
        assert_eq!(bold(String::from("plain")), "plain");
        assert_eq!(red(&b"plain"[..]), b"plain".to_vec());
        assert_eq!(fg256("10a3a3", "plain"), Ok("plain".into()));
        // The color argument is validated before the mode check, so
        // errors surface even with decoration off.
        assert_eq!(fg256("nope", "plain"), Err(HexColorError::InvalidLength(4)));
        global_color_mode::clear_override();
    }

    #[serial]
    #[test]
    fn combination_in_format_strings() {
        force_color_on();
        let sentence = format!(
            "the quick {} jump over the {} dog",
            yellow("brown fox"),
            red_bg("lazy")
        );
        let decorated = green(sentence.as_str());
        assert!(decorated.starts_with("\x1b[32mthe quick"));
        assert!(decorated.ends_with("dog\x1b[39m"));
        assert!(decorated.contains("\x1b[33mbrown fox\x1b[39m"));
        assert!(decorated.contains("\x1b[41mlazy\x1b[49m"));
        assert!(!decorated.contains("\x1b[0m"));
    }
}
