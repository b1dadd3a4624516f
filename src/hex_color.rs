// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Hex color string parsing.
//!
//! Accepts bare hex digits only: exactly 3 (shorthand) or 6 of them, case
//! insensitive, no `#` prefix and no whitespace trimming. The shorthand
//! form duplicates each digit, so `"555"` is the same color as
//! `"555555"`.

use std::sync::LazyLock;

use nom::{IResult, Parser, bytes::complete::take_while_m_n, combinator::map_res};
use smallstr::SmallString;

use crate::{Memoize, RgbColor};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidLength(usize),

    #[error("hex color {0:?} contains a character that is not a hex digit")]
    InvalidDigit(String),
}

/// Parse a 3- or 6-hex-digit string into an [`RgbColor`].
///
/// # Errors
///
/// [`HexColorError::InvalidLength`] when the length is neither 3 nor 6
/// (checked first), [`HexColorError::InvalidDigit`] when any character is
/// outside `[0-9a-fA-F]`.
pub fn parse_hex_color(hex: &str) -> Result<RgbColor, HexColorError> {
    let channels = match hex.len() {
        3 => {
            let mut expanded: SmallString<[u8; 8]> = SmallString::new();
            for digit in hex.chars() {
                expanded.push(digit);
                expanded.push(digit);
            }
            parse_channels(&expanded)
        }
        6 => parse_channels(hex),
        length => return Err(HexColorError::InvalidLength(length)),
    };
    channels.ok_or_else(|| HexColorError::InvalidDigit(hex.to_owned()))
}

/// Memoized front door for [`parse_hex_color`], keyed by the raw input
/// string. Failures are reported every time and never stored.
///
/// # Errors
///
/// Same as [`parse_hex_color`].
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor, HexColorError> {
    static CACHE: LazyLock<Memoize<String, RgbColor>> = LazyLock::new(Memoize::new);
    CACHE.get_or_try_insert_with(hex, parse_hex_color)
}

/// Split a 6-digit string into three 2-digit base-16 channel groups, in
/// (R, G, B) order.
fn parse_channels(hex: &str) -> Option<RgbColor> {
    let mut rgb_parser = (parse_hex_seg, parse_hex_seg, parse_hex_seg);
    match rgb_parser.parse(hex) {
        Ok((_, (red, green, blue))) => Some(RgbColor { red, green, blue }),
        Err(_) => None,
    }
}

fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |seg: &str| u8::from_str_radix(seg, 16),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("555", RgbColor::from_u8(0x55, 0x55, 0x55))]
    #[test_case("555555", RgbColor::from_u8(0x55, 0x55, 0x55))]
    #[test_case("912D2B", RgbColor::from_u8(0x91, 0x2D, 0x2B))]
    #[test_case("912d2b", RgbColor::from_u8(0x91, 0x2D, 0x2B); "case insensitive")]
    #[test_case("10a3a3", RgbColor::from_u8(0x10, 0xA3, 0xA3))]
    #[test_case("000", RgbColor::from_u8(0, 0, 0))]
    #[test_case("fff", RgbColor::from_u8(255, 255, 255))]
    fn parse_valid_color(hex: &str, expected: RgbColor) {
        assert_eq!(parse_hex_color(hex), Ok(expected));
    }

    #[test_case(""; "empty")]
    #[test_case("ab"; "two digits")]
    #[test_case("abcd"; "four digits")]
    #[test_case("abcde"; "five digits")]
    #[test_case("abcdef0"; "seven digits")]
    #[test_case("#ff0000"; "prefix is not stripped")]
    fn parse_invalid_length(hex: &str) {
        assert_eq!(parse_hex_color(hex), Err(HexColorError::InvalidLength(hex.len())));
    }

    #[test_case("ggg")]
    #[test_case("12345g")]
    #[test_case("a b"; "whitespace is not trimmed")]
    #[test_case("ff 00 "; "six bytes with spaces")]
    fn parse_invalid_digit(hex: &str) {
        assert_eq!(
            parse_hex_color(hex),
            Err(HexColorError::InvalidDigit(hex.to_owned()))
        );
    }

    /// Shorthand equivalence over the entire 3-digit input space.
    #[test]
    fn shorthand_matches_duplicated_long_form() {
        const DIGITS: &str = "0123456789abcdef";
        for r in DIGITS.chars() {
            for g in DIGITS.chars() {
                for b in DIGITS.chars() {
                    let short: String = [r, g, b].into_iter().collect();
                    let long: String = [r, r, g, g, b, b].into_iter().collect();
                    assert_eq!(parse_hex_color(&short), parse_hex_color(&long), "{short}");
                }
            }
        }
    }

    #[test]
    fn cached_front_door_agrees_with_direct_parse() {
        assert_eq!(hex_to_rgb("A9D5DE"), parse_hex_color("A9D5DE"));
        assert_eq!(hex_to_rgb("A9D5DE"), Ok(RgbColor::from_u8(0xA9, 0xD5, 0xDE)));
        assert_eq!(hex_to_rgb("zzz"), Err(HexColorError::InvalidDigit("zzz".into())));
        assert_eq!(hex_to_rgb("zzz"), Err(HexColorError::InvalidDigit("zzz".into())));
    }
}
