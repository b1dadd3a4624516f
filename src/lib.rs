// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_xterm_color
//!
//! Decorate terminal text with ANSI escape sequences: the 8 named colors
//! as foreground, background or highlight, text attributes (bold, italic,
//! underline, strike, blink), and xterm 256 (8-bit) color approximation
//! from hex or RGB input.
//!
//! # Example usage
//!
//! ```rust
//! use r3bl_xterm_color::*;
//!
//! // 8-bit color.
//! println!("{}{}{}", red("red"), green("green"), blue("blue"));
//! println!("{}{}", bold(yellow("bold yellow")), underline(cyan("underline cyan")));
//! println!("{}", magenta_hl("magenta highlight"));
//!
//! // xterm 256 color, from hex or RGB.
//! # fn demo() -> Result<(), HexColorError> {
//! println!("{}", bg256("A9D5DE", fg256("276F86", "Info!")?)?);
//! println!("{}", hl256((16, 163, 163), "Teal")?);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! Every decoration function returns the same kind of value it received
//! (`&str`/[`String`] in → [`String`] out, `&[u8]`/[`Vec<u8>`] in →
//! [`Vec<u8>`] out), so results drop into any string formatting
//! situation. Decorations nest freely: each style class is terminated by
//! its own specific off-code, never the universal reset, so an inner span
//! cannot clobber an outer one.
//!
//! Whether decoration is applied at all is a process-wide policy (TTY
//! detection, `NO_COLOR`, CI, an explicit override); see
//! [`global_color_mode`] and [`use_color_no_tty`].
//!
//! The RGB → xterm index quantization and hex parsing are memoized for
//! the lifetime of the process, since CLIs tend to re-decorate the same
//! few colors across many spans.

// Attach.
mod color;
mod convert;
mod decorate;
mod hex_color;
mod memoize;
mod sgr_code;
mod use_color;

// Re-export.
pub use color::*;
pub use convert::*;
pub use decorate::*;
pub use hex_color::*;
pub use memoize::*;
pub use sgr_code::*;
pub use use_color::*;
