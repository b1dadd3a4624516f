// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process-wide policy deciding whether decoration is applied at all.
//!
//! The decoration functions always know *how* to colorize; this module
//! decides *whether* they should. Decoration is on when stdout is an
//! interactive terminal, when running under CI, or when the
//! color-without-a-TTY flag (on by default, see [`use_color_no_tty`]) is
//! set. `NO_COLOR` and `TERM=dumb` switch it off. An explicit override
//! short-circuits all of that, which is also what makes tests
//! deterministic.

use std::{env,
          sync::atomic::{AtomicBool, AtomicI8, Ordering}};

/// The color mode override value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Enabled,
    Disabled,
}

/// Emit escape sequences even when stdout is not a TTY (e.g. when piping
/// into a pager). Defaults to `true`, matching the expectation that
/// decorated output survives redirection unless the caller opts out.
pub fn use_color_no_tty(flag: bool) {
    COLOR_NO_TTY_FLAG.store(flag, Ordering::SeqCst);
}

static COLOR_NO_TTY_FLAG: AtomicBool = AtomicBool::new(true);

/// Global variable which can be used to:
/// 1. Override the color mode.
/// 2. Short-circuit the environment examination in [`global_color_mode::detect`].
pub mod global_color_mode {
    use super::*;

    static COLOR_MODE_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    /// Returns whether decoration should be applied right now.
    ///
    /// - If a value has been set using [`set_override`], that value wins.
    /// - Otherwise the environment is examined via
    ///   [`examine_env_to_determine_color_mode`].
    pub fn detect() -> bool {
        match try_get_override() {
            Ok(ColorMode::Enabled) => true,
            Ok(ColorMode::Disabled) => false,
            Err(()) => examine_env_to_determine_color_mode(Stream::Stdout),
        }
    }

    /// Override the color mode. Regardless of the environment, the value
    /// set here is what [`detect`] returns.
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
    /// function. In any test in which this function is called, please use the `#[serial]`
    /// attribute to annotate that test. Otherwise there will be flakiness in the test
    /// results (tests are run in parallel using many threads).
    pub fn set_override(value: ColorMode) {
        COLOR_MODE_GLOBAL.store(i8::from(value), Ordering::SeqCst);
    }

    pub fn clear_override() { COLOR_MODE_GLOBAL.store(NOT_SET_VALUE, Ordering::SeqCst); }

    /// Get the color mode override value, or `Err(())` when none is set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorMode, ()> {
        ColorMode::try_from(COLOR_MODE_GLOBAL.load(Ordering::SeqCst))
    }
}

/// Determine the color mode heuristically from the environment.
pub fn examine_env_to_determine_color_mode(stream: Stream) -> bool {
    if env_no_color() || as_str(&env::var("TERM")) == Ok("dumb") {
        return false;
    }
    if is_a_tty(stream) {
        return true;
    }
    if is_ci::uncached() {
        return true;
    }
    COLOR_NO_TTY_FLAG.load(Ordering::SeqCst)
}

/// The stream to check for interactivity.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// These trait implementations allow us to use `ColorMode` and `i8`
/// interchangeably (the sentinel `-1` means "not set").
mod convert_between_color_mode_and_i8 {
    impl TryFrom<i8> for super::ColorMode {
        type Error = ();

        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                0 => Ok(super::ColorMode::Disabled),
                1 => Ok(super::ColorMode::Enabled),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorMode> for i8 {
        fn from(value: super::ColorMode) -> Self {
            match value {
                super::ColorMode::Disabled => 0,
                super::ColorMode::Enabled => 1,
            }
        }
    }
}

mod helpers {
    use std::io::IsTerminal;

    use super::*;

    pub fn is_a_tty(stream: Stream) -> bool {
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    pub fn env_no_color() -> bool {
        match as_str(&env::var("NO_COLOR")) {
            Ok("0") | Err(_) => false,
            Ok(_) => true,
        }
    }
}
pub use helpers::*;

fn as_str<E>(option: &Result<String, E>) -> Result<&str, &E> {
    match option {
        Ok(inner) => Ok(inner),
        Err(e) => Err(e),
    }
}
