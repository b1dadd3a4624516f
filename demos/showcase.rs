// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_xterm_color::{BasicColor, HexColorError, bg, bg256, blink, bold, fg, fg256,
                       grayscale, grayscale_bg, grayscale_hl, hl, hl256, italic, strike,
                       underline};
use strum::IntoEnumIterator;

fn main() -> Result<(), HexColorError> {
    // The 8 named colors as foreground, background and highlight.
    for color in BasicColor::iter() {
        let label = format!("{color:?}");
        println!(
            "{} {} {}",
            fg(color, label.as_str()),
            bg(color, label.as_str()),
            hl(color, label.as_str())
        );
    }

    // Attributes.
    println!(
        "{} {} {} {} {}",
        bold("bold"),
        italic("italic"),
        underline("underline"),
        strike("strike"),
        blink("blink")
    );

    // A sweep through the 256-color cube and ramp via shorthand hex.
    for digit in "0123456789abcdef".chars() {
        let hex: String = [digit; 3].into_iter().collect();
        print!(
            "{} {} {}  ",
            fg256(hex.as_str(), hex.as_str())?,
            bg256(hex.as_str(), hex.as_str())?,
            hl256(hex.as_str(), hex.as_str())?
        );
    }
    println!();

    // Semantic message styling, hex composed over hex.
    println!("{}", bg256("A9D5DE", fg256("276F86", " Info!    ")?)?);
    println!("{}", bg256("E0B4B4", fg256("912D2B", " Warning! ")?)?);
    println!("{}", hl256("10a3a3", "Teal")?);

    // The grayscale ramp, addressed by level.
    for level in 0..24 {
        print!("{}", grayscale(level, "▒"));
    }
    println!();
    for level in 0..24 {
        print!("{}", grayscale_bg(level, " "));
    }
    println!();
    println!("{}", grayscale_hl(12, "mid gray highlight"));

    Ok(())
}
