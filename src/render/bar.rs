//! ANSI 24-bit colour bars.

use crate::analysis::hsv_to_rgb;
use crate::types::{Hsv, Rgb};

/// Resets all terminal attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Character repeated to draw a bar.
const BAR_CHAR: char = '#';

/// 24-bit foreground colour escape for `rgb`.
pub fn ansi_foreground(rgb: Rgb) -> String {
    let [r, g, b] = rgb.to_u8();
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// A bar of `length` characters (at least one) in the colour of `hue`.
///
/// `saturation` lets a bar fade toward white; brightness is always full.
/// Without `colour` the bar is plain text.
pub fn colour_bar(hue: f32, length: usize, saturation: f32, colour: bool) -> String {
    let bar: String = std::iter::repeat(BAR_CHAR).take(length.max(1)).collect();
    if colour {
        let rgb = hsv_to_rgb(Hsv::new(hue, saturation, 1.0));
        format!("{}{}", ansi_foreground(rgb), bar)
    } else {
        bar
    }
}
