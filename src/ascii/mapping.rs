//! Brightness to character mapping.

use super::charset::{RampOrder, RAMP_LEN};

/// Ramp index for a brightness value in `[0, 255]`.
///
/// Formula: `floor(brightness / 255 * (RAMP_LEN - 1))`, clamped to the ramp.
/// Values outside `[0, 255]` and NaN are clamped rather than rejected.
#[inline]
pub fn brightness_index(brightness: f64) -> usize {
    let scaled = (brightness / 255.0 * (RAMP_LEN - 1) as f64).floor();
    // Float-to-int casts saturate, and NaN becomes 0
    (scaled as usize).min(RAMP_LEN - 1)
}

/// Map one brightness value to a ramp character.
///
/// # Arguments
/// * `brightness` - Mean RGB brightness (0-255)
/// * `reverse` - If true, read the ramp from the sparse end
///
/// # Example
/// ```ignore
/// assert_eq!(map_brightness_to_char(0.0, false), '@');
/// assert_eq!(map_brightness_to_char(255.0, false), ' ');
/// assert_eq!(map_brightness_to_char(127.5, false), '+');
/// ```
pub fn map_brightness_to_char(brightness: f64, reverse: bool) -> char {
    RampOrder::from_reverse(reverse).glyph(brightness_index(brightness))
}

/// Map a row of brightness values to characters in-place, reusing an existing buffer.
///
/// # Returns
/// The number of characters written to the buffer.
pub fn map_to_chars_into(brightness: &[f64], reverse: bool, buffer: &mut Vec<char>) -> usize {
    buffer.clear();
    buffer.reserve(brightness.len());

    let order = RampOrder::from_reverse(reverse);
    buffer.extend(brightness.iter().map(|&b| order.glyph(brightness_index(b))));

    brightness.len()
}
