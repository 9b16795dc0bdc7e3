//! The character ramp used for brightness quantization.

/// Number of glyphs in the ramp, in either orientation.
pub const RAMP_LEN: usize = 10;

/// ASCII density ramp (10 levels).
/// Characters ordered from densest (@) to sparsest (space), so dark chunks
/// render as heavy glyphs on a light background.
pub const RAMP: [char; RAMP_LEN] = ['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Orientation of [`RAMP`].
///
/// Both orientations read the same table; `Reversed` indexes it from the end,
/// which keeps the two exact mirrors of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampOrder {
    /// Dark chunks map to dense glyphs (`@`), light chunks to space.
    #[default]
    Normal,
    /// Dark chunks map to space, light chunks to `@`. Suits dark terminals.
    Reversed,
}

impl RampOrder {
    /// Orientation selected by a `reverse` flag.
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            RampOrder::Reversed
        } else {
            RampOrder::Normal
        }
    }

    pub fn is_reversed(&self) -> bool {
        matches!(self, RampOrder::Reversed)
    }

    /// Glyph at `index` in this orientation, clamping out-of-range indices to the last glyph.
    #[inline]
    pub fn glyph(&self, index: usize) -> char {
        let index = index.min(RAMP_LEN - 1);
        match self {
            RampOrder::Normal => RAMP[index],
            RampOrder::Reversed => RAMP[RAMP_LEN - 1 - index],
        }
    }

    /// All glyphs in this orientation, index 0 first.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        (0..RAMP_LEN).map(move |i| self.glyph(i))
    }

    /// Get a human-readable name for the orientation.
    pub fn name(&self) -> &'static str {
        match self {
            RampOrder::Normal => "normal",
            RampOrder::Reversed => "reversed",
        }
    }
}
