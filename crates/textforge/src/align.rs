//! Padding placement for width-aligned appends.

use bitflags::bitflags;

bitflags! {
    /// Where content sits inside a fixed-width field.
    ///
    /// `CENTER` may be combined with `LEFT` or `RIGHT` to pick a side for
    /// the odd padding character when the total padding does not split
    /// evenly: `RIGHT | CENTER` puts the extra character in front of the
    /// content, `LEFT | CENTER` (and bare `CENTER`) behind it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Alignment: u8 {
        /// Content at the front, padding behind.
        const LEFT = 1;
        /// Content at the back, padding in front.
        const RIGHT = 2;
        /// Padding split evenly around the content.
        const CENTER = 4;
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::LEFT
    }
}

/// Splits `padding` characters into (front, back) counts.
pub(crate) fn pad_split(alignment: Alignment, padding: usize) -> (usize, usize) {
    if alignment.contains(Alignment::CENTER) {
        let half = padding / 2;
        if alignment.contains(Alignment::RIGHT) {
            // Odd padding rounds to the front.
            (padding - half, half)
        } else {
            (half, padding - half)
        }
    } else if alignment.contains(Alignment::RIGHT) {
        (padding, 0)
    } else {
        (0, padding)
    }
}
