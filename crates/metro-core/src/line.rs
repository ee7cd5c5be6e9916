//! The three metro lines and their fixed processing order.
//!
//! Spawn-id assignment (§4.3) and the printed vehicle token (§6) both depend
//! on line order and the line's single-letter prefix, so both live here
//! rather than being re-derived at each call site.

use std::fmt;

/// One of the three lines a vehicle can run on.
///
/// `Line::ALL` fixes the order ("green, yellow, blue") that §4.3's spawner
/// and this crate's tests rely on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Line {
    Green,
    Yellow,
    Blue,
}

impl Line {
    /// Fixed iteration order for spawn-id assignment (§4.3).
    pub const ALL: [Line; 3] = [Line::Green, Line::Yellow, Line::Blue];

    /// Index into per-line arrays (`[T; 3]`), 0 = green, 1 = yellow, 2 = blue.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Line::Green => 0,
            Line::Yellow => 1,
            Line::Blue => 2,
        }
    }

    /// The single-letter prefix used in printed vehicle tokens (§6).
    #[inline]
    pub fn prefix(self) -> char {
        match self {
            Line::Green => 'g',
            Line::Yellow => 'y',
            Line::Blue => 'b',
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}
