//! Core types for the hackrain falling-code animation.
//!
//! Everything here is measured in virtual pixels. A glyph occupies one
//! [`CELL_SIZE`] square, which the terminal host maps onto a single
//! character cell.

mod chars;
mod random;
mod viewport;

pub use chars::{BANNER_TEXT, MATRIX_CHARS};
pub use random::RandomStream;
pub use viewport::Viewport;

/// Pixel size of a rendered symbol.
pub const SYMBOL_SIZE: u32 = 32;

/// Margin on each side of a symbol inside its cell.
pub const CELL_MARGIN: u32 = 2;

/// Layout grid unit: one symbol plus its margins.
pub const CELL_SIZE: u32 = SYMBOL_SIZE + CELL_MARGIN * 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size() {
        assert_eq!(CELL_SIZE, 36);
    }
}
