//! Viewport dimensions.

use crate::CELL_SIZE;

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Construct a viewport from pixel dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport covering a grid of `cols` x `rows` cells.
    pub const fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as u32 * CELL_SIZE,
            height: rows as u32 * CELL_SIZE,
        }
    }
}
