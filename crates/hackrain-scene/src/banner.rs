//! Static banner drawn above the rain.

use hackrain_core::{CELL_SIZE, Viewport};
use ratatui::style::Color;

/// Banner glyph colour.
pub const BANNER_TINT: Color = Color::Rgb(255, 0, 0);

/// Fill behind the banner glyphs.
pub const BANNER_BACKING: Color = Color::Rgb(0, 0, 0);

/// Highlighted text centred on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    text: String,
    /// Pixel x of the first glyph. Negative when the text is wider than the viewport.
    x: i64,
    /// Pixel y of the banner row.
    y: i64,
}

impl Banner {
    /// Create a banner at the origin. Call [`Banner::reposition`] to centre it.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: 0,
            y: 0,
        }
    }

    /// Centre the banner on the grid for the given viewport.
    pub fn reposition(&mut self, viewport: Viewport) {
        let cell = CELL_SIZE as i64;
        let half_len = self.len() as i64 / 2;
        self.x = (viewport.width as i64 / 2 / cell) * cell - half_len * cell;
        self.y = (viewport.height as i64 / 2 / cell) * cell;
    }

    /// Number of glyphs in the banner.
    fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    /// Pixel width of the backing rectangle.
    pub fn width(&self) -> u32 {
        self.len() as u32 * CELL_SIZE
    }

    /// Pixel position of every banner glyph, left to right.
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64, char)> + '_ {
        self.text
            .chars()
            .enumerate()
            .map(move |(i, ch)| (self.x + i as i64 * CELL_SIZE as i64, self.y, ch))
    }
}
