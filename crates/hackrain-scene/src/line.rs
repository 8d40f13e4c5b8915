//! A single vertical stream of falling glyphs.

use std::collections::VecDeque;

use hackrain_core::{CELL_SIZE, MATRIX_CHARS, RandomStream, Viewport};
use ratatui::style::Color;
use tracing::trace;

/// Slowest line speed in pixels per tick (inclusive).
pub const MIN_SPEED: f32 = 2.0;
/// Fastest line speed in pixels per tick (exclusive).
pub const MAX_SPEED: f32 = 16.0;
/// Shortest line in glyphs (inclusive).
pub const MIN_LENGTH: usize = 10;
/// Longest line in glyphs (exclusive).
pub const MAX_LENGTH: usize = 20;

/// One character cell of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Character shown in the cell.
    pub ch: char,
    /// Green channel of the tint, assigned by the line's gradient.
    pub intensity: u8,
}

impl Glyph {
    fn new(ch: char) -> Self {
        Self { ch, intensity: 0 }
    }

    /// Colour the glyph is drawn with.
    pub fn tint(&self) -> Color {
        Color::Rgb(0, self.intensity, 0)
    }
}

/// What happened during a call to [`Line::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The line had scrolled past the bottom edge and was re-randomized.
    Recycled,
    /// The line moved; `rotations` glyphs were added at the tail.
    Moved { rotations: usize },
}

/// State for a single falling line.
///
/// Glyphs are stored oldest first. The oldest glyph is the top of the line
/// and the newest one sits at [`Line::tail_y`].
#[derive(Debug, Clone)]
pub struct Line {
    /// Pixel x of the column, a multiple of [`CELL_SIZE`].
    column_x: u32,
    /// Pixels advanced per tick.
    speed: f32,
    /// Number of glyphs kept in the line.
    length: usize,
    glyphs: VecDeque<Glyph>,
    /// Sub-cell progress toward the next glyph shift.
    trail_offset: f32,
    /// Pixel y of the newest glyph.
    tail_y: i64,
}

impl Line {
    /// Create a freshly randomized line for the given viewport.
    pub fn new(viewport: Viewport, rng: &mut RandomStream) -> Self {
        let mut line = Self {
            column_x: 0,
            speed: MIN_SPEED,
            length: 0,
            glyphs: VecDeque::with_capacity(MAX_LENGTH),
            trail_offset: 0.0,
            tail_y: 0,
        };
        line.reset(viewport, rng);
        line
    }

    /// Re-randomize the line in place: column, speed, length and glyphs.
    ///
    /// The rebuilt line ends with its newest glyph on the top row and the
    /// rest of it above the viewport.
    pub fn reset(&mut self, viewport: Viewport, rng: &mut RandomStream) {
        let columns = viewport.width.div_ceil(CELL_SIZE) as usize;
        self.column_x = rng.range_usize(0, columns) as u32 * CELL_SIZE;
        self.speed = rng.range_f32(MIN_SPEED, MAX_SPEED);
        self.length = rng.range_usize(MIN_LENGTH, MAX_LENGTH);
        self.tail_y = -(self.length as i64) * CELL_SIZE as i64;
        self.trail_offset = 0.0;

        self.glyphs.clear();
        for _ in 0..self.length {
            self.push_glyph(rng);
        }
        self.colorize();
    }

    /// Move the line down by one tick.
    ///
    /// A line whose top glyph is already below the viewport is recycled
    /// instead of moved.
    pub fn advance(&mut self, viewport: Viewport, rng: &mut RandomStream) -> Advance {
        if self.top_y() > viewport.height as i64 {
            self.reset(viewport, rng);
            trace!(
                column_x = self.column_x,
                speed = self.speed,
                length = self.length,
                "line recycled"
            );
            return Advance::Recycled;
        }

        let cell = CELL_SIZE as f32;
        let mut rotations = 0;
        self.trail_offset += self.speed;
        while self.trail_offset >= cell {
            self.trail_offset -= cell;
            self.push_glyph(rng);
            self.glyphs.pop_front();
            self.colorize();
            rotations += 1;
        }
        Advance::Moved { rotations }
    }

    /// Append a random glyph one cell below the current tail.
    fn push_glyph(&mut self, rng: &mut RandomStream) {
        self.tail_y += CELL_SIZE as i64;
        self.glyphs.push_back(Glyph::new(*rng.pick(MATRIX_CHARS)));
    }

    /// Recompute the green gradient over the current glyphs.
    ///
    /// Glyph `i` of `n` gets `floor(255 / n * i)`, so the newest glyph is the
    /// brightest and the oldest is black.
    fn colorize(&mut self) {
        let step = 255.0 / self.glyphs.len() as f64;
        for (i, glyph) in self.glyphs.iter_mut().enumerate() {
            glyph.intensity = (step * i as f64).floor() as u8;
        }
    }

    pub fn column_x(&self) -> u32 {
        self.column_x
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Glyphs from oldest (top) to newest (bottom).
    pub fn glyphs(&self) -> &VecDeque<Glyph> {
        &self.glyphs
    }

    pub fn trail_offset(&self) -> f32 {
        self.trail_offset
    }

    pub fn tail_y(&self) -> i64 {
        self.tail_y
    }

    /// Pixel y of the oldest (topmost) glyph.
    pub fn top_y(&self) -> i64 {
        self.tail_y - CELL_SIZE as i64 * (self.length as i64 - 1)
    }

    /// Pixel position of every glyph, top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = (u32, i64, &Glyph)> + '_ {
        let top = self.top_y();
        self.glyphs
            .iter()
            .enumerate()
            .map(move |(i, glyph)| (self.column_x, top + i as i64 * CELL_SIZE as i64, glyph))
    }
}
