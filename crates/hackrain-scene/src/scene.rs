//! Scene orchestration: the line set, the banner and per-frame stepping.

use hackrain_core::{CELL_SIZE, RandomStream, Viewport};
use ratatui::Frame;
use tracing::debug;

use crate::banner::Banner;
use crate::line::Line;

/// Falling-code scene.
#[derive(Debug)]
pub struct Scene {
    /// Falling lines. Order carries no meaning.
    lines: Vec<Line>,
    /// Overlay drawn above the lines.
    banner: Banner,
    /// Jitter for every line in the scene.
    rng: RandomStream,
    /// Viewport passed to the last resize.
    viewport: Viewport,
}

impl Scene {
    /// Create an empty scene. No lines exist until the first [`Scene::resize`].
    pub fn new(banner_text: impl Into<String>, rng: RandomStream) -> Self {
        Self {
            lines: Vec::new(),
            banner: Banner::new(banner_text),
            rng,
            viewport: Viewport::default(),
        }
    }

    /// Number of lines a viewport of the given width holds.
    pub fn lines_for_width(width: u32) -> usize {
        (width / CELL_SIZE / 2) as usize
    }

    /// Rebuild the line set for a new viewport and re-centre the banner.
    pub fn resize(&mut self, viewport: Viewport) {
        let count = Self::lines_for_width(viewport.width);
        self.lines.clear();
        for _ in 0..count {
            self.lines.push(Line::new(viewport, &mut self.rng));
        }
        self.banner.reposition(viewport);
        self.viewport = viewport;

        debug!(
            width = viewport.width,
            height = viewport.height,
            lines = count,
            "scene resized"
        );
    }

    /// Advance every line by one tick.
    pub fn advance(&mut self, viewport: Viewport) {
        for line in &mut self.lines {
            line.advance(viewport, &mut self.rng);
        }
    }

    /// Run one frame: advance all lines, then draw the scene into `frame`.
    pub fn step(&mut self, viewport: Viewport, frame: &mut Frame) {
        self.advance(viewport);
        frame.render_widget(&*self, frame.area());
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
