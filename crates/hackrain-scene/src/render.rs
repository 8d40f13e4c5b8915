//! Drawing a scene into a ratatui buffer.
//!
//! Pixel positions map onto terminal cells by dividing by [`CELL_SIZE`].
//! Every glyph is written to its own cell, so a glyph never pushes its
//! neighbours along the row. Lines form the background layer and the banner
//! is composited on top.

use hackrain_core::CELL_SIZE;
use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::banner::{BANNER_BACKING, BANNER_TINT};
use crate::scene::Scene;

/// Cell under a pixel position inside `area`, or `None` when clipped.
fn cell_at(buf: &mut Buffer, area: Rect, x: i64, y: i64) -> Option<&mut Cell> {
    if x < 0 || y < 0 {
        return None;
    }
    let col = x / CELL_SIZE as i64;
    let row = y / CELL_SIZE as i64;
    if col >= area.width as i64 || row >= area.height as i64 {
        return None;
    }
    buf.cell_mut((area.x + col as u16, area.y + row as u16))
}

impl Widget for &Scene {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for line in self.lines() {
            for (x, y, glyph) in line.cells() {
                if let Some(cell) = cell_at(buf, area, x as i64, y) {
                    cell.set_char(glyph.ch).set_style(Style::new().fg(glyph.tint()));
                }
            }
        }

        let banner = self.banner();
        let cell = CELL_SIZE as i64;
        let mut x = banner.x();
        while x < banner.x() + banner.width() as i64 {
            if let Some(backing) = cell_at(buf, area, x, banner.y()) {
                backing.set_char(' ').set_style(Style::new().bg(BANNER_BACKING));
            }
            x += cell;
        }
        for (x, y, ch) in banner.cells() {
            if let Some(glyph) = cell_at(buf, area, x, y) {
                glyph.set_char(ch).set_fg(BANNER_TINT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hackrain_core::{MATRIX_CHARS, RandomStream, Viewport};
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    use super::*;

    fn draw(scene: &Scene, cols: u16, rows: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(scene, frame.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_fresh_lines_show_newest_glyph_on_top_row() {
        let mut scene = Scene::new("HACK FRIDAY", RandomStream::seeded(3));
        scene.resize(Viewport::from_cells(20, 10));
        let buffer = draw(&scene, 20, 10);

        for line in scene.lines() {
            let col = (line.column_x() / CELL_SIZE) as u16;
            let cell = &buffer[(col, 0)];
            let ch = cell.symbol().chars().next().unwrap();
            assert!(MATRIX_CHARS.contains(&ch));
            assert!(matches!(cell.fg, Color::Rgb(0, g, 0) if g > 0));
        }
        // Everything else in the line is still above the viewport.
        for row in 1..10 {
            if row == 5 {
                continue;
            }
            assert!((0..20).all(|x| buffer[(x, row)].symbol() == " "));
        }
    }

    #[test]
    fn test_banner_drawn_over_rain() {
        let mut scene = Scene::new("HACK FRIDAY", RandomStream::seeded(3));
        scene.resize(Viewport::from_cells(20, 10));
        let buffer = draw(&scene, 20, 10);

        for x in 5..16 {
            assert_eq!(buffer[(x, 5)].fg, BANNER_TINT);
            assert_eq!(buffer[(x, 5)].bg, BANNER_BACKING);
        }
        let text: String = (5..16).map(|x| buffer[(x, 5)].symbol()).collect();
        assert_eq!(text, "HACK FRIDAY");
    }

    #[test]
    fn test_banner_clipped_on_narrow_viewport() {
        let mut scene = Scene::new("HACK FRIDAY", RandomStream::seeded(3));
        scene.resize(Viewport::from_cells(4, 4));
        let buffer = draw(&scene, 4, 4);

        let text: String = (0..4).map(|x| buffer[(x, 2)].symbol()).collect();
        assert_eq!(text, "K FR");
    }

    #[test]
    fn test_wide_banner_glyphs_keep_grid_columns() {
        let mut scene = Scene::new("日本語AB", RandomStream::seeded(3));
        scene.resize(Viewport::from_cells(20, 10));
        let area = Rect::new(0, 0, 20, 10);
        let mut buffer = Buffer::empty(area);
        (&scene).render(area, &mut buffer);

        // 20 cells / 2 = 10, minus half of 5 glyphs.
        assert_eq!(buffer[(8, 5)].symbol(), "日");
        assert_eq!(buffer[(11, 5)].symbol(), "A");
        assert_eq!(buffer[(12, 5)].symbol(), "B");
        assert_eq!(buffer[(12, 5)].fg, BANNER_TINT);
        assert_ne!(buffer[(13, 5)].bg, BANNER_BACKING);
    }

    #[test]
    fn test_render_respects_area_offset() {
        let mut scene = Scene::new("AB", RandomStream::seeded(3));
        scene.resize(Viewport::from_cells(4, 2));
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        (&scene).render(Rect::new(3, 2, 4, 2), &mut buf);

        // Banner sits at grid (1, 1) of the area.
        assert_eq!(buf[(4, 3)].symbol(), "A");
        assert_eq!(buf[(5, 3)].symbol(), "B");
        assert_eq!(buf[(1, 3)].symbol(), " ");
    }

    #[test]
    fn test_empty_area() {
        let scene = Scene::new("HACK FRIDAY", RandomStream::seeded(3));
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        (&scene).render(Rect::new(0, 0, 0, 0), &mut buf);
    }
}
