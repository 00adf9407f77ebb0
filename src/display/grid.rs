//! Rasterise a draw list onto a grid of terminal cells.
//!
//! The play field is stretched over the whole grid, so one cell covers
//! `field.x / cols` by `field.y / rows` units. Anything drawn outside the
//! grid is clipped.

use glam::Vec2;

use super::{Anchor, Frame, Rgb, Shape};
use crate::engine::geom::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        fg: Rgb::BLACK,
    };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
        }
    }

    pub fn rasterize(frame: &Frame, cols: u16, rows: u16) -> Self {
        let mut grid = Self::new(cols, rows);
        if cols == 0 || rows == 0 {
            return grid;
        }
        let field = frame.field();
        let scale = Vec2::new(cols as f32 / field.x.max(1.0), rows as f32 / field.y.max(1.0));

        for cmd in frame.commands() {
            match &cmd.shape {
                Shape::Rect { rect, glyph } => grid.fill_rect(rect, scale, *glyph, cmd.color),
                Shape::Circle { center, radius } => {
                    grid.fill_circle(*center, *radius, scale, cmd.color)
                }
                Shape::Text { pos, text, anchor } => {
                    grid.put_text(*pos, text, *anchor, scale, cmd.color)
                }
            }
        }
        grid
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    /// Text of one row, trailing blanks included.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|c| self.get(c, row))
            .map(|cell| cell.ch)
            .collect()
    }

    fn set(&mut self, col: i32, row: i32, ch: char, fg: Rgb) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = Cell { ch, fg };
    }

    // ── Shapes ────────────────────────────────────────────────────────────────

    /// Every cell the rect overlaps; a non-empty rect covers at least one.
    fn fill_rect(&mut self, rect: &Rect, scale: Vec2, glyph: char, fg: Rgb) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let c0 = (rect.left() * scale.x).floor() as i32;
        let c1 = ((rect.right() * scale.x).ceil() as i32).max(c0 + 1);
        let r0 = (rect.top() * scale.y).floor() as i32;
        let r1 = ((rect.bottom() * scale.y).ceil() as i32).max(r0 + 1);
        for row in r0..r1 {
            for col in c0..c1 {
                self.set(col, row, glyph, fg);
            }
        }
    }

    /// Cells whose centre lies inside the circle; a circle smaller than a
    /// cell still marks the cell under its centre.
    fn fill_circle(&mut self, center: Vec2, radius: f32, scale: Vec2, fg: Rgb) {
        let c0 = ((center.x - radius) * scale.x).floor() as i32;
        let c1 = ((center.x + radius) * scale.x).ceil() as i32;
        let r0 = ((center.y - radius) * scale.y).floor() as i32;
        let r1 = ((center.y + radius) * scale.y).ceil() as i32;
        let mut painted = false;
        for row in r0..r1 {
            for col in c0..c1 {
                let cell_center = Vec2::new(
                    (col as f32 + 0.5) / scale.x,
                    (row as f32 + 0.5) / scale.y,
                );
                if cell_center.distance(center) <= radius {
                    self.set(col, row, '█', fg);
                    painted = true;
                }
            }
        }
        if !painted {
            let col = (center.x * scale.x).floor() as i32;
            let row = (center.y * scale.y).floor() as i32;
            self.set(col, row, '●', fg);
        }
    }

    fn put_text(&mut self, pos: Vec2, text: &str, anchor: Anchor, scale: Vec2, fg: Rgb) {
        let len = text.chars().count() as i32;
        let col = (pos.x * scale.x).floor() as i32;
        let start = match anchor {
            Anchor::Left => col,
            Anchor::Center => col - len / 2,
            Anchor::Right => col - len,
        };
        let row = (pos.y * scale.y).floor() as i32;
        for (i, ch) in text.chars().enumerate() {
            self.set(start + i as i32, row, ch, fg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        // 1 field unit per cell.
        Frame::new(Vec2::new(20.0, 10.0))
    }

    #[test]
    fn rect_covers_overlapped_cells() {
        let mut f = frame();
        f.rect(Rect::new(2.5, 1.0, 2.0, 1.0), Rgb::GREEN);
        let g = CellGrid::rasterize(&f, 20, 10);
        assert_eq!(g.get(2, 1).unwrap().ch, '█');
        assert_eq!(g.get(4, 1).unwrap().ch, '█');
        assert_eq!(g.get(5, 1).unwrap().ch, ' ');
        assert_eq!(g.get(2, 2).unwrap().ch, ' ');
    }

    #[test]
    fn tiny_shapes_still_visible() {
        let mut f = frame();
        f.rect(Rect::new(3.2, 3.2, 0.1, 0.1), Rgb::CYAN);
        f.circle(Vec2::new(10.1, 5.1), 0.2, Rgb::RED);
        let g = CellGrid::rasterize(&f, 20, 10);
        assert_eq!(g.get(3, 3).unwrap().fg, Rgb::CYAN);
        assert_eq!(g.get(10, 5).unwrap().ch, '●');
    }

    #[test]
    fn text_is_centred_and_clipped() {
        let mut f = frame();
        f.text(Vec2::new(10.0, 0.0), "SCORE", Anchor::Center, Rgb::YELLOW);
        f.text(Vec2::new(18.0, 9.0), "OVERFLOW", Anchor::Left, Rgb::WHITE);
        let g = CellGrid::rasterize(&f, 20, 10);
        assert_eq!(g.row_text(0).trim(), "SCORE");
        assert_eq!(g.get(8, 0).unwrap().ch, 'S');
        assert!(g.row_text(9).ends_with("OV"));
    }

    #[test]
    fn later_commands_paint_over_earlier() {
        let mut f = frame();
        f.rect(Rect::new(0.0, 0.0, 20.0, 10.0), Rgb::BLACK);
        f.rect_with(Rect::new(0.0, 0.0, 1.0, 1.0), '#', Rgb::WHITE);
        let g = CellGrid::rasterize(&f, 20, 10);
        assert_eq!(g.get(0, 0).unwrap().ch, '#');
    }

    #[test]
    fn field_is_scaled_to_grid() {
        let mut f = Frame::new(Vec2::new(800.0, 600.0));
        f.rect(Rect::new(400.0, 300.0, 10.0, 10.0), Rgb::WHITE);
        let g = CellGrid::rasterize(&f, 80, 30);
        assert_eq!(g.get(40, 15).unwrap().ch, '█');
    }
}
