/// Terminal cell surface for the painter's-algorithm renderer
use bloom_core::{Color, DrawSurface, Vec2};
use crossterm::{
    style::{self, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: [u8; 3],
}

const EMPTY: Cell = Cell {
    glyph: ' ',
    color: [0, 0, 0],
};

/// A virtual pixel surface rasterized onto a grid of terminal cells.
///
/// The renderer sees `width × height` pixels; each cell covers a block of
/// them. Polygons are scan-converted at cell resolution with the even-odd
/// rule, so later fills simply overwrite earlier ones.
pub struct TerminalSurface {
    width: u32,
    height: u32,
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    pub fn new(width: u32, height: u32, columns: usize, rows: usize) -> Self {
        Self {
            width,
            height,
            columns,
            rows,
            cells: vec![EMPTY; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Change the cell grid, keeping the virtual size
    pub fn resize(&mut self, columns: usize, rows: usize) {
        self.columns = columns;
        self.rows = rows;
        self.cells = vec![EMPTY; columns * rows];
    }

    pub fn glyph_at(&self, column: usize, row: usize) -> Option<char> {
        self.cell(column, row).map(|c| c.glyph)
    }

    pub fn color_at(&self, column: usize, row: usize) -> Option<[u8; 3]> {
        self.cell(column, row).map(|c| c.color)
    }

    fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        if column < self.columns && row < self.rows {
            self.cells.get(row * self.columns + column)
        } else {
            None
        }
    }

    /// Virtual pixel position of the centre of a cell
    pub fn cell_to_pixel(&self, column: u16, row: u16) -> Vec2 {
        Vec2::new(
            (column as f32 + 0.5) * self.width as f32 / self.columns.max(1) as f32,
            (row as f32 + 0.5) * self.height as f32 / self.rows.max(1) as f32,
        )
    }

    fn pixel_to_cell(&self, p: &Vec2) -> Vec2 {
        Vec2::new(
            p.x * self.columns as f32 / self.width.max(1) as f32,
            p.y * self.rows as f32 / self.height.max(1) as f32,
        )
    }

    fn plot(&mut self, x: i64, y: i64, cell: Cell) {
        if x >= 0 && y >= 0 && (x as usize) < self.columns && (y as usize) < self.rows {
            let idx = y as usize * self.columns + x as usize;
            self.cells[idx] = cell;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = None;
        for y in 0..self.rows {
            for x in 0..self.columns {
                let cell = self.cells[y * self.columns + x];
                if current != Some(cell.color) {
                    let [r, g, b] = cell.color;
                    writer.queue(SetForegroundColor(style::Color::Rgb { r, g, b }))?;
                    current = Some(cell.color);
                }
                writer.queue(Print(cell.glyph))?;
            }
            if y + 1 < self.rows {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl DrawSurface for TerminalSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &Color) {
        if points.len() < 3 || points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return;
        }
        let cell = Cell {
            glyph: shade_glyph(color),
            color: color.to_rgb8(),
        };
        let pts: Vec<Vec2> = points.iter().map(|p| self.pixel_to_cell(p)).collect();

        let min_y = pts.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = pts.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        let first_row = min_y.floor().max(0.0) as i64;
        let last_row = max_y.ceil().min(self.rows as f32) as i64;

        let mut crossings = Vec::new();
        for row in first_row..last_row {
            let sy = row as f32 + 0.5;
            crossings.clear();
            for (i, a) in pts.iter().enumerate() {
                let b = &pts[(i + 1) % pts.len()];
                if (a.y <= sy) != (b.y <= sy) {
                    crossings.push(a.x + (sy - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            crossings.sort_by(f32::total_cmp);

            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil().max(0.0) as i64;
                let end = (span[1] - 0.5).floor().min(self.columns as f32 - 1.0) as i64;
                for column in start..=end {
                    self.plot(column, row, cell);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: &Vec2, to: &Vec2, color: &Color) {
        let a = self.pixel_to_cell(from);
        let b = self.pixel_to_cell(to);
        if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
            return;
        }
        let cell = Cell {
            glyph: line_glyph(b.x - a.x, b.y - a.y),
            color: color.to_rgb8(),
        };

        let Some((a, b)) = clip_segment(a, b, self.columns as f32, self.rows as f32) else {
            return;
        };
        let delta = b - a;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let p = a + delta * (i as f32 / steps as f32);
            self.plot(p.x.floor() as i64, p.y.floor() as i64, cell);
        }
    }
}

/// Liang-Barsky clip of the segment `a`-`b` to `[0, width] x [0, height]`.
///
/// Returns `None` when no part of the segment lies inside.
fn clip_segment(a: Vec2, b: Vec2, width: f32, height: f32) -> Option<(Vec2, Vec2)> {
    let d = b - a;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    for (p, q) in [(-d.x, a.x), (d.x, width - a.x), (-d.y, a.y), (d.y, height - a.y)] {
        if p == 0.0 {
            // Parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((a + d * t0, a + d * t1))
}

/// Glyph for a filled face, never blank so dark faces stay visible
fn shade_glyph(color: &Color) -> char {
    let levels = LUMINOSITY_RAMP.len() - 1;
    let index = 1 + (color.luminance() * (levels - 1) as f32).round() as usize;
    LUMINOSITY_RAMP[index.min(levels)]
}

/// Glyph approximating the slope of a segment (y grows downwards)
fn line_glyph(dx: f32, dy: f32) -> char {
    if dx.abs() > 2.0 * dy.abs() {
        '-'
    } else if dy.abs() > 2.0 * dx.abs() {
        '|'
    } else if dx * dy > 0.0 {
        '\\'
    } else {
        '/'
    }
}
