/// Raster targets the renderer draws into
use crate::color::Color;
use crate::transform::Vec2;

pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 720;

/// An immediate-mode 2D target of fixed size.
///
/// Coordinates are in surface pixels with the origin at the top left.
/// Points may lie far outside the surface; implementations clip.
pub trait DrawSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Erase the whole surface
    fn clear(&mut self);

    /// Fill the closed polygon through `points`, in order, with one color
    fn fill_polygon(&mut self, points: &[Vec2], color: &Color);

    /// Stroke a single segment
    fn stroke_line(&mut self, from: &Vec2, to: &Vec2, color: &Color);
}

/// One call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    FillPolygon { points: Vec<Vec2>, color: Color },
    StrokeLine { from: Vec2, to: Vec2, color: Color },
}

/// A surface that records calls instead of rasterizing.
///
/// `clear` drops everything recorded so far, so the calls always describe
/// the current frame only.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn fills(&self) -> impl Iterator<Item = (&[Vec2], &Color)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::FillPolygon { points, color } => Some((points.as_slice(), color)),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&Vec2, &Vec2, &Color)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::StrokeLine { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: &Color) {
        self.calls.push(DrawCall::FillPolygon {
            points: points.to_vec(),
            color: *color,
        });
    }

    fn stroke_line(&mut self, from: &Vec2, to: &Vec2, color: &Color) {
        self.calls.push(DrawCall::StrokeLine {
            from: *from,
            to: *to,
            color: *color,
        });
    }
}
