use std::fmt;

/// An RGB color with channels nominally in `0..=255`.
///
/// Channels are plain `f32`s and are never clamped: shading may push them
/// below zero or past 255. Only the draw surface decides how an out-of-range
/// channel is displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const RED: Color = Color::new(255.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor`
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// CSS token as consumed by a canvas 2D context, e.g. `rgb(255,0,0)`
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Saturating conversion to 8-bit channels
    pub fn to_rgb8(&self) -> [u8; 3] {
        // `as` saturates for floats and maps NaN to 0.
        [self.r as u8, self.g as u8, self.b as u8]
    }

    /// Relative luminance in `[0, 1]`, after saturating the channels
    pub fn luminance(&self) -> f32 {
        let [r, g, b] = self.to_rgb8();
        (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
