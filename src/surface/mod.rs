//! Drawing-surface capability layer.
//!
//! The chart renderers never talk to a concrete rendering backend; they emit
//! polar-coordinate drawing calls against [`DrawSurface`]. The shipping
//! backend is [`BitmapSurface`] (an in-memory raster encoded to PNG);
//! [`RecordingSurface`] is a headless double that captures every call so tests
//! can assert on exact geometry.

pub mod bitmap;
pub mod font;
pub mod recording;

pub use bitmap::BitmapSurface;
pub use recording::{RecordingSurface, SurfaceOp};

use crate::chart::PolarPoint;
use crate::config::Rgb;
use crate::error::ChartResult;

/// Polar projection parameters, fixed once per render before any drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Largest radius that must fit inside the chart area.
    pub radial_limit: f64,
    /// Rotation applied to angle zero; π/2 puts the first axis at 12 o'clock.
    pub theta_offset: f64,
    /// Whether angles increase clockwise (reversed mathematical convention).
    pub clockwise: bool,
}

/// Stroke pattern for polylines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub width_px: u32,
    pub pattern: LinePattern,
}

/// Translucent region fill; `opacity` is in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub color: Rgb,
    pub opacity: f64,
}

/// Text size, as a multiple of the base bitmap glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Rgb,
    pub size: FontSize,
}

/// Minimal imperative drawing capability in polar coordinates.
///
/// `configure_projection` must be called exactly once before any drawing
/// call; drawing on an unconfigured surface is a contract violation. Points
/// are interpreted under the configured theta offset and direction. Text is
/// centered horizontally and vertically on its anchor point.
pub trait DrawSurface {
    fn configure_projection(&mut self, projection: Projection) -> ChartResult<()>;

    fn draw_polyline(&mut self, points: &[PolarPoint], style: StrokeStyle) -> ChartResult<()>;

    fn fill_polygon(&mut self, points: &[PolarPoint], style: FillStyle) -> ChartResult<()>;

    fn draw_text(&mut self, at: PolarPoint, text: &str, style: TextStyle) -> ChartResult<()>;
}
