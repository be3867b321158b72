//! Headless surface double that records drawing calls for assertions.

use crate::chart::PolarPoint;
use crate::error::{ChartError, ChartResult};
use crate::surface::{DrawSurface, FillStyle, Projection, StrokeStyle, TextStyle};

/// One recorded capability call, in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Projection(Projection),
    Polyline {
        points: Vec<PolarPoint>,
        style: StrokeStyle,
    },
    Polygon {
        points: Vec<PolarPoint>,
        style: FillStyle,
    },
    Text {
        at: PolarPoint,
        text: String,
        style: TextStyle,
    },
}

/// Records every call instead of rasterizing. Enforces the same projection
/// contract as the bitmap backend so tests exercise identical call ordering.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    configured: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[PolarPoint], &StrokeStyle)> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Polyline { points, style } => Some((points.as_slice(), style)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&[PolarPoint], &FillStyle)> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Polygon { points, style } => Some((points.as_slice(), style)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&PolarPoint, &str, &TextStyle)> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Text { at, text, style } => Some((at, text.as_str(), style)),
            _ => None,
        })
    }

    fn require_configured(&self) -> ChartResult<()> {
        if self.configured {
            Ok(())
        } else {
            Err(ChartError::contract("drawing before configure_projection"))
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn configure_projection(&mut self, projection: Projection) -> ChartResult<()> {
        if self.configured {
            return Err(ChartError::contract("projection already configured"));
        }
        self.configured = true;
        self.ops.push(SurfaceOp::Projection(projection));
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[PolarPoint], style: StrokeStyle) -> ChartResult<()> {
        self.require_configured()?;
        self.ops.push(SurfaceOp::Polyline {
            points: points.to_vec(),
            style,
        });
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[PolarPoint], style: FillStyle) -> ChartResult<()> {
        self.require_configured()?;
        self.ops.push(SurfaceOp::Polygon {
            points: points.to_vec(),
            style,
        });
        Ok(())
    }

    fn draw_text(&mut self, at: PolarPoint, text: &str, style: TextStyle) -> ChartResult<()> {
        self.require_configured()?;
        self.ops.push(SurfaceOp::Text {
            at,
            text: text.to_string(),
            style,
        });
        Ok(())
    }
}
