//! The user's score polygon, drawn over the grid.

use crate::chart::geometry::{axis_angles, close_loop, PolarPoint};
use crate::config::Palette;
use crate::error::ChartResult;
use crate::model::ScoreSet;
use crate::surface::{DrawSurface, FillStyle, LinePattern, StrokeStyle};

const OUTLINE_WIDTH_PX: u32 = 3;
/// Translucent enough that the grid stays readable underneath.
const FILL_OPACITY: f64 = 0.2;

pub struct ProfileRenderer<'a> {
    palette: &'a Palette,
}

impl<'a> ProfileRenderer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Fills then outlines the closed polygon formed by one score per axis.
    /// `scores` is already validated by construction; no re-checking here.
    pub fn draw(&self, scores: &ScoreSet, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        let angles = close_loop(&axis_angles());
        let radii = close_loop(scores.values());
        let polygon: Vec<PolarPoint> = angles
            .iter()
            .zip(&radii)
            .map(|(&angle, &radius)| PolarPoint::new(angle, radius))
            .collect();

        surface.fill_polygon(
            &polygon,
            FillStyle {
                color: self.palette.accent,
                opacity: FILL_OPACITY,
            },
        )?;
        surface.draw_polyline(
            &polygon,
            StrokeStyle {
                color: self.palette.accent,
                width_px: OUTLINE_WIDTH_PX,
                pattern: LinePattern::Solid,
            },
        )?;
        Ok(())
    }
}
