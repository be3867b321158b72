//! Tiered spider-web grid: dashed rings, solid frame, radial spokes.

use crate::chart::geometry::{axis_angles, close_loop, PolarPoint, FRAME_RADIUS};
use crate::config::Palette;
use crate::error::ChartResult;
use crate::model::MAX_LEVELS;
use crate::surface::{DrawSurface, LinePattern, StrokeStyle};

const RING_WIDTH_PX: u32 = 1;
const FRAME_WIDTH_PX: u32 = 2;
const SPOKE_WIDTH_PX: u32 = 1;

pub struct GridRenderer<'a> {
    palette: &'a Palette,
}

impl<'a> GridRenderer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Draws the full grid: one dashed ring per tier, the solid frame ring,
    /// then a spoke per axis from the center out to the frame. All strokes
    /// share the grid color, so draw order never occludes anything.
    pub fn draw(&self, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        let angles = close_loop(&axis_angles());

        for tier in 1..=MAX_LEVELS {
            let ring: Vec<PolarPoint> = angles
                .iter()
                .map(|&angle| PolarPoint::new(angle, tier as f64))
                .collect();
            surface.draw_polyline(
                &ring,
                StrokeStyle {
                    color: self.palette.grid,
                    width_px: RING_WIDTH_PX,
                    pattern: LinePattern::Dashed,
                },
            )?;
        }

        let frame: Vec<PolarPoint> = angles
            .iter()
            .map(|&angle| PolarPoint::new(angle, FRAME_RADIUS))
            .collect();
        surface.draw_polyline(
            &frame,
            StrokeStyle {
                color: self.palette.grid,
                width_px: FRAME_WIDTH_PX,
                pattern: LinePattern::Solid,
            },
        )?;

        for &angle in &axis_angles() {
            let spoke = [
                PolarPoint::new(angle, 0.0),
                PolarPoint::new(angle, FRAME_RADIUS),
            ];
            surface.draw_polyline(
                &spoke,
                StrokeStyle {
                    color: self.palette.grid,
                    width_px: SPOKE_WIDTH_PX,
                    pattern: LinePattern::Solid,
                },
            )?;
        }
        Ok(())
    }
}
