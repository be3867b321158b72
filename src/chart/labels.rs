//! Tier and dimension-name labels.
//!
//! Level name at list position j of dimension i is anchored exactly on ring
//! j+1 along axis i; dense names may collide visually, which is accepted.
//! Dimension names sit just beyond the frame ring in a larger font.

use crate::chart::geometry::{axis_angle, PolarPoint, FRAME_RADIUS};
use crate::config::Palette;
use crate::error::ChartResult;
use crate::model::dimensions;
use crate::surface::{DrawSurface, FontSize, TextStyle};

/// Radial position of the dimension-name labels, past the frame so they read
/// as axis captions rather than tier entries.
const AXIS_NAME_RADIUS: f64 = FRAME_RADIUS + 0.55;

pub struct LabelRenderer<'a> {
    palette: &'a Palette,
}

impl<'a> LabelRenderer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        let level_style = TextStyle {
            color: self.palette.grid,
            size: FontSize::Small,
        };
        let axis_style = TextStyle {
            color: self.palette.grid,
            size: FontSize::Large,
        };

        for (index, dim) in dimensions().iter().enumerate() {
            let angle = axis_angle(index);
            for (level_index, level_name) in dim.levels.iter().enumerate() {
                let at = PolarPoint::new(angle, (level_index + 1) as f64);
                surface.draw_text(at, level_name, level_style)?;
            }
            surface.draw_text(
                PolarPoint::new(angle, AXIS_NAME_RADIUS),
                dim.name,
                axis_style,
            )?;
        }
        Ok(())
    }
}
