//! Orchestration of one chart render.
//!
//! The composer owns the draw order (projection, grid, labels, profile) and
//! nothing else; all numeric work lives in the geometry module and the
//! individual renderers. One call composes one chart onto one surface.

use crate::chart::geometry::FRAME_RADIUS;
use crate::chart::{GridRenderer, LabelRenderer, ProfileRenderer};
use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::model::ScoreSet;
use crate::surface::{BitmapSurface, DrawSurface, Projection};
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

pub struct ChartComposer {
    config: ChartConfig,
}

impl ChartComposer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Composes the full chart onto `surface`: polar projection with the
    /// first axis at 12 o'clock and clockwise winding, then grid, labels,
    /// and the score polygon.
    pub fn compose(&self, scores: &ScoreSet, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        debug!(scores = ?scores.values(), "composing chart");
        surface.configure_projection(Projection {
            radial_limit: FRAME_RADIUS,
            theta_offset: FRAC_PI_2,
            clockwise: true,
        })?;
        GridRenderer::new(&self.config.palette).draw(surface)?;
        LabelRenderer::new(&self.config.palette).draw(surface)?;
        ProfileRenderer::new(&self.config.palette).draw(scores, surface)?;
        Ok(())
    }

    /// Convenience path for the shipping backend: creates a bitmap surface of
    /// the configured size and background, composes onto it, and returns it
    /// ready for persistence.
    pub fn render_bitmap(&self, scores: &ScoreSet) -> ChartResult<BitmapSurface> {
        let mut surface =
            BitmapSurface::new(self.config.chart_size_px, self.config.palette.background);
        self.compose(scores, &mut surface)?;
        Ok(surface)
    }
}
