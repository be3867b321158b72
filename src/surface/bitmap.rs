//! In-memory raster backend.
//!
//! Draws onto an RGB8 buffer (row-major, three bytes per pixel) with
//! hand-rolled primitives: a stepping polyline brush with an optional dash
//! pattern, an even-odd scanline polygon fill with alpha blending, and text
//! blitted from the embedded bitmap font. The buffer is encoded to PNG via
//! the `image` crate when the render is persisted.

use crate::chart::PolarPoint;
use crate::config::Rgb;
use crate::error::{ChartError, ChartResult};
use crate::surface::font::{self, GLYPH_H, GLYPH_SPACING, GLYPH_W};
use crate::surface::{
    DrawSurface, FillStyle, FontSize, LinePattern, Projection, StrokeStyle, TextStyle,
};
use std::io;
use std::path::Path;

/// Blank border around the chart area so boundary labels are not clipped.
const MARGIN_PX: f64 = 56.0;

/// Dash pattern lengths, in pixels along the stroked path.
const DASH_ON_PX: f64 = 6.0;
const DASH_OFF_PX: f64 = 6.0;

pub struct BitmapSurface {
    size_px: u32,
    buf: Vec<u8>,
    projection: Option<Projection>,
}

impl BitmapSurface {
    /// Creates a square surface filled with the background color.
    pub fn new(size_px: u32, background: Rgb) -> Self {
        let mut buf = vec![0u8; (size_px as usize) * (size_px as usize) * 3];
        for chunk in buf.chunks_exact_mut(3) {
            chunk.copy_from_slice(&background.channels());
        }
        Self {
            size_px,
            buf,
            projection: None,
        }
    }

    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    /// Raw RGB8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.buf
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = ((y * self.size_px + x) * 3) as usize;
        Rgb::new(self.buf[idx], self.buf[idx + 1], self.buf[idx + 2])
    }

    /// Encodes the buffer as a PNG at `path`.
    pub fn save_png(&self, path: &Path) -> ChartResult<()> {
        image::save_buffer(
            path,
            &self.buf,
            self.size_px,
            self.size_px,
            image::ColorType::Rgb8,
        )
        .map_err(|e| match e {
            image::ImageError::IoError(io_err) => ChartError::Surface(io_err),
            other => ChartError::Surface(io::Error::new(io::ErrorKind::Other, other)),
        })
    }

    fn require_projection(&self) -> ChartResult<Projection> {
        self.projection
            .ok_or_else(|| ChartError::contract("drawing before configure_projection"))
    }

    /// Maps a polar point to pixel coordinates under the configured
    /// projection. Screen y grows downward, so the vertical term is negated.
    fn project(&self, proj: &Projection, p: &PolarPoint) -> (f64, f64) {
        let half = self.size_px as f64 / 2.0;
        let scale = (half - MARGIN_PX) / proj.radial_limit;
        let theta = if proj.clockwise {
            proj.theta_offset - p.angle
        } else {
            proj.theta_offset + p.angle
        };
        let x = half + p.radius * scale * theta.cos();
        let y = half - p.radius * scale * theta.sin();
        (x, y)
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.size_px as i64 || y >= self.size_px as i64 {
            return;
        }
        let idx = ((y as u32 * self.size_px + x as u32) * 3) as usize;
        self.buf[idx..idx + 3].copy_from_slice(&color.channels());
    }

    fn blend_pixel(&mut self, x: i64, y: i64, color: Rgb, opacity: f64) {
        if x < 0 || y < 0 || x >= self.size_px as i64 || y >= self.size_px as i64 {
            return;
        }
        let idx = ((y as u32 * self.size_px + x as u32) * 3) as usize;
        for (dst, src) in self.buf[idx..idx + 3].iter_mut().zip(color.channels()) {
            let blended = *dst as f64 + (src as f64 - *dst as f64) * opacity;
            *dst = blended.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Stamps a round brush of the given stroke width centered on (cx, cy).
    fn stamp(&mut self, cx: f64, cy: f64, width_px: u32, color: Rgb) {
        if width_px <= 1 {
            self.set_pixel(cx.round() as i64, cy.round() as i64, color);
            return;
        }
        let r = width_px as f64 / 2.0;
        let reach = r.ceil() as i64;
        let (px, py) = (cx.round() as i64, cy.round() as i64);
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if ((dx * dx + dy * dy) as f64) <= r * r {
                    self.set_pixel(px + dx, py + dy, color);
                }
            }
        }
    }
}

impl DrawSurface for BitmapSurface {
    fn configure_projection(&mut self, projection: Projection) -> ChartResult<()> {
        if self.projection.is_some() {
            return Err(ChartError::contract("projection already configured"));
        }
        self.projection = Some(projection);
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[PolarPoint], style: StrokeStyle) -> ChartResult<()> {
        let proj = self.require_projection()?;
        let px: Vec<(f64, f64)> = points.iter().map(|p| self.project(&proj, p)).collect();
        let dash = match style.pattern {
            LinePattern::Solid => None,
            LinePattern::Dashed => Some(DASH_ON_PX + DASH_OFF_PX),
        };
        // Distance travelled along the whole polyline, so the dash phase is
        // continuous across segment joints.
        let mut travelled = 0.0;
        for seg in px.windows(2) {
            let (x0, y0) = seg[0];
            let (x1, y1) = seg[1];
            let len = (x1 - x0).hypot(y1 - y0);
            if len == 0.0 {
                continue;
            }
            let steps = (len * 2.0).ceil() as usize;
            for i in 0..=steps {
                let t = i as f64 / steps as f64;
                let pos = travelled + len * t;
                let visible = match dash {
                    None => true,
                    Some(period) => pos % period < DASH_ON_PX,
                };
                if visible {
                    self.stamp(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t, style.width_px, style.color);
                }
            }
            travelled += len;
        }
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[PolarPoint], style: FillStyle) -> ChartResult<()> {
        let proj = self.require_projection()?;
        let px: Vec<(f64, f64)> = points.iter().map(|p| self.project(&proj, p)).collect();
        if px.len() < 3 {
            return Ok(());
        }
        let opacity = style.opacity.clamp(0.0, 1.0);
        let y_min = px.iter().map(|p| p.1).fold(f64::INFINITY, f64::min).floor().max(0.0) as i64;
        let y_max = px
            .iter()
            .map(|p| p.1)
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil()
            .min(self.size_px as f64 - 1.0) as i64;
        for row in y_min..=y_max {
            // Sample each row through its center for stable edge handling.
            let yc = row as f64 + 0.5;
            let mut crossings = Vec::new();
            for edge in px.windows(2) {
                let (ax, ay) = edge[0];
                let (bx, by) = edge[1];
                if (ay <= yc) != (by <= yc) {
                    crossings.push(ax + (yc - ay) * (bx - ax) / (by - ay));
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).expect("finite crossing"));
            for span in crossings.chunks_exact(2) {
                let start = span[0].round() as i64;
                let end = span[1].round() as i64;
                for x in start..=end {
                    self.blend_pixel(x, row, style.color, opacity);
                }
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, at: PolarPoint, text: &str, style: TextStyle) -> ChartResult<()> {
        let proj = self.require_projection()?;
        let scale = match style.size {
            FontSize::Small => 1,
            FontSize::Large => 2,
        };
        let (cx, cy) = self.project(&proj, &at);
        let width = font::text_width(text, scale);
        let height = GLYPH_H * scale;
        let mut pen_x = (cx - width as f64 / 2.0).round() as i64;
        let top = (cy - height as f64 / 2.0).round() as i64;
        let advance = ((GLYPH_W + GLYPH_SPACING) * scale) as i64;
        for ch in text.chars() {
            if let Some(glyph) = font::glyph(ch) {
                for (row, &bits) in glyph.iter().enumerate() {
                    for col in 0..GLYPH_W {
                        if bits & (0x10 >> col) == 0 {
                            continue;
                        }
                        for sy in 0..scale {
                            for sx in 0..scale {
                                self.set_pixel(
                                    pen_x + (col * scale + sx) as i64,
                                    top + (row as u32 * scale + sy) as i64,
                                    style.color,
                                );
                            }
                        }
                    }
                }
            }
            pen_x += advance;
        }
        Ok(())
    }
}
