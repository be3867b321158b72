//! Chart persistence: timestamped PNG files, written via a staging path.
//!
//! The PNG is encoded into a hidden staging directory and renamed into place
//! only once fully written, so a failed render never leaves a partial file
//! under its final, discoverable name.

use crate::error::ChartResult;
use crate::surface::BitmapSurface;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const STAGING_DIR: &str = ".staging";
const FILE_STEM: &str = "engineering_ladder";

pub struct ChartWriter {
    out_dir: PathBuf,
}

impl ChartWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Writes the finished surface as `engineering_ladder_<timestamp>.png`
    /// inside the output directory, creating the directory if needed.
    /// Returns the final path.
    pub fn write(&self, surface: &BitmapSurface) -> ChartResult<PathBuf> {
        let file_name = format!(
            "{FILE_STEM}_{}.png",
            Local::now().format("%Y%m%d_%H%M%S")
        );
        self.write_named(surface, &file_name)
    }

    fn write_named(&self, surface: &BitmapSurface, file_name: &str) -> ChartResult<PathBuf> {
        let staging_dir = self.out_dir.join(STAGING_DIR);
        fs::create_dir_all(&staging_dir)?;

        let staged_path = staging_dir.join(file_name);
        surface.save_png(&staged_path)?;

        let final_path = self.out_dir.join(file_name);
        fs::rename(&staged_path, &final_path)?;
        // Best-effort cleanup; a leftover empty staging dir is harmless.
        let _ = fs::remove_dir(&staging_dir);

        info!(path = %final_path.display(), "chart written");
        Ok(final_path)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}
