use anyhow::Result;
use laddergram::config::Rgb;
use laddergram::output::ChartWriter;
use laddergram::{ChartComposer, ChartConfig, ChartError, ScoreSet};
use std::fs;
use tempfile::TempDir;

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

fn render_default() -> Result<(ChartComposer, ScoreSet)> {
    let mut config = ChartConfig::default();
    config.chart_size_px = 400;
    let scores = ScoreSet::new(vec![3.0, 2.0, 4.0, 1.0, 5.0], config.scores)?;
    Ok((ChartComposer::new(config), scores))
}

#[test]
fn writes_a_timestamped_png_into_the_output_directory() -> Result<()> {
    let out = TempDir::new()?;
    let (composer, scores) = render_default()?;
    let surface = composer.render_bitmap(&scores)?;

    let writer = ChartWriter::new(out.path());
    let path = writer.write(&surface)?;

    let name = path.file_name().expect("file name").to_string_lossy();
    assert!(name.starts_with("engineering_ladder_"));
    assert!(name.ends_with(".png"));
    assert_eq!(path.parent(), Some(out.path()));

    let bytes = fs::read(&path)?;
    assert_eq!(&bytes[..4], &PNG_MAGIC);

    // Staging leftovers must not be discoverable next to the artifact.
    assert!(!out.path().join(".staging").exists());
    Ok(())
}

#[test]
fn rendered_bitmap_keeps_background_corners_and_draws_the_grid() -> Result<()> {
    let (composer, scores) = render_default()?;
    let surface = composer.render_bitmap(&scores)?;

    // Corners lie outside the chart circle and stay pure background.
    assert_eq!(surface.pixel(0, 0), Rgb::new(0, 0, 0));
    let size = surface.size_px();
    assert_eq!(surface.pixel(size - 1, size - 1), Rgb::new(0, 0, 0));

    // The grid strokes in the default palette are pure white.
    let white = surface
        .pixels()
        .chunks_exact(3)
        .any(|px| px == [255, 255, 255]);
    assert!(white, "no grid pixels found");
    Ok(())
}

#[test]
fn identical_scores_render_byte_identical_bitmaps() -> Result<()> {
    let (composer, scores) = render_default()?;
    let first = composer.render_bitmap(&scores)?;
    let second = composer.render_bitmap(&scores)?;
    assert_eq!(first.pixels(), second.pixels());
    Ok(())
}

#[test]
fn unwritable_destination_fails_without_leaving_an_artifact() -> Result<()> {
    let out = TempDir::new()?;
    // A plain file where the output directory should be.
    let blocker = out.path().join("not-a-dir");
    fs::write(&blocker, b"blocker")?;

    let (composer, scores) = render_default()?;
    let surface = composer.render_bitmap(&scores)?;
    let writer = ChartWriter::new(&blocker);
    let err = writer.write(&surface).unwrap_err();
    assert!(matches!(err, ChartError::Surface(_)), "{err}");

    // No chart file appeared anywhere under the temp dir.
    let stray = fs::read_dir(out.path())?
        .filter_map(|e| e.ok())
        .any(|e| e.file_name().to_string_lossy().ends_with(".png"));
    assert!(!stray);
    Ok(())
}
