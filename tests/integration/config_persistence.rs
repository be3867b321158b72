use super::ChartHarness;
use anyhow::Result;
use laddergram::config::{self, Rgb};

#[test]
fn config_round_trips_through_the_home_directory() -> Result<()> {
    let harness = ChartHarness::new();

    // Nothing on disk yet: defaults come back.
    let cfg = config::load_or_default()?;
    assert_eq!(cfg.palette.accent, Rgb::new(255, 255, 0));

    let mut custom = cfg.clone();
    custom.palette.accent = "#00ff88".parse()?;
    custom.chart_size_px = 640;
    config::save(&custom)?;

    assert!(harness.home_path().join("config.toml").exists());
    let loaded = config::load_or_default()?;
    assert_eq!(loaded.palette.accent, Rgb::new(0x00, 0xff, 0x88));
    assert_eq!(loaded.chart_size_px, 640);
    Ok(())
}
