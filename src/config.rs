//! Configuration primitives for chart generation.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/Laddergram/config.toml on Windows
//!   $XDG_CONFIG_HOME/laddergram/config.toml on Linux
//!   ~/Library/Application Support/Laddergram/config.toml on macOS
//!
//! The config carries the score bounds, the color palette, the chart pixel
//! size, and the output directory. It is loaded once at startup and passed by
//! value into the composer; nothing in the render path reads global mutable
//! state, so concurrent renders with different palettes are safe.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Inclusive score bounds applied to every dimension.
    #[serde(default)]
    pub scores: ScoreBounds,
    /// Background / grid / accent colors as `#rrggbb` strings.
    #[serde(default)]
    pub palette: Palette,
    /// Width and height of the square output image, in pixels.
    #[serde(default = "default_chart_size_px")]
    pub chart_size_px: u32,
    /// Directory the finished chart is written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            scores: ScoreBounds::default(),
            palette: Palette::default(),
            chart_size_px: default_chart_size_px(),
            output_dir: default_output_dir(),
        }
    }
}

const fn default_chart_size_px() -> u32 {
    800
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

/// Inclusive numeric range a score must fall into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBounds {
    #[serde(default = "default_score_min")]
    pub min: f64,
    #[serde(default = "default_score_max")]
    pub max: f64,
}

impl ScoreBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self {
            min: default_score_min(),
            max: default_score_max(),
        }
    }
}

const fn default_score_min() -> f64 {
    1.0
}

const fn default_score_max() -> f64 {
    5.0
}

/// Chart colors. The accent color is used for the profile polygon; everything
/// else (rings, spokes, labels) uses the grid color on the background.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_background")]
    pub background: Rgb,
    #[serde(default = "default_grid")]
    pub grid: Rgb,
    #[serde(default = "default_accent")]
    pub accent: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: default_background(),
            grid: default_grid(),
            accent: default_accent(),
        }
    }
}

const fn default_background() -> Rgb {
    Rgb::new(0, 0, 0)
}

const fn default_grid() -> Rgb {
    Rgb::new(255, 255, 255)
}

const fn default_accent() -> Rgb {
    Rgb::new(255, 255, 0)
}

/// An opaque sRGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim_start_matches('#');
        // Byte length alone is not enough: the digit slicing below indexes by
        // byte, so multi-byte characters must be rejected up front.
        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid color '{s}': expected #rrggbb");
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| anyhow::anyhow!("Invalid color '{s}': expected #rrggbb"))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the root directory where Laddergram stores its config.
///
/// Order of precedence:
/// 1. `LADDERGRAM_HOME` environment variable.
/// 2. OS-specific config directory via `directories::BaseDirs`.
pub fn home_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("LADDERGRAM_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS config directory")?;
    Ok(base_dirs.config_dir().join("Laddergram"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<ChartConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: ChartConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        cfg.validate()?;
        Ok(cfg)
    } else {
        Ok(ChartConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &ChartConfig) -> Result<()> {
    let dir = home_dir()?;
    fs::create_dir_all(&dir)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scores.min >= self.scores.max {
            anyhow::bail!(
                "Score bounds are inverted: min {} >= max {}",
                self.scores.min,
                self.scores.max
            );
        }
        if self.chart_size_px < 200 {
            anyhow::bail!(
                "Chart size {}px is too small to fit the tier labels",
                self.chart_size_px
            );
        }
        Ok(())
    }
}
