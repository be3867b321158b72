pub mod chart;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod surface;

// Re-export commonly used types for convenience.
pub use chart::{ChartComposer, PolarPoint};
pub use config::ChartConfig;
pub use error::ChartError;
pub use model::{dimensions, ScoreSet, DIMENSION_COUNT, MAX_LEVELS};
pub use surface::{BitmapSurface, DrawSurface, RecordingSurface};
