pub mod dimensions;
pub mod scores;

pub use dimensions::{dimensions, Dimension, DIMENSION_COUNT, MAX_LEVELS};
pub use scores::ScoreSet;
