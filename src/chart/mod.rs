pub mod composer;
pub mod geometry;
pub mod grid;
pub mod labels;
pub mod profile;

pub use composer::ChartComposer;
pub use geometry::{axis_angle, axis_angles, close_loop, PolarPoint, FRAME_RADIUS};
pub use grid::GridRenderer;
pub use labels::LabelRenderer;
pub use profile::ProfileRenderer;
