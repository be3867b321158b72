//! Pure polar-coordinate math shared by every renderer.
//!
//! Angles returned here are plain mathematical angles with the first axis at
//! zero; the 12 o'clock rotation and clockwise winding are applied by the
//! surface projection, so the same geometry drives any backend.

use crate::model::{DIMENSION_COUNT, MAX_LEVELS};
use std::f64::consts::TAU;

/// Radius of the solid outer frame ring, one unit beyond the last tier.
pub const FRAME_RADIUS: f64 = MAX_LEVELS as f64 + 1.0;

/// A point in polar coordinates. Derived, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    /// Radians in [0, 2π).
    pub angle: f64,
    pub radius: f64,
}

impl PolarPoint {
    pub fn new(angle: f64, radius: f64) -> Self {
        Self { angle, radius }
    }
}

/// Angle of dimension `index` under equal angular spacing.
///
/// Out-of-range indices are a programmer error, not a recoverable condition.
pub fn axis_angle(index: usize) -> f64 {
    assert!(
        index < DIMENSION_COUNT,
        "axis index {index} out of range (dimension count {DIMENSION_COUNT})"
    );
    TAU * index as f64 / DIMENSION_COUNT as f64
}

/// All axis angles in dimension order.
pub fn axis_angles() -> [f64; DIMENSION_COUNT] {
    std::array::from_fn(axis_angle)
}

/// Appends the first element to the end so a ring or polygon visually closes.
pub fn close_loop<T: Copy>(seq: &[T]) -> Vec<T> {
    let mut closed = Vec::with_capacity(seq.len() + 1);
    closed.extend_from_slice(seq);
    if let Some(&first) = seq.first() {
        closed.push(first);
    }
    closed
}
