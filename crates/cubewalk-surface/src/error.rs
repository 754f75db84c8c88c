//! Walk error types.

use crate::Point3;

/// Errors that prevent a walk from being produced.
///
/// Stalls during stepping are not errors; they are recorded on the walk.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WalkError {
    /// The cube bounds are empty or inverted.
    #[error("invalid bounds: min {min} must be less than max {max}")]
    InvalidBounds { min: i64, max: i64 },

    /// The direction-change probability is NaN or outside `[0, 1]`.
    #[error("change probability {0} is outside [0, 1]")]
    InvalidChangeProbability(f64),

    /// The path of `steps + 1` points would not fit in memory.
    #[error("{0} steps is more than a walk path can hold")]
    TooManySteps(usize),

    /// The sampled start point lies on no face.
    #[error("invalid starting position {0}: not on the cube surface")]
    StartOffSurface(Point3),
}
