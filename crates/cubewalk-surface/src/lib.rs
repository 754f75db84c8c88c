//! Pseudorandom walks confined to the surface of an axis-aligned cube.
//!
//! A walk starts at a point sampled on one of the six faces and advances one
//! unit step at a time along directions tangent to the face it occupies.
//! Stepping onto an edge may reclassify the walker onto a neighboring face;
//! stepping off the surface stalls the walker for that step.

mod bounds;
mod classify;
mod cube_face;
mod direction;
mod error;
mod sampler;
mod source;
mod walk;

pub use bounds::Bounds;
pub use classify::{CLASSIFY_ORDER, classify};
pub use cube_face::CubeFace;
pub use direction::{Axis, Direction, tangent_directions};
pub use error::WalkError;
pub use sampler::{SamplingMode, sample_start};
pub use source::{SequenceSource, UniformSource};
pub use walk::{
    DriftPolicy, FaceTransition, MAX_STEPS, Stall, StallReason, StepKind, StepOutcome, Walk,
    WalkParams, WalkerState, step, walk,
};

/// Integer lattice point. All walk arithmetic happens on this grid.
pub type Point3 = glam::I64Vec3;
