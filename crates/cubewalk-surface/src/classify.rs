//! Face classification with a fixed tie-break order.

use crate::{Bounds, CubeFace, Point3};

/// Priority order of the face predicates.
///
/// A point on an edge or corner satisfies several predicates; the first one
/// in this list wins, so x-faces outrank y-faces, which outrank z-faces.
pub const CLASSIFY_ORDER: [CubeFace; 6] = [
    CubeFace::PosX,
    CubeFace::NegX,
    CubeFace::PosY,
    CubeFace::NegY,
    CubeFace::PosZ,
    CubeFace::NegZ,
];

/// The face `point` lies on, or `None` if no coordinate equals an extreme.
///
/// Membership in `[min, max]` is not checked: a point that has drifted past
/// the cube along a face plane still classifies to that face.
#[must_use]
pub fn classify(point: Point3, bounds: Bounds) -> Option<CubeFace> {
    CLASSIFY_ORDER
        .into_iter()
        .find(|face| face.contains(point, bounds))
}
