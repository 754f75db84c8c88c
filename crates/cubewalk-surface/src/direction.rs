//! Axis-aligned unit steps and the per-face tangent table.

use serde::{Deserialize, Serialize};

use crate::{CubeFace, Point3};

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The coordinate of `point` along this axis.
    #[must_use]
    pub fn of(self, point: Point3) -> i64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
            Axis::Z => point.z,
        }
    }

    /// Overwrite the coordinate of `point` along this axis.
    pub fn set(self, point: &mut Point3, value: i64) {
        match self {
            Axis::X => point.x = value,
            Axis::Y => point.y = value,
            Axis::Z => point.z = value,
        }
    }

    /// The two other axes, in ascending order.
    #[must_use]
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

/// A single unit step along one axis.
///
/// Exactly one component of [`Direction::offset`] is nonzero, and it is ±1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

const X_TANGENTS: [Direction; 4] = [
    Direction::PosY,
    Direction::NegY,
    Direction::PosZ,
    Direction::NegZ,
];
const Y_TANGENTS: [Direction; 4] = [
    Direction::PosX,
    Direction::NegX,
    Direction::PosZ,
    Direction::NegZ,
];
const Z_TANGENTS: [Direction; 4] = [
    Direction::PosX,
    Direction::NegX,
    Direction::PosY,
    Direction::NegY,
];

impl Direction {
    /// All six unit steps.
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// The axis this step moves along.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Direction::PosX | Direction::NegX => Axis::X,
            Direction::PosY | Direction::NegY => Axis::Y,
            Direction::PosZ | Direction::NegZ => Axis::Z,
        }
    }

    /// `+1` or `-1`.
    #[must_use]
    pub fn sign(self) -> i64 {
        match self {
            Direction::PosX | Direction::PosY | Direction::PosZ => 1,
            Direction::NegX | Direction::NegY | Direction::NegZ => -1,
        }
    }

    /// The exact reversal of this step.
    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::PosX => Direction::NegX,
            Direction::NegX => Direction::PosX,
            Direction::PosY => Direction::NegY,
            Direction::NegY => Direction::PosY,
            Direction::PosZ => Direction::NegZ,
            Direction::NegZ => Direction::PosZ,
        }
    }

    /// The step as an integer vector.
    #[must_use]
    pub fn offset(self) -> Point3 {
        match self {
            Direction::PosX => Point3::X,
            Direction::NegX => Point3::NEG_X,
            Direction::PosY => Point3::Y,
            Direction::NegY => Point3::NEG_Y,
            Direction::PosZ => Point3::Z,
            Direction::NegZ => Point3::NEG_Z,
        }
    }

    /// Move `point` one unit along this direction, or `None` on `i64` overflow.
    #[must_use]
    pub fn apply(self, point: Point3) -> Option<Point3> {
        let axis = self.axis();
        let moved = axis.of(point).checked_add(self.sign())?;
        let mut next = point;
        axis.set(&mut next, moved);
        Some(next)
    }
}

impl CubeFace {
    /// The four unit steps lying in this face's plane, ordered
    /// `(+a, -a, +b, -b)` where `a < b` are the free axes.
    ///
    /// Both faces of an axis share the same set.
    #[must_use]
    pub fn tangent_directions(self) -> &'static [Direction; 4] {
        match self.axis() {
            Axis::X => &X_TANGENTS,
            Axis::Y => &Y_TANGENTS,
            Axis::Z => &Z_TANGENTS,
        }
    }

    /// Returns true if `dir` has no component along this face's normal.
    #[must_use]
    pub fn is_tangent(self, dir: Direction) -> bool {
        dir.axis() != self.axis()
    }
}

/// Tangent steps for a classification result; empty when off-surface.
#[must_use]
pub fn tangent_directions(face: Option<CubeFace>) -> &'static [Direction] {
    match face {
        Some(face) => face.tangent_directions(),
        None => &[],
    }
}
