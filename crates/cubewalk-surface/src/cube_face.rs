//! The six faces of the cube.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Axis, Bounds, Direction, Point3};

/// The six faces of an axis-aligned cube.
///
/// Each variant names the axis held at an extreme and which extreme:
/// `PosX` is the face where `x == max`, `NegX` where `x == min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// The axis held fixed on this face.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            CubeFace::PosX | CubeFace::NegX => Axis::X,
            CubeFace::PosY | CubeFace::NegY => Axis::Y,
            CubeFace::PosZ | CubeFace::NegZ => Axis::Z,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> Direction {
        match self {
            CubeFace::PosX => Direction::PosX,
            CubeFace::NegX => Direction::NegX,
            CubeFace::PosY => Direction::PosY,
            CubeFace::NegY => Direction::NegY,
            CubeFace::PosZ => Direction::PosZ,
            CubeFace::NegZ => Direction::NegZ,
        }
    }

    /// The value the fixed axis takes on this face.
    #[must_use]
    pub fn extreme(self, bounds: Bounds) -> i64 {
        match self {
            CubeFace::PosX | CubeFace::PosY | CubeFace::PosZ => bounds.max(),
            CubeFace::NegX | CubeFace::NegY | CubeFace::NegZ => bounds.min(),
        }
    }

    /// Face predicate: the fixed axis of `point` equals this face's extreme.
    ///
    /// Only the fixed axis is tested; the free axes may lie anywhere.
    #[must_use]
    pub fn contains(self, point: Point3, bounds: Bounds) -> bool {
        self.axis().of(point) == self.extreme(bounds)
    }

    /// Short label, e.g. `+X`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CubeFace::PosX => "+X",
            CubeFace::NegX => "-X",
            CubeFace::PosY => "+Y",
            CubeFace::NegY => "-Y",
            CubeFace::PosZ => "+Z",
            CubeFace::NegZ => "-Z",
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
