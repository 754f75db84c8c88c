//! Starting points on the cube surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Bounds, CubeFace, Point3, UniformSource};

/// How the free coordinates of a start point are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplingMode {
    /// Each free axis gets its own draw. The point always lies on the
    /// chosen face.
    #[default]
    Independent,
    /// After sampling, z is overwritten with the sampled y value.
    ///
    /// Reproduces legacy start points exactly. Starts collapse onto the
    /// `y == z` diagonal plane, and on ±Z faces the fixed coordinate is
    /// replaced, so the point is usually off-surface.
    LegacyCoupled,
}

impl fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SamplingMode::Independent => "independent",
            SamplingMode::LegacyCoupled => "legacy-coupled",
        })
    }
}

impl FromStr for SamplingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "independent" => Ok(SamplingMode::Independent),
            "legacy-coupled" => Ok(SamplingMode::LegacyCoupled),
            other => Err(format!(
                "unknown sampling mode `{other}` (expected independent or legacy-coupled)"
            )),
        }
    }
}

/// Sample a start point on the surface of the cube.
///
/// Draw order: one draw picks the face (`floor(u * 6)` into
/// [`CubeFace::ALL`]), then one draw per free axis in ascending axis order,
/// each floored from `[min, max)`.
pub fn sample_start(
    bounds: Bounds,
    mode: SamplingMode,
    source: &mut impl UniformSource,
) -> Point3 {
    let face = CubeFace::ALL[source.index(CubeFace::ALL.len())];

    let mut point = Point3::ZERO;
    face.axis().set(&mut point, face.extreme(bounds));
    for axis in face.axis().others() {
        axis.set(&mut point, bounds.sample_coord(source));
    }

    if mode == SamplingMode::LegacyCoupled {
        point.z = point.y;
    }
    point
}
