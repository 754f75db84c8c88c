//! The surface walk: immutable walker state advanced one step at a time.
//!
//! Each step may redraw the heading, then tries to move one unit. The
//! candidate is reclassified; staying on the same face is a plain move,
//! landing on another face switches the tracked face (and redraws the heading
//! if it is no longer tangent), and landing on no face stalls the walker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    Bounds, CubeFace, Direction, Point3, SamplingMode, UniformSource, WalkError, classify,
    sample_start,
};

/// Whether free coordinates may leave `[min, max]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriftPolicy {
    /// Free axes are never range-checked. A walker on an x-face can slide
    /// along its plane past the cube's edges indefinitely, because the face
    /// predicate only tests the fixed axis.
    #[default]
    Unbounded,
    /// Any candidate outside `[min, max]` on some axis is rejected as a
    /// stall.
    Clamped,
}

impl fmt::Display for DriftPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DriftPolicy::Unbounded => "unbounded",
            DriftPolicy::Clamped => "clamped",
        })
    }
}

impl FromStr for DriftPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unbounded" => Ok(DriftPolicy::Unbounded),
            "clamped" => Ok(DriftPolicy::Clamped),
            other => Err(format!(
                "unknown drift policy `{other}` (expected unbounded or clamped)"
            )),
        }
    }
}

/// Exclusive upper bound on `steps`: a path of `steps + 1` points must stay
/// within the `isize::MAX` byte limit of a `Vec`.
pub const MAX_STEPS: usize = isize::MAX as usize / std::mem::size_of::<Point3>();

/// Validated inputs for [`walk`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkParams {
    pub bounds: Bounds,
    pub steps: usize,
    pub change_prob: f64,
    pub sampling: SamplingMode,
    pub drift: DriftPolicy,
}

impl WalkParams {
    /// Parameters with default sampling and drift policies.
    pub fn new(bounds: Bounds, steps: usize, change_prob: f64) -> Result<Self, WalkError> {
        let params = Self {
            bounds,
            steps,
            change_prob,
            sampling: SamplingMode::default(),
            drift: DriftPolicy::default(),
        };
        params.validate()?;
        Ok(params)
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    #[must_use]
    pub fn with_drift(mut self, drift: DriftPolicy) -> Self {
        self.drift = drift;
        self
    }

    /// Check the change probability and step count. Fields are public, so
    /// [`walk`] calls this again before sampling.
    pub fn validate(&self) -> Result<(), WalkError> {
        if !(0.0..=1.0).contains(&self.change_prob) {
            return Err(WalkError::InvalidChangeProbability(self.change_prob));
        }
        if self.steps >= MAX_STEPS {
            return Err(WalkError::TooManySteps(self.steps));
        }
        Ok(())
    }
}

/// Position, tracked face and heading of the walker between steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalkerState {
    pub point: Point3,
    pub face: CubeFace,
    pub direction: Direction,
}

impl WalkerState {
    /// Sample a start point, classify it and draw the initial heading.
    pub fn start(params: &WalkParams, source: &mut impl UniformSource) -> Result<Self, WalkError> {
        let point = sample_start(params.bounds, params.sampling, source);
        let face = classify(point, params.bounds).ok_or(WalkError::StartOffSurface(point))?;
        let tangents = face.tangent_directions();
        let direction = tangents[source.index(tangents.len())];
        Ok(Self {
            point,
            face,
            direction,
        })
    }
}

/// Why a step was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StallReason {
    /// The candidate matched no face predicate.
    OffSurface,
    /// The candidate left `[min, max]` under [`DriftPolicy::Clamped`], or
    /// overflowed `i64`.
    OutOfRange,
}

/// What a single step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// Moved within the tracked face.
    Moved,
    /// Moved onto a point that classifies to a different face.
    Transitioned { from: CubeFace, to: CubeFace },
    /// Stayed put.
    Stalled {
        reason: StallReason,
        attempted: Option<Point3>,
    },
}

/// The state after a step and how it was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub state: WalkerState,
    pub kind: StepKind,
}

/// A rejected step, recorded on the [`Walk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stall {
    /// Zero-based step index; the repeated point is `path[step + 1]`.
    pub step: usize,
    pub at: Point3,
    /// `None` when the candidate overflowed.
    pub attempted: Option<Point3>,
    pub reason: StallReason,
}

/// A change of tracked face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceTransition {
    pub step: usize,
    pub at: Point3,
    pub from: CubeFace,
    pub to: CubeFace,
}

/// A finished walk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    /// `steps + 1` points; `path[0]` is the sampled start.
    pub path: Vec<Point3>,
    pub start: WalkerState,
    pub end: WalkerState,
    pub stalls: Vec<Stall>,
    pub transitions: Vec<FaceTransition>,
}

impl Walk {
    fn begin(start: WalkerState, steps: usize) -> Result<Self, WalkError> {
        let mut path = Vec::new();
        path.try_reserve_exact(steps.saturating_add(1))
            .map_err(|_| WalkError::TooManySteps(steps))?;
        path.push(start.point);
        Ok(Self {
            path,
            start,
            end: start,
            stalls: Vec::new(),
            transitions: Vec::new(),
        })
    }

    fn record(&mut self, step: usize, outcome: &StepOutcome) {
        let at = outcome.state.point;
        match outcome.kind {
            StepKind::Moved => {}
            StepKind::Transitioned { from, to } => {
                self.transitions.push(FaceTransition { step, at, from, to });
            }
            StepKind::Stalled { reason, attempted } => {
                self.stalls.push(Stall {
                    step,
                    at,
                    attempted,
                    reason,
                });
            }
        }
        self.path.push(at);
    }

    /// Number of steps taken.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }
}

/// Advance the walker by one step.
///
/// One draw decides whether to change heading (`u < change_prob`); a change
/// draws uniformly from the face's tangents minus the exact reversal of the
/// current heading. A face transition draws once more if the heading is not
/// tangent to the new face.
pub fn step(
    state: WalkerState,
    params: &WalkParams,
    source: &mut impl UniformSource,
) -> StepOutcome {
    let mut direction = state.direction;
    if source.next_unit() < params.change_prob {
        let reversal = direction.opposite();
        let choices: Vec<Direction> = state
            .face
            .tangent_directions()
            .iter()
            .copied()
            .filter(|d| *d != reversal)
            .collect();
        direction = choices[source.index(choices.len())];
    }

    let stalled = move |reason: StallReason, attempted: Option<Point3>| StepOutcome {
        state: WalkerState {
            direction,
            ..state
        },
        kind: StepKind::Stalled { reason, attempted },
    };

    let Some(candidate) = direction.apply(state.point) else {
        return stalled(StallReason::OutOfRange, None);
    };
    if params.drift == DriftPolicy::Clamped && !params.bounds.contains(candidate) {
        return stalled(StallReason::OutOfRange, Some(candidate));
    }

    match classify(candidate, params.bounds) {
        Some(face) if face == state.face => StepOutcome {
            state: WalkerState {
                point: candidate,
                face,
                direction,
            },
            kind: StepKind::Moved,
        },
        Some(face) => {
            if !face.is_tangent(direction) {
                let tangents = face.tangent_directions();
                direction = tangents[source.index(tangents.len())];
            }
            StepOutcome {
                state: WalkerState {
                    point: candidate,
                    face,
                    direction,
                },
                kind: StepKind::Transitioned {
                    from: state.face,
                    to: face,
                },
            }
        }
        None => stalled(StallReason::OffSurface, Some(candidate)),
    }
}

/// Generate a walk of `params.steps` steps starting from a sampled point.
///
/// Fails on invalid parameters, on an off-surface start (possible with
/// [`SamplingMode::LegacyCoupled`]), or when the path cannot be allocated. Stalls are recorded, not returned as
/// errors.
pub fn walk(params: &WalkParams, source: &mut impl UniformSource) -> Result<Walk, WalkError> {
    params.validate()?;
    let start = WalkerState::start(params, source)?;
    tracing::debug!(
        start = %start.point,
        face = %start.face,
        direction = ?start.direction,
        steps = params.steps,
        "walk started"
    );

    let mut walked = Walk::begin(start, params.steps)?;
    let end = (0..params.steps).fold(start, |state, i| {
        let outcome = step(state, params, source);
        match outcome.kind {
            StepKind::Transitioned { from, to } => {
                tracing::debug!(
                    step = i,
                    at = %outcome.state.point,
                    %from,
                    %to,
                    "face transition"
                );
            }
            StepKind::Stalled { reason, attempted } => {
                tracing::warn!(
                    step = i,
                    at = %state.point,
                    ?attempted,
                    ?reason,
                    "step would leave the cube surface, staying in place"
                );
            }
            StepKind::Moved => {}
        }
        walked.record(i, &outcome);
        outcome.state
    });
    walked.end = end;

    Ok(walked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceSource;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cube() -> Bounds {
        Bounds::new(0, 10).unwrap()
    }

    fn params(steps: usize, change_prob: f64) -> WalkParams {
        WalkParams::new(cube(), steps, change_prob).unwrap()
    }

    fn zeros() -> SequenceSource {
        SequenceSource::new(vec![0.0])
    }

    fn assert_path_invariants(walk: &Walk, bounds: Bounds) {
        for p in &walk.path {
            assert!(bounds.touches_surface(*p), "{p} is not on the surface");
        }
        for pair in walk.path.windows(2) {
            let delta = pair[1] - pair[0];
            let manhattan = delta.abs().element_sum();
            assert!(
                manhattan <= 1,
                "{} -> {} is not a unit step",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_zero_steps_yields_start_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let w = walk(&params(0, 0.5), &mut rng).unwrap();
        assert_eq!(w.path.len(), 1);
        assert_eq!(w.path[0], w.start.point);
        assert!(classify(w.path[0], cube()).is_some());
        assert_eq!(w.steps(), 0);
        assert!(w.stalls.is_empty());
    }

    #[test]
    fn test_straight_line_on_pos_x() {
        // Face draw 0 -> PosX, y = 0, z = 0, heading index 0 -> PosY, and no
        // change on any step.
        let mut source = zeros();
        let w = walk(&params(5, 0.0), &mut source).unwrap();
        let expected: Vec<Point3> = (0..=5).map(|y| Point3::new(10, y, 0)).collect();
        assert_eq!(w.path, expected);
        assert_eq!(w.start.face, CubeFace::PosX);
        assert_eq!(w.start.direction, Direction::PosY);
        assert_eq!(w.end.direction, Direction::PosY);
        // face, two coordinates, heading, one change check per step
        assert_eq!(source.consumed(), 4 + 5);
    }

    #[test]
    fn test_path_length_is_steps_plus_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for steps in [1, 2, 17, 250] {
            let w = walk(&params(steps, 0.3), &mut rng).unwrap();
            assert_eq!(w.path.len(), steps + 1);
        }
    }

    #[test]
    fn test_random_walks_stay_on_surface() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let w = walk(&params(400, 0.25), &mut rng).unwrap();
            assert_path_invariants(&w, cube());
        }
    }

    #[test]
    fn test_clamped_walks_stay_inside() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let p = params(400, 0.1).with_drift(DriftPolicy::Clamped);
            let w = walk(&p, &mut rng).unwrap();
            assert_path_invariants(&w, cube());
            assert!(w.path.iter().all(|pt| cube().contains(*pt)));
        }
    }

    #[test]
    fn test_same_seed_same_walk() {
        let p = params(300, 0.4);
        let a = walk(&p, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = walk(&p, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_heading_persists_without_change_prob() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let p = params(200, 0.0);
            let mut state = WalkerState::start(&p, &mut rng).unwrap();
            for _ in 0..p.steps {
                let outcome = step(state, &p, &mut rng);
                if !matches!(outcome.kind, StepKind::Transitioned { .. }) {
                    assert_eq!(outcome.state.direction, state.direction);
                }
                state = outcome.state;
            }
        }
    }

    #[test]
    fn test_full_change_prob_never_reverses() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let p = params(200, 1.0);
            let mut state = WalkerState::start(&p, &mut rng).unwrap();
            for _ in 0..p.steps {
                let outcome = step(state, &p, &mut rng);
                if !matches!(outcome.kind, StepKind::Transitioned { .. }) {
                    assert_ne!(outcome.state.direction, state.direction.opposite());
                }
                state = outcome.state;
            }
        }
    }

    #[test]
    fn test_change_excludes_reversal() {
        // Heading PosY on PosX; choices are PosY, PosZ, NegZ. Draw 0.4 -> index 1.
        let state = WalkerState {
            point: Point3::new(10, 4, 4),
            face: CubeFace::PosX,
            direction: Direction::PosY,
        };
        let mut source = SequenceSource::new(vec![0.0, 0.4]);
        let outcome = step(state, &params(1, 1.0), &mut source);
        assert_eq!(outcome.state.direction, Direction::PosZ);
        assert_eq!(outcome.state.point, Point3::new(10, 4, 5));
        assert_eq!(outcome.kind, StepKind::Moved);
    }

    #[test]
    fn test_edge_reclassifies_to_x_face() {
        let state = WalkerState {
            point: Point3::new(9, 10, 5),
            face: CubeFace::PosY,
            direction: Direction::PosX,
        };
        let outcome = step(state, &params(1, 0.0), &mut zeros());
        assert_eq!(
            outcome.kind,
            StepKind::Transitioned {
                from: CubeFace::PosY,
                to: CubeFace::PosX
            }
        );
        assert_eq!(outcome.state.point, Point3::new(10, 10, 5));
        // PosX is not tangent to an x-face; redrawn to index 0.
        assert_eq!(outcome.state.direction, Direction::PosY);
    }

    #[test]
    fn test_edge_walk_triggers_transition_without_leaving_face() {
        // Sliding along the z == max edge of PosZ onto y == max: the z
        // coordinate never changes, yet priority moves the walker to PosY.
        let state = WalkerState {
            point: Point3::new(4, 9, 10),
            face: CubeFace::PosZ,
            direction: Direction::PosY,
        };
        let outcome = step(state, &params(1, 0.0), &mut zeros());
        assert_eq!(outcome.state.face, CubeFace::PosY);
        assert_eq!(outcome.state.point, Point3::new(4, 10, 10));
        assert_eq!(outcome.state.point.z, 10);
        // PosY heading is not tangent to PosY, so it was redrawn.
        assert_eq!(outcome.state.direction, Direction::PosX);
    }

    #[test]
    fn test_transition_keeps_tangent_heading() {
        // Tracked face disagrees with the point, so the move lands on PosY
        // with a heading that is already tangent to it.
        let state = WalkerState {
            point: Point3::new(4, 10, 5),
            face: CubeFace::PosZ,
            direction: Direction::PosX,
        };
        let mut source = zeros();
        let outcome = step(state, &params(1, 0.0), &mut source);
        assert_eq!(outcome.state.face, CubeFace::PosY);
        assert_eq!(outcome.state.point, Point3::new(5, 10, 5));
        assert_eq!(outcome.state.direction, Direction::PosX);
        assert_eq!(source.consumed(), 1);
    }

    #[test]
    fn test_x_faces_are_absorbing() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let w = walk(&params(500, 0.3), &mut rng).unwrap();
            for t in &w.transitions {
                assert!(
                    !matches!(t.from, CubeFace::PosX | CubeFace::NegX),
                    "left an x-face at step {}",
                    t.step
                );
            }
        }
    }

    #[test]
    fn test_normal_step_stalls_off_surface() {
        let state = WalkerState {
            point: Point3::new(10, 5, 5),
            face: CubeFace::PosX,
            direction: Direction::NegX,
        };
        let outcome = step(state, &params(1, 0.0), &mut zeros());
        assert_eq!(
            outcome.kind,
            StepKind::Stalled {
                reason: StallReason::OffSurface,
                attempted: Some(Point3::new(9, 5, 5)),
            }
        );
        assert_eq!(outcome.state.point, state.point);
        assert_eq!(outcome.state.face, CubeFace::PosX);
    }

    #[test]
    fn test_clamped_corner_stalls() {
        let state = WalkerState {
            point: Point3::new(10, 10, 10),
            face: CubeFace::PosX,
            direction: Direction::PosY,
        };
        let p = params(1, 0.0).with_drift(DriftPolicy::Clamped);
        let outcome = step(state, &p, &mut zeros());
        assert_eq!(
            outcome.kind,
            StepKind::Stalled {
                reason: StallReason::OutOfRange,
                attempted: Some(Point3::new(10, 11, 10)),
            }
        );
        assert_eq!(outcome.state, state);
    }

    #[test]
    fn test_unbounded_corner_drifts() {
        let state = WalkerState {
            point: Point3::new(10, 10, 10),
            face: CubeFace::PosX,
            direction: Direction::PosY,
        };
        let outcome = step(state, &params(1, 0.0), &mut zeros());
        assert_eq!(outcome.kind, StepKind::Moved);
        assert_eq!(outcome.state.point, Point3::new(10, 11, 10));
    }

    #[test]
    fn test_stall_repeats_point_and_is_recorded() {
        // Start at (10, 9, 0) on PosX heading PosY, clamped: one move to the
        // corner, then stalls against y == max.
        let mut source = SequenceSource::new(vec![0.0, 0.95, 0.0, 0.0]);
        let p = params(3, 0.0).with_drift(DriftPolicy::Clamped);
        let w = walk(&p, &mut source).unwrap();
        assert_eq!(
            w.path,
            [
                Point3::new(10, 9, 0),
                Point3::new(10, 10, 0),
                Point3::new(10, 10, 0),
                Point3::new(10, 10, 0),
            ]
        );
        assert_eq!(w.stalls.len(), 2);
        assert_eq!(w.stalls[0].step, 1);
        assert_eq!(w.stalls[0].reason, StallReason::OutOfRange);
        assert_eq!(w.stalls[0].attempted, Some(Point3::new(10, 11, 0)));
    }

    #[test]
    fn test_overflow_stalls() {
        let bounds = Bounds::new(0, i64::MAX).unwrap();
        let state = WalkerState {
            point: Point3::new(0, i64::MAX, 3),
            face: CubeFace::NegX,
            direction: Direction::PosY,
        };
        let p = WalkParams::new(bounds, 1, 0.0).unwrap();
        let outcome = step(state, &p, &mut zeros());
        assert_eq!(
            outcome.kind,
            StepKind::Stalled {
                reason: StallReason::OutOfRange,
                attempted: None,
            }
        );
    }

    #[test]
    fn test_drift_names_parse_back() {
        assert_eq!("clamped".parse::<DriftPolicy>(), Ok(DriftPolicy::Clamped));
        assert_eq!(
            DriftPolicy::Unbounded.to_string().parse::<DriftPolicy>(),
            Ok(DriftPolicy::Unbounded)
        );
        assert!("wrap".parse::<DriftPolicy>().is_err());
    }

    #[test]
    fn test_invalid_change_prob_rejected() {
        assert_eq!(
            WalkParams::new(cube(), 3, 1.5),
            Err(WalkError::InvalidChangeProbability(1.5))
        );
        assert!(WalkParams::new(cube(), 3, -0.1).is_err());
        assert!(WalkParams::new(cube(), 3, f64::NAN).is_err());
    }

    #[test]
    fn test_huge_step_count_rejected() {
        assert_eq!(
            WalkParams::new(cube(), usize::MAX, 0.0),
            Err(WalkError::TooManySteps(usize::MAX))
        );
        assert_eq!(
            WalkParams::new(cube(), MAX_STEPS, 0.0),
            Err(WalkError::TooManySteps(MAX_STEPS))
        );
        assert!(WalkParams::new(cube(), MAX_STEPS - 1, 0.0).is_ok());
    }

    #[test]
    fn test_walk_with_huge_step_count_errors_instead_of_panicking() {
        let mut p = params(3, 0.0);
        p.steps = usize::MAX;
        let result = walk(&p, &mut zeros());
        assert_eq!(result, Err(WalkError::TooManySteps(usize::MAX)));
    }

    #[test]
    fn test_heading_tangent_and_fixed_axis_held_every_step() {
        for change_prob in [0.0, 0.3, 1.0] {
            for seed in 0..200 {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let p = params(500, change_prob);
                let mut state = WalkerState::start(&p, &mut rng).unwrap();
                for i in 0..p.steps {
                    state = step(state, &p, &mut rng).state;
                    assert!(
                        state.face.is_tangent(state.direction),
                        "seed {seed} p {change_prob} step {i}: {:?} is not tangent to {}",
                        state.direction,
                        state.face
                    );
                    assert_eq!(
                        state.face.axis().of(state.point),
                        state.face.extreme(p.bounds),
                        "seed {seed} p {change_prob} step {i}: {} left the plane of {}",
                        state.point,
                        state.face
                    );
                }
            }
        }
    }

    #[test]
    fn test_walk_revalidates_params() {
        let mut p = params(3, 0.5);
        p.change_prob = 2.0;
        let result = walk(&p, &mut zeros());
        assert_eq!(result, Err(WalkError::InvalidChangeProbability(2.0)));
    }

    #[test]
    fn test_legacy_start_off_surface_is_fatal() {
        let mut source = SequenceSource::new(vec![0.7, 0.55, 0.35]);
        let p = params(10, 0.0).with_sampling(SamplingMode::LegacyCoupled);
        let result = walk(&p, &mut source);
        assert_eq!(
            result,
            Err(WalkError::StartOffSurface(Point3::new(5, 3, 3)))
        );
    }

    #[test]
    fn test_legacy_start_on_x_face_walks() {
        let mut source = SequenceSource::new(vec![0.0, 0.55, 0.35, 0.0]);
        let p = params(2, 0.0).with_sampling(SamplingMode::LegacyCoupled);
        let w = walk(&p, &mut source).unwrap();
        assert_eq!(w.path[0], Point3::new(10, 5, 5));
        assert_eq!(w.path.len(), 3);
    }
}
