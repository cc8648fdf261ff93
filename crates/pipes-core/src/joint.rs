//! Joint styles, joint kinds and per-cohort joint probabilities.

use std::fmt;
use std::str::FromStr;

use glam::{EulerRot, Quat};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PipesError, Result};

/// Radius of a pipe segment in grid units.
pub const PIPE_RADIUS: f32 = 0.2;
/// Radius of a ball joint.
pub const BALL_JOINT_RADIUS: f32 = PIPE_RADIUS * 1.5;
/// Size of a teapot joint.
pub const TEAPOT_SIZE: f32 = BALL_JOINT_RADIUS;
/// Radius of the small sphere that rounds off an elbow.
pub const ELBOW_RADIUS: f32 = PIPE_RADIUS;

/// Teapot probability for ordinary cohorts.
pub const DEFAULT_TEAPOT_CHANCE: f64 = 1.0 / 200.0;
/// Ball joint probability for [`JointStyle::Mixed`] cohorts.
pub const MIXED_BALL_JOINT_CHANCE: f64 = 1.0 / 3.0;

/// The configured joint style for spawned cohorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JointStyle {
    /// Plain elbows at every turn.
    Elbow,
    /// Ball joints at every turn.
    Ball,
    /// A mix of ball joints and elbows.
    Mixed,
    /// Rotate through elbow, ball and mixed on successive spawns.
    #[default]
    Cycle,
}

impl JointStyle {
    /// Returns the lowercase name used in option files.
    pub fn as_str(self) -> &'static str {
        match self {
            JointStyle::Elbow => "elbow",
            JointStyle::Ball => "ball",
            JointStyle::Mixed => "mixed",
            JointStyle::Cycle => "cycle",
        }
    }
}

impl fmt::Display for JointStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointStyle {
    type Err = PipesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "elbow" => Ok(JointStyle::Elbow),
            "ball" => Ok(JointStyle::Ball),
            "mixed" => Ok(JointStyle::Mixed),
            "cycle" => Ok(JointStyle::Cycle),
            other => Err(PipesError::UnknownJointStyle(other.to_string())),
        }
    }
}

/// A joint style that has been resolved to a concrete, non-cycling value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedJointStyle {
    Elbow,
    Ball,
    Mixed,
}

impl ResolvedJointStyle {
    /// Returns the ball joint probability this style implies.
    pub fn ball_joint_chance(self) -> f64 {
        match self {
            ResolvedJointStyle::Elbow => 0.0,
            ResolvedJointStyle::Ball => 1.0,
            ResolvedJointStyle::Mixed => MIXED_BALL_JOINT_CHANCE,
        }
    }
}

/// Rotation through elbow, ball and mixed for [`JointStyle::Cycle`].
///
/// The index only advances when a cycle-style cohort is resolved, so spawns
/// under fixed styles in between leave the rotation where it was.
#[derive(Debug, Clone, Default)]
pub struct JointCycle {
    index: usize,
}

impl JointCycle {
    const ORDER: [ResolvedJointStyle; 3] = [
        ResolvedJointStyle::Elbow,
        ResolvedJointStyle::Ball,
        ResolvedJointStyle::Mixed,
    ];

    /// Creates a cycle starting at elbow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current style and advances, wrapping after mixed.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> ResolvedJointStyle {
        let style = Self::ORDER[self.index];
        self.index = (self.index + 1) % Self::ORDER.len();
        style
    }

    /// Resolves `style`, consuming a cycle step only for [`JointStyle::Cycle`].
    pub fn resolve(&mut self, style: JointStyle) -> ResolvedJointStyle {
        match style {
            JointStyle::Elbow => ResolvedJointStyle::Elbow,
            JointStyle::Ball => ResolvedJointStyle::Ball,
            JointStyle::Mixed => ResolvedJointStyle::Mixed,
            JointStyle::Cycle => self.next(),
        }
    }
}

/// The per-pipe probabilities used when a pipe turns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointChances {
    /// Probability of a teapot, tried first.
    pub teapot: f64,
    /// Probability of a ball joint when no teapot was drawn.
    pub ball_joint: f64,
}

impl JointChances {
    /// Chances for an ordinary cohort of the given style.
    pub fn for_style(style: ResolvedJointStyle) -> Self {
        Self {
            teapot: DEFAULT_TEAPOT_CHANCE,
            ball_joint: style.ball_joint_chance(),
        }
    }

    /// Returns a copy with a different teapot probability.
    #[must_use]
    pub fn with_teapot(mut self, teapot: f64) -> Self {
        self.teapot = teapot;
        self
    }

    /// Draws a joint kind: teapot, else ball, else elbow.
    pub fn draw(&self, rng: &mut impl Rng) -> JointKind {
        if chance(rng, self.teapot) {
            JointKind::Teapot
        } else if chance(rng, self.ball_joint) {
            JointKind::Ball
        } else {
            JointKind::Elbow
        }
    }
}

impl Default for JointChances {
    fn default() -> Self {
        Self::for_style(ResolvedJointStyle::Elbow)
    }
}

/// The geometry placed where a pipe changes direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointKind {
    Elbow,
    Ball,
    Teapot,
}

impl JointKind {
    /// Picks the orientation for a joint of this kind.
    ///
    /// Teapots get a random number of quarter turns about each axis; the
    /// rotationally symmetric kinds always use the identity.
    pub fn orientation(self, rng: &mut impl Rng) -> Quat {
        match self {
            JointKind::Teapot => {
                let mut quarter_turn = || f32::from(rng.gen_range(0u8..4)) * std::f32::consts::FRAC_PI_2;
                let (x, y, z) = (quarter_turn(), quarter_turn(), quarter_turn());
                Quat::from_euler(EulerRot::XYZ, x, y, z)
            }
            JointKind::Elbow | JointKind::Ball => Quat::IDENTITY,
        }
    }
}

/// Bernoulli trial with probability `p`, clamped to `[0, 1]`.
pub(crate) fn chance(rng: &mut impl Rng, p: f64) -> bool {
    if p.is_nan() {
        return false;
    }
    rng.gen_bool(p.clamp(0.0, 1.0))
}
