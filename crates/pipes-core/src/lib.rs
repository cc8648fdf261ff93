//! Core of pipes-rs.
//!
//! This crate grows pipes through a bounded integer grid and decides when
//! the scene is wiped:
//! - [`World`] owns the [`OccupancyMap`] and shared texture descriptors
//! - [`Pipe`] is one random walk with its joint policy
//! - [`PipePopulation`] steps live pipes and spawns new cohorts
//! - [`SceneLifecycle`] runs the timed clear-and-reset cycle
//!
//! Nothing here renders. Geometry goes out through the [`Scene`] trait,
//! clearing effects through [`TransitionEffect`] and timers through
//! [`Scheduler`]; the host supplies all three.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors returning Self or plain values don't need must_use
#![allow(clippy::must_use_candidate)]
// Growth and lifecycle calls thread world, scene and rng explicitly
#![allow(clippy::too_many_arguments)]

pub mod error;
pub mod grid;
pub mod joint;
pub mod lifecycle;
pub mod material;
pub mod options;
pub mod pipe;
pub mod population;
pub mod scene;
pub mod viewpoint;
pub mod world;

#[cfg(test)]
mod test_scene;

pub use error::{PipesError, Result};
pub use grid::{is_adjacent, Axis, Direction, GridBounds, OccupancyMap};
pub use joint::{JointChances, JointCycle, JointKind, JointStyle, ResolvedJointStyle};
pub use lifecycle::{ClearOutcome, ClearSpeed, LifecyclePhase, SceneLifecycle};
pub use material::{PipeMaterial, TextureCache, TextureDescriptor};
pub use options::{ClearInterval, Options};
pub use pipe::{Pipe, PipeId, PipeState, StepOutcome};
pub use population::{Cohort, PipePopulation, TickReport};
pub use scene::{
    ContainerHandle, Scene, Scheduler, TaskHandle, TransitionEffect, TransitionToken,
};
pub use viewpoint::Viewpoint;
pub use world::World;

// Re-export glam types for convenience
pub use glam::{IVec3, Quat, Vec3};
