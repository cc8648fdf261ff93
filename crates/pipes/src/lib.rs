//! pipes-rs: procedurally grown 3D pipes.
//!
//! Pipes start at random free cells of a bounded integer grid and walk one
//! cell per frame, turning at random and never crossing another pipe. A
//! pipe that runs into a wall or another pipe simply waits. Every so often
//! the whole scene fades out and starts over from a new camera angle.
//!
//! # Quick Start
//!
//! ```no_run
//! use pipes::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::time::Duration;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!     let mut saver = Screensaver::new(
//!         Options::default(),
//!         RecordingScene::new(),
//!         StdRng::from_entropy(),
//!     )?;
//!     for _ in 0..600 {
//!         saver.frame(Duration::from_millis(16));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The growth rules live in `pipes-core` and are re-exported here. This
//! crate adds what a host needs to run them:
//!
//! - [`Screensaver`] - the per-frame driver
//! - [`TimerQueue`] - virtual-clock clear timers
//! - [`TimedTransition`] - a clearing effect measured in frame time
//! - [`RecordingScene`] - a scene that records instead of drawing
//!
//! A real renderer implements [`Scene`] (and optionally its own
//! [`TransitionEffect`]) and maps grid cells to world space one unit per
//! cell.

// Accessors returning plain values don't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod headless;
mod init;
mod screensaver;
mod timer;
mod transition;

// Re-export core types
pub use pipes_core::{
    error::{PipesError, Result},
    grid::{is_adjacent, Axis, Direction, GridBounds, OccupancyMap},
    joint::{JointChances, JointCycle, JointKind, JointStyle, ResolvedJointStyle},
    lifecycle::{ClearOutcome, ClearSpeed, LifecyclePhase, SceneLifecycle},
    material::{PipeMaterial, TextureCache, TextureDescriptor},
    options::{ClearInterval, Options},
    pipe::{Pipe, PipeId, PipeState, StepOutcome},
    population::{Cohort, PipePopulation, TickReport},
    scene::{ContainerHandle, Scene, Scheduler, TaskHandle, TransitionEffect, TransitionToken},
    viewpoint::Viewpoint,
    world::World,
    IVec3, Quat, Vec3,
};

pub use headless::{RecordingScene, SceneEvent};
pub use init::{init_logging, start};
pub use screensaver::Screensaver;
pub use timer::TimerQueue;
pub use transition::TimedTransition;
