//! Collaborator traits implemented by the host application.
//!
//! The core never renders anything. It describes geometry through
//! [`Scene`], asks a [`TransitionEffect`] to play the clearing effect, and
//! books clear timers through a [`Scheduler`].

use std::time::Duration;

use glam::{IVec3, Quat};

use crate::joint::JointKind;
use crate::material::PipeMaterial;
use crate::viewpoint::Viewpoint;

/// Handle to a scene-graph node that groups one pipe's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerHandle(pub u64);

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(pub u64);

/// Identifies one clearing transition.
///
/// The effect hands the token back when it finishes; only the token of the
/// transition in flight is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(pub u64);

/// Receiver of the geometry produced by growing pipes.
///
/// Points are grid cells; renderers map them to world space one unit per
/// cell.
pub trait Scene {
    /// Inserts an empty node that will hold one pipe's geometry.
    fn add_pipe_container(&mut self) -> ContainerHandle;

    /// Removes a pipe node and everything inside it.
    fn remove_pipe_container(&mut self, container: ContainerHandle);

    /// Adds a cylinder linking two adjacent cells.
    fn emit_segment(
        &mut self,
        container: ContainerHandle,
        from: IVec3,
        to: IVec3,
        material: &PipeMaterial,
    );

    /// Adds a joint marker centered on a cell.
    fn emit_joint(
        &mut self,
        container: ContainerHandle,
        kind: JointKind,
        at: IVec3,
        orientation: Quat,
        material: &PipeMaterial,
    );

    /// Moves the camera.
    fn set_viewpoint(&mut self, viewpoint: Viewpoint);

    /// Draws the current frame. Skipped while a clearing transition runs.
    fn present(&mut self) {}
}

/// Plays the clearing effect that hides a scene reset.
pub trait TransitionEffect {
    /// Starts an effect lasting `duration`.
    ///
    /// When it finishes, the host passes `token` to
    /// [`SceneLifecycle::complete_transition`](crate::lifecycle::SceneLifecycle::complete_transition).
    fn begin(&mut self, duration: Duration, token: TransitionToken);
}

/// Cancellable one-shot timers.
pub trait Scheduler {
    /// Books a task that fires once after `delay`.
    fn schedule(&mut self, delay: Duration) -> TaskHandle;

    /// Cancels a pending task. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TaskHandle);
}
