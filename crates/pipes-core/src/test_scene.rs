//! In-memory collaborators for unit tests.

use std::time::Duration;

use glam::{IVec3, Quat};

use crate::joint::JointKind;
use crate::material::PipeMaterial;
use crate::scene::{
    ContainerHandle, Scene, Scheduler, TaskHandle, TransitionEffect, TransitionToken,
};
use crate::viewpoint::Viewpoint;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Add(ContainerHandle),
    Remove(ContainerHandle),
    Segment {
        container: ContainerHandle,
        from: IVec3,
        to: IVec3,
        material: PipeMaterial,
    },
    Joint {
        container: ContainerHandle,
        kind: JointKind,
        at: IVec3,
    },
    Viewpoint(Viewpoint),
}

#[derive(Debug, Default)]
pub struct TestScene {
    pub calls: Vec<RecordedCall>,
    next_container: u64,
}

impl TestScene {
    pub fn joints(&self) -> Vec<(JointKind, IVec3)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RecordedCall::Joint { kind, at, .. } => Some((*kind, *at)),
                _ => None,
            })
            .collect()
    }

    pub fn segments(&self) -> Vec<(IVec3, IVec3)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RecordedCall::Segment { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn containers_added(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RecordedCall::Add(_)))
            .count()
    }

    pub fn containers_removed(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RecordedCall::Remove(_)))
            .count()
    }

    pub fn viewpoints(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RecordedCall::Viewpoint(_)))
            .count()
    }
}

impl Scene for TestScene {
    fn add_pipe_container(&mut self) -> ContainerHandle {
        let handle = ContainerHandle(self.next_container);
        self.next_container += 1;
        self.calls.push(RecordedCall::Add(handle));
        handle
    }

    fn remove_pipe_container(&mut self, container: ContainerHandle) {
        self.calls.push(RecordedCall::Remove(container));
    }

    fn emit_segment(
        &mut self,
        container: ContainerHandle,
        from: IVec3,
        to: IVec3,
        material: &PipeMaterial,
    ) {
        self.calls.push(RecordedCall::Segment {
            container,
            from,
            to,
            material: material.clone(),
        });
    }

    fn emit_joint(
        &mut self,
        container: ContainerHandle,
        kind: JointKind,
        at: IVec3,
        _orientation: Quat,
        _material: &PipeMaterial,
    ) {
        self.calls.push(RecordedCall::Joint {
            container,
            kind,
            at,
        });
    }

    fn set_viewpoint(&mut self, viewpoint: Viewpoint) {
        self.calls.push(RecordedCall::Viewpoint(viewpoint));
    }
}

#[derive(Debug, Default)]
pub struct TestEffect {
    pub begun: Vec<(Duration, TransitionToken)>,
}

impl TransitionEffect for TestEffect {
    fn begin(&mut self, duration: Duration, token: TransitionToken) {
        self.begun.push((duration, token));
    }
}

#[derive(Debug, Default)]
pub struct TestScheduler {
    pub scheduled: Vec<(TaskHandle, Duration)>,
    pub cancelled: Vec<TaskHandle>,
    next: u64,
}

impl TestScheduler {
    pub fn pending(&self) -> Vec<TaskHandle> {
        self.scheduled
            .iter()
            .map(|(h, _)| *h)
            .filter(|h| !self.cancelled.contains(h))
            .collect()
    }
}

impl Scheduler for TestScheduler {
    fn schedule(&mut self, delay: Duration) -> TaskHandle {
        let handle = TaskHandle(self.next);
        self.next += 1;
        self.scheduled.push((handle, delay));
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.cancelled.push(handle);
    }
}
