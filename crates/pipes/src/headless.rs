//! Headless scene for pipes-rs.
//!
//! [`RecordingScene`] keeps every call it receives instead of drawing it.
//! Integration tests assert against the event log, and batch runs use the
//! counters to report what would have been drawn.

use std::collections::BTreeSet;

use pipes_core::{ContainerHandle, IVec3, JointKind, PipeMaterial, Quat, Scene, Viewpoint};

/// One call received by a [`RecordingScene`].
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    ContainerAdded(ContainerHandle),
    ContainerRemoved(ContainerHandle),
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
        orientation: Quat,
    },
    Viewpoint(Viewpoint),
    Present,
}

/// A [`Scene`] that records instead of rendering.
#[derive(Debug, Default)]
pub struct RecordingScene {
    events: Vec<SceneEvent>,
    live: BTreeSet<ContainerHandle>,
    next_container: u64,
    segments: usize,
    joints: usize,
    teapots: usize,
    frames: usize,
    viewpoint: Viewpoint,
    /// Keep only counters, not the event log. Useful for long runs.
    counting_only: bool,
}

impl RecordingScene {
    /// Creates a scene that records every event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene that keeps counters but no event log.
    pub fn counting() -> Self {
        Self {
            counting_only: true,
            ..Self::default()
        }
    }

    /// Returns the recorded events, oldest first.
    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    /// Drops the recorded events. Counters are kept.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Returns the containers that have been added and not removed.
    pub fn live_containers(&self) -> &BTreeSet<ContainerHandle> {
        &self.live
    }

    /// Returns the number of segments emitted so far.
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// Returns the number of joints emitted so far, teapots included.
    pub fn joint_count(&self) -> usize {
        self.joints
    }

    /// Returns the number of teapot joints emitted so far.
    pub fn teapot_count(&self) -> usize {
        self.teapots
    }

    /// Returns how many frames were presented.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Returns the current camera placement.
    pub fn viewpoint(&self) -> Viewpoint {
        self.viewpoint
    }

    fn record(&mut self, event: SceneEvent) {
        if !self.counting_only {
            self.events.push(event);
        }
    }
}

impl Scene for RecordingScene {
    fn add_pipe_container(&mut self) -> ContainerHandle {
        let handle = ContainerHandle(self.next_container);
        self.next_container += 1;
        self.live.insert(handle);
        self.record(SceneEvent::ContainerAdded(handle));
        handle
    }

    fn remove_pipe_container(&mut self, container: ContainerHandle) {
        if !self.live.remove(&container) {
            log::warn!("removing unknown pipe container {container:?}");
        }
        self.record(SceneEvent::ContainerRemoved(container));
    }

    fn emit_segment(
        &mut self,
        container: ContainerHandle,
        from: IVec3,
        to: IVec3,
        material: &PipeMaterial,
    ) {
        self.segments += 1;
        self.record(SceneEvent::Segment {
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
        orientation: Quat,
        _material: &PipeMaterial,
    ) {
        self.joints += 1;
        if kind == JointKind::Teapot {
            self.teapots += 1;
        }
        self.record(SceneEvent::Joint {
            container,
            kind,
            at,
            orientation,
        });
    }

    fn set_viewpoint(&mut self, viewpoint: Viewpoint) {
        self.viewpoint = viewpoint;
        self.record(SceneEvent::Viewpoint(viewpoint));
    }

    fn present(&mut self) {
        self.frames += 1;
        self.record(SceneEvent::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_live_containers() {
        let mut scene = RecordingScene::new();
        let a = scene.add_pipe_container();
        let b = scene.add_pipe_container();
        assert_ne!(a, b);
        scene.remove_pipe_container(a);
        assert_eq!(scene.live_containers().iter().copied().collect::<Vec<_>>(), vec![b]);
        assert_eq!(
            scene.events(),
            &[
                SceneEvent::ContainerAdded(a),
                SceneEvent::ContainerAdded(b),
                SceneEvent::ContainerRemoved(a),
            ]
        );
    }

    #[test]
    fn test_counts_geometry() {
        let mut scene = RecordingScene::new();
        let container = scene.add_pipe_container();
        let material = PipeMaterial::phong(0xff0000);
        scene.emit_segment(container, IVec3::ZERO, IVec3::X, &material);
        scene.emit_joint(container, JointKind::Ball, IVec3::ZERO, Quat::IDENTITY, &material);
        scene.emit_joint(container, JointKind::Teapot, IVec3::X, Quat::IDENTITY, &material);
        scene.present();

        assert_eq!(scene.segment_count(), 1);
        assert_eq!(scene.joint_count(), 2);
        assert_eq!(scene.teapot_count(), 1);
        assert_eq!(scene.frame_count(), 1);
        assert_eq!(scene.events().last(), Some(&SceneEvent::Present));
    }

    #[test]
    fn test_counting_mode_skips_log() {
        let mut scene = RecordingScene::counting();
        let container = scene.add_pipe_container();
        scene.emit_segment(container, IVec3::ZERO, IVec3::Y, &PipeMaterial::phong(1));
        scene.set_viewpoint(Viewpoint::front());
        assert!(scene.events().is_empty());
        assert_eq!(scene.segment_count(), 1);
        assert_eq!(scene.live_containers().len(), 1);
        assert_eq!(scene.viewpoint(), Viewpoint::front());
    }
}
