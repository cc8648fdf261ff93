//! A single pipe and the random walk that grows it.
//!
//! A pipe starts as one claimed cell and, on every successful step, claims
//! a neighboring cell and emits a segment to it. Half of the steps keep the
//! previous heading when there is one; the rest pick any of the six axis
//! directions. Steps that would leave the grid or enter a claimed cell are
//! dropped without touching any state, so a pipe boxed in on all sides
//! simply stops growing.

use glam::{IVec3, Quat};
use rand::Rng;

use crate::grid::Direction;
use crate::joint::{JointChances, JointKind};
use crate::material::PipeMaterial;
use crate::scene::{ContainerHandle, Scene};
use crate::world::World;

/// Random start cells tried before a spawn gives up.
pub const SPAWN_ATTEMPTS: usize = 64;

/// Identifies a pipe within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PipeId(pub u32);

impl std::fmt::Display for PipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pipe#{}", self.0)
    }
}

/// Growth state of a pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeState {
    /// Only the seed cell is claimed.
    Seeded,
    /// At least one segment has been emitted.
    Growing,
}

/// Result of one attempted growth step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The pipe moved from `from` to `to`, placing `joint` at `from` if it
    /// turned.
    Grown {
        from: IVec3,
        to: IVec3,
        joint: Option<JointKind>,
    },
    /// Moving `direction` from `from` would leave the grid.
    OutOfBounds { from: IVec3, direction: Direction },
    /// The candidate cell already belongs to `owner`.
    Occupied { cell: IVec3, owner: PipeId },
}

impl StepOutcome {
    /// Returns whether the pipe advanced.
    pub fn is_grown(&self) -> bool {
        matches!(self, StepOutcome::Grown { .. })
    }

    /// Returns the joint placed by this step, if any.
    pub fn joint(&self) -> Option<JointKind> {
        match self {
            StepOutcome::Grown { joint, .. } => *joint,
            _ => None,
        }
    }
}

/// One pipe: its walk history, look and joint probabilities.
#[derive(Debug, Clone)]
pub struct Pipe {
    id: PipeId,
    container: ContainerHandle,
    /// Visited cells in growth order; never empty, last is the head.
    positions: Vec<IVec3>,
    material: PipeMaterial,
    chances: JointChances,
}

impl Pipe {
    /// Spawns a pipe at a random free cell.
    ///
    /// Returns `None` when no free cell turned up within
    /// [`SPAWN_ATTEMPTS`] draws, which only happens on a crowded grid.
    pub fn spawn(
        id: PipeId,
        chances: JointChances,
        material: PipeMaterial,
        world: &mut World,
        scene: &mut dyn Scene,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        let start = (0..SPAWN_ATTEMPTS)
            .map(|_| world.bounds().random_cell(rng))
            .find(|cell| world.is_free(*cell));
        let Some(start) = start else {
            log::warn!("{id}: no free start cell after {SPAWN_ATTEMPTS} attempts");
            return None;
        };
        Self::seed(id, start, chances, material, world, scene)
    }

    /// Places a pipe at `start`.
    ///
    /// Claims the cell, opens a scene container and marks the seed with a
    /// ball joint. Returns `None` if `start` is outside the grid or taken.
    pub fn seed(
        id: PipeId,
        start: IVec3,
        chances: JointChances,
        material: PipeMaterial,
        world: &mut World,
        scene: &mut dyn Scene,
    ) -> Option<Self> {
        if !world.try_claim(start, id) {
            log::debug!("{id}: seed cell {start} unavailable");
            return None;
        }
        let container = scene.add_pipe_container();
        scene.emit_joint(container, JointKind::Ball, start, Quat::IDENTITY, &material);
        log::debug!("{id}: seeded at {start}");
        Some(Self {
            id,
            container,
            positions: vec![start],
            material,
            chances,
        })
    }

    /// Returns the pipe id.
    pub fn id(&self) -> PipeId {
        self.id
    }

    /// Returns the scene container holding this pipe's geometry.
    pub fn container(&self) -> ContainerHandle {
        self.container
    }

    /// Returns every visited cell in growth order.
    pub fn positions(&self) -> &[IVec3] {
        &self.positions
    }

    /// Returns the head of the pipe.
    pub fn current_position(&self) -> IVec3 {
        self.positions[self.positions.len() - 1]
    }

    /// Returns the pipe's material.
    pub fn material(&self) -> &PipeMaterial {
        &self.material
    }

    /// Returns the pipe's joint probabilities.
    pub fn chances(&self) -> JointChances {
        self.chances
    }

    /// Returns the growth state.
    pub fn state(&self) -> PipeState {
        if self.positions.len() > 1 {
            PipeState::Growing
        } else {
            PipeState::Seeded
        }
    }

    /// Returns the heading of the last segment, if one exists.
    pub fn last_direction(&self) -> Option<Direction> {
        match self.positions.as_slice() {
            [.., previous, current] => Direction::from_delta(*current - *previous),
            _ => None,
        }
    }

    /// Picks the heading for the next step.
    ///
    /// Keeps the last heading with probability 1/2, otherwise draws a random
    /// axis and sign. A seeded pipe always draws.
    pub fn choose_direction(&self, rng: &mut impl Rng) -> Direction {
        match self.last_direction() {
            Some(last) if rng.gen_bool(0.5) => last,
            _ => Direction::random(rng),
        }
    }

    /// Attempts one growth step in a randomly chosen direction.
    pub fn step(
        &mut self,
        world: &mut World,
        scene: &mut dyn Scene,
        rng: &mut impl Rng,
    ) -> StepOutcome {
        let direction = self.choose_direction(rng);
        self.grow(direction, world, scene, rng)
    }

    /// Attempts to extend the pipe one cell toward `direction`.
    ///
    /// On rejection neither the pipe nor the world changes and nothing is
    /// emitted. On success the new cell is claimed, a joint is emitted at
    /// the old head if the heading changed, and a segment joins the old head
    /// to the new one.
    pub fn grow(
        &mut self,
        direction: Direction,
        world: &mut World,
        scene: &mut dyn Scene,
        rng: &mut impl Rng,
    ) -> StepOutcome {
        let last_direction = self.last_direction();
        let from = self.current_position();
        let to = match direction.offset(from) {
            Some(to) if world.bounds().contains(to) => to,
            _ => return StepOutcome::OutOfBounds { from, direction },
        };
        if let Some(owner) = world.occupancy().get(to) {
            return StepOutcome::Occupied { cell: to, owner };
        }
        world.occupancy_mut().set(to, self.id);

        let joint = match last_direction {
            Some(last) if last != direction => {
                let kind = self.chances.draw(rng);
                let orientation = kind.orientation(rng);
                scene.emit_joint(self.container, kind, from, orientation, &self.material);
                Some(kind)
            }
            _ => None,
        };

        scene.emit_segment(self.container, from, to, &self.material);
        self.positions.push(to);

        StepOutcome::Grown { from, to, joint }
    }

    /// Takes the pipe's geometry out of the scene.
    pub fn remove_from(self, scene: &mut dyn Scene) {
        log::debug!("{}: removed after {} cells", self.id, self.positions.len());
        scene.remove_pipe_container(self.container);
    }
}
