//! The set of live pipes: per-frame advancement and cohort spawning.

use rand::Rng;

use crate::joint::{chance, JointChances, JointCycle, ResolvedJointStyle};
use crate::material::{PipeMaterial, CANDY_CANE_TEXTURE};
use crate::options::Options;
use crate::pipe::{Pipe, PipeId};
use crate::scene::Scene;
use crate::world::World;

/// Probability that a cohort is a candy cane cohort.
pub const CANDY_CANE_CHANCE: f64 = 1.0 / 20.0;
/// Teapot probability for candy cane cohorts.
pub const CANDY_CANE_TEAPOT_CHANCE: f64 = 1.0 / 20.0;
/// Probability that a multiple-pipe cohort gets a third pipe.
pub const THIRD_PIPE_CHANCE: f64 = 1.0 / 10.0;

/// Draws the size of a new cohort.
pub fn cohort_size(multiple: bool, rng: &mut impl Rng) -> usize {
    if !multiple {
        1
    } else if chance(rng, THIRD_PIPE_CHANCE) {
        3
    } else {
        2
    }
}

/// What one spawn event produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Cohort {
    /// Joint style the cohort was resolved to.
    pub style: ResolvedJointStyle,
    /// Joint probabilities shared by the cohort.
    pub chances: JointChances,
    /// Texture shared by the cohort, if any.
    pub texture_path: Option<String>,
    /// Pipes actually placed.
    pub pipes: Vec<PipeId>,
}

/// Counters for one frame tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Pipes that advanced one cell.
    pub grown: usize,
    /// Pipes whose step was rejected.
    pub rejected: usize,
    /// Joints placed at turns.
    pub joints: usize,
    /// The cohort spawned at the end of the tick, if the population was empty.
    pub spawned: Option<Cohort>,
}

/// Owns the live pipes and decides when and how new ones appear.
#[derive(Debug, Default)]
pub struct PipePopulation {
    pipes: Vec<Pipe>,
    next_id: u32,
    cycle: JointCycle,
}

impl PipePopulation {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the live pipes in spawn order.
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    /// Returns a pipe by id.
    pub fn get(&self, id: PipeId) -> Option<&Pipe> {
        self.pipes.iter().find(|pipe| pipe.id() == id)
    }

    /// Returns the number of live pipes.
    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    /// Returns true if no pipe is live.
    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// Adds an already placed pipe.
    pub fn insert(&mut self, pipe: Pipe) {
        self.next_id = self.next_id.max(pipe.id().0 + 1);
        self.pipes.push(pipe);
    }

    /// Advances the population by one frame.
    ///
    /// Every live pipe gets exactly one full step, one after another, so a
    /// cell claimed by one pipe is already taken when the next pipe looks.
    /// If no pipe is live afterwards a new cohort is spawned.
    pub fn tick(
        &mut self,
        options: &Options,
        world: &mut World,
        scene: &mut dyn Scene,
        rng: &mut impl Rng,
    ) -> TickReport {
        let mut report = TickReport::default();
        for pipe in &mut self.pipes {
            let outcome = pipe.step(world, scene, rng);
            if outcome.is_grown() {
                report.grown += 1;
            } else {
                report.rejected += 1;
            }
            if outcome.joint().is_some() {
                report.joints += 1;
            }
        }
        if self.pipes.is_empty() {
            report.spawned = Some(self.spawn_cohort(options, world, scene, rng));
        }
        report
    }

    /// Spawns a new cohort according to `options`.
    ///
    /// Resolves the joint style (advancing the cycle only for
    /// [`JointStyle::Cycle`](crate::joint::JointStyle::Cycle)), rolls for a
    /// candy cane cohort, then places each pipe at a random free cell.
    pub fn spawn_cohort(
        &mut self,
        options: &Options,
        world: &mut World,
        scene: &mut dyn Scene,
        rng: &mut impl Rng,
    ) -> Cohort {
        let style = self.cycle.resolve(options.joints);
        let mut chances = JointChances::for_style(style);
        let mut texture_path = options.texture_path.clone();
        if chance(rng, CANDY_CANE_CHANCE) {
            chances = chances.with_teapot(CANDY_CANE_TEAPOT_CHANCE);
            texture_path = Some(CANDY_CANE_TEXTURE.to_string());
        }

        let size = cohort_size(options.multiple, rng);
        let mut placed = Vec::with_capacity(size);
        for _ in 0..size {
            let material = match &texture_path {
                Some(path) => PipeMaterial::Textured(world.textures_mut().get_or_insert(path)),
                None => PipeMaterial::random_phong(rng),
            };
            let id = PipeId(self.next_id);
            self.next_id += 1;
            if let Some(pipe) = Pipe::spawn(id, chances, material, world, scene, rng) {
                placed.push(id);
                self.pipes.push(pipe);
            }
        }

        log::info!(
            "spawned {} pipe(s) with {:?} joints{}",
            placed.len(),
            style,
            texture_path
                .as_deref()
                .map(|path| format!(", texture '{path}'"))
                .unwrap_or_default()
        );

        Cohort {
            style,
            chances,
            texture_path,
            pipes: placed,
        }
    }

    /// Removes every pipe from the scene and forgets them.
    pub fn clear(&mut self, scene: &mut dyn Scene) {
        for pipe in self.pipes.drain(..) {
            pipe.remove_from(scene);
        }
    }
}
