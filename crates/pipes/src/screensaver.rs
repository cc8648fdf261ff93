//! The frame-driven screensaver.
//!
//! [`Screensaver`] wires the core together with the virtual-clock
//! [`TimerQueue`] and the [`TimedTransition`]. The host only has to call
//! [`Screensaver::frame`] once per display frame with the elapsed time.

use std::time::Duration;

use pipes_core::{
    ClearInterval, ClearOutcome, ClearSpeed, JointStyle, Options, PipePopulation, Result, Scene,
    SceneLifecycle, TickReport, Viewpoint, World,
};
use rand::Rng;

use crate::timer::TimerQueue;
use crate::transition::TimedTransition;

/// A running pipes session.
pub struct Screensaver<S: Scene, R: Rng> {
    options: Options,
    world: World,
    population: PipePopulation,
    lifecycle: SceneLifecycle,
    timers: TimerQueue,
    transition: TimedTransition,
    scene: S,
    rng: R,
}

impl<S: Scene, R: Rng> Screensaver<S, R> {
    /// Starts a session drawing into `scene`.
    ///
    /// Validates `options`, picks the first viewpoint and books the first
    /// clear timer. No pipe exists until the first frame.
    pub fn new(options: Options, mut scene: S, mut rng: R) -> Result<Self> {
        options.validate()?;
        let world = World::new(options.bounds);
        let mut lifecycle = SceneLifecycle::new(options.interval);
        let mut timers = TimerQueue::new();

        scene.set_viewpoint(Viewpoint::random(&mut rng));
        lifecycle.start(&mut timers, &mut rng);
        log::info!(
            "pipes started: {} cells, joints {}, clear every {}-{}s",
            options.bounds.cell_count(),
            options.joints,
            options.interval.min(),
            options.interval.max()
        );

        Ok(Self {
            options,
            world,
            population: PipePopulation::new(),
            lifecycle,
            timers,
            transition: TimedTransition::new(),
            scene,
            rng,
        })
    }

    /// Runs one display frame that took `dt`.
    ///
    /// Fires due clear timers, advances a running transition (resetting the
    /// scene when it ends), then grows the pipes and presents the scene.
    /// Growth and presenting are skipped while a clear is in progress, in
    /// which case `None` is returned.
    pub fn frame(&mut self, dt: Duration) -> Option<TickReport> {
        // A transition started by a timer this frame starts counting next frame.
        let was_clearing = self.transition.is_running();

        for handle in self.timers.advance(dt) {
            self.lifecycle
                .on_timer(handle, &mut self.timers, &mut self.transition, &mut self.rng);
        }

        if was_clearing {
            if let Some(token) = self.transition.advance(dt) {
                self.lifecycle.complete_transition(
                    token,
                    &mut self.population,
                    &mut self.world,
                    &mut self.scene,
                    &mut self.rng,
                );
            }
        }

        if self.lifecycle.is_clearing() {
            return None;
        }
        let report = self.population.tick(
            &self.options,
            &mut self.world,
            &mut self.scene,
            &mut self.rng,
        );
        self.scene.present();
        Some(report)
    }

    /// Starts a clear right away, re-booking the automatic timer.
    ///
    /// Does nothing but re-book the timer if a clear is already running.
    pub fn request_clear(&mut self, fast: bool) -> ClearOutcome {
        let speed = if fast {
            ClearSpeed::Fast
        } else {
            ClearSpeed::Normal
        };
        self.lifecycle.request_clear(
            speed,
            &mut self.timers,
            &mut self.transition,
            &mut self.rng,
        )
    }

    /// Moves the camera to a fresh random viewpoint.
    pub fn look(&mut self) {
        let viewpoint = Viewpoint::random(&mut self.rng);
        self.scene.set_viewpoint(viewpoint);
    }

    /// Changes the joint style used from the next cohort on.
    pub fn set_joint_style(&mut self, style: JointStyle) {
        log::debug!("joint style set to {style}");
        self.options.joints = style;
    }

    /// Changes the range between automatic clears, starting with the next
    /// booking.
    pub fn set_interval(&mut self, interval: ClearInterval) {
        self.options.interval = interval;
        self.lifecycle.set_interval(interval);
    }

    /// Returns the session options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the grid and its occupancy.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Returns the live pipes.
    pub fn population(&self) -> &PipePopulation {
        &self.population
    }

    /// Returns the clear cycle state.
    pub fn lifecycle(&self) -> &SceneLifecycle {
        &self.lifecycle
    }

    /// Returns the pending clear timers.
    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Returns the clearing transition.
    pub fn transition(&self) -> &TimedTransition {
        &self.transition
    }

    /// Returns the scene.
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Returns the scene for writing.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Ends the session and hands the scene back.
    pub fn into_scene(self) -> S {
        self.scene
    }
}
