//! The periodic clear-and-reset cycle.
//!
//! ```text
//! Active --(timer fired | clear requested)--> Clearing --(effect done)--> Active
//! ```
//!
//! A recurring timer, re-booked every time it fires or a clear is
//! requested, starts a normal-speed transition. Hosts may also request a
//! clear directly, optionally fast. While a transition is in flight further
//! requests only re-book the timer. When the effect reports back, all pipes
//! are removed, the grid is emptied and the camera moves.

use std::time::Duration;

use rand::Rng;

use crate::options::ClearInterval;
use crate::population::PipePopulation;
use crate::scene::{Scene, Scheduler, TaskHandle, TransitionEffect, TransitionToken};
use crate::viewpoint::Viewpoint;
use crate::world::World;

/// Length of a normal clearing transition.
pub const NORMAL_CLEAR_DURATION: Duration = Duration::from_secs(2);
/// Length of a fast clearing transition.
pub const FAST_CLEAR_DURATION: Duration = Duration::from_millis(200);

/// How quickly a clear should play out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearSpeed {
    #[default]
    Normal,
    Fast,
}

impl ClearSpeed {
    /// Returns the transition length for this speed.
    pub fn duration(self) -> Duration {
        match self {
            ClearSpeed::Normal => NORMAL_CLEAR_DURATION,
            ClearSpeed::Fast => FAST_CLEAR_DURATION,
        }
    }
}

/// Where the lifecycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Pipes grow and the scene is drawn.
    Active,
    /// A transition is playing; growth and drawing are paused.
    Clearing {
        token: TransitionToken,
        speed: ClearSpeed,
    },
}

/// What a clear request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// A transition was started.
    Started(TransitionToken),
    /// A transition was already in flight; only the timer was re-booked.
    AlreadyClearing,
    /// The timer handle was not the pending one and was ignored.
    StaleTimer,
}

/// Drives the Active/Clearing cycle and owns the pending clear timer.
#[derive(Debug, Clone)]
pub struct SceneLifecycle {
    phase: LifecyclePhase,
    interval: ClearInterval,
    pending_timer: Option<TaskHandle>,
    next_token: u64,
    resets: u64,
}

impl SceneLifecycle {
    /// Creates an active lifecycle that has not booked a timer yet.
    pub fn new(interval: ClearInterval) -> Self {
        Self {
            phase: LifecyclePhase::Active,
            interval,
            pending_timer: None,
            next_token: 0,
            resets: 0,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Returns whether a transition is in flight.
    pub fn is_clearing(&self) -> bool {
        matches!(self.phase, LifecyclePhase::Clearing { .. })
    }

    /// Returns the pending clear timer, if one is booked.
    pub fn pending_timer(&self) -> Option<TaskHandle> {
        self.pending_timer
    }

    /// Returns how many resets have completed.
    pub fn reset_count(&self) -> u64 {
        self.resets
    }

    /// Returns the timer range.
    pub fn interval(&self) -> ClearInterval {
        self.interval
    }

    /// Changes the timer range. Applies from the next booking.
    pub fn set_interval(&mut self, interval: ClearInterval) {
        self.interval = interval;
    }

    /// Books the first clear timer.
    pub fn start(&mut self, scheduler: &mut dyn Scheduler, rng: &mut impl Rng) {
        self.reschedule(scheduler, rng);
    }

    /// Cancels the pending timer, if any, and books a new one.
    fn reschedule(&mut self, scheduler: &mut dyn Scheduler, rng: &mut impl Rng) {
        if let Some(previous) = self.pending_timer.take() {
            scheduler.cancel(previous);
        }
        let delay = self.interval.sample(rng);
        log::debug!("next clear in {:.1}s", delay.as_secs_f64());
        self.pending_timer = Some(scheduler.schedule(delay));
    }

    /// Handles a fired timer.
    ///
    /// Only the pending timer counts; anything else is stale and ignored.
    /// The pending timer re-books itself and starts a normal-speed clear
    /// unless one is already in flight.
    pub fn on_timer(
        &mut self,
        handle: TaskHandle,
        scheduler: &mut dyn Scheduler,
        effect: &mut dyn TransitionEffect,
        rng: &mut impl Rng,
    ) -> ClearOutcome {
        if self.pending_timer != Some(handle) {
            log::debug!("ignoring stale clear timer {handle:?}");
            return ClearOutcome::StaleTimer;
        }
        self.pending_timer = None;
        self.request_clear(ClearSpeed::Normal, scheduler, effect, rng)
    }

    /// Starts a clearing transition unless one is already in flight.
    ///
    /// Either way the clear timer is re-booked, so the next automatic clear
    /// is a full interval away.
    pub fn request_clear(
        &mut self,
        speed: ClearSpeed,
        scheduler: &mut dyn Scheduler,
        effect: &mut dyn TransitionEffect,
        rng: &mut impl Rng,
    ) -> ClearOutcome {
        self.reschedule(scheduler, rng);
        if self.is_clearing() {
            return ClearOutcome::AlreadyClearing;
        }
        let token = TransitionToken(self.next_token);
        self.next_token += 1;
        self.phase = LifecyclePhase::Clearing { token, speed };
        log::info!("clearing scene ({speed:?}, {:?})", speed.duration());
        effect.begin(speed.duration(), token);
        ClearOutcome::Started(token)
    }

    /// Finishes the transition identified by `token`.
    ///
    /// Removes every pipe, empties the grid, picks a new viewpoint and
    /// returns to [`LifecyclePhase::Active`]. Tokens that do not match the
    /// transition in flight (including a repeated token) are ignored and
    /// `false` is returned.
    pub fn complete_transition(
        &mut self,
        token: TransitionToken,
        population: &mut PipePopulation,
        world: &mut World,
        scene: &mut dyn Scene,
        rng: &mut impl Rng,
    ) -> bool {
        match self.phase {
            LifecyclePhase::Clearing { token: current, .. } if current == token => {}
            _ => {
                log::warn!("ignoring completion of unknown transition {token:?}");
                return false;
            }
        }
        let removed = population.len();
        population.clear(scene);
        world.reset();
        scene.set_viewpoint(Viewpoint::random(rng));
        self.phase = LifecyclePhase::Active;
        self.resets += 1;
        log::info!("scene reset #{} ({removed} pipes removed)", self.resets);
        true
    }
}

impl Default for SceneLifecycle {
    fn default() -> Self {
        Self::new(ClearInterval::default())
    }
}
