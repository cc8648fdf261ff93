//! A clearing effect that completes after a fixed amount of frame time.

use std::time::Duration;

use pipes_core::{TransitionEffect, TransitionToken};

/// Tracks one clearing transition at a time.
///
/// The host draws whatever fade it likes from [`TimedTransition::progress`];
/// this type only keeps time and hands the token back once.
#[derive(Debug, Default)]
pub struct TimedTransition {
    running: Option<Running>,
}

#[derive(Debug, Clone, Copy)]
struct Running {
    token: TransitionToken,
    duration: Duration,
    elapsed: Duration,
}

impl TimedTransition {
    /// Creates an idle transition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a transition is playing.
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Returns the fraction of the running transition that has played, in
    /// `[0, 1]`. Idle transitions report 0.
    pub fn progress(&self) -> f32 {
        match self.running {
            Some(running) if running.duration.is_zero() => 1.0,
            Some(running) => {
                (running.elapsed.as_secs_f32() / running.duration.as_secs_f32()).min(1.0)
            }
            None => 0.0,
        }
    }

    /// Advances the running transition by `dt`.
    ///
    /// Returns the token exactly once, on the frame the transition ends.
    pub fn advance(&mut self, dt: Duration) -> Option<TransitionToken> {
        let running = self.running.as_mut()?;
        running.elapsed += dt;
        if running.elapsed < running.duration {
            return None;
        }
        let token = running.token;
        self.running = None;
        Some(token)
    }
}

impl TransitionEffect for TimedTransition {
    fn begin(&mut self, duration: Duration, token: TransitionToken) {
        if let Some(previous) = self.running {
            log::warn!("transition {:?} replaced before finishing", previous.token);
        }
        self.running = Some(Running {
            token,
            duration,
            elapsed: Duration::ZERO,
        });
    }
}
