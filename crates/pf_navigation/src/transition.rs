use std::time::{Duration, Instant};

use crate::section::Section;

/// Phase of the exclusive section transition. Exactly one section is mounted
/// in every phase: the outgoing one while exiting, the incoming one while
/// entering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    Settled { section: Section },
    Exiting { from: Section, to: Section },
    Entering { to: Section },
}

/// Sequential exit-then-enter transition between section views. The outgoing
/// section runs its full exit duration before the incoming one starts
/// entering; the two are never visible at the same time. Time is injected,
/// the machine never reads the clock itself.
pub struct ViewTransition {
    phase: TransitionPhase,
    phase_started: Instant,
    exit_duration: Duration,
    enter_duration: Duration,
}

impl ViewTransition {
    pub fn new(initial: Section, now: Instant) -> Self {
        Self::with_durations(
            initial,
            now,
            Duration::from_millis(500),
            Duration::from_millis(500),
        )
    }

    pub fn with_durations(
        initial: Section,
        now: Instant,
        exit_duration: Duration,
        enter_duration: Duration,
    ) -> Self {
        ViewTransition {
            phase: TransitionPhase::Settled { section: initial },
            phase_started: now,
            exit_duration,
            enter_duration,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// The single section whose content is mounted right now.
    pub fn mounted_section(&self) -> Section {
        match self.phase {
            TransitionPhase::Settled { section } => section,
            TransitionPhase::Exiting { from, .. } => from,
            TransitionPhase::Entering { to } => to,
        }
    }

    /// The section the transition is heading for.
    pub fn target_section(&self) -> Section {
        match self.phase {
            TransitionPhase::Settled { section } => section,
            TransitionPhase::Exiting { to, .. } => to,
            TransitionPhase::Entering { to } => to,
        }
    }

    /// Exiting content is still on screen but no longer interactive.
    pub fn interactive(&self) -> bool {
        !matches!(self.phase, TransitionPhase::Exiting { .. })
    }

    pub fn settled(&self) -> bool {
        matches!(self.phase, TransitionPhase::Settled { .. })
    }

    /// Accept a new target. A request landing mid-flight takes effect
    /// immediately: the exit restarts from whatever is mounted, and the
    /// interrupted animation is not completed.
    pub fn request(&mut self, target: Section, now: Instant) {
        if self.target_section() == target {
            return;
        }

        let from = self.mounted_section();

        if from == target {
            // Heading back to the section already on screen, nothing to exit
            self.phase = TransitionPhase::Entering { to: target };
        } else {
            self.phase = TransitionPhase::Exiting { from, to: target };
        }
        self.phase_started = now;
    }

    /// Drive the machine forward to `now`.
    pub fn advance(&mut self, now: Instant) {
        match self.phase {
            TransitionPhase::Settled { .. } => (),
            TransitionPhase::Exiting { to, .. } => {
                if now.duration_since(self.phase_started) >= self.exit_duration {
                    self.phase = TransitionPhase::Entering { to };
                    self.phase_started = now;
                }
            }
            TransitionPhase::Entering { to } => {
                if now.duration_since(self.phase_started) >= self.enter_duration {
                    self.phase = TransitionPhase::Settled { section: to };
                    self.phase_started = now;
                }
            }
        }
    }

    /// Opacity of the mounted section at `now`, for the fade effect.
    pub fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.phase_started).as_secs_f32();

        match self.phase {
            TransitionPhase::Settled { .. } => 1.0,
            TransitionPhase::Exiting { .. } => {
                (1.0 - elapsed / self.exit_duration.as_secs_f32()).max(0.0)
            }
            TransitionPhase::Entering { .. } => {
                (elapsed / self.enter_duration.as_secs_f32()).min(1.0)
            }
        }
    }
}
