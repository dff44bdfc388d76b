use crate::state::{EntityId, TurnPhase};

/// Errors that can occur during turn operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("controlling turn cannot end during {phase}")]
    NotControllingTurn { phase: TurnPhase },

    #[error("autonomous actors can only register during setup (now {phase})")]
    RegistrationClosed { phase: TurnPhase },

    #[error("scheduler halted after game over")]
    Halted,
}

/// Autonomous actor registered for the current level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    pub id: EntityId,
    /// Wait after this actor's activation before the next one starts.
    pub move_time: f32,
}

/// Where the autonomous phase currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
enum AutonomousProgress {
    InitialDelay { remaining: f32 },
    EmptyRosterDelay { remaining: f32 },
    /// Waiting out the actor activated before `next`.
    Waiting { next: usize, remaining: f32 },
}

/// What the driver must do after [`TurnScheduler::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStep {
    /// Nothing changed this tick.
    Wait,
    /// Setup ended; the controlling turn began.
    SetupFinished,
    /// Run one activation of this autonomous actor.
    Activate(EntityId),
    /// The roster is exhausted; control returned to the controlling actor.
    ControlReturned,
}

/// Alternates the controlling actor with the autonomous roster.
///
/// All waits are "time remaining" counters advanced by the tick driver. A
/// wait armed during a tick starts counting on the next one, and time left
/// over when a wait expires is dropped, so at most one activation happens
/// per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnScheduler {
    phase: TurnPhase,
    roster: Vec<RosterEntry>,
    turn_delay: f32,
    setup_remaining: f32,
    progress: Option<AutonomousProgress>,
    halted: bool,
}

impl TurnScheduler {
    pub fn new(turn_delay: f32) -> Self {
        Self {
            phase: TurnPhase::Setup,
            roster: Vec::new(),
            turn_delay,
            setup_remaining: 0.0,
            progress: None,
            halted: false,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Enters setup for a new level and clears the roster.
    pub fn begin_level(&mut self, level_start_delay: f32) {
        self.phase = TurnPhase::Setup;
        self.roster.clear();
        self.setup_remaining = level_start_delay;
        self.progress = None;
    }

    /// Appends an autonomous actor; registration order is activation order.
    pub fn register(&mut self, id: EntityId, move_time: f32) -> Result<(), TurnError> {
        if self.phase != TurnPhase::Setup {
            return Err(TurnError::RegistrationClosed { phase: self.phase });
        }
        self.roster.push(RosterEntry { id, move_time });
        Ok(())
    }

    /// Hands the turn to the autonomous actors after a controlling attempt.
    pub fn end_controlling_turn(&mut self) -> Result<(), TurnError> {
        if self.halted {
            return Err(TurnError::Halted);
        }
        if self.phase != TurnPhase::Controlling {
            return Err(TurnError::NotControllingTurn { phase: self.phase });
        }
        self.phase = TurnPhase::Autonomous;
        self.progress = Some(AutonomousProgress::InitialDelay {
            remaining: self.turn_delay,
        });
        Ok(())
    }

    /// Stops all further transitions. Terminal.
    pub fn halt(&mut self) {
        self.halted = true;
        self.progress = None;
    }

    pub fn advance(&mut self, dt: f32) -> TurnStep {
        if self.halted {
            return TurnStep::Wait;
        }

        match self.phase {
            TurnPhase::Setup => {
                self.setup_remaining -= dt;
                if self.setup_remaining > 0.0 {
                    return TurnStep::Wait;
                }
                self.phase = TurnPhase::Controlling;
                TurnStep::SetupFinished
            }
            TurnPhase::Controlling => TurnStep::Wait,
            TurnPhase::Autonomous => self.advance_autonomous(dt),
        }
    }

    fn advance_autonomous(&mut self, dt: f32) -> TurnStep {
        let Some(progress) = self.progress else {
            return self.return_control();
        };

        match progress {
            AutonomousProgress::InitialDelay { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.progress = Some(AutonomousProgress::InitialDelay { remaining });
                    TurnStep::Wait
                } else if self.roster.is_empty() {
                    // an empty roster still pays one more delay to keep pacing uniform
                    self.progress = Some(AutonomousProgress::EmptyRosterDelay {
                        remaining: self.turn_delay,
                    });
                    TurnStep::Wait
                } else {
                    self.activate(0)
                }
            }
            AutonomousProgress::EmptyRosterDelay { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.progress = Some(AutonomousProgress::EmptyRosterDelay { remaining });
                    return TurnStep::Wait;
                }
                self.return_control()
            }
            AutonomousProgress::Waiting { next, remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.progress = Some(AutonomousProgress::Waiting { next, remaining });
                    return TurnStep::Wait;
                }
                if next < self.roster.len() {
                    self.activate(next)
                } else {
                    self.return_control()
                }
            }
        }
    }

    fn activate(&mut self, index: usize) -> TurnStep {
        let entry = self.roster[index];
        self.progress = Some(AutonomousProgress::Waiting {
            next: index + 1,
            remaining: entry.move_time,
        });
        TurnStep::Activate(entry.id)
    }

    fn return_control(&mut self) -> TurnStep {
        self.phase = TurnPhase::Controlling;
        self.progress = None;
        TurnStep::ControlReturned
    }
}
