use crate::event::format_countdown;

/// Result of one timer tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerTick {
    Running,
    /// The `mm:ss` readout changed.
    Changed(String),
    Expired,
}

/// Optional per-level survival countdown.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurvivalTimer {
    remaining: f32,
    display: String,
}

impl SurvivalTimer {
    pub fn new(limit: f32) -> Self {
        Self {
            remaining: limit,
            display: format_countdown(limit),
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn tick(&mut self, dt: f32) -> TimerTick {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            return TimerTick::Expired;
        }

        let display = format_countdown(self.remaining);
        if display == self.display {
            return TimerTick::Running;
        }
        self.display.clone_from(&display);
        TimerTick::Changed(display)
    }
}
