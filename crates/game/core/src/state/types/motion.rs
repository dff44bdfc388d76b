use super::{Position, Vec2};

/// Smallest positive subnormal `f32`, used as the "arrived" threshold.
pub const NEAR_ZERO: f32 = f32::from_bits(1);

/// Animation state of a mobile entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionState {
    #[default]
    Idle,
    Animating,
}

/// Interpolated transition between two grid cells.
///
/// While `Animating`, each tick moves `position` toward `target` by
/// `elapsed / move_time` cells. The transition ends when the remaining
/// squared distance drops to [`NEAR_ZERO`], at which point the position
/// snaps exactly onto the target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    position: Vec2,
    target: Vec2,
    state: MotionState,
    move_time: f32,
}

impl Motion {
    pub fn new(cell: Position, move_time: f32) -> Self {
        let position = cell.to_vec2();
        Self {
            position,
            target: position,
            state: MotionState::Idle,
            move_time,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn move_time(&self) -> f32 {
        self.move_time
    }

    pub fn is_animating(&self) -> bool {
        self.state == MotionState::Animating
    }

    /// Starts gliding toward `cell`. The caller checks that the entity is idle.
    pub fn begin(&mut self, cell: Position) {
        self.target = cell.to_vec2();
        self.state = MotionState::Animating;
    }

    /// Places the entity on `cell` immediately, cancelling any transition.
    pub fn place(&mut self, cell: Position) {
        self.position = cell.to_vec2();
        self.target = self.position;
        self.state = MotionState::Idle;
    }

    /// Advances the transition by `elapsed` seconds.
    ///
    /// Returns true on the tick the entity comes to rest on its target.
    pub fn advance(&mut self, elapsed: f32) -> bool {
        if self.state == MotionState::Idle {
            return false;
        }

        if self.move_time > 0.0 {
            let inverse_move_time = 1.0 / self.move_time;
            let step = inverse_move_time * elapsed.max(0.0);
            self.position = self.position.move_towards(self.target, step);
        } else {
            self.position = self.target;
        }

        if (self.position - self.target).sqr_magnitude() > NEAR_ZERO {
            return false;
        }

        self.position = self.target;
        self.state = MotionState::Idle;
        true
    }
}
