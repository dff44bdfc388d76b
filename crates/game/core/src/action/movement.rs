use crate::state::{EntityId, Hit, LayerMask, Position, Vec2, NEAR_ZERO, WorldState};

use super::ActionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, 1),
            CardinalDirection::South => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    /// Greedy chase step from `from` toward `to`.
    ///
    /// Moves vertically only when the horizontal offset is below
    /// [`NEAR_ZERO`]; any other offset, ties included, moves horizontally.
    pub fn toward(from: Vec2, to: Vec2) -> Self {
        if (to.x - from.x).abs() < NEAR_ZERO {
            if to.y > from.y {
                CardinalDirection::North
            } else {
                CardinalDirection::South
            }
        } else if to.x > from.x {
            CardinalDirection::East
        } else {
            CardinalDirection::West
        }
    }
}

/// Result of the shared move protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The path was clear and a motion toward `to` began.
    Moved { from: Position, to: Position },
    /// A blocking collider sits on the path.
    Blocked(Hit),
    /// The path was clear but the mover was still animating.
    Busy,
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    pub fn hit(&self) -> Option<&Hit> {
        match self {
            MoveOutcome::Blocked(hit) => Some(hit),
            _ => None,
        }
    }
}

/// Tries to step `mover` one cell in `direction`.
///
/// Casts from the mover's collider cell to the candidate cell on the
/// blocking layer, ignoring the mover itself. A clear path starts the
/// interpolated motion unless one is already running.
pub fn attempt_move(
    world: &mut WorldState,
    mover: EntityId,
    direction: CardinalDirection,
) -> Result<MoveOutcome, ActionError> {
    let entity = world
        .entities
        .mobile(mover)
        .ok_or(ActionError::MoverNotFound(mover))?;
    let start = entity.cell;
    let animating = entity.is_animating();

    let (dx, dy) = direction.delta();
    let end = start.offset(dx, dy);

    if let Some(hit) = world.linecast(start, end, LayerMask::BLOCKING, mover) {
        return Ok(MoveOutcome::Blocked(hit));
    }
    if animating {
        return Ok(MoveOutcome::Busy);
    }

    world
        .entities
        .mobile_mut(mover)
        .ok_or(ActionError::MoverNotFound(mover))?
        .begin_move(end);

    Ok(MoveOutcome::Moved {
        from: start,
        to: end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapDimensions;
    use crate::state::{EntitiesState, MotionState, Obstruction, WallState};

    fn world() -> WorldState {
        let mut entities = EntitiesState::default();
        entities.player.place(Position::new(0, 0));
        entities
            .walls
            .push(WallState::new(EntityId(1), Position::new(1, 0), 3, 0));
        WorldState::new(MapDimensions::new(8, 8), Vec::new(), entities)
    }

    #[test]
    fn clear_path_starts_motion() {
        let mut world = world();
        let outcome = attempt_move(&mut world, EntityId::PLAYER, CardinalDirection::North).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Position::new(0, 0),
                to: Position::new(0, 1)
            }
        );
        let player = &world.entities.player;
        assert_eq!(player.cell, Position::new(0, 1));
        assert_eq!(player.motion.state(), MotionState::Animating);
        assert_eq!(player.position(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn blocked_path_reports_the_hit() {
        let mut world = world();
        let outcome = attempt_move(&mut world, EntityId::PLAYER, CardinalDirection::East).unwrap();
        assert_eq!(
            outcome.hit().map(|h| h.obstruction),
            Some(Obstruction::Wall(EntityId(1)))
        );
        assert_eq!(world.entities.player.cell, Position::new(0, 0));
        assert!(!world.entities.player.is_animating());

        let outcome = attempt_move(&mut world, EntityId::PLAYER, CardinalDirection::West).unwrap();
        assert_eq!(
            outcome.hit().map(|h| h.obstruction),
            Some(Obstruction::OuterWall)
        );
    }

    #[test]
    fn animating_mover_does_not_start_a_second_motion() {
        let mut world = world();
        attempt_move(&mut world, EntityId::PLAYER, CardinalDirection::North).unwrap();
        let outcome = attempt_move(&mut world, EntityId::PLAYER, CardinalDirection::North).unwrap();
        assert_eq!(outcome, MoveOutcome::Busy);
        assert_eq!(world.entities.player.cell, Position::new(0, 1));
    }

    #[test]
    fn unknown_mover_is_an_error() {
        let mut world = world();
        assert_eq!(
            attempt_move(&mut world, EntityId(9), CardinalDirection::North),
            Err(ActionError::MoverNotFound(EntityId(9)))
        );
    }

    #[test]
    fn chase_prefers_horizontal() {
        let at = |x, y| Vec2::new(x, y);
        assert_eq!(
            CardinalDirection::toward(at(3.0, 3.0), at(3.0, 5.0)),
            CardinalDirection::North
        );
        assert_eq!(
            CardinalDirection::toward(at(3.0, 3.0), at(3.0, 1.0)),
            CardinalDirection::South
        );
        assert_eq!(
            CardinalDirection::toward(at(3.0, 3.0), at(1.0, 1.0)),
            CardinalDirection::West
        );
        assert_eq!(
            CardinalDirection::toward(at(3.0, 3.0), at(4.0, 7.0)),
            CardinalDirection::East
        );
        // mid-animation offsets still count as horizontal
        assert_eq!(
            CardinalDirection::toward(at(3.0, 3.0), at(3.25, 0.0)),
            CardinalDirection::East
        );
    }
}
