//! Obstruction dispatch for blocked moves.
//!
//! A mover states which capability it expects on the far side of a blocked
//! move. The player expects a wall it can chop and an enemy expects the
//! player. [`route`] returns the capability only when the obstruction
//! actually exposes it; every other bump is a silent no-op.

use crate::event::{AnimationTrigger, FoodChange, GameEvent, SoundCue, SoundEffect};
use crate::state::{EntityId, Hit, Obstruction};

use super::{ActionContext, ActionError};

/// Capability a mover looks for on a blocked move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum InteractionKind {
    Wall,
    ControllingActor,
}

/// Capability exposed by an obstruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    DamageableWall(EntityId),
    DamageablePlayer(EntityId),
}

impl Interaction {
    pub fn kind(self) -> InteractionKind {
        match self {
            Interaction::DamageableWall(_) => InteractionKind::Wall,
            Interaction::DamageablePlayer(_) => InteractionKind::ControllingActor,
        }
    }
}

impl Obstruction {
    pub fn interaction(self) -> Option<Interaction> {
        match self {
            Obstruction::Wall(id) => Some(Interaction::DamageableWall(id)),
            Obstruction::Player(id) => Some(Interaction::DamageablePlayer(id)),
            _ => None,
        }
    }
}

pub fn route(expected: InteractionKind, hit: &Hit) -> Option<Interaction> {
    hit.obstruction
        .interaction()
        .filter(|interaction| interaction.kind() == expected)
}

/// Outcome of a chop against a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallDamage {
    pub wall: EntityId,
    pub remaining: i32,
    pub destroyed: bool,
}

/// Applies `loss` hit points to `wall`.
///
/// The renderer swaps to the damaged sprite on the first hit; a wall at zero
/// hit points leaves the blocking layer.
pub fn damage_wall(
    ctx: &mut ActionContext<'_>,
    wall: EntityId,
    loss: i32,
) -> Result<WallDamage, ActionError> {
    let state = ctx
        .world
        .entities
        .wall_mut(wall)
        .ok_or(ActionError::WallNotFound(wall))?;
    let destroyed = state.damage(loss);
    let (position, remaining) = (state.position, state.hit_points);

    let pitch = ctx.config.audio;
    ctx.emit(GameEvent::Sound(SoundCue::randomized(SoundEffect::Chop, pitch)));
    ctx.emit(GameEvent::WallDamaged {
        wall,
        position,
        hit_points: remaining,
    });
    if destroyed {
        ctx.emit(GameEvent::WallDestroyed { wall, position });
    }

    Ok(WallDamage {
        wall,
        remaining,
        destroyed,
    })
}

/// Removes `loss` food from the player. Returns the new total.
pub fn damage_player(ctx: &mut ActionContext<'_>, player: EntityId, loss: i32) -> i32 {
    ctx.emit(GameEvent::Animation {
        entity: player,
        trigger: AnimationTrigger::PlayerHit,
    });
    *ctx.food -= loss;
    let total = *ctx.food;
    ctx.emit(GameEvent::FoodChanged {
        total,
        change: FoodChange::Lost(loss),
    });
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::MapDimensions;
    use crate::state::{EntitiesState, Position, WallState, WorldState};

    fn hit(obstruction: Obstruction) -> Hit {
        Hit {
            position: Position::new(1, 1),
            obstruction,
        }
    }

    #[test]
    fn routes_only_the_expected_capability() {
        let wall = hit(Obstruction::Wall(EntityId(4)));
        let player = hit(Obstruction::Player(EntityId::PLAYER));
        let enemy = hit(Obstruction::Enemy(EntityId(7)));

        assert_eq!(
            route(InteractionKind::Wall, &wall),
            Some(Interaction::DamageableWall(EntityId(4)))
        );
        assert_eq!(route(InteractionKind::ControllingActor, &wall), None);
        assert_eq!(
            route(InteractionKind::ControllingActor, &player),
            Some(Interaction::DamageablePlayer(EntityId::PLAYER))
        );
        assert_eq!(route(InteractionKind::Wall, &player), None);
        assert_eq!(route(InteractionKind::Wall, &enemy), None);
        assert_eq!(
            route(InteractionKind::Wall, &hit(Obstruction::OuterWall)),
            None
        );
    }

    #[test]
    fn chopping_wears_a_wall_down() {
        let config = GameConfig::default();
        let mut entities = EntitiesState::default();
        entities
            .walls
            .push(WallState::new(EntityId(2), Position::new(1, 0), 2, 0));
        let mut world = WorldState::new(MapDimensions::new(8, 8), Vec::new(), entities);
        let mut food = 10;
        let mut events = Vec::new();
        let mut ctx = ActionContext::new(&mut world, &config, &mut food, &mut events);

        let first = damage_wall(&mut ctx, EntityId(2), 1).unwrap();
        assert!(!first.destroyed);
        let second = damage_wall(&mut ctx, EntityId(2), 1).unwrap();
        assert!(second.destroyed);
        assert_eq!(
            damage_wall(&mut ctx, EntityId(3), 1),
            Err(ActionError::WallNotFound(EntityId(3)))
        );

        assert!(events.contains(&GameEvent::WallDestroyed {
            wall: EntityId(2),
            position: Position::new(1, 0)
        }));
        assert!(!world.entities.walls[0].active);
    }
}
