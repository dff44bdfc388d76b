//! Controlling-actor behaviour.

use crate::event::{AnimationTrigger, FoodChange, GameEvent, SoundCue, SoundEffect};
use crate::state::{EntityId, Obstruction, PickupKind};

use super::interact::{Interaction, InteractionKind, damage_wall, route};
use super::movement::{CardinalDirection, MoveOutcome, attempt_move};
use super::{ActionContext, ActionError};

/// Result of one controlling move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerAttempt {
    pub outcome: MoveOutcome,
    /// Food total after the attempt.
    pub food: i32,
}

impl PlayerAttempt {
    pub fn starved(&self) -> bool {
        self.food <= 0
    }
}

/// Spends one food and runs the move protocol, chopping any wall in the way.
///
/// The food is spent before the path is tested, so blocked attempts cost the
/// same as successful ones.
pub fn attempt(
    ctx: &mut ActionContext<'_>,
    direction: CardinalDirection,
) -> Result<PlayerAttempt, ActionError> {
    *ctx.food -= 1;
    let total = *ctx.food;
    ctx.emit(GameEvent::FoodChanged {
        total,
        change: FoodChange::Step,
    });

    let outcome = attempt_move(ctx.world, EntityId::PLAYER, direction)?;
    match outcome {
        MoveOutcome::Moved { from, to } => {
            let pitch = ctx.config.audio;
            ctx.emit(GameEvent::MotionStarted {
                entity: EntityId::PLAYER,
                from,
                to,
            });
            ctx.emit(GameEvent::Sound(SoundCue::randomized(SoundEffect::Move, pitch)));
        }
        MoveOutcome::Blocked(hit) => {
            if let Some(Interaction::DamageableWall(wall)) = route(InteractionKind::Wall, &hit) {
                let loss = ctx.config.player.wall_damage;
                damage_wall(ctx, wall, loss)?;
                ctx.emit(GameEvent::Animation {
                    entity: EntityId::PLAYER,
                    trigger: AnimationTrigger::PlayerChop,
                });
            }
        }
        MoveOutcome::Busy => {}
    }

    Ok(PlayerAttempt {
        outcome,
        food: *ctx.food,
    })
}

/// Resolves the triggers under the player once it comes to rest.
///
/// Pickups are eaten and deactivated. Returns true when the cell holds the
/// exit, in which case the player is disabled until the next level.
pub fn enter_cell(ctx: &mut ActionContext<'_>) -> bool {
    let cell = ctx.world.entities.player.cell;
    let mut reached_exit = false;

    for trigger in ctx.world.triggers_at(cell) {
        match trigger {
            Obstruction::Pickup(id, kind) => consume_pickup(ctx, id, kind),
            Obstruction::Exit(_) => {
                ctx.world.entities.player.enabled = false;
                reached_exit = true;
            }
            _ => {}
        }
    }

    reached_exit
}

fn consume_pickup(ctx: &mut ActionContext<'_>, id: EntityId, kind: PickupKind) {
    let Some(pickup) = ctx
        .world
        .entities
        .pickups
        .iter_mut()
        .find(|pickup| pickup.id == id && pickup.active)
    else {
        return;
    };
    pickup.active = false;
    let position = pickup.position;

    let (points, effect) = match kind {
        PickupKind::Food => (ctx.config.player.points_per_food, SoundEffect::Eat),
        PickupKind::Soda => (ctx.config.player.points_per_soda, SoundEffect::Drink),
    };
    *ctx.food += points;
    let total = *ctx.food;
    let pitch = ctx.config.audio;

    ctx.emit(GameEvent::FoodChanged {
        total,
        change: FoodChange::Gained(points),
    });
    ctx.emit(GameEvent::Sound(SoundCue::randomized(effect, pitch)));
    ctx.emit(GameEvent::PickupConsumed {
        pickup: id,
        kind,
        position,
    });
}
