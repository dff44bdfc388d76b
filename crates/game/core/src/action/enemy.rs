//! Autonomous-actor behaviour.

use crate::event::{AnimationTrigger, GameEvent, SoundCue, SoundEffect};
use crate::state::EntityId;

use super::interact::{Interaction, InteractionKind, damage_player, route};
use super::movement::{CardinalDirection, MoveOutcome, attempt_move};
use super::{ActionContext, ActionError};

/// What an enemy did with one activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyActivation {
    /// The activation was spent on the forced skip.
    Skipped,
    Acted {
        outcome: MoveOutcome,
        /// Player food after the attack, when the enemy bumped into the player.
        attacked: Option<i32>,
    },
}

impl EnemyActivation {
    pub fn starved_player(&self) -> bool {
        matches!(self, EnemyActivation::Acted { attacked: Some(food), .. } if *food <= 0)
    }
}

/// Runs one activation of `enemy`: alternately a chase step and a skip.
pub fn activate(
    ctx: &mut ActionContext<'_>,
    enemy: EntityId,
) -> Result<EnemyActivation, ActionError> {
    let target = ctx.world.entities.player.position();
    let mobile = ctx
        .world
        .entities
        .mobile_mut(enemy)
        .ok_or(ActionError::MoverNotFound(enemy))?;
    let position = mobile.position();
    let state = mobile.enemy_mut().ok_or(ActionError::NotAnEnemy(enemy))?;

    if state.skip_move {
        state.skip_move = false;
        return Ok(EnemyActivation::Skipped);
    }
    let damage = state.damage;

    let direction = CardinalDirection::toward(position, target);
    let outcome = attempt_move(ctx.world, enemy, direction)?;
    let mut attacked = None;

    match outcome {
        MoveOutcome::Moved { from, to } => ctx.emit(GameEvent::MotionStarted {
            entity: enemy,
            from,
            to,
        }),
        MoveOutcome::Blocked(hit) => {
            if let Some(Interaction::DamageablePlayer(player)) =
                route(InteractionKind::ControllingActor, &hit)
            {
                attacked = Some(damage_player(ctx, player, damage));
                let pitch = ctx.config.audio;
                ctx.emit(GameEvent::Animation {
                    entity: enemy,
                    trigger: AnimationTrigger::EnemyAttack,
                });
                ctx.emit(GameEvent::Sound(SoundCue::randomized(
                    SoundEffect::EnemyAttack,
                    pitch,
                )));
            }
        }
        MoveOutcome::Busy => {}
    }

    if let Some(state) = ctx
        .world
        .entities
        .mobile_mut(enemy)
        .and_then(|mobile| mobile.enemy_mut())
    {
        state.skip_move = true;
    }

    Ok(EnemyActivation::Acted { outcome, attacked })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::MapDimensions;
    use crate::event::FoodChange;
    use crate::state::{EnemyState, EntitiesState, MobileEntity, Position, WorldState};

    fn world(enemy_at: Position) -> WorldState {
        let mut entities = EntitiesState::default();
        entities.player.place(Position::new(2, 2));
        entities.enemies.push(MobileEntity::enemy(
            EntityId(5),
            enemy_at,
            0.1,
            EnemyState::new(1, 20),
        ));
        WorldState::new(MapDimensions::new(8, 8), Vec::new(), entities)
    }

    #[test]
    fn alternates_move_and_skip() {
        let config = GameConfig::default();
        let mut world = world(Position::new(5, 2));
        let mut food = 50;
        let mut events = Vec::new();
        let mut ctx = ActionContext::new(&mut world, &config, &mut food, &mut events);

        let first = activate(&mut ctx, EntityId(5)).unwrap();
        assert!(matches!(
            first,
            EnemyActivation::Acted {
                outcome: MoveOutcome::Moved { to, .. },
                attacked: None
            } if to == Position::new(4, 2)
        ));
        assert_eq!(activate(&mut ctx, EntityId(5)).unwrap(), EnemyActivation::Skipped);
        // third activation acts again; the motion is still running so it stalls
        assert!(matches!(
            activate(&mut ctx, EntityId(5)).unwrap(),
            EnemyActivation::Acted {
                outcome: MoveOutcome::Busy,
                ..
            }
        ));
    }

    #[test]
    fn bumping_the_player_deals_damage() {
        let config = GameConfig::default();
        let mut world = world(Position::new(2, 3));
        let mut food = 15;
        let mut events = Vec::new();
        let mut ctx = ActionContext::new(&mut world, &config, &mut food, &mut events);

        let result = activate(&mut ctx, EntityId(5)).unwrap();
        assert!(result.starved_player());
        assert_eq!(food, -5);
        assert!(events.contains(&GameEvent::FoodChanged {
            total: -5,
            change: FoodChange::Lost(20),
        }));
        assert!(events.contains(&GameEvent::Animation {
            entity: EntityId::PLAYER,
            trigger: AnimationTrigger::PlayerHit,
        }));
        assert!(events.contains(&GameEvent::Animation {
            entity: EntityId(5),
            trigger: AnimationTrigger::EnemyAttack,
        }));
    }

    #[test]
    fn the_player_is_not_an_enemy() {
        let config = GameConfig::default();
        let mut world = world(Position::new(4, 4));
        let mut food = 15;
        let mut events = Vec::new();
        let mut ctx = ActionContext::new(&mut world, &config, &mut food, &mut events);
        assert_eq!(
            activate(&mut ctx, EntityId::PLAYER),
            Err(ActionError::NotAnEnemy(EntityId::PLAYER))
        );
        assert_eq!(
            activate(&mut ctx, EntityId(99)),
            Err(ActionError::MoverNotFound(EntityId(99)))
        );
    }
}
