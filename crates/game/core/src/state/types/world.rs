use bitflags::bitflags;

use crate::env::{MapDimensions, StaticTile};

use super::{EntitiesState, EntityId, PickupKind, Position};

bitflags! {
    /// Physics layers a collider can live on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LayerMask: u8 {
        /// Solid colliders that stop movement.
        const BLOCKING = 0b01;
        /// Overlap-only colliders (pickups, exit).
        const TRIGGER = 0b10;
    }
}

/// What a collider belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Obstruction {
    OuterWall,
    Wall(EntityId),
    Player(EntityId),
    Enemy(EntityId),
    Pickup(EntityId, PickupKind),
    Exit(EntityId),
}

impl Obstruction {
    pub fn layer(self) -> LayerMask {
        match self {
            Obstruction::Pickup(..) | Obstruction::Exit(_) => LayerMask::TRIGGER,
            _ => LayerMask::BLOCKING,
        }
    }

    pub fn entity(self) -> Option<EntityId> {
        match self {
            Obstruction::OuterWall => None,
            Obstruction::Wall(id)
            | Obstruction::Player(id)
            | Obstruction::Enemy(id)
            | Obstruction::Pickup(id, _)
            | Obstruction::Exit(id) => Some(id),
        }
    }
}

/// Result of a successful linecast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    pub position: Position,
    pub obstruction: Obstruction,
}

/// Everything that exists in the current level.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub dimensions: MapDimensions,
    /// Floor and outer-wall tiles with their cosmetic variants.
    pub tiles: Vec<StaticTile>,
    pub entities: EntitiesState,
}

impl WorldState {
    pub fn new(dimensions: MapDimensions, tiles: Vec<StaticTile>, entities: EntitiesState) -> Self {
        Self {
            dimensions,
            tiles,
            entities,
        }
    }

    /// Lists colliders on `mask` occupying `cell`.
    pub fn colliders_at(&self, cell: Position, mask: LayerMask) -> Vec<Obstruction> {
        let mut found = Vec::new();
        let entities = &self.entities;

        if mask.contains(LayerMask::BLOCKING) {
            if self.dimensions.is_border(cell) {
                found.push(Obstruction::OuterWall);
            }
            found.extend(
                entities
                    .active_walls()
                    .filter(|wall| wall.position == cell)
                    .map(|wall| Obstruction::Wall(wall.id)),
            );
            found.extend(
                entities
                    .all_mobiles()
                    .filter(|mobile| mobile.cell == cell)
                    .map(|mobile| {
                        if mobile.id.is_player() {
                            Obstruction::Player(mobile.id)
                        } else {
                            Obstruction::Enemy(mobile.id)
                        }
                    }),
            );
        }

        if mask.contains(LayerMask::TRIGGER) {
            found.extend(
                entities
                    .active_pickups()
                    .filter(|pickup| pickup.position == cell)
                    .map(|pickup| Obstruction::Pickup(pickup.id, pickup.kind)),
            );
            if entities.exit.position == cell {
                found.push(Obstruction::Exit(entities.exit.id));
            }
        }

        found
    }

    /// Triggers overlapping `cell`.
    pub fn triggers_at(&self, cell: Position) -> Vec<Obstruction> {
        self.colliders_at(cell, LayerMask::TRIGGER)
    }

    /// Casts a segment from `start` to `end` and reports the first collider
    /// on `mask`, skipping every collider owned by `ignore`.
    ///
    /// Cells are visited in order from `start`; a zero-length segment only
    /// tests the start cell.
    pub fn linecast(
        &self,
        start: Position,
        end: Position,
        mask: LayerMask,
        ignore: EntityId,
    ) -> Option<Hit> {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let steps = dx.abs().max(dy.abs());

        for step in 0..=steps {
            let cell = if steps == 0 {
                start
            } else {
                let t = step as f32 / steps as f32;
                Position::new(
                    start.x + (dx as f32 * t).round() as i32,
                    start.y + (dy as f32 * t).round() as i32,
                )
            };

            let hit = self
                .colliders_at(cell, mask)
                .into_iter()
                .find(|obstruction| obstruction.entity() != Some(ignore));
            if let Some(obstruction) = hit {
                return Some(Hit {
                    position: cell,
                    obstruction,
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EnemyState, ExitState, MobileEntity, PickupState, WallState};

    fn world() -> WorldState {
        let mut entities = EntitiesState::default();
        entities.player.place(Position::new(0, 0));
        entities.walls.push(WallState::new(EntityId(1), Position::new(1, 0), 3, 0));
        entities
            .pickups
            .push(PickupState::new(EntityId(2), Position::new(0, 1), PickupKind::Soda));
        entities.enemies.push(MobileEntity::enemy(
            EntityId(3),
            Position::new(2, 2),
            0.1,
            EnemyState::new(0, 10),
        ));
        entities.exit = ExitState {
            id: EntityId(4),
            position: Position::new(7, 7),
        };
        WorldState::new(MapDimensions::new(8, 8), Vec::new(), entities)
    }

    #[test]
    fn linecast_ignores_the_caster() {
        let world = world();
        let hit = world.linecast(
            Position::new(0, 0),
            Position::new(1, 0),
            LayerMask::BLOCKING,
            EntityId::PLAYER,
        );
        assert_eq!(
            hit,
            Some(Hit {
                position: Position::new(1, 0),
                obstruction: Obstruction::Wall(EntityId(1)),
            })
        );
    }

    #[test]
    fn linecast_hits_outer_wall_ring() {
        let world = world();
        let hit = world.linecast(
            Position::new(0, 0),
            Position::new(-1, 0),
            LayerMask::BLOCKING,
            EntityId::PLAYER,
        );
        assert_eq!(hit.map(|h| h.obstruction), Some(Obstruction::OuterWall));
    }

    #[test]
    fn triggers_do_not_block() {
        let world = world();
        let hit = world.linecast(
            Position::new(0, 0),
            Position::new(0, 1),
            LayerMask::BLOCKING,
            EntityId::PLAYER,
        );
        assert_eq!(hit, None);
        assert_eq!(
            world.triggers_at(Position::new(0, 1)),
            vec![Obstruction::Pickup(EntityId(2), PickupKind::Soda)]
        );
        assert_eq!(
            world.triggers_at(Position::new(7, 7)),
            vec![Obstruction::Exit(EntityId(4))]
        );
    }

    #[test]
    fn destroyed_walls_leave_the_blocking_layer() {
        let mut world = world();
        if let Some(wall) = world.entities.wall_mut(EntityId(1)) {
            wall.damage(3);
        }
        assert!(
            world
                .linecast(
                    Position::new(0, 0),
                    Position::new(1, 0),
                    LayerMask::BLOCKING,
                    EntityId::PLAYER,
                )
                .is_none()
        );
    }

    #[test]
    fn enemies_see_the_player() {
        let world = world();
        let hit = world.linecast(
            Position::new(1, 1),
            Position::new(0, 1),
            LayerMask::BLOCKING,
            EntityId(3),
        );
        assert_eq!(hit, None);
        let hit = world.linecast(
            Position::new(0, 1),
            Position::new(0, 0),
            LayerMask::BLOCKING,
            EntityId(3),
        );
        assert_eq!(
            hit.map(|h| h.obstruction),
            Some(Obstruction::Player(EntityId::PLAYER))
        );
    }
}
