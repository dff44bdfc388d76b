use crate::config::{ConfigError, EnemyTemplate, GameConfig, TileVariants, enemy_count_for_level};
use crate::env::{MapDimensions, RngOracle, SeededRng, StaticTile, TerrainKind};
use crate::state::{
    EnemyState, EntitiesState, EntityId, ExitState, MobileEntity, PickupKind, PickupState,
    Position, WallState, WorldState,
};

use super::{GenerationError, RandomCellPool};

/// Kind of feature scattered over the board.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeatureKind {
    Wall { variant: u8 },
    Pickup(PickupKind),
    EnemySpawn { template: u8, blueprint: EnemyTemplate },
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedFeature {
    pub kind: FeatureKind,
    pub position: Position,
}

/// Static layout of one level, ready to be instantiated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelLayout {
    pub level: u32,
    pub dimensions: MapDimensions,
    pub tiles: Vec<StaticTile>,
    /// Features in placement order: walls, pickups, enemy spawns, exit.
    pub features: Vec<PlacedFeature>,
}

impl LevelLayout {
    pub fn walls(&self) -> impl Iterator<Item = &PlacedFeature> {
        self.features
            .iter()
            .filter(|f| matches!(f.kind, FeatureKind::Wall { .. }))
    }

    pub fn pickups(&self) -> impl Iterator<Item = &PlacedFeature> {
        self.features
            .iter()
            .filter(|f| matches!(f.kind, FeatureKind::Pickup(_)))
    }

    pub fn enemy_spawns(&self) -> impl Iterator<Item = &PlacedFeature> {
        self.features
            .iter()
            .filter(|f| matches!(f.kind, FeatureKind::EnemySpawn { .. }))
    }

    pub fn exit(&self) -> Option<Position> {
        self.features
            .iter()
            .find(|f| f.kind == FeatureKind::Exit)
            .map(|f| f.position)
    }

    /// Instantiates the layout as a live world.
    ///
    /// The player takes [`EntityId::PLAYER`]; features get sequential ids in
    /// placement order, so enemies keep their spawn order as registration
    /// order.
    pub fn build_world(&self, config: &GameConfig) -> WorldState {
        let mut entities = EntitiesState {
            player: MobileEntity::player(config.player.start, config.timing.player_move_time),
            ..EntitiesState::default()
        };

        for (index, feature) in self.features.iter().enumerate() {
            let id = EntityId(index as u32 + 1);
            match feature.kind {
                FeatureKind::Wall { variant } => entities.walls.push(WallState::new(
                    id,
                    feature.position,
                    config.wall_hit_points,
                    variant,
                )),
                FeatureKind::Pickup(kind) => entities
                    .pickups
                    .push(PickupState::new(id, feature.position, kind)),
                FeatureKind::EnemySpawn {
                    template,
                    blueprint,
                } => entities.enemies.push(MobileEntity::enemy(
                    id,
                    feature.position,
                    blueprint.move_time,
                    EnemyState::new(template, blueprint.damage),
                )),
                FeatureKind::Exit => {
                    entities.exit = ExitState {
                        id,
                        position: feature.position,
                    }
                }
            }
        }

        WorldState::new(self.dimensions, self.tiles.clone(), entities)
    }
}

/// Builds levels from a [`GameConfig`].
///
/// The generator owns its cell pool so the allocation is reused across
/// levels; the pool is rebuilt from scratch on every call.
#[derive(Clone, Debug, Default)]
pub struct LevelGenerator {
    pool: RandomCellPool,
}

impl LevelGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells still unassigned after the last generation pass.
    pub fn remaining_cells(&self) -> usize {
        self.pool.len()
    }

    /// Generates level `level`.
    ///
    /// The config is validated first; on error nothing is laid out.
    pub fn generate<R: RngOracle>(
        &mut self,
        level: u32,
        config: &GameConfig,
        rng: &mut SeededRng<R>,
    ) -> Result<LevelLayout, GenerationError> {
        config.validate_for_level(level)?;

        let dimensions = config.dimensions();
        let tiles = lay_board(dimensions, &config.tiles, rng);

        self.pool.reset(dimensions);
        let mut features = Vec::new();

        let walls = config.board.walls;
        for _ in 0..rng.range_inclusive(walls.min, walls.max) {
            let position = self.pool.draw(rng)?;
            let variant = rng.index(config.tiles.wall as usize) as u8;
            features.push(PlacedFeature {
                kind: FeatureKind::Wall { variant },
                position,
            });
        }

        let pickups = config.board.pickups;
        for _ in 0..rng.range_inclusive(pickups.min, pickups.max) {
            let position = self.pool.draw(rng)?;
            let kind = if rng.index(2) == 0 {
                PickupKind::Food
            } else {
                PickupKind::Soda
            };
            features.push(PlacedFeature {
                kind: FeatureKind::Pickup(kind),
                position,
            });
        }

        for _ in 0..enemy_count_for_level(level) {
            let position = self.pool.draw(rng)?;
            let index = rng.index(config.enemies.len());
            let template = u8::try_from(index).map_err(|_| ConfigError::TooManyEnemyTemplates {
                count: config.enemies.len(),
            })?;
            features.push(PlacedFeature {
                kind: FeatureKind::EnemySpawn {
                    template,
                    blueprint: config.enemies[index],
                },
                position,
            });
        }

        features.push(PlacedFeature {
            kind: FeatureKind::Exit,
            position: dimensions.exit(),
        });

        Ok(LevelLayout {
            level,
            dimensions,
            tiles,
            features,
        })
    }
}

/// Floor under every cell, outer walls on the ring.
fn lay_board<R: RngOracle>(
    dimensions: MapDimensions,
    variants: &TileVariants,
    rng: &mut SeededRng<R>,
) -> Vec<StaticTile> {
    dimensions
        .all_cells()
        .map(|position| {
            let (terrain, count) = if dimensions.is_border(position) {
                (TerrainKind::OuterWall, variants.outer_wall)
            } else {
                (TerrainKind::Floor, variants.floor)
            };
            StaticTile::new(position, terrain, rng.index(count as usize) as u8)
        })
        .collect()
}
