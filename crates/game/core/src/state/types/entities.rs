use super::{EntityId, Motion, Position, Vec2};

/// Aggregate state for every entity placed in the current level.
///
/// `enemies` keeps registration order; the turn scheduler's roster mirrors it.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: MobileEntity,
    pub enemies: Vec<MobileEntity>,
    pub walls: Vec<WallState>,
    pub pickups: Vec<PickupState>,
    pub exit: ExitState,
}

impl EntitiesState {
    /// Returns a mobile entity by ID (player or enemy).
    pub fn mobile(&self, id: EntityId) -> Option<&MobileEntity> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    /// Returns a mutable mobile entity by ID (player or enemy).
    pub fn mobile_mut(&mut self, id: EntityId) -> Option<&mut MobileEntity> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    /// Returns an iterator over all mobile entities (player + enemies).
    pub fn all_mobiles(&self) -> impl Iterator<Item = &MobileEntity> {
        std::iter::once(&self.player).chain(self.enemies.iter())
    }

    /// Returns a mutable iterator over all mobile entities (player + enemies).
    pub fn all_mobiles_mut(&mut self) -> impl Iterator<Item = &mut MobileEntity> {
        std::iter::once(&mut self.player).chain(self.enemies.iter_mut())
    }

    pub fn wall(&self, id: EntityId) -> Option<&WallState> {
        self.walls.iter().find(|wall| wall.id == id)
    }

    pub fn wall_mut(&mut self, id: EntityId) -> Option<&mut WallState> {
        self.walls.iter_mut().find(|wall| wall.id == id)
    }

    pub fn active_walls(&self) -> impl Iterator<Item = &WallState> {
        self.walls.iter().filter(|wall| wall.active)
    }

    pub fn active_pickups(&self) -> impl Iterator<Item = &PickupState> {
        self.pickups.iter().filter(|pickup| pickup.active)
    }
}

/// Per-kind data of a mobile entity.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MobileKind {
    #[default]
    Player,
    Enemy(EnemyState),
}

/// Autonomous actor bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    /// Index into the configured enemy templates (also the sprite choice).
    pub template: u8,
    /// Food removed from the player per successful attack.
    pub damage: i32,
    /// When set, the next activation is consumed without acting.
    pub skip_move: bool,
}

impl EnemyState {
    pub fn new(template: u8, damage: i32) -> Self {
        Self {
            template,
            damage,
            skip_move: false,
        }
    }
}

/// Shared movement data for the player and every enemy.
///
/// `cell` is the collider position: it jumps to the destination the moment a
/// motion begins, while `motion` carries the smooth visual position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MobileEntity {
    pub id: EntityId,
    pub cell: Position,
    pub motion: Motion,
    pub kind: MobileKind,
    /// Disabled entities ignore turns (the player after reaching the exit).
    pub enabled: bool,
}

impl MobileEntity {
    pub fn player(cell: Position, move_time: f32) -> Self {
        Self {
            id: EntityId::PLAYER,
            cell,
            motion: Motion::new(cell, move_time),
            kind: MobileKind::Player,
            enabled: true,
        }
    }

    pub fn enemy(id: EntityId, cell: Position, move_time: f32, enemy: EnemyState) -> Self {
        Self {
            id,
            cell,
            motion: Motion::new(cell, move_time),
            kind: MobileKind::Enemy(enemy),
            enabled: true,
        }
    }

    /// Current continuous position.
    pub fn position(&self) -> Vec2 {
        self.motion.position()
    }

    pub fn move_time(&self) -> f32 {
        self.motion.move_time()
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    pub fn enemy_mut(&mut self) -> Option<&mut EnemyState> {
        match &mut self.kind {
            MobileKind::Enemy(enemy) => Some(enemy),
            MobileKind::Player => None,
        }
    }

    /// Moves the collider onto `cell` and starts gliding the sprite there.
    pub fn begin_move(&mut self, cell: Position) {
        self.cell = cell;
        self.motion.begin(cell);
    }

    /// Moves the collider and the visual position onto `cell` at once.
    pub fn place(&mut self, cell: Position) {
        self.cell = cell;
        self.motion.place(cell);
    }
}

impl Default for MobileEntity {
    fn default() -> Self {
        Self::player(Position::ORIGIN, 0.1)
    }
}

/// Destructible wall obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallState {
    pub id: EntityId,
    pub position: Position,
    pub hit_points: i32,
    pub variant: u8,
    /// Set after the first hit; the renderer swaps to the damaged sprite.
    pub damaged: bool,
    pub active: bool,
}

impl WallState {
    pub fn new(id: EntityId, position: Position, hit_points: i32, variant: u8) -> Self {
        Self {
            id,
            position,
            hit_points,
            variant,
            damaged: false,
            active: true,
        }
    }

    /// Applies `loss` hit points; returns true if this destroyed the wall.
    pub fn damage(&mut self, loss: i32) -> bool {
        self.damaged = true;
        self.hit_points -= loss;
        if self.hit_points <= 0 {
            self.active = false;
            return true;
        }
        false
    }
}

/// Consumable pickup categories.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PickupKind {
    Food,
    Soda,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupState {
    pub id: EntityId,
    pub position: Position,
    pub kind: PickupKind,
    pub active: bool,
}

impl PickupState {
    pub fn new(id: EntityId, position: Position, kind: PickupKind) -> Self {
        Self {
            id,
            position,
            kind,
            active: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExitState {
    pub id: EntityId,
    pub position: Position,
}
