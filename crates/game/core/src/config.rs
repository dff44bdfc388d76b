//! Game configuration and tunable parameters.
//!
//! Every numeric knob of the simulation lives here: board size, placement
//! counts, timing, damage and pickup values. The session validates a config
//! once per level before any tile is laid, so a bad config never produces a
//! partially built board.

use crate::env::MapDimensions;
use crate::state::Position;

/// Errors detected while validating a [`GameConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: u32,
        max: u32,
    },

    #[error("board {columns}x{rows} is too small (minimum 3x3)")]
    BoardTooSmall { columns: u32, rows: u32 },

    #[error("{name} must have at least one variant")]
    NoVariants { name: &'static str },

    #[error("at least one enemy template is required")]
    NoEnemyTemplates,

    #[error("{count} enemy templates configured (at most 256)")]
    TooManyEnemyTemplates { count: usize },

    #[error("{name} must be finite and non-negative (got {value})")]
    InvalidDuration { name: &'static str, value: f32 },

    #[error("pitch range is inverted: low {low} > high {high}")]
    InvertedPitch { low: f32, high: f32 },

    #[error(
        "level {level} requests up to {requested} placements but the board interior holds {capacity}"
    )]
    InsufficientCells {
        level: u32,
        requested: u64,
        capacity: u64,
    },

    #[error("player start {start} must be a free-lane cell inside the outer walls, away from the exit")]
    InvalidPlayerStart { start: Position },
}

/// Inclusive `[min, max]` bound for a random placement count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    fn validate(self, name: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Board dimensions and placement counts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub columns: u32,
    pub rows: u32,
    pub walls: CountRange,
    pub pickups: CountRange,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 8,
            walls: CountRange::new(5, 9),
            pickups: CountRange::new(1, 5),
        }
    }
}

/// Number of cosmetic variants per tile category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileVariants {
    pub floor: u8,
    pub outer_wall: u8,
    pub wall: u8,
}

impl Default for TileVariants {
    fn default() -> Self {
        Self {
            floor: 8,
            outer_wall: 3,
            wall: 8,
        }
    }
}

/// Delays and durations, in seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Presentation delay spent in the setup phase before the first turn.
    pub level_start_delay: f32,
    /// Delay inserted before the first autonomous activation of a turn.
    pub turn_delay: f32,
    /// Delay between reaching the exit and generating the next level.
    pub restart_level_delay: f32,
    pub player_move_time: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            level_start_delay: 2.0,
            turn_delay: 0.1,
            restart_level_delay: 1.0,
            player_move_time: 0.1,
        }
    }
}

/// Controlling actor tuning.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    pub starting_food: i32,
    pub points_per_food: i32,
    pub points_per_soda: i32,
    pub wall_damage: i32,
    pub start: Position,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            starting_food: 100,
            points_per_food: 10,
            points_per_soda: 20,
            wall_damage: 1,
            start: Position::ORIGIN,
        }
    }
}

/// Blueprint for one kind of autonomous actor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    /// Food removed from the player on a successful attack.
    pub damage: i32,
    pub move_time: f32,
}

/// Pitch window handed to the audio sink with randomized cues.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PitchRange {
    pub low: f32,
    pub high: f32,
}

impl Default for PitchRange {
    fn default() -> Self {
        Self {
            low: 0.95,
            high: 1.05,
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub board: BoardConfig,
    pub tiles: TileVariants,
    pub timing: TimingConfig,
    pub player: PlayerConfig,
    pub wall_hit_points: i32,
    pub enemies: Vec<EnemyTemplate>,
    pub audio: PitchRange,
    /// Optional survival countdown in seconds. `None` disables the timer.
    pub time_limit: Option<f32>,
}

impl GameConfig {
    pub const DEFAULT_WALL_HIT_POINTS: i32 = 3;

    pub fn new() -> Self {
        Self {
            board: BoardConfig::default(),
            tiles: TileVariants::default(),
            timing: TimingConfig::default(),
            player: PlayerConfig::default(),
            wall_hit_points: Self::DEFAULT_WALL_HIT_POINTS,
            enemies: vec![
                EnemyTemplate {
                    damage: 10,
                    move_time: 0.1,
                },
                EnemyTemplate {
                    damage: 20,
                    move_time: 0.1,
                },
            ],
            audio: PitchRange::default(),
            time_limit: None,
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.board.columns, self.board.rows)
    }

    /// Checks every invariant the generator and scheduler rely on for `level`.
    ///
    /// Capacity is checked against the maximum counts so that no roll of the
    /// placement ranges can exhaust the cell pool.
    pub fn validate_for_level(&self, level: u32) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.columns < 3 || board.rows < 3 {
            return Err(ConfigError::BoardTooSmall {
                columns: board.columns,
                rows: board.rows,
            });
        }
        board.walls.validate("wall count")?;
        board.pickups.validate("pickup count")?;

        for (name, count) in [
            ("floor tiles", self.tiles.floor),
            ("outer wall tiles", self.tiles.outer_wall),
            ("wall tiles", self.tiles.wall),
        ] {
            if count == 0 {
                return Err(ConfigError::NoVariants { name });
            }
        }

        if self.enemies.is_empty() {
            return Err(ConfigError::NoEnemyTemplates);
        }
        if self.enemies.len() > usize::from(u8::MAX) + 1 {
            return Err(ConfigError::TooManyEnemyTemplates {
                count: self.enemies.len(),
            });
        }

        let timing = &self.timing;
        let mut durations = vec![
            ("level_start_delay", timing.level_start_delay),
            ("turn_delay", timing.turn_delay),
            ("restart_level_delay", timing.restart_level_delay),
            ("player_move_time", timing.player_move_time),
        ];
        durations.extend(self.enemies.iter().map(|e| ("enemy move_time", e.move_time)));
        if let Some(limit) = self.time_limit {
            durations.push(("time_limit", limit));
        }
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { name, value });
            }
        }

        if self.audio.low > self.audio.high {
            return Err(ConfigError::InvertedPitch {
                low: self.audio.low,
                high: self.audio.high,
            });
        }

        let dimensions = self.dimensions();
        let capacity = dimensions.interior_capacity();
        let requested = u64::from(board.walls.max)
            + u64::from(board.pickups.max)
            + u64::from(enemy_count_for_level(level));
        if requested > capacity {
            return Err(ConfigError::InsufficientCells {
                level,
                requested,
                capacity,
            });
        }

        let start = self.player.start;
        if !dimensions.contains(start) || dimensions.is_interior(start) || start == dimensions.exit() {
            return Err(ConfigError::InvalidPlayerStart { start });
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of autonomous actors spawned on `level`: `floor(log2(level))`.
///
/// Level 0 is treated as level 1.
pub fn enemy_count_for_level(level: u32) -> u32 {
    level.max(1).ilog2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_count_follows_floor_log2() {
        let expected = [(1, 0), (2, 1), (3, 1), (4, 2), (7, 2), (8, 3), (15, 3), (16, 4)];
        for (level, count) in expected {
            assert_eq!(enemy_count_for_level(level), count, "level {level}");
        }
    }

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        for level in 1..=64 {
            config.validate_for_level(level).unwrap();
        }
    }

    #[test]
    fn rejects_inverted_counts() {
        let mut config = GameConfig::default();
        config.board.walls = CountRange::new(9, 5);
        assert_eq!(
            config.validate_for_level(1),
            Err(ConfigError::InvertedRange {
                name: "wall count",
                min: 9,
                max: 5
            })
        );
    }

    #[test]
    fn rejects_placements_beyond_interior() {
        let mut config = GameConfig::default();
        config.board.columns = 4;
        config.board.rows = 4;
        // interior is 2x2 = 4 cells
        config.board.walls = CountRange::new(1, 3);
        config.board.pickups = CountRange::new(1, 1);
        assert!(config.validate_for_level(1).is_ok());
        assert!(matches!(
            config.validate_for_level(2),
            Err(ConfigError::InsufficientCells {
                requested: 5,
                capacity: 4,
                ..
            })
        ));
    }

    #[test]
    fn huge_placement_bounds_are_rejected_not_wrapped() {
        let mut config = GameConfig::default();
        config.board.walls = CountRange::new(0, u32::MAX);
        config.board.pickups = CountRange::new(0, 1);
        assert!(matches!(
            config.validate_for_level(1),
            Err(ConfigError::InsufficientCells {
                requested: 4_294_967_296,
                capacity: 36,
                ..
            })
        ));
    }

    #[test]
    fn enemy_templates_fit_a_byte() {
        let mut config = GameConfig::default();
        let template = config.enemies[0];
        config.enemies = vec![template; 256];
        assert!(config.validate_for_level(4).is_ok());
        config.enemies.push(template);
        assert!(matches!(
            config.validate_for_level(4),
            Err(ConfigError::TooManyEnemyTemplates { count: 257 })
        ));
    }

    #[test]
    fn player_start_must_avoid_scattered_cells() {
        let mut config = GameConfig::default();
        config.player.start = Position::new(3, 3);
        assert!(matches!(
            config.validate_for_level(1),
            Err(ConfigError::InvalidPlayerStart { .. })
        ));
        config.player.start = Position::new(0, 5);
        assert!(config.validate_for_level(1).is_ok());
    }

    #[test]
    fn rejects_negative_move_time() {
        let mut config = GameConfig::default();
        config.enemies[1].move_time = -0.5;
        assert!(matches!(
            config.validate_for_level(1),
            Err(ConfigError::InvalidDuration {
                name: "enemy move_time",
                ..
            })
        ));
    }
}
